//! Retained view tree for one entity.
//!
//! A [`Container`] is what the dispatcher clears and rebuilds. It holds the
//! nodes produced by the routing core (view-switch links, controls) and by
//! renderers (panels, rows). Links and controls carry their activation
//! handlers.

use std::fmt;
use std::rc::Rc;

use vista_nav::NavStore;

/// Activation handler for a link. Receives the link's own identifier.
pub type LinkHandler = Rc<dyn Fn(&str, &mut NavStore)>;

/// Activation handler for a control button.
pub type ControlHandler = Rc<dyn Fn()>;

/// Identifies one build of a container.
///
/// Renderers that finish loading after navigation moved on compare their
/// ticket against [`Container::is_current`] before painting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
	pub entity: String,
	pub generation: u64,
}

/// A navigable link.
#[derive(Clone)]
pub struct Link {
	/// Identifier handed to the handler (`search`, `details`, or an entity name).
	pub id: String,
	pub label: String,
	pub icon: Option<String>,
	pub href: Option<String>,
	handler: LinkHandler,
}

impl Link {
	pub fn new(id: impl Into<String>, label: impl Into<String>, handler: LinkHandler) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			icon: None,
			href: None,
			handler,
		}
	}

	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	pub fn with_href(mut self, href: impl Into<String>) -> Self {
		self.href = Some(href.into());
		self
	}

	/// Runs the handler with this link's identifier.
	pub fn activate(&self, nav: &mut NavStore) {
		(self.handler)(&self.id, nav);
	}
}

impl fmt::Debug for Link {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Link")
			.field("id", &self.id)
			.field("label", &self.label)
			.field("icon", &self.icon)
			.field("href", &self.href)
			.finish_non_exhaustive()
	}
}

/// Ordered list of links rendered together.
#[derive(Debug, Clone)]
pub struct LinkList {
	pub class: &'static str,
	pub links: Vec<Link>,
}

/// Buttons created by the routing core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
	/// Opens the add dialog (search facet).
	Add,
	/// Discards unsaved edits (details facet).
	Reset,
	/// Persists the cached record (details facet).
	Update,
}

impl ControlKind {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Add => "add",
			Self::Reset => "reset",
			Self::Update => "update",
		}
	}
}

impl fmt::Display for ControlKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone)]
pub struct Control {
	pub kind: ControlKind,
	pub label: String,
	handler: ControlHandler,
}

impl Control {
	pub fn new(kind: ControlKind, label: impl Into<String>, handler: ControlHandler) -> Self {
		Self {
			kind,
			label: label.into(),
			handler,
		}
	}

	pub fn activate(&self) {
		(self.handler)();
	}
}

impl fmt::Debug for Control {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Control")
			.field("kind", &self.kind)
			.field("label", &self.label)
			.finish_non_exhaustive()
	}
}

/// Renderer-owned block of content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
	pub class: String,
	pub lines: Vec<String>,
}

impl Panel {
	pub fn new(class: impl Into<String>) -> Self {
		Self {
			class: class.into(),
			lines: Vec::new(),
		}
	}

	pub fn line(mut self, line: impl Into<String>) -> Self {
		self.lines.push(line.into());
		self
	}
}

#[derive(Debug, Clone)]
pub enum Cell {
	Text(String),
	Links(Vec<Link>),
}

/// One search result row.
#[derive(Debug, Clone, Default)]
pub struct Row {
	pub cells: Vec<Cell>,
}

impl Row {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.cells.push(Cell::Text(text.into()));
		self
	}

	pub fn links(&self) -> impl Iterator<Item = &Link> {
		self.cells.iter().flat_map(|cell| {
			let links: &[Link] = match cell {
				Cell::Links(links) => links,
				Cell::Text(_) => &[],
			};
			links
		})
	}
}

#[derive(Debug, Clone)]
pub enum Node {
	Links(LinkList),
	Control(Control),
	Panel(Panel),
	Row(Row),
}

impl From<LinkList> for Node {
	fn from(list: LinkList) -> Self {
		Self::Links(list)
	}
}

impl From<Control> for Node {
	fn from(control: Control) -> Self {
		Self::Control(control)
	}
}

impl From<Panel> for Node {
	fn from(panel: Panel) -> Self {
		Self::Panel(panel)
	}
}

impl From<Row> for Node {
	fn from(row: Row) -> Self {
		Self::Row(row)
	}
}

/// View container bound to one entity.
#[derive(Debug)]
pub struct Container {
	entity: String,
	generation: u64,
	nodes: Vec<Node>,
}

impl Container {
	pub fn new(entity: impl Into<String>) -> Self {
		Self {
			entity: entity.into(),
			generation: 0,
			nodes: Vec::new(),
		}
	}

	pub fn entity(&self) -> &str {
		&self.entity
	}

	/// Drops all content and starts a new generation.
	pub fn clear(&mut self) {
		self.nodes.clear();
		self.generation += 1;
	}

	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn ticket(&self) -> LoadTicket {
		LoadTicket {
			entity: self.entity.clone(),
			generation: self.generation,
		}
	}

	/// True if `ticket` was issued for the current build of this container.
	pub fn is_current(&self, ticket: &LoadTicket) -> bool {
		ticket.entity == self.entity && ticket.generation == self.generation
	}

	pub fn append(&mut self, node: impl Into<Node>) {
		self.nodes.push(node.into());
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The view-switch list, if this build has one.
	pub fn view_links(&self) -> Option<&LinkList> {
		self.nodes.iter().find_map(|node| match node {
			Node::Links(list) => Some(list),
			_ => None,
		})
	}

	pub fn controls(&self) -> impl Iterator<Item = &Control> {
		self.nodes.iter().filter_map(|node| match node {
			Node::Control(control) => Some(control),
			_ => None,
		})
	}

	pub fn control(&self, kind: ControlKind) -> Option<&Control> {
		self.controls().find(|control| control.kind == kind)
	}

	pub fn panels(&self) -> impl Iterator<Item = &Panel> {
		self.nodes.iter().filter_map(|node| match node {
			Node::Panel(panel) => Some(panel),
			_ => None,
		})
	}

	pub fn rows(&self) -> impl Iterator<Item = &Row> {
		self.nodes.iter().filter_map(|node| match node {
			Node::Row(row) => Some(row),
			_ => None,
		})
	}

	/// Every link in the container, in node order.
	pub fn links(&self) -> impl Iterator<Item = &Link> {
		self.nodes.iter().flat_map(node_links)
	}

	/// First link with identifier `id`.
	pub fn link(&self, id: &str) -> Option<&Link> {
		self.links().find(|link| link.id == id)
	}
}

fn node_links(node: &Node) -> Box<dyn Iterator<Item = &Link> + '_> {
	match node {
		Node::Links(list) => Box::new(list.links.iter()),
		Node::Row(row) => Box::new(row.links()),
		Node::Control(_) | Node::Panel(_) => Box::new(std::iter::empty()),
	}
}

impl fmt::Display for Container {
	/// Indented outline of the container, one node per line.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "[{}] generation {}", self.entity, self.generation)?;
		for node in &self.nodes {
			match node {
				Node::Links(list) => {
					let ids: Vec<String> = list
						.links
						.iter()
						.map(|link| format!("{} ({})", link.label, link.id))
						.collect();
					writeln!(f, "  {}: {}", list.class, ids.join(" | "))?;
				}
				Node::Control(control) => writeln!(f, "  button {}: {}", control.kind, control.label)?,
				Node::Panel(panel) => {
					writeln!(f, "  {}", panel.class)?;
					for line in &panel.lines {
						writeln!(f, "    {line}")?;
					}
				}
				Node::Row(row) => {
					let cells: Vec<String> = row
						.cells
						.iter()
						.map(|cell| match cell {
							Cell::Text(text) => text.clone(),
							Cell::Links(links) => {
								let ids: Vec<&str> = links.iter().map(|link| link.id.as_str()).collect();
								format!("[{}]", ids.join(" "))
							}
						})
						.collect();
					writeln!(f, "  row: {}", cells.join(" | "))?;
				}
			}
		}
		Ok(())
	}
}
