//! Text renderers: every facet becomes a panel of plain lines.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use vista_entity::{FacetDefinition, Registry};
use vista_facet::{
	AddDialog, AssociationFacet, AssociationList, Container, DetailsFacet, LoadTicket, Panel,
	QuickLinks, Record, Renderers, Row, SearchFacet,
};

/// There is no record store behind the outline: a search for `filter`
/// yields one row whose primary key is `filter`.
pub struct Outline {
	registry: Arc<Registry>,
	quick_links: RefCell<Option<QuickLinks>>,
}

impl Outline {
	pub fn renderers(registry: Arc<Registry>) -> Renderers {
		let outline = Rc::new(Self {
			registry,
			quick_links: RefCell::new(None),
		});
		Renderers {
			search: outline.clone(),
			details: outline.clone(),
			add: outline.clone(),
			association: outline,
		}
	}
}

fn describe(definition: &FacetDefinition) -> String {
	serde_json::to_string(definition.value()).unwrap_or_else(|_| "<unprintable>".into())
}

impl SearchFacet for Outline {
	fn create(&self, entity: &str, definition: &FacetDefinition, container: &mut Container, quick_links: &QuickLinks) {
		*self.quick_links.borrow_mut() = Some(quick_links.clone());
		container.append(
			Panel::new("search")
				.line(format!("entity: {entity}"))
				.line(format!("definition: {}", describe(definition))),
		);
	}

	fn load(&self, container: &mut Container, ticket: LoadTicket, filter: &str) {
		if !container.is_current(&ticket) {
			return;
		}
		container.append(Panel::new("search-results").line(format!("filter: {filter}")));

		let quick_links = self.quick_links.borrow();
		let (Some(quick_links), Some(meta)) = (quick_links.as_ref(), self.registry.entity(&ticket.entity)) else {
			return;
		};
		let mut record = Record::default();
		record.insert(meta.primary_key.clone(), vec![filter.to_string()]);
		let mut row = Row::new().text(filter);
		match quick_links.build(&mut row, &ticket.entity, &record) {
			Ok(()) => container.append(row),
			Err(error) => tracing::warn!(%error, "Search row without quick links"),
		}
	}
}

impl DetailsFacet for Outline {
	fn create(&self, entity: &str, definition: &FacetDefinition, container: &mut Container) {
		container.append(
			Panel::new("details")
				.line(format!("entity: {entity}"))
				.line(format!("definition: {}", describe(definition))),
		);
	}

	fn load(&self, container: &mut Container, ticket: LoadTicket, pkey: &str) {
		if container.is_current(&ticket) {
			container.append(Panel::new("details-record").line(format!("pkey: {pkey}")));
		}
	}

	fn reset(&self, entity: &str) {
		tracing::info!(entity, "Reset details form");
	}

	fn update(&self, entity: &str, primary_key: &str) {
		tracing::info!(entity, primary_key, "Update record");
	}
}

impl AddDialog for Outline {
	fn open(&self, entity: &str, definition: &FacetDefinition) {
		tracing::info!(entity, definition = %describe(definition), "Open add dialog");
	}
}

impl AssociationFacet for Outline {
	fn setup(&self, list: &AssociationList, container: &mut Container, ticket: LoadTicket) {
		if !container.is_current(&ticket) {
			return;
		}
		let mut panel = Panel::new("association")
			.line(format!("{} {} -> {}", list.entity, list.pkey, list.enroll));
		for column in &list.columns {
			panel = panel.line(format!("column {}: {}", column.title, column.column));
		}
		container.append(panel);
	}
}
