//! Shared fixtures: a registry with users and groups, and renderers that
//! record every call the routing core makes.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::json;
use vista_entity::{EntityMeta, FacetDefinition, Registry};
use vista_facet::{
	AddDialog, AssociationFacet, AssociationList, Container, DetailsFacet, LoadTicket, Panel,
	QuickLinks, Record, Renderers, Row, SearchFacet, Session,
};

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// `user` relates to `group` and `netgroup`; `netgroup` has no details form.
pub fn registry() -> Registry {
	let mut registry = Registry::new();
	registry
		.register_entity(EntityMeta::new("user", "Users", "uid").with_members("memberof", ["group", "netgroup"]))
		.unwrap();
	registry
		.register_entity(EntityMeta::new("group", "Groups", "cn").with_members("member", ["user"]))
		.unwrap();
	registry
		.register_entity(EntityMeta::new("netgroup", "Netgroups", "cn"))
		.unwrap();

	for entity in ["user", "group", "netgroup"] {
		registry.register_search(entity, json!({ "search": entity }).into());
		registry.register_add(entity, json!({ "add": entity }).into());
	}
	registry.register_details("user", json!({ "details": "user" }).into());
	registry.register_details("group", json!({ "details": "group" }).into());
	registry
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	SearchCreate { entity: String, definition: serde_json::Value },
	SearchLoad { entity: String, filter: String },
	DetailsCreate { entity: String, definition: serde_json::Value },
	DetailsLoad { entity: String, pkey: String },
	Reset { entity: String },
	Update { entity: String, primary_key: String },
	AddOpen { entity: String, definition: serde_json::Value },
	Associate(AssociationList),
}

/// Records calls and paints canned search results.
#[derive(Default)]
pub struct Recorder {
	calls: RefCell<Vec<Call>>,
	tickets: RefCell<Vec<LoadTicket>>,
	results: RefCell<Vec<Record>>,
	quick_links: RefCell<Option<(String, QuickLinks)>>,
}

impl Recorder {
	pub fn calls(&self) -> Vec<Call> {
		self.calls.borrow().clone()
	}

	pub fn clear(&self) {
		self.calls.borrow_mut().clear();
	}

	pub fn last_ticket(&self) -> Option<LoadTicket> {
		self.tickets.borrow().last().cloned()
	}

	/// Records painted by the next search load.
	pub fn set_results(&self, records: Vec<Record>) {
		*self.results.borrow_mut() = records;
	}

	fn push(&self, call: Call) {
		self.calls.borrow_mut().push(call);
	}
}

impl SearchFacet for Recorder {
	fn create(&self, entity: &str, definition: &FacetDefinition, container: &mut Container, quick_links: &QuickLinks) {
		self.push(Call::SearchCreate {
			entity: entity.into(),
			definition: definition.value().clone(),
		});
		*self.quick_links.borrow_mut() = Some((entity.to_string(), quick_links.clone()));
		container.append(Panel::new("search-controls"));
	}

	fn load(&self, container: &mut Container, ticket: LoadTicket, filter: &str) {
		self.push(Call::SearchLoad {
			entity: ticket.entity.clone(),
			filter: filter.into(),
		});
		let quick_links = self.quick_links.borrow();
		let Some((entity, quick_links)) = quick_links.as_ref() else {
			return;
		};
		for record in self.results.borrow().iter() {
			let label = record.get("uid").or_else(|| record.get("cn")).and_then(|v| v.first());
			let mut row = Row::new().text(label.cloned().unwrap_or_default());
			if quick_links.build(&mut row, entity, record).is_ok() {
				container.append(row);
			}
		}
		self.tickets.borrow_mut().push(ticket);
	}
}

impl DetailsFacet for Recorder {
	fn create(&self, entity: &str, definition: &FacetDefinition, container: &mut Container) {
		self.push(Call::DetailsCreate {
			entity: entity.into(),
			definition: definition.value().clone(),
		});
		container.append(Panel::new("details-form"));
	}

	fn load(&self, _container: &mut Container, ticket: LoadTicket, pkey: &str) {
		self.push(Call::DetailsLoad {
			entity: ticket.entity.clone(),
			pkey: pkey.into(),
		});
		self.tickets.borrow_mut().push(ticket);
	}

	fn reset(&self, entity: &str) {
		self.push(Call::Reset { entity: entity.into() });
	}

	fn update(&self, entity: &str, primary_key: &str) {
		self.push(Call::Update {
			entity: entity.into(),
			primary_key: primary_key.into(),
		});
	}
}

impl AddDialog for Recorder {
	fn open(&self, entity: &str, definition: &FacetDefinition) {
		self.push(Call::AddOpen {
			entity: entity.into(),
			definition: definition.value().clone(),
		});
	}
}

impl AssociationFacet for Recorder {
	fn setup(&self, list: &AssociationList, container: &mut Container, ticket: LoadTicket) {
		self.push(Call::Associate(list.clone()));
		container.append(Panel::new("association-list").line(format!("{} -> {}", list.pkey, list.enroll)));
		self.tickets.borrow_mut().push(ticket);
	}
}

pub fn renderers(recorder: &Rc<Recorder>) -> Renderers {
	Renderers {
		search: recorder.clone(),
		details: recorder.clone(),
		add: recorder.clone(),
		association: recorder.clone(),
	}
}

/// Session with `entities` attached and the initial event handled.
pub fn session(entities: &[&str]) -> (Session, Rc<Recorder>) {
	let recorder = Rc::new(Recorder::default());
	let mut session = Session::new(Arc::new(registry()), renderers(&recorder));
	for entity in entities {
		session.attach(entity).unwrap();
	}
	session.pump();
	(session, recorder)
}

pub fn user_record(uid: &str) -> Record {
	[("uid".to_string(), vec![uid.to_string()])].into_iter().collect()
}
