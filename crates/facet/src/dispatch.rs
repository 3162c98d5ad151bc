//! Facet dispatch: clear a container and build the facet the fragment asks for.

use std::rc::Rc;
use std::sync::Arc;

use vista_entity::Registry;
use vista_nav::{NavStore, Route};

use crate::container::{Container, Control, ControlKind};
use crate::links::{QuickLinks, view_switch};
use crate::render::{AssociationList, Column, Renderers};

/// Builds facets into containers.
pub struct Dispatcher {
	registry: Arc<Registry>,
	renderers: Renderers,
	quick_links: QuickLinks,
}

impl Dispatcher {
	pub fn new(registry: Arc<Registry>, renderers: Renderers) -> Self {
		Self {
			quick_links: QuickLinks::new(Arc::clone(&registry)),
			registry,
			renderers,
		}
	}

	pub fn registry(&self) -> &Arc<Registry> {
		&self.registry
	}

	/// Clears `container` and builds the facet selected for its entity.
	///
	/// Returns the route that was dispatched. An unknown facet leaves the
	/// container empty.
	pub fn dispatch(&self, container: &mut Container, nav: &NavStore) -> Route {
		container.clear();
		let entity = container.entity().to_string();
		let route = Route::decode(&entity, nav.fragment());
		tracing::debug!(
			entity = %entity,
			facet = route.facet_name(),
			generation = container.generation(),
			"Dispatching facet"
		);

		match &route {
			Route::Search { filter } => self.search(&entity, container, filter.as_deref()),
			Route::Details { pkey } => self.details(&entity, container, pkey.as_deref()),
			Route::Associate { pkey, enroll } => self.associate(&entity, container, pkey, enroll),
			Route::Unknown(facet) => {
				tracing::debug!(entity = %entity, %facet, "Unknown facet; container left empty");
			}
		}
		route
	}

	fn search(&self, entity: &str, container: &mut Container, filter: Option<&str>) {
		let Some(definition) = self.registry.search_definition(entity) else {
			tracing::warn!(entity, "No search definition registered");
			return;
		};
		self.renderers
			.search
			.create(entity, definition, container, &self.quick_links);

		let add = Rc::clone(&self.renderers.add);
		let registry = Arc::clone(&self.registry);
		let target = entity.to_string();
		container.append(Control::new(
			ControlKind::Add,
			self.registry.messages().add.as_str(),
			Rc::new(move || match registry.add_definition(&target) {
				Some(definition) => add.open(&target, definition),
				None => tracing::warn!(entity = %target, "No add definition registered"),
			}),
		));

		if let Some(filter) = filter {
			let ticket = container.ticket();
			self.renderers.search.load(container, ticket, filter);
		}
	}

	fn details(&self, entity: &str, container: &mut Container, pkey: Option<&str>) {
		view_switch::build(&self.registry, entity, container, view_switch::switch_handler(entity));

		let Some(definition) = self.registry.details_definition(entity) else {
			tracing::warn!(entity, "No details definition registered");
			return;
		};
		self.renderers.details.create(entity, definition, container);

		let messages = self.registry.messages();
		let details = Rc::clone(&self.renderers.details);
		let target = entity.to_string();
		container.append(Control::new(
			ControlKind::Reset,
			messages.reset.as_str(),
			Rc::new(move || details.reset(&target)),
		));

		let details = Rc::clone(&self.renderers.details);
		let registry = Arc::clone(&self.registry);
		let target = entity.to_string();
		container.append(Control::new(
			ControlKind::Update,
			messages.update.as_str(),
			Rc::new(move || match registry.entity(&target) {
				Some(meta) => details.update(&target, &meta.primary_key),
				None => tracing::warn!(entity = %target, "No metadata; cannot update"),
			}),
		));

		if let Some(pkey) = pkey {
			let ticket = container.ticket();
			self.renderers.details.load(container, ticket, pkey);
		}
	}

	fn associate(&self, entity: &str, container: &mut Container, pkey: &str, enroll: &str) {
		let attribute = self.registry.member_attribute(entity, enroll);
		view_switch::build(&self.registry, entity, container, view_switch::switch_handler(entity));

		let Some(attribute) = attribute else {
			tracing::warn!(entity, enroll, "No attribute links entity to enrolled entity");
			return;
		};

		let list = AssociationList {
			entity: entity.to_string(),
			pkey: pkey.to_string(),
			enroll: enroll.to_string(),
			columns: vec![Column {
				title: self.registry.label(enroll).unwrap_or(enroll).to_string(),
				column: format!("{attribute}_{enroll}"),
			}],
		};
		let ticket = container.ticket();
		self.renderers.association.setup(&list, container, ticket);
	}
}
