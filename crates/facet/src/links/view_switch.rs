//! Facet switch bar: Search, Details, then one link per related entity.

use std::rc::Rc;

use vista_entity::Registry;
use vista_nav::{Facet, NavPatch, NavStore, StateKey};

use crate::container::{Container, Link, LinkHandler, LinkList};

/// CSS-style class of the switch bar.
pub const CLASS: &str = "entity-views";

/// Appends the switch bar for `entity` to `container`.
///
/// Every link shares `on_switch` and passes it its own identifier.
pub fn build(registry: &Registry, entity: &str, container: &mut Container, on_switch: LinkHandler) {
	let messages = registry.messages();
	let mut links = vec![
		Link::new(Facet::Search.as_str(), messages.search.as_str(), Rc::clone(&on_switch))
			.with_icon("search.png"),
		Link::new(Facet::Details.as_str(), messages.details.as_str(), Rc::clone(&on_switch))
			.with_icon(format!("{entity}_details.png")),
	];

	if let Some(meta) = registry.entity(entity) {
		for related in meta.related() {
			let label = registry.label(related).unwrap_or(related);
			links.push(
				Link::new(related, label, Rc::clone(&on_switch)).with_icon(format!("{related}_member.png")),
			);
		}
	}

	container.append(LinkList { class: CLASS, links });
}

/// State published when switch link `id` of `entity` is activated.
///
/// `search` and `details` switch facet and clear `enroll`; any other
/// identifier names a related entity and opens the associate facet for it.
pub fn switch_patch(entity: &str, id: &str) -> NavPatch {
	match Facet::parse(id) {
		Some(facet @ (Facet::Search | Facet::Details)) => NavPatch::new()
			.facet(entity, facet)
			.clear(entity, StateKey::Enroll),
		_ => NavPatch::new()
			.facet(entity, Facet::Associate)
			.set_scoped(entity, StateKey::Enroll, id),
	}
}

/// Handler publishing [`switch_patch`] for the activated link.
pub fn switch_handler(entity: &str) -> LinkHandler {
	let entity = entity.to_string();
	Rc::new(move |id: &str, nav: &mut NavStore| {
		nav.publish(switch_patch(&entity, id));
	})
}
