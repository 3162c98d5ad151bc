use std::rc::Rc;
use std::sync::Arc;

use vista_entity::Registry;
use vista_nav::{Facet, NavPatch, NavStore, StateKey};

use crate::container::{Cell, Link, Row};
use crate::error::QuickLinkError;
use crate::render::Record;

/// Builds the inline details/associate shortcuts of search result rows.
#[derive(Debug, Clone)]
pub struct QuickLinks {
	registry: Arc<Registry>,
}

impl QuickLinks {
	pub fn new(registry: Arc<Registry>) -> Self {
		Self { registry }
	}

	/// Appends one cell of links to `row` for `record` of `entity`.
	///
	/// The cell holds a details link followed by one associate link per
	/// related entity. Nothing is appended when the record has no primary
	/// key value.
	pub fn build(&self, row: &mut Row, entity: &str, record: &Record) -> Result<(), QuickLinkError> {
		let meta = self
			.registry
			.entity(entity)
			.ok_or_else(|| QuickLinkError::UnknownEntity(entity.to_string()))?;
		let pkey = record
			.get(&meta.primary_key)
			.and_then(|values| values.first())
			.filter(|value| !value.is_empty())
			.ok_or_else(|| QuickLinkError::MissingPrimaryKey {
				entity: entity.to_string(),
				field: meta.primary_key.clone(),
			})?;

		let details = {
			let target = entity.to_string();
			let pkey = pkey.clone();
			Link::new(
				format!("details:{pkey}"),
				self.registry.messages().details.as_str(),
				Rc::new(move |_: &str, nav: &mut NavStore| {
					nav.publish(
						NavPatch::new()
							.facet(&target, Facet::Details)
							.set_scoped(&target, StateKey::Pkey, pkey.as_str()),
					);
				}),
			)
			.with_href("#details")
			.with_icon(format!("{entity}_details.png"))
		};

		let mut links = vec![details];
		for related in meta.related() {
			let target = entity.to_string();
			let pkey = pkey.clone();
			let enroll = related.to_string();
			let label = self.registry.label(related).unwrap_or(related);
			links.push(
				Link::new(
					format!("{related}:{pkey}"),
					label,
					Rc::new(move |_: &str, nav: &mut NavStore| {
						nav.publish(
							NavPatch::new()
								.facet(&target, Facet::Associate)
								.set_scoped(&target, StateKey::Enroll, enroll.as_str())
								.set_scoped(&target, StateKey::Pkey, pkey.as_str()),
						);
					}),
				)
				.with_href(format!("#{related}"))
				.with_icon(format!("{related}_member.png")),
			);
		}

		row.cells.push(Cell::Links(links));
		Ok(())
	}
}
