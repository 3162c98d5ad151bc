//! Typed per-entity navigation record.

use crate::facet::{Facet, StateKey};
use crate::fragment::Fragment;
use crate::patch::NavPatch;

/// Decoded navigation state of one entity.
///
/// Only the parameters of the active facet are carried; keys left behind by
/// other facets are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
	Search { filter: Option<String> },
	Details { pkey: Option<String> },
	Associate { pkey: String, enroll: String },
	/// Facet value that names no known facet. Renders nothing.
	Unknown(String),
}

impl Default for Route {
	fn default() -> Self {
		Self::Search { filter: None }
	}
}

impl Route {
	/// Reads `entity`'s route from the fragment. Absent facet means search.
	pub fn decode(entity: &str, fragment: &Fragment) -> Self {
		let read = |key: StateKey| fragment.get_scoped(entity, key).map(str::to_string);

		let Some(name) = fragment.get_scoped(entity, StateKey::Facet) else {
			return Self::Search {
				filter: read(StateKey::Filter),
			};
		};

		match Facet::parse(name) {
			Some(Facet::Search) => Self::Search {
				filter: read(StateKey::Filter),
			},
			Some(Facet::Details) => Self::Details {
				pkey: read(StateKey::Pkey),
			},
			Some(Facet::Associate) => Self::Associate {
				pkey: read(StateKey::Pkey).unwrap_or_default(),
				enroll: read(StateKey::Enroll).unwrap_or_default(),
			},
			None => Self::Unknown(name.to_string()),
		}
	}

	/// Patch that makes [`Route::decode`] return `self` for `entity`.
	///
	/// Parameters not owned by the facet are left untouched.
	pub fn encode(&self, entity: &str) -> NavPatch {
		let patch = NavPatch::new();
		match self {
			Self::Search { filter } => patch
				.facet(entity, Facet::Search)
				.set_scoped(entity, StateKey::Filter, filter.as_deref().unwrap_or_default()),
			Self::Details { pkey } => patch
				.facet(entity, Facet::Details)
				.set_scoped(entity, StateKey::Pkey, pkey.as_deref().unwrap_or_default()),
			Self::Associate { pkey, enroll } => patch
				.facet(entity, Facet::Associate)
				.set_scoped(entity, StateKey::Pkey, pkey.as_str())
				.set_scoped(entity, StateKey::Enroll, enroll.as_str()),
			Self::Unknown(name) => patch.set_scoped(entity, StateKey::Facet, name.as_str()),
		}
	}

	pub fn facet(&self) -> Option<Facet> {
		match self {
			Self::Search { .. } => Some(Facet::Search),
			Self::Details { .. } => Some(Facet::Details),
			Self::Associate { .. } => Some(Facet::Associate),
			Self::Unknown(_) => None,
		}
	}

	/// Facet name as it appears in the fragment.
	pub fn facet_name(&self) -> &str {
		match self {
			Self::Unknown(name) => name,
			_ => self.facet().unwrap_or_default().as_str(),
		}
	}
}

#[cfg(test)]
mod tests;
