//! Change detection between navigation events.
//!
//! Navigation events fire on any fragment change, including changes that
//! belong to other entities. [`ChangeDetector`] remembers, per entity, the
//! facet last built and the one parameter that facet depends on, and reports
//! whether the container has to be rebuilt.

use rustc_hash::FxHashMap;
use vista_nav::{Facet, Fragment, StateKey};

/// Outcome of observing one navigation event for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
	/// The active facet differs from the one last built.
	FacetSwitch,
	/// Same facet, but its secondary parameter changed.
	ParamChange(StateKey),
	/// Nothing relevant changed.
	Unchanged,
}

impl Decision {
	pub fn needs_rebuild(self) -> bool {
		!matches!(self, Self::Unchanged)
	}
}

/// Remembers the last-seen facet and secondary parameter per entity.
#[derive(Debug, Default)]
pub struct ChangeDetector {
	cache: FxHashMap<(String, StateKey), String>,
}

impl ChangeDetector {
	pub fn new() -> Self {
		Self::default()
	}

	/// Compares `entity`'s state in `fragment` against the cache and records
	/// the new values when a rebuild is due.
	///
	/// The secondary key is `filter` for search, `pkey` for details and
	/// `enroll` for associate. Associate is keyed on `enroll` alone: a `pkey`
	/// change with the same `enroll` is reported as unchanged.
	pub fn observe(&mut self, entity: &str, fragment: &Fragment) -> Decision {
		let facet = fragment
			.get_scoped(entity, StateKey::Facet)
			.unwrap_or(Facet::Search.as_str());

		if self.cached(entity, StateKey::Facet) != Some(facet) {
			self.store(entity, StateKey::Facet, facet);
			// Seed the secondary value so the next identical event is a no-op.
			if let Some(known) = Facet::parse(facet) {
				let key = known.secondary_key();
				let value = fragment.get_scoped(entity, key).unwrap_or_default();
				self.store(entity, key, value);
			}
			return Decision::FacetSwitch;
		}

		let Some(known) = Facet::parse(facet) else {
			return Decision::Unchanged;
		};
		let key = known.secondary_key();
		let current = fragment.get_scoped(entity, key).unwrap_or_default();
		let previous = self.cached(entity, key).unwrap_or_default();
		if current == previous {
			return Decision::Unchanged;
		}

		self.store(entity, key, current);
		Decision::ParamChange(key)
	}

	/// Last value recorded for `entity`'s `key`.
	pub fn cached(&self, entity: &str, key: StateKey) -> Option<&str> {
		self.cache
			.get(&(entity.to_string(), key))
			.map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.cache.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cache.is_empty()
	}

	fn store(&mut self, entity: &str, key: StateKey, value: &str) {
		self.cache.insert((entity.to_string(), key), value.to_string());
	}
}

#[cfg(test)]
mod tests;
