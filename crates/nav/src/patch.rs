use std::collections::BTreeMap;

use crate::facet::{Facet, StateKey};

/// Partial navigation state to merge into the fragment.
///
/// Keys not present keep their current value. A key mapped to `""` is
/// cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavPatch {
	entries: BTreeMap<String, String>,
}

impl NavPatch {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.entries.insert(key.into(), value.into());
		self
	}

	pub fn set_scoped(self, entity: &str, key: StateKey, value: impl Into<String>) -> Self {
		self.set(key.scoped(entity), value)
	}

	pub fn facet(self, entity: &str, facet: Facet) -> Self {
		self.set_scoped(entity, StateKey::Facet, facet.as_str())
	}

	/// Clears `key` under `entity`.
	pub fn clear(self, entity: &str, key: StateKey) -> Self {
		self.set_scoped(entity, key, "")
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	pub fn get_scoped(&self, entity: &str, key: StateKey) -> Option<&str> {
		self.get(&key.scoped(entity))
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}
