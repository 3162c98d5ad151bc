use serde::{Deserialize, Serialize};

/// Opaque configuration handed unmodified to a facet renderer.
///
/// The routing core never inspects the contents; only renderers interpret it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetDefinition(serde_json::Value);

impl FacetDefinition {
	pub fn new(value: serde_json::Value) -> Self {
		Self(value)
	}

	pub fn value(&self) -> &serde_json::Value {
		&self.0
	}

	pub fn into_value(self) -> serde_json::Value {
		self.0
	}
}

impl From<serde_json::Value> for FacetDefinition {
	fn from(value: serde_json::Value) -> Self {
		Self(value)
	}
}

/// Which of an entity's definitions a registration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetSlot {
	/// Search listing definition.
	Search,
	/// Add dialog definition.
	Add,
	/// Details form definition.
	Details,
}

impl FacetSlot {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Search => "search",
			Self::Add => "add",
			Self::Details => "details",
		}
	}
}

impl std::fmt::Display for FacetSlot {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
