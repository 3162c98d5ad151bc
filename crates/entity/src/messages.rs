use serde::{Deserialize, Serialize};

/// Captions for the controls the routing core creates itself.
///
/// Every field falls back to its English default when a manifest omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
	pub add: String,
	pub reset: String,
	pub update: String,
	pub search: String,
	pub details: String,
}

impl Default for Messages {
	fn default() -> Self {
		Self {
			add: "Add".into(),
			reset: "Reset".into(),
			update: "Update".into(),
			search: "Search".into(),
			details: "Details".into(),
		}
	}
}
