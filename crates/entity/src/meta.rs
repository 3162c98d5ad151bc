use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Static description of an entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMeta {
	/// Entity name, also the navigation key prefix.
	#[serde(skip)]
	pub name: String,
	/// Human readable label, used for view-switch captions and column titles.
	pub label: String,
	/// Field holding the record's primary key.
	pub primary_key: String,
	/// Relation attribute name to the related entities reachable through it.
	///
	/// Order is preserved; link generators emit related entities in this order.
	#[serde(default)]
	pub attribute_members: IndexMap<String, Vec<String>>,
}

impl EntityMeta {
	pub fn new(name: impl Into<String>, label: impl Into<String>, primary_key: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			primary_key: primary_key.into(),
			attribute_members: IndexMap::new(),
		}
	}

	/// Adds a relation attribute and its member entities.
	pub fn with_members<I, S>(mut self, attribute: impl Into<String>, members: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.attribute_members
			.entry(attribute.into())
			.or_default()
			.extend(members.into_iter().map(Into::into));
		self
	}

	/// Related entity names in attribute order, duplicates removed.
	pub fn related(&self) -> Vec<&str> {
		let mut seen = Vec::new();
		for member in self.attribute_members.values().flatten() {
			if !seen.contains(&member.as_str()) {
				seen.push(member.as_str());
			}
		}
		seen
	}

	/// First relation attribute whose member list contains `related`.
	pub fn member_attribute(&self, related: &str) -> Option<&str> {
		self.attribute_members
			.iter()
			.find(|(_, members)| members.iter().any(|m| m == related))
			.map(|(attr, _)| attr.as_str())
	}
}
