//! Flat key/value view of the URL fragment.

use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;

use crate::facet::StateKey;

/// String-keyed navigation state, encoded as form-urlencoded pairs.
///
/// Empty values never appear: an empty value means "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
	entries: BTreeMap<String, String>,
}

impl Fragment {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses `#a=1&b=2` (leading `#` optional). Later duplicates win.
	pub fn parse(text: &str) -> Self {
		let text = text.strip_prefix('#').unwrap_or(text);
		let entries = form_urlencoded::parse(text.as_bytes())
			.filter(|(key, value)| !key.is_empty() && !value.is_empty())
			.map(|(key, value)| (key.into_owned(), value.into_owned()))
			.collect();
		Self { entries }
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	pub fn get_scoped(&self, entity: &str, key: StateKey) -> Option<&str> {
		self.get(&key.scoped(entity))
	}

	/// Sets `key` to `value`; an empty value removes the key.
	///
	/// Returns true if the stored value changed.
	pub(crate) fn set(&mut self, key: &str, value: &str) -> bool {
		if value.is_empty() {
			return self.entries.remove(key).is_some();
		}
		match self.entries.get_mut(key) {
			Some(existing) if existing == value => false,
			Some(existing) => {
				value.clone_into(existing);
				true
			}
			None => {
				self.entries.insert(key.to_string(), value.to_string());
				true
			}
		}
	}

	/// Keys whose values differ between `self` and `other`.
	pub fn diff(&self, other: &Fragment) -> Vec<String> {
		let mut keys: Vec<String> = self
			.entries
			.iter()
			.filter(|(key, value)| other.get(key) != Some(value.as_str()))
			.map(|(key, _)| key.clone())
			.collect();
		keys.extend(
			other
				.entries
				.keys()
				.filter(|key| !self.entries.contains_key(*key))
				.cloned(),
		);
		keys.sort();
		keys
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl fmt::Display for Fragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let encoded = form_urlencoded::Serializer::new(String::new())
			.extend_pairs(self.entries.iter())
			.finish();
		f.write_str(&encoded)
	}
}

impl<K, V> FromIterator<(K, V)> for Fragment
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut fragment = Self::new();
		for (key, value) in iter {
			let key = key.into();
			let value = value.into();
			fragment.set(&key, &value);
		}
		fragment
	}
}
