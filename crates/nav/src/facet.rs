/// One of the mutually exclusive views of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facet {
	/// Search listing.
	#[default]
	Search,
	/// Single record details form.
	Details,
	/// Association/enrollment list for one record.
	Associate,
}

impl Facet {
	pub const ALL: [Facet; 3] = [Self::Search, Self::Details, Self::Associate];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Search => "search",
			Self::Details => "details",
			Self::Associate => "associate",
		}
	}

	/// Parses a facet name as stored in the fragment.
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"search" => Some(Self::Search),
			"details" => Some(Self::Details),
			"associate" => Some(Self::Associate),
			_ => None,
		}
	}

	/// The one parameter that decides whether this facet needs rebuilding.
	pub const fn secondary_key(self) -> StateKey {
		match self {
			Self::Search => StateKey::Filter,
			Self::Details => StateKey::Pkey,
			Self::Associate => StateKey::Enroll,
		}
	}
}

impl std::fmt::Display for Facet {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Per-entity navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateKey {
	Facet,
	Filter,
	Pkey,
	Enroll,
}

impl StateKey {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Facet => "facet",
			Self::Filter => "filter",
			Self::Pkey => "pkey",
			Self::Enroll => "enroll",
		}
	}

	/// Fragment key for this state key under `entity`, e.g. `user-pkey`.
	pub fn scoped(self, entity: &str) -> String {
		format!("{entity}-{}", self.as_str())
	}
}

impl std::fmt::Display for StateKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
