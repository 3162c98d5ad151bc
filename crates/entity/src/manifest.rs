//! TOML manifest loading.
//!
//! A manifest declares every entity in one file. Facet definition tables
//! (`search`, `add`, `details`) are kept opaque and handed to renderers as-is.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::definition::{FacetDefinition, FacetSlot};
use crate::error::{RegistryError, Result};
use crate::messages::Messages;
use crate::meta::EntityMeta;
use crate::registry::Registry;

/// Parsed manifest document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
	/// Caption overrides.
	pub messages: Messages,
	/// Entity declarations keyed by entity name.
	pub entities: IndexMap<String, EntityEntry>,
}

/// One `[entities.<name>]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityEntry {
	#[serde(flatten)]
	pub meta: EntityMeta,
	#[serde(default)]
	pub search: Option<FacetDefinition>,
	#[serde(default)]
	pub add: Option<FacetDefinition>,
	#[serde(default)]
	pub details: Option<FacetDefinition>,
}

impl Manifest {
	pub fn parse(text: &str) -> Result<Self> {
		Ok(toml::from_str(text)?)
	}

	/// Builds a validated registry from this manifest.
	pub fn into_registry(self) -> Result<Registry> {
		let mut registry = Registry::new();
		registry.set_messages(self.messages);

		for (name, entry) in self.entities {
			let EntityEntry {
				mut meta,
				search,
				add,
				details,
			} = entry;
			meta.name = name;
			let entity = meta.name.trim().to_string();
			registry.register_entity(meta)?;

			let slots = [
				(FacetSlot::Search, search),
				(FacetSlot::Add, add),
				(FacetSlot::Details, details),
			];
			for (slot, definition) in slots {
				if let Some(definition) = definition {
					registry.register(&entity, slot, definition);
				}
			}
		}

		registry.validate()?;
		tracing::debug!(entities = registry.entities().count(), "Loaded entity manifest");
		Ok(registry)
	}
}

impl Registry {
	/// Parses and validates a manifest document.
	pub fn from_manifest_str(text: &str) -> Result<Self> {
		Manifest::parse(text)?.into_registry()
	}

	/// Reads, parses and validates a manifest file.
	pub fn from_manifest_path(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|error| RegistryError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_manifest_str(&text)
	}
}
