//! Per-entity facet definitions and metadata.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::definition::{FacetDefinition, FacetSlot};
use crate::error::{RegistryError, Result};
use crate::messages::Messages;
use crate::meta::EntityMeta;

/// Holds facet definitions and metadata for every known entity.
///
/// Populated during setup, then treated as read-only.
#[derive(Debug, Default, Clone)]
pub struct Registry {
	entities: IndexMap<String, EntityMeta>,
	definitions: FxHashMap<(String, FacetSlot), FacetDefinition>,
	messages: Messages,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers (or replaces) the metadata for an entity.
	pub fn register_entity(&mut self, mut meta: EntityMeta) -> Result<()> {
		meta.name = meta.name.trim().to_string();
		if meta.name.is_empty() {
			return Err(RegistryError::EmptyName);
		}
		tracing::trace!(entity = %meta.name, "Registered entity metadata");
		self.entities.insert(meta.name.clone(), meta);
		Ok(())
	}

	pub fn register_search(&mut self, entity: &str, definition: FacetDefinition) {
		self.register(entity, FacetSlot::Search, definition);
	}

	pub fn register_add(&mut self, entity: &str, definition: FacetDefinition) {
		self.register(entity, FacetSlot::Add, definition);
	}

	pub fn register_details(&mut self, entity: &str, definition: FacetDefinition) {
		self.register(entity, FacetSlot::Details, definition);
	}

	/// Registers a definition into an explicit slot, replacing any previous one.
	pub fn register(&mut self, entity: &str, slot: FacetSlot, definition: FacetDefinition) {
		tracing::trace!(entity, %slot, "Registered facet definition");
		self.definitions.insert((entity.to_string(), slot), definition);
	}

	pub fn set_messages(&mut self, messages: Messages) {
		self.messages = messages;
	}

	pub fn messages(&self) -> &Messages {
		&self.messages
	}

	pub fn entity(&self, name: &str) -> Option<&EntityMeta> {
		self.entities.get(name)
	}

	/// Entities in registration order.
	pub fn entities(&self) -> impl Iterator<Item = &EntityMeta> {
		self.entities.values()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entities.contains_key(name)
	}

	pub fn definition(&self, entity: &str, slot: FacetSlot) -> Option<&FacetDefinition> {
		self.definitions.get(&(entity.to_string(), slot))
	}

	pub fn search_definition(&self, entity: &str) -> Option<&FacetDefinition> {
		self.definition(entity, FacetSlot::Search)
	}

	pub fn add_definition(&self, entity: &str) -> Option<&FacetDefinition> {
		self.definition(entity, FacetSlot::Add)
	}

	pub fn details_definition(&self, entity: &str) -> Option<&FacetDefinition> {
		self.definition(entity, FacetSlot::Details)
	}

	/// Display label of an entity, if it is known.
	pub fn label(&self, name: &str) -> Option<&str> {
		self.entities.get(name).map(|meta| meta.label.as_str())
	}

	/// Relation attribute linking `entity` to `related`.
	pub fn member_attribute(&self, entity: &str, related: &str) -> Option<&str> {
		self.entities.get(entity)?.member_attribute(related)
	}

	/// Checks cross references between entities.
	///
	/// Every attribute member must name a registered entity, and every facet
	/// definition must belong to an entity with metadata.
	pub fn validate(&self) -> Result<()> {
		for meta in self.entities.values() {
			for (attribute, members) in &meta.attribute_members {
				if let Some(member) = members.iter().find(|m| !self.entities.contains_key(*m)) {
					return Err(RegistryError::UnknownMember {
						entity: meta.name.clone(),
						attribute: attribute.clone(),
						member: member.clone(),
					});
				}
			}
		}

		if let Some((entity, _)) = self
			.definitions
			.keys()
			.find(|(entity, _)| !self.entities.contains_key(entity))
		{
			return Err(RegistryError::UnknownEntity(entity.clone()));
		}

		Ok(())
	}
}
