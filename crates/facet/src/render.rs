//! Seams to the facet renderers.
//!
//! The routing core decides *when* and *with what parameters* a facet is
//! built; everything about how a listing, form, or association list looks is
//! supplied through these traits.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use vista_entity::FacetDefinition;

use crate::container::{Container, LoadTicket};
use crate::links::QuickLinks;

/// A search result record: attribute name to its values.
pub type Record = FxHashMap<String, Vec<String>>;

/// Search listing renderer.
pub trait SearchFacet {
	/// Renders the empty listing. `quick_links` decorates result rows.
	fn create(&self, entity: &str, definition: &FacetDefinition, container: &mut Container, quick_links: &QuickLinks);

	/// Starts loading records matching `filter`.
	fn load(&self, container: &mut Container, ticket: LoadTicket, filter: &str);
}

/// Details form renderer.
pub trait DetailsFacet {
	fn create(&self, entity: &str, definition: &FacetDefinition, container: &mut Container);

	/// Starts loading the record identified by `pkey`.
	fn load(&self, container: &mut Container, ticket: LoadTicket, pkey: &str);

	/// Discards unsaved edits.
	fn reset(&self, entity: &str);

	/// Persists the cached record whose primary key lives in `primary_key`.
	fn update(&self, entity: &str, primary_key: &str);
}

/// Add dialog opened from the search facet.
pub trait AddDialog {
	fn open(&self, entity: &str, definition: &FacetDefinition);
}

/// Association list renderer.
pub trait AssociationFacet {
	/// Builds and activates the list described by `list`.
	fn setup(&self, list: &AssociationList, container: &mut Container, ticket: LoadTicket);
}

/// One column of an association list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
	pub title: String,
	/// Record attribute shown in the column, `<attribute>_<related>`.
	pub column: String,
}

/// Binding of an association list: which record of which entity is
/// associated with which related entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationList {
	pub entity: String,
	pub pkey: String,
	pub enroll: String,
	pub columns: Vec<Column>,
}

/// The renderer set a dispatcher builds facets with.
#[derive(Clone)]
pub struct Renderers {
	pub search: Rc<dyn SearchFacet>,
	pub details: Rc<dyn DetailsFacet>,
	pub add: Rc<dyn AddDialog>,
	pub association: Rc<dyn AssociationFacet>,
}
