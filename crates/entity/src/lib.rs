//! Entity registry for facet views.
//!
//! A [`Registry`] holds, per entity name, the three facet definitions (search,
//! add dialog, details) together with the [`EntityMeta`] that describes the
//! entity: its display label, primary-key field, and the related entities it
//! can be associated with through attribute membership.
//!
//! The registry is populated once during setup, either through the
//! `register_*` calls or from a TOML manifest (see [`manifest`]), and is then
//! shared read-only behind an `Arc`.
//!
//! # Manifest
//!
//! ```toml
//! [messages]
//! add = "Add"
//!
//! [entities.user]
//! label = "Users"
//! primary_key = "uid"
//!
//! [entities.user.attribute_members]
//! memberof = ["group"]
//!
//! [entities.user.search]
//! columns = ["uid", "cn"]
//!
//! [entities.group]
//! label = "Groups"
//! primary_key = "cn"
//! ```

mod definition;
mod error;
pub mod manifest;
mod messages;
mod meta;
mod registry;

pub use definition::{FacetDefinition, FacetSlot};
pub use error::{RegistryError, Result};
pub use messages::Messages;
pub use meta::EntityMeta;
pub use registry::Registry;
