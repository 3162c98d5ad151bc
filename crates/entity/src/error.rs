//! Error types for registry setup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while populating a [`crate::Registry`].
#[derive(Debug, Error)]
pub enum RegistryError {
	/// Manifest text is not valid TOML or does not match the schema.
	#[error("manifest parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a manifest file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// An attribute member names an entity that was never declared.
	#[error("entity '{entity}' lists unknown member '{member}' under attribute '{attribute}'")]
	UnknownMember {
		/// Entity declaring the membership.
		entity: String,
		/// Attribute holding the member list.
		attribute: String,
		/// The undeclared related entity.
		member: String,
	},

	/// A definition was registered for an entity with no metadata.
	#[error("no metadata registered for entity '{0}'")]
	UnknownEntity(String),

	/// Entity names become navigation key prefixes and must not be empty.
	#[error("entity name must not be empty")]
	EmptyName,
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
