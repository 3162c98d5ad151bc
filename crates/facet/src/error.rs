//! Error types for link generation and session control.

use thiserror::Error;

use crate::container::ControlKind;

/// Quick-link generation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuickLinkError {
	#[error("no metadata registered for entity '{0}'")]
	UnknownEntity(String),

	/// The record carries no value for the entity's primary-key field.
	#[error("record of '{entity}' has no value for primary key '{field}'")]
	MissingPrimaryKey { entity: String, field: String },
}

/// Session control failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
	#[error("no metadata registered for entity '{0}'")]
	UnknownEntity(String),

	#[error("entity '{0}' already has a container")]
	AlreadyAttached(String),

	#[error("no container attached for entity '{0}'")]
	NotAttached(String),

	#[error("container '{entity}' has no link '{id}'")]
	UnknownLink { entity: String, id: String },

	#[error("container '{entity}' has no {kind} control")]
	UnknownControl { entity: String, kind: ControlKind },
}
