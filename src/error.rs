//! Error handling for [scenes](crate::scene::Scene) and their contents.
//!
//! Entities that do not satisfy a [system's](crate::systems::System) requirements are filtered out,
//! not reported: nothing in this module describes a resolution mismatch.

use crate::entities::EntityId;
use thiserror::Error;

/// Boxed error returned by [`System::init`](crate::systems::System::init).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of any fallible operation of this crate.
pub type Result<T> = std::result::Result<T, EcsError>;

#[derive(Debug, Error)]
pub enum EcsError {
	#[error("entity {entity} already has a component named \"{name}\"")]
	DuplicateComponent { entity: EntityId, name: String },

	#[error("no component named \"{name}\"")]
	MissingComponent { name: String },

	#[error("component at index {index} is \"{found}\", expected \"{expected}\"")]
	ComponentMismatch {
		index: usize,
		expected: String,
		found: String,
	},

	#[error("component \"{name}\" is not of type {expected}")]
	ComponentType { name: String, expected: &'static str },

	#[error("component \"{name}\" is already borrowed")]
	ComponentBorrowed { name: String },

	#[error("scene already has a system named \"{name}\"")]
	DuplicateSystem { name: String },

	#[error("systems cannot be added to an initialized scene")]
	SceneInitialized,

	#[error("scene has already been initialized")]
	AlreadyInitialized,

	#[error("a previous initialization of the scene failed")]
	InitFailed,

	#[error("failed to initialize system \"{system}\": {source}")]
	SystemInit {
		system: String,
		#[source]
		source: BoxError,
	},
}
