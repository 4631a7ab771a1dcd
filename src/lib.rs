extern crate self as scene_ecs;

// Checks a contract between a system and the components it was handed.
macro_rules! assert_requirement {
	($($arg: tt)*) => {
		#[cfg(not(feature = "debug_only_assertions"))]
		assert!($($arg)*);

		#[cfg(feature = "debug_only_assertions")]
		debug_assert!($($arg)*);
	};
}

pub mod components;
pub mod entities;
pub mod error;
pub mod messages;
pub mod scene;
pub mod systems;
pub mod time;
mod world;

pub use world::World;

pub mod prelude {
	pub use crate::components::*;
	pub use crate::entities::{Entity, EntityId, EntityMap};
	pub use crate::error::{BoxError, EcsError, Result};
	pub use crate::messages::*;
	pub use crate::scene::{Scene, SceneBuilder};
	pub use crate::systems::*;
	pub use crate::time::Time;
	pub use crate::World;
}

#[cfg(test)]
mod tests;
