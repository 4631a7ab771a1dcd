//! [Entities](Entity) represent the individual "things" in a [scene](crate::scene::Scene).
//!
//! An [Entity] has no associated behaviour;
//! it identifies which pieces of data ([Components](crate::components::Component)) belong together.
//! Its component set is expected to be complete before the scene is initialized.

mod entity;
mod entity_id;

pub use entity::*;
pub use entity_id::*;
