//! [Components](Component) are the named pieces of data attached to [entities](crate::entities::Entity).
//!
//! A component's contents are opaque to the [scene](crate::scene::Scene);
//! only its [name](Component::name) is used to match entities against [systems](crate::systems::System).

mod component;
mod component_ref;
mod matched_components;

pub use component::*;
pub use component_ref::*;
pub use matched_components::*;
pub use scene_ecs_derive::Component;
