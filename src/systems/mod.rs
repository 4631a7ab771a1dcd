//! [Systems](System) provide the per-frame behaviour of a [scene](crate::scene::Scene).
//!
//! A [System] declares the [components](crate::components::Component) it needs by name.
//! When the scene is initialized, every [entity](crate::entities::Entity) holding all of them
//! is handed to the system through [`System::add`]; [`MultiSystem`] and [`SingleSystem`]
//! keep track of those entities on the system's behalf.

mod init_context;
mod multi_system;
mod single_system;
mod system;
mod system_store;

pub use init_context::*;
pub use multi_system::*;
pub use single_system::*;
pub use system::*;
pub(crate) use system_store::*;
