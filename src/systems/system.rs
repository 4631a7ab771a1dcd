use crate::components::{AsAny, MatchedComponents};
use crate::systems::InitContext;
use crate::entities::EntityId;
use crate::error::BoxError;
use std::time::Duration;

/// A unit of per-frame behaviour, matched to [entities](crate::entities::Entity)
/// by the names of the [components](crate::components::Component) it requires.
///
/// A [scene](crate::scene::Scene) drives every system through the same lifecycle:
/// 1. [`init`](System::init) is called exactly once.
/// 2. [`add`](System::add) is called once for each entity holding every
///    [required component](System::required_components).
/// 3. [`update`](System::update) is called once per frame, in the order the systems were added.
pub trait System: AsAny {
	/// Unique name of the system within its scene.
	fn name(&self) -> &str;

	/// Names of the components an entity must hold to be added to this system.
	/// Must not change once the system has been added to a scene.
	fn required_components(&self) -> &[&str];

	/// Initialises the [System].
	/// **This function should not be called by user code.**
	///
	/// An error aborts the initialization of the whole scene.
	fn init(&mut self, _context: &mut InitContext<'_>) -> Result<(), BoxError> {
		Ok(())
	}

	/// Receives an entity matching the requirements, with its components in requirement order.
	fn add(&mut self, entity: EntityId, components: MatchedComponents);

	/// Advances the system by `delta`, the time elapsed since the previous frame.
	fn update(&mut self, delta: Duration);
}

impl dyn System {
	pub fn downcast_ref<T: System>(&self) -> Option<&T> {
		self.as_any().downcast_ref()
	}

	pub fn downcast_mut<T: System>(&mut self) -> Option<&mut T> {
		self.as_any_mut().downcast_mut()
	}
}
