use std::any::Any;

/// A named, opaque unit of data attached to an [entity](crate::entities::Entity).
///
/// The name is the only part of a component the [scene](crate::scene::Scene) looks at:
/// [systems](crate::systems::System) are matched against entities by comparing component names.
/// Use #\[derive([`Component`](scene_ecs_derive::Component))] to implement this trait together with [`Named`].
pub trait Component: AsAny {
	/// Key under which this component is stored on its entity.
	fn name(&self) -> &str;
}

/// Compile-time name of a [`Component`] or [`Message`](crate::messages::Message) type.
///
/// Implemented by #\[derive(Component)] and #\[derive(Message)], using either the type's
/// identifier or the value of a `#[name = "..."]` attribute.
pub trait Named {
	const NAME: &'static str;
}

/// Upcast to [`Any`], used to recover the concrete type behind a trait object.
pub trait AsAny: Any {
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
	#[inline(always)]
	fn as_any(&self) -> &dyn Any {
		self
	}

	#[inline(always)]
	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

impl dyn Component {
	/// Returns `true` if the component is of type `T`.
	pub fn is<T: Component>(&self) -> bool {
		self.as_any().is::<T>()
	}

	pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
		self.as_any().downcast_ref()
	}

	pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
		self.as_any_mut().downcast_mut()
	}
}
