use std::cell::{Ref, RefCell, RefMut};
use crate::components::Component;
use crate::error::{EcsError, Result};
use std::any::type_name;
use std::fmt;
use std::rc::Rc;

/// A shared handle to a [`Component`].
///
/// The same component is reachable from its [entity](crate::entities::Entity) and from every
/// [system](crate::systems::System) it was matched to; all of them observe the same data.
#[derive(Clone)]
pub struct ComponentRef {
	name: Rc<str>,
	inner: Rc<RefCell<dyn Component>>,
}

impl ComponentRef {
	pub fn new<T: Component>(component: T) -> Self {
		let name = Rc::from(component.name());
		Self {
			name,
			inner: Rc::new(RefCell::new(component)),
		}
	}

	/// The name the component reported when it was wrapped.
	#[inline(always)]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns `true` if the component is of type `T`.
	/// Returns `false` if the component is currently mutably borrowed.
	pub fn is<T: Component>(&self) -> bool {
		self.inner.try_borrow().map(|c| c.is::<T>()).unwrap_or(false)
	}

	/// Immutably borrows the untyped component.
	pub fn borrow(&self) -> Result<Ref<'_, dyn Component>> {
		self.inner.try_borrow().map_err(|_| self.borrowed())
	}

	/// Mutably borrows the untyped component.
	pub fn borrow_mut(&self) -> Result<RefMut<'_, dyn Component>> {
		self.inner.try_borrow_mut().map_err(|_| self.borrowed())
	}

	/// Immutably borrows the component as a `T`.
	pub fn get<T: Component>(&self) -> Result<Ref<'_, T>> {
		let component = self.borrow()?;
		Ref::filter_map(component, |c| c.downcast_ref::<T>()).map_err(|_| self.mismatch::<T>())
	}

	/// Mutably borrows the component as a `T`.
	pub fn get_mut<T: Component>(&self) -> Result<RefMut<'_, T>> {
		let component = self.borrow_mut()?;
		RefMut::filter_map(component, |c| c.downcast_mut::<T>()).map_err(|_| self.mismatch::<T>())
	}

	/// Returns `true` if both handles point to the same component.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	fn borrowed(&self) -> EcsError {
		EcsError::ComponentBorrowed {
			name: self.name.to_string(),
		}
	}

	fn mismatch<T>(&self) -> EcsError {
		EcsError::ComponentType {
			name: self.name.to_string(),
			expected: type_name::<T>(),
		}
	}
}

impl fmt::Debug for ComponentRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ComponentRef").field(&self.name).finish()
	}
}
