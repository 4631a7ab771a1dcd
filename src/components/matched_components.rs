use crate::components::{Component, ComponentRef, Named};
use crate::error::{EcsError, Result};
use std::cell::{Ref, RefMut};
use std::ops::Index;
use std::slice::Iter;

/// The [components](Component) of one entity that satisfied a [system's](crate::systems::System)
/// requirements, in the order the system declared those requirements.
///
/// Element `i` is always the component named by the `i`-th required name, no matter in which order
/// the components were attached to the entity. Systems may rely on that position directly
/// ([`at`](Self::at), [`Index`]) or look components up by name ([`get_as`](Self::get_as)).
#[derive(Clone, Debug, Default)]
pub struct MatchedComponents {
	components: Vec<ComponentRef>,
}

impl MatchedComponents {
	pub fn new(components: Vec<ComponentRef>) -> Self {
		Self { components }
	}

	#[inline(always)]
	pub fn len(&self) -> usize {
		self.components.len()
	}

	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.components.is_empty()
	}

	pub fn iter(&self) -> Iter<'_, ComponentRef> {
		self.components.iter()
	}

	pub fn get(&self, index: usize) -> Option<&ComponentRef> {
		self.components.get(index)
	}

	/// Names of the matched components, in requirement order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.components.iter().map(|c| c.name())
	}

	/// Finds the first matched component with the given name.
	pub fn find(&self, name: &str) -> Option<&ComponentRef> {
		self.components.iter().find(|c| c.name() == name)
	}

	/// Immutably borrows the matched component named [`T::NAME`](Named::NAME).
	pub fn get_as<T: Component + Named>(&self) -> Result<Ref<'_, T>> {
		self.find_named::<T>()?.get()
	}

	/// Mutably borrows the matched component named [`T::NAME`](Named::NAME).
	pub fn get_mut_as<T: Component + Named>(&self) -> Result<RefMut<'_, T>> {
		self.find_named::<T>()?.get_mut()
	}

	/// Immutably borrows the component at `index`, checking that it is the one named [`T::NAME`](Named::NAME).
	pub fn at<T: Component + Named>(&self, index: usize) -> Result<Ref<'_, T>> {
		self.checked::<T>(index)?.get()
	}

	/// Mutably borrows the component at `index`, checking that it is the one named [`T::NAME`](Named::NAME).
	pub fn at_mut<T: Component + Named>(&self, index: usize) -> Result<RefMut<'_, T>> {
		self.checked::<T>(index)?.get_mut()
	}

	/// Returns the component at `index`, asserting that it carries the given name.
	///
	/// # Panics
	/// Panics if `index` is out of bounds or the component at `index` has a different name.
	/// With the `debug_only_assertions` feature the name check only runs in debug builds.
	pub fn expect_at(&self, index: usize, name: &str) -> &ComponentRef {
		let component = &self.components[index];
		assert_requirement!(
			component.name() == name,
			"Component at index {} is \"{}\", expected \"{}\"",
			index,
			component.name(),
			name
		);
		component
	}

	fn find_named<T: Named>(&self) -> Result<&ComponentRef> {
		self.find(T::NAME).ok_or_else(|| EcsError::MissingComponent {
			name: T::NAME.to_string(),
		})
	}

	fn checked<T: Named>(&self, index: usize) -> Result<&ComponentRef> {
		let component = self.components.get(index).ok_or_else(|| EcsError::MissingComponent {
			name: T::NAME.to_string(),
		})?;

		if component.name() != T::NAME {
			return Err(EcsError::ComponentMismatch {
				index,
				expected: T::NAME.to_string(),
				found: component.name().to_string(),
			});
		}

		Ok(component)
	}
}

impl Index<usize> for MatchedComponents {
	type Output = ComponentRef;

	#[inline(always)]
	fn index(&self, index: usize) -> &Self::Output {
		&self.components[index]
	}
}

impl From<Vec<ComponentRef>> for MatchedComponents {
	fn from(components: Vec<ComponentRef>) -> Self {
		Self::new(components)
	}
}

impl IntoIterator for MatchedComponents {
	type Item = ComponentRef;
	type IntoIter = std::vec::IntoIter<ComponentRef>;

	fn into_iter(self) -> Self::IntoIter {
		self.components.into_iter()
	}
}

impl<'l> IntoIterator for &'l MatchedComponents {
	type Item = &'l ComponentRef;
	type IntoIter = Iter<'l, ComponentRef>;

	fn into_iter(self) -> Self::IntoIter {
		self.components.iter()
	}
}
