use crate::components::{Component, ComponentRef, MatchedComponents, Named};
use crate::error::{EcsError, Result};
use std::cell::{Ref, RefMut};
use crate::entities::EntityId;
use std::collections::HashMap;

/// An identity with a set of uniquely named [components](Component).
#[derive(Debug)]
pub struct Entity {
	id: EntityId,
	components: HashMap<String, ComponentRef>,
}

impl Entity {
	/// Creates an [`Entity`] with a fresh [`EntityId`] and no components.
	pub fn new() -> Self {
		Self {
			id: EntityId::next(),
			components: HashMap::default(),
		}
	}

	#[inline(always)]
	pub fn id(&self) -> EntityId {
		self.id
	}

	/// All components of the entity, keyed by [name](Component::name).
	pub fn components(&self) -> &HashMap<String, ComponentRef> {
		&self.components
	}

	pub fn component(&self, name: &str) -> Option<&ComponentRef> {
		self.components.get(name)
	}

	pub fn has_component(&self, name: &str) -> bool {
		self.components.contains_key(name)
	}

	/// Attaches a component to the entity.
	///
	/// Returns a handle to the attached component, or [`EcsError::DuplicateComponent`]
	/// if the entity already has a component with the same name.
	pub fn add_component<T: Component>(&mut self, component: T) -> Result<ComponentRef> {
		self.add_component_ref(ComponentRef::new(component))
	}

	/// Attaches an already shared component to the entity.
	pub fn add_component_ref(&mut self, component: ComponentRef) -> Result<ComponentRef> {
		if self.components.contains_key(component.name()) {
			return Err(EcsError::DuplicateComponent {
				entity: self.id,
				name: component.name().to_string(),
			});
		}

		self.components.insert(component.name().to_string(), component.clone());
		Ok(component)
	}

	/// Attaches a component to the entity and returns it.
	///
	/// # Panics
	/// Panics if the entity already has a component with the same name.
	pub fn with_component<T: Component>(mut self, component: T) -> Self {
		if let Err(err) = self.add_component(component) {
			panic!("{}", err);
		}
		self
	}

	/// Immutably borrows the component named [`T::NAME`](Named::NAME).
	pub fn get<T: Component + Named>(&self) -> Result<Ref<'_, T>> {
		self.named::<T>()?.get()
	}

	/// Mutably borrows the component named [`T::NAME`](Named::NAME).
	pub fn get_mut<T: Component + Named>(&self) -> Result<RefMut<'_, T>> {
		self.named::<T>()?.get_mut()
	}

	/// Looks up every name of `required`, in order.
	///
	/// Returns [`None`] unless all of them are present: an entity that satisfies
	/// only part of a requirement list is never matched.
	pub fn resolve<S: AsRef<str>>(&self, required: &[S]) -> Option<MatchedComponents> {
		let components = required
			.iter()
			.map(|name| self.components.get(name.as_ref()).cloned())
			.collect::<Option<Vec<_>>>()?;

		Some(MatchedComponents::new(components))
	}

	fn named<T: Named>(&self) -> Result<&ComponentRef> {
		self.components.get(T::NAME).ok_or_else(|| EcsError::MissingComponent {
			name: T::NAME.to_string(),
		})
	}
}

impl Default for Entity {
	fn default() -> Self {
		Self::new()
	}
}
