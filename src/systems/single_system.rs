use crate::components::{ComponentRef, MatchedComponents};
use crate::entities::{EntityId, EntityMap};
use log::debug;

/// Tracks the single required component of every matched [entity](crate::entities::Entity).
///
/// The counterpart of [`MultiSystem`](crate::systems::MultiSystem) for systems that
/// declare exactly one required component.
#[derive(Default, Debug)]
pub struct SingleSystem {
	entities: EntityMap<ComponentRef>,
}

impl SingleSystem {
	pub fn new() -> Self {
		Self::default()
	}

	/// Associates the only component of `components` with `entity`,
	/// replacing and returning any previous association.
	///
	/// # Panics
	/// Panics if `components` does not hold exactly one component.
	/// With the `debug_only_assertions` feature this is only checked in debug builds,
	/// and extra components are ignored.
	pub fn add(&mut self, entity: EntityId, components: MatchedComponents) -> Option<ComponentRef> {
		assert_requirement!(
			components.len() == 1,
			"A single-component system received {} components",
			components.len()
		);

		let component = components.into_iter().next()?;
		let previous = self.entities.insert(entity, component);
		if previous.is_some() {
			debug!("Entity {} was added again, replacing its component", entity);
		}
		previous
	}

	pub fn get(&self, entity: EntityId) -> Option<&ComponentRef> {
		self.entities.get(&entity)
	}

	pub fn contains(&self, entity: EntityId) -> bool {
		self.entities.contains_key(&entity)
	}

	#[inline(always)]
	pub fn len(&self) -> usize {
		self.entities.len()
	}

	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (EntityId, &ComponentRef)> {
		self.entities.iter().map(|(id, component)| (*id, component))
	}

	pub fn iter_entities(&self) -> impl Iterator<Item = EntityId> + '_ {
		self.entities.keys().copied()
	}
}
