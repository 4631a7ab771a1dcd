use crate::entities::{EntityId, EntityMap};
use crate::components::MatchedComponents;
use log::debug;

/// Tracks, per matched [entity](crate::entities::Entity), the ordered components that satisfied
/// a [system's](crate::systems::System) requirements.
///
/// Meant to be embedded in systems that operate on several components of each entity at once;
/// such a system forwards [`System::add`](crate::systems::System::add) to [`MultiSystem::add`]
/// and walks [`MultiSystem::iter`] during its update.
/// Iteration order across entities is unspecified.
#[derive(Default, Debug)]
pub struct MultiSystem {
	entities: EntityMap<MatchedComponents>,
}

impl MultiSystem {
	pub fn new() -> Self {
		Self::default()
	}

	/// Associates `components` with `entity`.
	///
	/// Adding the same entity again replaces the previous association, which is returned.
	pub fn add(&mut self, entity: EntityId, components: MatchedComponents) -> Option<MatchedComponents> {
		let previous = self.entities.insert(entity, components);
		if previous.is_some() {
			debug!("Entity {} was added again, replacing its components", entity);
		}
		previous
	}

	pub fn get(&self, entity: EntityId) -> Option<&MatchedComponents> {
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

	pub fn iter(&self) -> impl Iterator<Item = (EntityId, &MatchedComponents)> {
		self.entities.iter().map(|(id, components)| (*id, components))
	}

	pub fn iter_entities(&self) -> impl Iterator<Item = EntityId> + '_ {
		self.entities.keys().copied()
	}
}
