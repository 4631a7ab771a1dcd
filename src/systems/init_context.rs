use crate::entities::{Entity, EntityId};
use crate::error::{EcsError, Result};
use std::collections::HashSet;
use crate::systems::System;
use crate::world::World;
use std::ops::Deref;

/// The view of a [scene](crate::scene::Scene) a [system](System) receives during [`System::init`].
///
/// Dereferences to the scene's [`World`] for access to its entities and [mailbox](crate::messages::Mailbox).
/// Systems and entities added through the context are appended to the scene once the current
/// system's initialization returns: added systems are initialized later in the same pass,
/// and both take part in entity matching.
pub struct InitContext<'l> {
	world: &'l World,
	names: &'l HashSet<String>,
	peers: [&'l [Box<dyn System>]; 2],
	systems: Vec<Box<dyn System>>,
	entities: Vec<Entity>,
}

impl<'l> InitContext<'l> {
	/// `peers` holds the registered systems before and after the one being initialized.
	pub(crate) fn new(world: &'l World, names: &'l HashSet<String>, peers: [&'l [Box<dyn System>]; 2]) -> Self {
		Self {
			world,
			names,
			peers,
			systems: Vec::new(),
			entities: Vec::new(),
		}
	}

	/// Returns `true` if the scene has, or is about to receive, a system with the given name.
	pub fn has_system(&self, name: &str) -> bool {
		self.names.contains(name) || self.systems.iter().any(|s| s.name() == name)
	}

	/// The system named `name`, if it exists and is of type `T`.
	///
	/// Systems added through this context are included.
	/// The system currently being initialized can't look itself up.
	pub fn system<T: System>(&self, name: &str) -> Option<&T> {
		self.peers
			.iter()
			.flat_map(|peers| peers.iter())
			.chain(self.systems.iter())
			.find(|s| s.name() == name)
			.and_then(|s| (**s).downcast_ref())
	}

	/// Appends a [system](System) to the scene.
	pub fn add_system<T: System>(&mut self, system: T) -> Result<()> {
		if self.has_system(system.name()) {
			return Err(EcsError::DuplicateSystem {
				name: system.name().to_string(),
			});
		}

		self.systems.push(Box::new(system));
		Ok(())
	}

	/// Appends an [entity](Entity) to the scene.
	pub fn add_entity(&mut self, entity: Entity) -> EntityId {
		let id = entity.id();
		self.entities.push(entity);
		id
	}

	pub(crate) fn into_pending(self) -> (Vec<Box<dyn System>>, Vec<Entity>) {
		(self.systems, self.entities)
	}
}

impl Deref for InitContext<'_> {
	type Target = World;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		self.world
	}
}
