use crate::error::{EcsError, Result};
use crate::systems::{InitContext, System};
use log::{debug, error, trace};
use std::collections::HashSet;
use crate::world::World;
use std::time::Duration;

pub(crate) struct SystemStore {
	state: State,
	names: HashSet<String>,
	systems: Vec<Box<dyn System>>,
}

#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
enum State {
	#[default]
	Uninitialized,
	Initializing,
	Initialized,
	Failed,
}

impl SystemStore {
	pub fn new() -> Self {
		Self {
			names: HashSet::default(),
			state: State::default(),
			systems: Vec::default(),
		}
	}

	pub fn add_system(&mut self, system: Box<dyn System>) -> Result<()> {
		match self.state {
			State::Uninitialized => {
				let name = system.name().to_string();
				if !self.names.insert(name.clone()) {
					return Err(EcsError::DuplicateSystem { name });
				}

				self.systems.push(system);
				Ok(())
			},
			State::Initializing | State::Initialized | State::Failed => Err(EcsError::SceneInitialized),
		}
	}

	pub fn is_initialized(&self) -> bool {
		self.state == State::Initialized
	}

	pub fn contains(&self, name: &str) -> bool {
		self.names.contains(name)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.systems.iter().map(|s| s.name())
	}

	pub fn get(&self, name: &str) -> Option<&dyn System> {
		self.systems.iter().find(|s| s.name() == name).map(|s| &**s)
	}

	pub fn get_mut(&mut self, name: &str) -> Option<&mut dyn System> {
		self.systems.iter_mut().find(|s| s.name() == name).map(|s| &mut **s)
	}

	/// Initializes every system, then hands each one the entities matching its requirements.
	pub fn setup_systems(&mut self, world: &mut World) -> Result<()> {
		match self.state {
			State::Uninitialized => {
				self.state = State::Initializing;
				if let Err(err) = self.init_systems(world) {
					error!("Scene \"{}\" failed to initialize: {}", world.name(), err);
					self.state = State::Failed;
					return Err(err);
				}

				self.resolve(world);
				self.state = State::Initialized;
				Ok(())
			},
			State::Initializing | State::Initialized => Err(EcsError::AlreadyInitialized),
			State::Failed => Err(EcsError::InitFailed),
		}
	}

	pub fn run_systems(&mut self, delta: Duration) {
		match self.state {
			State::Initialized => {
				for system in self.systems.iter_mut() {
					trace!("Updating system \"{}\"", system.name());
					system.update(delta);
				}
			},
			State::Uninitialized | State::Initializing | State::Failed => {
				panic!("Systems must be initialized before they can run");
			},
		}
	}

	// Systems appended during init land at the end of the list and are reached by the same loop.
	fn init_systems(&mut self, world: &mut World) -> Result<()> {
		let mut index = 0;
		while index < self.systems.len() {
			let (before, rest) = self.systems.split_at_mut(index);
			let (system, after) = match rest.split_first_mut() {
				Some(split) => split,
				None => break,
			};
			let mut context = InitContext::new(world, &self.names, [&*before, &*after]);

			let name = system.name().to_string();
			debug!("Initializing system \"{}\"", name);
			system
				.init(&mut context)
				.map_err(|source| EcsError::SystemInit { system: name, source })?;

			let (systems, entities) = context.into_pending();
			for system in systems {
				debug!("System \"{}\" was added during initialization", system.name());
				self.names.insert(system.name().to_string());
				self.systems.push(system);
			}
			for entity in entities {
				world.push_entity(entity);
			}

			index += 1;
		}

		Ok(())
	}

	fn resolve(&mut self, world: &World) {
		for system in self.systems.iter_mut() {
			let required = system
				.required_components()
				.iter()
				.map(|name| name.to_string())
				.collect::<Vec<_>>();

			let mut matched = 0;
			for entity in world.entities() {
				if let Some(components) = entity.resolve(&required) {
					system.add(entity.id(), components);
					matched += 1;
				}
			}

			debug!(
				"System \"{}\" requiring {:?} matched {} of {} entities",
				system.name(),
				required,
				matched,
				world.entities().len()
			);
		}
	}
}
