use crate::entities::{Entity, EntityId};
use crate::systems::{System, SystemStore};
use log::{debug, info, trace};
use crate::messages::Mailbox;
use crate::error::Result;
use std::time::Duration;
use crate::world::World;
use std::ops::Deref;
use crate::time::Time;
use std::sync::Arc;

/// A container for [entities](Entity) and [systems](System).
///
/// [`init`](Scene::init) matches every system against every entity once;
/// [`update`](Scene::update) then runs all systems, in the order they were added, once per frame.
/// Entities added after [`init`](Scene::init) are kept by the scene but never matched to a system.
pub struct Scene {
	world: World,
	system_store: SystemStore,
	time: Time,
}

impl Scene {
	/// Creates an empty [`Scene`] with its own [`Mailbox`].
	pub fn new(name: impl Into<String>) -> Self {
		Self::with_mailbox(name, Arc::new(Mailbox::new()))
	}

	/// Creates an empty [`Scene`] whose systems communicate through `mailbox`.
	pub fn with_mailbox(name: impl Into<String>, mailbox: Arc<Mailbox>) -> Self {
		Self {
			world: World::new(name.into(), mailbox),
			system_store: SystemStore::new(),
			time: Time::new(),
		}
	}

	pub fn builder() -> SceneBuilder {
		SceneBuilder::default()
	}

	/// Add an [entity](Entity) to the [`Scene`].
	pub fn add_entity(&mut self, entity: Entity) -> EntityId {
		let id = entity.id();
		if self.system_store.is_initialized() {
			debug!("Entity {} was added to initialized scene \"{}\" and will not be matched", id, self.name());
		}

		self.world.push_entity(entity);
		id
	}

	/// Add a [system](System) to the [`Scene`].
	///
	/// Fails if the scene already has a system with the same name, or if it has been initialized.
	pub fn add_system<T: System>(&mut self, system: T) -> Result<()> {
		self.add_boxed_system(Box::new(system))
	}

	pub fn add_boxed_system(&mut self, system: Box<dyn System>) -> Result<()> {
		self.system_store.add_system(system)
	}

	/// Names of all systems, in update order.
	pub fn systems(&self) -> impl Iterator<Item = &str> + '_ {
		self.system_store.names()
	}

	pub fn has_system(&self, name: &str) -> bool {
		self.system_store.contains(name)
	}

	/// The system named `name`, if it exists and is of type `T`.
	pub fn system<T: System>(&self, name: &str) -> Option<&T> {
		self.system_store.get(name)?.downcast_ref()
	}

	/// The system named `name`, if it exists and is of type `T`.
	pub fn system_mut<T: System>(&mut self, name: &str) -> Option<&mut T> {
		self.system_store.get_mut(name)?.downcast_mut()
	}

	pub fn is_initialized(&self) -> bool {
		self.system_store.is_initialized()
	}

	/// Timing of the frames driven by [`tick`](Scene::tick).
	pub fn time(&self) -> &Time {
		&self.time
	}

	/// Initialize all [systems](System) and hand each of them the [entities](Entity) holding
	/// every component it requires.
	/// Must be called before the scene can be updated.
	///
	/// A system failing to initialize aborts the whole initialization; the scene can't be used afterwards.
	pub fn init(&mut self) -> Result<()> {
		info!("Initializing scene \"{}\"", self.name());
		self.system_store.setup_systems(&mut self.world)?;
		self.time = Time::new();

		info!(
			"Scene \"{}\" initialized with {} entities and {} systems",
			self.name(),
			self.world.entities().len(),
			self.system_store.names().count()
		);
		Ok(())
	}

	/// Run every [system](System) once, passing `delta` as the time elapsed since the previous frame.
	///
	/// # Panics
	/// Panics if the scene has not been successfully initialized.
	pub fn update(&mut self, delta: Duration) {
		trace!("Updating scene \"{}\" by {:?}", self.world.name(), delta);
		self.system_store.run_systems(delta);
	}

	/// Run every [system](System) once, passing the time elapsed since the previous tick
	/// (or since [`init`](Scene::init) for the first one).
	pub fn tick(&mut self) -> Duration {
		self.time.advance();
		let delta = self.time.delta();
		self.update(delta);
		delta
	}
}

impl Deref for Scene {
	type Target = World;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&self.world
	}
}

/// A utility structure to assemble a [`Scene`].
#[derive(Default)]
pub struct SceneBuilder {
	name: String,
	mailbox: Option<Arc<Mailbox>>,
	entities: Vec<Entity>,
	systems: Vec<Box<dyn System>>,
}

impl SceneBuilder {
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	/// Share `mailbox` with the scene's systems instead of creating a new one.
	pub fn mailbox(mut self, mailbox: Arc<Mailbox>) -> Self {
		self.mailbox = Some(mailbox);
		self
	}

	pub fn entity(mut self, entity: Entity) -> Self {
		self.entities.push(entity);
		self
	}

	pub fn system<T: System>(mut self, system: T) -> Self {
		self.systems.push(Box::new(system));
		self
	}

	/// Construct the scene from the previously specified parts.
	/// Fails if two systems share a name.
	pub fn build(self) -> Result<Scene> {
		let mailbox = self.mailbox.unwrap_or_default();
		let mut scene = Scene::with_mailbox(self.name, mailbox);

		for entity in self.entities {
			scene.add_entity(entity);
		}
		for system in self.systems {
			scene.add_boxed_system(system)?;
		}

		Ok(scene)
	}
}
