mod multi_system_tests;

use crate::prelude::*;
use std::cell::RefCell;
use std::time::Duration;
use std::rc::Rc;

pub fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct Position {
	pub x: f32,
	pub y: f32,
}

#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct Velocity {
	pub x: f32,
	pub y: f32,
}

#[derive(Component, Debug, Default, Clone, PartialEq)]
#[name = "Render"]
pub struct RenderComponent {
	pub model: String,
	pub loaded: bool,
}

#[derive(Message, Debug, Clone, PartialEq)]
#[name = "Keyboard"]
pub struct KeyboardMessage {
	pub key: char,
}

#[derive(Message, Debug, Clone, PartialEq)]
pub struct Collision {
	pub a: EntityId,
	pub b: EntityId,
}

pub type Journal = Rc<RefCell<Vec<String>>>;

/// A [System] that writes every lifecycle call it receives to a shared journal.
pub struct RecordingSystem {
	name: &'static str,
	required: &'static [&'static str],
	journal: Journal,
	pub tracked: MultiSystem,
	pub inits: usize,
	pub deltas: Vec<Duration>,
}

impl RecordingSystem {
	pub fn new(name: &'static str, required: &'static [&'static str], journal: &Journal) -> Self {
		Self {
			name,
			required,
			journal: journal.clone(),
			tracked: MultiSystem::new(),
			inits: 0,
			deltas: Vec::new(),
		}
	}
}

impl System for RecordingSystem {
	fn name(&self) -> &str {
		self.name
	}

	fn required_components(&self) -> &[&str] {
		self.required
	}

	fn init(&mut self, _context: &mut InitContext<'_>) -> std::result::Result<(), BoxError> {
		self.inits += 1;
		self.journal.borrow_mut().push(format!("init {}", self.name));
		Ok(())
	}

	fn add(&mut self, entity: EntityId, components: MatchedComponents) {
		self.journal.borrow_mut().push(format!("add {} {}", self.name, entity));
		self.tracked.add(entity, components);
	}

	fn update(&mut self, delta: Duration) {
		self.journal.borrow_mut().push(format!("update {}", self.name));
		self.deltas.push(delta);
	}
}

pub fn journal() -> Journal {
	Rc::new(RefCell::new(Vec::new()))
}
