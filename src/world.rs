use crate::entities::{Entity, EntityId};
use crate::messages::Mailbox;
use std::sync::Arc;

/// The entities of a [scene](crate::scene::Scene) and the [`Mailbox`] its systems share.
pub struct World {
	name: String,
	entities: Vec<Entity>,
	mailbox: Arc<Mailbox>,
}

impl World {
	pub(crate) fn new(name: String, mailbox: Arc<Mailbox>) -> Self {
		Self {
			name,
			entities: Vec::new(),
			mailbox,
		}
	}

	/// Name of the owning scene.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// All entities, in the order they were added.
	pub fn entities(&self) -> &[Entity] {
		&self.entities
	}

	pub fn entity(&self, id: EntityId) -> Option<&Entity> {
		self.entities.iter().find(|e| e.id() == id)
	}

	pub fn mailbox(&self) -> &Arc<Mailbox> {
		&self.mailbox
	}

	pub(crate) fn push_entity(&mut self, entity: Entity) {
		self.entities.push(entity);
	}
}
