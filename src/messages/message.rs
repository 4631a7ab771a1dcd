use crate::components::AsAny;

/// A piece of information that can be sent through a [`Mailbox`](crate::messages::Mailbox).
///
/// The [name](Message::name) selects which listeners receive the message.
/// Use #\[derive([`Message`](scene_ecs_derive::Message))] to implement this trait
/// together with [`Named`](crate::components::Named).
pub trait Message: AsAny + Send + Sync {
	fn name(&self) -> &str;
}

impl dyn Message {
	pub fn is<T: Message>(&self) -> bool {
		self.as_any().is::<T>()
	}

	pub fn downcast_ref<T: Message>(&self) -> Option<&T> {
		self.as_any().downcast_ref()
	}
}
