use crate::components::Named;
use crate::messages::Message;
use std::collections::HashMap;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use log::trace;
use std::sync::Arc;
use std::fmt;

type Listener = Arc<dyn Fn(&dyn Message) + Send + Sync>;

lazy_static! {
	static ref GLOBAL_MAILBOX: Arc<Mailbox> = Arc::new(Mailbox::new());
}

/// A publish/subscribe router for [messages](Message), keyed by [message name](Message::name).
///
/// Delivery is synchronous: [`send`](Mailbox::send) invokes every listener registered for the
/// message's name, in registration order, before returning.
/// The listener list is copied before dispatch and no lock is held while listeners run,
/// so a listener may itself [`send`](Mailbox::send) or [`listen`](Mailbox::listen).
/// Listeners registered during a dispatch are not invoked for that dispatch.
///
/// The [`Mailbox`] is lock-protected, which is why listeners must be `Send + Sync`.
/// Subscriptions last as long as the [`Mailbox`] itself; there is no way to unsubscribe.
#[derive(Default)]
pub struct Mailbox {
	listeners: RwLock<HashMap<String, Vec<Listener>>>,
}

impl Mailbox {
	pub fn new() -> Self {
		Self::default()
	}

	/// The process-wide [`Mailbox`].
	///
	/// [Scenes](crate::scene::Scene) create their own [`Mailbox`] unless given this one
	/// through [`SceneBuilder::mailbox`](crate::scene::SceneBuilder::mailbox).
	pub fn global() -> Arc<Mailbox> {
		GLOBAL_MAILBOX.clone()
	}

	/// Adds `listener` to the listeners of messages named `name`.
	pub fn listen<F>(&self, name: impl Into<String>, listener: F)
	where
		F: Fn(&dyn Message) + Send + Sync + 'static,
	{
		let name = name.into();
		trace!("Listening for \"{}\" messages", name);
		self.listeners.write().entry(name).or_default().push(Arc::new(listener));
	}

	/// Adds a listener for messages of type `M`.
	///
	/// Messages named [`M::NAME`](Named::NAME) that are not of type `M` are ignored by `listener`.
	pub fn listen_to<M, F>(&self, listener: F)
	where
		M: Message + Named,
		F: Fn(&M) + Send + Sync + 'static,
	{
		self.listen(M::NAME, move |message: &dyn Message| {
			if let Some(message) = message.downcast_ref::<M>() {
				listener(message);
			}
		});
	}

	/// Delivers `message` to every listener of its name.
	///
	/// Returns the number of listeners invoked;
	/// sending a message nobody listens to is not an error.
	pub fn send(&self, message: &dyn Message) -> usize {
		let listeners = self.listeners.read().get(message.name()).cloned().unwrap_or_default();

		trace!("Sending \"{}\" to {} listener(s)", message.name(), listeners.len());
		for listener in &listeners {
			listener(message);
		}

		listeners.len()
	}

	/// Number of listeners registered for messages named `name`.
	pub fn listener_count(&self, name: &str) -> usize {
		self.listeners.read().get(name).map_or(0, Vec::len)
	}
}

impl fmt::Debug for Mailbox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let listeners = self.listeners.read();
		f.debug_map()
			.entries(listeners.iter().map(|(name, list)| (name, list.len())))
			.finish()
	}
}
