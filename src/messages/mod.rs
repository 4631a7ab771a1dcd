//! [Messages](Message) let [systems](crate::systems::System) talk to each other through a [`Mailbox`]
//! without holding references to one another.

mod mailbox;
mod message;

pub use mailbox::*;
pub use message::*;
pub use scene_ecs_derive::Message;
