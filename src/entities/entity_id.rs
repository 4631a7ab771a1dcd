use std::sync::atomic::{AtomicU64, Ordering};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use std::fmt;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A process-unique identifier of an [entity](crate::entities::Entity).
///
/// Identifiers are never reused and are not stable between program re-runs.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct EntityId(u64);

impl EntityId {
	pub(crate) fn next() -> Self {
		let value = NEXT_ID.fetch_add(1, Ordering::Relaxed);
		debug_assert_ne!(value, u64::MAX, "Entity identifiers exhausted");
		Self(value)
	}

	#[inline(always)]
	pub const fn value(&self) -> u64 {
		self.0
	}
}

impl nohash_hasher::IsEnabled for EntityId {}

impl fmt::Display for EntityId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A map keyed by [`EntityId`] that skips hashing.
pub type EntityMap<V> = HashMap<EntityId, V, BuildHasherDefault<NoHashHasher<EntityId>>>;
