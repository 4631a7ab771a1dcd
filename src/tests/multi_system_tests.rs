use crate::tests::{Position, RenderComponent, Velocity};
use crate::entities::EntityId;
use crate::prelude::*;

fn components<A: Component, B: Component>(a: A, b: B) -> MatchedComponents {
	MatchedComponents::from(vec![ComponentRef::new(a), ComponentRef::new(b)])
}

#[test]
pub fn overwrite_on_re_add() {
	let mut system = MultiSystem::new();
	let entity = EntityId::next();

	let first = components(Position { x: 1.0, y: 1.0 }, RenderComponent::default());
	let second = components(Position { x: 2.0, y: 2.0 }, RenderComponent::default());
	let (c, d) = (second[0].clone(), second[1].clone());

	assert!(system.add(entity, first).is_none());
	let previous = system.add(entity, second).unwrap();
	assert_eq!(previous.at::<Position>(0).unwrap().x, 1.0);

	assert_eq!(system.len(), 1);
	let stored = system.get(entity).unwrap();
	assert!(stored[0].ptr_eq(&c));
	assert!(stored[1].ptr_eq(&d));
}

#[test]
pub fn tracking() {
	let mut system = MultiSystem::new();
	assert!(system.is_empty());

	let ids = (0..8).map(|_| EntityId::next()).collect::<Vec<_>>();
	for (i, id) in ids.iter().enumerate() {
		system.add(*id, components(Position { x: i as f32, y: 0.0 }, Velocity::default()));
	}

	assert_eq!(system.len(), ids.len());
	assert!(ids.iter().all(|id| system.contains(*id)));
	assert!(!system.contains(EntityId::next()));

	let mut tracked = system.iter_entities().collect::<Vec<_>>();
	tracked.sort();
	assert_eq!(tracked, ids);

	for (_, components) in system.iter() {
		let position = components.at::<Position>(0).unwrap();
		let mut velocity = components.at_mut::<Velocity>(1).unwrap();
		velocity.x = position.x * 2.0;
	}

	let last = system.get(ids[7]).unwrap();
	assert_eq!(last.get_as::<Velocity>().unwrap().x, 14.0);
}

#[test]
pub fn single_system_tracking() {
	let mut system = SingleSystem::new();
	let entity = EntityId::next();

	let first = MatchedComponents::from(vec![ComponentRef::new(Position::default())]);
	let second = MatchedComponents::from(vec![ComponentRef::new(Position { x: 3.0, y: 0.0 })]);

	assert!(system.add(entity, first).is_none());
	assert!(system.add(entity, second).is_some());

	assert_eq!(system.len(), 1);
	assert!(system.contains(entity));
	assert_eq!(system.get(entity).unwrap().get::<Position>().unwrap().x, 3.0);
	assert_eq!(system.iter().count(), 1);
	assert_eq!(system.iter_entities().collect::<Vec<_>>(), [entity]);
}

#[test]
#[cfg(not(feature = "debug_only_assertions"))]
#[should_panic(expected = "received 2 components")]
pub fn single_system_rejects_multiple_components() {
	let mut system = SingleSystem::new();
	system.add(EntityId::next(), components(Position::default(), Velocity::default()));
}
