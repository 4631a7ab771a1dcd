use criterion::*;
use nalgebra_glm::Vec3;
use scene_ecs::prelude::*;
use std::time::Duration;

const COUNT: usize = 10000;

#[derive(Default, Component)]
struct Translation(Vec3);

#[derive(Default, Component)]
struct Rotation;

#[derive(Default, Component)]
struct Velocity(Vec3);

#[derive(Message)]
struct Tick(f32);

#[derive(Default)]
struct MovementSystem {
    tracked: MultiSystem,
}

impl System for MovementSystem {
    fn name(&self) -> &str {
        "Movement"
    }

    fn required_components(&self) -> &[&str] {
        &[Translation::NAME, Velocity::NAME]
    }

    fn add(&mut self, entity: EntityId, components: MatchedComponents) {
        self.tracked.add(entity, components);
    }

    fn update(&mut self, delta: Duration) {
        for (_, components) in self.tracked.iter() {
            let velocity = components.at::<Velocity>(1).unwrap().0;
            components.at_mut::<Translation>(0).unwrap().0 += velocity * delta.as_secs_f32();
        }
    }
}

fn populate(builder: SceneBuilder) -> SceneBuilder {
    (0..COUNT).fold(builder, |builder, i| {
        let entity = Entity::new()
            .with_component(Translation::default())
            .with_component(Velocity(Vec3::new(1.0, 0.0, 0.0)));

        // Every other entity also carries a rotation, without affecting matching.
        let entity = match i % 2 {
            0 => entity.with_component(Rotation),
            _ => entity,
        };
        builder.entity(entity)
    })
}

fn resolve_entities(c: &mut Criterion) {
    c.bench_function("Resolve entities", |b| {
        b.iter_batched(
            || {
                populate(Scene::builder())
                    .system(MovementSystem::default())
                    .build()
                    .unwrap()
            },
            |mut scene| scene.init().unwrap(),
            BatchSize::PerIteration,
        );
    });
}

fn update_systems(c: &mut Criterion) {
    c.bench_function("Update systems", |b| {
        let mut scene = populate(Scene::builder())
            .system(MovementSystem::default())
            .build()
            .unwrap();
        scene.init().unwrap();

        b.iter(|| scene.update(Duration::from_millis(16)));
    });
}

fn send_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("Send messages");
    for listeners in [1, 16, 256] {
        let mailbox = Mailbox::new();
        for _ in 0..listeners {
            mailbox.listen_to(|tick: &Tick| {
                black_box(tick.0);
            });
        }

        group.bench_function(format!("{} listeners", listeners), |b| {
            b.iter(|| mailbox.send(&Tick(black_box(0.016))))
        });
    }
}

criterion_group!(benchmarks, resolve_entities, update_systems, send_messages);
criterion_main!(benchmarks);
