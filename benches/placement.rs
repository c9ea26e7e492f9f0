use criterion::{criterion_group, criterion_main, Criterion, black_box};

use brickworld::builder::{AutoBuilder, BrickBox, BrickTemplate};
use brickworld::core::types::{Dimensions, Position};
use brickworld::{Brick, World};

/// 20^3 world with a few dozen bricks already stacked up
fn populated_world() -> World {
    let mut brick_box = BrickBox::new();
    brick_box.add(BrickTemplate::new(Dimensions::splat(2), "#a8e6cf"), 40);
    brick_box.add(BrickTemplate::new(Dimensions::new(4, 2, 2), "#ffd3b6"), 20);
    let mut world = World::new(Dimensions::splat(20));
    AutoBuilder::new(brick_box, 7)
        .run(&mut world, 60)
        .expect("populating bench world");
    world.take_events();
    world
}

fn bench_possible_positions_empty(c: &mut Criterion) {
    let world = World::new(Dimensions::splat(20));
    let brick = Brick::new(Dimensions::splat(2), "#a8e6cf").unwrap();

    c.bench_function("possible_positions_empty_20", |b| {
        b.iter(|| world.possible_positions_for(black_box(&brick)));
    });
}

fn bench_possible_positions_populated(c: &mut Criterion) {
    let world = populated_world();
    let brick = Brick::new(Dimensions::new(2, 4, 2), "#ff8b94").unwrap();

    c.bench_function("possible_positions_populated_20", |b| {
        b.iter(|| world.possible_positions_for(black_box(&brick)));
    });
}

fn bench_place_remove(c: &mut Criterion) {
    let mut world = populated_world();
    let id = world.add_brick(Brick::new(Dimensions::splat(2), "#dcedc1").unwrap());
    let position = world
        .possible_positions_for(world.brick(id).unwrap())
        .last()
        .copied()
        .unwrap_or(Position::ZERO);

    c.bench_function("place_remove_populated_20", |b| {
        b.iter(|| {
            world.place(id, black_box(position)).unwrap();
            world.remove(id).unwrap();
            world.take_events();
        });
    });
}

fn bench_auto_build(c: &mut Criterion) {
    c.bench_function("auto_build_30_bricks", |b| {
        b.iter(|| {
            let mut brick_box = BrickBox::new();
            brick_box.add(BrickTemplate::new(Dimensions::splat(2), "#ffaaa5"), 30);
            let mut world = World::new(Dimensions::splat(20));
            AutoBuilder::new(brick_box, black_box(3)).run(&mut world, 30).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_possible_positions_empty,
    bench_possible_positions_populated,
    bench_place_remove,
    bench_auto_build,
);
criterion_main!(benches);
