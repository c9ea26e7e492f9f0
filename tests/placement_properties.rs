//! Property tests: random place/remove sequences keep the grid, the placed
//! roster and the connector graph consistent with each other.

use brickworld::core::error::{BrickError, PlacementError};
use brickworld::core::types::{Dimensions, Position};
use brickworld::{Brick, BrickId, World};
use proptest::prelude::*;

const SHAPES: [[u32; 3]; 4] = [[2, 2, 2], [3, 2, 2], [2, 4, 2], [2, 2, 3]];

#[derive(Clone, Debug)]
enum Op {
    /// Place a fresh brick of `SHAPES[shape]` at one of its possible positions
    Place { shape: usize, pick: usize },
    /// Remove the `pick`-th placed brick
    Remove { pick: usize },
    /// Try an arbitrary position and compare with `can_place_at`
    Probe { shape: usize, position: [i32; 3] },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..SHAPES.len(), any::<usize>()).prop_map(|(shape, pick)| Op::Place { shape, pick }),
        1 => any::<usize>().prop_map(|pick| Op::Remove { pick }),
        1 => (0..SHAPES.len(), prop::array::uniform3(-2i32..8))
            .prop_map(|(shape, position)| Op::Probe { shape, position }),
    ]
}

fn brick(shape: usize) -> Brick {
    Brick::new(Dimensions::from_array(SHAPES[shape]), "#dcedc1").unwrap()
}

/// Grid cells, placed roster and connectors all agree
fn assert_consistent(world: &World) {
    for &id in world.placed() {
        let brick = world.brick(id).expect("placed brick in custody");
        let bounds = brick.bounds().expect("placed brick has a position");
        for cell in bounds.cells() {
            assert_eq!(world.occupant(cell), Some(id), "cell {cell} of {id}");
        }
    }

    for cell in world.bounds().cells() {
        if let Some(id) = world.occupant(cell) {
            assert!(world.placed().contains(&id), "cell {cell} points at unplaced {id}");
            let bounds = world.brick(id).and_then(Brick::bounds).unwrap();
            assert!(bounds.contains(cell));
        }
    }

    for (id, brick) in world.bricks() {
        let Some(position) = brick.position() else {
            assert!(!brick.is_connected_to_any(), "unplaced {id} keeps connectors");
            continue;
        };
        let top = position.z + brick.dimensions().z as i32 - 1;
        for (offset, other) in brick.bottom_connectors().iter() {
            let own = Position::new(position.x + offset.x as i32, position.y + offset.y as i32, position.z);
            let below = own - Position::Z;
            assert_eq!(world.occupant(below), Some(other));
            assert_eq!(mirror_offset(world, other, below, true), Some(id));
        }
        for (offset, other) in brick.top_connectors().iter() {
            let own = Position::new(position.x + offset.x as i32, position.y + offset.y as i32, top);
            let above = own + Position::Z;
            assert_eq!(world.occupant(above), Some(other));
            assert_eq!(mirror_offset(world, other, above, false), Some(id));
        }
    }
}

/// What `other`'s connector at `cell` points to, on its top or bottom face
fn mirror_offset(world: &World, other: BrickId, cell: Position, top: bool) -> Option<BrickId> {
    let brick = world.brick(other)?;
    let offset = (cell - brick.position()?).truncate().as_uvec2();
    if top {
        brick.top_connectors().get(offset)
    } else {
        brick.bottom_connectors().get(offset)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_sequences_stay_consistent(ops in prop::collection::vec(arb_op(), 1..40)) {
        let mut world = World::new(Dimensions::new(8, 8, 6));
        for op in ops {
            match op {
                Op::Place { shape, pick } => {
                    let fresh = brick(shape);
                    let positions = world.possible_positions_for(&fresh);
                    if positions.is_empty() {
                        continue;
                    }
                    let position = positions[pick % positions.len()];
                    let id = world.add_brick(fresh);
                    prop_assert_eq!(world.place(id, position), Ok(()));
                }
                Op::Remove { pick } => {
                    if world.placed().is_empty() {
                        continue;
                    }
                    let id = world.placed()[pick % world.placed().len()];
                    prop_assert_eq!(world.remove(id), Ok(()));
                    prop_assert!(!world.placed().contains(&id));
                }
                Op::Probe { shape, position } => {
                    let dimensions = Dimensions::from_array(SHAPES[shape]);
                    let position = Position::from_array(position);
                    let expected = world.can_place_at(dimensions, position);
                    let id = world.add_brick(brick(shape));
                    let result = world.place(id, position);
                    prop_assert_eq!(result.is_ok(), expected, "{:?} at {}", result, position);
                }
            }
            assert_consistent(&world);
        }
    }

    #[test]
    fn remove_then_place_restores_connectors(
        picks in prop::collection::vec((0..SHAPES.len(), any::<usize>()), 2..12),
        victim in any::<usize>(),
    ) {
        let mut world = World::new(Dimensions::splat(7));
        for (shape, pick) in picks {
            let fresh = brick(shape);
            let positions = world.possible_positions_for(&fresh);
            if let Some(&position) = positions.get(pick % positions.len().max(1)) {
                let id = world.add_brick(fresh);
                world.place(id, position).unwrap();
            }
        }
        let id = world.placed()[victim % world.placed().len()];
        let position = world.brick(id).unwrap().position().unwrap();
        let before: Vec<_> = world.bricks().map(|(id, b)| (id, b.clone())).collect();

        world.remove(id).unwrap();
        assert_consistent(&world);
        prop_assert_eq!(world.place(id, position), Ok(()));
        assert_consistent(&world);

        for (other, brick) in before {
            prop_assert_eq!(world.brick(other), Some(&brick));
        }
    }

    #[test]
    fn thin_bricks_are_rejected(
        dims in prop::array::uniform3(0u32..5).prop_filter("has a thin axis", |d| d.iter().any(|&v| v <= 1)),
    ) {
        let result = Brick::new(Dimensions::from_array(dims), "#ffd3b6");
        prop_assert!(matches!(result, Err(BrickError::DimensionTooSmall(_))));
    }

    #[test]
    fn floating_brick_is_unsupported(x in 0i32..6, y in 0i32..6, z in 1i32..6) {
        let mut world = World::new(Dimensions::splat(8));
        let id = world.add_brick(brick(0));
        prop_assert_eq!(world.place(id, Position::new(x, y, z)), Err(PlacementError::Unsupported(Position::new(x, y, z))));
        prop_assert!(world.placed().is_empty());
        prop_assert!(!world.has_pending_events());
    }

    #[test]
    fn positions_sorted_and_placeable(
        picks in prop::collection::vec(any::<usize>(), 0..8),
        shape in 0..SHAPES.len(),
    ) {
        let mut world = World::new(Dimensions::new(6, 6, 6));
        for pick in picks {
            let fresh = brick(0);
            let positions = world.possible_positions_for(&fresh);
            if positions.is_empty() {
                break;
            }
            let id = world.add_brick(fresh);
            world.place(id, positions[pick % positions.len()]).unwrap();
        }

        let template = brick(shape);
        let positions = world.possible_positions_for(&template);
        let mut sorted = positions.clone();
        sorted.sort_by_key(|p| (p.z, p.x, p.y));
        prop_assert_eq!(&positions, &sorted);

        for position in positions {
            let mut probe = world.clone();
            let id = probe.add_brick(template.clone());
            prop_assert_eq!(probe.place(id, position), Ok(()));
        }
    }
}

#[test]
fn two_by_two_tower() {
    brickworld::core::logging::try_init();
    let mut world = World::new(Dimensions::new(4, 4, 6));
    let ids: Vec<_> = (0..3).map(|_| world.add_brick(brick(0))).collect();
    for (level, &id) in ids.iter().enumerate() {
        world.place(id, Position::new(0, 0, 2 * level as i32)).unwrap();
    }
    assert_consistent(&world);

    let middle = world.brick(ids[1]).unwrap();
    assert_eq!(middle.adjacent_bricks().into_iter().collect::<Vec<_>>(), vec![ids[0], ids[2]]);
    assert!(world.possible_positions_for(&brick(0)).iter().all(|p| p.z == 0));
}

#[test]
fn offset_stack_links_single_cell() {
    let mut world = World::new(Dimensions::splat(6));
    let lower = world.add_brick(brick(0));
    let upper = world.add_brick(brick(0));
    world.place(lower, Position::ZERO).unwrap();
    world.place(upper, Position::new(1, 1, 2)).unwrap();
    assert_consistent(&world);
    assert_eq!(world.brick(upper).unwrap().bottom_connectors().occupied_count(), 1);
    assert_eq!(world.brick(lower).unwrap().top_connectors().occupied_count(), 1);
}
