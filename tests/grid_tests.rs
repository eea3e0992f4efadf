//! Grid tests - packed cells and the turn-delta codec

use tui_snake::core::grid::{decode_turn, encode_turn, Grid, EMPTY};
use tui_snake::types::{Direction, Pos};

use Direction::{Down, Left, Right, Up};

#[test]
fn test_encode_turn_table() {
    let table = [
        (Up, Up, 2),
        (Up, Right, 3),
        (Up, Down, 0),
        (Up, Left, 1),
        (Right, Up, 1),
        (Right, Right, 2),
        (Right, Down, 3),
        (Right, Left, 0),
        (Down, Up, 0),
        (Down, Right, 1),
        (Down, Down, 2),
        (Down, Left, 3),
        (Left, Up, 3),
        (Left, Right, 0),
        (Left, Down, 1),
        (Left, Left, 2),
    ];
    for (prev, next, expected) in table {
        assert_eq!(
            encode_turn(prev, next),
            expected,
            "encode_turn({:?}, {:?})",
            prev,
            next
        );
    }
}

#[test]
fn test_decode_turn_table() {
    let table = [
        (Up, 0, Down),
        (Up, 1, Left),
        (Up, 2, Up),
        (Up, 3, Right),
        (Right, 0, Left),
        (Right, 1, Up),
        (Right, 2, Right),
        (Right, 3, Down),
        (Down, 0, Up),
        (Down, 1, Right),
        (Down, 2, Down),
        (Down, 3, Left),
        (Left, 0, Right),
        (Left, 1, Down),
        (Left, 2, Left),
        (Left, 3, Up),
    ];
    for (prev, delta, expected) in table {
        assert_eq!(
            decode_turn(prev, delta),
            expected,
            "decode_turn({:?}, {})",
            prev,
            delta
        );
    }
}

#[test]
fn test_grid_byte_len_rounds_up() {
    assert_eq!(Grid::new(7, 7).byte_len(), 13);
    assert_eq!(Grid::new(4, 1).byte_len(), 1);
    assert_eq!(Grid::new(5, 1).byte_len(), 2);
    assert_eq!(Grid::new(40, 23).byte_len(), 230);
}

#[test]
fn test_grid_new_is_empty() {
    let grid = Grid::new(9, 5);
    assert_eq!(grid.cell_count(), 45);
    assert_eq!(grid.occupied_count(), 0);
    for y in 0..5 {
        for x in 0..9 {
            assert_eq!(grid.get(Pos::new(x, y)), EMPTY);
        }
    }
}

#[test]
fn test_grid_cells_are_independent() {
    let mut grid = Grid::new(7, 7);
    let a = Pos::new(3, 2);
    let b = Pos::new(4, 2);

    grid.set_turn(a, 3);
    grid.set_turn(b, 1);
    assert_eq!(grid.get(a), 3);
    assert_eq!(grid.get(b), 1);

    grid.clear(a);
    assert_eq!(grid.get(a), EMPTY);
    assert_eq!(grid.get(b), 1);
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_grid_index_round_trip() {
    let grid = Grid::new(7, 5);
    let pos = Pos::new(6, 4);
    assert_eq!(grid.index(pos), 34);
    assert_eq!(grid.pos_of(34), pos);
}
