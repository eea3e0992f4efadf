//! Snake tests - extension, retraction and wraparound on small boards

use std::collections::HashSet;

use tui_snake::core::grid::Grid;
use tui_snake::core::snake::{wrap_step, Extension, Snake};
use tui_snake::types::{Direction, Pos};

/// One tick's worth of steering plus extension
fn step(snake: &mut Snake, grid: &mut Grid, dir: Direction) -> Extension {
    snake.latch_heading();
    snake.turn(dir);
    snake.extend_head(grid)
}

fn occupied_cells(grid: &Grid) -> HashSet<Pos> {
    let mut cells = HashSet::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Pos::new(x, y);
            if grid.is_occupied(pos) {
                cells.insert(pos);
            }
        }
    }
    cells
}

#[test]
fn test_extend_left_wraps_then_retracts_in_order() {
    let mut grid = Grid::new(7, 7);
    let start = Pos::new(3, 3);
    assert!(!grid.is_occupied(start));

    let mut snake = Snake::new(&mut grid, start, Direction::Left);
    assert!(grid.is_occupied(start));

    for x in [2, 1, 0] {
        let expected = Pos::new(x, 3);
        assert!(!grid.is_occupied(expected));
        assert_eq!(snake.extend_head(&mut grid), Extension::Moved(expected));
        assert_eq!(snake.head(), expected);
        assert!(grid.is_occupied(expected));
    }

    // Left of column 0 is column 6
    assert_eq!(snake.extend_head(&mut grid), Extension::Moved(Pos::new(6, 3)));
    assert_eq!(snake.len(), 5);

    for x in [3, 2, 1] {
        let expected = Pos::new(x, 3);
        assert_eq!(snake.tail(), expected);
        assert!(grid.is_occupied(expected));
        assert_eq!(snake.retract_tail(&mut grid), expected);
        assert!(!grid.is_occupied(expected));
    }
    assert_eq!(snake.tail(), Pos::new(0, 3));
    assert_eq!(snake.len(), 2);
}

#[test]
fn test_wrap_step_all_edges() {
    let (w, h) = (7, 5);
    assert_eq!(wrap_step(Pos::new(0, 2), Direction::Left, w, h), Pos::new(6, 2));
    assert_eq!(wrap_step(Pos::new(6, 2), Direction::Right, w, h), Pos::new(0, 2));
    assert_eq!(wrap_step(Pos::new(3, 0), Direction::Up, w, h), Pos::new(3, 4));
    assert_eq!(wrap_step(Pos::new(3, 4), Direction::Down, w, h), Pos::new(3, 0));
    assert_eq!(wrap_step(Pos::new(3, 2), Direction::Up, w, h), Pos::new(3, 1));
}

#[test]
fn test_loop_into_own_body_collides() {
    let mut grid = Grid::new(7, 7);
    let start = Pos::new(3, 3);
    let mut snake = Snake::new(&mut grid, start, Direction::Right);

    assert!(!step(&mut snake, &mut grid, Direction::Right).is_collision());
    assert!(!step(&mut snake, &mut grid, Direction::Down).is_collision());
    assert!(!step(&mut snake, &mut grid, Direction::Left).is_collision());
    assert_eq!(
        step(&mut snake, &mut grid, Direction::Up),
        Extension::Collided(start)
    );
    assert_eq!(snake.len(), 4);
    assert_eq!(grid.occupied_count(), 4);
}

#[test]
fn test_reversal_collides_with_neck() {
    let mut grid = Grid::new(7, 7);
    let mut snake = Snake::new(&mut grid, Pos::new(3, 3), Direction::Right);
    step(&mut snake, &mut grid, Direction::Right);
    step(&mut snake, &mut grid, Direction::Right);
    assert_eq!(snake.head(), Pos::new(5, 3));

    assert_eq!(
        step(&mut snake, &mut grid, Direction::Left),
        Extension::Collided(Pos::new(4, 3))
    );
}

#[test]
fn test_single_cell_snake_ignores_reversal() {
    let mut grid = Grid::new(7, 7);
    let mut snake = Snake::new(&mut grid, Pos::new(3, 3), Direction::Right);

    snake.latch_heading();
    assert!(!snake.turn(Direction::Left));
    assert_eq!(snake.extend_head(&mut grid), Extension::Moved(Pos::new(4, 3)));
    assert_eq!(grid.occupied_count(), 2);
}

#[test]
fn test_tail_follows_turns() {
    let mut grid = Grid::new(7, 7);
    let mut snake = Snake::new(&mut grid, Pos::new(1, 1), Direction::Right);

    let path = [
        Direction::Right,
        Direction::Down,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    for dir in path {
        assert!(!step(&mut snake, &mut grid, dir).is_collision());
    }
    assert_eq!(snake.head(), Pos::new(1, 2));

    let expected_tail_path = [
        Pos::new(1, 1),
        Pos::new(2, 1),
        Pos::new(2, 2),
        Pos::new(2, 3),
        Pos::new(1, 3),
    ];
    for (i, &pos) in expected_tail_path.iter().enumerate() {
        assert_eq!(snake.tail(), pos, "tail step {}", i);
        assert_eq!(snake.retract_tail(&mut grid), pos);
    }
    assert_eq!(snake.tail(), snake.head());
    assert_eq!(snake.tail_direction(), Direction::Up);
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_body_matches_occupied_cells() {
    let mut grid = Grid::new(9, 9);
    let mut snake = Snake::new(&mut grid, Pos::new(4, 4), Direction::Up);

    // Grow for a while, then move at constant length along a zigzag that
    // wraps the top edge.
    let turns = [
        Direction::Up,
        Direction::Up,
        Direction::Right,
        Direction::Up,
        Direction::Up,
        Direction::Left,
        Direction::Up,
        Direction::Up,
        Direction::Up,
        Direction::Right,
        Direction::Right,
        Direction::Down,
    ];
    for (i, dir) in turns.into_iter().enumerate() {
        assert!(!step(&mut snake, &mut grid, dir).is_collision());
        if i >= 5 {
            snake.retract_tail(&mut grid);
        }

        let body: Vec<Pos> = snake.body(&grid).collect();
        assert_eq!(body.len(), snake.len());
        assert_eq!(body.first(), Some(&snake.tail()));
        assert_eq!(body.last(), Some(&snake.head()));

        let unique: HashSet<Pos> = body.iter().copied().collect();
        assert_eq!(unique, occupied_cells(&grid));
        assert_eq!(grid.occupied_count(), snake.len());
    }
}

#[test]
fn test_seventh_left_extension_hits_start_cell() {
    let mut grid = Grid::new(7, 7);
    let start = Pos::new(3, 3);
    let mut snake = Snake::new(&mut grid, start, Direction::Left);

    for x in [2, 1, 0, 6, 5, 4] {
        assert_eq!(snake.extend_head(&mut grid), Extension::Moved(Pos::new(x, 3)));
    }
    assert_eq!(snake.len(), 7);

    assert_eq!(snake.extend_head(&mut grid), Extension::Collided(start));
    // The whole row is still the body; nothing was re-marked.
    assert_eq!(grid.occupied_count(), 7);
    assert_eq!(snake.len(), 7);
}

#[test]
fn test_extend_up_from_top_row_wraps_to_bottom() {
    let mut grid = Grid::new(7, 7);
    let mut snake = Snake::new(&mut grid, Pos::new(2, 0), Direction::Up);
    assert_eq!(snake.extend_head(&mut grid), Extension::Moved(Pos::new(2, 6)));
}
