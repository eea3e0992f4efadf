//! Headless runner.
//!
//! Plays a game on a `VirtualTerminal` with a greedy autopilot steering for
//! the food, without sleeping between ticks, then prints the final screen.
//!
//! Usage: `headless [max_ticks]` (default 10000). Board and seed come from the
//! usual `SNAKE_*` environment variables; the viewport is 80x24.

use std::env;

use anyhow::{Context, Result};
use log::info;

use tui_snake::core::snake::wrap_step;
use tui_snake::core::{Game, GameConfig, GamePhase};
use tui_snake::logging;
use tui_snake::term::VirtualTerminal;
use tui_snake::types::{Direction, PlayerInput, Pos, FALLBACK_VIEWPORT};

const DEFAULT_MAX_TICKS: u64 = 10_000;

fn main() -> Result<()> {
    let max_ticks = match env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("invalid max_ticks {arg:?}"))?,
        None => DEFAULT_MAX_TICKS,
    };

    let config = GameConfig::try_from_env()?;
    logging::init(&config)?;
    let (w, h) = FALLBACK_VIEWPORT;
    let mut vt = VirtualTerminal::new(w, h);
    let mut game = Game::new(config);

    while !game.is_finished() {
        if game.phase() == GamePhase::Running {
            if game.ticks() >= max_ticks {
                break;
            }
            if let Some(dir) = autopilot(&game) {
                vt.push_input(PlayerInput::Turn(dir));
            }
        }
        game.tick(&mut vt)?;
    }
    let screen = vt.screen().to_text();
    game.shutdown(&mut vt)?;

    info!("headless run ended after {} ticks", game.ticks());
    print!("{screen}");
    println!(
        "ended: {}, ticks {}, score {}",
        game.end_reason().map_or("unknown", |r| r.as_str()),
        game.ticks(),
        game.score()
    );
    Ok(())
}

/// Pick the free neighbour closest to the food on the torus.
///
/// Returns `None` when the game is not running or every move collides.
fn autopilot(game: &Game) -> Option<Direction> {
    let snake = game.snake()?;
    let grid = game.grid()?;
    let (w, h) = (grid.width(), grid.height());
    let head = snake.head();
    let target = game.food().unwrap_or(head);
    let back = snake.head_direction().opposite();

    Direction::ALL
        .into_iter()
        .filter(|&dir| dir != back)
        .map(|dir| (dir, wrap_step(head, dir, w, h)))
        .filter(|&(_, next)| !grid.is_occupied(next))
        .min_by_key(|&(_, next)| torus_distance(next, target, w, h))
        .map(|(dir, _)| dir)
}

fn torus_distance(a: Pos, b: Pos, w: u16, h: u16) -> u32 {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    (dx.min(w - dx) + dy.min(h - dy)) as u32
}
