//! Terminal Snake runner (default binary).
//!
//! Plays on the real terminal through `TtyTerminal`. The board follows the
//! terminal size unless `SNAKE_WIDTH`/`SNAKE_HEIGHT` pin it.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::{error, info};

use tui_snake::core::{Game, GameConfig, GamePhase};
use tui_snake::logging;
use tui_snake::term::{TickPacer, TtyTerminal};

fn main() -> Result<()> {
    let mut config = GameConfig::try_from_env()?;
    logging::init(&config)?;

    if env::var_os("SNAKE_SEED").is_none() {
        config.seed = clock_seed();
    }
    info!("starting tui-snake, seed {}", config.seed);

    let mut term = TtyTerminal::new();
    let mut game = Game::new(config);

    let result = run(&mut game, &mut term);

    // Always try to restore terminal state.
    if let Err(err) = game.shutdown(&mut term) {
        error!("shutdown failed: {}", err);
    }
    result?;

    info!(
        "finished: {}, score {}",
        game.end_reason().map_or("unknown", |r| r.as_str()),
        game.score()
    );
    Ok(())
}

fn run(game: &mut Game, term: &mut TtyTerminal) -> Result<()> {
    let mut pacer = TickPacer::new();
    while !game.is_finished() {
        let interval = game.tick(term)?;
        if game.phase() == GamePhase::Running {
            pacer.wait(interval);
        }
    }
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
