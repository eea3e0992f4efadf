//! Game state module - the setup / running / teardown lifecycle
//!
//! [`Game::tick`] is the only entry point a driver needs. The first call sets
//! the board up, every following call advances the snake by one cell, and the
//! call after the game ends restores the terminal. Each call returns the delay
//! the driver should wait before the next one.

use std::time::Duration;

use log::{debug, info, trace};

use crate::config::{update_interval_secs, GameConfig};
use crate::error::GameError;
use crate::grid::Grid;
use crate::port::TerminalPort;
use crate::rng::SimpleRng;
use crate::snake::{Extension, Snake};
use crate::types::{
    Direction, PlayerInput, Pos, CELL_COLUMNS, EMPTY_GLYPH, FOOD_GLYPH, GRID_OFFSET_X,
    GRID_OFFSET_Y, SCORE_LABEL, SCORE_POS, SNAKE_GLYPH,
};

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Nothing allocated yet; the next tick sets up the board
    Setup,
    /// One snake step per tick
    Running,
    /// The game is over; the next tick restores the terminal, later ticks do nothing
    Teardown,
}

/// Why the game left `Running`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player pressed a quit key
    Quit,
    /// The head ran into the body
    Collision,
    /// No free cell was left for food
    BoardFull,
    /// The driver shut the game down early
    Aborted,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Quit => "quit",
            EndReason::Collision => "collision",
            EndReason::BoardFull => "board full",
            EndReason::Aborted => "aborted",
        }
    }
}

/// Everything that exists between setup and teardown
#[derive(Debug, Clone)]
struct Playfield {
    grid: Grid,
    snake: Snake,
    /// `None` only once the snake covers the whole board
    food: Option<Pos>,
    score: u32,
    grow_increment: u32,
    /// Ticks left during which the tail stays put
    grow_countdown: u32,
}

impl Playfield {
    fn free_cells(&self) -> usize {
        self.grid.cell_count() - self.snake.len()
    }

    /// One running tick. Returns the reason the game ended, if it did.
    fn advance<P: TerminalPort + ?Sized>(
        &mut self,
        port: &mut P,
        rng: &mut SimpleRng,
    ) -> Result<Option<EndReason>, GameError> {
        self.snake.latch_heading();

        match port.poll_input()? {
            Some(PlayerInput::Quit) => return Ok(Some(EndReason::Quit)),
            Some(PlayerInput::Turn(dir)) => {
                if !self.snake.turn(dir) {
                    trace!("one-cell snake ignored reversal towards {}", dir.as_str());
                }
            }
            None => {}
        }

        let head = match self.snake.extend_head(&mut self.grid) {
            Extension::Moved(pos) => pos,
            Extension::Collided(pos) => {
                debug!("head hit the body at ({}, {})", pos.x, pos.y);
                return Ok(Some(EndReason::Collision));
            }
        };
        draw_cell(port, head, SNAKE_GLYPH)?;

        let mut end = None;
        if self.food == Some(head) {
            self.score += 1;
            self.grow_countdown += self.grow_increment;
            debug!(
                "food eaten at ({}, {}), score {}, length {}",
                head.x,
                head.y,
                self.score,
                self.snake.len()
            );

            self.food = rng.pick_free_cell(&self.grid, self.free_cells());
            match self.food {
                Some(food) => draw_cell(port, food, FOOD_GLYPH)?,
                None => end = Some(EndReason::BoardFull),
            }

            port.move_cursor(SCORE_POS.0, SCORE_POS.1)?;
            port.write_integer(self.score as u64)?;
        }

        if self.grow_countdown == 0 {
            let vacated = self.snake.retract_tail(&mut self.grid);
            draw_cell(port, vacated, EMPTY_GLYPH)?;
        } else {
            self.grow_countdown -= 1;
        }

        port.flush()?;
        Ok(end)
    }
}

/// Terminal position of a grid cell's left column
pub fn cell_origin(pos: Pos) -> (u16, u16) {
    (
        GRID_OFFSET_X + pos.x * CELL_COLUMNS,
        GRID_OFFSET_Y + pos.y,
    )
}

fn draw_cell<P: TerminalPort + ?Sized>(port: &mut P, pos: Pos, glyph: &str) -> Result<(), GameError> {
    let (x, y) = cell_origin(pos);
    port.move_cursor(x, y)?;
    port.write_text(glyph)?;
    Ok(())
}

/// A snake game and its lifecycle.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    phase: GamePhase,
    field: Option<Playfield>,
    rng: SimpleRng,
    update_interval: Duration,
    end_reason: Option<EndReason>,
    /// Running ticks completed
    ticks: u64,
    /// Score kept after the playfield is released
    final_score: u32,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let rng = SimpleRng::new(config.seed);
        Self {
            config,
            phase: GamePhase::Setup,
            field: None,
            rng,
            update_interval: Duration::ZERO,
            end_reason: None,
            ticks: 0,
            final_score: 0,
        }
    }

    /// Advance the lifecycle by one step and return the delay until the next tick.
    pub fn tick<P: TerminalPort + ?Sized>(&mut self, port: &mut P) -> Result<Duration, GameError> {
        match self.phase {
            GamePhase::Setup => self.setup(port)?,
            GamePhase::Running => {
                let Some(field) = self.field.as_mut() else {
                    self.finish(EndReason::Aborted);
                    return Ok(self.update_interval);
                };
                let end = field.advance(port, &mut self.rng)?;
                self.ticks += 1;
                if let Some(reason) = end {
                    self.finish(reason);
                }
            }
            GamePhase::Teardown => self.teardown(port)?,
        }
        Ok(self.update_interval)
    }

    /// End the game from any phase and restore the terminal.
    ///
    /// Drivers call this on every exit path; it is a no-op once teardown ran.
    pub fn shutdown<P: TerminalPort + ?Sized>(&mut self, port: &mut P) -> Result<(), GameError> {
        if self.phase != GamePhase::Teardown {
            self.finish(EndReason::Aborted);
        }
        self.teardown(port)
    }

    fn setup<P: TerminalPort + ?Sized>(&mut self, port: &mut P) -> Result<(), GameError> {
        self.config.validate()?;

        let viewport = port.viewport_size()?;
        let (width, height) = self.config.board_size(viewport);
        if width == 0 || height == 0 {
            return Err(GameError::BoardTooSmall { width, height });
        }

        let mut grid = Grid::new(width, height);
        let snake = Snake::new(&mut grid, Pos::new(width / 2, height / 2), Direction::Right);
        let grow_increment = self.config.grow_increment_for(width, height);
        let food = self.rng.pick_free_cell(&grid, grid.cell_count() - snake.len());
        self.update_interval = Duration::from_secs_f32(update_interval_secs(width, height));

        info!(
            "setup: viewport {}x{}, board {}x{} ({} bytes), grow increment {}, interval {:?}",
            viewport.0,
            viewport.1,
            width,
            height,
            grid.byte_len(),
            grow_increment,
            self.update_interval
        );

        let head = snake.head();
        port.enter()?;
        self.field = Some(Playfield {
            grid,
            snake,
            food,
            score: 0,
            grow_increment,
            grow_countdown: grow_increment,
        });

        draw_cell(port, head, SNAKE_GLYPH)?;
        if let Some(food) = food {
            draw_cell(port, food, FOOD_GLYPH)?;
        }
        port.move_cursor(0, 0)?;
        port.write_text(SCORE_LABEL)?;
        port.write_integer(0)?;
        port.flush()?;

        self.phase = GamePhase::Running;
        if food.is_none() {
            self.finish(EndReason::BoardFull);
        }
        Ok(())
    }

    fn teardown<P: TerminalPort + ?Sized>(&mut self, port: &mut P) -> Result<(), GameError> {
        let Some(field) = self.field.take() else {
            return Ok(());
        };
        self.final_score = field.score;

        port.flush()?;
        port.exit()?;

        info!(
            "teardown: {} after {} ticks, score {}, length {}",
            self.end_reason.map_or("unknown", |r| r.as_str()),
            self.ticks,
            field.score,
            field.snake.len()
        );
        Ok(())
    }

    fn finish(&mut self, reason: EndReason) {
        if self.phase == GamePhase::Teardown {
            return;
        }
        info!("game over: {}", reason.as_str());
        self.phase = GamePhase::Teardown;
        self.end_reason = Some(reason);
    }

    /// Move the food to a free cell, redrawing it on the next flush.
    ///
    /// Returns false if there is no board yet or `pos` is off the board or
    /// occupied by the snake.
    pub fn place_food<P: TerminalPort + ?Sized>(
        &mut self,
        port: &mut P,
        pos: Pos,
    ) -> Result<bool, GameError> {
        let Some(field) = self.field.as_mut() else {
            return Ok(false);
        };
        if pos.x >= field.grid.width() || pos.y >= field.grid.height() || field.grid.is_occupied(pos)
        {
            return Ok(false);
        }
        if let Some(old) = field.food.replace(pos) {
            draw_cell(port, old, EMPTY_GLYPH)?;
        }
        draw_cell(port, pos, FOOD_GLYPH)?;
        Ok(true)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// True once teardown has run
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Teardown && self.field.is_none()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn score(&self) -> u32 {
        self.field.as_ref().map_or(self.final_score, |f| f.score)
    }

    pub fn snake(&self) -> Option<&Snake> {
        self.field.as_ref().map(|f| &f.snake)
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.field.as_ref().map(|f| &f.grid)
    }

    pub fn food(&self) -> Option<Pos> {
        self.field.as_ref().and_then(|f| f.food)
    }

    pub fn grow_increment(&self) -> Option<u32> {
        self.field.as_ref().map(|f| f.grow_increment)
    }

    pub fn grow_countdown(&self) -> Option<u32> {
        self.field.as_ref().map(|f| f.grow_countdown)
    }

    /// Board size in cells, once set up
    pub fn board_size(&self) -> Option<(u16, u16)> {
        self.grid().map(|g| (g.width(), g.height()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;

    use super::*;

    /// Records port calls; input is scripted per poll.
    #[derive(Default)]
    struct ScriptedPort {
        viewport: (u16, u16),
        inputs: VecDeque<Option<PlayerInput>>,
        ops: Vec<String>,
        entered: bool,
        exits: usize,
    }

    impl ScriptedPort {
        fn new(viewport: (u16, u16)) -> Self {
            Self {
                viewport,
                ..Self::default()
            }
        }
    }

    impl TerminalPort for ScriptedPort {
        fn enter(&mut self) -> io::Result<()> {
            self.entered = true;
            Ok(())
        }

        fn exit(&mut self) -> io::Result<()> {
            self.entered = false;
            self.exits += 1;
            Ok(())
        }

        fn poll_input(&mut self) -> io::Result<Option<PlayerInput>> {
            Ok(self.inputs.pop_front().flatten())
        }

        fn viewport_size(&mut self) -> io::Result<(u16, u16)> {
            Ok(self.viewport)
        }

        fn move_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
            self.ops.push(format!("move {x} {y}"));
            Ok(())
        }

        fn write_text(&mut self, text: &str) -> io::Result<()> {
            self.ops.push(format!("text {text}"));
            Ok(())
        }

        fn write_integer(&mut self, n: u64) -> io::Result<()> {
            self.ops.push(format!("int {n}"));
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.ops.push("flush".to_string());
            Ok(())
        }
    }

    #[test]
    fn setup_centers_snake_and_enters_running() {
        let mut port = ScriptedPort::new((80, 24));
        let mut game = Game::new(GameConfig::default());
        assert_eq!(game.phase(), GamePhase::Setup);

        let interval = game.tick(&mut port).unwrap();

        assert_eq!(game.phase(), GamePhase::Running);
        assert!(port.entered);
        assert_eq!(game.board_size(), Some((40, 23)));
        assert_eq!(game.snake().unwrap().head(), Pos::new(20, 11));
        assert_eq!(game.grow_increment(), Some(2));
        assert_eq!(game.grow_countdown(), Some(2));
        assert_eq!(game.score(), 0);
        assert_eq!(interval, Duration::from_secs_f32(10.0 / 63.0));

        let food = game.food().unwrap();
        assert!(food != game.snake().unwrap().head());
        assert!(port.ops.ends_with(&[
            "move 0 0".to_string(),
            "text Score: ".to_string(),
            "int 0".to_string(),
            "flush".to_string(),
        ]));
    }

    #[test]
    fn quit_skips_movement() {
        let mut port = ScriptedPort::new((20, 11));
        let mut game = Game::new(GameConfig::default());
        game.tick(&mut port).unwrap();
        let head = game.snake().unwrap().head();

        port.inputs.push_back(Some(PlayerInput::Quit));
        game.tick(&mut port).unwrap();

        assert_eq!(game.phase(), GamePhase::Teardown);
        assert_eq!(game.end_reason(), Some(EndReason::Quit));
        assert_eq!(game.snake().unwrap().head(), head);
    }

    #[test]
    fn teardown_runs_once() {
        let mut port = ScriptedPort::new((20, 11));
        let mut game = Game::new(GameConfig::default());
        game.tick(&mut port).unwrap();
        port.inputs.push_back(Some(PlayerInput::Quit));
        game.tick(&mut port).unwrap();

        game.tick(&mut port).unwrap();
        assert!(game.is_finished());
        assert!(!port.entered);
        assert!(game.grid().is_none());

        game.tick(&mut port).unwrap();
        game.shutdown(&mut port).unwrap();
        assert_eq!(port.exits, 1);
        assert_eq!(game.end_reason(), Some(EndReason::Quit));
    }

    #[test]
    fn shutdown_before_setup_touches_nothing() {
        let mut port = ScriptedPort::new((20, 11));
        let mut game = Game::new(GameConfig::default());
        game.shutdown(&mut port).unwrap();

        assert!(game.is_finished());
        assert_eq!(game.end_reason(), Some(EndReason::Aborted));
        assert_eq!(port.exits, 0);
        assert!(port.ops.is_empty());
    }

    #[test]
    fn tiny_viewport_is_rejected() {
        let mut port = ScriptedPort::new((1, 1));
        let mut game = Game::new(GameConfig::default());
        let err = game.tick(&mut port).unwrap_err();
        assert!(matches!(err, GameError::BoardTooSmall { .. }));
        assert!(!port.entered);
    }

    #[test]
    fn single_cell_board_ends_as_full() {
        let mut port = ScriptedPort::new((80, 24));
        let mut game = Game::new(GameConfig::default().with_board(1, 1));
        game.tick(&mut port).unwrap();

        assert_eq!(game.food(), None);
        assert_eq!(game.phase(), GamePhase::Teardown);
        assert_eq!(game.end_reason(), Some(EndReason::BoardFull));
    }
}
