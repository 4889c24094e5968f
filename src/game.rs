//! The top-level state machine and the fixed-cadence loop that drives it.
//!
//! A [`Session`] exclusively owns every entity of a run and lends them out by
//! `&mut` to the physics and collision systems, one frame at a time.

use std::thread;
use std::time::Instant;

use log::{debug, info, warn};
use rand::Rng;

use crate::collision;
use crate::config::{Board, Config};
use crate::entities::{Ball, BrickLayout, GameState, Outcome, Paddle};
use crate::error::Result;
use crate::input::{InputEvent, InputSource};
use crate::physics;
use crate::render::{Region, Renderer};
use crate::score::ScoreState;

pub struct Session {
    config: Config,
    board: Board,
    state: GameState,
    outcome: Option<Outcome>,
    ball: Ball,
    paddle: Paddle,
    layout: BrickLayout,
    score: ScoreState,
    /// Frames simulated in the current round.
    frame: u64,
    /// Cells drawn last frame that must be blanked before the next draw.
    dirty: Vec<Region>,
    /// Set whenever the state changes; forces a full-screen redraw.
    redraw: bool,
}

impl Session {
    /// Validate `config` and build a session sitting in the menu.
    pub fn new(config: Config) -> Result<Self> {
        let board = config.validate()?;
        let mut layout = BrickLayout::new(config.pattern, config.rows, config.columns);
        layout.regenerate(&board)?;
        let paddle = Paddle::new(&board, config.paddle_width, config.paddle_step)?;

        Ok(Self {
            config,
            board,
            state: GameState::Menu,
            outcome: None,
            ball: Ball::default(),
            paddle,
            layout,
            score: ScoreState::new(),
            frame: 0,
            dirty: Vec::new(),
            redraw: true,
        })
    }

    // ── Per-frame entry points ───────────────────────────────────────────────

    /// Consume this frame's input symbol, then simulate if still playing.
    pub fn step(&mut self, event: InputEvent, rng: &mut impl Rng) -> Result<()> {
        self.handle_input(event, rng)?;
        self.update(rng);
        Ok(())
    }

    /// Apply one input symbol.  Escape wins in every state but `Exiting`.
    pub fn handle_input(&mut self, event: InputEvent, rng: &mut impl Rng) -> Result<()> {
        if self.state == GameState::Exiting {
            return Ok(());
        }
        if event == InputEvent::Escape {
            self.set_state(GameState::Exiting);
            return Ok(());
        }

        match (self.state, event) {
            (GameState::Menu, InputEvent::Space) => {
                self.start_round(rng)?;
                self.set_state(GameState::Playing);
            }
            (GameState::Playing, InputEvent::Space) => self.set_state(GameState::Paused),
            (GameState::Playing, InputEvent::Left) => self.move_paddle(Paddle::move_left),
            (GameState::Playing, InputEvent::Right) => self.move_paddle(Paddle::move_right),
            (GameState::Paused, InputEvent::Space) => self.set_state(GameState::Playing),
            (GameState::GameOver, InputEvent::Space) => {
                self.outcome = None;
                self.set_state(GameState::Menu);
            }
            _ => {}
        }
        Ok(())
    }

    /// Run physics and brick collision for one frame, then check how the
    /// round stands.  Does nothing outside `Playing`.
    pub fn update(&mut self, rng: &mut impl Rng) {
        if self.state != GameState::Playing {
            return;
        }
        self.frame += 1;

        let before = Region::cell(self.ball.x, self.ball.y);
        physics::advance(&mut self.ball, Some(&self.paddle), &self.board);

        if self.ball.active {
            if let Some(brick) =
                collision::resolve(&mut self.ball, &mut self.layout.bricks, &mut self.score)
            {
                for y in brick.y..brick.y + brick.height {
                    self.dirty.push(Region {
                        x: brick.x,
                        y,
                        width: brick.width,
                    });
                }
            }
        }
        if (self.ball.x, self.ball.y) != (before.x, before.y) {
            self.dirty.push(before);
        }

        if self.layout.all_destroyed() {
            info!("all bricks destroyed, final score {}", self.score.current_score());
            self.finish(Outcome::Won);
        } else if !self.ball.active {
            if self.score.decrement_life() {
                info!("ball lost, {} lives left", self.score.lives());
                self.serve(rng);
            } else {
                info!("last ball lost, final score {}", self.score.current_score());
                self.finish(Outcome::Lost);
            }
        }
    }

    /// Emit this frame's draw commands.
    ///
    /// A state change triggers a full redraw; otherwise only the regions
    /// dirtied since the last frame are cleared before drawing.
    pub fn render<R: Renderer>(&mut self, renderer: &mut R) -> std::io::Result<()> {
        if self.redraw {
            renderer.draw_screen(self.state, &self.score, self.outcome)?;
            self.redraw = false;
            self.dirty.clear();
        } else {
            for region in self.dirty.drain(..) {
                renderer.clear_region(region)?;
            }
        }

        if self.state == GameState::Playing {
            renderer.draw_bricks(&self.layout.bricks)?;
            renderer.draw_paddle(&self.paddle)?;
            if self.ball.active {
                renderer.draw_ball(&self.ball)?;
            }
            renderer.draw_hud(&self.score)?;
        }
        renderer.present()
    }

    // ── Transitions ──────────────────────────────────────────────────────────

    fn set_state(&mut self, next: GameState) {
        if next != self.state {
            info!("state {:?} -> {:?}", self.state, next);
            self.state = next;
            self.redraw = true;
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.set_state(GameState::GameOver);
    }

    /// Fresh paddle, bricks, score and ball for a new round.
    fn start_round(&mut self, rng: &mut impl Rng) -> Result<()> {
        self.paddle.reset();
        self.layout.regenerate(&self.board)?;
        self.score.reset();
        self.outcome = None;
        self.frame = 0;
        self.dirty.clear();
        self.serve(rng);
        info!(
            "round started: {} layout, {} bricks",
            self.layout.pattern,
            self.layout.bricks.len()
        );
        Ok(())
    }

    /// Put the ball above the paddle heading up, randomly left or right.
    fn serve(&mut self, rng: &mut impl Rng) {
        let dx = if rng.gen_bool(0.5) { 1 } else { -1 };
        self.ball
            .reset(self.board.width / 2, self.board.serve_row(), dx, -1);
        debug!("ball served at ({}, {}) dx={}", self.ball.x, self.ball.y, dx);
    }

    fn move_paddle(&mut self, mv: fn(&mut Paddle)) {
        let before = Region {
            x: self.paddle.x(),
            y: self.paddle.y(),
            width: self.paddle.width(),
        };
        mv(&mut self.paddle);
        if self.paddle.x() != before.x {
            self.dirty.push(before);
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn paddle_mut(&mut self) -> &mut Paddle {
        &mut self.paddle
    }

    pub fn layout(&self) -> &BrickLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut BrickLayout {
        &mut self.layout
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

// ── Game loop ────────────────────────────────────────────────────────────────

/// Drive `session` until it reaches `Exiting` or the configured runtime
/// ceiling passes.  Returns the number of frames run.
///
/// Each frame polls exactly one input symbol, steps the session, renders it
/// and sleeps off the rest of the frame budget.  Both stop conditions are
/// checked at the top of a frame, never in the middle of one.
pub fn run<I, R>(
    session: &mut Session,
    input: &mut I,
    renderer: &mut R,
    rng: &mut impl Rng,
) -> Result<u64>
where
    I: InputSource,
    R: Renderer,
{
    let started = Instant::now();
    let budget = session.config().frame;
    let max_runtime = session.config().max_runtime;
    let mut frames: u64 = 0;

    while session.state() != GameState::Exiting {
        if started.elapsed() >= max_runtime {
            warn!("runtime limit of {:?} reached after {} frames", max_runtime, frames);
            break;
        }
        let frame_start = Instant::now();

        let event = input.poll();
        session.step(event, rng)?;
        session.render(renderer)?;
        frames += 1;

        let elapsed = frame_start.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
    }
    Ok(frames)
}
