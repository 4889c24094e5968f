mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use breakout::config::{self, Config};
use breakout::entities::LayoutPattern;
use breakout::game::{self, Session};
use breakout::input::{map_key, InputEvent, InputSource, ScriptedInput};

use display::TerminalRenderer;

// ── Command line ──────────────────────────────────────────────────────────────

/// Classic brick breaker for the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Brick arrangement: standard, pyramid, checkerboard or rainbow.
    #[arg(long, default_value = "standard")]
    pattern: LayoutPattern,

    #[arg(long, default_value_t = config::DEFAULT_ROWS)]
    rows: u32,

    #[arg(long, default_value_t = config::DEFAULT_COLUMNS)]
    columns: u32,

    /// Board width in terminal columns.
    #[arg(long, default_value_t = config::BOARD_WIDTH)]
    width: i32,

    /// Board height in terminal rows.
    #[arg(long, default_value_t = config::BOARD_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = config::PADDLE_WIDTH)]
    paddle_width: i32,

    /// Target frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Stop after this many seconds even without a quit key.
    #[arg(long, default_value_t = config::MAX_RUNTIME.as_secs())]
    max_runtime: u64,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            board_width: self.width,
            board_height: self.height,
            rows: self.rows,
            columns: self.columns,
            pattern: self.pattern,
            paddle_width: self.paddle_width,
            frame: Duration::from_millis(1000 / u64::from(self.fps.max(1))),
            max_runtime: Duration::from_secs(self.max_runtime),
            ..Config::default()
        }
    }
}

// ── Keyboard ──────────────────────────────────────────────────────────────────

/// Key events forwarded from the reader thread.
///
/// Each poll consumes at most one key press; anything else queued on the
/// channel (releases, resizes, mouse) is skipped.  A closed channel means
/// the reader died and is treated as "no input".
struct ChannelInput {
    rx: mpsc::Receiver<Event>,
}

impl InputSource for ChannelInput {
    fn poll(&mut self) -> InputEvent {
        while let Ok(ev) = self.rx.try_recv() {
            if let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev {
                if kind == KeyEventKind::Release {
                    continue;
                }
                if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                    return InputEvent::Escape;
                }
                return map_key(code);
            }
        }
        InputEvent::None
    }
}

/// Dedicate a thread exclusively to blocking event reads, sending them
/// through a channel so the game loop never has to block on I/O.
fn spawn_reader() -> ChannelInput {
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                warn!("keyboard reader stopped: {}", err);
                break;
            }
        }
    });
    ChannelInput { rx }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Args::parse().into_config();
    let mut session = Session::new(config).context("invalid game configuration")?;
    let board = *session.board();

    let mut out = BufWriter::new(stdout());

    // Without an interactive terminal the game still runs, just with no input;
    // the runtime ceiling ends it.
    let raw_mode = match terminal::enable_raw_mode() {
        Ok(()) => true,
        Err(err) => {
            warn!("no interactive terminal ({}); running without keyboard input", err);
            false
        }
    };
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    if let Ok((cols, rows)) = terminal::size() {
        if i32::from(cols) < board.width || i32::from(rows) < board.height {
            warn!(
                "terminal is {}x{} but the board needs {}x{}",
                cols, rows, board.width, board.height
            );
        }
    }

    let mut input: Box<dyn InputSource> = if raw_mode {
        Box::new(spawn_reader())
    } else {
        Box::new(ScriptedInput::default())
    };

    info!("starting on a {}x{} board", board.width, board.height);
    let mut renderer = TerminalRenderer::new(&mut out, board);
    let result = game::run(&mut session, &mut input, &mut renderer, &mut thread_rng());

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    if raw_mode {
        let _ = terminal::disable_raw_mode();
    }
    let _ = out.flush();

    let frames = result.context("game loop aborted")?;
    info!(
        "exited after {} frames, high score {}",
        frames,
        session.score().high_score()
    );
    Ok(())
}
