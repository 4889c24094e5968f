/// Rendering layer. All terminal output lives here.
///
/// `TerminalRenderer` turns the session's draw commands into queued
/// crossterm commands.  No game logic is performed; this module only
/// translates entities into glyphs and colours.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use breakout::config::Board;
use breakout::entities::{Ball, Brick, BrickColor, GameState, Outcome, Paddle};
use breakout::render::{Region, Renderer};
use breakout::score::ScoreState;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PADDLE: Color = Color::White;
const C_BALL: Color = Color::White;
const C_TITLE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

fn brick_color(color: BrickColor) -> Color {
    match color {
        BrickColor::Red => Color::Red,
        BrickColor::Yellow => Color::Yellow,
        BrickColor::Green => Color::Green,
        BrickColor::Cyan => Color::Cyan,
        BrickColor::Blue => Color::Blue,
        BrickColor::Magenta => Color::Magenta,
    }
}

// ── Renderer ──────────────────────────────────────────────────────────────────

pub struct TerminalRenderer<W: Write> {
    out: W,
    board: Board,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, board: Board) -> Self {
        Self { out, board }
    }

    /// Queue `text` at a board position; positions off the board are dropped.
    fn put(&mut self, x: i32, y: i32, color: Color, text: &str) -> std::io::Result<()> {
        if x < 0 || y < 0 || x >= self.board.width || y >= self.board.height {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(x as u16, y as u16))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    /// Queue `text` horizontally centred on row `y`.
    fn centered(&mut self, y: i32, color: Color, text: &str) -> std::io::Result<()> {
        let x = (self.board.width - text.chars().count() as i32) / 2;
        self.put(x.max(0), y, color, text)
    }

    fn draw_border(&mut self) -> std::io::Result<()> {
        let w = self.board.width as usize;
        let h = self.board.height;

        // Row 1: top wall
        self.put(0, 1, C_BORDER, &format!("┌{}┐", "─".repeat(w.saturating_sub(2))))?;

        // Side walls down to the row where the ball is lost
        for row in 2..h - 1 {
            self.put(0, row, C_BORDER, "│")?;
            self.put(self.board.width - 1, row, C_BORDER, "│")?;
        }
        Ok(())
    }

    fn draw_menu(&mut self, score: &ScoreState) -> std::io::Result<()> {
        let cy = self.board.height / 2;
        self.centered(cy - 4, C_TITLE, "★  B R E A K O U T  ★")?;
        if score.high_score() > 0 {
            let best = format!("Best Score: {}", score.high_score());
            self.centered(cy - 3, Color::Yellow, &best)?;
        }
        self.centered(cy - 1, Color::White, "Press SPACE to start")?;
        self.centered(cy, Color::White, "Press ESC to exit")?;

        let legend: &[(&str, Color)] = &[
            ("█ Bonus  50", Color::Red),
            ("█ Strong 20", Color::Yellow),
            ("█ Normal 10", Color::Cyan),
        ];
        for (i, (label, color)) in legend.iter().enumerate() {
            self.centered(cy + 2 + i as i32, *color, label)?;
        }
        Ok(())
    }

    fn draw_paused(&mut self) -> std::io::Result<()> {
        let cy = self.board.height / 2;
        self.centered(cy - 1, Color::Yellow, "⏸  PAUSED  ⏸")?;
        self.centered(cy + 1, Color::White, "SPACE - Resume   ESC - Exit")?;
        Ok(())
    }

    fn draw_game_over(
        &mut self,
        score: &ScoreState,
        outcome: Option<Outcome>,
    ) -> std::io::Result<()> {
        let (banner, color) = match outcome {
            Some(Outcome::Won) => ("║      YOU  WIN      ║", Color::Green),
            _ => ("║    GAME  OVER      ║", Color::Red),
        };
        let lines = ["╔════════════════════╗", banner, "╚════════════════════╝"];

        let start = self.board.height / 2 - 3;
        for (i, line) in lines.iter().enumerate() {
            self.centered(start + i as i32, color, line)?;
        }

        let new_best = score.current_score() > 0 && score.current_score() >= score.high_score();
        let score_line = format!("Final Score: {:>6}", score.current_score());
        let best_line = if new_best {
            format!("★ NEW BEST: {:>6} ★", score.high_score())
        } else {
            format!("Best Score:  {:>6}", score.high_score())
        };
        let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };

        self.centered(start + 3, Color::Yellow, &score_line)?;
        self.centered(start + 4, best_color, &best_line)?;
        self.centered(start + 5, Color::White, "SPACE - Menu   ESC - Quit")?;
        Ok(())
    }

    fn draw_controls_hint(&mut self) -> std::io::Result<()> {
        let y = self.board.height - 1;
        self.put(1, y, C_HINT, "← → / A D : Move   SPACE : Pause   ESC : Quit")
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw_screen(
        &mut self,
        state: GameState,
        score: &ScoreState,
        outcome: Option<Outcome>,
    ) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;

        match state {
            GameState::Menu => self.draw_menu(score)?,
            GameState::Playing => {
                self.draw_border()?;
                self.draw_controls_hint()?;
            }
            GameState::Paused => {
                self.draw_border()?;
                self.draw_paused()?;
            }
            GameState::GameOver => self.draw_game_over(score, outcome)?,
            GameState::Exiting => {
                let cy = self.board.height / 2;
                self.centered(cy, Color::White, "Thanks for playing!")?;
            }
        }
        Ok(())
    }

    fn clear_region(&mut self, region: Region) -> std::io::Result<()> {
        let x = region.x.max(0);
        let width = (region.x + region.width).min(self.board.width) - x;
        if width <= 0 {
            return Ok(());
        }
        self.put(x, region.y, Color::Reset, &" ".repeat(width as usize))
    }

    fn draw_bricks(&mut self, bricks: &[Brick]) -> std::io::Result<()> {
        for brick in bricks.iter().filter(|b| !b.destroyed) {
            let text: String = std::iter::repeat(Brick::GLYPH)
                .take(brick.width.max(0) as usize)
                .collect();
            for y in brick.y..brick.y + brick.height {
                self.put(brick.x, y, brick_color(brick.color), &text)?;
            }
        }
        Ok(())
    }

    fn draw_paddle(&mut self, paddle: &Paddle) -> std::io::Result<()> {
        let text: String = std::iter::repeat(Paddle::GLYPH)
            .take(paddle.width() as usize)
            .collect();
        self.put(paddle.x(), paddle.y(), C_PADDLE, &text)
    }

    fn draw_ball(&mut self, ball: &Ball) -> std::io::Result<()> {
        self.put(ball.x, ball.y, C_BALL, &Ball::GLYPH.to_string())
    }

    fn draw_hud(&mut self, score: &ScoreState) -> std::io::Result<()> {
        // Score and high score: left
        let left = format!(
            "Score:{:>6}  Hi:{:>6}  Bricks:{:>3}",
            score.current_score(),
            score.high_score(),
            score.bricks_destroyed()
        );
        self.put(1, 0, C_HUD_SCORE, &left)?;

        // Lives: right, padded so a lost heart is overwritten
        let lives = format!("Lives:{:<3}", score.lives_display());
        let x = self.board.width - lives.chars().count() as i32 - 1;
        self.put(x, 0, C_HUD_LIVES, &lives)
    }

    fn present(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out
            .queue(cursor::MoveTo(0, self.board.height.saturating_sub(1) as u16))?;
        self.out.flush()
    }
}
