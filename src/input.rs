//! Discrete per-frame input symbols and the sources that produce them.

use std::collections::VecDeque;

use crossterm::event::KeyCode;

/// The only input the simulation understands: one symbol per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputEvent {
    #[default]
    None,
    Left,
    Right,
    Space,
    Escape,
}

/// Anything that can hand the game loop its next input symbol.
///
/// `poll` must never block; having nothing to report is `InputEvent::None`.
pub trait InputSource {
    fn poll(&mut self) -> InputEvent;
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn poll(&mut self) -> InputEvent {
        (**self).poll()
    }
}

/// Translate a terminal key into a game symbol.
///
/// ← / A and → / D steer, Space starts/pauses/resumes, Esc / Q quits.
pub fn map_key(code: KeyCode) -> InputEvent {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => InputEvent::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => InputEvent::Right,
        KeyCode::Char(' ') => InputEvent::Space,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputEvent::Escape,
        _ => InputEvent::None,
    }
}

/// Replays a fixed sequence of symbols, then reports `None` forever.
///
/// Used for tests and as the fallback when no interactive terminal exists.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputEvent {
        self.queue.pop_front().unwrap_or_default()
    }
}
