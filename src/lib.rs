//! Terminal Breakout: the simulation core.
//!
//! The library holds the entities, the layout generators, the physics and
//! collision systems and the state machine that sequences them.  Drawing and
//! keyboard polling are collaborators behind the [`render::Renderer`] and
//! [`input::InputSource`] traits; the binary supplies terminal versions.

pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod layout;
pub mod physics;
pub mod render;
pub mod score;

pub use error::{Error, Result};
