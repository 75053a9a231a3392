//! Simulation core of a fixed-screen space shooter: a ship against a
//! marching, accelerating grid of invaders, with destructible cover and a
//! bonus saucer.
//!
//! The crate holds no terminal, audio or storage code of its own beyond the
//! small [`persistence`] stores.  A driver owns a [`round::Game`], feeds it
//! an [`input::InputState`] every frame and renders the borrowed
//! [`entities::World`].

pub mod collision;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod persistence;
pub mod round;
pub mod spawn;

pub use error::{Error, Result};
pub use round::Game;
