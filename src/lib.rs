//! # Connect Four environment
//!
//! A Connect Four engine meant to sit underneath a reinforcement-learning
//! agent, plus the thin layers around it: an RL wrapper, a random opponent
//! and a text game loop.
//!
//! ## Modules
//!
//! - [`game`] — Core engine: board, players, win patterns, move application
//! - [`env`] — RL wrapper: `step`, `get_successors`, one-hot observations
//! - [`ai`] — Agent trait, random agent, state encoding
//! - [`play`] — Human-vs-bot loop over any reader/writer pair
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod env;
pub mod error;
pub mod game;
pub mod play;
