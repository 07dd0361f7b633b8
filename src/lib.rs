//! # Connect Four
//!
//! A terminal Connect Four game built with Ratatui. Two players alternately
//! drop marks into a 6×7 grid; four in a row horizontally, vertically, or
//! diagonally wins. Either seat can be handed to a pluggable move source.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player marks, state machine
//! - [`moves`] — Move sources (random, scripted) and the headless match runner
//! - [`ui`] — Terminal UI: game view and event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod moves;
pub mod ui;
