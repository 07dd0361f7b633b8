//! Terminal UI: interactive game view with a column selector, status line,
//! and optional machine-controlled seats.

mod app;
mod game_view;

pub use app::App;
