//! Tactics Board Frontend
//!
//! egui-based application for arranging players and drawing tactics on a
//! 3D pitch.

mod actions;
mod app;
pub mod config;
mod panels;
mod scene;
mod state;
mod theme;
mod viewport_state;

pub use app::TacticsBoardApp;
