//! Tactics Board Core
//!
//! This crate contains the editor model for the tactics board:
//! - Player / TeamOptions: the roster and per-team display settings
//! - Annotation: shapes drawn on the pitch
//! - Store: observable containers with publish/subscribe
//! - Board: the aggregate of all stores
//! - gesture: the pointer gesture state machine
//! - derived: passing networks and covered areas

pub mod annotation;
pub mod board;
pub mod derived;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod pitch;
pub mod player;
pub mod roster;
pub mod store;
pub mod team;
pub mod tool;

pub use annotation::*;
pub use board::*;
pub use error::*;
pub use player::*;
pub use store::*;
pub use team::*;
pub use tool::*;
