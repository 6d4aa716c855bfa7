//! Tactics Board Renderer
//!
//! WGPU-based 3D rendering of the pitch, players and annotation overlays.
//! Everything on the ground is drawn as flat-colored triangle batches built
//! on the CPU ([`shapes::ShapeBatch`]); players are instanced cylinders.

pub mod camera;
pub mod pipeline;
pub mod pitch;
pub mod player;
pub mod renderer;
pub mod shapes;
pub mod vertex;

pub use camera::*;
pub use player::PlayerInstance;
pub use renderer::*;
pub use shapes::{ShapeBatch, stroke_pattern};
