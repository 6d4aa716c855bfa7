//! Application configuration module
//!
//! Camera defaults, editor preferences and UI settings, persisted as RON in
//! the user's config directory.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use serde::{Deserialize, Serialize};
use tactics_core::AnnotationStyle;
use tactics_renderer::Camera;

/// Initial camera placement and navigation speeds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub initial_distance: f32,
    /// Initial elevation in radians
    pub initial_pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians per dragged pixel
    pub orbit_sensitivity: f32,
    /// Fraction of the camera distance per dragged pixel
    pub pan_sensitivity: f32,
    /// Zoom steps per scrolled point
    pub zoom_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            initial_distance: Camera::DEFAULT_DISTANCE,
            initial_pitch: Camera::DEFAULT_PITCH,
            min_distance: 10.0,
            max_distance: 250.0,
            orbit_sensitivity: 0.008,
            pan_sensitivity: 0.0015,
            zoom_sensitivity: 0.02,
        }
    }
}

impl CameraConfig {
    /// Apply limits and field of view, then move to the initial placement
    pub fn apply(&self, camera: &mut Camera) {
        camera.set_fov_degrees(self.fov_degrees);
        camera.set_distance_limits(self.min_distance, self.max_distance);
        camera.reset(self.initial_distance, self.initial_pitch);
    }
}

/// Editor preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Style the tool settings start with
    pub default_style: AnnotationStyle,
    /// Draw name/number/role labels above players
    pub show_labels: bool,
    pub label_size: f32,
    /// Draw transform handles on the selected annotation
    pub show_handles: bool,
    pub player_radius: f32,
    pub player_height: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_style: AnnotationStyle::default(),
            show_labels: true,
            label_size: 13.0,
            show_handles: true,
            player_radius: 0.8,
            player_height: 1.8,
        }
    }
}

/// UI theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UiTheme {
    #[default]
    Dark,
    Light,
}

impl UiTheme {
    pub fn name(&self) -> &'static str {
        match self {
            UiTheme::Dark => "Dark",
            UiTheme::Light => "Light",
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub theme: UiTheme,
    /// Font size multiplier
    pub font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: UiTheme::Dark,
            font_size: 1.0,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_config_has_current_version() {
        let config = AppConfig::new();
        assert_eq!(config.version, AppConfig::CURRENT_VERSION);
        assert_eq!(config.ui.theme, UiTheme::Dark);
        assert!(config.editor.show_labels);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: AppConfig = ron::from_str("(version: 1)").unwrap();
        assert_eq!(config.camera, CameraConfig::default());
        assert_eq!(config.editor, EditorConfig::default());
    }

    #[test]
    fn test_camera_config_applies_limits() {
        let config = CameraConfig {
            initial_distance: 500.0,
            max_distance: 120.0,
            ..Default::default()
        };
        let mut camera = Camera::new(1.5);
        config.apply(&mut camera);
        assert_relative_eq!(camera.distance, 120.0);
        assert_relative_eq!(camera.fov, 45f32.to_radians());
    }
}
