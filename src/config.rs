// config.rs - Tunables and DOM wiring
//
// Defaults reproduce the stock page. Hosts can override any subset by
// passing JSON to `run_with_config`; missing keys keep their default.

use serde::Deserialize;

use crate::error::Result;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub sim: SimConfig,
    pub ui: UiConfig,
    pub dom: DomIds,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Motion, sizing and respawn constants.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub default_count: u32,
    pub default_speed: u32,
    /// Velocity component = (rand - 0.5) * speed * velocity_scale
    pub velocity_scale: f32,
    /// Sprite stamp edge length (px)
    pub size: f32,
    /// Circle radius (px)
    pub radius: f32,
    /// Distance past the canvas edge before an entity wraps (px)
    pub wrap_margin: f32,
    /// Clicks closer than this re-arm an entity (px)
    pub respawn_radius: f32,
    /// Frames an entity stays hidden after a click
    pub respawn_frames: u32,
    pub seed: Option<u32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            default_count: 3,
            default_speed: 50,
            velocity_scale: 0.1,
            size: 40.0,
            radius: 20.0,
            wrap_margin: 50.0,
            respawn_radius: 50.0,
            respawn_frames: 120, // 2s at 60fps
            seed: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub count_min: u32,
    pub count_max: u32,
    pub speed_min: u32,
    pub speed_max: u32,
    pub circle_color: String,
    /// Document clicks needed to bring the control panel back
    pub restore_clicks: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            count_min: 1,
            count_max: 20,
            speed_min: 1,
            speed_max: 100,
            circle_color: "red".to_string(),
            restore_clicks: 3,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DomIds {
    pub canvas: String,
    pub controls: String,
    pub count_slider: String,
    pub count_label: String,
    pub speed_slider: String,
    pub speed_label: String,
    pub color_picker: String,
    pub image_upload: String,
    pub clear_image: String,
    pub fullscreen: String,
    pub hide_controls: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            canvas: "gameCanvas".into(),
            controls: "controls".into(),
            count_slider: "objectSlider".into(),
            count_label: "objectCountLabel".into(),
            speed_slider: "speedSlider".into(),
            speed_label: "speedLabel".into(),
            color_picker: "bgColorPicker".into(),
            image_upload: "imageUpload".into(),
            clear_image: "clearImageButton".into(),
            fullscreen: "fullscreenButton".into(),
            hide_controls: "hideControlsButton".into(),
        }
    }
}
