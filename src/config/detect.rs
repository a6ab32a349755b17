use crate::detector::DetectorConfig;
use crate::edges::FieldConfig;
use crate::geometry::Point;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub gradient: FieldConfig,
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub mode: DetectMode,
    /// Strokes run in [`DetectMode::Probes`] mode.
    #[serde(default)]
    pub probes: Vec<ProbeConfig>,
    pub output: DetectOutputConfig,
}

/// What the tool runs on the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectMode {
    /// Whole image sweep, vertical strokes first.
    #[default]
    Sweep,
    /// Whole image sweep alternating the four stroke families.
    BalancedSweep,
    /// The listed probes only.
    Probes,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ProbeConfig {
    pub p1: Point,
    pub p2: Point,
    /// Seed of the initial pass; the strongest gradient of the stroke when
    /// absent.
    #[serde(default)]
    pub center: Option<Point>,
}

#[derive(Debug, Deserialize)]
pub struct DetectOutputConfig {
    pub segments_json: PathBuf,
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
    /// Write every segment point into the JSON report.
    #[serde(default)]
    pub with_points: bool,
}

pub fn parse_config(data: &str) -> Result<DetectToolConfig, String> {
    serde_json::from_str(data).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("{e} ({})", path.display()))
}
