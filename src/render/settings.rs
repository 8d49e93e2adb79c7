use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::{
    core::{Canvas, Rgba8},
    error::{SatError, SatResult},
};

/// Rendering configuration for a collage build.
///
/// Every field has a default, so a settings file only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollageSettings {
    /// Side length of the square output canvas in pixels.
    pub canvas_size: u32,
    /// Straight RGBA color of the canvas and of empty or failed cells.
    pub background_rgba: [u8; 4],
    /// Height of the per-cell label band.
    pub label_band_height: f64,
    /// Opacity of the black label band.
    pub label_band_alpha: f32,
    /// Font size of the timestamp label.
    pub label_font_px: f32,
    /// Distance from the cell bottom to the label baseline.
    pub label_baseline_inset: f64,
    /// Height of the title band across the top of the canvas.
    pub title_band_height: f64,
    /// Opacity of the black title band.
    pub title_band_alpha: f32,
    /// Font size of the bold title line.
    pub title_font_px: f32,
    /// Distance from the canvas top to the title baseline.
    pub title_baseline: f64,
    /// Decode worker count; `None` uses the rayon default.
    pub threads: Option<usize>,
    /// Extra directories scanned for `.ttf`/`.otf`/`.ttc` faces.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for CollageSettings {
    fn default() -> Self {
        Self {
            canvas_size: 800,
            background_rgba: [0x1a, 0x1a, 0x2e, 0xff],
            label_band_height: 40.0,
            label_band_alpha: 0.7,
            label_font_px: 12.0,
            label_baseline_inset: 15.0,
            title_band_height: 60.0,
            title_band_alpha: 0.8,
            title_font_px: 16.0,
            title_baseline: 35.0,
            threads: None,
            font_dirs: Vec::new(),
        }
    }
}

impl CollageSettings {
    /// Read settings from a JSON file.
    pub fn from_json_file(path: &Path) -> SatResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        let settings: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parse settings JSON '{}'", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Output canvas described by these settings.
    pub fn canvas(&self) -> SatResult<Canvas> {
        Canvas::square(self.canvas_size)
    }

    /// Canvas background color.
    pub fn background(&self) -> Rgba8 {
        Rgba8::from_array(self.background_rgba)
    }

    /// Reject settings that cannot produce a well-formed collage.
    pub fn validate(&self) -> SatResult<()> {
        let canvas = self.canvas()?;
        let size = f64::from(canvas.width);

        if !self.title_band_height.is_finite()
            || self.title_band_height < 0.0
            || self.title_band_height > size
        {
            return Err(SatError::validation(
                "title_band_height must be within [0, canvas_size]",
            ));
        }
        // The smallest cell appears with the largest supported grid (2x2).
        let min_cell = size / 2.0;
        if !self.label_band_height.is_finite()
            || self.label_band_height < 0.0
            || self.label_band_height > min_cell
        {
            return Err(SatError::validation(
                "label_band_height must be within [0, cell size]",
            ));
        }
        for (name, alpha) in [
            ("label_band_alpha", self.label_band_alpha),
            ("title_band_alpha", self.title_band_alpha),
        ] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(SatError::validation(format!(
                    "{name} must be within [0, 1]"
                )));
            }
        }
        for (name, px) in [
            ("label_font_px", self.label_font_px),
            ("title_font_px", self.title_font_px),
        ] {
            if !px.is_finite() || px <= 0.0 {
                return Err(SatError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.label_baseline_inset.is_finite() || !self.title_baseline.is_finite() {
            return Err(SatError::validation("text baselines must be finite"));
        }
        if self.threads == Some(0) {
            return Err(SatError::validation("threads must be >= 1 when set"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
