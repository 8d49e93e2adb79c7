use crate::{
    assets::source::{LabeledImage, SourceImage},
    foundation::error::{SatError, SatResult},
};

/// Fewest images a collage accepts.
pub const MIN_IMAGES: usize = 2;
/// Most images a collage accepts.
pub const MAX_IMAGES: usize = 4;
/// Title value used when no satellite source is given.
pub const DEFAULT_SATELLITE_SOURCE: &str = "SENTINEL 2";
/// Title value used when no orbit type is given.
pub const DEFAULT_ORBIT_TYPE: &str = "GEOSTACJONARNA";

/// Everything one collage build needs: ordered images and two title fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollageRequest {
    /// Images in placement order.
    pub images: Vec<SourceImage>,
    /// Free-text satellite source; empty or missing falls back to [`DEFAULT_SATELLITE_SOURCE`].
    pub satellite_source: Option<String>,
    /// Free-text orbit type; empty or missing falls back to [`DEFAULT_ORBIT_TYPE`].
    pub orbit_type: Option<String>,
}

impl CollageRequest {
    /// Request for `images` with default title fields.
    pub fn new(images: Vec<SourceImage>) -> Self {
        Self {
            images,
            ..Self::default()
        }
    }

    /// Set the satellite source shown in the title.
    pub fn with_satellite_source(mut self, source: impl Into<String>) -> Self {
        self.satellite_source = Some(source.into());
        self
    }

    /// Set the orbit type shown in the title.
    pub fn with_orbit_type(mut self, orbit: impl Into<String>) -> Self {
        self.orbit_type = Some(orbit.into());
        self
    }

    /// Check the image count is within `MIN_IMAGES..=MAX_IMAGES`.
    pub fn validate(&self) -> SatResult<()> {
        let n = self.images.len();
        if n < MIN_IMAGES {
            return Err(SatError::validation(format!(
                "select at least {MIN_IMAGES} images to build a collage (got {n})"
            )));
        }
        if n > MAX_IMAGES {
            return Err(SatError::validation(format!(
                "select at most {MAX_IMAGES} images to build a collage (got {n})"
            )));
        }
        Ok(())
    }

    /// Satellite source with the default applied.
    pub fn satellite_source_or_default(&self) -> &str {
        non_empty_or(self.satellite_source.as_deref(), DEFAULT_SATELLITE_SOURCE)
    }

    /// Orbit type with the default applied.
    pub fn orbit_type_or_default(&self) -> &str {
        non_empty_or(self.orbit_type.as_deref(), DEFAULT_ORBIT_TYPE)
    }

    /// Title line drawn across the top of the collage.
    pub fn title(&self) -> String {
        format!(
            "Satelita: {} | Orbita: {}",
            self.satellite_source_or_default(),
            self.orbit_type_or_default()
        )
    }

    /// Pair every image with its extracted timestamp, preserving order.
    pub fn labeled_images(&self) -> Vec<LabeledImage> {
        self.images
            .iter()
            .cloned()
            .map(LabeledImage::from_source)
            .collect()
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/request.rs"]
mod tests;
