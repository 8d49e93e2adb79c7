use crate::{
    assets::{
        decode::{ImageCrateDecoder, ImageDecoder},
        text::FontSet,
    },
    composition::request::CollageRequest,
    foundation::error::SatResult,
    render::{
        pipeline::{CollageResult, build_collage_with_fonts},
        settings::CollageSettings,
    },
};

/// Holds the latest collage and replaces it on every build.
///
/// Only one build runs at a time: [`CollageSession::build`] takes `&mut self`.
pub struct CollageSession<D: ImageDecoder = ImageCrateDecoder> {
    settings: CollageSettings,
    decoder: D,
    fonts: FontSet,
    current: Option<CollageResult>,
}

impl CollageSession<ImageCrateDecoder> {
    /// Session using the default decoder and system fonts.
    pub fn new(settings: CollageSettings) -> SatResult<Self> {
        settings.validate()?;
        let fonts = FontSet::discover(&settings.font_dirs);
        Ok(Self::with_parts(settings, ImageCrateDecoder, fonts))
    }
}

impl<D: ImageDecoder> CollageSession<D> {
    /// Session from explicit parts.
    pub fn with_parts(settings: CollageSettings, decoder: D, fonts: FontSet) -> Self {
        Self {
            settings,
            decoder,
            fonts,
            current: None,
        }
    }

    /// Build a collage, superseding the previous one.
    ///
    /// A request that fails validation leaves the previous result in place. Otherwise the
    /// previous result is released before decoding starts, and it stays released if the new
    /// build fails.
    pub fn build(&mut self, request: &CollageRequest) -> SatResult<&CollageResult> {
        request.validate()?;
        if let Some(prev) = self.current.take() {
            tracing::debug!(file_name = %prev.file_name, "releasing previous collage");
        }

        let result =
            build_collage_with_fonts(request, &self.settings, &self.decoder, &self.fonts)?;
        Ok(&*self.current.insert(result))
    }

    /// Latest successful result, if any.
    pub fn current(&self) -> Option<&CollageResult> {
        self.current.as_ref()
    }

    /// Release the held result.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Settings every build uses.
    pub fn settings(&self) -> &CollageSettings {
        &self.settings
    }
}
