//! satcollage turns a handful of timestamped satellite images into one labeled collage.
//!
//! # Pipeline overview
//!
//! 1. **Label**: every [`SourceImage`] filename is scanned for `YYYY-MM-DD HHMMSS`
//!    ([`extract_timestamp`]), producing a [`LabeledImage`].
//! 2. **Lay out**: the images are placed row-major on a `ceil(sqrt(n))` square grid over a fixed
//!    square canvas ([`GridLayout`]).
//! 3. **Decode**: all images are decoded concurrently and joined before drawing starts
//!    ([`ImageDecoder`]). A failed decode becomes a placeholder cell instead of failing the build.
//! 4. **Draw**: each cell gets its stretched image, a translucent label band and the timestamp;
//!    the title band is drawn last.
//! 5. **Encode**: the canvas is written as PNG ([`CollageResult`]).
//!
//! [`build_collage`] runs one build; [`CollageSession`] keeps the latest result and releases it
//! when the next build starts.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composition;
mod encode;
mod foundation;
mod layout;
mod render;

pub use assets::decode::{
    ImageCrateDecoder, ImageDecoder, PreparedImage, decode_image, decode_image_to_size,
};
pub use assets::source::{LabeledImage, SourceImage};
pub use assets::text::{FontFace, FontSet, TextBrushRgba8, TextLayoutEngine};
pub use assets::timestamp::{UNKNOWN_TIMESTAMP, extract_timestamp};
pub use composition::request::{
    CollageRequest, DEFAULT_ORBIT_TYPE, DEFAULT_SATELLITE_SOURCE, MAX_IMAGES, MIN_IMAGES,
};
pub use encode::png::{DOWNLOAD_PREFIX, download_file_name, encode_png, unix_millis_now};
pub use foundation::core::{Affine, Canvas, Rect, Rgba8};
pub use foundation::error::{SatError, SatResult};
pub use layout::grid::{GridLayout, cell_position, grid_dim};
pub use render::canvas::{CpuCanvas, FrameRGBA, TextPainter};
pub use render::pipeline::{
    CellReport, CellStatus, CollageResult, build_collage, build_collage_with_fonts,
};
pub use render::session::CollageSession;
pub use render::settings::CollageSettings;
