use std::sync::Arc;

use crate::foundation::error::{SatError, SatResult};

/// Decoded raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Turns encoded image bytes into a bitmap of a requested size.
///
/// Implementations run on decode worker threads, one call per source image.
pub trait ImageDecoder: Sync {
    /// Decode `bytes` and stretch the result to exactly `width × height`.
    fn decode_to_size(&self, bytes: &[u8], width: u32, height: u32) -> SatResult<PreparedImage>;
}

/// Default decoder backed by the `image` crate; format is sniffed from the bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode_to_size(&self, bytes: &[u8], width: u32, height: u32) -> SatResult<PreparedImage> {
        decode_image_to_size(bytes, width, height)
    }
}

/// Decode an image at its native size.
pub fn decode_image(bytes: &[u8]) -> SatResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| SatError::decode(format!("decode image from memory: {e}")))?;
    Ok(prepare_rgba(dyn_img.to_rgba8()))
}

/// Decode an image and resample it to `width × height` without preserving aspect ratio.
pub fn decode_image_to_size(bytes: &[u8], width: u32, height: u32) -> SatResult<PreparedImage> {
    if width == 0 || height == 0 {
        return Err(SatError::decode("target size must be non-zero"));
    }
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| SatError::decode(format!("decode image from memory: {e}")))?;
    let rgba = if dyn_img.width() == width && dyn_img.height() == height {
        dyn_img.to_rgba8()
    } else {
        dyn_img
            .resize_exact(width, height, image::imageops::FilterType::Triangle)
            .to_rgba8()
    };
    Ok(prepare_rgba(rgba))
}

fn prepare_rgba(rgba: image::RgbaImage) -> PreparedImage {
    let (width, height) = rgba.dimensions();
    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
