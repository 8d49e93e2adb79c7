use std::io::Cursor;

use crate::{
    foundation::error::{SatError, SatResult},
    render::canvas::FrameRGBA,
};

/// Prefix of generated collage file names.
pub const DOWNLOAD_PREFIX: &str = "satellite-collage-";

/// File name offered when saving a collage: `satellite-collage-<unix-millis>.png`.
pub fn download_file_name(unix_millis: u128) -> String {
    format!("{DOWNLOAD_PREFIX}{unix_millis}.png")
}

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
pub fn unix_millis_now() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Encode a frame as PNG, converting premultiplied pixels back to straight alpha.
pub fn encode_png(frame: &FrameRGBA) -> SatResult<Vec<u8>> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(SatError::encode(format!(
            "frame byte length {} does not match {}x{} rgba8",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let mut straight = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut straight);
    }

    let img = image::RgbaImage::from_raw(frame.width, frame.height, straight)
        .ok_or_else(|| SatError::encode("frame buffer does not fit its dimensions"))?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| SatError::encode(format!("write png: {e}")))?;
    Ok(out)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
