use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::foundation::error::{SatError, SatResult};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// One font face resolved from the font database.
#[derive(Clone)]
pub struct FontFace {
    /// Raw font file bytes (may be a collection).
    pub bytes: Arc<Vec<u8>>,
    /// Face index inside `bytes`.
    pub index: u32,
    /// Primary family name reported by the font database.
    pub family: String,
    /// OpenType weight class (400 regular, 700 bold).
    pub weight: u16,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .field("family", &self.family)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Faces used for collage text: regular for cell labels, bold for the title.
#[derive(Clone, Debug, Default)]
pub struct FontSet {
    /// Sans-serif regular face.
    pub regular: Option<FontFace>,
    /// Sans-serif bold face, falling back to the closest weight available.
    pub bold: Option<FontFace>,
}

impl FontSet {
    /// Resolve faces from system fonts plus any extra font directories.
    pub fn discover(font_dirs: &[PathBuf]) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        for dir in font_dirs {
            load_fonts_from_dir(&mut db, dir);
        }
        tracing::debug!(faces = db.faces().count(), "font database loaded");

        Self {
            regular: query_face(&db, usvg::fontdb::Weight::NORMAL),
            bold: query_face(&db, usvg::fontdb::Weight::BOLD),
        }
    }

    /// Set with no faces; text drawing is skipped.
    pub fn empty() -> Self {
        Self::default()
    }
}

// fontdb maps the generic families to Microsoft core fonts, so name the common sans faces first.
const SANS_FAMILIES: &[&str] = &[
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "Arimo",
    "DejaVu Sans",
    "Noto Sans",
];

fn query_face(db: &usvg::fontdb::Database, weight: usvg::fontdb::Weight) -> Option<FontFace> {
    let mut families: Vec<usvg::fontdb::Family<'_>> = SANS_FAMILIES
        .iter()
        .copied()
        .map(usvg::fontdb::Family::Name)
        .collect();
    families.extend([
        usvg::fontdb::Family::SansSerif,
        usvg::fontdb::Family::Serif,
        usvg::fontdb::Family::Monospace,
    ]);
    let query = usvg::fontdb::Query {
        families: &families,
        weight,
        ..Default::default()
    };

    let id = match db.query(&query) {
        Some(id) => id,
        None => {
            let id = closest_weight(db.faces().map(|f| (f.id, f.weight.0)), weight.0)?;
            tracing::debug!(weight = weight.0, "no sans family matched, using closest weight");
            id
        }
    };
    let info = db.face(id)?;
    let family = info
        .families
        .first()
        .map(|(name, _)| name.clone())
        .unwrap_or_default();
    let face_weight = info.weight.0;
    db.with_face_data(id, |data, index| FontFace {
        bytes: Arc::new(data.to_vec()),
        index,
        family,
        weight: face_weight,
    })
}

/// First candidate whose weight is nearest `target`.
fn closest_weight<T>(candidates: impl IntoIterator<Item = (T, u16)>, target: u16) -> Option<T> {
    candidates
        .into_iter()
        .min_by_key(|(_, w)| w.abs_diff(target))
        .map(|(id, _)| id)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory is not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable font");
        }
    }
}

/// Stateful helper that shapes single-line text with one registered face.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
}

impl TextLayoutEngine {
    /// Register `face` with a fresh Parley font context.
    pub fn new(face: &FontFace) -> SatResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::new(face.bytes.clone()), None);

        // A collection registers several families; prefer the one the database resolved.
        let mut family_name = None;
        for (id, _) in &families {
            let Some(name) = font_ctx.collection.family_name(*id) else {
                continue;
            };
            let name = name.to_string();
            if name == face.family {
                family_name = Some(name);
                break;
            }
            if family_name.is_none() {
                family_name = Some(name);
            }
        }
        let family_name = family_name
            .ok_or_else(|| SatError::render("no font families registered from font bytes"))?;

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    /// Family name the layouts are shaped with.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape `text` as one line horizontally centered within `width_px`.
    pub fn layout_centered(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
        width_px: f32,
    ) -> SatResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(SatError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        // One line, centered even when wider than the span.
        layout.break_all_lines(None);
        layout.align(
            Some(width_px),
            parley::Alignment::Center,
            parley::AlignmentOptions {
                align_when_overflowing: true,
            },
        );
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
