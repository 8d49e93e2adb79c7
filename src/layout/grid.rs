use crate::{
    foundation::{
        core::{Canvas, Rect},
        error::{SatError, SatResult},
    },
    render::settings::CollageSettings,
};

/// Side length of the smallest square grid holding `n` cells, i.e. `ceil(sqrt(n))`.
///
/// Computed in integers so perfect squares never round up.
pub fn grid_dim(n: usize) -> usize {
    let mut d = (n as f64).sqrt() as usize;
    while d * d < n {
        d += 1;
    }
    while d > 0 && (d - 1) * (d - 1) >= n {
        d -= 1;
    }
    d
}

/// Row/column of cell `index` in a row-major grid of side `dim`; a zero side counts as one.
pub fn cell_position(index: usize, dim: usize) -> (usize, usize) {
    let dim = dim.max(1);
    (index / dim, index % dim)
}

/// Geometry of one collage: square grid over a square canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    canvas: Canvas,
    count: usize,
    dim: usize,
    cell_size: f64,
    label_band_height: f64,
    title_band_height: f64,
}

impl GridLayout {
    /// Lay out `count` images on the canvas described by `settings`.
    pub fn new(count: usize, settings: &CollageSettings) -> SatResult<Self> {
        if count == 0 {
            return Err(SatError::validation("grid needs at least one cell"));
        }
        let canvas = settings.canvas()?;
        let dim = grid_dim(count);
        Ok(Self {
            canvas,
            count,
            dim,
            cell_size: f64::from(canvas.width) / dim as f64,
            label_band_height: settings.label_band_height,
            title_band_height: settings.title_band_height,
        })
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Grid side length.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Cell side length in canvas units.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Cells left empty after placing every image.
    pub fn empty_cells(&self) -> usize {
        self.dim * self.dim - self.count
    }

    /// Cell rectangle for image `index`, in input order, row-major.
    pub fn cell_rect(&self, index: usize) -> Rect {
        let (row, col) = cell_position(index, self.dim);
        let x = col as f64 * self.cell_size;
        let y = row as f64 * self.cell_size;
        Rect::new(x, y, x + self.cell_size, y + self.cell_size)
    }

    /// Label band across the bottom of cell `index`.
    pub fn label_band_rect(&self, index: usize) -> Rect {
        let cell = self.cell_rect(index);
        Rect::new(cell.x0, cell.y1 - self.label_band_height, cell.x1, cell.y1)
    }

    /// Title band across the full canvas width at the top.
    pub fn title_band_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.canvas.width),
            self.title_band_height,
        )
    }

    /// Pixel size the decoder should produce for each cell.
    pub fn cell_pixel_size(&self) -> u32 {
        (self.cell_size.round() as u32).max(1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
