use super::*;

#[test]
fn grid_dim_is_ceil_sqrt() {
    assert_eq!(grid_dim(0), 0);
    assert_eq!(grid_dim(1), 1);
    assert_eq!(grid_dim(2), 2);
    assert_eq!(grid_dim(3), 2);
    assert_eq!(grid_dim(4), 2);
    assert_eq!(grid_dim(5), 3);
    assert_eq!(grid_dim(9), 3);
    assert_eq!(grid_dim(10), 4);
    for n in 1..500usize {
        let d = grid_dim(n);
        assert!(d * d >= n, "n={n} d={d}");
        assert!((d - 1) * (d - 1) < n, "n={n} d={d}");
    }
}

#[test]
fn cells_are_row_major_in_input_order() {
    let grid = GridLayout::new(4, &CollageSettings::default()).unwrap();
    assert_eq!(grid.dim(), 2);
    assert_eq!(grid.cell_size(), 400.0);
    assert_eq!(grid.cell_rect(0), Rect::new(0.0, 0.0, 400.0, 400.0));
    assert_eq!(grid.cell_rect(1), Rect::new(400.0, 0.0, 800.0, 400.0));
    assert_eq!(grid.cell_rect(2), Rect::new(0.0, 400.0, 400.0, 800.0));
    assert_eq!(grid.cell_rect(3), Rect::new(400.0, 400.0, 800.0, 800.0));
}

#[test]
fn cells_never_overlap_and_stay_on_canvas() {
    let settings = CollageSettings::default();
    for n in 1..=9usize {
        let grid = GridLayout::new(n, &settings).unwrap();
        let canvas = grid.canvas().rect();
        assert_eq!(grid.empty_cells(), grid.dim() * grid.dim() - n);
        for i in 0..n {
            let a = grid.cell_rect(i);
            assert!(a.x0 >= 0.0 && a.y0 >= 0.0);
            assert!(a.x1 <= canvas.x1 + 1e-9 && a.y1 <= canvas.y1 + 1e-9);
            for j in (i + 1)..n {
                let overlap = a.intersect(grid.cell_rect(j));
                assert!(overlap.area() <= 1e-9, "n={n} cells {i} and {j} overlap");
            }
        }
    }
}

#[test]
fn bands_follow_settings() {
    let grid = GridLayout::new(3, &CollageSettings::default()).unwrap();
    assert_eq!(grid.label_band_rect(2), Rect::new(0.0, 760.0, 400.0, 800.0));
    assert_eq!(grid.title_band_rect(), Rect::new(0.0, 0.0, 800.0, 60.0));
    assert_eq!(grid.cell_pixel_size(), 400);
}

#[test]
fn five_images_use_a_three_by_three_grid() {
    let grid = GridLayout::new(5, &CollageSettings::default()).unwrap();
    assert_eq!(grid.dim(), 3);
    assert_eq!(grid.empty_cells(), 4);
    assert_eq!(grid.cell_pixel_size(), 267);
    let (row, col) = cell_position(4, 3);
    assert_eq!((row, col), (1, 1));
}

#[test]
fn cell_position_with_zero_side_is_a_single_column() {
    assert_eq!(cell_position(0, 0), (0, 0));
    assert_eq!(cell_position(3, 0), (3, 0));
}

#[test]
fn zero_images_is_invalid() {
    assert!(GridLayout::new(0, &CollageSettings::default()).is_err());
}
