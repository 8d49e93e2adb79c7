use super::*;

fn report(index: usize, status: CellStatus) -> CellReport {
    CellReport {
        index,
        file_name: format!("{index}.png"),
        label: "Unknown timestamp".to_string(),
        image_rect: Rect::new(0.0, 0.0, 1.0, 1.0),
        label_band: Rect::new(0.0, 0.0, 1.0, 1.0),
        status,
    }
}

fn result_with(cells: Vec<CellReport>) -> CollageResult {
    CollageResult {
        png: Arc::from(b"png-bytes".to_vec()),
        width: 800,
        height: 800,
        title: "t".to_string(),
        title_band: Rect::new(0.0, 0.0, 800.0, 60.0),
        file_name: "satellite-collage-1.png".to_string(),
        cells,
    }
}

#[test]
fn thread_pool_rejects_zero_threads() {
    assert!(build_thread_pool(Some(0)).is_err());
    assert_eq!(build_thread_pool(Some(2)).unwrap().current_num_threads(), 2);
    build_thread_pool(None).unwrap();
}

#[test]
fn failed_cells_lists_placeholders_only() {
    let result = result_with(vec![
        report(0, CellStatus::Drawn),
        report(
            1,
            CellStatus::Placeholder {
                reason: "bad".to_string(),
            },
        ),
        report(2, CellStatus::Drawn),
    ]);
    let failed: Vec<usize> = result.failed_cells().map(|c| c.index).collect();
    assert_eq!(failed, [1]);
}

#[test]
fn save_to_dir_uses_generated_name() {
    let dir = PathBuf::from("target").join("pipeline_unit").join("out");
    let result = result_with(Vec::new());
    let path = result.save_to_dir(&dir).unwrap();
    assert_eq!(path, dir.join("satellite-collage-1.png"));
    assert_eq!(std::fs::read(&path).unwrap(), b"png-bytes");
}

#[test]
fn invalid_settings_fail_before_decoding() {
    struct Unreachable;
    impl ImageDecoder for Unreachable {
        fn decode_to_size(&self, _: &[u8], _: u32, _: u32) -> SatResult<PreparedImage> {
            panic!("decoder must not run");
        }
    }

    let request = CollageRequest::new(vec![
        crate::assets::source::SourceImage::new("a.png", vec![0u8]),
        crate::assets::source::SourceImage::new("b.png", vec![0u8]),
    ]);
    let settings = CollageSettings {
        threads: Some(0),
        ..CollageSettings::default()
    };
    let err = build_collage_with_fonts(&request, &settings, &Unreachable, &FontSet::empty())
        .unwrap_err();
    assert!(err.is_validation());
}
