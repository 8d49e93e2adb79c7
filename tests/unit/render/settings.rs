use super::*;

#[test]
fn defaults_match_reference_layout() {
    let s = CollageSettings::default();
    s.validate().unwrap();
    assert_eq!(s.canvas_size, 800);
    assert_eq!(s.background(), Rgba8::opaque(0x1a, 0x1a, 0x2e));
    assert_eq!(s.label_band_height, 40.0);
    assert_eq!(s.title_band_height, 60.0);
}

#[test]
fn partial_json_keeps_defaults() {
    let s: CollageSettings = serde_json::from_str(r#"{ "canvas_size": 400 }"#).unwrap();
    assert_eq!(s.canvas_size, 400);
    assert_eq!(s.title_font_px, 16.0);
    s.validate().unwrap();
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(serde_json::from_str::<CollageSettings>(r#"{ "canvas": 400 }"#).is_err());
}

#[test]
fn validate_rejects_bad_values() {
    let bad = [
        CollageSettings {
            canvas_size: 0,
            ..CollageSettings::default()
        },
        CollageSettings {
            label_band_height: 500.0,
            ..CollageSettings::default()
        },
        CollageSettings {
            title_band_height: -1.0,
            ..CollageSettings::default()
        },
        CollageSettings {
            title_band_alpha: 1.5,
            ..CollageSettings::default()
        },
        CollageSettings {
            label_font_px: 0.0,
            ..CollageSettings::default()
        },
        CollageSettings {
            threads: Some(0),
            ..CollageSettings::default()
        },
    ];
    for s in bad {
        let err = s.validate().unwrap_err();
        assert!(err.is_validation(), "{s:?} -> {err}");
    }
}

#[test]
fn from_json_file_reads_and_validates() {
    let dir = std::path::PathBuf::from("target").join("settings_unit");
    std::fs::create_dir_all(&dir).unwrap();

    let ok = dir.join("ok.json");
    std::fs::write(&ok, r#"{ "threads": 2, "label_font_px": 14.0 }"#).unwrap();
    let s = CollageSettings::from_json_file(&ok).unwrap();
    assert_eq!(s.threads, Some(2));
    assert_eq!(s.label_font_px, 14.0);

    let bad = dir.join("bad.json");
    std::fs::write(&bad, r#"{ "threads": 0 }"#).unwrap();
    assert!(CollageSettings::from_json_file(&bad).is_err());

    assert!(CollageSettings::from_json_file(&dir.join("missing.json")).is_err());
}
