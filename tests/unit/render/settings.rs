use super::*;

#[test]
fn defaults_match_the_printed_set() {
    let s = RenderSettings::default();
    assert_eq!(s.lanes, 9);
    assert_eq!(s.size_px, 4292);
    assert_eq!(s.junction_left_lanes, None);
    assert_eq!(s.output_rotation, Rotation::Deg90);
    s.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let s = RenderSettings::from_json_str(r#"{ "size_px": 512, "output_rotation": "0deg" }"#)
        .unwrap();
    assert_eq!(s.size_px, 512);
    assert_eq!(s.output_rotation, Rotation::Deg0);
    assert_eq!(s.lanes, 9);

    let s = RenderSettings::from_reader(r#"{ "junction_left_lanes": 3 }"#.as_bytes()).unwrap();
    assert_eq!(s.junction_left_lanes, Some(3));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = RenderSettings::from_json_str(r#"{ "lane": 3 }"#).unwrap_err();
    assert!(matches!(err, TrackCodeError::Serde(_)));
    let err = RenderSettings::from_json_str(r#"{ "output_rotation": "45deg" }"#).unwrap_err();
    assert!(matches!(err, TrackCodeError::Serde(_)));
}

#[test]
fn validate_reports_the_failing_part() {
    let s = RenderSettings {
        lanes: 0,
        ..RenderSettings::default()
    };
    assert!(matches!(s.validate(), Err(TrackCodeError::InvalidLayout(_))));

    let s = RenderSettings {
        junction_left_lanes: Some(10),
        ..RenderSettings::default()
    };
    assert!(matches!(s.validate(), Err(TrackCodeError::InvalidLayout(_))));

    let s = RenderSettings::default().with_size_px(0);
    assert!(matches!(
        s.validate(),
        Err(TrackCodeError::SurfaceAllocation(_))
    ));
    let s = RenderSettings::default().with_size_px(70_000);
    assert!(s.validate().is_err());
}

#[test]
fn json_path_round_trips_through_a_file() {
    let dir = std::path::PathBuf::from("target").join("unit_settings");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");

    let want = RenderSettings {
        lanes: 5,
        size_px: 300,
        junction_left_lanes: Some(2),
        output_rotation: Rotation::Deg180,
    };
    std::fs::write(&path, serde_json::to_string_pretty(&want).unwrap()).unwrap();
    assert_eq!(RenderSettings::from_json_path(&path).unwrap(), want);

    let err = RenderSettings::from_json_path(dir.join("missing.json")).unwrap_err();
    assert!(matches!(err, TrackCodeError::Validation(_)));
}

#[test]
fn threading_defaults_to_sequential() {
    let t = RenderThreading::default();
    assert!(!t.parallel);
    assert_eq!(t.threads, None);
    assert_eq!(t.chunk_size, 64);
}
