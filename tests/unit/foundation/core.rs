use super::*;

#[test]
fn piece_type_parses_editor_tags() {
    assert_eq!("straight".parse::<PieceType>().unwrap(), PieceType::Straight);
    assert_eq!(" Curve ".parse::<PieceType>().unwrap(), PieceType::Curve);
    assert_eq!(
        "INTERSECTION".parse::<PieceType>().unwrap(),
        PieceType::Intersection
    );
    assert_eq!("junction".parse::<PieceType>().unwrap(), PieceType::Junction);

    let err = "roundabout".parse::<PieceType>().unwrap_err();
    assert!(matches!(err, TrackCodeError::InvalidPieceType(ref t) if t == "roundabout"));
}

#[test]
fn piece_type_tag_roundtrips_through_display() {
    for t in PieceType::ALL {
        assert_eq!(t.to_string().parse::<PieceType>().unwrap(), t);
    }
}

#[test]
fn track_id_bounds() {
    assert_eq!(TrackId::new(1).unwrap().get(), 1);
    assert_eq!(TrackId::new(127).unwrap().get(), 127);
    assert!(matches!(
        TrackId::new(0),
        Err(TrackCodeError::InvalidTrackId(0))
    ));
    assert!(matches!(
        TrackId::new(128),
        Err(TrackCodeError::InvalidTrackId(128))
    ));
    assert!(matches!(
        TrackId::new(-5),
        Err(TrackCodeError::InvalidTrackId(-5))
    ));
}

#[test]
fn track_id_deserialization_is_validated() {
    let ok: TrackId = serde_json::from_str("42").unwrap();
    assert_eq!(ok.get(), 42);
    assert!(serde_json::from_str::<TrackId>("200").is_err());
}

#[test]
fn rotation_cycle_matches_editor_button() {
    let mut r = Rotation::Deg0;
    let mut seen = Vec::new();
    for _ in 0..4 {
        r = r.next_placement();
        seen.push(r.degrees());
    }
    assert_eq!(seen, vec![270, 180, 90, 0]);
}

#[test]
fn rotation_display_and_parse() {
    assert_eq!(Rotation::Deg270.to_string(), "270deg");
    assert_eq!("90deg".parse::<Rotation>().unwrap(), Rotation::Deg90);
    assert_eq!("180".parse::<Rotation>().unwrap(), Rotation::Deg180);
    assert!("45deg".parse::<Rotation>().is_err());
}
