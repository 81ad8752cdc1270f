use super::*;
use crate::foundation::core::{PieceType, TrackId};

fn spec(piece_type: PieceType, id: i64) -> TrackPieceSpec {
    TrackPieceSpec::new(piece_type, TrackId::new(id).unwrap())
}

fn small() -> RenderSettings {
    RenderSettings::default().with_size_px(64)
}

#[test]
fn repeated_specs_share_one_image() {
    let specs = [
        spec(PieceType::Straight, 1),
        spec(PieceType::Curve, 1),
        spec(PieceType::Straight, 1),
        spec(PieceType::Straight, 2),
    ];
    let (pieces, stats) =
        render_batch_with_stats(&specs, &small(), &RenderThreading::default()).unwrap();

    assert_eq!(pieces.len(), 4);
    assert_eq!(
        stats,
        BatchStats {
            pieces_total: 4,
            pieces_rendered: 3,
            pieces_shared: 1,
        }
    );
    assert!(Arc::ptr_eq(&pieces[0].image, &pieces[2].image));
    assert!(!Arc::ptr_eq(&pieces[0].image, &pieces[3].image));
    for (piece, spec) in pieces.iter().zip(&specs) {
        assert_eq!(piece.meta.spec(), *spec);
    }
}

#[test]
fn parallel_matches_sequential() {
    let specs: Vec<_> = PieceType::ALL
        .into_iter()
        .flat_map(|t| [spec(t, 3), spec(t, 100)])
        .collect();
    let settings = small();

    let seq = render_batch(&specs, &settings, &RenderThreading::default()).unwrap();
    let par = render_batch(
        &specs,
        &settings,
        &RenderThreading {
            parallel: true,
            threads: Some(2),
            ..RenderThreading::default()
        },
    )
    .unwrap();

    assert_eq!(seq.len(), par.len());
    for (a, b) in seq.iter().zip(&par) {
        assert_eq!(a.meta, b.meta);
        assert_eq!(a.image.fingerprint(), b.image.fingerprint());
    }
}

#[test]
fn zero_threads_is_rejected() {
    let threading = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    let err = render_batch(&[spec(PieceType::Junction, 7)], &small(), &threading).unwrap_err();
    assert!(matches!(err, TrackCodeError::Validation(_)));
}

#[test]
fn invalid_settings_fail_before_rendering() {
    let settings = RenderSettings {
        lanes: 0,
        ..small()
    };
    let err = render_batch(
        &[spec(PieceType::Straight, 1)],
        &settings,
        &RenderThreading::default(),
    )
    .unwrap_err();
    assert!(matches!(err, TrackCodeError::InvalidLayout(_)));
}

#[test]
fn empty_batch_is_empty() {
    let (pieces, stats) =
        render_batch_with_stats(&[], &small(), &RenderThreading::default()).unwrap();
    assert!(pieces.is_empty());
    assert_eq!(stats, BatchStats::default());
}

#[test]
fn chunks_keep_order_and_share_across_boundaries() {
    let a = spec(PieceType::Straight, 1);
    let b = spec(PieceType::Curve, 2);
    let c = spec(PieceType::Junction, 3);
    // Chunks of two: [a, b] [a, c] [b, a] [c]
    let specs = [a, b, a, c, b, a, c];
    let threading = RenderThreading {
        chunk_size: 2,
        ..RenderThreading::default()
    };
    let (pieces, stats) = render_batch_with_stats(&specs, &small(), &threading).unwrap();

    assert_eq!(
        stats,
        BatchStats {
            pieces_total: 7,
            pieces_rendered: 3,
            pieces_shared: 4,
        }
    );
    let got: Vec<_> = pieces.iter().map(|p| p.meta.spec()).collect();
    assert_eq!(got, specs);
    assert!(Arc::ptr_eq(&pieces[0].image, &pieces[2].image));
    assert!(Arc::ptr_eq(&pieces[0].image, &pieces[5].image));
    assert!(Arc::ptr_eq(&pieces[1].image, &pieces[4].image));
    assert!(Arc::ptr_eq(&pieces[3].image, &pieces[6].image));

    // The batch cache lets go of every image once its last repeat is handed out.
    assert_eq!(Arc::strong_count(&pieces[0].image), 3);
    assert_eq!(Arc::strong_count(&pieces[1].image), 2);
    assert_eq!(Arc::strong_count(&pieces[3].image), 2);
}

#[test]
fn chunked_parallel_matches_single_chunk() {
    let specs: Vec<_> = (1..=9).map(|id| spec(PieceType::Intersection, id)).collect();
    let whole = render_batch(&specs, &small(), &RenderThreading::default()).unwrap();
    let chunked = render_batch(
        &specs,
        &small(),
        &RenderThreading {
            parallel: true,
            chunk_size: 4,
            threads: Some(2),
        },
    )
    .unwrap();
    for (x, y) in whole.iter().zip(&chunked) {
        assert_eq!(x.meta, y.meta);
        assert_eq!(x.image.fingerprint(), y.image.fingerprint());
    }
}

#[test]
fn streaming_hands_out_each_piece_once_in_order() {
    let specs: Vec<_> = [1, 2, 1, 3, 4]
        .into_iter()
        .map(|id| spec(PieceType::Straight, id))
        .collect();
    let threading = RenderThreading {
        chunk_size: 0,
        ..RenderThreading::default()
    };

    let mut seen = Vec::new();
    let stats = render_batch_streaming(&specs, &small(), &threading, |piece| {
        // A chunk size of zero renders one piece at a time.
        assert_eq!(Arc::strong_count(&piece.image), if seen.is_empty() { 2 } else { 1 });
        seen.push(piece.meta.spec());
        Ok(())
    })
    .unwrap();
    assert_eq!(seen, specs);
    assert_eq!(stats.pieces_rendered, 4);
}

#[test]
fn sink_errors_stop_the_batch() {
    let specs: Vec<_> = (1..=5).map(|id| spec(PieceType::Curve, id)).collect();
    let threading = RenderThreading {
        chunk_size: 1,
        ..RenderThreading::default()
    };
    let mut calls = 0;
    let err = render_batch_streaming(&specs, &small(), &threading, |_| {
        calls += 1;
        if calls == 2 {
            return Err(TrackCodeError::validation("disk full"));
        }
        Ok(())
    })
    .unwrap_err();
    assert!(matches!(err, TrackCodeError::Validation(_)));
    assert_eq!(calls, 2);
}
