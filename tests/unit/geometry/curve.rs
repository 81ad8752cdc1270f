use super::*;
use crate::encode::sequencer::ArcSlotBudget;

#[test]
fn lane_radii_step_by_the_lane_pitch() {
    let layout = PieceLayout::new(9).unwrap();
    let radii: Vec<f64> = (0..9)
        .map(|lane| build_curve_lane(&layout, lane).unwrap().code.radius)
        .collect();
    assert_eq!(radii[0], 1786.0);
    assert_eq!(radii[8], 2506.0);
    assert!(radii.windows(2).all(|w| w[1] - w[0] == 90.0));
}

#[test]
fn outer_lanes_fit_more_slots() {
    let layout = PieceLayout::new(9).unwrap();
    let inner = build_curve_lane(&layout, 0).unwrap();
    let outer = build_curve_lane(&layout, 8).unwrap();
    assert_eq!(
        inner.code.budget,
        ArcSlotBudget {
            slot_count: 20,
            numbered_slots: 16
        }
    );
    assert_eq!(
        outer.code.budget,
        ArcSlotBudget {
            slot_count: 28,
            numbered_slots: 24
        }
    );
}

#[test]
fn side_lines_frame_the_innermost_and_outermost_lanes() {
    let layout = PieceLayout::new(9).unwrap();
    let arcs = build_curve_side_lines(&layout).unwrap();
    assert_eq!(arcs.len(), 16);
    assert!(arcs.iter().all(|a| a.center == CURVE_CENTER));
    assert_eq!(arcs[0].radius, 1786.0 - 135.0);
    assert_eq!(arcs[7].radius, 1786.0 - 200.0);
    assert_eq!(arcs[8].radius, 2506.0 + 135.0);
    assert_eq!(arcs[15].radius, 2506.0 + 200.0);
}

#[test]
fn every_supported_lane_count_builds() {
    for lanes in 1..=9u32 {
        let layout = PieceLayout::new(lanes).unwrap();
        for lane in 0..lanes as usize {
            let g = build_curve_lane(&layout, lane).unwrap();
            assert!(g.code.rings.transition_inner.radius > 0.0);
        }
        let arcs = build_curve_side_lines(&layout).unwrap();
        assert!(arcs.iter().all(|a| a.radius > 0.0));
    }
    let widest = PieceLayout::new(PieceLayout::max_lanes()).unwrap();
    assert!(build_curve_side_lines(&widest).is_ok());
}
