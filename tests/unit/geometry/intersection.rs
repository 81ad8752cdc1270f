use super::*;

fn lane_zero() -> IntersectionLaneGeometry {
    let layout = PieceLayout::new(9).unwrap();
    build_intersection_lane(&layout, 0).unwrap()
}

fn side(g: &IntersectionLaneGeometry, which: IntersectionSide) -> IntersectionSideGeometry {
    *g.sides.iter().find(|s| s.side == which).unwrap()
}

#[test]
fn sides_come_in_drawing_order() {
    let g = lane_zero();
    let order: Vec<IntersectionSide> = g.sides.iter().map(|s| s.side).collect();
    assert_eq!(order, IntersectionSide::ALL.to_vec());
}

#[test]
fn lane_zero_edge_elements() {
    let g = lane_zero();
    assert_eq!(g.start, 2421.0);

    let bottom = side(&g, IntersectionSide::Bottom);
    assert_eq!(bottom.squares[0], RectPrimitive::new(2421.0, 4192.0, 80.0, 100.0).unwrap());
    assert_eq!(bottom.guide, RectPrimitive::new(2501.0, 3552.0, 10.0, 640.0).unwrap());
    assert_eq!(bottom.track_one, RectPrimitive::new(2517.0, 4090.0, 10.0, 76.0).unwrap());
    assert_eq!(bottom.location, RectPrimitive::new(2488.0, 4090.0, 4.0, 76.0).unwrap());

    let top = side(&g, IntersectionSide::Top);
    assert_eq!(top.track_one, RectPrimitive::new(2485.0, 132.0, 10.0, 76.0).unwrap());
    assert_eq!(top.location, RectPrimitive::new(2520.0, 132.0, 4.0, 76.0).unwrap());

    let left = side(&g, IntersectionSide::Left);
    assert_eq!(left.squares[1], RectPrimitive::new(0.0, 2511.0, 100.0, 80.0).unwrap());
    assert_eq!(left.guide, RectPrimitive::new(100.0, 2501.0, 640.0, 10.0).unwrap());
    assert_eq!(left.track_zero, RectPrimitive::new(132.0, 2520.0, 76.0, 4.0).unwrap());

    let right = side(&g, IntersectionSide::Right);
    assert_eq!(right.guide.x, 3552.0);
    assert_eq!(right.track_zero, RectPrimitive::new(4090.0, 2488.0, 76.0, 4.0).unwrap());
}

#[test]
fn code_bars_step_towards_the_piece_center() {
    let g = lane_zero();
    let center = kurbo::Point::new(2146.0, 2146.0);
    for s in &g.sides {
        let first = s.track_bar(0, true).unwrap();
        let last = s.track_bar(3, true).unwrap();
        let moved = last.center() - first.center();
        assert_eq!(moved, s.side.step() * 3.0);
        assert_eq!(moved.hypot(), 456.0);
        if s.side.is_vertical() {
            assert!((last.center().y - center.y).abs() < (first.center().y - center.y).abs());
            assert_eq!(moved.x, 0.0);
        } else {
            assert!((last.center().x - center.x).abs() < (first.center().x - center.x).abs());
            assert_eq!(moved.y, 0.0);
        }
        let loc = s.location_bar(2).unwrap();
        assert_eq!(loc.center() - s.location.center(), s.side.step() * 2.0);
    }
}

#[test]
fn middle_sub_code_has_a_wide_center_bar() {
    let g = lane_zero();
    let bottom = side(&g, IntersectionSide::Bottom);
    let bars = bottom.side_code.middle.bars().unwrap();
    let widths: Vec<f64> = bars.iter().map(|b| b.width).collect();
    assert_eq!(widths, vec![12.0, 12.0, 14.0, 12.0, 12.0]);
    assert_eq!(bars[0].x, 2421.0 + 42.0);
    assert_eq!(bars[0].y, 3324.0);

    let left = side(&g, IntersectionSide::Left);
    let bars = left.side_code.outer.bars().unwrap();
    assert!(bars.iter().all(|b| b.width == 76.0 && b.height == 4.0 && b.x == 740.0));
    assert_eq!(bars[4].y, 2421.0 + 111.0);
}

#[test]
fn side_code_rows_and_links_alternate() {
    let g = lane_zero();
    let top = side(&g, IntersectionSide::Top);
    let code = top.side_code;
    assert_eq!(code.outer.origin.y, 740.0);
    assert_eq!(code.links[0].y, 816.0);
    assert_eq!(code.middle.origin.y, 892.0);
    assert_eq!(code.links[1].y, 968.0);
    assert_eq!(code.inner.origin.y, 1044.0);

    let right = side(&g, IntersectionSide::Right);
    assert_eq!(right.side_code.outer.origin.x, 3476.0);
    assert_eq!(right.side_code.inner.origin.x, 3172.0);
    assert_eq!(right.side_code.links[1].x, 3248.0);
}

#[test]
fn connections_cross_the_piece() {
    let g = lane_zero();
    assert_eq!(
        g.connections[0],
        RectPrimitive::new(1120.0, 2503.0, 2052.0, 6.0).unwrap()
    );
    assert_eq!(
        g.connections[1],
        RectPrimitive::new(2500.0, 1120.0, 12.0, 2052.0).unwrap()
    );
}

#[test]
fn every_supported_lane_count_stays_on_canvas() {
    for lanes in 1..=9u32 {
        let layout = PieceLayout::new(lanes).unwrap();
        for lane in 0..lanes as usize {
            let g = build_intersection_lane(&layout, lane).unwrap();
            for s in &g.sides {
                for slot in 0..4 {
                    let r = s.track_bar(slot, true).unwrap();
                    assert!(r.x >= 0.0 && r.y >= 0.0);
                    assert!(r.x + r.width <= 4292.0 && r.y + r.height <= 4292.0);
                }
            }
        }
    }
}
