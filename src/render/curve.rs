use crate::{
    encode::{
        bits::BitSequence,
        sequencer::{CodeSequencer, LocationCounter, SlotDecision},
    },
    foundation::{core::PieceType, error::TrackCodeResult},
    geometry::{
        arc::ArcLaneGeometry,
        curve::{build_curve_lane, build_curve_side_lines},
        layout::PieceLayout,
        primitive::Role,
    },
    render::{backend::PieceRenderer, surface::DrawSurface},
};

/// Curve pieces: a quarter circle per lane, code rings sequenced across all lanes.
#[derive(Clone, Copy, Debug)]
pub struct CurveRenderer {
    layout: PieceLayout,
}

impl CurveRenderer {
    pub fn new(layout: PieceLayout) -> Self {
        Self { layout }
    }
}

impl PieceRenderer for CurveRenderer {
    fn piece_type(&self) -> PieceType {
        PieceType::Curve
    }

    fn draw(&self, track: &BitSequence, surface: &mut dyn DrawSurface) -> TrackCodeResult<()> {
        let sequencer = CodeSequencer::new(*track);
        let mut counter = LocationCounter::new();

        for lane in 0..self.layout.lanes() as usize {
            let geo = build_curve_lane(&self.layout, lane)?;
            draw_lane_code(&geo, &sequencer, &mut counter, surface)?;
            draw_lane_caps(&geo, surface);
        }

        for arc in build_curve_side_lines(&self.layout)? {
            surface.stroke_arc(Role::SideLine, &arc);
        }
        tracing::debug!(final_location = counter.value(), "curve code sequenced");
        Ok(())
    }
}

/// Sequence one arc lane and stroke its code rings.
pub(crate) fn draw_lane_code(
    geo: &ArcLaneGeometry,
    sequencer: &CodeSequencer,
    counter: &mut LocationCounter,
    surface: &mut dyn DrawSurface,
) -> TrackCodeResult<()> {
    let code = &geo.code;
    let rings = &code.rings;
    let decisions = sequencer.sequence_lane(code.budget, counter);
    tracing::debug!(
        lane = geo.lane,
        radius = code.radius,
        slots = code.budget.slot_count,
        numbered = code.budget.numbered_slots,
        location = counter.value(),
        "arc lane budget"
    );

    for (j, decision) in decisions.into_iter().enumerate() {
        match decision {
            SlotDecision::Transition => {
                surface.stroke_arc(Role::Transition, &code.ring_arc(rings.transition_inner, j)?);
                surface.stroke_arc(Role::Transition, &code.ring_arc(rings.transition_outer, j)?);
            }
            SlotDecision::Bits { location, track } => {
                let loc = if location {
                    rings.location_one
                } else {
                    rings.location_zero
                };
                surface.stroke_arc(Role::Location, &code.ring_arc(loc, j)?);
                let trk = if track {
                    rings.track_one
                } else {
                    rings.track_zero
                };
                surface.stroke_arc(Role::Track, &code.ring_arc(trk, j)?);
            }
        }
    }
    Ok(())
}

pub(crate) fn draw_lane_caps(geo: &ArcLaneGeometry, surface: &mut dyn DrawSurface) {
    for sq in &geo.caps.squares {
        surface.stroke_arc(Role::StartCap, sq);
    }
    surface.stroke_arc(Role::GuideLine, &geo.caps.guide);
}
