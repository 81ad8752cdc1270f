use crate::{
    encode::{
        bits::BitSequence,
        sequencer::{CodeSequencer, LocationCounter},
    },
    foundation::{core::PieceType, error::TrackCodeResult},
    geometry::{
        junction::{JunctionBranch, JunctionSplit, build_junction_lane, build_junction_side_lines},
        layout::PieceLayout,
        primitive::Role,
    },
    render::{
        backend::PieceRenderer,
        curve::{draw_lane_caps, draw_lane_code},
        surface::DrawSurface,
    },
};

/// Junction pieces: a left and a right arc fan sharing one location counter.
#[derive(Clone, Copy, Debug)]
pub struct JunctionRenderer {
    layout: PieceLayout,
    split: JunctionSplit,
}

impl JunctionRenderer {
    pub fn new(layout: PieceLayout, split: JunctionSplit) -> Self {
        Self { layout, split }
    }

    pub fn split(&self) -> JunctionSplit {
        self.split
    }
}

impl PieceRenderer for JunctionRenderer {
    fn piece_type(&self) -> PieceType {
        PieceType::Junction
    }

    fn draw(&self, track: &BitSequence, surface: &mut dyn DrawSurface) -> TrackCodeResult<()> {
        for arc in build_junction_side_lines(&self.layout)? {
            surface.stroke_arc(Role::SideLine, &arc);
        }

        let sequencer = CodeSequencer::new(*track);
        let mut counter = LocationCounter::new();
        for branch in JunctionBranch::ALL {
            for lane in 0..self.split.lanes(branch) as usize {
                let geo = build_junction_lane(&self.layout, branch, lane)?;
                draw_lane_caps(&geo, surface);
                draw_lane_code(&geo, &sequencer, &mut counter, surface)?;
            }
        }
        tracing::debug!(
            left = self.split.left,
            right = self.split.right,
            final_location = counter.value(),
            "junction code sequenced"
        );
        Ok(())
    }
}
