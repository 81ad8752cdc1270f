use crate::{
    encode::bits::BitSequence,
    foundation::{core::PieceType, error::TrackCodeResult},
    geometry::{
        layout::PieceLayout,
        primitive::Role,
        straight::{build_straight_lane, build_straight_side_lines},
    },
    render::{backend::PieceRenderer, surface::DrawSurface},
};

/// Straight pieces: each lane carries three fixed code rows (top, middle, bottom).
#[derive(Clone, Copy, Debug)]
pub struct StraightRenderer {
    layout: PieceLayout,
}

impl StraightRenderer {
    pub fn new(layout: PieceLayout) -> Self {
        Self { layout }
    }
}

impl PieceRenderer for StraightRenderer {
    fn piece_type(&self) -> PieceType {
        PieceType::Straight
    }

    fn draw(&self, track: &BitSequence, surface: &mut dyn DrawSurface) -> TrackCodeResult<()> {
        for lane in 0..self.layout.lanes() as usize {
            let geo = build_straight_lane(&self.layout, lane)?;

            for row in &geo.rows {
                if let Some(squares) = &row.squares {
                    for sq in squares {
                        surface.fill_rect(Role::StartCap, sq);
                    }
                }
                for mark in &row.transitions {
                    surface.fill_rect(Role::Transition, &mark.thin);
                    surface.fill_rect(Role::Transition, &mark.thick);
                }
            }
            surface.fill_rect(Role::GuideLine, &geo.follow_line);

            for row in &geo.rows {
                for bar in row.track.bars(track.as_slice())? {
                    surface.fill_rect(Role::Track, &bar);
                }
                let location = BitSequence::encode(row.row.location_id(lane));
                for bar in row.location.bars(location.as_slice())? {
                    surface.fill_rect(Role::Location, &bar);
                }
            }
        }

        let side = build_straight_side_lines(&self.layout)?;
        for rect in side.lines.iter().chain(&side.squares) {
            surface.fill_rect(Role::SideLine, rect);
        }
        Ok(())
    }
}
