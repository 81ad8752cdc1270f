use crate::{
    encode::bits::BitSequence,
    foundation::{
        core::{INTERSECTION_CODE_BITS, PieceType},
        error::TrackCodeResult,
    },
    geometry::{intersection::build_intersection_lane, layout::PieceLayout, primitive::Role},
    render::{backend::PieceRenderer, surface::DrawSurface},
};

/// Intersection pieces: four entry sides per lane, each with a 4-bit track code and the
/// intersection identification code.
#[derive(Clone, Copy, Debug)]
pub struct IntersectionRenderer {
    layout: PieceLayout,
}

impl IntersectionRenderer {
    pub fn new(layout: PieceLayout) -> Self {
        Self { layout }
    }
}

impl PieceRenderer for IntersectionRenderer {
    fn piece_type(&self) -> PieceType {
        PieceType::Intersection
    }

    fn draw(&self, track: &BitSequence, surface: &mut dyn DrawSurface) -> TrackCodeResult<()> {
        for lane in 0..self.layout.lanes() as usize {
            let geo = build_intersection_lane(&self.layout, lane)?;

            for side in &geo.sides {
                for sq in &side.squares {
                    surface.fill_rect(Role::StartCap, sq);
                }
                surface.fill_rect(Role::GuideLine, &side.guide);
                for slot in 0..INTERSECTION_CODE_BITS {
                    surface.fill_rect(Role::Track, &side.track_bar(slot, track.bit(slot))?);
                    surface.fill_rect(Role::Location, &side.location_bar(slot)?);
                }
            }

            for side in &geo.sides {
                let code = &side.side_code;
                for sub in [&code.inner, &code.middle, &code.outer] {
                    for bar in sub.bars()? {
                        surface.fill_rect(Role::SideCode, &bar);
                    }
                }
                for link in &code.links {
                    surface.fill_rect(Role::GuideLine, link);
                }
            }

            for bar in &geo.connections {
                surface.fill_rect(Role::Connection, bar);
            }
        }
        Ok(())
    }
}
