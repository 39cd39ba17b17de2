//! Pairing of outer rings with the holes they contain.

use topomap_types::{ClosedPolyLine, Polygon};

/// Builds one polygon per outer ring and distributes the inner rings between them as holes.
///
/// Rings are processed from the smallest to the largest. Every outer ring takes all not yet taken inner rings that
/// are not larger than itself and whose first point is inside of it. Inner rings that do not fit any outer ring are
/// dropped.
///
/// The matching is greedy: with several overlapping outer rings of similar size a hole can end up in a wrong polygon.
pub fn assemble_polygons(
    outer_rings: Vec<ClosedPolyLine>,
    inner_rings: Vec<ClosedPolyLine>,
) -> Vec<Polygon> {
    let mut holes: Vec<Option<ClosedPolyLine>> = sorted_by_area(inner_rings)
        .into_iter()
        .map(Some)
        .collect();

    sorted_by_area(outer_rings)
        .into_iter()
        .map(|shell| {
            let shell_area = shell.area();
            let mut claimed = vec![];
            for slot in holes.iter_mut() {
                let is_inside = slot.as_ref().is_some_and(|hole| {
                    hole.area() <= shell_area && shell.contains_point(hole.first_point())
                });
                if is_inside {
                    claimed.extend(slot.take());
                }
            }

            Polygon::new(shell, claimed)
        })
        .collect()
}

fn sorted_by_area(mut rings: Vec<ClosedPolyLine>) -> Vec<ClosedPolyLine> {
    rings.sort_by(|a, b| a.area().total_cmp(&b.area()));
    rings
}
