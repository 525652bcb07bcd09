//! Flood fill: 4-connectivity region painting over a canvas.
//!
//! The classic formulation of this fill recurses once per painted cell,
//! which ties its stack depth to the region's longest path. This engine
//! visits the same cells through an explicit worklist instead, so arbitrarily
//! large regions fill in constant stack space.

use super::canvas::Canvas;
use crate::error::Result;

/// Paint the 4-connected empty region containing the seed.
///
/// The region is the maximal set of cells equal to [`Canvas::EMPTY`]
/// reachable from `(col, row)` through north/south/east/west neighbors;
/// diagonal adjacency never joins cells into one region. A seed that is not
/// empty leaves the canvas untouched, as does painting with the empty marker
/// itself; both are successful no-ops reporting zero painted cells.
///
/// Returns the number of cells painted.
pub fn flood_fill(canvas: &mut Canvas, col: u16, row: u16, value: char) -> Result<usize> {
    canvas.ensure_initialized()?;
    let Some(seed) = canvas.get(col, row) else {
        return Err(canvas.out_of_bounds(col, row));
    };
    // A fill with the empty marker is an identity on the region and would
    // never drain the worklist.
    if seed != Canvas::EMPTY || value == Canvas::EMPTY {
        return Ok(0);
    }

    let mut painted = 0_usize;
    let mut pending = vec![(col, row)];
    while let Some((col, row)) = pending.pop() {
        // A cell can be queued more than once before its first visit; only
        // the first visit still sees the empty marker.
        if canvas.get(col, row) != Some(Canvas::EMPTY) {
            continue;
        }
        canvas.set(col, row, value)?;
        painted += 1;

        if col > 0 {
            pending.push((col - 1, row));
        }
        if row > 0 {
            pending.push((col, row - 1));
        }
        if col + 1 < canvas.columns() {
            pending.push((col + 1, row));
        }
        if row + 1 < canvas.rows() {
            pending.push((col, row + 1));
        }
    }

    log::debug!("flood fill painted {painted} cell(s) from ({col}, {row})");
    Ok(painted)
}
