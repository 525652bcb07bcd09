//! Row-major text rendering and file persistence.
//!
//! The canvas stores cells column-major; this module owns the only
//! row-major traversal in the crate. Output is accumulated in full, then
//! handed to the sink in a single write.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Sentinel rendered for a canvas that has no extent yet.
pub const EMPTY_SENTINEL: &str = "<empty>";

/// Render the canvas to its canonical text form.
///
/// One line per row, columns in ascending order, each line terminated by
/// exactly one newline. An uninitialized canvas renders as
/// [`EMPTY_SENTINEL`] instead of failing; display callers want something to
/// show.
pub fn to_text(canvas: &Canvas) -> String {
    if !canvas.is_initialized() {
        return EMPTY_SENTINEL.to_string();
    }

    let line_len = canvas.columns() as usize + 1;
    let mut output = String::with_capacity(line_len * canvas.rows() as usize);
    for row in 0..canvas.rows() {
        for col in 0..canvas.columns() {
            output.push(canvas.get(col, row).unwrap_or(Canvas::EMPTY));
        }
        output.push('\n');
    }
    output
}

/// Stream the canonical text form to a writer in a single write.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_text<W: Write>(canvas: &Canvas, writer: &mut W) -> io::Result<()> {
    writer.write_all(to_text(canvas).as_bytes())?;
    writer.flush()
}

/// Persist the canonical text form to a file.
///
/// The file handle is scoped to this call and released on every exit path.
/// Open and write failures both report as a `file` category error carrying
/// the destination path; the destination name's shape (quoting, length) is
/// validated by the command layer, not here.
pub fn save(canvas: &Canvas, path: &Path) -> Result<()> {
    File::create(path)
        .and_then(|mut file| write_text(canvas, &mut file))
        .map_err(|source| Error::File { path: path.to_path_buf(), source })?;
    log::info!(
        "saved {}x{} image to '{}'",
        canvas.columns(),
        canvas.rows(),
        path.display()
    );
    Ok(())
}
