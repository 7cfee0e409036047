//! Full-history replay.

use super::history::CommandLog;
use super::render::render_primitive;
use super::surface::{RenderError, Surface};
use log::{debug, error};

/// Counts gathered during one replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Strokes visited
    pub strokes: usize,
    /// Primitives rendered successfully
    pub primitives: usize,
    /// Primitives that failed to render and were skipped
    pub skipped: usize,
}

/// Rebuilds `surface` from scratch out of `log`.
///
/// Clears the surface, then renders every primitive of every stroke in
/// commit order. A primitive that fails to render is logged and skipped; the
/// rest of the log is still replayed. Only a failure to clear aborts.
pub fn replay<S: Surface + ?Sized>(
    log: &CommandLog,
    surface: &mut S,
) -> Result<ReplayReport, RenderError> {
    surface.clear()?;

    let mut report = ReplayReport::default();
    for (stroke_index, stroke) in log.strokes().iter().enumerate() {
        report.strokes += 1;
        for primitive in stroke.primitives() {
            match render_primitive(surface, primitive) {
                Ok(()) => report.primitives += 1,
                Err(err) => {
                    report.skipped += 1;
                    error!(
                        "Skipping {} primitive in stroke {stroke_index}: {err}",
                        primitive.kind_name()
                    );
                }
            }
        }
    }

    debug!(
        "Replayed {} stroke(s), {} primitive(s), {} skipped",
        report.strokes, report.primitives, report.skipped
    );
    Ok(report)
}
