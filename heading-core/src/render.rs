//! Fixed-width text rendering for a character display.
//!
//! These helpers format tracker output into the two rows of a 16-column
//! character grid without heap allocation. Absent values render as
//! `---.-` rather than a misleading zero.

use core::fmt::Write;

use heapless::String;

use crate::tracker::HeadingSnapshot;

/// Columns on the target character display.
pub const DISPLAY_COLS: usize = 16;

/// Placeholder shown while a value is unset.
const ABSENT: &str = "---.-";

/// Render a bearing as a five-column `DDD.D` field, or `---.-` when
/// unset.
#[must_use]
pub fn render_bearing(bearing: Option<f32>) -> String<8> {
    let mut out = String::new();
    match bearing {
        Some(v) => {
            let _ = write!(out, "{v:5.1}");
        }
        None => {
            let _ = out.push_str(ABSENT);
        }
    }
    out
}

/// Render the compass deviation as a five-column magnitude plus its
/// directional letter: `W` for a westward (positive) deviation, `E` for
/// eastward, neither when the compass reads true.
#[must_use]
pub fn render_error(error: Option<f32>) -> String<8> {
    let mut out = String::new();
    match error {
        Some(v) if v > 0.0 => {
            let _ = write!(out, "{v:5.1}W");
        }
        Some(v) if v < 0.0 => {
            let neg = -v;
            let _ = write!(out, "{neg:5.1}E");
        }
        Some(_) => {
            let _ = out.push_str("  0.0");
        }
        None => {
            let _ = out.push_str(ABSENT);
        }
    }
    out
}

/// Render the two display rows, each padded to [`DISPLAY_COLS`].
#[must_use]
pub fn render_lines(snapshot: &HeadingSnapshot) -> [String<DISPLAY_COLS>; 2] {
    let mut top: String<DISPLAY_COLS> = String::new();
    let _ = write!(
        top,
        "T{} M{}",
        render_bearing(snapshot.true_bearing),
        render_bearing(snapshot.magnetic_bearing)
    );

    let mut bottom: String<DISPLAY_COLS> = String::new();
    let _ = write!(bottom, "DEV {}", render_error(snapshot.compass_error));

    pad(&mut top);
    pad(&mut bottom);
    [top, bottom]
}

/// Space-pad a row to the full display width so stale characters from
/// the previous update are overwritten.
fn pad(row: &mut String<DISPLAY_COLS>) {
    while row.len() < DISPLAY_COLS {
        let _ = row.push(' ');
    }
}
