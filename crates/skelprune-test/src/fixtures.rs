//! ASCII mask drawings
//!
//! A drawing is a block of text, one row per line. `x`, `X`, `#` and `1`
//! are foreground; `.` and `0` are background. Blank lines and
//! surrounding whitespace are ignored, so drawings can be indented to
//! match the test source.

use crate::error::{TestError, TestResult};
use skelprune_core::BinaryMask;

/// Parse an ASCII drawing into a mask.
pub fn mask_from_ascii(drawing: &str) -> TestResult<BinaryMask> {
    let rows: Vec<&str> = drawing
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let width = rows.first().map_or(0, |r| r.chars().count());

    let mut data = Vec::with_capacity(width * rows.len());
    for (row, line) in rows.iter().enumerate() {
        if line.chars().count() != width {
            return Err(TestError::Parse {
                row,
                message: format!("{} columns, expected {}", line.chars().count(), width),
            });
        }
        for c in line.chars() {
            let v = match c {
                'x' | 'X' | '#' | '1' => 1,
                '.' | '0' => 0,
                other => {
                    return Err(TestError::Parse {
                        row,
                        message: format!("unexpected character '{}'", other),
                    });
                }
            };
            data.push(v);
        }
    }

    Ok(BinaryMask::from_vec(width as u32, rows.len() as u32, data)?)
}

/// Render a mask as a drawing, `x` for foreground and `.` for background.
pub fn mask_to_ascii(mask: &BinaryMask) -> String {
    let mut out = String::with_capacity(((mask.width() + 1) * mask.height()) as usize);
    for y in 0..mask.height() {
        for &v in mask.row(y) {
            out.push(if v != 0 { 'x' } else { '.' });
        }
        out.push('\n');
    }
    out
}
