//! Binary morphological operations
//!
//! Implements erosion, dilation, opening, and closing for 0/1 masks.
//!
//! Offsets follow one convention throughout: dilation reads the source at
//! `p + offset` for every hit offset, erosion reads it at `p - offset`.
//! With that pairing, opening and closing with any SEL are the proper
//! anti-extensive / extensive operators, and for symmetric SELs both
//! reduce to the usual window max / min.
//!
//! Pixels outside the mask are background for both operations, so erosion
//! clears foreground within reach of the image edge. Use
//! [`close_safe_brick`] when that matters.

use crate::{MorphError, MorphResult, Sel};
use skelprune_core::BinaryMask;

/// Dilate a binary mask with an arbitrary structuring element
///
/// An output pixel p is foreground if `src(p + offset)` is foreground for
/// any hit offset of the SEL.
pub fn dilate(mask: &BinaryMask, sel: &Sel) -> MorphResult<BinaryMask> {
    check_sel(sel)?;
    let (w, h) = mask.dimensions();
    let mut out = mask.create_template();
    let offsets: Vec<_> = sel.hit_offsets().collect();

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let hit = offsets
                .iter()
                .any(|&(dx, dy)| mask.get_pixel_or_background(x + dx, y + dy) != 0);
            if hit {
                out.set_pixel_unchecked(x as u32, y as u32, 1);
            }
        }
    }

    Ok(out)
}

/// Erode a binary mask with an arbitrary structuring element
///
/// An output pixel p is foreground if `src(p - offset)` is foreground for
/// every hit offset of the SEL. Outside the mask counts as background.
pub fn erode(mask: &BinaryMask, sel: &Sel) -> MorphResult<BinaryMask> {
    check_sel(sel)?;
    let (w, h) = mask.dimensions();
    let mut out = mask.create_template();
    let offsets: Vec<_> = sel.hit_offsets().collect();

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let all = offsets
                .iter()
                .all(|&(dx, dy)| mask.get_pixel_or_background(x - dx, y - dy) != 0);
            if all {
                out.set_pixel_unchecked(x as u32, y as u32, 1);
            }
        }
    }

    Ok(out)
}

/// Open a binary mask
///
/// Opening = Erosion followed by Dilation.
/// Removes small foreground objects and smooths contours.
pub fn open(mask: &BinaryMask, sel: &Sel) -> MorphResult<BinaryMask> {
    let eroded = erode(mask, sel)?;
    dilate(&eroded, sel)
}

/// Close a binary mask
///
/// Closing = Dilation followed by Erosion.
/// Fills small holes and connects nearby objects.
pub fn close(mask: &BinaryMask, sel: &Sel) -> MorphResult<BinaryMask> {
    let dilated = dilate(mask, sel)?;
    erode(&dilated, sel)
}

/// Dilate with a brick (rectangular, all-hit) structuring element
///
/// The origin sits at `(width / 2, height / 2)`, matching
/// [`Sel::create_brick`]. Separable: a horizontal pass followed by a
/// vertical pass, each a sliding-window count, so the cost does not
/// depend on the brick size.
pub fn dilate_brick(mask: &BinaryMask, width: u32, height: u32) -> MorphResult<BinaryMask> {
    check_brick(width, height)?;
    if width == 1 && height == 1 {
        return Ok(mask.clone());
    }
    let (lo_x, hi_x) = dilate_reach(width);
    let (lo_y, hi_y) = dilate_reach(height);
    let tmp = sweep_rows(mask, lo_x, hi_x, Sweep::Any);
    Ok(sweep_columns(&tmp, lo_y, hi_y, Sweep::Any))
}

/// Erode with a brick (rectangular, all-hit) structuring element
///
/// Separable like [`dilate_brick`]; outside the mask counts as
/// background.
pub fn erode_brick(mask: &BinaryMask, width: u32, height: u32) -> MorphResult<BinaryMask> {
    check_brick(width, height)?;
    if width == 1 && height == 1 {
        return Ok(mask.clone());
    }
    // Erosion reads p - offset: the window is the dilation window mirrored.
    let (lo_x, hi_x) = dilate_reach(width);
    let (lo_y, hi_y) = dilate_reach(height);
    let tmp = sweep_rows(mask, hi_x, lo_x, Sweep::All);
    Ok(sweep_columns(&tmp, hi_y, lo_y, Sweep::All))
}

/// Open with a brick structuring element
pub fn open_brick(mask: &BinaryMask, width: u32, height: u32) -> MorphResult<BinaryMask> {
    let eroded = erode_brick(mask, width, height)?;
    dilate_brick(&eroded, width, height)
}

/// Close with a brick structuring element
pub fn close_brick(mask: &BinaryMask, width: u32, height: u32) -> MorphResult<BinaryMask> {
    let dilated = dilate_brick(mask, width, height)?;
    erode_brick(&dilated, width, height)
}

/// Safe closing with a brick structuring element
///
/// Pads the mask with enough background that the erosion step never sees
/// the image edge, closes, and crops back. Unlike [`close_brick`], shapes
/// touching the edge are not eaten away.
pub fn close_safe_brick(mask: &BinaryMask, width: u32, height: u32) -> MorphResult<BinaryMask> {
    check_brick(width, height)?;
    if width == 1 && height == 1 {
        return Ok(mask.clone());
    }
    let pad_x = width;
    let pad_y = height;
    let padded = add_border(mask, pad_x, pad_y)?;
    let closed = close_brick(&padded, width, height)?;
    remove_border(&closed, mask.width(), mask.height(), pad_x, pad_y)
}

/// Boundary type for [`extract_boundary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryType {
    /// Background boundary: pixels just outside the foreground objects.
    /// Computed as (dilate 3×3) XOR original.
    Outer,
    /// Foreground boundary: pixels on the inner edge of foreground objects,
    /// hole edges included. Computed as (erode 3×3) XOR original.
    Inner,
}

/// Extract boundary pixels from a binary mask.
///
/// Returns a mask containing only the boundary pixels of foreground
/// components.
pub fn extract_boundary(mask: &BinaryMask, boundary_type: BoundaryType) -> MorphResult<BinaryMask> {
    let morphed = match boundary_type {
        BoundaryType::Outer => dilate_brick(mask, 3, 3)?,
        BoundaryType::Inner => erode_brick(mask, 3, 3)?,
    };
    Ok(mask.xor(&morphed)?)
}

/// Window reach `(before, after)` of a dilation brick of the given size.
///
/// With the origin at `size / 2` the window of pixel x is
/// `x - size / 2 ..= x + (size - 1 - size / 2)`.
#[inline]
fn dilate_reach(size: u32) -> (usize, usize) {
    let anchor = size / 2;
    (anchor as usize, (size - 1 - anchor) as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sweep {
    /// Output is set if any pixel of the window is set
    Any,
    /// Output is set if every pixel of the window is set (outside = unset)
    All,
}

/// Apply a 1D window along every row: window of x is `x - before ..= x + after`.
fn sweep_rows(mask: &BinaryMask, before: usize, after: usize, mode: Sweep) -> BinaryMask {
    let (w, h) = mask.dimensions();
    let w = w as usize;
    let mut out = mask.create_template();
    let mut line = vec![0u8; w];
    for y in 0..h as usize {
        line.copy_from_slice(&mask.data()[y * w..(y + 1) * w]);
        let row_out = &mut out.data_mut()[y * w..(y + 1) * w];
        sweep_line(&line, row_out, before, after, mode);
    }
    out
}

/// Apply a 1D window along every column: window of y is `y - before ..= y + after`.
fn sweep_columns(mask: &BinaryMask, before: usize, after: usize, mode: Sweep) -> BinaryMask {
    let (w, h) = mask.dimensions();
    let (w, h) = (w as usize, h as usize);
    let mut out = mask.create_template();
    let mut line = vec![0u8; h];
    let mut result = vec![0u8; h];
    for x in 0..w {
        for (y, v) in line.iter_mut().enumerate() {
            *v = mask.data()[y * w + x];
        }
        sweep_line(&line, &mut result, before, after, mode);
        let dst = out.data_mut();
        for (y, &v) in result.iter().enumerate() {
            dst[y * w + x] = v;
        }
    }
    out
}

/// Sliding-window any/all over one line using a prefix count.
fn sweep_line(src: &[u8], dst: &mut [u8], before: usize, after: usize, mode: Sweep) {
    let n = src.len();
    let mut prefix = Vec::with_capacity(n + 1);
    prefix.push(0usize);
    for &v in src {
        let last = prefix[prefix.len() - 1];
        prefix.push(last + v as usize);
    }

    for (i, out) in dst.iter_mut().enumerate() {
        let lo = i.saturating_sub(before);
        let hi = (i + after).min(n - 1);
        let count = prefix[hi + 1] - prefix[lo];
        *out = match mode {
            Sweep::Any => (count > 0) as u8,
            Sweep::All => {
                let inside = i >= before && i + after < n;
                (inside && count == before + after + 1) as u8
            }
        };
    }
}

/// Pad the mask with `pad_x` columns and `pad_y` rows of background on
/// every side.
fn add_border(mask: &BinaryMask, pad_x: u32, pad_y: u32) -> MorphResult<BinaryMask> {
    let (w, h) = mask.dimensions();
    let mut out = BinaryMask::new(w + 2 * pad_x, h + 2 * pad_y)?;
    for (x, y) in mask.foreground_pixels() {
        out.set_pixel_unchecked(x + pad_x, y + pad_y, 1);
    }
    Ok(out)
}

/// Crop a `width` x `height` window starting at `(pad_x, pad_y)`.
fn remove_border(
    mask: &BinaryMask,
    width: u32,
    height: u32,
    pad_x: u32,
    pad_y: u32,
) -> MorphResult<BinaryMask> {
    let mut out = BinaryMask::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let v = mask.get_pixel_unchecked(x + pad_x, y + pad_y);
            out.set_pixel_unchecked(x, y, v);
        }
    }
    Ok(out)
}

fn check_brick(width: u32, height: u32) -> MorphResult<()> {
    if width == 0 || height == 0 {
        return Err(MorphError::InvalidParameters(format!(
            "brick dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

fn check_sel(sel: &Sel) -> MorphResult<()> {
    if sel.hit_count() == 0 {
        return Err(MorphError::InvalidSel("structuring element has no hits".to_string()));
    }
    Ok(())
}
