//! Inscribed-arc pruning
//!
//! A skeleton pixel is the center of the largest disk that fits in the
//! shape. Its radius comes from the distance map. A genuine medial-axis
//! pixel has a disk touching the contour at two widely separated points;
//! a pixel produced by a small bump on the contour sees its touching
//! points bunched together. The pixel is kept when the widest angle
//! subtended at the center by two touching points reaches a threshold.

use crate::error::{RegionError, RegionResult};
use skelprune_core::{BinaryMask, Box, FloatMap};
use std::f64::consts::{PI, TAU};
use tracing::debug;

/// Default extra search distance around the inscribed circle, in pixels
pub const DEFAULT_ARC_MARGIN: u32 = 3;

/// Radial tolerance per unit of `1 + margin`
const RADIAL_SLACK: f64 = 1.414;

/// Options for inscribed-arc pruning
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPruneOptions {
    /// Minimum arc angle in degrees for a pixel to be kept; a value of 0 or
    /// less disables the stage
    pub threshold_degrees: f32,
    /// Extra distance beyond the radius to search for touching points
    pub margin: u32,
}

impl Default for ArcPruneOptions {
    fn default() -> Self {
        Self {
            threshold_degrees: 0.0,
            margin: DEFAULT_ARC_MARGIN,
        }
    }
}

impl ArcPruneOptions {
    /// Create options with the given angle threshold
    pub fn new(threshold_degrees: f32) -> Self {
        Self {
            threshold_degrees,
            ..Self::default()
        }
    }

    /// Set the search margin
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Whether the stage does anything
    pub fn is_enabled(&self) -> bool {
        self.threshold_degrees > 0.0
    }
}

/// Widest angle, in radians within `[0, PI]`, between any two of the given
/// directions (radians in `[-PI, PI]`).
fn widest_pair_angle(mut angles: Vec<f64>) -> f64 {
    angles.sort_by(f64::total_cmp);

    let circular = |a: f64, b: f64| {
        let d = (a - b).abs() % TAU;
        d.min(TAU - d)
    };

    // The partner of `a` that is farthest away is the one nearest to the
    // opposite direction.
    let mut widest: f64 = 0.0;
    for &a in &angles {
        let opposite = if a < 0.0 { a + PI } else { a - PI };
        let i = angles.partition_point(|&b| b < opposite);
        let before = angles[(i + angles.len() - 1) % angles.len()];
        let after = angles[i % angles.len()];
        let gap = circular(opposite, before).min(circular(opposite, after));
        widest = widest.max(PI - gap);
    }
    widest
}

/// Widest touching-point angle for the circle at (cx, cy), or `None` when
/// fewer than two contour points touch it.
fn inscribed_arc_angle(
    contour: &BinaryMask,
    cx: u32,
    cy: u32,
    radius: u32,
    margin: u32,
) -> Option<f64> {
    let r = radius as f64;
    let (w, h) = contour.dimensions();
    // No contour point can lie beyond the image diagonal
    if r > (w as f64).hypot(h as f64) {
        return None;
    }
    let reach = i32::try_from(radius.saturating_add(margin)).unwrap_or(i32::MAX);
    let window = Box::new_unchecked(cx as i32, cy as i32, 1, 1).expand_clipped(reach, w, h)?;
    let tolerance = RADIAL_SLACK * (1.0 + margin as f64);

    let mut angles = Vec::new();
    for y in window.y..window.bottom() {
        let dy = (y - cy as i32) as f64;
        let row = &contour.row(y as u32)[window.x as usize..window.right() as usize];
        for (x, &v) in (window.x..window.right()).zip(row) {
            if v == 0 {
                continue;
            }
            let dx = (x - cx as i32) as f64;
            let d = dx.hypot(dy);
            if d >= r && (d - r).abs() <= tolerance {
                angles.push(dy.atan2(dx));
            }
        }
    }

    if angles.len() < 2 {
        return None;
    }
    Some(widest_pair_angle(angles))
}

/// Drop skeleton pixels whose inscribed circle touches the contour only
/// within a narrow arc
///
/// For every skeleton pixel off the image border, the inscribed radius is
/// `max(floor(distance), 1)`. Contour pixels in the square window of
/// half-size `radius + margin` (clamped to the image) touch the circle when
/// their distance `d` from the center satisfies `d >= radius` and
/// `|d - radius| <= 1.414 * (1 + margin)`. The pixel is kept when at least
/// two points touch and the widest angle between two of them is at least
/// `threshold_degrees`. Skeleton pixels on the image border are dropped.
///
/// With the stage disabled (threshold 0 or less) the skeleton is returned
/// unchanged.
///
/// # Errors
///
/// Returns [`RegionError::Core`] unless all three inputs share dimensions,
/// and [`RegionError::InvalidParameters`] for a NaN threshold.
pub fn prune_by_inscribed_arc(
    skeleton: &BinaryMask,
    distance: &FloatMap,
    contour: &BinaryMask,
    options: &ArcPruneOptions,
) -> RegionResult<BinaryMask> {
    skeleton.check_same_size(contour)?;
    skelprune_core::check_same_size(skeleton.dimensions(), distance.dimensions())?;
    if options.threshold_degrees.is_nan() {
        return Err(RegionError::InvalidParameters("arc angle threshold is NaN".to_string()));
    }
    if !options.is_enabled() {
        return Ok(skeleton.clone());
    }

    let (w, h) = skeleton.dimensions();
    let threshold = (options.threshold_degrees as f64).to_radians();
    let mut out = skeleton.create_template();
    let mut spurious = 0usize;

    for (x, y) in skeleton.foreground_pixels() {
        if x == 0 || y == 0 || x + 1 == w || y + 1 == h {
            spurious += 1;
            continue;
        }
        let d = distance.get_pixel(x, y).unwrap_or(0.0);
        // NaN and negative distances fall back to the minimum radius
        let radius = if d >= 1.0 { d.floor() as u32 } else { 1 };
        match inscribed_arc_angle(contour, x, y, radius, options.margin) {
            Some(angle) if angle >= threshold => out.set_pixel_unchecked(x, y, 1),
            _ => spurious += 1,
        }
    }

    debug!(
        kept = out.count_foreground(),
        spurious,
        threshold_degrees = options.threshold_degrees,
        "inscribed-arc pruning"
    );
    Ok(out)
}
