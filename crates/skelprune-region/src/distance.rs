//! Distance function
//!
//! Two-pass 3x3 chamfer approximation of the Euclidean distance from every
//! foreground pixel to the nearest background pixel of the image. Axis
//! steps cost 0.955 and diagonal steps 1.3693, the mask that minimizes the
//! maximum error against true L2 distance.
//!
//! Only background pixels inside the image are sources. The image edge is
//! not a boundary: a region touching the edge keeps growing distances
//! towards it, and a foreground component with no background pixel
//! anywhere in the image stays at `f32::INFINITY`.

use skelprune_core::{BinaryMask, FloatMap};

/// Cost of a horizontal or vertical step
pub const AXIS_STEP: f32 = 0.955;
/// Cost of a diagonal step
pub const DIAGONAL_STEP: f32 = 1.3693;

/// Neighbors already visited by the forward (top-left to bottom-right) pass
const FORWARD: [(isize, isize, f32); 4] = [
    (-1, 0, AXIS_STEP),
    (-1, -1, DIAGONAL_STEP),
    (0, -1, AXIS_STEP),
    (1, -1, DIAGONAL_STEP),
];

/// Neighbors already visited by the backward pass
const BACKWARD: [(isize, isize, f32); 4] = [
    (1, 0, AXIS_STEP),
    (1, 1, DIAGONAL_STEP),
    (0, 1, AXIS_STEP),
    (-1, 1, DIAGONAL_STEP),
];

/// Compute the chamfer distance map of a mask
///
/// Background pixels hold 0; a foreground pixel 4-adjacent to background
/// holds [`AXIS_STEP`].
///
/// # Examples
///
/// ```
/// use skelprune_core::BinaryMask;
/// use skelprune_region::distance_function;
///
/// let mask = BinaryMask::from_vec(4, 1, vec![1, 1, 0, 1]).unwrap();
/// let dist = distance_function(&mask);
/// assert_eq!(dist.get_pixel(2, 0), Some(0.0));
/// assert_eq!(dist.get_pixel(1, 0), Some(0.955));
/// assert_eq!(dist.get_pixel(3, 0), Some(0.955));
/// assert!((dist.get_pixel(0, 0).unwrap() - 1.91).abs() < 1e-5);
/// ```
pub fn distance_function(mask: &BinaryMask) -> FloatMap {
    let (w, h) = mask.dimensions();
    let (wu, hu) = (w as usize, h as usize);
    let mut dist: Vec<f32> = mask
        .data()
        .iter()
        .map(|&v| if v != 0 { f32::INFINITY } else { 0.0 })
        .collect();

    let relax = |dist: &mut [f32], x: usize, y: usize, steps: &[(isize, isize, f32)]| {
        let idx = y * wu + x;
        if dist[idx] == 0.0 {
            return;
        }
        let mut best = dist[idx];
        for &(dx, dy, cost) in steps {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            // Outside the image is never a source
            if nx < 0 || ny < 0 || nx >= wu as isize || ny >= hu as isize {
                continue;
            }
            best = best.min(dist[ny as usize * wu + nx as usize] + cost);
        }
        dist[idx] = best;
    };

    for y in 0..hu {
        for x in 0..wu {
            relax(&mut dist, x, y, &FORWARD[..]);
        }
    }
    for y in (0..hu).rev() {
        for x in (0..wu).rev() {
            relax(&mut dist, x, y, &BACKWARD[..]);
        }
    }

    match FloatMap::from_vec(w, h, dist) {
        Ok(map) => map,
        // Same dimensions and length as a valid mask
        Err(_) => unreachable!("distance map matches mask dimensions"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_single_background_pixel() {
        let mut mask = BinaryMask::from_vec(9, 9, vec![1; 81]).unwrap();
        mask.set_pixel(4, 4, 0).unwrap();
        let dist = distance_function(&mask);
        assert_eq!(dist.get_pixel(4, 4), Some(0.0));
        assert_eq!(dist.get_pixel(4, 3), Some(AXIS_STEP));
        assert_eq!(dist.get_pixel(3, 3), Some(DIAGONAL_STEP));
        assert!(close(dist.get_pixel(2, 3).unwrap(), AXIS_STEP + DIAGONAL_STEP));
        assert!(close(dist.get_pixel(0, 0).unwrap(), 4.0 * DIAGONAL_STEP));
        assert!(close(dist.get_pixel(0, 4).unwrap(), 4.0 * AXIS_STEP));
    }

    #[test]
    fn test_region_touching_edge_grows_towards_it() {
        // Background only in the last column
        let mut mask = BinaryMask::from_vec(10, 5, vec![1; 50]).unwrap();
        for y in 0..5 {
            mask.set_pixel(9, y, 0).unwrap();
        }
        let dist = distance_function(&mask);
        for y in 0..5 {
            assert!(close(dist.get_pixel(8, y).unwrap(), AXIS_STEP));
            assert!(close(dist.get_pixel(0, y).unwrap(), 9.0 * AXIS_STEP));
        }
    }

    #[test]
    fn test_no_background_is_unreached() {
        let mask = BinaryMask::from_vec(5, 5, vec![1; 25]).unwrap();
        let dist = distance_function(&mask);
        assert!(dist.data().iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_background_stays_zero() {
        let mask = BinaryMask::new(4, 4).unwrap();
        let dist = distance_function(&mask);
        assert!(dist.data().iter().all(|&d| d == 0.0));
    }
}
