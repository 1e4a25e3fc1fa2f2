//! Border tracing for connected components
//!
//! Outer borders are traced with Moore-neighbor following: starting from a
//! component's first pixel in raster order, walk clockwise around the
//! component keeping background on the left. Pixels outside the image are
//! background, so components touching the edge are traced along it. A
//! component inside another one's hole is traced like any other.
//!
//! Hole borders are not traced. [`ContourMode::All`] adds them to a contour
//! mask as the foreground pixels 8-adjacent to an enclosed background
//! region.

use crate::conncomp::{ConnectivityType, label_connected_components};
use crate::error::RegionResult;
use skelprune_core::{BinaryMask, Box};
use skelprune_morph::dilate_brick;
use tracing::debug;

/// Direction for border traversal (8-connected, clockwise from West)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// West (-1, 0)
    West = 0,
    /// Northwest (-1, -1)
    NorthWest = 1,
    /// North (0, -1)
    North = 2,
    /// Northeast (1, -1)
    NorthEast = 3,
    /// East (1, 0)
    East = 4,
    /// Southeast (1, 1)
    SouthEast = 5,
    /// South (0, 1)
    South = 6,
    /// Southwest (-1, 1)
    SouthWest = 7,
}

impl Direction {
    /// Get the x offset for this direction
    #[inline]
    pub fn dx(self) -> i32 {
        XPOSTAB[self as usize]
    }

    /// Get the y offset for this direction
    #[inline]
    pub fn dy(self) -> i32 {
        YPOSTAB[self as usize]
    }

    /// Get direction from x,y offsets
    pub fn from_offset(dx: i32, dy: i32) -> Option<Self> {
        if dx.abs() > 1 || dy.abs() > 1 || (dx == 0 && dy == 0) {
            return None;
        }
        let idx = DIRTAB[(1 + dy) as usize][(1 + dx) as usize];
        if idx < 0 {
            None
        } else {
            Some(Self::from_index(idx as usize))
        }
    }

    /// Create direction from index (taken modulo 8)
    #[inline]
    fn from_index(idx: usize) -> Self {
        match idx % 8 {
            0 => Direction::West,
            1 => Direction::NorthWest,
            2 => Direction::North,
            3 => Direction::NorthEast,
            4 => Direction::East,
            5 => Direction::SouthEast,
            6 => Direction::South,
            _ => Direction::SouthWest,
        }
    }

    /// Rotate clockwise by `steps` eighths of a turn
    #[inline]
    pub fn clockwise(self, steps: usize) -> Self {
        Self::from_index(self as usize + steps)
    }
}

/// X offset for each direction
const XPOSTAB: [i32; 8] = [-1, -1, 0, 1, 1, 1, 0, -1];

/// Y offset for each direction
const YPOSTAB: [i32; 8] = [0, -1, -1, -1, 0, 1, 1, 1];

/// Direction lookup table: DIRTAB[1+dy][1+dx] gives direction index
const DIRTAB: [[i32; 3]; 3] = [[1, 2, 3], [0, -1, 4], [7, 6, 5]];

/// A point on a border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderPoint {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl BorderPoint {
    /// Create a new border point
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move in the given direction
    #[inline]
    pub fn moved(self, dir: Direction) -> Self {
        Self {
            x: self.x + dir.dx(),
            y: self.y + dir.dy(),
        }
    }
}

impl From<(u32, u32)> for BorderPoint {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x as i32, y as i32)
    }
}

/// The traced outer border of one connected component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Border {
    /// Label of the component (8-connected labeling of the source mask)
    pub label: u32,
    /// Starting point: the component's first pixel in raster order
    pub start: BorderPoint,
    /// All points on the border, in clockwise traversal order
    ///
    /// A pixel is listed once per visit, so pixels on one-pixel-wide
    /// parts of a component appear more than once.
    pub points: Vec<BorderPoint>,
}

impl Border {
    /// Get the number of points in this border
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the border is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get bounding box of this border
    pub fn bounding_box(&self) -> Option<Box> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Box::from_extents(min_x, min_y, max_x, max_y))
    }
}

/// Which borders a contour mask contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContourMode {
    /// Outer borders only
    #[default]
    External,
    /// Outer borders plus the borders of enclosed holes
    All,
}

#[inline]
fn is_foreground(mask: &BinaryMask, p: BorderPoint) -> bool {
    mask.get_pixel_or_background(p.x, p.y) != 0
}

/// One Moore step: from `p`, whose background neighbor lies in direction
/// `back`, find the next border pixel clockwise and the direction from it
/// to the last background pixel examined.
fn next_border_pixel(
    mask: &BinaryMask,
    p: BorderPoint,
    back: Direction,
) -> Option<(BorderPoint, Direction)> {
    for step in 1..=8 {
        let dir = back.clockwise(step);
        let next = p.moved(dir);
        if is_foreground(mask, next) {
            let last_bg = p.moved(dir.clockwise(7));
            let next_back = Direction::from_offset(last_bg.x - next.x, last_bg.y - next.y)?;
            return Some((next, next_back));
        }
    }
    None
}

/// Trace the outer border of the component whose first raster pixel is
/// `start`.
fn trace_outer_border(mask: &BinaryMask, start: BorderPoint) -> Vec<BorderPoint> {
    let mut points = vec![start];

    // Nothing lies before the first raster pixel, so its West neighbor is
    // background.
    let Some((second, mut back)) = next_border_pixel(mask, start, Direction::West) else {
        return points;
    };

    // Stop on re-entering the start pixel in the way the trace began
    let mut current = second;
    while let Some((next, next_back)) = next_border_pixel(mask, current, back) {
        if current == start && next == second {
            break;
        }
        points.push(current);
        current = next;
        back = next_back;
    }
    points
}

/// Get outer borders for all 8-connected components
///
/// Returns one border per component, ordered by the raster position of the
/// component's first pixel.
pub fn get_outer_borders(mask: &BinaryMask) -> RegionResult<Vec<Border>> {
    let labeled = label_connected_components(mask, ConnectivityType::EightWay)?;
    let n = labeled.max_label() as usize;
    let w = mask.width() as usize;

    // Labels are numbered in raster order of their first pixel
    let mut starts = Vec::with_capacity(n);
    for (idx, &label) in labeled.data().iter().enumerate() {
        if label as usize == starts.len() + 1 {
            starts.push(BorderPoint::new((idx % w) as i32, (idx / w) as i32));
        }
    }

    let borders: Vec<Border> = starts
        .into_iter()
        .enumerate()
        .map(|(i, start)| Border {
            label: i as u32 + 1,
            start,
            points: trace_outer_border(mask, start),
        })
        .collect();

    debug!(
        borders = borders.len(),
        points = borders.iter().map(Border::len).sum::<usize>(),
        "traced outer borders"
    );
    Ok(borders)
}

/// Concatenated outer border points of every component
pub fn contour_points(mask: &BinaryMask) -> RegionResult<Vec<BorderPoint>> {
    Ok(get_outer_borders(mask)?
        .into_iter()
        .flat_map(|b| b.points)
        .collect())
}

/// Union of the outer borders of every 8-connected component
///
/// # Examples
///
/// ```
/// use skelprune_core::BinaryMask;
/// use skelprune_region::contour_mask;
///
/// let mut region = BinaryMask::new(5, 5).unwrap();
/// for y in 1..4 {
///     for x in 1..4 {
///         region.set_pixel(x, y, 1).unwrap();
///     }
/// }
/// let contour = contour_mask(&region).unwrap();
/// assert_eq!(contour.count_foreground(), 8);
/// assert_eq!(contour.get_pixel(2, 2), Some(0));
/// ```
pub fn contour_mask(mask: &BinaryMask) -> RegionResult<BinaryMask> {
    contour_mask_with(mask, ContourMode::External)
}

/// Contour mask with the given set of borders
pub fn contour_mask_with(mask: &BinaryMask, mode: ContourMode) -> RegionResult<BinaryMask> {
    let mut out = mask.create_template();
    for p in contour_points(mask)? {
        out.set_pixel_unchecked(p.x as u32, p.y as u32, 1);
    }

    if mode == ContourMode::All {
        let holes = enclosed_background(mask)?;
        if !holes.is_empty() {
            let hole_borders = dilate_brick(&holes, 3, 3)?.and(mask)?;
            out = out.or(&hole_borders)?;
        }
    }
    Ok(out)
}

/// Background pixels whose 4-connected background region does not reach
/// the image edge.
fn enclosed_background(mask: &BinaryMask) -> RegionResult<BinaryMask> {
    let labeled = label_connected_components(&mask.invert(), ConnectivityType::FourWay)?;
    let (w, h) = labeled.dimensions();

    let mut reaches_edge = vec![false; labeled.max_label() as usize + 1];
    for x in 0..w {
        for y in [0, h - 1] {
            if let Some(label) = labeled.get_label(x, y) {
                reaches_edge[label as usize] = true;
            }
        }
    }
    for y in 0..h {
        for x in [0, w - 1] {
            if let Some(label) = labeled.get_label(x, y) {
                reaches_edge[label as usize] = true;
            }
        }
    }

    Ok(labeled.mask_where(|label| label != 0 && !reaches_edge[label as usize]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(rows: &[&str]) -> BinaryMask {
        let w = rows[0].len() as u32;
        let data = rows
            .iter()
            .flat_map(|r| r.bytes().map(|b| (b == b'x') as u8))
            .collect();
        BinaryMask::from_vec(w, rows.len() as u32, data).unwrap()
    }

    fn pts(list: &[(i32, i32)]) -> Vec<BorderPoint> {
        list.iter().map(|&(x, y)| BorderPoint::new(x, y)).collect()
    }

    #[test]
    fn test_direction_tables() {
        assert_eq!(Direction::from_offset(0, -1), Some(Direction::North));
        assert_eq!(Direction::from_offset(0, 0), None);
        assert_eq!(Direction::from_offset(2, 0), None);
        assert_eq!(Direction::SouthWest.clockwise(1), Direction::West);
        assert_eq!(Direction::West.clockwise(7), Direction::SouthWest);
        for i in 0..8 {
            let d = Direction::from_index(i);
            assert_eq!(Direction::from_offset(d.dx(), d.dy()), Some(d));
        }
    }

    #[test]
    fn test_square_traced_clockwise() {
        let m = mask(&["....", ".xx.", ".xx.", "...."]);
        let borders = get_outer_borders(&m).unwrap();
        assert_eq!(borders.len(), 1);
        assert_eq!(borders[0].points, pts(&[(1, 1), (2, 1), (2, 2), (1, 2)]));
    }

    #[test]
    fn test_isolated_pixel() {
        let m = mask(&["...", ".x.", "..."]);
        let borders = get_outer_borders(&m).unwrap();
        assert_eq!(borders[0].points, pts(&[(1, 1)]));
        assert_eq!(borders[0].bounding_box(), Some(Box::new_unchecked(1, 1, 1, 1)));
    }

    #[test]
    fn test_line_visits_inner_pixels_twice() {
        let m = mask(&[".....", ".xxx.", "....."]);
        let borders = get_outer_borders(&m).unwrap();
        assert_eq!(borders[0].points, pts(&[(1, 1), (2, 1), (3, 1), (2, 1)]));
    }

    #[test]
    fn test_component_at_image_edge() {
        let m = mask(&["xxx", "xxx", "xxx"]);
        let contour = contour_mask(&m).unwrap();
        assert_eq!(contour.count_foreground(), 8);
        assert_eq!(contour.get_pixel(1, 1), Some(0));
    }

    #[test]
    fn test_island_in_hole_traced() {
        let m = mask(&[
            "xxxxxxx", "x.....x", "x.....x", "x..x..x", "x.....x", "x.....x", "xxxxxxx",
        ]);
        let borders = get_outer_borders(&m).unwrap();
        assert_eq!(borders.len(), 2);
        assert_eq!(borders[1].points, pts(&[(3, 3)]));
        assert_eq!(contour_mask(&m).unwrap().get_pixel(3, 3), Some(1));
    }

    #[test]
    fn test_hole_excluded_from_external() {
        let m = mask(&["xxxxx", "xxxxx", "xx.xx", "xxxxx", "xxxxx"]);
        let external = contour_mask(&m).unwrap();
        assert_eq!(external.count_foreground(), 16);
        assert_eq!(external.get_pixel(2, 1), Some(0));

        let all = contour_mask_with(&m, ContourMode::All).unwrap();
        // Ring of 8 around the hole
        assert_eq!(all.count_foreground(), 24);
        assert_eq!(all.get_pixel(2, 1), Some(1));
        assert_eq!(all.get_pixel(2, 2), Some(0));
    }

    #[test]
    fn test_open_notch_is_not_a_hole() {
        let m = mask(&["xx.xx", "xx.xx", "xxxxx"]);
        let all = contour_mask_with(&m, ContourMode::All).unwrap();
        assert_eq!(all, contour_mask(&m).unwrap());
    }

    #[test]
    fn test_components_in_raster_order() {
        let m = mask(&["..x..", ".....", "x...x"]);
        let borders = get_outer_borders(&m).unwrap();
        let starts: Vec<_> = borders.iter().map(|b| (b.label, b.start)).collect();
        assert_eq!(
            starts,
            vec![
                (1, BorderPoint::new(2, 0)),
                (2, BorderPoint::new(0, 2)),
                (3, BorderPoint::new(4, 2)),
            ]
        );
        assert_eq!(contour_points(&m).unwrap().len(), 3);
    }
}
