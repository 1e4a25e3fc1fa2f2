//! Seeded generator for reproducible random masks

use rand::prelude::*;
use skelprune_core::BinaryMask;

/// Random mask generator over a seeded [`StdRng`]
///
/// The stream depends only on the seed, so every run of a regression test
/// sees the same inputs.
#[derive(Debug)]
pub struct MaskRng {
    rng: StdRng,
}

impl MaskRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Mask whose pixels are foreground with probability `density`
    /// (clamped to `[0, 1]`).
    ///
    /// # Panics
    ///
    /// Panics if a dimension is 0.
    pub fn random_mask(&mut self, width: u32, height: u32, density: f64) -> BinaryMask {
        let density = density.clamp(0.0, 1.0);
        let data = (0..(width as usize) * (height as usize))
            .map(|_| self.rng.random_bool(density) as u8)
            .collect();
        BinaryMask::from_vec(width, height, data).expect("positive dimensions")
    }

    /// Mask of `count` random walks of `steps` 8-connected moves each.
    ///
    /// Walks look like thin skeleton branches: mostly one pixel wide with
    /// occasional crossings.
    ///
    /// # Panics
    ///
    /// Panics if a dimension is 0.
    pub fn random_walks(&mut self, width: u32, height: u32, count: u32, steps: u32) -> BinaryMask {
        let mut mask = BinaryMask::new(width, height).expect("positive dimensions");
        let (w, h) = (width as i32, height as i32);
        for _ in 0..count {
            let mut x = self.rng.random_range(0..w);
            let mut y = self.rng.random_range(0..h);
            let mut dir = self.rng.random_range(0..8usize);
            for _ in 0..steps {
                mask.set_pixel_unchecked(x as u32, y as u32, 1);
                // Mostly keep heading, sometimes turn by 45 degrees
                match self.rng.random_range(0..6) {
                    0 => dir = (dir + 1) % 8,
                    1 => dir = (dir + 7) % 8,
                    _ => {}
                }
                let (dx, dy) = STEPS[dir];
                x = (x + dx).clamp(0, w - 1);
                y = (y + dy).clamp(0, h - 1);
            }
        }
        mask
    }
}

const STEPS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];
