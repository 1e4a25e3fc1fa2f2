//! Connected component regression test
//!
//! Checks union-find labeling against a breadth-first flood fill on
//! seeded random masks, plus the fixed scenarios.
//!
//! Run with:
//! ```
//! cargo test -p skelprune-region --test conncomp_reg
//! ```

use skelprune_core::{BinaryMask, LabelImage};
use skelprune_region::{
    ConnectivityType, count_components, find_connected_components, get_component_sizes,
    label_connected_components,
};
use skelprune_test::{MaskRng, RegParams, mask_from_ascii};
use std::collections::VecDeque;

/// Flood-fill labeling, one BFS per unlabeled foreground pixel.
fn bfs_labels(mask: &BinaryMask, connectivity: ConnectivityType) -> LabelImage {
    let (w, h) = mask.dimensions();
    let offsets: &[(i32, i32)] = match connectivity {
        ConnectivityType::FourWay => &[(-1, 0), (1, 0), (0, -1), (0, 1)],
        ConnectivityType::EightWay => &[
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ],
    };
    let mut labels = LabelImage::new(w, h).unwrap();
    let mut next = 0;
    for (x, y) in mask.foreground_pixels() {
        if labels.get_label(x, y) != Some(0) {
            continue;
        }
        next += 1;
        let mut queue = VecDeque::from([(x, y)]);
        labels.data_mut()[(y * w + x) as usize] = next;
        while let Some((cx, cy)) = queue.pop_front() {
            for &(dx, dy) in offsets {
                let (nx, ny) = (cx as i32 + dx, cy as i32 + dy);
                if mask.get_pixel_or_background(nx, ny) == 0 {
                    continue;
                }
                let idx = (ny as u32 * w + nx as u32) as usize;
                if labels.data()[idx] == 0 {
                    labels.data_mut()[idx] = next;
                    queue.push_back((nx as u32, ny as u32));
                }
            }
        }
    }
    labels
}

#[test]
fn conncomp_reg() {
    let mut rp = RegParams::new("conncomp");

    // -----------------------------------------------------------
    // Random masks against the flood-fill reference
    // -----------------------------------------------------------
    let mut rng = MaskRng::new(0x5eed);
    for (i, density) in [0.2, 0.45, 0.6, 0.8].into_iter().enumerate() {
        let mask = rng.random_mask(61 + i as u32, 47, density);
        for connectivity in [ConnectivityType::FourWay, ConnectivityType::EightWay] {
            let labels = label_connected_components(&mask, connectivity).unwrap();
            let reference = bfs_labels(&mask, connectivity);
            rp.compare_label_partitions(&reference, &labels);
            rp.compare_values(
                reference.max_label() as f64,
                labels.max_label() as f64,
                0.0,
            );
            // Flood fill also numbers components by first raster pixel
            rp.check(labels == reference, "labels in raster order");
        }
    }

    // -----------------------------------------------------------
    // 8-connectivity never finds more components than 4
    // -----------------------------------------------------------
    for _ in 0..5 {
        let mask = rng.random_mask(40, 40, 0.5);
        let n4 = count_components(&mask, ConnectivityType::FourWay).unwrap();
        let n8 = count_components(&mask, ConnectivityType::EightWay).unwrap();
        rp.check(n8 <= n4, "8-cc count <= 4-cc count");
    }

    // -----------------------------------------------------------
    // Two disjoint 4-pixel segments
    // -----------------------------------------------------------
    let segments = mask_from_ascii(
        "
        ..........
        .xxxx.....
        ..........
        .....x....
        ......x...
        .......x..
        ........x.
        ",
    )
    .unwrap();
    let labels = label_connected_components(&segments, ConnectivityType::EightWay).unwrap();
    let sizes = get_component_sizes(&labels);
    rp.compare_values(2.0, sizes.len() as f64, 0.0);
    for &size in sizes.values() {
        rp.compare_values(4.0, size as f64, 0.0);
    }
    rp.compare_masks(&segments, &labels.to_mask());

    // -----------------------------------------------------------
    // Component statistics agree with the label image
    // -----------------------------------------------------------
    let mask = rng.random_mask(50, 30, 0.3);
    let comps = find_connected_components(&mask, ConnectivityType::EightWay).unwrap();
    let labels = label_connected_components(&mask, ConnectivityType::EightWay).unwrap();
    let sizes = get_component_sizes(&labels);
    rp.compare_values(sizes.len() as f64, comps.len() as f64, 0.0);
    let total: usize = comps.iter().map(|c| c.pixel_count).sum();
    rp.compare_values(mask.count_foreground() as f64, total as f64, 0.0);
    for comp in &comps {
        rp.compare_values(sizes[&comp.label] as f64, comp.pixel_count as f64, 0.0);
        let inside = labels
            .data()
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == comp.label)
            .all(|(idx, _)| {
                let (x, y) = ((idx % 50) as i32, (idx / 50) as i32);
                comp.bounds.contains_point(x, y)
            });
        rp.check(inside, "component pixels inside bounds");
    }

    assert!(rp.cleanup(), "conncomp regression test failed");
}
