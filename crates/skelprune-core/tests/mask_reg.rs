//! Binary mask regression test
//!
//! Tests border zeroing, caller encodings and the set operations.
//!
//! Run with:
//! ```
//! cargo test -p skelprune-core --test mask_reg
//! ```

use skelprune_core::{BinaryMask, Error, zero_border};
use skelprune_test::{MaskRng, RegParams};

#[test]
fn border_reg() {
    let mut rp = RegParams::new("border");
    let mut rng = MaskRng::new(11);

    for (w, h) in [(2, 2), (2, 9), (9, 2), (17, 13)] {
        let mask = rng.random_mask(w, h, 0.7);
        let zeroed = zero_border(mask.clone()).unwrap();
        rp.check(zeroed.border_is_clear(), "border ring is clear");

        let interior_same = (1..h - 1).all(|y| {
            (1..w - 1).all(|x| zeroed.get_pixel(x, y) == mask.get_pixel(x, y))
        });
        rp.check(interior_same, "interior unchanged");
        rp.check(zeroed.is_subset_of(&mask).unwrap(), "only clears pixels");
    }

    // Too small: error, mask untouched
    for (w, h) in [(1, 1), (1, 5), (5, 1)] {
        let mut mask = BinaryMask::from_vec(w, h, vec![1; (w * h) as usize]).unwrap();
        let before = mask.clone();
        let result = mask.zero_border();
        rp.check(matches!(result, Err(Error::InvalidParameter(_))), "too small");
        rp.compare_masks(&before, &mask);
    }

    assert!(rp.cleanup(), "border regression test failed");
}

#[test]
fn mask_ops_reg() {
    let mut rp = RegParams::new("mask_ops");
    let mut rng = MaskRng::new(12);
    let a = rng.random_mask(31, 23, 0.4);
    let b = rng.random_mask(31, 23, 0.5);

    // De Morgan and set identities
    let and = a.and(&b).unwrap();
    let or = a.or(&b).unwrap();
    rp.compare_masks(&and.invert(), &a.invert().or(&b.invert()).unwrap());
    rp.compare_masks(&or.invert(), &a.invert().and(&b.invert()).unwrap());
    rp.compare_masks(&a.subtract(&b).unwrap(), &a.and(&b.invert()).unwrap());
    rp.compare_masks(&a.xor(&b).unwrap(), &or.subtract(&and).unwrap());
    rp.compare_values(
        and.count_foreground() as f64,
        a.count_intersection(&b).unwrap() as f64,
        0.0,
    );
    rp.check(and.is_subset_of(&or).unwrap(), "and within or");

    let other = BinaryMask::new(30, 23).unwrap();
    rp.check(
        matches!(a.and(&other), Err(Error::DimensionMismatch { .. })),
        "size mismatch",
    );

    // Caller encodings
    let raw = a.to_scaled(255);
    rp.check(raw.iter().all(|&v| v == 0 || v == 255), "scaled to 0/255");
    rp.compare_masks(&a, &BinaryMask::from_nonzero(31, 23, &raw).unwrap());
    rp.compare_masks(&a, &BinaryMask::from_threshold(31, 23, &raw, 127).unwrap());

    assert!(rp.cleanup(), "mask_ops regression test failed");
}
