//! skelprune-test - Regression test framework for skelprune
//!
//! Regression tests build small masks from ASCII drawings or from a
//! seeded generator, run an operation, and record every comparison in a
//! [`RegParams`]. Nothing is written to disk; a run either reports
//! SUCCESS or lists the failed comparisons.
//!
//! # Usage
//!
//! ```
//! use skelprune_test::{RegParams, mask_from_ascii};
//!
//! let mask = mask_from_ascii(
//!     "
//!     .....
//!     .xxx.
//!     .....
//!     ",
//! )
//! .unwrap();
//!
//! let mut rp = RegParams::new("usage");
//! rp.compare_values(3.0, mask.count_foreground() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print every compared mask

mod error;
mod fixtures;
mod params;
mod rng;

pub use error::{TestError, TestResult};
pub use fixtures::{mask_from_ascii, mask_to_ascii};
pub use params::{RegParams, RegTestMode};
pub use rng::MaskRng;
