//! Pipeline configuration

use crate::error::{Error, Result};
use skelprune_morph::{DEFAULT_BAND_KERNEL_SIZE, EvenKernelPolicy};
use skelprune_region::{ArcPruneOptions, DEFAULT_ARC_MARGIN, DEFAULT_REDUNDANT_THRESHOLD};

/// Options for one pipeline run
///
/// # Examples
///
/// ```
/// use skelprune::PruneConfig;
/// use skelprune::morph::EvenKernelPolicy;
///
/// let config = PruneConfig::default()
///     .with_dilate_kernel_size(7)
///     .with_edge_redundant_threshold(30)
///     .with_even_kernel(EvenKernelPolicy::Reject);
/// assert!(config.validate().is_ok());
/// assert!(config.with_dilate_kernel_size(8).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PruneConfig {
    /// Side of the square element that turns the contour into the band
    pub dilate_kernel_size: u32,
    /// Band-touching bridge components with fewer pixels are removed
    pub edge_redundant_threshold: usize,
    /// Treatment of an even `dilate_kernel_size`
    pub even_kernel: EvenKernelPolicy,
    /// Close the region mask with a k x k brick before contour extraction
    pub region_closing: Option<u32>,
    /// Run inscribed-arc pruning with this angle threshold (degrees)
    pub arc_angle_threshold: Option<f32>,
    /// Search margin of inscribed-arc pruning
    pub arc_margin: u32,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            dilate_kernel_size: DEFAULT_BAND_KERNEL_SIZE,
            edge_redundant_threshold: DEFAULT_REDUNDANT_THRESHOLD,
            even_kernel: EvenKernelPolicy::Accept,
            region_closing: None,
            arc_angle_threshold: None,
            arc_margin: DEFAULT_ARC_MARGIN,
        }
    }
}

impl PruneConfig {
    /// Set the band kernel size
    pub fn with_dilate_kernel_size(mut self, size: u32) -> Self {
        self.dilate_kernel_size = size;
        self
    }

    /// Set the redundant component threshold
    pub fn with_edge_redundant_threshold(mut self, threshold: usize) -> Self {
        self.edge_redundant_threshold = threshold;
        self
    }

    /// Set the even kernel policy
    pub fn with_even_kernel(mut self, policy: EvenKernelPolicy) -> Self {
        self.even_kernel = policy;
        self
    }

    /// Close the region before contour extraction
    pub fn with_region_closing(mut self, kernel_size: u32) -> Self {
        self.region_closing = Some(kernel_size);
        self
    }

    /// Enable inscribed-arc pruning
    pub fn with_arc_angle_threshold(mut self, degrees: f32) -> Self {
        self.arc_angle_threshold = Some(degrees);
        self
    }

    /// Set the inscribed-arc search margin
    pub fn with_arc_margin(mut self, margin: u32) -> Self {
        self.arc_margin = margin;
        self
    }

    /// Inscribed-arc options, or `None` when the stage is off
    pub fn arc_options(&self) -> Option<ArcPruneOptions> {
        let options = ArcPruneOptions::new(self.arc_angle_threshold?).with_margin(self.arc_margin);
        options.is_enabled().then_some(options)
    }

    /// Check every option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a zero band kernel, an even band
    /// kernel under [`EvenKernelPolicy::Reject`], a zero closing kernel, or
    /// a NaN arc threshold.
    pub fn validate(&self) -> Result<()> {
        let k = self.dilate_kernel_size;
        if k == 0 {
            return Err(Error::InvalidConfig("dilate_kernel_size must be at least 1".to_string()));
        }
        if k % 2 == 0 && self.even_kernel == EvenKernelPolicy::Reject {
            return Err(Error::InvalidConfig(format!(
                "dilate_kernel_size must be odd, got {}",
                k
            )));
        }
        if self.region_closing == Some(0) {
            return Err(Error::InvalidConfig(
                "region_closing kernel must be at least 1".to_string(),
            ));
        }
        if self.arc_angle_threshold.is_some_and(f32::is_nan) {
            return Err(Error::InvalidConfig("arc_angle_threshold is NaN".to_string()));
        }
        Ok(())
    }
}
