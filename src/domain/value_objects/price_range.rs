//! Price range value object
//!
//! Inclusive bounds in minor currency units. Either bound may be open.

use crate::error::{SiftError, SiftResult};

/// Inclusive price range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PriceRange {
    min: Option<u32>,
    max: Option<u32>,
}

impl PriceRange {
    /// Create a range, rejecting `min > max`
    pub fn new(min: Option<u32>, max: Option<u32>) -> SiftResult<Self> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(SiftError::InvalidPriceRange { min: lo, max: hi });
            }
        }
        Ok(Self { min, max })
    }

    /// Range with no bounds (every priced item matches)
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn min(&self) -> Option<u32> {
        self.min
    }

    pub fn max(&self) -> Option<u32> {
        self.max
    }

    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check whether `price` falls inside the range
    pub fn contains(&self, price: u32) -> bool {
        self.min.map_or(true, |lo| price >= lo) && self.max.map_or(true, |hi| price <= hi)
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (Some(lo), Some(hi)) => write!(f, "{lo}..={hi}"),
            (Some(lo), None) => write!(f, "{lo}.."),
            (None, Some(hi)) => write!(f, "..={hi}"),
            (None, None) => write!(f, ".."),
        }
    }
}
