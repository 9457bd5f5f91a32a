//! Axis-tagged coordinates for laying out path instructions
//!
//! An [`Extent`] remembers whether it measures along the horizontal or the
//! vertical axis, so an x coordinate can't silently be added to a height.
//! Extents convert into `f64`, which means they can be passed straight to
//! the path instruction constructors.

use std::fmt;

use crate::error::{Result, SvgError};

/// Direction an [`Extent`] measures along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// A magnitude along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    axis: Axis,
    n: f64,
}

impl Extent {
    pub fn horizontal(n: impl Into<f64>) -> Self {
        Self {
            axis: Axis::Horizontal,
            n: n.into(),
        }
    }

    pub fn vertical(n: impl Into<f64>) -> Self {
        Self {
            axis: Axis::Vertical,
            n: n.into(),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn value(&self) -> f64 {
        self.n
    }

    fn guard_axis(&self, other: &Extent) -> Result<()> {
        if self.axis != other.axis {
            return Err(SvgError::AxisMismatch {
                expected: self.axis,
                found: other.axis,
            });
        }
        Ok(())
    }

    fn with_value(self, n: f64) -> Self {
        Self { axis: self.axis, n }
    }

    /// Add an extent along the same axis
    pub fn try_add(self, other: Extent) -> Result<Self> {
        self.guard_axis(&other)?;
        Ok(self.with_value(self.n + other.n))
    }

    /// Subtract an extent along the same axis
    pub fn try_sub(self, other: Extent) -> Result<Self> {
        self.guard_axis(&other)?;
        Ok(self.with_value(self.n - other.n))
    }

    pub fn scale(self, factor: f64) -> Self {
        self.with_value(self.n * factor)
    }

    pub fn divide(self, divisor: f64) -> Self {
        self.with_value(self.n / divisor)
    }
}

impl From<Extent> for f64 {
    fn from(e: Extent) -> f64 {
        e.n
    }
}

/// A rectangle given by its left and top edges, width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub l: Extent,
    pub t: Extent,
    pub w: Extent,
    pub h: Extent,
}

impl BoundingBox {
    pub fn new(
        l: impl Into<f64>,
        t: impl Into<f64>,
        w: impl Into<f64>,
        h: impl Into<f64>,
    ) -> Self {
        Self {
            l: Extent::horizontal(l),
            t: Extent::vertical(t),
            w: Extent::horizontal(w),
            h: Extent::vertical(h),
        }
    }

    /// Right edge
    pub fn right(&self) -> Extent {
        self.hf(1.0)
    }

    /// Bottom edge
    pub fn bottom(&self) -> Extent {
        self.vf(1.0)
    }

    /// Horizontal midpoint
    pub fn hm(&self) -> Extent {
        self.hf(0.5)
    }

    /// Vertical midpoint
    pub fn vm(&self) -> Extent {
        self.vf(0.5)
    }

    /// Horizontal coordinate as a percentage of the box width
    pub fn hpc(&self, percentage: f64) -> Extent {
        self.hf(percentage / 100.0)
    }

    /// Vertical coordinate as a percentage of the box height
    pub fn vpc(&self, percentage: f64) -> Extent {
        self.vf(percentage / 100.0)
    }

    /// Horizontal coordinate as a fraction of the box width
    pub fn hf(&self, fraction: f64) -> Extent {
        self.l.with_value(self.l.n + self.w.n * fraction)
    }

    /// Vertical coordinate as a fraction of the box height
    pub fn vf(&self, fraction: f64) -> Extent {
        self.t.with_value(self.t.n + self.h.n * fraction)
    }
}
