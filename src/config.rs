use std::{error::Error, fmt::Display};

use crate::CoordNum;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error returned when a [TriangulationConfig] cannot be used to create a triangulation.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
pub enum ConfigError {
    /// The bounding triangle's size was zero or negative.
    NonPositiveBoundary,
    /// The on-edge tolerance was negative.
    NegativeEpsilon,
    /// A configuration value was NaN or infinite.
    NAN,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Debug>::fmt(self, f)
    }
}

impl Error for ConfigError {}

/// Parameters of a [DelaunayTriangulation](crate::DelaunayTriangulation).
///
/// # Example
///
/// ```
/// use quad_delaunay::{DelaunayTriangulation, TriangulationConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = TriangulationConfig::default()
///     .boundary_size(500.0)
///     .epsilon(1.0e-6);
/// let mut triangulation: DelaunayTriangulation<f64> = DelaunayTriangulation::with_config(config)?;
/// triangulation.insert((10.0, 20.0).into())?;
/// assert_eq!(triangulation.num_sites(), 1);
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct TriangulationConfig<S> {
    boundary_size: S,
    epsilon: S,
}

impl<S: CoordNum> Default for TriangulationConfig<S> {
    fn default() -> Self {
        TriangulationConfig {
            boundary_size: 10000.0f32.into(),
            epsilon: 0.001f32.into(),
        }
    }
}

impl<S: CoordNum> TriangulationConfig<S> {
    /// Sets the size `B` of the bounding triangle.
    ///
    /// The bounding triangle has its corners at `(0, -B)`, `(B, B)` and `(-B, B)`. Only
    /// sites strictly inside this triangle can be inserted. Defaults to `10000`.
    pub fn boundary_size(mut self, boundary_size: S) -> Self {
        self.boundary_size = boundary_size;
        self
    }

    /// Sets the tolerance used to decide if a point lies on an edge.
    ///
    /// The tolerance is compared against the difference of the point's parameters along
    /// the edge's x and y axis. Defaults to `0.001`.
    ///
    /// The resulting distance tolerance grows with the edge's extent: for the default
    /// bounding triangle and epsilon, points up to roughly 10 units away from an edge
    /// towards a bounding vertex count as lying on it. Such a point can lie outside of
    /// both triangles adjacent to the edge, inserting it corrupts the triangulation. See
    /// the *Precision* section of [DelaunayTriangulation](crate::DelaunayTriangulation).
    pub fn epsilon(mut self, epsilon: S) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns the size of the bounding triangle.
    pub fn get_boundary_size(&self) -> S {
        self.boundary_size
    }

    /// Returns the on-edge tolerance.
    pub fn get_epsilon(&self) -> S {
        self.epsilon
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.boundary_size.is_finite() || !self.epsilon.is_finite() {
            return Err(ConfigError::NAN);
        }
        if self.boundary_size <= S::zero() {
            return Err(ConfigError::NonPositiveBoundary);
        }
        if self.epsilon < S::zero() {
            return Err(ConfigError::NegativeEpsilon);
        }
        Ok(())
    }
}
