/// Near-zero threshold for direction and angle comparisons.
pub const DIRECTION_EPS: f64 = 1e-6;

/// Threshold for squared distances between points considered coincident.
pub const COINCIDENCE_EPS: f64 = 1e-12;

/// Thresholds used by the tolerance-sensitive line queries.
///
/// ```
/// use nd_geometry::Tolerance;
///
/// let loose = Tolerance::default().direction(1e-4).coincidence(1e-8);
/// assert_eq!(loose.direction, 1e-4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub direction: f64,
    pub coincidence: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            direction: DIRECTION_EPS,
            coincidence: COINCIDENCE_EPS,
        }
    }
}

impl Tolerance {
    pub fn direction(mut self, direction: f64) -> Self {
        self.direction = direction;
        self
    }

    pub fn coincidence(mut self, coincidence: f64) -> Self {
        self.coincidence = coincidence;
        self
    }

    pub(crate) fn is_near_zero(&self, value: f64) -> bool {
        value.abs() < self.direction
    }

    pub(crate) fn is_coincident(&self, square_distance: f64) -> bool {
        square_distance < self.coincidence
    }
}
