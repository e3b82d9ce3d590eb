use crate::core::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};

/// A closed coordinate interval narrowed by repeated bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn longitude() -> Self {
        Self {
            min: LONGITUDE_RANGE.0,
            max: LONGITUDE_RANGE.1,
        }
    }

    pub fn latitude() -> Self {
        Self {
            min: LATITUDE_RANGE.0,
            max: LATITUDE_RANGE.1,
        }
    }

    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Half the interval width.
    pub fn error(&self) -> f64 {
        (self.max - self.min) / 2.0
    }

    /// Keeps the upper half when `upper` is set, the lower half otherwise.
    pub fn narrow(&mut self, upper: bool) {
        let mid = self.mid();
        if upper {
            self.min = mid;
        } else {
            self.max = mid;
        }
    }

    /// Narrows towards `value` and returns the emitted bit.
    /// A value exactly on the midpoint goes to the upper half.
    pub fn bisect(&mut self, value: f64) -> bool {
        let upper = value >= self.mid();
        self.narrow(upper);
        upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bisect_midpoint_goes_up() {
        let mut range = Range::longitude();
        assert!(range.bisect(0.0));
        assert_eq!(range, Range { min: 0.0, max: 180.0 });
    }

    #[test]
    fn test_bisect_below_midpoint() {
        let mut range = Range::latitude();
        assert!(!range.bisect(-0.5));
        assert_eq!(range, Range { min: -90.0, max: 0.0 });
        assert_eq!(range.mid(), -45.0);
        assert_eq!(range.error(), 45.0);
    }
}
