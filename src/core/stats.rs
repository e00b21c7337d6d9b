//! Min/max statistics over converted point sets.

use super::transforms::Point;

/// Closed interval covering a single component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    fn fold(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}

/// Component-wise bounds of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudStats {
    pub x: Bounds,
    pub y: Bounds,
    pub z: Bounds,
    pub r: Bounds,
}

/// Compute min/max bounds over x, y, z and r.
///
/// Returns `None` for an empty slice; the caller is expected to have
/// halted the run before reporting on zero points.
pub fn bounds_of(points: &[Point]) -> Option<CloudStats> {
    let first = points.first()?;

    let seed = |v: f64| Bounds { min: v, max: v };
    let mut stats = CloudStats {
        x: seed(first.x),
        y: seed(first.y),
        z: seed(first.z),
        r: seed(first.r),
    };

    for p in &points[1..] {
        stats.x = stats.x.fold(p.x);
        stats.y = stats.y.fold(p.y);
        stats.z = stats.z.fold(p.z);
        stats.r = stats.r.fold(p.r);
    }

    Some(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64, z: f64, r: f64) -> Point {
        Point {
            x,
            y,
            z,
            r,
            phi: 0.0,
            theta: 0.0,
        }
    }

    #[test]
    fn test_bounds_empty() {
        assert!(bounds_of(&[]).is_none());
    }

    #[test]
    fn test_bounds_single_point() {
        let stats = bounds_of(&[point(1.0, -2.0, 3.0, 4.0)]).unwrap();

        assert_eq!(stats.x, Bounds { min: 1.0, max: 1.0 });
        assert_eq!(stats.y, Bounds { min: -2.0, max: -2.0 });
        assert_eq!(stats.z, Bounds { min: 3.0, max: 3.0 });
        assert_eq!(stats.r, Bounds { min: 4.0, max: 4.0 });
    }

    #[test]
    fn test_bounds_multiple_points() {
        let points = [
            point(1.0, 5.0, -3.0, 1.0),
            point(-2.0, 0.5, 7.0, 2.0),
            point(0.0, -4.0, 0.0, 0.5),
        ];

        let stats = bounds_of(&points).unwrap();

        assert_eq!(stats.x, Bounds { min: -2.0, max: 1.0 });
        assert_eq!(stats.y, Bounds { min: -4.0, max: 5.0 });
        assert_eq!(stats.z, Bounds { min: -3.0, max: 7.0 });
        assert_eq!(stats.r, Bounds { min: 0.5, max: 2.0 });
    }
}
