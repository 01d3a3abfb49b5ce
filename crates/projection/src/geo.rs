//! Geographic and planar value types shared by every projection.

use nalgebra::Vector3;

/// A point on the globe, in radians.
///
/// Longitude is conventionally in [-π, π] and latitude in [-π/2, π/2].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const ORIGIN: GeoPoint = GeoPoint { lon: 0.0, lat: 0.0 };

    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Build a point, rejecting non-finite coordinates.
    ///
    /// Inversion formulas evaluated outside their domain (e.g. `asin` of a
    /// value past ±1 in a corner of the bounding rectangle) yield NaN; such
    /// plane points have no counterpart on the globe.
    #[inline]
    pub fn checked(lon: f64, lat: f64) -> Option<Self> {
        if lon.is_finite() && lat.is_finite() {
            Some(Self { lon, lat })
        } else {
            None
        }
    }

    /// Convert a direction in globe-centered space to longitude/latitude.
    ///
    /// The x axis pierces (0, 0), the y axis (π/2, 0) and z the north pole.
    #[inline]
    pub fn from_direction(dir: &Vector3<f64>) -> Option<Self> {
        let horizontal = (dir.x * dir.x + dir.y * dir.y).sqrt();
        Self::checked(dir.y.atan2(dir.x), dir.z.atan2(horizontal))
    }
}

/// A point in a projection's output plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle enclosing everything a projection draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Rectangle spanning `[-half_width, half_width] × [-half_height, half_height]`.
    pub fn symmetric(half_width: f64, half_height: f64) -> Self {
        Self::new(-half_width, half_width, -half_height, half_height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Height divided by width.
    pub fn aspect_ratio(&self) -> f64 {
        self.height() / self.width()
    }

    pub fn center(&self) -> PlanePoint {
        PlanePoint::new(
            self.x_min + self.width() / 2.0,
            self.y_min + self.height() / 2.0,
        )
    }
}

/// Gudermannian function: latitude reached by Mercator ordinate `x`.
#[inline]
pub fn gudermannian(x: f64) -> f64 {
    x.tanh().asin()
}

/// Inverse Gudermannian: Mercator ordinate of latitude `x`.
#[inline]
pub fn inverse_gudermannian(x: f64) -> f64 {
    x.sin().atanh()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_checked_rejects_nan() {
        assert!(GeoPoint::checked(f64::NAN, 0.0).is_none());
        assert!(GeoPoint::checked(0.0, f64::NAN).is_none());
        assert!(GeoPoint::checked(f64::INFINITY, 0.0).is_none());
        assert_eq!(GeoPoint::checked(1.0, -0.5), Some(GeoPoint::new(1.0, -0.5)));
    }

    #[test]
    fn test_direction_axes() {
        let p = GeoPoint::from_direction(&Vector3::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(p, GeoPoint::ORIGIN);

        let p = GeoPoint::from_direction(&Vector3::new(0.0, 1.0, 0.0)).unwrap();
        assert!((p.lon - FRAC_PI_2).abs() < 1e-12);
        assert!(p.lat.abs() < 1e-12);

        let p = GeoPoint::from_direction(&Vector3::new(0.0, 0.0, 1.0)).unwrap();
        assert!((p.lat - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_gudermannian_roundtrip() {
        for deg in [-85.0_f64, -45.0, 0.0, 30.0, 80.0] {
            let lat = deg.to_radians();
            let back = gudermannian(inverse_gudermannian(lat));
            assert!((back - lat).abs() < 1e-12, "{} -> {}", lat, back);
        }
    }

    #[test]
    fn test_bounds_geometry() {
        let b = Bounds::symmetric(PI, FRAC_PI_2);
        assert!((b.width() - 2.0 * PI).abs() < 1e-15);
        assert!((b.height() - PI).abs() < 1e-15);
        assert!((b.aspect_ratio() - 0.5).abs() < 1e-15);
        assert_eq!(b.center(), PlanePoint::new(0.0, 0.0));
    }
}
