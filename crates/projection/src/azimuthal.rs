//! Azimuthal projections and their Aitoff-style stretched variants.
//!
//! A plane point at distance `r` from the origin and bearing `θ` is the point
//! of the globe at angular distance `φ = remap(r)` from (0, 0) along bearing
//! `θ`. Stretched variants (Aitoff, Hammer, orthographic-Aitoff) squeeze the
//! plane horizontally by half before inverting and double the resulting
//! longitude, which spreads a hemisphere over the whole globe.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::Vector3;

use crate::geo::GeoPoint;

/// How plane distance relates to angular distance on the globe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialRemap {
    /// `φ = r` (azimuthal equidistant).
    Equidistant,
    /// `φ = 2·asin(r/2)` (Lambert azimuthal equal-area).
    EqualArea,
    /// Parallel projection of the visible hemisphere; inverted in closed form.
    Orthographic,
}

impl RadialRemap {
    /// Angular distance from the center for plane radius `r`.
    ///
    /// For `Orthographic` this is the plane radius itself, which must stay
    /// within the unit disk.
    #[inline]
    pub fn apply(self, r: f64) -> f64 {
        match self {
            RadialRemap::Equidistant | RadialRemap::Orthographic => r,
            RadialRemap::EqualArea => 2.0 * (r / 2.0).asin(),
        }
    }
}

/// Inversion rule for one azimuthal-family projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Azimuthal {
    pub remap: RadialRemap,
    /// Largest remapped radius still on the map (inclusive).
    pub range: f64,
    /// Halve `x` before inverting and double the longitude afterwards.
    pub stretched: bool,
}

pub const AZIMUTHAL_EQUIDISTANT: Azimuthal = Azimuthal {
    remap: RadialRemap::Equidistant,
    range: PI,
    stretched: false,
};

pub const AITOFF: Azimuthal = Azimuthal {
    remap: RadialRemap::Equidistant,
    range: FRAC_PI_2,
    stretched: true,
};

pub const ORTHOGRAPHIC: Azimuthal = Azimuthal {
    remap: RadialRemap::Orthographic,
    range: 1.0,
    stretched: false,
};

pub const ORTHOGRAPHIC_AITOFF: Azimuthal = Azimuthal {
    remap: RadialRemap::Orthographic,
    range: 1.0,
    stretched: true,
};

pub const LAMBERT_AZIMUTHAL_EQUAL_AREA: Azimuthal = Azimuthal {
    remap: RadialRemap::EqualArea,
    range: PI,
    stretched: false,
};

pub const HAMMER: Azimuthal = Azimuthal {
    remap: RadialRemap::EqualArea,
    range: FRAC_PI_2,
    stretched: true,
};

impl Azimuthal {
    /// Map a plane point back to the globe, or `None` if it lies outside the map.
    pub fn invert(&self, x: f64, y: f64) -> Option<GeoPoint> {
        let x = if self.stretched { x * 0.5 } else { x };

        let point = match self.remap {
            RadialRemap::Orthographic => invert_orthographic(x, y),
            remap => invert_radial(x, y, remap, self.range),
        }?;

        if self.stretched {
            GeoPoint::checked(point.lon * 2.0, point.lat)
        } else {
            Some(point)
        }
    }

    /// Remapped radius of a plane point, after any horizontal stretch.
    pub fn remapped_radius(&self, x: f64, y: f64) -> f64 {
        let x = if self.stretched { x * 0.5 } else { x };
        self.remap.apply((x * x + y * y).sqrt())
    }
}

/// Walk angular distance `φ = remap(r)` from (0, 0) along the bearing of (x, y).
fn invert_radial(x: f64, y: f64, remap: RadialRemap, range: f64) -> Option<GeoPoint> {
    let r = (x * x + y * y).sqrt();
    let phi = remap.apply(r);
    if phi > range {
        return None;
    }

    let theta = y.atan2(x);
    let bearing = theta + FRAC_PI_2;
    let (sin_phi, cos_phi) = phi.sin_cos();
    let dir = Vector3::new(
        cos_phi,
        bearing.sin() * sin_phi,
        -bearing.cos() * sin_phi,
    );

    GeoPoint::from_direction(&dir)
}

fn invert_orthographic(x: f64, y: f64) -> Option<GeoPoint> {
    if x * x + y * y > 1.0 {
        return None;
    }
    GeoPoint::checked((x / (1.0 - y * y).sqrt()).asin(), y.asin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_equidistant_axes() {
        // Straight right along the equator
        let p = AZIMUTHAL_EQUIDISTANT.invert(1.0, 0.0).unwrap();
        assert!((p.lon - 1.0).abs() < EPS);
        assert!(p.lat.abs() < EPS);

        // Straight up along the prime meridian
        let p = AZIMUTHAL_EQUIDISTANT.invert(0.0, 1.0).unwrap();
        assert!(p.lon.abs() < EPS);
        assert!((p.lat - 1.0).abs() < EPS);
    }

    #[test]
    fn test_equidistant_rim_is_antipode() {
        let p = AZIMUTHAL_EQUIDISTANT.invert(PI, 0.0).unwrap();
        assert!((p.lon.abs() - PI).abs() < 1e-9);
        assert!(AZIMUTHAL_EQUIDISTANT.invert(PI + 1e-9, 0.0).is_none());
    }

    #[test]
    fn test_aitoff_doubles_longitude() {
        let p = AITOFF.invert(PI, 0.0).unwrap();
        assert!((p.lon - PI).abs() < 1e-9);
        assert!(p.lat.abs() < EPS);
        assert!(AITOFF.invert(PI, 0.1).is_none());
    }

    #[test]
    fn test_orthographic_closed_form() {
        let p = ORTHOGRAPHIC.invert(0.5, 0.0).unwrap();
        assert!((p.lon - 0.5_f64.asin()).abs() < EPS);

        let p = ORTHOGRAPHIC.invert(0.0, 1.0);
        // x / sqrt(1 - y²) is 0/0 at the pole
        assert!(p.is_none());

        assert!(ORTHOGRAPHIC.invert(0.8, 0.8).is_none());
        assert!(ORTHOGRAPHIC.invert(1.0, 0.0).is_some());
    }

    #[test]
    fn test_orthographic_aitoff_reaches_back_hemisphere() {
        let p = ORTHOGRAPHIC_AITOFF.invert(2.0, 0.0).unwrap();
        assert!((p.lon - PI).abs() < 1e-9);
    }

    #[test]
    fn test_equal_area_remap() {
        assert_eq!(RadialRemap::EqualArea.apply(0.0), 0.0);
        assert!((RadialRemap::EqualArea.apply(2.0) - PI).abs() < EPS);
        assert!(RadialRemap::EqualArea.apply(2.5).is_nan());
    }

    #[test]
    fn test_lambert_outside_disk_is_undefined() {
        // Corner of the bounding square: asin(√2) is NaN
        assert!(LAMBERT_AZIMUTHAL_EQUAL_AREA.invert(2.0, 2.0).is_none());
        assert!(LAMBERT_AZIMUTHAL_EQUAL_AREA.invert(2.0, 0.0).is_some());
    }

    #[test]
    fn test_hammer_edge() {
        let p = HAMMER.invert(2.0 * 2.0_f64.sqrt() - 1e-9, 0.0).unwrap();
        assert!((p.lon - PI).abs() < 1e-6);
        assert!(HAMMER.invert(2.0 * 2.0_f64.sqrt() + 1e-6, 0.0).is_none());
    }

    #[test]
    fn test_remapped_radius_honours_stretch() {
        assert!((AITOFF.remapped_radius(2.0, 0.0) - 1.0).abs() < EPS);
        assert!((AZIMUTHAL_EQUIDISTANT.remapped_radius(2.0, 0.0) - 2.0).abs() < EPS);
    }
}
