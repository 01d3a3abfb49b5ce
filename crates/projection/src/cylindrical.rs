//! Cylindrical and pseudo-cylindrical projections.
//!
//! Parallels are horizontal lines in the plane, so latitude depends on `y`
//! alone. Two shapes of inversion cover the family:
//!
//! - **Direct**: meridians are evenly spaced verticals; `lon = x` and
//!   `lat = latitude(y)`. Every point of the bounding rectangle is on the map.
//! - **Shrinking**: the parallel at `y` is compressed by `f = shrink(y)`, so
//!   the map only spans `|x| <= π·f` on that row. Inside, `lon = x / f` and
//!   `lat = latitude(y)`.
//!
//! All formulas take and return radians.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use crate::geo::{gudermannian, GeoPoint};

/// Inversion rule for one cylindrical-family projection.
#[derive(Debug, Clone, Copy)]
pub enum Cylindrical {
    /// `lon = x`, `lat = latitude(y)`; no domain guard.
    Direct { latitude: fn(f64) -> f64 },
    /// Row `y` spans `|x| <= π·shrink(y)`; `lon = x / shrink(y)`.
    Shrinking {
        shrink: fn(f64) -> f64,
        latitude: fn(f64) -> f64,
    },
    /// Lambert cylindrical equal-area with a standard parallel: constant
    /// shrink `scale = cos(φ₀)` and `lat = asin(y·scale)`.
    EqualArea { scale: f64 },
}

impl Cylindrical {
    /// Map a plane point back to the globe, or `None` if it lies outside the map.
    #[inline]
    pub fn invert(&self, x: f64, y: f64) -> Option<GeoPoint> {
        match *self {
            Cylindrical::Direct { latitude } => GeoPoint::checked(x, latitude(y)),
            Cylindrical::Shrinking { shrink, latitude } => {
                let f = shrink(y);
                if x.abs() > PI * f {
                    return None;
                }
                GeoPoint::checked(x / f, latitude(y))
            }
            Cylindrical::EqualArea { scale } => {
                if x.abs() > PI * scale {
                    return None;
                }
                GeoPoint::checked(x / scale, (y * scale).asin())
            }
        }
    }

    /// Horizontal compression of the parallel at `y` (1 for direct projections).
    pub fn shrink_factor(&self, y: f64) -> f64 {
        match *self {
            Cylindrical::Direct { .. } => 1.0,
            Cylindrical::Shrinking { shrink, .. } => shrink(y),
            Cylindrical::EqualArea { scale } => scale,
        }
    }
}

pub const EQUIRECTANGULAR: Cylindrical = Cylindrical::Shrinking {
    shrink: unit,
    latitude: identity,
};

pub const SINUSOIDAL: Cylindrical = Cylindrical::Shrinking {
    shrink: f64::cos,
    latitude: identity,
};

pub const MERCATOR: Cylindrical = Cylindrical::Direct {
    latitude: gudermannian,
};

pub const MILLER: Cylindrical = Cylindrical::Direct {
    latitude: miller_latitude,
};

pub const CENTRAL_CYLINDRICAL: Cylindrical = Cylindrical::Direct { latitude: f64::atan };

pub const GALL_STEREOGRAPHIC: Cylindrical = Cylindrical::Direct {
    latitude: gall_latitude,
};

pub const MOLLWEIDE: Cylindrical = Cylindrical::Shrinking {
    shrink: mollweide_shrink,
    latitude: mollweide_latitude,
};

pub const ECKERT_I: Cylindrical = Cylindrical::Shrinking {
    shrink: eckert_i_shrink,
    latitude: identity,
};

pub const ECKERT_II: Cylindrical = Cylindrical::Shrinking {
    shrink: eckert_ii_shrink,
    latitude: eckert_ii_latitude,
};

pub const ECKERT_III: Cylindrical = Cylindrical::Shrinking {
    shrink: elliptic_shrink,
    latitude: half,
};

pub const ECKERT_IV: Cylindrical = Cylindrical::Shrinking {
    shrink: elliptic_shrink,
    latitude: eckert_iv_latitude,
};

pub const ECKERT_V: Cylindrical = Cylindrical::Shrinking {
    shrink: sinusoid_shrink,
    latitude: half,
};

pub const ECKERT_VI: Cylindrical = Cylindrical::Shrinking {
    shrink: sinusoid_shrink,
    latitude: eckert_vi_latitude,
};

pub const COLLIGNON: Cylindrical = Cylindrical::Shrinking {
    shrink: collignon_shrink,
    latitude: collignon_latitude,
};

fn unit(_: f64) -> f64 {
    1.0
}

fn identity(y: f64) -> f64 {
    y
}

fn half(y: f64) -> f64 {
    y / 2.0
}

fn miller_latitude(y: f64) -> f64 {
    1.25 * gudermannian(0.8 * y)
}

fn gall_latitude(y: f64) -> f64 {
    2.0 * (y / (SQRT_2 + 1.0)).atan()
}

// Auxiliary angle θ of the Mollweide ellipse.
fn mollweide_theta(y: f64) -> f64 {
    (y * 2.0 / PI).asin()
}

fn mollweide_shrink(y: f64) -> f64 {
    mollweide_theta(y).cos()
}

fn mollweide_latitude(y: f64) -> f64 {
    let theta = mollweide_theta(y);
    (((2.0 * theta).sin() + 2.0 * theta) / PI).asin()
}

fn eckert_i_shrink(y: f64) -> f64 {
    1.0 - y.abs() / PI
}

fn eckert_ii_shrink(y: f64) -> f64 {
    (2.0 - y.abs()) / PI
}

fn eckert_ii_latitude(y: f64) -> f64 {
    let s = 2.0 - y.abs();
    sign(y) * ((4.0 - s * s) / 3.0).asin()
}

/// Shared by Eckert III and IV: outer meridians are semi-ellipses.
fn elliptic_shrink(y: f64) -> f64 {
    let t = y / PI;
    1.0 + (1.0 - t * t).sqrt()
}

fn eckert_iv_latitude(y: f64) -> f64 {
    let theta = (y / PI).asin();
    let (sin, cos) = theta.sin_cos();
    ((theta + sin * cos + 2.0 * sin) / (2.0 + FRAC_PI_2)).asin()
}

/// Shared by Eckert V and VI: outer meridians are sinusoids.
fn sinusoid_shrink(y: f64) -> f64 {
    1.0 + (y / 2.0).cos()
}

fn eckert_vi_latitude(y: f64) -> f64 {
    let h = y / 2.0;
    ((h + h.sin()) / (1.0 + FRAC_PI_2)).asin()
}

fn collignon_s(y: f64) -> f64 {
    1.0 - y / PI.sqrt()
}

fn collignon_shrink(y: f64) -> f64 {
    2.0 * collignon_s(y) / PI.sqrt()
}

fn collignon_latitude(y: f64) -> f64 {
    let s = collignon_s(y);
    (1.0 - s * s).asin()
}

/// Sign of `x`, with zero for zero.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
