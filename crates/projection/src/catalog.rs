//! The closed set of supported projections.
//!
//! [`ProjectionKind`] names a projection (and carries its numeric parameters);
//! [`Projection`] pairs it with a bounding rectangle and an inversion rule
//! taken from the [`cylindrical`](crate::cylindrical) or
//! [`azimuthal`](crate::azimuthal) family.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};
use std::fmt;
use std::str::FromStr;

use crate::azimuthal::{self, Azimuthal};
use crate::cylindrical::{self, Cylindrical};
use crate::error::ProjectionError;
use crate::geo::{inverse_gudermannian, Bounds, GeoPoint, PlanePoint};

/// Default clipping latitude for Mercator and central-cylindrical (80°).
pub const DEFAULT_MAX_LATITUDE: f64 = 80.0 * PI / 180.0;

/// Identifies a projection. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionKind {
    Equirectangular,
    CylindricalEqualArea { standard_latitude: f64 },
    Mercator { max_latitude: f64 },
    Miller,
    CentralCylindrical { max_latitude: f64 },
    Sinusoidal,
    Mollweide,
    GallStereographic,
    EckertI,
    EckertII,
    EckertIII,
    EckertIV,
    EckertV,
    EckertVI,
    Collignon,
    AzimuthalEquidistant,
    Aitoff,
    Orthographic,
    OrthographicAitoff,
    LambertAzimuthalEqualArea,
    Hammer,
}

impl ProjectionKind {
    /// Every supported identifier, in catalog order.
    pub const ALL_NAMES: [&'static str; 21] = [
        "equirectangular",
        "cylindrical-equal-area",
        "mercator",
        "miller",
        "central-cylindrical",
        "sinusoidal",
        "mollweide",
        "gall-stereographic",
        "eckert-1",
        "eckert-2",
        "eckert-3",
        "eckert-4",
        "eckert-5",
        "eckert-6",
        "collignon",
        "azimuthal-equidistant",
        "aitoff",
        "orthographic",
        "orthographic-aitoff",
        "lambert-azimuthal-equal-area",
        "hammer",
    ];

    /// Every kind with default parameters, in catalog order.
    pub fn all() -> Vec<ProjectionKind> {
        Self::ALL_NAMES
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect()
    }

    /// Stable kebab-case identifier.
    pub fn name(&self) -> &'static str {
        match self {
            ProjectionKind::Equirectangular => "equirectangular",
            ProjectionKind::CylindricalEqualArea { .. } => "cylindrical-equal-area",
            ProjectionKind::Mercator { .. } => "mercator",
            ProjectionKind::Miller => "miller",
            ProjectionKind::CentralCylindrical { .. } => "central-cylindrical",
            ProjectionKind::Sinusoidal => "sinusoidal",
            ProjectionKind::Mollweide => "mollweide",
            ProjectionKind::GallStereographic => "gall-stereographic",
            ProjectionKind::EckertI => "eckert-1",
            ProjectionKind::EckertII => "eckert-2",
            ProjectionKind::EckertIII => "eckert-3",
            ProjectionKind::EckertIV => "eckert-4",
            ProjectionKind::EckertV => "eckert-5",
            ProjectionKind::EckertVI => "eckert-6",
            ProjectionKind::Collignon => "collignon",
            ProjectionKind::AzimuthalEquidistant => "azimuthal-equidistant",
            ProjectionKind::Aitoff => "aitoff",
            ProjectionKind::Orthographic => "orthographic",
            ProjectionKind::OrthographicAitoff => "orthographic-aitoff",
            ProjectionKind::LambertAzimuthalEqualArea => "lambert-azimuthal-equal-area",
            ProjectionKind::Hammer => "hammer",
        }
    }

    /// Set the standard parallel of a cylindrical equal-area projection.
    ///
    /// Other kinds are returned unchanged. The latitude must lie strictly
    /// between the poles.
    pub fn with_standard_latitude(self, latitude: f64) -> Result<Self, ProjectionError> {
        match self {
            ProjectionKind::CylindricalEqualArea { .. } => {
                if !(latitude.abs() < FRAC_PI_2) {
                    return Err(ProjectionError::InvalidParameter {
                        param: "standard_latitude",
                        message: format!(
                            "{:.3}° must lie strictly between -90° and 90°",
                            latitude.to_degrees()
                        ),
                    });
                }
                Ok(ProjectionKind::CylindricalEqualArea {
                    standard_latitude: latitude,
                })
            }
            other => Ok(other),
        }
    }

    /// Set the clipping latitude of Mercator or central-cylindrical.
    ///
    /// Other kinds are returned unchanged. The latitude must lie in (0, π/2).
    pub fn with_max_latitude(self, latitude: f64) -> Result<Self, ProjectionError> {
        let check = || {
            if latitude > 0.0 && latitude < FRAC_PI_2 {
                Ok(latitude)
            } else {
                Err(ProjectionError::InvalidParameter {
                    param: "max_latitude",
                    message: format!(
                        "{:.3}° must lie strictly between 0° and 90°",
                        latitude.to_degrees()
                    ),
                })
            }
        };
        match self {
            ProjectionKind::Mercator { .. } => Ok(ProjectionKind::Mercator {
                max_latitude: check()?,
            }),
            ProjectionKind::CentralCylindrical { .. } => Ok(ProjectionKind::CentralCylindrical {
                max_latitude: check()?,
            }),
            other => Ok(other),
        }
    }

    pub fn is_azimuthal(&self) -> bool {
        matches!(self.rule(), Rule::Azimuthal(_))
    }

    fn rule(&self) -> Rule {
        match *self {
            ProjectionKind::Equirectangular => Rule::Cylindrical(cylindrical::EQUIRECTANGULAR),
            ProjectionKind::CylindricalEqualArea { standard_latitude } => {
                Rule::Cylindrical(Cylindrical::EqualArea {
                    scale: standard_latitude.cos(),
                })
            }
            ProjectionKind::Mercator { .. } => Rule::Cylindrical(cylindrical::MERCATOR),
            ProjectionKind::Miller => Rule::Cylindrical(cylindrical::MILLER),
            ProjectionKind::CentralCylindrical { .. } => {
                Rule::Cylindrical(cylindrical::CENTRAL_CYLINDRICAL)
            }
            ProjectionKind::Sinusoidal => Rule::Cylindrical(cylindrical::SINUSOIDAL),
            ProjectionKind::Mollweide => Rule::Cylindrical(cylindrical::MOLLWEIDE),
            ProjectionKind::GallStereographic => Rule::Cylindrical(cylindrical::GALL_STEREOGRAPHIC),
            ProjectionKind::EckertI => Rule::Cylindrical(cylindrical::ECKERT_I),
            ProjectionKind::EckertII => Rule::Cylindrical(cylindrical::ECKERT_II),
            ProjectionKind::EckertIII => Rule::Cylindrical(cylindrical::ECKERT_III),
            ProjectionKind::EckertIV => Rule::Cylindrical(cylindrical::ECKERT_IV),
            ProjectionKind::EckertV => Rule::Cylindrical(cylindrical::ECKERT_V),
            ProjectionKind::EckertVI => Rule::Cylindrical(cylindrical::ECKERT_VI),
            ProjectionKind::Collignon => Rule::Cylindrical(cylindrical::COLLIGNON),
            ProjectionKind::AzimuthalEquidistant => {
                Rule::Azimuthal(azimuthal::AZIMUTHAL_EQUIDISTANT)
            }
            ProjectionKind::Aitoff => Rule::Azimuthal(azimuthal::AITOFF),
            ProjectionKind::Orthographic => Rule::Azimuthal(azimuthal::ORTHOGRAPHIC),
            ProjectionKind::OrthographicAitoff => Rule::Azimuthal(azimuthal::ORTHOGRAPHIC_AITOFF),
            ProjectionKind::LambertAzimuthalEqualArea => {
                Rule::Azimuthal(azimuthal::LAMBERT_AZIMUTHAL_EQUAL_AREA)
            }
            ProjectionKind::Hammer => Rule::Azimuthal(azimuthal::HAMMER),
        }
    }

    fn bounds(&self) -> Bounds {
        match *self {
            ProjectionKind::Equirectangular
            | ProjectionKind::Sinusoidal
            | ProjectionKind::Mollweide
            | ProjectionKind::EckertI
            | ProjectionKind::Aitoff => Bounds::symmetric(PI, FRAC_PI_2),
            ProjectionKind::CylindricalEqualArea { standard_latitude } => {
                let s = standard_latitude.cos();
                Bounds::symmetric(s * PI, 1.0 / s)
            }
            ProjectionKind::Mercator { max_latitude } => {
                Bounds::symmetric(PI, inverse_gudermannian(max_latitude))
            }
            ProjectionKind::Miller => {
                Bounds::symmetric(PI, 1.25 * inverse_gudermannian(0.4 * PI))
            }
            ProjectionKind::CentralCylindrical { max_latitude } => {
                Bounds::symmetric(PI, max_latitude.tan())
            }
            ProjectionKind::GallStereographic => Bounds::symmetric(PI, SQRT_2 + 1.0),
            ProjectionKind::EckertII | ProjectionKind::OrthographicAitoff => {
                Bounds::symmetric(2.0, 1.0)
            }
            ProjectionKind::EckertIII
            | ProjectionKind::EckertIV
            | ProjectionKind::EckertV
            | ProjectionKind::EckertVI => Bounds::symmetric(2.0 * PI, PI),
            ProjectionKind::Collignon => {
                let root_pi = PI.sqrt();
                Bounds::new(
                    -2.0 * (2.0 * PI).sqrt(),
                    2.0 * (2.0 * PI).sqrt(),
                    root_pi * (1.0 - SQRT_2),
                    root_pi,
                )
            }
            ProjectionKind::AzimuthalEquidistant => Bounds::symmetric(PI, PI),
            ProjectionKind::Orthographic => Bounds::symmetric(1.0, 1.0),
            ProjectionKind::LambertAzimuthalEqualArea => Bounds::symmetric(2.0, 2.0),
            ProjectionKind::Hammer => Bounds::symmetric(2.0 * SQRT_2, SQRT_2),
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectionKind {
    type Err = ProjectionError;

    /// Parse an identifier; parameterized kinds get their default parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "equirectangular" => ProjectionKind::Equirectangular,
            "cylindrical-equal-area" => ProjectionKind::CylindricalEqualArea {
                standard_latitude: 0.0,
            },
            "mercator" => ProjectionKind::Mercator {
                max_latitude: DEFAULT_MAX_LATITUDE,
            },
            "miller" => ProjectionKind::Miller,
            "central-cylindrical" => ProjectionKind::CentralCylindrical {
                max_latitude: DEFAULT_MAX_LATITUDE,
            },
            "sinusoidal" => ProjectionKind::Sinusoidal,
            "mollweide" => ProjectionKind::Mollweide,
            "gall-stereographic" => ProjectionKind::GallStereographic,
            "eckert-1" => ProjectionKind::EckertI,
            "eckert-2" => ProjectionKind::EckertII,
            "eckert-3" => ProjectionKind::EckertIII,
            "eckert-4" => ProjectionKind::EckertIV,
            "eckert-5" => ProjectionKind::EckertV,
            "eckert-6" => ProjectionKind::EckertVI,
            "collignon" => ProjectionKind::Collignon,
            "azimuthal-equidistant" => ProjectionKind::AzimuthalEquidistant,
            "aitoff" => ProjectionKind::Aitoff,
            "orthographic" => ProjectionKind::Orthographic,
            "orthographic-aitoff" => ProjectionKind::OrthographicAitoff,
            "lambert-azimuthal-equal-area" => ProjectionKind::LambertAzimuthalEqualArea,
            "hammer" => ProjectionKind::Hammer,
            _ => {
                return Err(ProjectionError::UnknownProjection {
                    name: s.to_string(),
                    expected: Self::ALL_NAMES.join(", "),
                })
            }
        };
        Ok(kind)
    }
}

/// Inversion rule of one family member.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Cylindrical(Cylindrical),
    Azimuthal(Azimuthal),
}

/// A ready-to-use projection: bounding rectangle plus inversion.
///
/// Cheap to copy and free of interior state, so it can be shared across
/// rendering threads by reference.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    kind: ProjectionKind,
    bounds: Bounds,
    rule: Rule,
}

impl Projection {
    pub fn new(kind: ProjectionKind) -> Self {
        Self {
            kind,
            bounds: kind.bounds(),
            rule: kind.rule(),
        }
    }

    pub fn kind(&self) -> ProjectionKind {
        self.kind
    }

    /// Rectangle of plane coordinates the projection draws into.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Map a plane point back onto the globe.
    ///
    /// Returns `None` when the point lies outside the drawn region.
    #[inline]
    pub fn invert(&self, x: f64, y: f64) -> Option<GeoPoint> {
        match &self.rule {
            Rule::Cylindrical(rule) => rule.invert(x, y),
            Rule::Azimuthal(rule) => rule.invert(x, y),
        }
    }

    #[inline]
    pub fn invert_point(&self, p: PlanePoint) -> Option<GeoPoint> {
        self.invert(p.x, p.y)
    }

    /// Cylindrical rule, if this is a cylindrical-family projection.
    pub fn cylindrical(&self) -> Option<&Cylindrical> {
        match &self.rule {
            Rule::Cylindrical(rule) => Some(rule),
            Rule::Azimuthal(_) => None,
        }
    }

    /// Azimuthal rule, if this is an azimuthal-family projection.
    pub fn azimuthal(&self) -> Option<&Azimuthal> {
        match &self.rule {
            Rule::Azimuthal(rule) => Some(rule),
            Rule::Cylindrical(_) => None,
        }
    }
}

impl From<ProjectionKind> for Projection {
    fn from(kind: ProjectionKind) -> Self {
        Self::new(kind)
    }
}
