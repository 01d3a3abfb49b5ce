//! Map projection inversions for world map rendering.
//!
//! Every supported projection maps a point of its output plane back onto the
//! globe. Nothing here projects forward: the renderer walks output pixels and
//! asks which geographic point each one shows.
//!
//! Two families cover nearly all variants:
//! - [`cylindrical`]: equirectangular, Mercator, the Eckert series, ...
//! - [`azimuthal`]: azimuthal equidistant, Lambert equal-area, Hammer, ...

pub mod azimuthal;
pub mod catalog;
pub mod cylindrical;
pub mod error;
pub mod geo;

pub use catalog::{Projection, ProjectionKind};
pub use error::ProjectionError;
pub use geo::{Bounds, GeoPoint, PlanePoint};
