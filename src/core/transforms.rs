//! Spherical to Cartesian coordinate conversion.
//!
//! Input angles are in degrees: phi is the azimuthal angle, theta the polar
//! angle measured from the positive z axis. The radius keeps whatever unit
//! the input file uses.

/// A validated spherical coordinate triple as read from the input file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Azimuthal angle in degrees.
    pub phi_deg: f64,
    /// Polar angle in degrees.
    pub theta_deg: f64,
    /// Radial distance.
    pub r: f64,
}

impl Spherical {
    /// Creates a new spherical triple.
    pub fn new(phi_deg: f64, theta_deg: f64, r: f64) -> Self {
        Self { phi_deg, theta_deg, r }
    }
}

/// A fully converted point: Cartesian coordinates plus the original
/// spherical values it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
    /// Original radial distance.
    pub r: f64,
    /// Original azimuthal angle in degrees.
    pub phi: f64,
    /// Original polar angle in degrees.
    pub theta: f64,
}

/// Convert a spherical triple to a Cartesian point.
///
/// Computes x = r·sin(theta)·cos(phi), y = r·sin(theta)·sin(phi),
/// z = r·cos(theta) after converting both angles from degrees to radians.
///
/// No range validation is performed: negative radii or angles outside
/// [0, 360) pass through unchanged, matching the lenient input contract.
///
/// # Arguments
///
/// * `coord` - Spherical triple with angles in degrees
///
/// # Returns
///
/// A `Point` carrying the Cartesian coordinates together with the original
/// spherical values.
///
/// # Example
///
/// ```
/// use polarconv::core::transforms::{spherical_to_cartesian, Spherical};
///
/// let p = spherical_to_cartesian(&Spherical::new(0.0, 90.0, 1.0));
/// assert!((p.x - 1.0).abs() < 1e-9);
/// ```
pub fn spherical_to_cartesian(coord: &Spherical) -> Point {
    let phi_rad = coord.phi_deg.to_radians();
    let theta_rad = coord.theta_deg.to_radians();

    let sin_theta = theta_rad.sin();

    Point {
        x: coord.r * sin_theta * phi_rad.cos(),
        y: coord.r * sin_theta * phi_rad.sin(),
        z: coord.r * theta_rad.cos(),
        r: coord.r,
        phi: coord.phi_deg,
        theta: coord.theta_deg,
    }
}

/// Convert a batch of spherical triples, preserving input order.
pub fn convert_all(coords: &[Spherical]) -> Vec<Point> {
    coords.iter().map(spherical_to_cartesian).collect()
}
