//! Spherical Web Mercator projection, the display coordinate system shared
//! by the path renderer, the view-fit calculator, and the marker projector.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Web-standard sphere radius in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude limit beyond which the Mercator projection diverges. Inputs are
/// clamped here so poles never map to infinity.
pub const MAX_LATITUDE: f64 = 85.051_128_779_8;

/// Half the projected world width/height in meters.
pub const MAX_EXTENT: f64 = 20_037_508.342_789_244;

/// Project geodetic degrees into display meters.
pub fn geodetic_to_display(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
    (x, y)
}

/// Inverse of [`geodetic_to_display`], returning `(lon, lat)` degrees.
pub fn display_to_geodetic(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
    (lon, lat)
}
