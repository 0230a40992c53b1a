//! British National Grid easting/northing to WGS84 longitude/latitude.
//!
//! Two stages: the inverse ellipsoidal Transverse Mercator projection on the
//! Airy 1830 ellipsoid (Ordnance Survey series formulas), then a 7-parameter
//! Helmert datum shift from OSGB36 to WGS84 via geocentric coordinates.
//! Formula accuracy is well under a meter; the Helmert parameters themselves
//! carry the usual few-meter national-grid uncertainty.

use std::f64::consts::PI;

// Airy 1830 ellipsoid (OSGB36 datum)
const AIRY_A: f64 = 6_377_563.396;
const AIRY_B: f64 = 6_356_256.909;

// WGS84 ellipsoid
const WGS84_A: f64 = 6_378_137.0;
const WGS84_B: f64 = 6_356_752.3141;

// National grid projection constants
const SCALE_F0: f64 = 0.999_601_271_7;
const LAT_ORIGIN: f64 = 49.0 * PI / 180.0;
const LON_ORIGIN: f64 = -2.0 * PI / 180.0;
const FALSE_EASTING: f64 = 400_000.0;
const FALSE_NORTHING: f64 = -100_000.0;

// OSGB36 -> WGS84 Helmert parameters: meters, ppm, arc-seconds
const TX: f64 = 446.448;
const TY: f64 = -125.157;
const TZ: f64 = 542.060;
const SCALE_PPM: f64 = -20.4894;
const RX_SEC: f64 = 0.1502;
const RY_SEC: f64 = 0.2470;
const RZ_SEC: f64 = 0.8421;

/// Convert a grid easting/northing to WGS84 `(lon, lat)` degrees.
///
/// Returns `None` when the input or any intermediate value is non-finite;
/// callers drop the point rather than aborting the ring.
pub fn grid_to_geodetic(easting: f64, northing: f64) -> Option<(f64, f64)> {
    if !easting.is_finite() || !northing.is_finite() {
        return None;
    }

    let (lat36, lon36) = transverse_mercator_inverse(easting, northing);
    let (x, y, z) = geodetic_to_cartesian(lat36, lon36, AIRY_A, AIRY_B);
    let (x, y, z) = helmert_osgb36_to_wgs84(x, y, z);
    let (lat, lon) = cartesian_to_geodetic(x, y, z, WGS84_A, WGS84_B);

    let lon_deg = lon.to_degrees();
    let lat_deg = lat.to_degrees();
    (lon_deg.is_finite() && lat_deg.is_finite()).then_some((lon_deg, lat_deg))
}

/// Invert the Transverse Mercator projection, returning OSGB36 latitude and
/// longitude in radians.
pub(crate) fn transverse_mercator_inverse(easting: f64, northing: f64) -> (f64, f64) {
    let a = AIRY_A * SCALE_F0;
    let e2 = (AIRY_A * AIRY_A - AIRY_B * AIRY_B) / (AIRY_A * AIRY_A);
    let n = (AIRY_A - AIRY_B) / (AIRY_A + AIRY_B);

    // Iterate the meridional arc until the residual is below 0.01mm
    let mut phi = (northing - FALSE_NORTHING) / a + LAT_ORIGIN;
    loop {
        let m = meridional_arc(phi, n);
        let delta = northing - FALSE_NORTHING - m;
        if delta.abs() < 1e-5 {
            break;
        }
        phi += delta / a;
    }

    let sin2 = phi.sin() * phi.sin();
    let nu = a / (1.0 - e2 * sin2).sqrt();
    let rho = a * (1.0 - e2) / (1.0 - e2 * sin2).powf(1.5);
    let eta2 = nu / rho - 1.0;

    let tan_phi = phi.tan();
    let tan2 = tan_phi * tan_phi;
    let tan4 = tan2 * tan2;
    let tan6 = tan4 * tan2;
    let sec_phi = 1.0 / phi.cos();

    let vii = tan_phi / (2.0 * rho * nu);
    let viii =
        tan_phi / (24.0 * rho * nu.powi(3)) * (5.0 + 3.0 * tan2 + eta2 - 9.0 * tan2 * eta2);
    let ix = tan_phi / (720.0 * rho * nu.powi(5)) * (61.0 + 90.0 * tan2 + 45.0 * tan4);
    let x = sec_phi / nu;
    let xi = sec_phi / (6.0 * nu.powi(3)) * (nu / rho + 2.0 * tan2);
    let xii = sec_phi / (120.0 * nu.powi(5)) * (5.0 + 28.0 * tan2 + 24.0 * tan4);
    let xiia = sec_phi / (5040.0 * nu.powi(7))
        * (61.0 + 662.0 * tan2 + 1320.0 * tan4 + 720.0 * tan6);

    let de = easting - FALSE_EASTING;
    let de2 = de * de;
    let de3 = de2 * de;
    let de4 = de2 * de2;
    let de5 = de4 * de;
    let de6 = de4 * de2;
    let de7 = de6 * de;

    let lat = phi - vii * de2 + viii * de4 - ix * de6;
    let lon = LON_ORIGIN + x * de - xi * de3 + xii * de5 - xiia * de7;
    (lat, lon)
}

/// Developed meridional arc from the latitude of origin to `phi`.
fn meridional_arc(phi: f64, n: f64) -> f64 {
    let b = AIRY_B * SCALE_F0;
    let n2 = n * n;
    let n3 = n2 * n;
    let dphi = phi - LAT_ORIGIN;
    let sphi = phi + LAT_ORIGIN;

    b * ((1.0 + n + 1.25 * n2 + 1.25 * n3) * dphi
        - (3.0 * n + 3.0 * n2 + 2.625 * n3) * dphi.sin() * sphi.cos()
        + (1.875 * n2 + 1.875 * n3) * (2.0 * dphi).sin() * (2.0 * sphi).cos()
        - (35.0 / 24.0) * n3 * (3.0 * dphi).sin() * (3.0 * sphi).cos())
}

/// Geodetic (radians, height 0) to geocentric Cartesian on the given ellipsoid.
fn geodetic_to_cartesian(lat: f64, lon: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let e2 = (a * a - b * b) / (a * a);
    let sin_lat = lat.sin();
    let nu = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();

    (
        nu * lat.cos() * lon.cos(),
        nu * lat.cos() * lon.sin(),
        nu * (1.0 - e2) * sin_lat,
    )
}

/// Geocentric Cartesian back to geodetic (radians) on the given ellipsoid.
/// The latitude iteration converges in a handful of steps.
fn cartesian_to_geodetic(x: f64, y: f64, z: f64, a: f64, b: f64) -> (f64, f64) {
    let e2 = (a * a - b * b) / (a * a);
    let p = (x * x + y * y).sqrt();
    let lon = y.atan2(x);

    let mut lat = z.atan2(p * (1.0 - e2));
    for _ in 0..10 {
        let sin_lat = lat.sin();
        let nu = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let next = (z + e2 * nu * sin_lat).atan2(p);
        let done = (next - lat).abs() < 1e-12;
        lat = next;
        if done {
            break;
        }
    }

    (lat, lon)
}

/// Apply the fixed small-angle Helmert transform between the two datums.
fn helmert_osgb36_to_wgs84(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    const SEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

    let s = 1.0 + SCALE_PPM * 1e-6;
    let rx = RX_SEC * SEC_TO_RAD;
    let ry = RY_SEC * SEC_TO_RAD;
    let rz = RZ_SEC * SEC_TO_RAD;

    (
        TX + s * x - rz * y + ry * z,
        TY + rz * x + s * y - rx * z,
        TZ - ry * x + rx * y + s * z,
    )
}
