//! Spherical-earth geodesy primitives.
//!
//! Bearings and distances here use a plain sphere of radius
//! [`MEAN_EARTH_RADIUS`](crate::constants::MEAN_EARTH_RADIUS), which
//! is plenty for link headers. Coordinates are `geo` coords with `x`
//! as longitude and `y` as latitude, both in degrees.

use crate::constants::MEAN_EARTH_RADIUS;
use geo::{geometry::Coord, CoordFloat};

/// Returns the initial bearing, in degrees `[0, 360)`, of the great
/// circle route from `a` to `b`.
///
/// The bearing of two coincident coords is arbitrary.
pub fn bearing_deg<C: CoordFloat>(a: Coord<C>, b: Coord<C>) -> C {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let y = d_lon.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * d_lon.cos();

    let full_turn = C::from(360.0).unwrap();
    (y.atan2(x).to_degrees() + full_turn) % full_turn
}

/// Returns the haversine great circle distance, in meters, between
/// `a` and `b`.
pub fn haversine_m<C: CoordFloat>(a: Coord<C>, b: Coord<C>) -> C {
    let two = C::one() + C::one();

    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let d_lat = lat_b - lat_a;
    let d_lon = (b.x - a.x).to_radians();

    let s = (d_lat / two).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / two).sin().powi(2);
    let c = two * s.sqrt().atan2((C::one() - s).sqrt());

    C::from(MEAN_EARTH_RADIUS).unwrap() * c
}
