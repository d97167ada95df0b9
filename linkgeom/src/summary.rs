//! Header metrics for a built link profile.

use crate::{
    geodesy::bearing_deg,
    profile::{LinkEnd, LinkProfile, Obstruction},
};
use geo::CoordFloat;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Compact per-link summary derived from the endpoints and a built
/// profile. Read-only; recompute it rather than patching it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LinkSummary<C = f64> {
    /// Total path distance, meters.
    pub distance_m: C,

    /// Initial bearing from the transmit end, degrees `[0, 360)`.
    pub azimuth_deg: C,

    /// Up/down angle of the line of sight from the transmit end,
    /// degrees.
    pub elev_angle_deg: C,

    /// Worst fresnel-zone clearance, copied from the profile.
    pub obstruction: Obstruction<C>,
}

/// Derives the header metrics for `profile`, a profile built between
/// `tx` and `rx`.
pub fn derive_summary<C>(tx: &LinkEnd<C>, rx: &LinkEnd<C>, profile: &LinkProfile<C>) -> LinkSummary<C>
where
    C: CoordFloat,
{
    // Unwrap is fine as profiles always have at least two points.
    let rise_m = *profile.los_m.last().unwrap() - profile.los_m[0];

    LinkSummary {
        distance_m: profile.distance_m,
        azimuth_deg: bearing_deg(tx.coord, rx.coord),
        elev_angle_deg: rise_m.atan2(profile.distance_m).to_degrees(),
        obstruction: profile.obstruction,
    }
}
