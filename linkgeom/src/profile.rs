//! Link profile construction.

use crate::{constants::wavelength_m, curvature::bulge_m, error::ProfileError, fresnel};
use geo::{geometry::Coord, CoordFloat};
use log::debug;
use num_traits::AsPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One elevation sample along the path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProfileSample<C = f64> {
    /// Distance from the transmit end, meters.
    pub distance_m: C,

    /// Ground elevation, meters, in whatever consistent vertical
    /// datum the sample source uses.
    pub ground_m: C,
}

/// One end of a radio link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkEnd<C: CoordFloat = f64> {
    /// Antenna site location; `x` is longitude and `y` is latitude,
    /// both in degrees.
    pub coord: Coord<C>,

    /// Antenna height above ground level, meters.
    pub agl_m: C,
}

/// Worst-point clearance report for a link profile.
///
/// The worst point always exists (a profile has at least two
/// samples); `exists` only says whether terrain actually intrudes
/// into the first fresnel zone there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Obstruction<C = f64> {
    /// `true` when terrain intrudes into the first fresnel zone (or
    /// blocks the direct path outright).
    pub exists: bool,

    /// Distance from the transmit end of the worst point, meters.
    pub at_m: C,

    /// Clearance between the bottom of the first fresnel zone and the
    /// terrain at the worst point, meters. Negative means intrusion.
    pub clearance_m: C,

    /// `clearance_m` in units of the local fresnel radius: 0 grazes
    /// the line of sight, -1 reaches the zone edge.
    pub fresnel_fraction: C,
}

/// Vertical geometry of a point-to-point link.
///
/// All vectors have one entry per input sample and stay index-aligned
/// with each other.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LinkProfile<C: CoordFloat = f64> {
    /// Incremental path distance for all following vectors.
    pub distances_m: Vec<C>,

    /// Earth bulge at each step.
    pub bulge_m: Vec<C>,

    /// Reference floor plus bulge at each step.
    pub earth_m: Vec<C>,

    /// Terrain height (`earth_m` plus ground elevation) at each step.
    pub terrain_m: Vec<C>,

    /// A straight line between the two antenna apexes.
    pub los_m: Vec<C>,

    /// First-fresnel-zone radius at each step.
    pub fresnel_m: Vec<C>,

    /// Top of the first fresnel zone (`los_m + fresnel_m`).
    pub fresnel_top_m: Vec<C>,

    /// Bottom of the first fresnel zone (`los_m - fresnel_m`).
    pub fresnel_bot_m: Vec<C>,

    /// Total path distance, meters.
    pub distance_m: C,

    /// Worst fresnel-zone clearance along the path.
    pub obstruction: Obstruction<C>,
}

impl<C> LinkProfile<C>
where
    C: CoordFloat,
{
    pub fn builder() -> LinkProfileBuilder<C> {
        LinkProfileBuilder {
            tx: None,
            rx: None,
            freq_mhz: None,
            samples: None,
            k_factor: C::from(4.0 / 3.0).unwrap(),
            floor_pad_m: C::from(50.0).unwrap(),
        }
    }
}

pub struct LinkProfileBuilder<C: CoordFloat = f64> {
    /// Transmit end of the link (required).
    tx: Option<LinkEnd<C>>,

    /// Receive end of the link (required).
    rx: Option<LinkEnd<C>>,

    /// Carrier frequency, MHz (required).
    freq_mhz: Option<C>,

    /// Elevation samples from `tx` to `rx` (required).
    samples: Option<Vec<ProfileSample<C>>>,

    /// Effective-earth-radius factor (defaults to 4/3).
    k_factor: C,

    /// How far the reference floor sits below the lowest ground
    /// sample (defaults to 50 m). Shifts every height by the same
    /// constant and nothing else.
    floor_pad_m: C,
}

impl<C> LinkProfileBuilder<C>
where
    C: CoordFloat + 'static,
    usize: AsPrimitive<C>,
    f64: From<C>,
{
    /// Transmit end of the link (required).
    #[must_use]
    pub fn tx(mut self, end: LinkEnd<C>) -> Self {
        self.tx = Some(end);
        self
    }

    /// Receive end of the link (required).
    #[must_use]
    pub fn rx(mut self, end: LinkEnd<C>) -> Self {
        self.rx = Some(end);
        self
    }

    /// Carrier frequency in MHz (required).
    #[must_use]
    pub fn freq_mhz(mut self, freq_mhz: C) -> Self {
        self.freq_mhz = Some(freq_mhz);
        self
    }

    /// Elevation samples from `tx` to `rx`, with strictly increasing
    /// distances (required).
    #[must_use]
    pub fn samples(mut self, samples: Vec<ProfileSample<C>>) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Effective-earth-radius factor (defaults to 4/3).
    #[must_use]
    pub fn k_factor(mut self, k_factor: C) -> Self {
        self.k_factor = k_factor;
        self
    }

    /// Distance the reference floor sits below the lowest ground
    /// sample (defaults to 50 m).
    #[must_use]
    pub fn floor_pad(mut self, meters: C) -> Self {
        self.floor_pad_m = meters;
        self
    }

    pub fn build(&self) -> Result<LinkProfile<C>, ProfileError> {
        let tx = self.tx.ok_or(ProfileError::Builder("tx"))?;
        let rx = self.rx.ok_or(ProfileError::Builder("rx"))?;
        let freq_mhz = self.freq_mhz.ok_or(ProfileError::Builder("freq_mhz"))?;
        let samples = self
            .samples
            .as_deref()
            .ok_or(ProfileError::Builder("samples"))?;

        if samples.len() < 2 {
            return Err(ProfileError::TooFewSamples(samples.len()));
        }
        for (idx, pair) in samples.windows(2).enumerate() {
            if pair[1].distance_m <= pair[0].distance_m {
                return Err(ProfileError::DistanceOrder(idx + 1));
            }
        }
        if self.k_factor.is_nan() || self.k_factor <= C::zero() {
            return Err(ProfileError::KFactor(self.k_factor.into()));
        }

        let n = samples.len();
        let total_m = samples[n - 1].distance_m;
        if total_m.is_nan() || total_m <= C::zero() {
            return Err(ProfileError::PathLength(total_m.into()));
        }
        let wavelen_m = wavelength_m(freq_mhz)?;

        let now = std::time::Instant::now();

        let mut min_ground_m = C::infinity();
        for sample in samples {
            min_ground_m = min_ground_m.min(sample.ground_m);
        }
        let floor_m = if min_ground_m.is_finite() {
            min_ground_m
        } else {
            C::zero()
        } - self.floor_pad_m;

        let mut distances_m = Vec::with_capacity(n);
        let mut bulges_m = Vec::with_capacity(n);
        let mut earth_m = Vec::with_capacity(n);
        let mut terrain_m = Vec::with_capacity(n);
        for sample in samples {
            let bulge = bulge_m(sample.distance_m, total_m, self.k_factor);
            let earth = floor_m + bulge;
            distances_m.push(sample.distance_m);
            bulges_m.push(bulge);
            earth_m.push(earth);
            terrain_m.push(earth + sample.ground_m);
        }

        let apex_tx_m = earth_m[0] + samples[0].ground_m + tx.agl_m;
        let apex_rx_m = earth_m[n - 1] + samples[n - 1].ground_m + rx.agl_m;

        let mut los_m = Vec::with_capacity(n);
        let mut fresnel_m = Vec::with_capacity(n);
        let mut fresnel_top_m = Vec::with_capacity(n);
        let mut fresnel_bot_m = Vec::with_capacity(n);
        for &x_m in &distances_m {
            let los = apex_tx_m + (apex_rx_m - apex_tx_m) * (x_m / total_m);
            let radius = fresnel::radius_m(wavelen_m, x_m, total_m);
            los_m.push(los);
            fresnel_m.push(radius);
            fresnel_top_m.push(los + radius);
            fresnel_bot_m.push(los - radius);
        }

        let obstruction = scan_obstruction(&distances_m, &los_m, &fresnel_m, &terrain_m);

        debug!("link profile; len: {}, exec: {:?}", n, now.elapsed());

        Ok(LinkProfile {
            distances_m,
            bulge_m: bulges_m,
            earth_m,
            terrain_m,
            los_m,
            fresnel_m,
            fresnel_top_m,
            fresnel_bot_m,
            distance_m: total_m,
            obstruction,
        })
    }
}

/// Finds the sample with the least clearance between the bottom of
/// the first fresnel zone and the terrain. Ties go to the first
/// occurrence, so the reported worst point is stable.
fn scan_obstruction<C: CoordFloat>(
    distances_m: &[C],
    los_m: &[C],
    fresnel_m: &[C],
    terrain_m: &[C],
) -> Obstruction<C> {
    let mut min_clearance_m = C::infinity();
    let mut min_idx = 0;
    for idx in 0..los_m.len() {
        let clearance_m = los_m[idx] - fresnel_m[idx] - terrain_m[idx];
        if clearance_m < min_clearance_m {
            min_clearance_m = clearance_m;
            min_idx = idx;
        }
    }

    // Guards the division when the worst point lands on a path end,
    // where the fresnel radius is 0.
    let epsilon = C::from(1e-9).unwrap();

    Obstruction {
        exists: min_clearance_m < C::zero(),
        at_m: distances_m[min_idx],
        clearance_m: min_clearance_m,
        fresnel_fraction: min_clearance_m / fresnel_m[min_idx].max(epsilon),
    }
}
