//! Physical constants shared by the geometry routines.

use crate::error::ProfileError;
use num_traits::{AsPrimitive, Float};

/// Speed of light in m/s.
pub const SPEED_OF_LIGHT: usize = 299_792_458;

/// Mean earth radius in meters.
pub const MEAN_EARTH_RADIUS: f64 = 6_371_000.0;

/// Returns the wavelength, in meters, of a `freq_mhz` MHz carrier.
///
/// # Errors
///
/// Returns [`ProfileError::Frequency`] unless `freq_mhz` is finite
/// and positive.
pub fn wavelength_m<C>(freq_mhz: C) -> Result<C, ProfileError>
where
    C: Float + 'static,
    usize: AsPrimitive<C>,
    f64: From<C>,
{
    if freq_mhz.is_nan() || freq_mhz <= C::zero() {
        return Err(ProfileError::Frequency(freq_mhz.into()));
    }
    let freq_hz = freq_mhz * C::from(1e6).unwrap();
    Ok(SPEED_OF_LIGHT.as_() / freq_hz)
}

#[cfg(test)]
mod tests {
    use super::{wavelength_m, ProfileError};
    use approx::assert_relative_eq;

    #[test]
    fn test_wavelength() {
        assert_relative_eq!(0.999_308_193_333_333_3, wavelength_m(300.0).unwrap());
        assert_relative_eq!(0.333_102_731_111_111_1, wavelength_m(900.0).unwrap());
    }

    #[test]
    fn test_wavelength_rejects_non_positive_freq() {
        assert_eq!(wavelength_m(0.0), Err(ProfileError::Frequency(0.0)));
        assert_eq!(wavelength_m(-5.0), Err(ProfileError::Frequency(-5.0)));
        assert!(wavelength_m(f64::NAN).is_err());
    }
}
