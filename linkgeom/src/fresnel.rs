//! First fresnel zone geometry.

use num_traits::Float;

/// Returns the first-fresnel-zone radius, in meters, at `d1_m`
/// meters along a `total_m`-meter path, for a `wavelen_m`-meter
/// carrier.
///
/// The radius is defined only strictly between the path ends; at (or
/// beyond) either end it is 0.
pub fn radius_m<C: Float>(wavelen_m: C, d1_m: C, total_m: C) -> C {
    let d2_m = total_m - d1_m;
    if d1_m <= C::zero() || d2_m <= C::zero() {
        return C::zero();
    }
    (wavelen_m * d1_m * d2_m / (d1_m + d2_m)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::radius_m;
    use crate::constants::wavelength_m;

    #[test]
    fn test_radius_at_path_ends_is_zero() {
        let wavelen_m = wavelength_m(900.0).unwrap();
        assert_eq!(0.0, radius_m(wavelen_m, 0.0, 1e3));
        assert_eq!(0.0, radius_m(wavelen_m, 1e3, 1e3));
    }

    #[test]
    fn test_radius_at_midpoint() {
        let wavelen_m = wavelength_m(900.0).unwrap();
        assert_eq!(9.125551094469735, radius_m(wavelen_m, 500.0, 1e3));
    }

    #[test]
    fn test_radius_shrinks_away_from_midpoint() {
        let wavelen_m = wavelength_m(900.0).unwrap();
        let total_m = 1e3;
        let mid = radius_m(wavelen_m, 500.0, total_m);
        assert!(radius_m(wavelen_m, 250.0, total_m) < mid);
        assert!(radius_m(wavelen_m, 750.0, total_m) < mid);
        assert!(radius_m(wavelen_m, 250.0, total_m) > radius_m(wavelen_m, 100.0, total_m));
    }
}
