//! Effective-earth curvature.
//!
//! Atmospheric refraction bends radio waves; multiplying the true
//! earth radius by a k-factor (nominally 4/3) and treating the ray as
//! straight is the standard approximation. The bulge below is the
//! height of that effective surface above the chord between the path
//! endpoints.

use crate::constants::MEAN_EARTH_RADIUS;
use num_traits::Float;

/// Returns the effective earth radius, in meters, for refraction
/// factor `k_factor`.
pub fn effective_radius_m<C: Float>(k_factor: C) -> C {
    k_factor * C::from(MEAN_EARTH_RADIUS).unwrap()
}

/// Returns the earth bulge, in meters, at `x_m` meters along a
/// `total_m`-meter path.
///
/// Zero at both path ends, maximal at the midpoint. `k_factor` must
/// be positive; callers validate it.
pub fn bulge_m<C: Float>(x_m: C, total_m: C, k_factor: C) -> C {
    let two = C::one() + C::one();
    x_m * (total_m - x_m) / (two * effective_radius_m(k_factor))
}

#[cfg(test)]
mod tests {
    use super::{bulge_m, effective_radius_m};
    use approx::assert_relative_eq;

    const K: f64 = 4.0 / 3.0;

    #[test]
    fn test_effective_radius() {
        assert_relative_eq!(6_371_000.0, effective_radius_m(1.0));
        assert_relative_eq!(8_494_666.666_666_666, effective_radius_m(K));
    }

    #[test]
    fn test_bulge_is_zero_at_path_ends() {
        for total_m in [1.0, 1e3, 111e3] {
            assert_relative_eq!(0.0, bulge_m(0.0, total_m, K));
            assert_relative_eq!(0.0, bulge_m(total_m, total_m, K));
        }
    }

    #[test]
    fn test_bulge_symmetry() {
        let total_m = 111e3;
        for x_m in [1.0, 10e3, 27.75e3, 55.5e3] {
            assert_relative_eq!(bulge_m(x_m, total_m, K), bulge_m(total_m - x_m, total_m, K));
        }
    }

    #[test]
    fn test_bulge_maximal_at_midpoint() {
        let total_m = 111e3;
        let mid = bulge_m(total_m / 2.0, total_m, K);
        for x_m in [1.0, 10e3, 27.75e3, 54e3, 57e3, 110e3] {
            assert!(bulge_m(x_m, total_m, K) <= mid);
        }
        // 55.5 km each way on a 4/3-earth is a little over 181 m of hump.
        assert_relative_eq!(181.304_936, mid, epsilon = 1e-3);
    }

    #[test]
    fn test_doubling_k_halves_the_bulge() {
        let total_m = 50e3;
        let x_m = 20e3;
        assert_relative_eq!(
            bulge_m(x_m, total_m, K) / 2.0,
            bulge_m(x_m, total_m, 2.0 * K)
        );
    }
}
