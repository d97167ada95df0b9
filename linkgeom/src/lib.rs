//! # Point-to-Point Link Profile Geometry
//!
//! `linkgeom` computes the vertical geometry of a point-to-point
//! radio link over a sequence of elevation samples: effective-earth
//! curvature, terrain and line-of-sight heights, the first fresnel
//! zone, and the worst clearance along the path.
//!
//! Everything in this crate is a pure function of its inputs. Sample
//! acquisition (DEM lookup), rendering, and propagation-loss models
//! all live elsewhere and consume the values produced here.

pub mod constants;
pub mod curvature;
mod error;
pub mod fresnel;
pub mod geodesy;
pub mod profile;
pub mod summary;

pub use {
    crate::{
        error::ProfileError,
        profile::{LinkEnd, LinkProfile, LinkProfileBuilder, Obstruction, ProfileSample},
        summary::{derive_summary, LinkSummary},
    },
    geo,
};
