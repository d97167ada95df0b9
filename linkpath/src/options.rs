use anyhow::{anyhow, Error as AnyError};
use clap::{Parser, Subcommand};
use geo::geometry::Coord;
use std::{path::PathBuf, str::FromStr};

/// Generate point-to-point radio link profiles.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Elevation sample file; one "distance_m,ground_m" line per
    /// sample, distances strictly increasing from the transmit end.
    #[arg(short, long)]
    pub samples: PathBuf,

    /// Transmit end "lat,lon,agl", where 'agl' is antenna height
    /// above ground in meters.
    #[arg(long)]
    pub tx: LatLonAgl,

    /// Receive end "lat,lon,agl", where 'agl' is antenna height
    /// above ground in meters.
    #[arg(long)]
    pub rx: LatLonAgl,

    /// Carrier frequency, MHz.
    #[arg(short, long, default_value_t = 900.0)]
    pub freq_mhz: f64,

    /// Effective-earth-radius factor.
    #[arg(short, long, default_value_t = 4.0 / 3.0)]
    pub k_factor: f64,

    /// Reference floor padding below the lowest ground sample, in
    /// meters. Only moves the plot floor.
    #[arg(long, default_value_t = 50.0)]
    pub floor_pad: f64,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Clone, Debug, Copy)]
pub struct LatLonAgl(pub Coord<f64>, pub f64);

impl FromStr for LatLonAgl {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let mut fields = s.splitn(3, ',');
        let mut field = || {
            fields
                .next()
                .ok_or_else(|| anyhow!("not a valid lat,lon,agl"))
        };
        let lat = f64::from_str(field()?.trim())?;
        let lon = f64::from_str(field()?.trim())?;
        let agl = f64::from_str(field()?.trim())?;
        Ok(Self(Coord { y: lat, x: lon }, agl))
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print profile series to stdout.
    Csv,

    /// Print profile series and summary as JSON.
    Json,

    /// Plot terrain, line of sight, and fresnel bottom to terminal.
    Plot,

    /// Print link summary metrics.
    Summary,
}
