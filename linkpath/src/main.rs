mod options;

use anyhow::{anyhow, Context, Error as AnyError};
use clap::Parser;
use linkgeom::{derive_summary, LinkEnd, LinkProfile, LinkSummary, ProfileSample};
use options::{Cli, Command as CliCmd};
use serde::Serialize;
use std::{io::Write, path::Path};
use textplots::{Chart, Plot, Shape};

fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();

    env_logger::init();

    let samples = read_samples(&cli.samples)?;
    let tx = LinkEnd {
        coord: cli.tx.0,
        agl_m: cli.tx.1,
    };
    let rx = LinkEnd {
        coord: cli.rx.0,
        agl_m: cli.rx.1,
    };

    let profile = LinkProfile::builder()
        .tx(tx)
        .rx(rx)
        .freq_mhz(cli.freq_mhz)
        .k_factor(cli.k_factor)
        .floor_pad(cli.floor_pad)
        .samples(samples)
        .build()?;
    let summary = derive_summary(&tx, &rx, &profile);

    match cli.cmd {
        CliCmd::Csv => print_csv(&profile)?,
        CliCmd::Json => print_json(&profile, &summary)?,
        CliCmd::Plot => plot_ascii(&profile),
        CliCmd::Summary => print_summary(&summary),
    };
    Ok(())
}

/// Reads "distance_m,ground_m" sample lines. Blank lines and lines
/// starting with '#' are skipped.
fn read_samples(path: &Path) -> Result<Vec<ProfileSample>, AnyError> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading samples from {}", path.display()))?;

    let mut samples = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (distance_str, ground_str) = line.split_once(',').ok_or_else(|| {
            anyhow!(
                "{}:{}: expected 'distance_m,ground_m'",
                path.display(),
                idx + 1
            )
        })?;
        samples.push(ProfileSample {
            distance_m: distance_str
                .trim()
                .parse()
                .with_context(|| format!("{}:{}: bad distance", path.display(), idx + 1))?,
            ground_m: ground_str
                .trim()
                .parse()
                .with_context(|| format!("{}:{}: bad ground elevation", path.display(), idx + 1))?,
        });
    }
    Ok(samples)
}

fn print_csv(profile: &LinkProfile) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Distance,Terrain,LOS,FresnelTop,FresnelBottom")?;
    for ((((distance, terrain), los), top), bottom) in profile
        .distances_m
        .iter()
        .zip(profile.terrain_m.iter())
        .zip(profile.los_m.iter())
        .zip(profile.fresnel_top_m.iter())
        .zip(profile.fresnel_bot_m.iter())
    {
        writeln!(stdout, "{distance},{terrain},{los},{top},{bottom}")?;
    }
    Ok(())
}

fn print_json(profile: &LinkProfile, summary: &LinkSummary) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        series: &'a LinkProfile,
        summary: &'a LinkSummary,
    }

    let json = serde_json::to_string(&JsonReport {
        series: profile,
        summary,
    })?;
    println!("{json}");
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn plot_ascii(profile: &LinkProfile) {
    let to_points = |values: &[f64]| -> Vec<(f32, f32)> {
        profile
            .distances_m
            .iter()
            .zip(values.iter())
            .map(|(distance, value)| (*distance as f32, *value as f32))
            .collect()
    };
    let terrain = to_points(&profile.terrain_m);
    let los = to_points(&profile.los_m);
    let fresnel_bot = to_points(&profile.fresnel_bot_m);

    Chart::new(300, 150, 0.0, profile.distance_m as f32)
        .lineplot(&Shape::Lines(&terrain))
        .lineplot(&Shape::Lines(&los))
        .lineplot(&Shape::Lines(&fresnel_bot))
        .display();
}

fn print_summary(summary: &LinkSummary) {
    println!("distance:  {:.1} m", summary.distance_m);
    println!("azimuth:   {:.2}°", summary.azimuth_deg);
    println!("elevation: {:.3}°", summary.elev_angle_deg);

    let obstruction = &summary.obstruction;
    if obstruction.exists {
        println!(
            "obstructed at {:.1} m: worst clearance {:.1} m ({:.2} F1)",
            obstruction.at_m, obstruction.clearance_m, obstruction.fresnel_fraction
        );
    } else {
        println!(
            "clear: worst clearance {:.1} m at {:.1} m ({:.2} F1)",
            obstruction.clearance_m, obstruction.at_m, obstruction.fresnel_fraction
        );
    }
}
