//! # Tethersim
//!
//! Headless tether deployment runner. Maps the command-line flags onto a
//! [`cable::CableConfig`], then drives the simulation in bursts of
//! sub-steps, logging telemetry between bursts.

mod app;

use anyhow::Result;
use clap::Parser;

/// Simulate a tethered end mass deploying from an orbiting satellite.
#[derive(Parser, Debug)]
#[command(name = "tethersim", version, about)]
pub struct Cli {
    /// Cable length in m.
    #[arg(short = 'l', long, default_value_t = 100.0)]
    pub length: f64,

    /// Cable density in kg/m.
    #[arg(short = 'd', long, default_value_t = 1e-3)]
    pub linear_density: f64,

    /// Internal timestep of the simulation in s. Smaller numbers lead to a
    /// slower but more accurate simulation.
    #[arg(short = 't', long, default_value_t = 1e-4)]
    pub timestep: f64,

    /// Number of simulation points. Higher numbers lead to a slower but
    /// more accurate simulation.
    #[arg(short = 'p', long, default_value_t = 1000)]
    pub points: usize,

    /// Deployment angle in degrees: ANGX in the orbital plane, ANGY out of
    /// it. 0 0 is straight down.
    #[arg(
        short = 'a',
        long,
        num_args = 2,
        value_names = ["ANGX", "ANGY"],
        default_values_t = [0.0, 0.0],
        allow_negative_numbers = true
    )]
    pub deployment_angle: Vec<f64>,

    /// Deployment speed in m/s.
    #[arg(short = 's', long, default_value_t = 10.0)]
    pub deployment_speed: f64,

    /// Weight of the end mass in kg.
    #[arg(short = 'w', long, default_value_t = 0.05)]
    pub end_mass: f64,

    /// Weight of the satellite in kg.
    #[arg(short = 'W', long, default_value_t = 1.30)]
    pub sat_mass: f64,

    /// Frictional force of deployment in N.
    #[arg(short = 'f', long, default_value_t = 0.0)]
    pub friction: f64,

    /// Braking force in N, applied once the deployed cable reaches the
    /// target length.
    #[arg(short = 'b', long, default_value_t = 1.0)]
    pub braking_force: f64,

    /// Simulated seconds to run.
    #[arg(long, default_value_t = 30.0)]
    pub duration: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    app::run(&cli)
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_reference_case() {
        let cli = Cli::parse_from(["tethersim"]);
        assert_eq!(cli.points, 1000);
        assert!((cli.length - 100.0).abs() < f64::EPSILON);
        assert!((cli.linear_density - 1e-3).abs() < f64::EPSILON);
        assert!((cli.timestep - 1e-4).abs() < f64::EPSILON);
        assert_eq!(cli.deployment_angle, vec![0.0, 0.0]);
        assert!((cli.deployment_speed - 10.0).abs() < f64::EPSILON);
        assert!((cli.end_mass - 0.05).abs() < f64::EPSILON);
        assert!((cli.sat_mass - 1.30).abs() < f64::EPSILON);
        assert!(cli.friction.abs() < f64::EPSILON);
        assert!((cli.braking_force - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn speed_flag_sets_deployment_speed() {
        let cli = Cli::parse_from(["tethersim", "-s", "2.5", "-l", "40"]);
        assert!((cli.deployment_speed - 2.5).abs() < f64::EPSILON);
        assert!((cli.length - 40.0).abs() < f64::EPSILON);
    }
}
