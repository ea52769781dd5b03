#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Cable
//!
//! Deployment dynamics of a long flexible tether connecting an orbiting
//! satellite to a free end mass. The cable is a chain of lumped mass points
//! joined by unilateral rope links that pull but never push, advanced by a
//! semi-implicit Euler integrator under central gravity and reel friction.
//!
//! ## Key components
//!
//! - [`Cable`] owns the chain, the deployment-length state machine, and the
//!   per-link tension telemetry; [`Cable::step`] is the only mutator.
//! - [`ForceField`] and [`FrictionModel`] are the two injected capabilities:
//!   gravity sampled per point, reel resistance sampled per step. The
//!   defaults are [`PointGravity`] and [`SpoolFriction`]; plain closures
//!   work too.
//! - [`CableConfig`] gathers the construction inputs, with `Default` set to
//!   the reference low-orbit deployment case.
//!
//! ## Usage
//!
//! Callers drive bursts of small sub-steps between telemetry reads:
//!
//! ```rust
//! use cable::{Cable, CableConfig, PointGravity, SpoolFriction};
//!
//! let config = CableConfig { point_count: 100, ..CableConfig::default() };
//! let friction = SpoolFriction::new(0.0, 1.0, config.target_length);
//! let mut cable = Cable::new(config, PointGravity::default(), friction)?;
//!
//! cable.run(1e-4, 200)?;
//! let deployed = cable.deployed_length();
//! let tensions = cable.tensions();
//! # assert!(tensions.iter().all(|&t| t >= 0.0));
//! # assert!(deployed >= 0.0);
//! # Ok::<(), cable::CableError>(())
//! ```

pub mod cable;
pub mod error;
pub mod forces;
mod integrator;
pub mod types;

pub use cable::Cable;
pub use error::CableError;
pub use forces::{ForceField, FrictionModel, PointGravity, SpoolFriction, EARTH_MU};
pub use types::{CableConfig, MassPoint, REFERENCE_ORBIT_RADIUS};

pub use glam::DVec3;
