//! Synthetic workforce data for staff-scheduling optimizers.
//!
//! Converts a demand forecast into required-staffing windows and fabricates a
//! pool of candidate workers with randomized availability.

pub mod availability;
pub mod block;
pub mod clock;
pub mod config;
pub mod error;
pub mod forecast;
pub mod generator;
pub mod identity;
pub mod rng;
pub mod staffing;
pub mod types;
