//! Shared primitive types used across the generator.

/// A calendar date as it appears in the forecast document (`YYYY-MM-DD`).
pub type DateKey = String;

/// A unique, slugified worker identifier.
pub type WorkerId = String;

/// Number of workers required in a staffing window.
pub type Headcount = u32;
