//! # Constants and type definitions for Photorbit
//!
//! This module centralizes the **numerical constants** and **common type
//! definitions** used throughout the `Photorbit` library.
//!
//! ## Overview
//!
//! - Trigonometric constants
//! - Semantic aliases for the scalar quantities handled by the orbit model
//!
//! The orbit model is unit-agnostic: the semi-major axis carries whatever
//! length unit the caller measures the photocenter displacement in
//! (typically mas), and the period and periastron time share one time unit
//! (typically years). No implicit conversion happens anywhere in the crate.

// -------------------------------------------------------------------------------------------------
// Numerical constants
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of classical orbital elements handled by the model
pub const ELEMENT_COUNT: usize = 7;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;

/// Epoch or duration in the caller's time unit (shared by `P` and `T0`)
pub type Epoch = f64;
