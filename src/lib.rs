//! # Photorbit
//!
//! Analytic photocenter-orbit model for astrometric orbit fitting.
//!
//! Given the seven classical orbital elements `(a, e, i, ω, Ω, P, T0)` of a
//! binary-star or exoplanet-host photocenter orbit, this crate computes the
//! tangential-plane sky position `(x, y)` as a function of time and the
//! analytic partial derivatives of that position with respect to each
//! element — the Jacobian entries consumed by a nonlinear least-squares fit
//! of the elements to astrometric observations.
//!
//! The formulation follows the Thiele-Innes constants of
//! Goldin & Makarov, ApJSS (2006); the Kepler equation is solved by an
//! injectable [`kepler::KeplerSolver`] collaborator. The outer optimizer,
//! observation loading and plotting are out of scope.

pub mod constants;
pub mod jacobian;
pub mod kepler;
pub mod orbit_elements;
pub mod photorbit_errors;
pub mod position;
pub mod thiele_innes;
