//! Analytic partial derivatives of the tangential position with respect to
//! the seven orbital elements, following Goldin & Makarov (2006).
//!
//! The partials are the Jacobian entries of a nonlinear least-squares orbit
//! fit: for each observation epoch the optimizer needs the full set
//! `(∂x/∂θ, ∂y/∂θ)` for θ ∈ {a, e, i, ω, Ω, P, T0}. The element partials of
//! the eccentric anomaly come from implicit differentiation of Kepler's
//! equation `M = E − e·sin(E)`; the angle partials follow from
//! differentiating the Thiele-Innes constants, all under the single sign
//! convention of [`crate::thiele_innes`].

use nalgebra::DMatrix;

use crate::constants::{DPI, ELEMENT_COUNT};
use crate::kepler::KeplerSolver;
use crate::orbit_elements::{ElementName, OrbitElements, ELEMENT_ORDER};
use crate::photorbit_errors::PhotorbitError;
use crate::position;
use crate::thiele_innes::{inclination_partials, ThieleInnesConstants};

/// Pair `(∂x/∂θ, ∂y/∂θ)` for one element at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionPartial {
    pub dx: f64,
    pub dy: f64,
}

/// Partials of the tangential position with respect to all seven elements
/// at a single epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementPartials {
    pub semi_major_axis: PositionPartial,
    pub eccentricity: PositionPartial,
    pub inclination: PositionPartial,
    pub periapsis_argument: PositionPartial,
    pub ascending_node_longitude: PositionPartial,
    pub period: PositionPartial,
    pub periapsis_time: PositionPartial,
}

impl ElementPartials {
    /// Partial pair of a single element by name.
    pub fn get(&self, name: ElementName) -> PositionPartial {
        match name {
            ElementName::SemiMajorAxis => self.semi_major_axis,
            ElementName::Eccentricity => self.eccentricity,
            ElementName::Inclination => self.inclination,
            ElementName::PeriapsisArgument => self.periapsis_argument,
            ElementName::AscendingNodeLongitude => self.ascending_node_longitude,
            ElementName::Period => self.period,
            ElementName::PeriapsisTime => self.periapsis_time,
        }
    }
}

/// ∂E/∂P = 2π(t − T0) / (P²(e·cos(E) − 1))
fn ecc_anomaly_wrt_period(elements: &OrbitElements, t: f64, ecc_anom: f64) -> f64 {
    DPI * (t - elements.periapsis_time)
        / (elements.period.powi(2) * (elements.eccentricity * ecc_anom.cos() - 1.0))
}

/// ∂E/∂e = sin(E) / (1 − e·cos(E))
fn ecc_anomaly_wrt_eccentricity(eccentricity: f64, ecc_anom: f64) -> f64 {
    ecc_anom.sin() / (1.0 - eccentricity * ecc_anom.cos())
}

/// ∂E/∂T0 = −2π / (P(1 − e·cos(E)))
fn ecc_anomaly_wrt_periapsis_time(elements: &OrbitElements, ecc_anom: f64) -> f64 {
    -DPI / (elements.period * (1.0 - elements.eccentricity * ecc_anom.cos()))
}

/// Analytic partials of the position `(x, y)` at epoch `t`.
///
/// Arguments
/// ---------------
/// * `elements`: the seven orbital elements
/// * `solver`: the Kepler-equation solver
/// * `t`: epoch, same time unit as `P` and `T0`
/// * `x`, `y`: precomputed tangential position at the same epoch (see
///   [`crate::position::position`])
///
/// Return
/// ----------
/// * All seven partial pairs, or a domain error for invalid elements or a
///   zero semi-major axis, or the solver's error on non-convergence.
pub fn element_partials<S: KeplerSolver>(
    elements: &OrbitElements,
    solver: &S,
    t: f64,
    x: f64,
    y: f64,
) -> Result<ElementPartials, PhotorbitError> {
    elements.validate()?;
    // Guard the division in ∂x/∂a before evaluating anything.
    if elements.semi_major_axis == 0.0 {
        return Err(PhotorbitError::ZeroSemiMajorAxis);
    }

    let ecc = elements.eccentricity;
    let ecc_anom = solver.solve(position::mean_anomaly(elements, t), ecc)?;
    let constants = ThieleInnesConstants::new(elements);

    let sqrt_one_minus_e2 = (1.0 - ecc * ecc).sqrt();
    let fac1 = ecc_anom.sin();
    let fac2 = sqrt_one_minus_e2 * ecc_anom.cos();
    let fac3 = ecc_anom.cos() - ecc;
    let fac6 = sqrt_one_minus_e2 * ecc_anom.sin();

    let de_dp = ecc_anomaly_wrt_period(elements, t, ecc_anom);
    let de_de = ecc_anomaly_wrt_eccentricity(ecc, ecc_anom);
    let de_dt0 = ecc_anomaly_wrt_periapsis_time(elements, ecc_anom);

    let fac4 = 1.0 + fac1 * de_de;
    let fac5 = fac1 * fac3 / (sqrt_one_minus_e2 * (1.0 - ecc * ecc_anom.cos()));

    // ∂(x, y)/∂E, shared by the P and T0 chains.
    let dx_decc_anom = -constants.a * fac1 + constants.f * fac2;
    let dy_decc_anom = -constants.b * fac1 + constants.g * fac2;

    let (da_di, db_di, df_di, dg_di) = inclination_partials(elements);

    Ok(ElementPartials {
        semi_major_axis: PositionPartial {
            dx: x / elements.semi_major_axis,
            dy: y / elements.semi_major_axis,
        },
        eccentricity: PositionPartial {
            dx: -constants.a * fac4 + constants.f * fac5,
            dy: -constants.b * fac4 + constants.g * fac5,
        },
        inclination: PositionPartial {
            dx: fac3 * da_di + fac6 * df_di,
            dy: fac3 * db_di + fac6 * dg_di,
        },
        periapsis_argument: PositionPartial {
            dx: fac3 * constants.f - fac6 * constants.a,
            dy: fac3 * constants.g - fac6 * constants.b,
        },
        ascending_node_longitude: PositionPartial {
            dx: -fac3 * constants.b - fac6 * constants.g,
            dy: fac3 * constants.a + fac6 * constants.f,
        },
        period: PositionPartial {
            dx: dx_decc_anom * de_dp,
            dy: dy_decc_anom * de_dp,
        },
        periapsis_time: PositionPartial {
            dx: dx_decc_anom * de_dt0,
            dy: dy_decc_anom * de_dt0,
        },
    })
}

/// Assemble the design matrix of a least-squares fit over a set of epochs.
///
/// The matrix has shape `(2·N, 7)`: row `2k` holds the `∂x/∂θ` partials at
/// epoch `k` and row `2k + 1` the `∂y/∂θ` partials, with the columns in the
/// canonical element order `(a, e, i, ω, Ω, P, T0)`.
pub fn design_matrix<S: KeplerSolver>(
    elements: &OrbitElements,
    solver: &S,
    times: &[f64],
) -> Result<DMatrix<f64>, PhotorbitError> {
    let (xs, ys) = position::positions(elements, solver, times)?;

    let mut matrix = DMatrix::zeros(2 * times.len(), ELEMENT_COUNT);
    for (k, &t) in times.iter().enumerate() {
        let partials = element_partials(elements, solver, t, xs[k], ys[k])?;
        for (col, &name) in ELEMENT_ORDER.iter().enumerate() {
            let pair = partials.get(name);
            matrix[(2 * k, col)] = pair.dx;
            matrix[(2 * k + 1, col)] = pair.dy;
        }
    }
    Ok(matrix)
}
