//! Tangential position of the photocenter orbit.
//!
//! Chains the mean anomaly, the Kepler solve and the Thiele-Innes
//! projection into the sky-plane coordinates `(x, y)`.

use crate::constants::DPI;
use crate::kepler::KeplerSolver;
use crate::orbit_elements::OrbitElements;
use crate::photorbit_errors::PhotorbitError;
use crate::thiele_innes::ThieleInnesConstants;

/// Mean anomaly `M = 2π(t − T0)/P` at epoch `t`.
///
/// No modular reduction is applied: downstream trigonometry is periodic and
/// the Kepler solver keeps the whole-turn offset. The caller must have
/// validated `P > 0`.
pub(crate) fn mean_anomaly(elements: &OrbitElements, t: f64) -> f64 {
    DPI * (t - elements.periapsis_time) / elements.period
}

/// Projection of the orbital-plane position onto the sky plane, shared by
/// the scalar and vectorized entry points.
pub(crate) fn project<S: KeplerSolver>(
    elements: &OrbitElements,
    constants: &ThieleInnesConstants,
    solver: &S,
    t: f64,
) -> Result<(f64, f64), PhotorbitError> {
    let ecc = elements.eccentricity;
    let ecc_anom = solver.solve(mean_anomaly(elements, t), ecc)?;

    let fac1 = ecc_anom.cos() - ecc;
    let fac2 = (1.0 - ecc * ecc).sqrt() * ecc_anom.sin();

    Ok((
        constants.a * fac1 + constants.f * fac2,
        constants.b * fac1 + constants.g * fac2,
    ))
}

/// Tangential coordinates `(x, y)` of the photocenter at epoch `t`.
///
/// Arguments
/// ---------------
/// * `elements`: the seven orbital elements
/// * `solver`: the Kepler-equation solver
/// * `t`: epoch, same time unit as `P` and `T0`
///
/// Return
/// ----------
/// * The pair `(x, y)` in the unit of the semi-major axis, or a domain error
///   for invalid elements, or the solver's error on non-convergence.
pub fn position<S: KeplerSolver>(
    elements: &OrbitElements,
    solver: &S,
    t: f64,
) -> Result<(f64, f64), PhotorbitError> {
    elements.validate()?;
    project(elements, &ThieleInnesConstants::new(elements), solver, t)
}

/// Vectorized form of [`position`]: one `(x, y)` pair per epoch, in order.
///
/// The Thiele-Innes constants are computed once for the whole batch; each
/// epoch is an independent pure evaluation.
pub fn positions<S: KeplerSolver>(
    elements: &OrbitElements,
    solver: &S,
    times: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), PhotorbitError> {
    elements.validate()?;
    let constants = ThieleInnesConstants::new(elements);

    let mut xs = Vec::with_capacity(times.len());
    let mut ys = Vec::with_capacity(times.len());
    for &t in times {
        let (x, y) = project(elements, &constants, solver, t)?;
        xs.push(x);
        ys.push(y);
    }
    Ok((xs, ys))
}

/// Sample the projected orbit path over one full period.
///
/// Epochs run uniformly from `T0` to `T0 + P` inclusive, so for
/// `n_samples >= 2` the first and last points close the ellipse.
pub fn track<S: KeplerSolver>(
    elements: &OrbitElements,
    solver: &S,
    n_samples: usize,
) -> Result<(Vec<f64>, Vec<f64>), PhotorbitError> {
    elements.validate()?;

    let step = elements.period / (n_samples.saturating_sub(1)).max(1) as f64;
    let times: Vec<f64> = (0..n_samples)
        .map(|k| elements.periapsis_time + step * k as f64)
        .collect();
    positions(elements, solver, &times)
}
