use std::f64::consts::PI;

use roots::{find_root_newton_raphson, SimpleConvergency};

use crate::constants::DPI;
use crate::photorbit_errors::PhotorbitError;

/// Retourne la valeur principale d'un angle en radians dans [0, 2π].
pub fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI) // rem_euclid assure un résultat dans [0, 2π]
}

/// Solver for Kepler's equation `M = E − e·sin(E)`.
///
/// The position model and the Jacobian builder take the solver as an explicit
/// collaborator instead of a module-level singleton, so tests can substitute
/// a deterministic stub and callers can swap the root-finding strategy.
pub trait KeplerSolver {
    /// Return the eccentric anomaly `E` for the given mean anomaly and
    /// eccentricity, satisfying `|E − e·sin(E) − M| < tolerance`.
    ///
    /// Arguments
    /// ---------------
    /// * `mean_anomaly`: mean anomaly `M` in radians, any real value
    /// * `eccentricity`: eccentricity `e`, must be in [0, 1)
    ///
    /// Return
    /// ----------
    /// * The eccentric anomaly in radians, carrying the same whole-turn
    ///   offset as `mean_anomaly`, or a root-finding error if the iteration
    ///   did not converge.
    fn solve(&self, mean_anomaly: f64, eccentricity: f64) -> Result<f64, PhotorbitError>;
}

/// Newton–Raphson Kepler solver.
///
/// Solves `R(E) = E − e·sin(E) − M = 0` with `R'(E) = 1 − e·cos(E)`.
#[derive(Debug, Clone, Copy)]
pub struct NewtonKeplerSolver {
    /// Convergence criterion on the Newton step
    pub eps: f64,
    /// Iteration budget before reporting non-convergence
    pub max_iter: usize,
}

impl Default for NewtonKeplerSolver {
    fn default() -> Self {
        NewtonKeplerSolver {
            eps: f64::EPSILON * 1e2, // ~2e-14
            max_iter: 50,
        }
    }
}

impl KeplerSolver for NewtonKeplerSolver {
    fn solve(&self, mean_anomaly: f64, eccentricity: f64) -> Result<f64, PhotorbitError> {
        // Solve on the principal value of M; E carries the same whole-turn
        // offset, so it is restored afterwards.
        let m = principal_angle(mean_anomaly);
        let turns = mean_anomaly - m;

        // Fonction R(E) = E - e·sin(E) - M
        let f = |ecc_anom: f64| -> f64 { ecc_anom - eccentricity * ecc_anom.sin() - m };

        // Dérivée R'(E)
        let df = |ecc_anom: f64| -> f64 { 1.0 - eccentricity * ecc_anom.cos() };

        // Starting point: M is adequate for moderate eccentricities, π is the
        // safer seed close to e = 1 where Newton can overshoot from M.
        let x0 = if eccentricity < 0.8 { m } else { PI };

        let mut tol = SimpleConvergency {
            eps: self.eps,
            max_iter: self.max_iter,
        };

        let ecc_anom = find_root_newton_raphson(x0, &f, &df, &mut tol)?;
        Ok(ecc_anom + turns)
    }
}
