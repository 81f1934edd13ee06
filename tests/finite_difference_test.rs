//! Validation of every analytic partial against centered finite differences
//! of the position model, for all seven elements and several orbit regimes.

mod common;

use approx::assert_relative_eq;
use photorbit::jacobian::element_partials;
use photorbit::kepler::NewtonKeplerSolver;
use photorbit::orbit_elements::{OrbitElements, ELEMENT_ORDER};
use photorbit::position::position;

const STEP: f64 = 1e-6;

/// Centered finite difference of `(x, y)` with respect to element `index`.
fn finite_difference(
    elements: &OrbitElements,
    solver: &NewtonKeplerSolver,
    t: f64,
    index: usize,
) -> (f64, f64) {
    let mut upper = elements.to_array();
    upper[index] += STEP;
    let mut lower = elements.to_array();
    lower[index] -= STEP;

    let (x_up, y_up) = position(&OrbitElements::from(upper), solver, t).unwrap();
    let (x_lo, y_lo) = position(&OrbitElements::from(lower), solver, t).unwrap();

    ((x_up - x_lo) / (2.0 * STEP), (y_up - y_lo) / (2.0 * STEP))
}

fn check_all_partials(elements: &OrbitElements, epochs: &[f64]) {
    let solver = NewtonKeplerSolver::default();

    for &t in epochs {
        let (x, y) = position(elements, &solver, t).unwrap();
        let partials = element_partials(elements, &solver, t, x, y).unwrap();

        for (index, &name) in ELEMENT_ORDER.iter().enumerate() {
            let (fd_dx, fd_dy) = finite_difference(elements, &solver, t, index);
            let pair = partials.get(name);

            assert_relative_eq!(pair.dx, fd_dx, epsilon = 1e-7, max_relative = 1e-4);
            assert_relative_eq!(pair.dy, fd_dy, epsilon = 1e-7, max_relative = 1e-4);
        }
    }
}

#[test]
fn test_partials_moderate_orbit() {
    let elements = common::moderate_orbit();
    check_all_partials(&elements, &[1995.2, 1996.9, 1999.31, 2001.0, 2002.48]);
}

#[test]
fn test_partials_eccentric_orbit() {
    let elements = common::eccentric_orbit();
    check_all_partials(&elements, &[2004.1, 2010.6, 2017.0, 2025.33]);
}

#[test]
fn test_partials_near_face_on_orbit() {
    let elements = common::near_face_on_orbit();
    check_all_partials(&elements, &[2000.1, 2000.4, 2000.77]);
}
