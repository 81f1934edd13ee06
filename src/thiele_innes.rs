use crate::orbit_elements::OrbitElements;

/// Thiele-Innes constants, Eq. (A5) of Goldin & Makarov (2006).
///
/// The four constants rotate the orbital-plane ellipse into the tangential
/// sky plane: with `fac1 = cos(E) − e` and `fac2 = sqrt(1−e²)·sin(E)`,
/// `x = A·fac1 + F·fac2` and `y = B·fac1 + G·fac2`.
///
/// The sign convention below is the single convention of the whole crate;
/// every partial derivative in [`crate::jacobian`] is derived under it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThieleInnesConstants {
    pub a: f64,
    pub b: f64,
    pub f: f64,
    pub g: f64,
}

impl ThieleInnesConstants {
    /// Compute the constants from the geometric elements `(a, i, ω, Ω)`.
    /// Pure and total: defined for every finite input.
    pub fn new(elements: &OrbitElements) -> Self {
        let (sin_omega, cos_omega) = elements.periapsis_argument.sin_cos();
        let (sin_node, cos_node) = elements.ascending_node_longitude.sin_cos();
        let cos_incl = elements.inclination.cos();
        let axis = elements.semi_major_axis;

        ThieleInnesConstants {
            a: axis * (cos_omega * cos_node - sin_omega * sin_node * cos_incl),
            b: axis * (cos_omega * sin_node + sin_omega * cos_node * cos_incl),
            f: -axis * (sin_omega * cos_node + cos_omega * sin_node * cos_incl),
            g: -axis * (sin_omega * sin_node - cos_omega * cos_node * cos_incl),
        }
    }
}

/// Partial derivatives `(∂A/∂i, ∂B/∂i, ∂F/∂i, ∂G/∂i)`.
///
/// The inclination enters the four constants only through `cos(i)`, so each
/// partial is the matching `cos(i)` coefficient times `−sin(i)`.
pub fn inclination_partials(elements: &OrbitElements) -> (f64, f64, f64, f64) {
    let (sin_omega, cos_omega) = elements.periapsis_argument.sin_cos();
    let (sin_node, cos_node) = elements.ascending_node_longitude.sin_cos();
    let sin_incl = elements.inclination.sin();
    let axis = elements.semi_major_axis;

    (
        axis * sin_omega * sin_node * sin_incl,
        -axis * sin_omega * cos_node * sin_incl,
        axis * cos_omega * sin_node * sin_incl,
        -axis * cos_omega * cos_node * sin_incl,
    )
}
