use thiserror::Error;

/// Errors surfaced by the orbit model.
///
/// Domain errors are detected before any division or root-find takes place;
/// a root-finding failure from the Kepler solver is propagated unchanged.
/// The caller (typically the least-squares optimizer driving the fit) is
/// expected to reject the offending element vector rather than abort.
#[derive(Error, Debug, PartialEq)]
pub enum PhotorbitError {
    #[error("Eccentricity {0} is outside the supported range [0, 1)")]
    EccentricityOutOfRange(f64),

    #[error("Orbital period must be strictly positive, got {0}")]
    NonPositivePeriod(f64),

    #[error("Semi-major axis must be non-zero to evaluate partial derivatives")]
    ZeroSemiMajorAxis,

    #[error("Orbit element `{0}` is not finite")]
    NonFiniteElement(&'static str),

    #[error("ROOTS finding error: {0}")]
    RootFindingError(#[from] roots::SearchError),
}
