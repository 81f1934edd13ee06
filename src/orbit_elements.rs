use serde::{Deserialize, Serialize};

use crate::photorbit_errors::PhotorbitError;

/// Photocenter orbital elements
/// Units:
/// * `semi_major_axis`: caller's length unit (typically mas)
/// * `eccentricity`: unitless
/// * `inclination`: radians (zero for face-on)
/// * `periapsis_argument`: radians
/// * `ascending_node_longitude`: radians (position angle of the node)
/// * `period`: caller's time unit (typically years)
/// * `periapsis_time`: same time unit as `period`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub periapsis_argument: f64,
    pub ascending_node_longitude: f64,
    pub period: f64,
    pub periapsis_time: f64,
}

/// Name of one of the seven classical elements, in the canonical order
/// `(a, e, i, ω, Ω, P, T0)` used by every vector interface of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementName {
    SemiMajorAxis,
    Eccentricity,
    Inclination,
    PeriapsisArgument,
    AscendingNodeLongitude,
    Period,
    PeriapsisTime,
}

/// Canonical element ordering, shared by [`OrbitElements::to_array`] and the
/// design-matrix columns.
pub const ELEMENT_ORDER: [ElementName; 7] = [
    ElementName::SemiMajorAxis,
    ElementName::Eccentricity,
    ElementName::Inclination,
    ElementName::PeriapsisArgument,
    ElementName::AscendingNodeLongitude,
    ElementName::Period,
    ElementName::PeriapsisTime,
];

impl ElementName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementName::SemiMajorAxis => "a",
            ElementName::Eccentricity => "e",
            ElementName::Inclination => "i",
            ElementName::PeriapsisArgument => "omega",
            ElementName::AscendingNodeLongitude => "Omega",
            ElementName::Period => "P",
            ElementName::PeriapsisTime => "T0",
        }
    }
}

impl std::fmt::Display for ElementName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<[f64; 7]> for OrbitElements {
    /// Build elements from a vector in the canonical order `(a, e, i, ω, Ω, P, T0)`.
    fn from(v: [f64; 7]) -> Self {
        OrbitElements {
            semi_major_axis: v[0],
            eccentricity: v[1],
            inclination: v[2],
            periapsis_argument: v[3],
            ascending_node_longitude: v[4],
            period: v[5],
            periapsis_time: v[6],
        }
    }
}

impl OrbitElements {
    /// Element vector in the canonical order `(a, e, i, ω, Ω, P, T0)`.
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.semi_major_axis,
            self.eccentricity,
            self.inclination,
            self.periapsis_argument,
            self.ascending_node_longitude,
            self.period,
            self.periapsis_time,
        ]
    }

    /// Value of a single element by name.
    pub fn get(&self, name: ElementName) -> f64 {
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

    /// Check the elements against the domain of the orbit model.
    ///
    /// Return
    /// ----------
    /// * `Ok(())` when every element is finite, `e ∈ [0, 1)` and `P > 0`;
    ///   the matching [`PhotorbitError`] otherwise.
    pub fn validate(&self) -> Result<(), PhotorbitError> {
        for (name, value) in ELEMENT_ORDER.iter().zip(self.to_array()) {
            if !value.is_finite() {
                return Err(PhotorbitError::NonFiniteElement(name.as_str()));
            }
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(PhotorbitError::EccentricityOutOfRange(self.eccentricity));
        }
        // Guard the division in the mean-anomaly computation.
        if self.period <= 0.0 {
            return Err(PhotorbitError::NonPositivePeriod(self.period));
        }
        Ok(())
    }
}

/// A-priori starting values for an orbit fit.
///
/// Each field overrides the documented default of the matching element; a
/// field left to `None` keeps the default and marks the element as still to
/// be estimated. Defaults: `a = 1`, `e = 0`, `i = 0`, `ω = 0`, `Ω = 0`,
/// `P = 1`, `T0 = 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AprioriElements {
    pub a0: Option<f64>,
    pub e0: Option<f64>,
    pub i0: Option<f64>,
    pub omega0: Option<f64>,
    pub big_omega0: Option<f64>,
    pub p0: Option<f64>,
    pub t00: Option<f64>,
}

impl AprioriElements {
    /// Resolve the overrides into a full starting element set.
    ///
    /// Return
    /// ----------
    /// * The starting [`OrbitElements`] and the list of elements that had no
    ///   override, in canonical order — the free parameters of the fit.
    pub fn resolve(&self) -> (OrbitElements, Vec<ElementName>) {
        let mut to_estimate = Vec::with_capacity(7);
        let mut pick = |value: Option<f64>, default: f64, name: ElementName| match value {
            Some(v) => v,
            None => {
                to_estimate.push(name);
                default
            }
        };

        let elements = OrbitElements {
            semi_major_axis: pick(self.a0, 1.0, ElementName::SemiMajorAxis),
            eccentricity: pick(self.e0, 0.0, ElementName::Eccentricity),
            inclination: pick(self.i0, 0.0, ElementName::Inclination),
            periapsis_argument: pick(self.omega0, 0.0, ElementName::PeriapsisArgument),
            ascending_node_longitude: pick(self.big_omega0, 0.0, ElementName::AscendingNodeLongitude),
            period: pick(self.p0, 1.0, ElementName::Period),
            periapsis_time: pick(self.t00, 0.0, ElementName::PeriapsisTime),
        };

        (elements, to_estimate)
    }
}

#[cfg(test)]
mod test_orbit_elements {
    use super::*;

    #[test]
    fn test_canonical_order_round_trip() {
        let elements = OrbitElements::from([2.5, 0.3, 0.7, 1.1, 4.2, 11.86, 2010.3]);
        assert_eq!(elements.to_array(), [2.5, 0.3, 0.7, 1.1, 4.2, 11.86, 2010.3]);
        assert_eq!(elements.get(ElementName::Period), 11.86);
        assert_eq!(elements.get(ElementName::AscendingNodeLongitude), 4.2);
    }

    #[test]
    fn test_validate_rejects_bad_elements() {
        let valid = OrbitElements::from([1.0, 0.2, 0.3, 0.4, 0.5, 2.0, 0.0]);
        assert!(valid.validate().is_ok());

        let mut bad = valid;
        bad.eccentricity = 1.0;
        assert_eq!(
            bad.validate(),
            Err(PhotorbitError::EccentricityOutOfRange(1.0))
        );

        let mut bad = valid;
        bad.eccentricity = -0.1;
        assert_eq!(
            bad.validate(),
            Err(PhotorbitError::EccentricityOutOfRange(-0.1))
        );

        let mut bad = valid;
        bad.period = 0.0;
        assert_eq!(bad.validate(), Err(PhotorbitError::NonPositivePeriod(0.0)));

        let mut bad = valid;
        bad.inclination = f64::NAN;
        assert_eq!(bad.validate(), Err(PhotorbitError::NonFiniteElement("i")));
    }

    #[test]
    fn test_apriori_defaults() {
        let (elements, to_estimate) = AprioriElements::default().resolve();
        assert_eq!(elements.to_array(), [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(to_estimate, ELEMENT_ORDER.to_vec());
    }

    #[test]
    fn test_apriori_overrides() {
        let apriori = AprioriElements {
            a0: Some(5.0),
            p0: Some(2.0),
            ..Default::default()
        };
        let (elements, to_estimate) = apriori.resolve();

        assert_eq!(elements.semi_major_axis, 5.0);
        assert_eq!(elements.period, 2.0);
        assert_eq!(elements.eccentricity, 0.0);
        assert_eq!(elements.periapsis_time, 0.0);
        assert_eq!(
            to_estimate,
            vec![
                ElementName::Eccentricity,
                ElementName::Inclination,
                ElementName::PeriapsisArgument,
                ElementName::AscendingNodeLongitude,
                ElementName::PeriapsisTime,
            ]
        );
    }
}
