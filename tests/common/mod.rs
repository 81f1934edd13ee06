use photorbit::orbit_elements::OrbitElements;

/// Moderate-eccentricity orbit, well away from every degenerate regime.
pub fn moderate_orbit() -> OrbitElements {
    OrbitElements::from([2.3, 0.41, 0.95, 1.3, 4.0, 7.75, 1995.2])
}

/// High-eccentricity orbit, stressing the 1 − e·cos(E) denominators.
pub fn eccentric_orbit() -> OrbitElements {
    OrbitElements::from([5.1, 0.75, 1.9, 0.4, 2.7, 26.4, 2003.9])
}

/// Nearly face-on, nearly circular orbit.
pub fn near_face_on_orbit() -> OrbitElements {
    OrbitElements::from([0.8, 0.05, 0.02, 5.9, 0.3, 1.1, 2000.0])
}
