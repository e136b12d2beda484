use vortex_lattice::engine::config::{AirfoilConfig, MeshConfig, SolverConfig};

pub struct DefaultsConfig {
    /// Sea-level speed of sound in m/s, used when the flight speed is given as a Mach number.
    pub speed_of_sound: f64,
    pub angles_of_attack_deg: Vec<f64>,
    pub flap_deflection_deg: f64,
    pub kink_span_ratio: f64,
    pub airfoil: AirfoilConfig,
    pub mesh: MeshConfig,
    pub solver: SolverConfig,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            speed_of_sound: 340.29,
            angles_of_attack_deg: vec![0.0, 5.0],
            flap_deflection_deg: 0.0,
            kink_span_ratio: 0.0,
            airfoil: AirfoilConfig::default(),
            mesh: MeshConfig::default(),
            solver: SolverConfig::default(),
        }
    }
}
