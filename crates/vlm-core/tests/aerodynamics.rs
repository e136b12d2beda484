use vortex_lattice::core::geometry::mesh::{MeshResolution, SurfaceMeshBuilder};
use vortex_lattice::core::geometry::planform::{TailGeometry, WingGeometry};
use vortex_lattice::core::vortex::influence;
use vortex_lattice::core::wake::WakeField;
use vortex_lattice::engine::config::{
    AirfoilConfig, AnalysisConfig, AnalysisConfigBuilder, MeshConfig, SolverConfig,
};
use vortex_lattice::engine::progress::ProgressReporter;
use vortex_lattice::engine::solver::{CirculationSolver, flow_angles};
use vortex_lattice::workflows::{characteristics, evaluate};

fn rectangular_wing() -> WingGeometry {
    WingGeometry {
        aspect_ratio: 8.0,
        span: 8.0,
        root_chord: 1.0,
        tip_chord: 1.0,
        root_y: 0.5,
        kink_span_ratio: 0.0,
        flap_span_ratio: 0.5,
        fuselage_max_width: 1.0,
        mac_length: 1.0,
    }
}

fn coarse_mesh() -> MeshConfig {
    MeshConfig {
        chordwise_panels: 8,
        root_panels: 2,
        outer_panels: 10,
        break_extra_root_panels: 2,
    }
}

fn flat_config(angles: Vec<f64>) -> AnalysisConfig {
    AnalysisConfigBuilder::new()
        .wing(rectangular_wing())
        .free_stream_velocity(30.0)
        .angles_of_attack_deg(angles)
        .airfoil(AirfoilConfig {
            camber: false,
            ..AirfoilConfig::default()
        })
        .mesh(coarse_mesh())
        .build()
        .unwrap()
}

#[test]
fn flat_symmetric_wing_at_zero_incidence_has_no_lift() {
    let result = evaluate::run(&flat_config(vec![0.0]), &ProgressReporter::new()).unwrap();
    assert!(result.points[0].wing.cl.abs() < 1e-12);
    assert!(result.points[0].wing.cdi.abs() < 1e-12);

    let surface = SurfaceMeshBuilder::new(MeshResolution::new(6, 2, 3, 3))
        .build_wing(&rectangular_wing());
    let matrices = influence::assemble(&surface, 1e-12);
    let solver = CirculationSolver::factorize(surface.kind(), matrices, 30.0).unwrap();
    let circulation = solver
        .solve(&flow_angles(0.0, &surface.local_angles()))
        .unwrap();
    assert!(circulation.full_span().iter().all(|g| g.abs() < 1e-12));
}

#[test]
fn lift_is_linear_in_small_angles() {
    let result =
        evaluate::run(&flat_config(vec![2.5, 5.0]), &ProgressReporter::new()).unwrap();
    let (cl_low, cl_high) = (result.points[0].wing.cl, result.points[1].wing.cl);
    assert!((cl_high / cl_low - 2.0).abs() < 1e-9);

    let slope = (cl_high - cl_low) / 2.5f64.to_radians();
    assert!(slope > 4.0 && slope < 5.8, "CL_alpha = {slope}");
}

#[test]
fn finite_difference_slope_matches_the_lift_curve() {
    let config = flat_config(vec![0.0]);
    let curve = characteristics::lift_curve(&config, &ProgressReporter::new()).unwrap();
    let result = evaluate::run(&flat_config(vec![0.0, 5.0]), &ProgressReporter::new()).unwrap();
    let k_fus = 1.0 + 0.025 * 0.125 - 0.025 * 0.125 * 0.125;
    let slope = (result.points[1].wing.cl - result.points[0].wing.cl) / 5f64.to_radians();
    assert!((curve.cl_alpha - slope * k_fus).abs() < 1e-9);
}

#[test]
fn oswald_efficiency_is_self_consistent() {
    let result = evaluate::run(&flat_config(vec![6.0]), &ProgressReporter::new()).unwrap();
    let wing = result.points[0].wing;
    let reconstructed =
        wing.cl * wing.cl / (std::f64::consts::PI * 8.0 * wing.oswald) * 0.955;
    assert!((reconstructed - wing.cdi).abs() < 1e-12);
    assert!(wing.oswald > 0.3 && wing.oswald < 1.5, "e = {}", wing.oswald);
}

#[test]
fn flap_deflection_increases_lift_monotonically() {
    let cl: Vec<f64> = [0.0, 10.0, 20.0]
        .iter()
        .map(|&flap| {
            let mut config = flat_config(vec![3.0]);
            config.flap_deflection_deg = flap;
            evaluate::run(&config, &ProgressReporter::new()).unwrap().points[0]
                .wing
                .cl
        })
        .collect();
    assert!(cl[0] < cl[1] && cl[1] < cl[2], "cl = {cl:?}");
}

#[test]
fn repeated_solves_reuse_the_inverse_without_drift() {
    let surface = SurfaceMeshBuilder::new(MeshResolution::new(6, 2, 3, 3))
        .build_wing(&rectangular_wing());
    let matrices = influence::assemble(&surface, SolverConfig::default().singularity_tolerance);
    let solver = CirculationSolver::factorize(surface.kind(), matrices, 30.0).unwrap();
    let angles = flow_angles(4f64.to_radians(), &surface.local_angles());
    assert_eq!(solver.solve(&angles).unwrap(), solver.solve(&angles).unwrap());
}

#[test]
fn generated_surface_is_mirror_symmetric() {
    let surface = SurfaceMeshBuilder::new(MeshResolution::new(5, 2, 3, 3))
        .build_wing(&rectangular_wing());
    for (right, left) in surface.right_panels().iter().zip(surface.left_panels()) {
        assert_eq!(left.control_point.y, -right.control_point.y);
        assert_eq!(left.control_point.x, right.control_point.x);
        assert_eq!(left.area, right.area);
        assert_eq!(left.local_angle, right.local_angle);
    }
}

#[test]
fn interpolation_scenario_hits_the_bracketing_midpoint() {
    let field = WakeField::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, -1.0, -2.0, -3.0]);
    assert!((field.interpolate(1.5) + 1.5).abs() < 1e-12);
}

#[test]
fn tail_flies_in_the_wing_downwash() {
    let mut config = flat_config(vec![0.0, 6.0]);
    config.horizontal_tail = Some(TailGeometry {
        span: 3.0,
        root_chord: 0.6,
        tip_chord: 0.4,
    });
    let result = evaluate::run(&config, &ProgressReporter::new()).unwrap();

    let at_zero = result.points[0].tail_cl.unwrap();
    let at_six = result.points[1].tail_cl.unwrap();
    assert!(at_zero.abs() < 1e-12);
    assert!(at_six > 0.0);

    // The same tail alone would carry more lift than behind the loaded wing.
    let tail_alone = SurfaceMeshBuilder::new(config.mesh.resolution(false)).build_tail(
        &config.horizontal_tail.unwrap(),
    );
    let matrices = influence::assemble(&tail_alone, 1e-12);
    let solver = CirculationSolver::factorize(tail_alone.kind(), matrices, 30.0).unwrap();
    let circulation = solver
        .solve(&flow_angles(6f64.to_radians(), &tail_alone.local_angles()))
        .unwrap();
    let cp = vortex_lattice::engine::postprocess::pressure_coefficients(
        &tail_alone,
        &circulation,
        30.0,
    );
    let isolated = vortex_lattice::engine::postprocess::lift_coefficient(&tail_alone, &cp);
    assert!(at_six < isolated, "{at_six} vs {isolated}");
}
