use super::defaults::DefaultsConfig;
use super::file::{
    FileAirfoilConfig, FileConfig, FileFlightConfig, FileMeshConfig, FileSolverConfig,
    FileTailConfig, FileWingConfig,
};
use super::models::{AppConfig, SweepOverrides};
use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};
use std::str::FromStr;
use tracing::debug;
use vortex_lattice::core::geometry::planform::{TailGeometry, WingGeometry};
use vortex_lattice::engine::config::{
    self as core_config, AirfoilConfig, FreeStream, MeshConfig, SolverConfig,
};

pub fn build_config(args: &ConfigArgs, sweep: &SweepOverrides) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = FileConfig::from_file(&args.config)?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let wing = merge_wing(file_config.wing.take(), &defaults)?;
    let horizontal_tail = file_config.horizontal_tail.take().map(merge_tail).transpose()?;

    let flight = file_config.flight.take().unwrap_or_default();
    let free_stream_velocity = merge_velocity(args.velocity, &flight, &defaults)?;
    let angles_of_attack_deg = if sweep.alphas.is_empty() {
        flight
            .angles_of_attack
            .unwrap_or_else(|| defaults.angles_of_attack_deg.clone())
    } else {
        sweep.alphas.clone()
    };
    let flap_deflection_deg = sweep
        .flap
        .or(flight.flap_deflection)
        .unwrap_or(defaults.flap_deflection_deg);

    let mut airfoil = merge_airfoil(file_config.airfoil.take(), &defaults);
    if args.no_camber {
        airfoil.camber = false;
    }
    let mesh = merge_mesh(file_config.mesh.take(), &defaults);
    let solver = merge_solver(file_config.solver.take(), &defaults);

    debug!(
        free_stream_velocity,
        angles = angles_of_attack_deg.len(),
        flap_deflection_deg,
        camber = airfoil.camber,
        tail = horizontal_tail.is_some(),
        "Configuration merged."
    );

    let core_config = core_config::AnalysisConfigBuilder::new()
        .wing(wing)
        .horizontal_tail(horizontal_tail)
        .free_stream_velocity(free_stream_velocity)
        .angles_of_attack_deg(angles_of_attack_deg)
        .flap_deflection_deg(flap_deflection_deg)
        .airfoil(airfoil)
        .mesh(mesh)
        .solver(solver)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        source: args.config.clone(),
        core_config,
    })
}

fn required(value: Option<f64>, key: &str) -> Result<f64> {
    value.ok_or_else(|| CliError::Config(format!("`{key}` is required.")))
}

/// Mean aerodynamic chord of a single trapezoid.
fn trapezoid_mac(root_chord: f64, tip_chord: f64) -> f64 {
    let taper = tip_chord / root_chord;
    2.0 / 3.0 * root_chord * (1.0 + taper + taper * taper) / (1.0 + taper)
}

fn merge_wing(file_val: Option<FileWingConfig>, defaults: &DefaultsConfig) -> Result<WingGeometry> {
    let w = file_val
        .ok_or_else(|| CliError::Config("`[wing]` section is required.".to_string()))?;
    let root_chord = required(w.root_chord, "wing.root-chord")?;
    let tip_chord = required(w.tip_chord, "wing.tip-chord")?;
    let root_y = required(w.root_y, "wing.root-y")?;
    Ok(WingGeometry {
        aspect_ratio: required(w.aspect_ratio, "wing.aspect-ratio")?,
        span: required(w.span, "wing.span")?,
        root_chord,
        tip_chord,
        root_y,
        kink_span_ratio: w.kink_span_ratio.unwrap_or(defaults.kink_span_ratio),
        flap_span_ratio: required(w.flap_span_ratio, "wing.flap-span-ratio")?,
        fuselage_max_width: w.fuselage_max_width.unwrap_or(2.0 * root_y),
        mac_length: w
            .mac_length
            .unwrap_or_else(|| trapezoid_mac(root_chord, tip_chord)),
    })
}

fn merge_tail(file_val: FileTailConfig) -> Result<TailGeometry> {
    Ok(TailGeometry {
        span: required(file_val.span, "horizontal-tail.span")?,
        root_chord: required(file_val.root_chord, "horizontal-tail.root-chord")?,
        tip_chord: required(file_val.tip_chord, "horizontal-tail.tip-chord")?,
    })
}

/// An explicit velocity wins over a Mach number; a Mach number is converted with the speed of sound.
fn merge_velocity(
    cli_val: Option<f64>,
    flight: &FileFlightConfig,
    defaults: &DefaultsConfig,
) -> Result<f64> {
    if let Some(velocity) = cli_val.or(flight.velocity) {
        return Ok(velocity);
    }
    let mach = flight.mach.ok_or_else(|| {
        CliError::Config("Either `flight.velocity` or `flight.mach` is required.".to_string())
    })?;
    let speed_of_sound = flight.speed_of_sound.unwrap_or(defaults.speed_of_sound);
    Ok(FreeStream::from_mach(mach, speed_of_sound))
}

fn merge_airfoil(file_val: Option<FileAirfoilConfig>, defaults: &DefaultsConfig) -> AirfoilConfig {
    let file_val = file_val.unwrap_or_default();
    AirfoilConfig {
        camber: file_val.camber.unwrap_or(defaults.airfoil.camber),
        thickness_ratio: file_val
            .thickness_ratio
            .unwrap_or(defaults.airfoil.thickness_ratio),
    }
}

fn merge_mesh(file_val: Option<FileMeshConfig>, defaults: &DefaultsConfig) -> MeshConfig {
    let file_val = file_val.unwrap_or_default();
    MeshConfig {
        chordwise_panels: file_val
            .chordwise_panels
            .unwrap_or(defaults.mesh.chordwise_panels),
        root_panels: file_val.root_panels.unwrap_or(defaults.mesh.root_panels),
        outer_panels: file_val.outer_panels.unwrap_or(defaults.mesh.outer_panels),
        break_extra_root_panels: file_val
            .break_extra_root_panels
            .unwrap_or(defaults.mesh.break_extra_root_panels),
    }
}

fn merge_solver(file_val: Option<FileSolverConfig>, defaults: &DefaultsConfig) -> SolverConfig {
    let file_val = file_val.unwrap_or_default();
    SolverConfig {
        singularity_tolerance: file_val
            .singularity_tolerance
            .unwrap_or(defaults.solver.singularity_tolerance),
        oswald_correction: file_val
            .oswald_correction
            .unwrap_or(defaults.solver.oswald_correction),
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {kind} value for {key}: {value_str}")))
}

fn parse_angle_list(key: &str, value_str: &str) -> Result<Vec<f64>> {
    value_str
        .split(',')
        .map(|item| parse_value(key, item, "float"))
        .collect()
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;
        let float = || parse_value::<f64>(key, value_str, "float");
        let integer = || parse_value::<usize>(key, value_str, "integer");

        let (section, field) = key.split_once('.').unwrap_or((key, ""));
        match section {
            "wing" => {
                let wing = config.wing.get_or_insert_with(Default::default);
                let slot = match field {
                    "aspect-ratio" => &mut wing.aspect_ratio,
                    "span" => &mut wing.span,
                    "root-chord" => &mut wing.root_chord,
                    "tip-chord" => &mut wing.tip_chord,
                    "root-y" => &mut wing.root_y,
                    "kink-span-ratio" => &mut wing.kink_span_ratio,
                    "flap-span-ratio" => &mut wing.flap_span_ratio,
                    "fuselage-max-width" => &mut wing.fuselage_max_width,
                    "mac-length" => &mut wing.mac_length,
                    _ => return Err(unsupported_key(key)),
                };
                *slot = Some(float()?);
            }
            "horizontal-tail" => {
                let tail = config.horizontal_tail.get_or_insert_with(Default::default);
                let slot = match field {
                    "span" => &mut tail.span,
                    "root-chord" => &mut tail.root_chord,
                    "tip-chord" => &mut tail.tip_chord,
                    _ => return Err(unsupported_key(key)),
                };
                *slot = Some(float()?);
            }
            "flight" => {
                let flight = config.flight.get_or_insert_with(Default::default);
                match field {
                    "angles-of-attack" => {
                        flight.angles_of_attack = Some(parse_angle_list(key, value_str)?);
                    }
                    "velocity" => flight.velocity = Some(float()?),
                    "mach" => flight.mach = Some(float()?),
                    "speed-of-sound" => flight.speed_of_sound = Some(float()?),
                    "flap-deflection" => flight.flap_deflection = Some(float()?),
                    _ => return Err(unsupported_key(key)),
                }
            }
            "airfoil" => {
                let airfoil = config.airfoil.get_or_insert_with(Default::default);
                match field {
                    "camber" => airfoil.camber = Some(parse_value(key, value_str, "boolean")?),
                    "thickness-ratio" => airfoil.thickness_ratio = Some(float()?),
                    _ => return Err(unsupported_key(key)),
                }
            }
            "mesh" => {
                let mesh = config.mesh.get_or_insert_with(Default::default);
                let slot = match field {
                    "chordwise-panels" => &mut mesh.chordwise_panels,
                    "root-panels" => &mut mesh.root_panels,
                    "outer-panels" => &mut mesh.outer_panels,
                    "break-extra-root-panels" => &mut mesh.break_extra_root_panels,
                    _ => return Err(unsupported_key(key)),
                };
                *slot = Some(integer()?);
            }
            "solver" => {
                let solver = config.solver.get_or_insert_with(Default::default);
                let slot = match field {
                    "singularity-tolerance" => &mut solver.singularity_tolerance,
                    "oswald-correction" => &mut solver.oswald_correction,
                    _ => return Err(unsupported_key(key)),
                };
                *slot = Some(float()?);
            }
            _ => return Err(unsupported_key(key)),
        }
    }
    Ok(config)
}

fn unsupported_key(key: &str) -> CliError {
    CliError::Config(format!("Unsupported configuration key for --set: '{}'", key))
}
