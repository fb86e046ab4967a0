//! Build script for scout-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates robot.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted in each section, with their allowed integer range
const NAVIGATION_KEYS: &[(&str, i64, i64)] = &[
    ("turn_distance", 1, 65535),
    ("backup_distance", 0, 65535),
    ("default_speed", 1, 127),
    ("sentinel_distance", 1, 65535),
    ("steering_gain", 1, 1000),
    ("turn_scale", 1, 1000),
    ("min_denominator", 1, 65535),
    ("cycle_period_ms", 1, 1000),
];

const SONAR_KEYS: &[(&str, i64, i64)] = &[
    ("echo_timeout_ms", 1, 100),
    ("max_range_cm", 1, 600),
    ("ping_interval_ms", 0, 1000),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate robot.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=robot.toml");

    let config_path = Path::new("robot.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read robot.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in robot.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => fail("robot.toml must be a table", &[]),
    };

    for (name, value) in root {
        let section = match value.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("'{}' must be a [section]", name));
                continue;
            }
        };
        match name.as_str() {
            "navigation" => check_integers(name, section, NAVIGATION_KEYS, &mut errors),
            "sonar" => check_integers(name, section, SONAR_KEYS, &mut errors),
            "drive" => check_drive(section, &mut errors),
            _ => errors.push(format!("unknown section [{}]", name)),
        }
    }

    check_threshold_order(&config, &mut errors);

    if !errors.is_empty() {
        fail("Invalid robot.toml configuration", &errors);
    }

    println!("cargo:warning=robot.toml validated successfully");
}

/// Check integer keys against their allowed ranges
fn check_integers(
    section_name: &str,
    section: &toml::Table,
    keys: &[(&str, i64, i64)],
    errors: &mut Vec<String>,
) {
    for (key, value) in section {
        let Some(&(_, min, max)) = keys.iter().find(|(k, _, _)| k == key) else {
            errors.push(format!("[{}] unknown key '{}'", section_name, key));
            continue;
        };
        match value.as_integer() {
            Some(v) if v >= min && v <= max => {}
            Some(_) => errors.push(format!(
                "[{}] {} must be {}-{}",
                section_name, key, min, max
            )),
            None => errors.push(format!("[{}] {} must be an integer", section_name, key)),
        }
    }
}

/// Check the [drive] section
fn check_drive(section: &toml::Table, errors: &mut Vec<String>) {
    for (key, value) in section {
        match key.as_str() {
            "pwm_top" => match value.as_integer() {
                Some(v) if (1..=65535).contains(&v) => {}
                _ => errors.push("[drive] pwm_top must be 1-65535".to_string()),
            },
            "invert" => match value.as_array() {
                Some(a) if a.len() == 4 && a.iter().all(|v| v.is_bool()) => {}
                _ => errors.push("[drive] invert must be an array of 4 booleans".to_string()),
            },
            _ => errors.push(format!("[drive] unknown key '{}'", key)),
        }
    }
}

/// Backup threshold must sit below the turn threshold
fn check_threshold_order(config: &toml::Value, errors: &mut Vec<String>) {
    let nav = config.get("navigation");
    let get = |key: &str, default: i64| {
        nav.and_then(|n| n.get(key))
            .and_then(|v| v.as_integer())
            .unwrap_or(default)
    };
    if get("backup_distance", 20) >= get("turn_distance", 35) {
        errors.push("[navigation] backup_distance must be below turn_distance".to_string());
    }
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
