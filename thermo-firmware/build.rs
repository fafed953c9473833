//! Build script for thermo-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates thermo.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate thermo.toml so a bad value fails the build rather than
/// silently falling back to defaults on the board
fn validate_config() {
    println!("cargo:rerun-if-changed=thermo.toml");

    let config_path = Path::new("thermo.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read thermo.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in thermo.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    if let Some(table) = config.as_table() {
        for section in table.keys() {
            if !["display", "sensor", "refresh"].contains(&section.as_str()) {
                errors.push(format!("unknown section [{}]", section));
            }
        }
    }

    check_range(&config, "display", "contrast", 0, 127, &mut errors);
    check_range(&config, "display", "temperature_coefficient", 0, 3, &mut errors);
    check_range(&config, "display", "bias", 0, 7, &mut errors);
    check_bool(&config, "display", "inverse", &mut errors);
    // Same 12-bit bound as thermo_core::config::MAX_ADC_CODE
    check_range(&config, "sensor", "adc_at_30c", 0, 4095, &mut errors);
    check_range(&config, "sensor", "adc_at_85c", 0, 4095, &mut errors);
    check_range(&config, "sensor", "sample_interval_ms", 1, u32::MAX as i64, &mut errors);
    check_range(&config, "refresh", "period_ticks", 0, 255, &mut errors);
    check_bool(&config, "refresh", "blank_after_render", &mut errors);

    let low = lookup(&config, "sensor", "adc_at_30c").and_then(toml::Value::as_integer);
    let high = lookup(&config, "sensor", "adc_at_85c").and_then(toml::Value::as_integer);
    if low.is_some() && low == high {
        errors.push("[sensor] adc_at_30c and adc_at_85c must differ".to_string());
    }

    if !errors.is_empty() {
        fail("Invalid configuration in thermo.toml", &errors);
    }

    println!("cargo:warning=thermo.toml validated successfully");
}

fn lookup<'a>(config: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    config.get(section).and_then(|s| s.get(key))
}

fn check_range(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match lookup(config, section, key) {
        None => {}
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
    }
}

fn check_bool(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) {
    if let Some(value) = lookup(config, section, key) {
        if !value.is_bool() {
            errors.push(format!("[{}] {} must be true or false", section, key));
        }
    }
}

/// Abort the build with a boxed error listing
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
