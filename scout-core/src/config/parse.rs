//! Minimal TOML parser for the robot configuration
//!
//! Handles only the subset `robot.toml` uses. It does NOT support the full
//! TOML spec and needs no allocator.
//!
//! Supported features:
//! - `[navigation]`, `[sonar]` and `[drive]` section headers
//! - Key = value pairs (integer, boolean)
//! - Flat boolean arrays: `invert = [false, false, true, true]`
//! - Comments (# ...)
//!
//! Keys missing from the file keep their defaults. Unknown sections and keys
//! are rejected so typos do not silently fall back to defaults.

use super::types::RobotConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Key not valid in the current section
    UnknownKey,
    /// Line is not a `key = value` pair
    InvalidLine,
    /// Invalid value type or out-of-range number
    InvalidValue,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Navigation,
    Sonar,
    Drive,
}

/// Parse TOML configuration into RobotConfig
///
/// The result is not validated; call [`RobotConfig::validate`] afterwards.
pub fn parse_config(input: &str) -> Result<RobotConfig, ParseError> {
    let mut config = RobotConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse section header like "navigation"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "navigation" => Ok(Section::Navigation),
        "sonar" => Ok(Section::Sonar),
        "drive" => Ok(Section::Drive),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Drop a trailing `# comment`
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a fixed-length boolean array like "[true, false, false, true]"
fn parse_bool_array<const N: usize>(value: &str) -> Result<[bool; N], ParseError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ParseError::InvalidValue)?;

    let mut out = [false; N];
    let mut count = 0;
    for item in inner.split(',') {
        let item = item.trim();
        if item.is_empty() {
            // Trailing comma
            continue;
        }
        if count == N {
            return Err(ParseError::InvalidValue);
        }
        out[count] = parse_bool(item)?;
        count += 1;
    }

    if count != N {
        return Err(ParseError::InvalidValue);
    }
    Ok(out)
}

/// Apply a parsed key/value to the config
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut RobotConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => return Err(ParseError::UnknownKey),
        Section::Navigation => {
            let nav = &mut config.navigation;
            match key {
                "turn_distance" => nav.turn_distance = parse_int(value)?,
                "backup_distance" => nav.backup_distance = parse_int(value)?,
                "default_speed" => nav.default_speed = parse_int(value)?,
                "sentinel_distance" => nav.sentinel_distance = parse_int(value)?,
                "steering_gain" => nav.steering_gain = parse_int(value)?,
                "turn_scale" => nav.turn_scale = parse_int(value)?,
                "min_denominator" => nav.min_denominator = parse_int(value)?,
                "cycle_period_ms" => nav.cycle_period_ms = parse_int(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
        Section::Sonar => {
            let sonar = &mut config.sonar;
            match key {
                "echo_timeout_ms" => sonar.echo_timeout_ms = parse_int(value)?,
                "max_range_cm" => sonar.max_range_cm = parse_int(value)?,
                "ping_interval_ms" => sonar.ping_interval_ms = parse_int(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
        Section::Drive => {
            let drive = &mut config.drive;
            match key {
                "pwm_top" => drive.pwm_top = parse_int(value)?,
                "invert" => drive.invert = parse_bool_array(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, NavConfig};

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("navigation"), Ok(Section::Navigation));
        assert_eq!(parse_section_header(" sonar "), Ok(Section::Sonar));
        assert_eq!(parse_section_header("drive"), Ok(Section::Drive));
        assert_eq!(
            parse_section_header("heater"),
            Err(ParseError::InvalidSection)
        );
    }

    #[test]
    fn test_parse_bool_array() {
        assert_eq!(
            parse_bool_array::<4>("[false, false, true, true]"),
            Ok([false, false, true, true])
        );
        assert_eq!(
            parse_bool_array::<4>("[true,true,true,true,]"),
            Ok([true; 4])
        );
        assert_eq!(
            parse_bool_array::<4>("[true, false]"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_bool_array::<2>("[true, false, true]"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_bool_array::<1>("true"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config(""), Ok(RobotConfig::default()));
        assert_eq!(
            parse_config("# just a comment\n\n"),
            Ok(RobotConfig::default())
        );
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
# Scout competition robot
[navigation]
turn_distance = 40      # cm
backup_distance = 15
default_speed = 60
sentinel_distance = 250
steering_gain = 10
turn_scale = 45
min_denominator = 2
cycle_period_ms = 25

[sonar]
echo_timeout_ms = 25
max_range_cm = 300
ping_interval_ms = 30

[drive]
pwm_top = 12500
invert = [false, true, false, true]
"#;
        let config = parse_config(toml).unwrap();

        assert_eq!(
            config.navigation,
            NavConfig {
                turn_distance: 40,
                backup_distance: 15,
                default_speed: 60,
                sentinel_distance: 250,
                steering_gain: 10,
                turn_scale: 45,
                min_denominator: 2,
                cycle_period_ms: 25,
            }
        );
        assert_eq!(config.sonar.echo_timeout_ms, 25);
        assert_eq!(config.sonar.max_range_cm, 300);
        assert_eq!(config.sonar.ping_interval_ms, 30);
        assert_eq!(config.drive.pwm_top, 12500);
        assert_eq!(config.drive.invert, [false, true, false, true]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = parse_config("[navigation]\nturn_distance = 50\n").unwrap();
        assert_eq!(config.navigation.turn_distance, 50);
        assert_eq!(config.navigation.backup_distance, 20);
        assert_eq!(config.sonar, Default::default());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_config("turn_distance = 40"),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(
            parse_config("[navigation]\nturn_distanse = 40"),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(
            parse_config("[navigation]\nturn_distance = -4"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[navigation]\ndefault_speed = 300"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[navigation]\nturn_distance"),
            Err(ParseError::InvalidLine)
        );
        assert_eq!(parse_config("[lidar]"), Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_reversed_steering_rejected() {
        let config = parse_config("[navigation]\nsteering_gain = -15").unwrap();
        assert_eq!(config.validate(), Err(ConfigError::InvalidSteeringGain));

        let config = parse_config("[navigation]\nturn_scale = -45\nsteering_gain = -15").unwrap();
        assert_eq!(config.validate(), Err(ConfigError::InvalidTurnScale));
    }
}
