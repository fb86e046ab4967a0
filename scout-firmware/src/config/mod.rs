//! Configuration loading
//!
//! The robot configuration is compiled into the firmware from `robot.toml`
//! and parsed at boot with the no_std parser from scout-core.

use defmt::*;

use scout_core::config::{parse_config, RobotConfig};

/// Embedded configuration (compiled into firmware)
/// Edit robot.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../robot.toml");

/// Load the robot configuration
///
/// Falls back to built-in defaults if the embedded TOML fails to parse or
/// validate. build.rs rejects bad files, so that only happens when the
/// host-side checks and the on-target parser disagree.
pub fn load_config() -> RobotConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            return RobotConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        error!("Embedded config rejected: {:?}", e);
        error!("Using default configuration");
        return RobotConfig::default();
    }

    info!(
        "Config: turn={}cm backup={}cm speed={} period={}ms",
        config.navigation.turn_distance,
        config.navigation.backup_distance,
        config.navigation.default_speed,
        config.navigation.cycle_period_ms
    );
    config
}
