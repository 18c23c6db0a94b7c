use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use spiral_core::DEFAULT_PADDING;
use tracing::{error, info};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Spiral sampling parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpiralSettings {
    pub angle_start: f64,
    pub angle_end: f64,
    pub num_points: usize,
}

impl Default for SpiralSettings {
    fn default() -> Self {
        SpiralSettings {
            angle_start: 0.0,
            angle_end: 20.0 * std::f64::consts::PI,
            num_points: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LimitSettings {
    pub padding: f64,
}

impl Default for LimitSettings {
    fn default() -> Self {
        LimitSettings {
            padding: DEFAULT_PADDING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CellSettings {
    pub has_infinite: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
    pub spiral: SpiralSettings,
    pub limits: LimitSettings,
    pub cells: CellSettings,
}

/// Load settings from [`DEFAULT_CONFIG_PATH`], falling back to built-in defaults.
pub fn load_settings() -> Result<RunnerSettings, ConfigError> {
    load_settings_from(DEFAULT_CONFIG_PATH)
}

pub fn load_settings_from(path: &str) -> Result<RunnerSettings, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let builder = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix("SPIRAL").separator("__"));

    match build(builder) {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<RunnerSettings, ConfigError> {
    builder.build()?.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> Result<RunnerSettings, ConfigError> {
        build(Config::builder().add_source(File::from_str(source, FileFormat::Toml)))
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings, RunnerSettings::default());
        assert_eq!(settings.limits.padding, 1.1);
        assert!(settings.cells.has_infinite.is_empty());
    }

    #[test]
    fn test_partial_source_keeps_other_defaults() {
        let settings = from_toml("[spiral]\nnum_points = 42\n").unwrap();
        assert_eq!(settings.spiral.num_points, 42);
        assert_eq!(settings.spiral.angle_start, 0.0);
        assert_eq!(settings.limits, LimitSettings::default());
    }

    #[test]
    fn test_full_source() {
        let settings = from_toml(
            r#"
            [spiral]
            angle_start = 1.0
            angle_end = 2.0
            num_points = 3

            [limits]
            padding = 2.0

            [cells]
            has_infinite = [false, true]
            "#,
        )
        .unwrap();
        assert_eq!(settings.spiral.angle_end, 2.0);
        assert_eq!(settings.limits.padding, 2.0);
        assert_eq!(settings.cells.has_infinite, vec![false, true]);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let builder = Config::builder()
            .add_source(File::new("config/does-not-exist.toml", FileFormat::Toml).required(false));
        let settings = build(builder).unwrap();
        assert_eq!(settings, RunnerSettings::default());
        assert_eq!(settings.limits.padding, DEFAULT_PADDING);
    }

    #[test]
    fn test_bad_type_is_an_error() {
        assert!(from_toml("[spiral]\nnum_points = \"many\"\n").is_err());
    }
}
