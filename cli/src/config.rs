// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};
use std::{error::Error, str::FromStr};

use calview_core::{APP_NAME, LayoutConfig};
use tokio::fs;

use crate::tui::Theme;

const CALVIEW_CONFIG_ENV: &str = "CALVIEW_CONFIG";

/// Resolves and reads the configuration.
///
/// The path comes from `path`, then the `CALVIEW_CONFIG` environment variable,
/// then `$XDG_CONFIG_HOME/calview/config.toml`. Only the last one may be
/// missing, in which case the defaults are used.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CALVIEW_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(Config::default());
        }
        config
    };

    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;
    raw.try_into()
}

/// Configuration for the calview application.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub theme: Theme,
    pub pointer: PointerConfig,
    pub header: HeaderConfig,

    /// Event file used when `--events` is not given.
    pub events: Option<PathBuf>,
}

/// Size of a terminal cell in logical pixels, used to measure drags.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Rows reserved for the all-day events of each column.
    pub cell_height: u16,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { cell_height: 1 }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigRaw {
    layout: LayoutConfig,
    theme: Theme,
    pointer: PointerConfig,
    header: HeaderConfig,
    events: Option<PathBuf>,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl TryFrom<ConfigRaw> for Config {
    type Error = Box<dyn Error>;

    fn try_from(raw: ConfigRaw) -> Result<Self, Self::Error> {
        if raw.pointer.cell_width <= 0.0 || raw.pointer.cell_height <= 0.0 {
            return Err("Pointer cell size must be positive".into());
        }

        Ok(Self {
            layout: raw.layout,
            theme: raw.theme,
            pointer: raw.pointer,
            header: raw.header,
            events: raw.events.as_deref().map(expand_path).transpose()?,
        })
    }
}

/// Handle tilde (~) and the home directory variable in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use calview_core::WeekStart;
    use ratatui::style::Color;
    use std::fs;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn write_config(dir: &Path, name: &str, week_starts_on: u8) -> PathBuf {
        let path = dir.join(name);
        let toml_content = format!(
            r#"
[layout]
week_starts_on = {week_starts_on}
"#
        );
        fs::write(&path, toml_content).unwrap();
        path
    }

    #[tokio::test]
    async fn reads_all_sections() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r##"
events = "/var/calendar/events.toml"

[layout]
week_starts_on = 1
hide_now_indicator = true
swipe_threshold = 80.0

[theme]
primary = "#ff0000"

[pointer]
cell_width = 10.0

[header]
cell_height = 3
"##,
        )
        .unwrap();

        let config = parse_config(Some(config_path)).await.unwrap();

        assert_eq!(config.layout.week_starts_on, WeekStart::MONDAY);
        assert!(config.layout.hide_now_indicator);
        assert_eq!(config.layout.swipe_threshold, 80.0);
        assert_eq!(config.layout.max_visible_events, 3);
        assert_eq!(config.theme.primary, Color::Rgb(0xff, 0, 0));
        assert_eq!(config.pointer.cell_width, 10.0);
        assert_eq!(config.pointer.cell_height, 16.0);
        assert_eq!(config.header.cell_height, 3);
        assert_eq!(config.events, Some(PathBuf::from("/var/calendar/events.toml")));
    }

    #[tokio::test]
    async fn rejects_invalid_week_start() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(temp_dir.path(), "config.toml", 7);

        let err = parse_config(Some(config_path)).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[tokio::test]
    async fn rejects_non_positive_cell_size() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[pointer]\ncell_height = 0.0\n").unwrap();

        assert!(parse_config(Some(config_path)).await.is_err());
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(temp_dir.path(), "config.toml", 1);
        let env_path = write_config(temp_dir.path(), "env_config.toml", 2);

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::set_var(CALVIEW_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let config = parse_config(Some(config_path.clone())).await.unwrap();

            assert_eq!(config.layout.week_starts_on, WeekStart::MONDAY);

            unsafe {
                std::env::remove_var(CALVIEW_CONFIG_ENV);
            }
        }
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = write_config(temp_dir.path(), "env_config.toml", 2);

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::set_var(CALVIEW_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let config = parse_config(None).await.unwrap();

            assert_eq!(config.layout.week_starts_on, WeekStart::try_from(2).unwrap());

            unsafe {
                std::env::remove_var(CALVIEW_CONFIG_ENV);
            }
        }
    }

    #[tokio::test]
    async fn missing_env_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::set_var(CALVIEW_CONFIG_ENV, missing.to_str().unwrap());
            }

            let err = parse_config(None).await.unwrap_err();
            assert!(err.to_string().contains("Failed to read config file"));

            unsafe {
                std::env::remove_var(CALVIEW_CONFIG_ENV);
            }
        }
    }

    // TODO: Re-enable on Windows once get_config_dir() supports environment variables
    #[cfg(unix)]
    #[tokio::test]
    async fn uses_default_when_no_cli_or_env() {
        let temp_dir = TempDir::new().unwrap();
        let default_config_dir = temp_dir.path().join(APP_NAME);
        fs::create_dir_all(&default_config_dir).unwrap();
        write_config(&default_config_dir, "config.toml", 3);

        let xdg_config_home = temp_dir.path().to_str().unwrap().to_string();
        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(CALVIEW_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", xdg_config_home);
            }

            let config = parse_config(None).await.unwrap();

            assert_eq!(config.layout.week_starts_on, WeekStart::try_from(3).unwrap());

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn falls_back_to_defaults_when_nothing_found() {
        let temp_dir = TempDir::new().unwrap();
        let xdg_config_home = temp_dir.path().to_str().unwrap().to_string();
        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(CALVIEW_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", xdg_config_home);
            }

            let config = parse_config(None).await.unwrap();

            assert_eq!(config.layout, LayoutConfig::default());
            assert_eq!(config.events, None);

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn expands_home_prefixes() {
        let home = dirs::home_dir().unwrap();
        for prefix in ["~", "$HOME", "${HOME}"] {
            let path = PathBuf::from(format!("{prefix}/events.toml"));
            assert_eq!(expand_path(&path).unwrap(), home.join("events.toml"));
        }
        assert_eq!(
            expand_path(Path::new("events.toml")).unwrap(),
            PathBuf::from("events.toml")
        );
    }
}
