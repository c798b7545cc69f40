//! Simple configuration persistence for vimode
//!
//! Stores UI preferences only; the edited video mode is never saved.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use vimode_core::VideoMode;
use vimode_input::DEFAULT_HOLD_TIMEOUT;
use vimode_tui::Theme;

/// Errors that can occur while loading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Unknown video mode preset: {0}")]
    UnknownPreset(String),
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// UI refresh rate; one editor tick per frame
    pub fps: u32,
    /// Theme name, see [`Theme::by_name`]
    pub theme: String,
    /// How long a key counts as held without further key events
    pub hold_timeout: Duration,
    /// Preset to start from instead of the built-in default mode
    pub initial_preset: Option<String>,
    /// Where to write the log; defaults to the data directory
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 60,
            theme: "classic".to_string(),
            hold_timeout: DEFAULT_HOLD_TIMEOUT,
            initial_preset: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Load config from the default location
    ///
    /// Falls back to defaults if the file doesn't exist or can't be parsed.
    /// A parse failure is handed back so it can be reported once logging
    /// is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        Self::load_or_default(&Self::config_path())
    }

    fn load_or_default(path: &Path) -> (Self, Option<ConfigError>) {
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                (Self::default(), None)
            }
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Get the default config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vimode")
            .join("config.txt")
    }

    /// Log file to use, falling back to the data directory
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("vimode")
                .join("vimode.log")
        })
    }

    /// Resolved theme; names are checked while parsing
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.theme).unwrap_or_default()
    }

    /// Mode the editor starts with
    pub fn initial_mode(&self) -> VideoMode {
        self.initial_preset
            .as_deref()
            .and_then(VideoMode::preset)
            .unwrap_or_default()
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }

    /// Parse config from simple key=value format
    fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (index, line) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Parse {
                    line: line_no,
                    message: format!("expected key=value, got '{}'", line),
                });
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "fps" => {
                    config.fps = parse_number(value, line_no)?;
                    if !(1..=240).contains(&config.fps) {
                        return Err(ConfigError::Parse {
                            line: line_no,
                            message: format!("fps must be between 1 and 240, got {}", config.fps),
                        });
                    }
                }
                "theme" => {
                    if Theme::by_name(value).is_none() {
                        return Err(ConfigError::UnknownTheme(value.to_string()));
                    }
                    config.theme = value.to_string();
                }
                "hold_timeout_ms" => {
                    config.hold_timeout = Duration::from_millis(parse_number(value, line_no)?);
                }
                "initial_preset" => {
                    if !value.is_empty() {
                        if VideoMode::preset(value).is_none() {
                            return Err(ConfigError::UnknownPreset(value.to_string()));
                        }
                        config.initial_preset = Some(value.to_string());
                    }
                }
                "log_file" => {
                    if !value.is_empty() {
                        config.log_file = Some(PathBuf::from(value));
                    }
                }
                _ => {} // Ignore unknown keys
            }
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, line: usize) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Parse {
        line,
        message: format!("invalid number '{}': {}", value, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.initial_mode(), VideoMode::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let content = "# vimode\nfps = 30\ntheme=amber\nhold_timeout_ms=300\n\
                       initial_preset=TVPal528IntDf\nlog_file=/tmp/vimode.log\nunknown=1";
        let config = Config::parse(content).unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.theme().name, "amber");
        assert_eq!(config.hold_timeout, Duration::from_millis(300));
        assert_eq!(
            config.initial_mode(),
            VideoMode::preset("TVPal528IntDf").unwrap()
        );
        assert_eq!(config.log_path(), PathBuf::from("/tmp/vimode.log"));
        assert_eq!(config.frame_duration(), Duration::from_millis(33));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Config::parse("fps=fast"),
            Err(ConfigError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            Config::parse("# ok\nfps=0"),
            Err(ConfigError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            Config::parse("just text"),
            Err(ConfigError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            Config::parse("theme=neon"),
            Err(ConfigError::UnknownTheme(name)) if name == "neon"
        ));
        assert!(matches!(
            Config::parse("initial_preset=TVNope"),
            Err(ConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("vimode-does-not-exist").join("config.txt");
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_missing_file_falls_back_silently() {
        let path = std::env::temp_dir().join("vimode-does-not-exist").join("config.txt");
        let (config, error) = Config::load_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_bad_file_falls_back_with_error() {
        let dir = std::env::temp_dir().join(format!("vimode-bad-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.txt");
        fs::write(&path, "fps=60\ntheme=neon\n").unwrap();

        let (config, error) = Config::load_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(matches!(error, Some(ConfigError::UnknownTheme(name)) if name == "neon"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("vimode-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.txt");
        fs::write(&path, "fps=50\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.fps, 50);

        fs::remove_dir_all(&dir).unwrap();
    }
}
