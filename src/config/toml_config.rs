use crate::config::LogFormat;
use crate::core::manager::LibraryManager;
use crate::domain::model::Book;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_log_level, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Books loaded into the catalog before the first prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryConfig {
    #[serde(default)]
    pub books: Vec<Book>,
}

impl LibraryConfig {
    /// Adds the seed books through the manager, so each one is confirmed like a typed `add`.
    pub fn seed(&self, manager: &mut LibraryManager<'_>) {
        for book in &self.books {
            manager.add_book(&book.title, &book.author, &book.year);
        }
        tracing::debug!("Seeded {} book(s) from config", self.books.len());
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_log_level("logging.level", &self.logging.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(config.library.books.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_seed_books_keep_order() {
        let toml_content = r#"
[logging]
level = "debug"
format = "json"

[[library.books]]
title = "1984"
author = "Orwell"
year = "1949"

[[library.books]]
title = "Dune"
author = "Herbert"
year = "1965"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.library.books,
            vec![
                Book::new("1984", "Orwell", "1949"),
                Book::new("Dune", "Herbert", "1965"),
            ]
        );
    }

    #[test]
    fn test_seed_goes_through_manager() {
        use crate::adapters::notifier::RecordingNotifier;
        use crate::core::library::Library;

        let config = AppConfig::from_toml_str(
            r#"
[[library.books]]
title = "Emma"
author = "Austen"
year = "1815"
"#,
        )
        .unwrap();

        let mut library = Library::new();
        let mut notifier = RecordingNotifier::default();
        config
            .library
            .seed(&mut LibraryManager::new(&mut library, &mut notifier));

        assert_eq!(library.books(), [Book::new("Emma", "Austen", "1815")]);
        assert_eq!(notifier.messages(), ["Book \"Emma\" added successfully!"]);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("OOP_EXERCISES_TEST_LEVEL", "warn");

        let config = AppConfig::from_toml_str(
            r#"
[logging]
level = "${OOP_EXERCISES_TEST_LEVEL}"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "warn");

        std::env::remove_var("OOP_EXERCISES_TEST_LEVEL");
    }

    #[test]
    fn test_unknown_env_var_is_left_untouched() {
        let config = AppConfig::from_toml_str(
            r#"
[logging]
level = "${OOP_EXERCISES_SURELY_UNSET}"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "${OOP_EXERCISES_SURELY_UNSET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_format_is_a_parse_error() {
        let result = AppConfig::from_toml_str(
            r#"
[logging]
format = "xml"
"#,
        );
        assert!(matches!(result, Err(AppError::ConfigParseError(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[logging]\nlevel = \"error\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.logging.level, "error");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = AppConfig::from_file("/nonexistent/oop-exercises.toml");
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
