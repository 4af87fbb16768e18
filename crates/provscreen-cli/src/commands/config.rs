//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            if formatter.format() == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                let file = Config::path(path)?;
                println!("{}", formatter.info(&format!("Configuration file: {}", file.display())));
                println!("{}", config.to_toml()?);
            }
        }
        ConfigAction::Init { force } => {
            let written = init_config(path, force)?;
            println!("{}", formatter.success(&format!("Wrote {}", written.display())));
        }
    }

    Ok(())
}

/// Write the default configuration, refusing to clobber an existing file.
fn init_config(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let file = Config::path(path)?;
    if file.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists; use --force to overwrite",
            file.display()
        )));
    }
    Config::default().save(Some(&file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".provscreen").join("config.toml");

        let written = init_config(Some(&path), false).unwrap();
        assert_eq!(written, path);
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\nstrict = true\n").unwrap();

        assert!(matches!(
            init_config(Some(&path), false),
            Err(CliError::InvalidInput(_))
        ));
        assert!(Config::load(Some(&path)).unwrap().settings.strict);

        init_config(Some(&path), true).unwrap();
        assert!(!Config::load(Some(&path)).unwrap().settings.strict);
    }
}
