use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        //
        // 1) PRINT
        //
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("📄 {}\n", path.display());
                println!("{}", content);
            } else {
                warning(format!(
                    "No configuration file found at {} (using defaults).",
                    path.display()
                ));
                let yaml = serde_yaml::to_string(cfg)
                    .map_err(|e| AppError::Config(e.to_string()))?;
                println!("{}", yaml);
            }
        }

        //
        // 2) CHECK
        //
        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration is valid.");
            } else {
                for p in problems {
                    warning(p);
                }
                return Err(AppError::Config(
                    "configuration check reported problems".to_string(),
                ));
            }
        }
    }

    Ok(())
}
