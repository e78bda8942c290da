use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_week_start")]
    pub week_starts_on: String,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_week_start() -> String {
    "monday".to_string()
}
fn default_chart_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            week_starts_on: default_week_start(),
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("serenitylog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".serenitylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("serenitylog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("serenitylog.sqlite")
    }

    /// First day of the week used for week boundaries.
    /// Unknown values fall back to Monday (ISO convention).
    pub fn week_start(&self) -> Weekday {
        match self.week_starts_on.to_lowercase().as_str() {
            "sunday" | "sun" => Weekday::Sun,
            "saturday" | "sat" => Weekday::Sat,
            _ => Weekday::Mon,
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Validate the loaded configuration; returns the list of problems found.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.database.trim().is_empty() {
            problems.push("`database` is empty".to_string());
        }
        if !matches!(
            self.week_starts_on.to_lowercase().as_str(),
            "monday" | "mon" | "sunday" | "sun" | "saturday" | "sat"
        ) {
            problems.push(format!(
                "`week_starts_on` has unknown value '{}' (falls back to monday)",
                self.week_starts_on
            ));
        }
        if self.chart_width == 0 || self.chart_width > 200 {
            problems.push(format!(
                "`chart_width` {} is outside the sensible 1..=200 range",
                self.chart_width
            ));
        }

        problems
    }

    /// Initialize configuration and database files.
    /// Returns the resolved database path: a relative `--db` name lands
    /// inside the config dir, and the caller must open exactly this path so
    /// the created file, the migrated file and the recorded config entry
    /// all agree.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            week_starts_on: default_week_start(),
            chart_width: default_chart_width(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
