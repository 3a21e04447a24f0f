use config::{Config, ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_SEED_CSV_PATH: &str = "sample_listings.csv";
/// Year assigned to month-day availability dates, which carry none.
pub const DEFAULT_SEED_YEAR: i32 = 1900;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub seed: SeedConfig,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub name: String,
    pub user: String,
    pub port: u16,
    pub host: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub csv_path: PathBuf,
    pub year: i32,
}

// Flat view of the environment; keys are lowercased by `config`.
#[derive(Deserialize)]
struct EnvSettings {
    db_name: String,
    db_user: String,
    db_port: u16,
    db_host: Option<String>,
    db_password: Option<String>,
    server_host: String,
    server_port: u16,
    seed_csv_path: PathBuf,
    seed_year: i32,
}

impl AppConfig {
    /// Loads settings from the process environment, after applying `.env` if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_environment(Environment::default())
    }

    pub fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        let settings: EnvSettings = Config::builder()
            .set_default("server_host", DEFAULT_SERVER_HOST)?
            .set_default("server_port", i64::from(DEFAULT_SERVER_PORT))?
            .set_default("seed_csv_path", DEFAULT_SEED_CSV_PATH)?
            .set_default("seed_year", i64::from(DEFAULT_SEED_YEAR))?
            .add_source(env)
            .build()?
            .try_deserialize()?;

        Ok(Self {
            database: DatabaseConfig {
                name: settings.db_name,
                user: settings.db_user,
                port: settings.db_port,
                host: settings.db_host.filter(|h| !h.is_empty()),
                password: settings.db_password.filter(|p| !p.is_empty()),
            },
            server: ServerConfig {
                host: settings.server_host,
                port: settings.server_port,
            },
            seed: SeedConfig {
                csv_path: settings.seed_csv_path,
                year: settings.seed_year,
            },
        })
    }
}

impl DatabaseConfig {
    /// libpq keyword/value connection string, e.g. `dbname=rentals user=app port=5432`.
    pub fn connection_string(&self) -> String {
        let mut conninfo = format!(
            "dbname={} user={} port={}",
            conninfo_value(&self.name),
            conninfo_value(&self.user),
            self.port
        );
        if let Some(host) = &self.host {
            conninfo.push_str(&format!(" host={}", conninfo_value(host)));
        }
        if let Some(password) = &self.password {
            conninfo.push_str(&format!(" password={}", conninfo_value(password)));
        }
        conninfo
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

// Values with spaces or quotes must be single-quoted, with `\` and `'` escaped.
fn conninfo_value(value: &str) -> String {
    if !value.is_empty() && !value.contains(|c: char| c.is_whitespace() || c == '\'' || c == '\\') {
        return value.to_string();
    }
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
