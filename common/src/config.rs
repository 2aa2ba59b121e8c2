use std::env;

pub const DEFAULT_DB_URI: &str = "sqlite://herodex.db?mode=rwc";

#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Database")]
#[group(id = "database")]
pub struct Database {
    /// Connection string of the backing store.
    #[arg(id = "db-uri", long, env = "DB_URI", default_value = DEFAULT_DB_URI)]
    pub uri: String,
}

impl Database {
    pub fn from_env() -> Self {
        Self {
            uri: env::var("DB_URI").unwrap_or_else(|_| DEFAULT_DB_URI.to_string()),
        }
    }
}
