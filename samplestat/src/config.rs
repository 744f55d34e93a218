use anyhow::Result;
use clap::Parser;
use config::{Config as ConfigLoader, Environment, File};
use samplestat_storage::sqlite::SqliteConfig;
use serde::Deserialize;

/// SampleStat server
#[derive(Parser, Debug)]
#[command(name = "samplestat")]
#[command(about = "REST service for storing uniform, normal and Weibull samples")]
#[command(version)]
pub struct Args {
    /// Drop and recreate the sample tables before serving. Discards all stored samples.
    #[arg(long)]
    pub reset: bool,

    /// SQLite database file (overrides `database_path`)
    #[arg(short, long)]
    pub database: Option<String>,

    /// Listen port (overrides `port`)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub max_connections: u32,
    pub log_format: LogFormat,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("SAMPLESTAT"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Command-line flags win over every other source.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(database) = &args.database {
            self.database_path = database.clone();
        }
        if let Some(port) = args.port {
            self.port = port;
        }
    }

    pub fn sqlite(&self) -> SqliteConfig {
        SqliteConfig::new(self.database_path.clone()).with_max_connections(self.max_connections)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            database_path: "samplestat.db".to_string(),
            max_connections: 1,
            log_format: LogFormat::Pretty,
        }
    }
}
