use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

use blog_server::ServerConfig;

#[derive(Parser, Debug)]
#[command(
    name = "blogapp",
    about = "Blog Post CRUD API backed by a capacity-bounded in-memory store",
    version,
)]
pub struct Cli {
    /// TOML file with server settings; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Maximum number of blog posts held in memory
    #[arg(long = "cache-capacity")]
    pub cache_capacity: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub request_timeout: Option<u64>,
}

impl Cli {
    /// Resolve the effective configuration: defaults, then the config file,
    /// then command-line flags.
    pub fn resolve_config(&self) -> anyhow::Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(capacity) = self.cache_capacity {
            config.capacity = capacity;
        }
        if let Some(secs) = self.request_timeout {
            config.request_timeout_secs = secs;
        }
        config.validate()?;
        Ok(config)
    }
}
