//! Serve command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::server;
use anyhow::{Context, Result};
use clap::Args;
use std::net::{SocketAddr, ToSocketAddrs};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind address (default: from configuration, then 0.0.0.0)
    #[arg(long, env = "CHUNKWISE_HOST")]
    pub host: Option<String>,

    /// Bind port (default: from configuration, then 5555)
    #[arg(short, long, env = "CHUNKWISE_PORT")]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let addr = self.bind_addr(config)?;
        let processor = super::load_processor(config)?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        runtime.block_on(server::run(addr, processor))
    }

    /// Flags and environment override the configuration file
    pub fn bind_addr(&self, config: &CliConfig) -> Result<SocketAddr, CliError> {
        let host = self.host.as_deref().unwrap_or(&config.server.host);
        let port = self.port.unwrap_or(config.server.port);

        (host, port)
            .to_socket_addrs()
            .map_err(|e| CliError::ServerError(format!("cannot resolve {host}:{port}: {e}")))?
            .next()
            .ok_or_else(|| CliError::ServerError(format!("no address for {host}:{port}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_config() {
        let args = ServeArgs {
            host: None,
            port: None,
        };
        let addr = args.bind_addr(&CliConfig::default()).unwrap();
        assert_eq!(addr, "0.0.0.0:5555".parse().unwrap());
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.server.port = 9000;

        let args = ServeArgs {
            host: Some("127.0.0.1".to_string()),
            port: None,
        };
        assert_eq!(
            args.bind_addr(&config).unwrap(),
            "127.0.0.1:9000".parse().unwrap()
        );

        let args = ServeArgs {
            host: None,
            port: Some(8080),
        };
        assert_eq!(args.bind_addr(&config).unwrap().port(), 8080);
    }

    #[test]
    fn test_unresolvable_host() {
        let args = ServeArgs {
            host: Some("not a host name".to_string()),
            port: Some(1),
        };
        assert!(args.bind_addr(&CliConfig::default()).is_err());
    }
}
