//! Environment diagnostics for `--check-env`.
//!
//! Prints the resolved configuration with secrets masked and checks that
//! the PostgreSQL host accepts TCP connections.

use std::time::Duration;

use anyhow::{bail, Result};
use tokio::net::{lookup_host, TcpStream};

use crate::config::Config;

/// How long the PostgreSQL reachability check waits.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Renders the configuration section of the report.
pub fn report(config: &Config, host: &str, port: u16) -> String {
    format!(
        "ENVIRONMENT\n  listen address: {host}:{port}\n  postgres target: {}\n  database url override: {}\n  sqlite path: {}\n  pool size: {}\n  connect timeout: {}s\n\nRESOLVED CONFIG\n{config:#?}",
        config.postgres.redacted_url(),
        if config.database_url.is_some() { "set" } else { "not set" },
        config.sqlite_path,
        config.db_max_connections,
        config.db_connect_timeout_secs,
    )
}

/// Opens a TCP connection to `host:port`, giving up after `timeout`.
pub async fn check_tcp(host: &str, port: u16, timeout: Duration) -> Result<()> {
    match tokio::time::timeout(timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => bail!("connection to {host}:{port} failed: {e}"),
        Err(_) => bail!(
            "connection to {host}:{port} timed out after {}s",
            timeout.as_secs_f32()
        ),
    }
}

/// Prints the full report. Fails when PostgreSQL is unreachable.
pub async fn run(config: &Config, host: &str, port: u16) -> Result<()> {
    println!("{}", report(config, host, port));

    let pg = &config.postgres;
    println!("\nNETWORK");
    match lookup_host((pg.host.as_str(), pg.port)).await {
        Ok(addrs) => {
            let addrs: Vec<String> = addrs.map(|a| a.ip().to_string()).collect();
            println!("  {} resolves to: {}", pg.host, addrs.join(", "));
        }
        Err(e) => println!("  could not resolve {}: {e}", pg.host),
    }

    println!("  checking connection to {}:{}...", pg.host, pg.port);
    check_tcp(&pg.host, pg.port, CONNECT_TIMEOUT).await?;
    println!("  connection to {}:{} successful", pg.host, pg.port);
    Ok(())
}
