//! zbxsend CLI
//!
//! Sends one value to a Zabbix trapper and prints the collector's summary.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use zbxsend::{Sender, SenderConfig};

/// zbxsend CLI
#[derive(Parser, Debug)]
#[command(name = "zbxsend")]
#[command(about = "Send a value to a Zabbix trapper")]
#[command(version)]
struct Args {
    /// Collector host
    #[arg(short, long, default_value = "127.0.0.1")]
    server: String,

    /// Collector port
    #[arg(short, long, default_value = "10051")]
    port: u16,

    /// Connect timeout in milliseconds
    #[arg(long, default_value = "3000")]
    connect_timeout_ms: u64,

    /// Read timeout in milliseconds
    #[arg(long, default_value = "3000")]
    read_timeout_ms: u64,

    /// Monitored host name
    host: String,

    /// Item key
    key: String,

    /// Item value
    value: String,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,zbxsend=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = SenderConfig::builder()
        .server_host(&args.server)
        .server_port(args.port)
        .connect_timeout_ms(args.connect_timeout_ms)
        .read_timeout_ms(args.read_timeout_ms)
        .build();

    tracing::info!("zbxsend v{} -> {}", zbxsend::VERSION, config.server_addr());

    let sender = Sender::with_config(config);
    let response = match sender.send(&args.host, &args.key, &args.value) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Send failed: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "success: {}, processed: {}, failed: {}, total: {}, seconds: {}",
        response.is_success(),
        response.processed(),
        response.failed(),
        response.total(),
        response.spent_seconds()
    );

    if !response.is_success() {
        std::process::exit(2);
    }
}
