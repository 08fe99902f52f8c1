use anyhow::Result;
use clap::Parser;
use memlink::config::Config;
use memlink::server;
use tracing_subscriber::EnvFilter;

/// In-memory URL shortener.
#[derive(Parser)]
#[command(name = "memlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Listen port (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host name used in short URLs (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Log format (overrides LOG_FORMAT)
    #[arg(long, value_parser = ["text", "json"])]
    log_format: Option<String>,

    /// Validate and print the configuration, then exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(port) = cli.port {
        config.port = port.to_string();
    }
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }

    init_tracing(&config);

    config.validate()?;
    config.print_summary();

    if cli.check_config {
        return Ok(());
    }

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
