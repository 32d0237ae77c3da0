//! Web 服务器主程序入口

use std::path::PathBuf;

use clap::Parser;

use faq_server::config::{AppConfig, StoreBackend};
use faq_server::web::WebServer;

#[derive(Parser, Debug)]
#[command(name = "faq-server", version, about = "FAQ web backend with translate-on-save")]
struct Cli {
    /// Bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Port number
    #[arg(short, long)]
    port: Option<u16>,

    /// TOML configuration file (falls back to FAQ_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Entry store backend: memory, mongodb
    #[arg(long)]
    store: Option<StoreBackend>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Print the supported environment variables and exit
    #[arg(long)]
    env_docs: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.env_docs {
        print!("{}", faq_server::env::generate_env_docs());
        return Ok(());
    }

    if let Err(e) = dotenv::dotenv() {
        if !e.not_found() {
            eprintln!("警告: 无法加载 .env 文件: {}", e);
        }
    }

    let config_path = match cli.config {
        Some(path) => Some(path),
        None => {
            use faq_server::env::{core::ConfigFile, EnvVar};
            ConfigFile::get_if_set()?.map(PathBuf::from)
        }
    };

    let mut config = AppConfig::load(config_path.as_deref())?;
    if let Some(bind) = cli.bind {
        config.web.bind_addr = bind;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(store) = cli.store {
        config.store.backend = store;
    }
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    faq_server::logging::init(&config.log_level);
    tracing::info!(
        store = ?config.store.backend,
        cache_ttl_secs = config.cache.ttl_secs,
        translation_enabled = config.translation.enabled,
        api_url = %config.translation.api_url,
        "配置加载完成"
    );

    let server = WebServer::from_config(&config).await?;
    server.start().await?;

    Ok(())
}
