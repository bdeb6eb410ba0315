use std::path::PathBuf;

use anyhow::Result as Fallible;
use clap::Parser;

use foodbridge_db_sqlite::Connections;

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL of the SQLite database, overrides the configuration
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> Fallible<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    foodbridge_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let config::Config {
        webserver, resolution, ..
    } = cfg;
    let web_cfg = foodbridge_webserver::Cfg {
        address: webserver.address,
        port: webserver.port,
        enable_cors: webserver.enable_cors,
        resolution,
    };
    foodbridge_webserver::run(connections, web_cfg, env!("CARGO_PKG_VERSION")).await;
    Ok(())
}
