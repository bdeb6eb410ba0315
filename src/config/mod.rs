use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, net::IpAddr, path::Path};

use foodbridge_core::usecases::ResolutionDefaults;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "foodbridge.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub resolution: ResolutionDefaults,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub address: IpAddr,
    pub port: u16,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            resolution,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            address,
            port,
        } = webserver.unwrap_or_default();

        let webserver = WebServer {
            enable_cors: cors,
            address,
            port,
        };

        let raw::Resolution {
            default_population,
            default_warehouse_address,
            default_warehouse_capacity,
            default_warehouse_shelf_life,
        } = resolution.unwrap_or_default();

        if default_warehouse_address.trim().is_empty() {
            return Err(anyhow!("Missing default warehouse address"));
        }
        if default_warehouse_capacity.is_nan() || default_warehouse_capacity < 0.0 {
            return Err(anyhow!(
                "Invalid default warehouse capacity: {default_warehouse_capacity}"
            ));
        }
        let warehouse_shelf_life = time::Duration::try_from(default_warehouse_shelf_life)?;

        let resolution = ResolutionDefaults {
            population: default_population,
            warehouse_address: default_warehouse_address,
            warehouse_capacity: default_warehouse_capacity,
            warehouse_shelf_life,
        };

        Ok(Self {
            db,
            webserver,
            resolution,
        })
    }
}
