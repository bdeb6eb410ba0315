use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{net::IpAddr, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("foodbridge.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub resolution: Option<Resolution>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
    pub address: IpAddr,
    pub port: u16,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Resolution {
    pub default_population: u32,
    pub default_warehouse_address: String,
    pub default_warehouse_capacity: f64,
    #[serde(deserialize_with = "deserialize_duration")]
    pub default_warehouse_shelf_life: Duration,
}

impl Default for Resolution {
    fn default() -> Self {
        Config::default()
            .resolution
            .expect("Resolution configuration")
    }
}
