#[macro_use]
extern crate log;

use foodbridge_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, cfg: Cfg, version: &'static str) {
    web::run(connections.into(), cfg, version).await;
}
