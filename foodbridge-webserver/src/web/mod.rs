use std::net::IpAddr;

use rocket::{config::Config as RocketCfg, fairing::AdHoc, Rocket, Route};

use crate::core::usecases::ResolutionDefaults;

pub mod api;
mod guards;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// Fallbacks for implicitly created communities and warehouses
    pub resolution: ResolutionDefaults,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    resolution: ResolutionDefaults,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    connections: guards::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        resolution,
        version,
    } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .attach(strip_trailing_slash())
        .manage(connections)
        .manage(resolution)
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

/// Routes are declared without a trailing slash,
/// but clients may address them with one.
fn strip_trailing_slash() -> AdHoc {
    AdHoc::on_request("Strip trailing slash", |req, _| {
        Box::pin(async move {
            let path = req.uri().path().as_str();
            if path.len() <= 1 || !path.ends_with('/') {
                return;
            }
            let stripped = req.uri().map_path(|p| {
                let p = p.as_str();
                &p[..p.len() - 1]
            });
            if let Some(uri) = stripped {
                req.set_uri(uri);
            }
        })
    })
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(connections: guards::Connections, cfg: Cfg, version: &'static str) {
    let Cfg {
        address,
        port,
        enable_cors,
        resolution,
    } = cfg;
    let rocket_cfg = RocketCfg {
        address,
        port,
        ..RocketCfg::default()
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        resolution,
        version,
    };

    let instance = rocket_instance(options, connections);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    info!("Listening on {address}:{port}");
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
