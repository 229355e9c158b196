use std::env;
use std::net::SocketAddr;

use astra::Server;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use crate::db::connection::{init_db, Database};
use crate::db::seed::seed_if_empty;
use crate::router::handle;

mod auth;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let db_path = env::var("ESTATEHUB_DB").unwrap_or_else(|_| "estatehub.sqlite3".to_string());
    let schema_path =
        env::var("ESTATEHUB_SCHEMA").unwrap_or_else(|_| "sql/schema.sql".to_string());
    let addr_raw = env::var("ESTATEHUB_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let db = Database::new(db_path);

    if let Err(e) = init_db(&db, &schema_path) {
        error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    match seed_if_empty(&db) {
        Ok(0) => {}
        Ok(n) => info!("store was empty; seeded {n} sample listings"),
        Err(e) => {
            error!("seeding failed: {e}");
            std::process::exit(1);
        }
    }

    let addr: SocketAddr = match addr_raw.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("invalid listen address {addr_raw:?}: {e}");
            std::process::exit(1);
        }
    };

    info!("starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down cleanly");
}
