use crate::regions::RegionTable;
use crate::router::handle;
use crate::scrape::{MarkerQuery, NaverPortal};
use crate::state::AppState;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod collector;
mod domain;
mod errors;
mod regions;
mod responses;
mod router;
mod scrape;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load the district lookup table
    let regions = match RegionTable::load("district.json") {
        Ok(regions) => regions,
        Err(e) => {
            eprintln!("❌ Failed to load district.json: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the portal client (cookie store + browser user agent,
    // default marker rectangle)
    let portal = match NaverPortal::with_query(MarkerQuery::default()) {
        Ok(portal) => portal,
        Err(e) => {
            eprintln!("❌ Failed to build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(regions, portal));

    // 3️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
