use crate::router::handle;
use crate::store::ListingStore;
use astra::Server;
use std::env;
use std::net::SocketAddr;

mod api;
mod domain;
mod errors;
mod responses;
mod router;
mod store;
mod templates;


fn main() {
    // 1️⃣ Create the in-memory listings store
    let store = ListingStore::new();

    // 2️⃣ Resolve the port (PORT env var, same default as before)
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("🚀 PaLevel backend running on port {port}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the store handle into the closure
    let result = server.serve(move |req, _info| match handle(req, &store) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_html_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
