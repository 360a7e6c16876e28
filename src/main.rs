extern crate actix_web;
#[macro_use]
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate tracing;

use clap::Parser;

mod api;
mod models;
mod normalize;
mod telemetry;

use actix_web::{App, HttpServer};
use telemetry::TracingLogger;

/// Normalizes URLs into their canonical and ByFood redirection forms.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The port to listen for incoming requests on.
    #[arg(short, long, default_value_t = 8080, env = "PORT")]
    port: u16,

    /// The log filter directives to apply, using the `tracing_subscriber::EnvFilter` syntax.
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_filter: String,
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    telemetry::init(&args.log_filter);

    info!("Starting server on :{}", args.port);
    HttpServer::new(|| {
        App::new()
            .wrap(TracingLogger)
            .wrap(api::cors())
            .configure(api::configure)
    })
    .bind(("0.0.0.0", args.port))
    .map_err(|err| {
        error!("Unable to bind to port {}: {}", args.port, err);
        err
    })?
    .run()
    .await
    .map_err(|err| {
        error!("The server exited unexpectedly: {}", err);
        err
    })
}
