#[macro_use]
mod macros;

mod error;
mod process;


use actix_cors::Cors;
use actix_web::web;

pub use error::APIError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    process::configure(cfg);
}

pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["POST", "OPTIONS"])
        .allow_any_header()
}
