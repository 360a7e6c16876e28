//! The URL transformations offered by the service.
//!
//! Every function in here is pure: it takes the raw URL string supplied by the
//! client and either returns the rewritten form or a [`NormalizeError`]
//! describing why the URL could not be processed.

mod canonical;
mod redirect;
mod validate;

pub use canonical::canonicalize;
pub use redirect::redirect;
pub use validate::is_valid_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("URL does not have a canonical format")]
    NoCanonicalForm,

    #[error("URL is not from ByFood Domain")]
    NotByfoodDomain,

    #[error("URL not valid")]
    InvalidUrl,
}
