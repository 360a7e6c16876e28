#[macro_use]
mod macros;

mod operation;
mod processed_url;
mod request;

pub use operation::*;
pub use processed_url::*;
pub use request::*;
