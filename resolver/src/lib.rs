mod error;
mod resolve;

pub use error::ResolveError;
pub use resolve::{exchange, resolve, resolve_with, MAX_RESPONSE_SIZE};
