//! URL modeling: the externally reachable base URL and the escaping rules
//! used when composing links under it.

mod base;
mod escape;

pub use base::{BaseUrl, BaseUrlError};
pub use escape::{escape_path_segment, flatten_slashes, query_escape, query_unescape};
