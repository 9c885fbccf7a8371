//! CLI command handlers. Each command is in its own file.

mod decode;
mod job;
mod lock;
mod routes;

pub use decode::run_decode;
pub use job::{run_job, JobArgs};
pub use lock::run_lock;
pub use routes::run_routes;
