#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Application host that runs the access gate in front of an upstream router.

mod bootstrap;
mod upstream;

pub mod error;

pub use bootstrap::run_app;
pub use error::{AppError, AppResult};
