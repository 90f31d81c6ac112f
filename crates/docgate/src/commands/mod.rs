//! CLI command implementations.

mod fetch;
mod serve;

pub(crate) use fetch::FetchArgs;
pub(crate) use serve::ServeArgs;
