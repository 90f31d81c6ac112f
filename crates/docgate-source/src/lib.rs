//! Remote repository file access for docgate.
//!
//! This crate provides a [`RepoFiles`] trait for reading raw text files from
//! a branch of an external repository, abstracted from the underlying HTTP
//! host. This enables:
//!
//! - **Unit testing** without touching the network
//! - **Host flexibility** (github.com, GitHub Enterprise, mirrors)
//!
//! # Architecture
//!
//! The crate provides:
//! - [`RepoFiles`] trait with a single `fetch_file()` method
//! - [`GithubFiles`] implementation over `raw.githubusercontent.com`
//! - [`MockFiles`] for testing (behind the `mock` feature flag)
//!
//! Absence of a file is part of the domain, not an error: `fetch_file`
//! returns `Ok(None)` when the repository has no such file on that branch.

mod github;
#[cfg(feature = "mock")]
mod mock;
mod source;

pub use github::GithubFiles;
#[cfg(feature = "mock")]
pub use mock::MockFiles;
pub use source::{RepoFiles, SourceError};
