//! # Composer Registry
//!
//! Network-facing stages of the setup-step pipeline:
//!
//! - [`PackagistClient`] resolves a `vendor/name` identifier to registry metadata,
//!   most importantly the source repository URL.
//! - [`ReadmeFetcher`] dispatches a repository URL to a hosting provider
//!   ([`GitHub`], [`GitLab`]) and downloads the raw README.
//!
//! Both stages are best effort. Failures (network errors, non-2xx responses,
//! unparseable URLs) are logged and surface as `None`, never as errors. All HTTP
//! goes through the [`HttpFetch`] seam so the stages can run against canned
//! responses.

mod config;
mod error;
mod http;
mod packagist;
mod readme;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use http::{get_ok_text, HttpFetch, HttpResponse, ReqwestFetch};
pub use packagist::{PackagistClient, RegistryMetadata};
pub use readme::{GitHub, GitLab, ReadmeDocument, ReadmeFetcher, ReadmeProvider, ReadmeRequest};
#[cfg(any(test, feature = "test-support"))]
pub use test_support::{CannedFetch, CannedResponse};
