//! Selective expansion of language templates from a remote repository archive.
//!
//! `tmplfetch-core` downloads the `master.zip` archive of a template
//! repository, walks its `template/<language>/...` tree and writes only the
//! languages the caller may write. Languages that already exist locally are
//! left untouched unless overwriting is requested.
//!
//! # Examples
//!
//! ```no_run
//! use tmplfetch_core::FetchConfig;
//! use tmplfetch_core::fetch_templates;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FetchConfig::default().with_overwrite(false);
//! let report = fetch_templates(&config)?;
//! println!("Fetched {:?}", report.fetched_languages);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod acquire;
pub mod api;
pub mod cleanup;
pub mod config;
pub mod copy;
pub mod error;
pub mod extraction;
pub mod http;
pub mod io;
pub mod policy;
pub mod report;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export main API types
pub use acquire::acquire_archive;
pub use acquire::archive_url;
pub use api::fetch_templates;
pub use api::fetch_templates_with_progress;
pub use cleanup::remove_archive;
pub use config::FetchConfig;
pub use error::FetchError;
pub use error::Result;
pub use extraction::EntryKind;
pub use extraction::TemplateExpander;
pub use extraction::expand_templates;
pub use policy::LanguageProbe;
pub use policy::OverwritePolicy;
pub use policy::TemplateDirProbe;
pub use report::ExpansionReport;
pub use report::FetchReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
