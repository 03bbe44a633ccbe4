//! Winpkg Core - Shared data models for package-declaration discovery
//!
//! This crate defines the records that flow out of the discovery engine,
//! most importantly [`PackageDefinition`] and the closed [`InstallerType`]
//! enumeration, plus the intermediate container/iteration types.

mod models;
mod error;
mod skip_list;

pub use models::{
    ContainerBlock, InstallerType, IterationResult, PackageDefinition, SourceText, DEFAULT_SCOPE,
};
pub use error::CoreError;
pub use skip_list::SkipList;
