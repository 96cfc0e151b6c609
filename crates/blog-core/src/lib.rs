//! # Blog Core
//!
//! The domain layer of the blog service: the post model, its validation
//! rules, the repository port and the service that ties them together.
//! This crate has no storage dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::{DomainError, RepoError};
pub use service::PostService;
