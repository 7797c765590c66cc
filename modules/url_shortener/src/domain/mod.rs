//! Domain layer - business logic and services

pub mod base62;
pub mod codegen;
pub mod normalize;
pub mod repository;
pub mod service;

pub use codegen::{CodeGenerator, Sha256CodeGenerator};
pub use repository::{InsertOutcome, ShortUrlRepository};
pub use service::Service;
