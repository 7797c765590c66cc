//! API layer - native (in-process) and REST adapters

pub mod native;
pub mod rest;
