//! Entry module: domain inputs, repository seam, and the service that ties
//! each HTTP operation to exactly one store call.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::EntryService;
