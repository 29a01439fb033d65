//! Business logic services for the application layer.

pub mod resolution_service;
pub mod shorten_service;
pub mod stats_service;

pub use resolution_service::{ResolutionOutcome, ResolutionService};
pub use shorten_service::{
    BatchResult, CreationRequest, FieldErrors, RequestResult, ShortenService,
};
pub use stats_service::StatsService;
