//! Application layer services implementing business logic.
//!
//! Services consume the repository traits from the domain layer and expose
//! the conceptual API the presentation layer calls:
//!
//! - [`services::ShortenService`] - batch creation of short URL records
//! - [`services::ResolutionService`] - shortcode lookup, expiration check,
//!   click recording
//! - [`services::StatsService`] - record listing for the statistics display

pub mod services;
