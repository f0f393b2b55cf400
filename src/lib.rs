//! DNSimple adapter for DNS synchronization orchestrators.
//!
//! Translates the orchestrator's generic [`Endpoint`](crate::core::endpoint::Endpoint)
//! model into DNSimple zone-record calls and back.

pub mod config;
pub mod core;
pub mod error;
pub mod providers;

pub use config::Config;
pub use crate::core::endpoint::{Changes, Endpoint, EndpointUpdate, RecordType};
pub use crate::core::provider::{ApplyReport, Provider};
pub use error::Error;
pub use providers::dnsimple::DnsimpleProvider;
