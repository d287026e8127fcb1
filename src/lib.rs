//! Active24 DNS provider for ACME DNS-01 challenges.
//!
//! [`DnsProvider`] publishes the `_acme-challenge` TXT record before validation
//! and removes it afterwards, talking to the Active24 REST API.

pub mod api;
pub mod challenge;
pub mod config;
pub mod domain;
pub mod error;
pub mod provider;


pub use config::Config;
pub use error::{Error, Operation, Result};
pub use provider::{ChallengeProvider, DnsProvider};
