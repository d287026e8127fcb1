pub mod active24;
pub mod client;
pub mod models;

pub use active24::Active24Client;
pub use client::HttpClient;
