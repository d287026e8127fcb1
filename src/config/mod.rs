pub mod models;

pub use models::Config;

pub const ENV_API_KEY: &str = "ACTIVE24_API_KEY";
pub const ENV_API_KEY_FILE: &str = "ACTIVE24_API_KEY_FILE";
pub const ENV_API_URL: &str = "ACTIVE24_API_URL";
pub const DEFAULT_ENDPOINT_URL: &str = "https://api.active24.com/";
