use async_trait::async_trait;
use log::info;

use crate::api::{Active24Client, HttpClient};
use crate::challenge::ChallengeRecord;
use crate::config::Config;
use crate::domain::extract_second_level_domain;
use crate::error::Result;

/// TTL of the challenge record, in seconds.
pub const CHALLENGE_TTL: u32 = 300;

/// The two hooks an ACME DNS-01 workflow calls around validation.
#[async_trait]
pub trait ChallengeProvider {
    /// Publishes the challenge record for `domain`.
    async fn present(&self, domain: &str, token: &str, key_auth: &str) -> Result<()>;

    /// Removes every challenge record previously published for `domain`.
    async fn clean_up(&self, domain: &str, token: &str, key_auth: &str) -> Result<()>;
}

pub struct DnsProvider<C = reqwest::Client> {
    client: Active24Client<C>,
}

impl DnsProvider {
    /// Provider configured from `ACTIVE24_*` environment variables.
    pub fn new() -> Result<Self> {
        Self::from_config(Config::from_env()?)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        Ok(Self {
            client: Active24Client::new(config)?,
        })
    }
}

impl<C: HttpClient> DnsProvider<C> {
    pub fn with_client(config: Config, client: C) -> Self {
        Self {
            client: Active24Client::with_client(config, client),
        }
    }

    pub fn config(&self) -> &Config {
        self.client.config()
    }

    pub fn client(&self) -> &Active24Client<C> {
        &self.client
    }
}

#[async_trait]
impl<C: HttpClient> ChallengeProvider for DnsProvider<C> {
    async fn present(&self, domain: &str, _token: &str, key_auth: &str) -> Result<()> {
        let record = ChallengeRecord::new(domain, key_auth);
        let sld = extract_second_level_domain(domain)?;

        self.client
            .create_txt_record(&sld, &record.name, &record.value, CHALLENGE_TTL)
            .await?;

        info!("Presented challenge record {}", record.name);
        Ok(())
    }

    async fn clean_up(&self, domain: &str, _token: &str, key_auth: &str) -> Result<()> {
        let record = ChallengeRecord::new(domain, key_auth);
        let sld = extract_second_level_domain(domain)?;

        let hash_ids = self.client.get_domain_hash_ids(&sld, &record.name).await?;
        if hash_ids.is_empty() {
            info!("No challenge record named {} to remove", record.name);
            return Ok(());
        }

        // First failure wins; remaining records are left for a later clean up.
        for hash_id in &hash_ids {
            self.client.delete_txt_record(&sld, hash_id).await?;
        }

        info!("Removed {} challenge record(s) named {}", hash_ids.len(), record.name);
        Ok(())
    }
}
