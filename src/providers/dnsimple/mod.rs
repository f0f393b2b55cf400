//! DNSimple provider implementation

mod changes;
pub mod client;
pub mod error;
pub mod translate;
pub mod types;
pub mod zone;


use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

pub use client::{DnsimpleClient, ZoneService};
pub use error::DnsimpleError;
pub use types::{RecordAttributes, Zone, ZoneRecord};

use crate::config::Config;
use crate::core::domain_filter::DomainFilter;
use crate::core::endpoint::{Changes, Endpoint};
use crate::core::provider::{ApplyReport, Provider};
use crate::error::Error;
use error::map_error;
use translate::record_to_endpoint;

pub struct DnsimpleProvider {
    service: Arc<dyn ZoneService>,
    account_id: String,
    domain_filter: DomainFilter,
    dry_run: bool,
    default_ttl: u32,
}

impl fmt::Debug for DnsimpleProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsimpleProvider")
            .field("account_id", &self.account_id)
            .field("domain_filter", &self.domain_filter)
            .field("dry_run", &self.dry_run)
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

impl DnsimpleProvider {
    /// Connects to the DNSimple API selected by `config`.
    pub async fn new(config: Config) -> Result<Self, Error> {
        let client = DnsimpleClient::new(&config).map_err(map_error("build HTTP client"))?;
        Self::with_service(Arc::new(client), config).await
    }

    /// Builds a provider on top of any [`ZoneService`]. Without a configured
    /// account the token's own account is looked up.
    pub async fn with_service(
        service: Arc<dyn ZoneService>,
        config: Config,
    ) -> Result<Self, Error> {
        let account_id = match config.account_id {
            Some(id) => id,
            None => service
                .whoami_account()
                .await
                .map_err(map_error("whoami"))?
                .ok_or_else(|| {
                    Error::Config(
                        "API token is not scoped to an account, set DNSIMPLE_ACCOUNT_ID"
                            .to_string(),
                    )
                })?
                .to_string(),
        };

        info!(
            "DNSimple provider ready for account {account_id} (dry run: {})",
            config.dry_run
        );
        Ok(Self {
            service,
            account_id,
            domain_filter: config.domain_filter,
            dry_run: config.dry_run,
            default_ttl: config.default_ttl,
        })
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Zones of the account that pass the domain filter, keyed by id.
    pub async fn zones(&self) -> Result<BTreeMap<u64, Zone>, Error> {
        let zones = self
            .service
            .list_zones(&self.account_id)
            .await
            .map_err(map_error(format!("list zones for account {}", self.account_id)))?;

        Ok(zones
            .into_iter()
            .filter(|z| self.domain_filter.matches(&z.name))
            .map(|z| (z.id, z))
            .collect())
    }
}

#[async_trait]
impl Provider for DnsimpleProvider {
    fn name(&self) -> &str {
        "dnsimple"
    }

    async fn list_endpoints(&self) -> Result<Vec<Endpoint>, Error> {
        let zones = self.zones().await?;
        let mut seen = HashSet::new();
        let mut endpoints = Vec::new();

        for zone in zones.values() {
            // Records are addressed by zone name, so a duplicate name would
            // list the same records twice.
            if !seen.insert(zone.name.to_ascii_lowercase()) {
                continue;
            }
            let records = self
                .service
                .list_records(&self.account_id, &zone.name)
                .await
                .map_err(map_error(format!("list records in {}", zone.name)))?;

            for record in &records {
                if record.system_record {
                    debug!("Skipping system record {} in {}", record.id, zone.name);
                    continue;
                }
                match record_to_endpoint(record, zone) {
                    Ok(endpoint) => endpoints.push(endpoint),
                    Err(e) => debug!("Skipping record {} in {}: {e}", record.id, zone.name),
                }
            }
        }

        debug!("Found {} endpoints in {} zones", endpoints.len(), seen.len());
        Ok(endpoints)
    }

    async fn apply_changes(&self, changes: &Changes) -> Result<ApplyReport, Error> {
        self.apply(changes).await
    }
}
