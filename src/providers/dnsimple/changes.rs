use std::collections::BTreeMap;

use log::{info, warn};

use crate::core::endpoint::{Changes, Endpoint};
use crate::core::provider::{ApplyReport, ChangeAction, PlannedChange};
use crate::error::{BatchError, ChangeFailure, Error};
use crate::providers::dnsimple::DnsimpleProvider;
use crate::providers::dnsimple::error::map_error;
use crate::providers::dnsimple::translate::{endpoint_to_attributes, same_record};
use crate::providers::dnsimple::types::{RecordAttributes, Zone};
use crate::providers::dnsimple::zone::suitable_zone;

impl DnsimpleProvider {
    /// Applies creates, then updates, then deletes. Every entry is attempted;
    /// failures are collected into a single [`BatchError`].
    pub(crate) async fn apply(&self, changes: &Changes) -> Result<ApplyReport, Error> {
        let mut report = ApplyReport {
            dry_run: self.dry_run,
            changes: Vec::new(),
        };
        if changes.is_empty() {
            info!("All records are already up to date");
            return Ok(report);
        }

        let zones = self.zones().await?;

        let entries = changes
            .create
            .iter()
            .map(|ep| (ChangeAction::Create, None, ep))
            .chain(
                changes
                    .update
                    .iter()
                    .map(|u| (ChangeAction::Update, Some(&u.old), &u.new)),
            )
            .chain(changes.delete.iter().map(|ep| (ChangeAction::Delete, None, ep)));

        let mut failures = Vec::new();
        for (action, old, endpoint) in entries {
            match self.apply_one(action, old, endpoint, &zones).await {
                Ok(change) => report.changes.push(change),
                Err(error) => {
                    warn!("Failed to {action} {}: {error}", endpoint.identity());
                    failures.push(ChangeFailure {
                        action,
                        endpoint: endpoint.identity(),
                        error,
                    });
                }
            }
        }

        if failures.is_empty() {
            Ok(report)
        } else {
            Err(BatchError {
                attempted: changes.len(),
                failures,
            }
            .into())
        }
    }

    async fn apply_one(
        &self,
        action: ChangeAction,
        old: Option<&Endpoint>,
        endpoint: &Endpoint,
        zones: &BTreeMap<u64, Zone>,
    ) -> Result<PlannedChange, Error> {
        let zone = suitable_zone(&endpoint.dns_name, zones)
            .ok_or_else(|| Error::ZoneNotFound(endpoint.dns_name.clone()))?;
        let attributes = endpoint_to_attributes(endpoint, zone, self.default_ttl)?;

        let mut change = PlannedChange {
            action,
            zone: zone.name.clone(),
            name: attributes.name.clone(),
            record_type: attributes.record_type.clone(),
            content: attributes.content.clone(),
            ttl: attributes.ttl,
            record_id: None,
        };

        // Updates stay within one zone, dry run or not.
        let old = match action {
            ChangeAction::Update => {
                let old = old.unwrap_or(endpoint);
                let old_zone = suitable_zone(&old.dns_name, zones)
                    .ok_or_else(|| Error::ZoneNotFound(old.dns_name.clone()))?;
                if old_zone.id != zone.id {
                    return Err(Error::InvalidInput(format!(
                        "cannot move {} from zone {} to {}",
                        old.identity(),
                        old_zone.name,
                        zone.name
                    )));
                }
                Some((old, endpoint_to_attributes(old, zone, self.default_ttl)?))
            }
            _ => None,
        };

        if self.dry_run {
            info!(
                "[dry-run] Would {action} {} in zone {}",
                endpoint.identity(),
                zone.name
            );
            return Ok(change);
        }

        let context = format!("{action} {}", endpoint.identity());
        match action {
            ChangeAction::Create => {
                let record = self
                    .service
                    .create_record(&self.account_id, &zone.name, &attributes)
                    .await
                    .map_err(map_error(context))?;
                change.record_id = Some(record.id);
            }
            ChangeAction::Update => {
                let (old, current) = old.unwrap_or_else(|| (endpoint, attributes.clone()));
                let record_id = self.find_record_id(zone, &current, old).await?;
                self.service
                    .update_record(&self.account_id, &zone.name, record_id, &attributes)
                    .await
                    .map_err(map_error(context))?;
                change.record_id = Some(record_id);
            }
            ChangeAction::Delete => {
                let record_id = self.find_record_id(zone, &attributes, endpoint).await?;
                self.service
                    .delete_record(&self.account_id, &zone.name, record_id)
                    .await
                    .map_err(map_error(context))?;
                change.record_id = Some(record_id);
            }
        }

        info!(
            "Applied {action} of {} in zone {}",
            endpoint.identity(),
            zone.name
        );
        Ok(change)
    }

    /// Looks up the registrar id of the record an endpoint describes. A
    /// record with the same content is required unless the name holds a
    /// single record of that type.
    async fn find_record_id(
        &self,
        zone: &Zone,
        attributes: &RecordAttributes,
        endpoint: &Endpoint,
    ) -> Result<u64, Error> {
        let records = self
            .service
            .list_records(&self.account_id, &zone.name)
            .await
            .map_err(map_error(format!(
                "list records in {} for {}",
                zone.name,
                endpoint.identity()
            )))?;

        let candidates: Vec<_> = records
            .iter()
            .filter(|r| same_record(r, attributes))
            .collect();
        let exact = candidates.iter().find(|r| r.content == attributes.content);
        match (exact, candidates.as_slice()) {
            (Some(record), _) => Ok(record.id),
            (None, [only]) => Ok(only.id),
            _ => Err(Error::RecordNotFound(endpoint.identity())),
        }
    }
}
