//! Hostname to zone matching.

use std::collections::BTreeMap;

use crate::core::domain_filter::normalize;
use crate::providers::dnsimple::types::Zone;

/// Returns the zone with the longest name that `hostname` falls under.
///
/// Matching happens on label boundaries: `example-beta.example.com` is
/// under `example.com` but not under `example-beta.com`. When several zones
/// share the same name the one with the lowest id wins, which falls out of
/// the map's ordering plus only replacing on a strictly longer match.
pub fn suitable_zone<'a>(hostname: &str, zones: &'a BTreeMap<u64, Zone>) -> Option<&'a Zone> {
    let hostname = normalize(hostname);
    let mut best: Option<(&Zone, usize)> = None;

    for zone in zones.values() {
        let name = normalize(&zone.name);
        if name.is_empty() || !is_within(&hostname, &name) {
            continue;
        }
        if best.is_none_or(|(_, len)| name.len() > len) {
            best = Some((zone, name.len()));
        }
    }

    best.map(|(zone, _)| zone)
}

fn is_within(hostname: &str, zone: &str) -> bool {
    hostname == zone
        || hostname
            .strip_suffix(zone)
            .is_some_and(|rest| rest.ends_with('.'))
}

/// Strips the zone suffix from `hostname`; the apex becomes an empty name.
///
/// The relative label keeps its case. The zone part is matched
/// case-insensitively and a trailing dot is dropped, so names come back
/// from [`absolute_name`] in the registrar's spelling of the zone.
pub fn relative_name(hostname: &str, zone: &str) -> String {
    let hostname = hostname.trim().trim_end_matches('.');
    let zone = normalize(zone);
    let lower = hostname.to_ascii_lowercase();
    if lower == zone {
        return String::new();
    }
    match lower.strip_suffix(&format!(".{zone}")) {
        Some(rest) => hostname[..rest.len()].to_string(),
        None => hostname.to_string(),
    }
}

/// Inverse of [`relative_name`].
pub fn absolute_name(name: &str, zone: &str) -> String {
    let zone = normalize(zone);
    match name.trim().trim_end_matches('.') {
        "" | "@" => zone,
        name => format!("{name}.{zone}"),
    }
}
