use crate::core::endpoint::{Endpoint, RecordType};
use crate::error::Error;
use crate::providers::dnsimple::types::{RecordAttributes, Zone, ZoneRecord};
use crate::providers::dnsimple::zone::{absolute_name, relative_name};

fn managed_type(record_type: RecordType) -> Result<RecordType, Error> {
    if record_type.is_managed() {
        Ok(record_type)
    } else {
        Err(Error::UnsupportedRecordType(record_type.to_string()))
    }
}

/// Splits `"10 mail.example.com"` into its priority and the rest.
fn split_priority(endpoint: &Endpoint) -> Result<(u16, String), Error> {
    let target = endpoint.target.trim();
    let (priority, rest) = target.split_once(char::is_whitespace).ok_or_else(|| {
        Error::InvalidInput(format!(
            "{} target must start with a priority: {target}",
            endpoint.identity()
        ))
    })?;
    let priority = priority.parse().map_err(|_| {
        Error::InvalidInput(format!(
            "{} has a non-numeric priority: {priority}",
            endpoint.identity()
        ))
    })?;
    Ok((priority, rest.trim_start().to_string()))
}

pub fn endpoint_to_attributes(
    endpoint: &Endpoint,
    zone: &Zone,
    default_ttl: u32,
) -> Result<RecordAttributes, Error> {
    let record_type = managed_type(endpoint.record_type)?;
    let (priority, content) = if record_type.has_priority() {
        split_priority(endpoint)?
    } else {
        (0, endpoint.target.clone())
    };

    Ok(RecordAttributes {
        name: relative_name(&endpoint.dns_name, &zone.name),
        record_type: record_type.to_string(),
        content,
        ttl: endpoint.ttl.unwrap_or(default_ttl),
        priority,
    })
}

pub fn record_to_endpoint(record: &ZoneRecord, zone: &Zone) -> Result<Endpoint, Error> {
    let record_type = managed_type(record.record_type.parse()?)?;
    let target = match record.priority {
        Some(priority) if record_type.has_priority() => format!("{priority} {}", record.content),
        _ if record_type.has_priority() => format!("0 {}", record.content),
        _ => record.content.clone(),
    };

    Ok(Endpoint {
        dns_name: absolute_name(&record.name, &zone.name),
        target,
        record_type,
        ttl: Some(record.ttl),
    })
}

/// Whether a registrar record is the one an endpoint refers to.
pub(crate) fn same_record(record: &ZoneRecord, attributes: &RecordAttributes) -> bool {
    record.name.eq_ignore_ascii_case(&attributes.name)
        && record.record_type.eq_ignore_ascii_case(&attributes.record_type)
}
