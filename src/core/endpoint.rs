use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    TXT,
    MX,
    NS,
    SRV,
    CAA,
    ALIAS,
    PTR,
    SOA,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::SRV => "SRV",
            RecordType::CAA => "CAA",
            RecordType::ALIAS => "ALIAS",
            RecordType::PTR => "PTR",
            RecordType::SOA => "SOA",
        }
    }

    /// Types that can be written through the provider. SOA is listed by
    /// registrars but owned by them.
    pub fn is_managed(&self) -> bool {
        !matches!(self, RecordType::SOA)
    }

    /// Types whose registrar payload carries a separate priority field.
    pub fn has_priority(&self) -> bool {
        matches!(self, RecordType::MX | RecordType::SRV)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "SRV" => Ok(RecordType::SRV),
            "CAA" => Ok(RecordType::CAA),
            "ALIAS" => Ok(RecordType::ALIAS),
            "PTR" => Ok(RecordType::PTR),
            "SOA" => Ok(RecordType::SOA),
            _ => Err(Error::UnsupportedRecordType(s.to_string())),
        }
    }
}

impl TryFrom<String> for RecordType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        value.as_str().to_string()
    }
}

/// The orchestrator's unit of desired or observed DNS state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub dns_name: String,
    pub target: String,
    pub record_type: RecordType,
    #[serde(rename = "recordTTL", default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl Endpoint {
    /// Builds an endpoint whose type is inferred from the target: IP
    /// literals become A/AAAA, anything else a CNAME.
    pub fn new(dns_name: impl Into<String>, target: impl Into<String>) -> Self {
        let target = target.into();
        let record_type = if target.parse::<Ipv4Addr>().is_ok() {
            RecordType::A
        } else if target.parse::<Ipv6Addr>().is_ok() {
            RecordType::AAAA
        } else {
            RecordType::CNAME
        };
        Self {
            dns_name: dns_name.into(),
            target,
            record_type,
            ttl: None,
        }
    }

    pub fn with_type(
        dns_name: impl Into<String>,
        target: impl Into<String>,
        record_type: RecordType,
    ) -> Self {
        Self {
            dns_name: dns_name.into(),
            target: target.into(),
            record_type,
            ttl: None,
        }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// `name (TYPE)`, used to identify the endpoint in logs and errors.
    pub fn identity(&self) -> String {
        format!("{} ({})", self.dns_name, self.record_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointUpdate {
    pub old: Endpoint,
    pub new: Endpoint,
}

/// A batch of desired changes handed over by the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Changes {
    pub create: Vec<Endpoint>,
    pub update: Vec<EndpointUpdate>,
    pub delete: Vec<Endpoint>,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.update.is_empty() && self.delete.is_empty()
    }

    pub fn len(&self) -> usize {
        self.create.len() + self.update.len() + self.delete.len()
    }
}
