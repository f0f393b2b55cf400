use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub id: u64,
    pub account_id: u64,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    pub id: u64,
    /// The registrar reports the zone name here, not the numeric zone id.
    pub zone_id: String,
    #[serde(default)]
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default)]
    pub priority: Option<u16>,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub system_record: bool,
}

/// Body of record create and update calls.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordAttributes {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    pub priority: u16,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Data<T> {
    pub data: T,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Whoami {
    pub account: Option<Account>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Account {
    pub id: u64,
}

#[derive(Deserialize, Debug)]
pub struct DnsimpleApiError {
    pub message: String,
}
