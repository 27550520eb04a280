//! Entity payload shapes
//!
//! Typed form of the opaque `data` map sent with a create request. Keys are
//! camelCase on the wire, except `mailing_address` which the service expects
//! verbatim.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub extra: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub county: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub designator: String,
    pub address: Address,
    pub mailing_address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
}

/// Owner of the entity, either a person or another company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub is_individual: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub address: Address,
    pub percent_of_ownership: u8,
}

/// Registered agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub is_individual: bool,
    pub first_name: String,
    pub last_name: String,
    /// Empty for individual agents
    pub company_name: String,
    pub address: Address,
}

/// Person filing the formation, with the address flattened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    pub is_individual: bool,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub address_street: String,
    pub address_extra: Option<String>,
    pub address_state: String,
    pub address_city: String,
    pub address_zip_code: String,
    pub address_country: String,
    pub address_county: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityData {
    pub entity_type: String,
    pub entity_state: String,
    pub activity_type: String,
    pub naics_code: u32,
    pub company: Company,
    pub contact: Contact,
    pub is_manager_managed: bool,
    pub members: Vec<Member>,
    pub agent: Agent,
    pub organizer: Organizer,
}
