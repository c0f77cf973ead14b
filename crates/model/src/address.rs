use crate::CountryCode;
use serde::{Deserialize, Serialize};

/// A postal address as attached to a shipment.
///
/// Only the country code matters to rate-rule validation; the remaining
/// fields are carried through to the carrier untouched.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub address_lines: Vec<String>,
    pub city_town: String,
    pub state_province: String,
    pub postal_code: String,
    pub country_code: CountryCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Address {
    /// Address with only the fields validation cares about populated.
    pub fn for_country(country_code: CountryCode) -> Self {
        Self {
            country_code,
            ..Default::default()
        }
    }
}
