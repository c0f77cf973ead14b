//! Rate lines and the carrier/service/parcel-type/special-service
//! identifiers with their wire codes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, EnumString};

/// Name of the input parameter carrying the declared value of a special
/// service (e.g. the insured amount), which prerequisite rules check
/// against their minimum.
pub const INPUT_VALUE: &str = "INPUT_VALUE";

/// A shipping provider.
#[derive(
    AsRefStr, Clone, Copy, Debug, Default, Deserialize, EnumString, Eq, Hash, PartialEq, Serialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Carrier {
    #[default]
    Usps,
    Fedex,
    Ups,
}

/// A carrier-specific product tier under which parcels ship.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ServiceId {
    /// Priority Mail.
    #[default]
    #[serde(rename = "PM")]
    #[strum(serialize = "PM")]
    PriorityMail,
    /// Priority Mail Express.
    #[serde(rename = "EM")]
    #[strum(serialize = "EM")]
    PriorityMailExpress,
    /// First-Class Mail.
    #[serde(rename = "FCM")]
    #[strum(serialize = "FCM")]
    FirstClassMail,
    /// Parcel Select Ground.
    #[serde(rename = "PRCLSEL")]
    #[strum(serialize = "PRCLSEL")]
    ParcelSelect,
    /// Media Mail.
    #[serde(rename = "MM")]
    #[strum(serialize = "MM")]
    MediaMail,
}

/// A carrier-defined packaging category with its own size/weight envelope.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ParcelTypeId {
    #[default]
    #[serde(rename = "PKG")]
    #[strum(serialize = "PKG")]
    Package,
    #[serde(rename = "FRE")]
    #[strum(serialize = "FRE")]
    FlatRateEnvelope,
    #[serde(rename = "LGENV")]
    #[strum(serialize = "LGENV")]
    LargeEnvelope,
    #[serde(rename = "SOFTPACK")]
    #[strum(serialize = "SOFTPACK")]
    SoftPack,
    #[serde(rename = "LP")]
    #[strum(serialize = "LP")]
    LargePackage,
}

/// An optional add-on with its own eligibility and parameter rules.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SpecialServiceCode {
    #[serde(rename = "Ins")]
    #[strum(serialize = "Ins")]
    Insurance,
    #[serde(rename = "DelCon")]
    #[strum(serialize = "DelCon")]
    DeliveryConfirmation,
    #[serde(rename = "Sig")]
    #[strum(serialize = "Sig")]
    SignatureConfirmation,
    #[serde(rename = "ADSIG")]
    #[strum(serialize = "ADSIG")]
    AdultSignature,
    #[serde(rename = "Reg")]
    #[strum(serialize = "Reg")]
    RegisteredMail,
    #[serde(rename = "Cert")]
    #[strum(serialize = "Cert")]
    CertifiedMail,
    #[serde(rename = "RR")]
    #[strum(serialize = "RR")]
    ReturnReceipt,
    #[serde(rename = "COD")]
    #[strum(serialize = "COD")]
    CollectOnDelivery,
}

/// A name/value input supplied with a requested special service.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputParameter {
    pub name: String,
    pub value: String,
}

impl InputParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A special service requested on a rate line together with its inputs.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialService {
    pub special_service_id: SpecialServiceCode,
    #[serde(default)]
    pub input_parameters: Vec<InputParameter>,
}

impl SpecialService {
    pub fn new(special_service_id: SpecialServiceCode) -> Self {
        Self {
            special_service_id,
            input_parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.input_parameters.push(InputParameter::new(name, value));
        self
    }

    /// Looks up a supplied input parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.input_parameters
            .iter()
            .find(|parameter| parameter.name == name)
            .map(|parameter| parameter.value.as_str())
    }

    /// The declared value of this service, i.e. its `INPUT_VALUE` parameter
    /// parsed as a decimal. Missing and non-numeric values are both `None`.
    pub fn declared_value(&self) -> Option<Decimal> {
        Decimal::from_str(self.parameter(INPUT_VALUE)?).ok()
    }
}

/// One candidate carrier/service/parcel-type/special-services combination
/// attached to a shipment.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub carrier: Carrier,
    pub service_id: ServiceId,
    pub parcel_type: ParcelTypeId,
    #[serde(default)]
    pub special_services: Vec<SpecialService>,
}

impl Rate {
    pub fn new(carrier: Carrier, service_id: ServiceId, parcel_type: ParcelTypeId) -> Self {
        Self {
            carrier,
            service_id,
            parcel_type,
            special_services: Vec::new(),
        }
    }

    pub fn with_special_service(mut self, special_service: SpecialService) -> Self {
        self.special_services.push(special_service);
        self
    }

    /// The requested special service with the given code, if any.
    pub fn special_service(&self, code: SpecialServiceCode) -> Option<&SpecialService> {
        self.special_services
            .iter()
            .find(|service| service.special_service_id == code)
    }
}
