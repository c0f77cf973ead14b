//! The four-level carrier rule tree and its constraint sub-rules.
//!
//! Carrier → Service → ParcelType → SpecialService, each level keyed by the
//! discriminator a candidate shipment must match to descend further. All
//! nodes are immutable once assembled and safe to share behind an `Arc`.

use {
    crate::multimap::MultiMap,
    model::{
        CountryCode,
        parcel::{DimensionUnit, WeightUnit},
        rate::{Carrier, ParcelTypeId, ServiceId, SpecialServiceCode},
    },
    rust_decimal::Decimal,
    std::collections::BTreeMap,
};

/// The complete rule set for shipping with one carrier from one country to
/// another. Typically fetched once per lane and cached, since the upstream
/// rating-services call is expensive.
#[derive(Clone, Debug)]
pub struct CarrierRule {
    pub carrier: Carrier,
    pub origin_country: CountryCode,
    pub destination_country: CountryCode,
    pub services: MultiMap<ServiceId, ServiceRule>,
}

/// The parcel-type options available under one carrier service.
#[derive(Clone, Debug)]
pub struct ServiceRule {
    pub service_id: ServiceId,
    pub branded_name: String,
    pub parcel_types: MultiMap<ParcelTypeId, ParcelTypeRule>,
}

/// Inclusive dimension envelope of a parcel type, in the carrier's units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionBounds {
    pub min_length: f64,
    pub max_length: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub unit: DimensionUnit,
}

/// Inclusive weight envelope of a parcel type, in the carrier's units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightBounds {
    pub min: f64,
    pub max: f64,
    pub unit: WeightUnit,
}

/// Which special services, and which physical constraints, apply to
/// shipments of one parcel type under one service.
#[derive(Clone, Debug)]
pub struct ParcelTypeRule {
    pub parcel_type: ParcelTypeId,
    pub branded_name: String,
    pub dimensions: DimensionBounds,
    pub weight: WeightBounds,
    pub special_services: MultiMap<SpecialServiceCode, SpecialServicesRule>,
}

/// Eligibility and input constraints of one special service.
#[derive(Clone, Debug)]
pub struct SpecialServicesRule {
    pub special_service_id: SpecialServiceCode,
    pub branded_name: String,
    pub category_id: String,
    pub category_name: String,
    pub trackable: bool,
    /// Constraints on the input parameters a request may supply, by
    /// parameter name.
    pub input_parameters: BTreeMap<String, ServicesParameterRule>,
    /// Services that must also be present on the rate line, each with a
    /// minimum declared value.
    pub prerequisites: MultiMap<SpecialServiceCode, PrerequisiteRule>,
    /// Services that cannot be combined with this one.
    pub incompatible_special_services: Vec<SpecialServiceCode>,
}

impl SpecialServicesRule {
    pub fn is_incompatible_with(&self, code: SpecialServiceCode) -> bool {
        self.incompatible_special_services.contains(&code)
    }

    /// The parameter constraints a request must satisfy by supplying the
    /// parameter, in name order.
    pub fn required_parameters(&self) -> impl Iterator<Item = &ServicesParameterRule> {
        self.input_parameters
            .values()
            .filter(|parameter| parameter.required)
    }

    pub fn parameter(&self, name: &str) -> Option<&ServicesParameterRule> {
        self.input_parameters.get(name)
    }
}

/// The legality envelope for one named input parameter on a special service,
/// e.g. the declared insured value.
#[derive(Clone, Debug, PartialEq)]
pub struct ServicesParameterRule {
    pub name: String,
    pub required: bool,
    pub min_value: Decimal,
    pub max_value: Decimal,
    /// Value below which the service is free and the parameter need not be
    /// charged for.
    pub free_value: Option<Decimal>,
    pub format: Option<String>,
    pub description: Option<String>,
}

impl ServicesParameterRule {
    pub fn new(name: impl Into<String>, required: bool, min_value: Decimal, max_value: Decimal) -> Self {
        Self {
            name: name.into(),
            required,
            min_value,
            max_value,
            free_value: None,
            format: None,
            description: None,
        }
    }
}

/// A special service that must accompany another one, optionally above a
/// minimum declared value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrerequisiteRule {
    pub special_service_id: SpecialServiceCode,
    pub min_input_value: Decimal,
}
