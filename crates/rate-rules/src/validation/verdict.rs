//! Validation outcome types.

use {
    model::{
        CountryCode,
        parcel::{DimensionUnit, WeightUnit},
        rate::{Carrier, ParcelTypeId, ServiceId, SpecialServiceCode},
    },
    rust_decimal::Decimal,
};

/// Outcome of validating one shipment against a carrier rule tree.
///
/// Validation is binary: there is no partial or warning state, and an
/// invalid verdict carries the single first violation encountered in tree
/// order rather than an aggregated list.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Valid,
    Invalid(Rejection),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Human-readable explanation of the verdict.
    pub fn reason(&self) -> String {
        match self {
            Self::Valid => "Valid".to_string(),
            Self::Invalid(rejection) => rejection.to_string(),
        }
    }
}

/// Why a shipment failed validation.
///
/// Every variant names the offending field and value so callers can surface
/// the message directly instead of parsing a carrier-side rejection.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("shipment has no rate line to validate")]
    MissingRate,
    #[error("rate carrier {requested:?} does not match the rule set carrier {rule:?}")]
    CarrierMismatch { requested: Carrier, rule: Carrier },
    #[error("destination country {requested} is not covered by this rule set (expected {rule})")]
    DestinationMismatch {
        requested: CountryCode,
        rule: CountryCode,
    },
    #[error("origin country {requested} is not covered by this rule set (expected {rule})")]
    OriginMismatch {
        requested: CountryCode,
        rule: CountryCode,
    },
    #[error("service {service:?} is not offered by {carrier:?} on this lane")]
    UnsupportedService { carrier: Carrier, service: ServiceId },
    #[error("parcel type {parcel_type:?} is not available for service {service:?}")]
    UnsupportedParcelType {
        service: ServiceId,
        parcel_type: ParcelTypeId,
    },
    #[error("special service {code:?} is not available for parcel type {parcel_type:?}")]
    UnsupportedSpecialService {
        parcel_type: ParcelTypeId,
        code: SpecialServiceCode,
    },
    #[error(
        "parcel dimensions are measured in {measured:?} but the rules for {parcel_type:?} use {rule:?}"
    )]
    DimensionUnitMismatch {
        parcel_type: ParcelTypeId,
        measured: DimensionUnit,
        rule: DimensionUnit,
    },
    #[error(
        "parcel weight is measured in {measured:?} but the rules for {parcel_type:?} use {rule:?}"
    )]
    WeightUnitMismatch {
        parcel_type: ParcelTypeId,
        measured: WeightUnit,
        rule: WeightUnit,
    },
    #[error(
        "parcel dimensions {length} x {height} x {width} {unit:?} do not meet the dimension \
         requirements of parcel type {parcel_type:?}"
    )]
    DimensionsOutOfRange {
        parcel_type: ParcelTypeId,
        length: f64,
        height: f64,
        width: f64,
        unit: DimensionUnit,
    },
    #[error(
        "parcel weight {weight} {unit:?} does not meet the weight requirements of parcel type \
         {parcel_type:?}"
    )]
    WeightOutOfRange {
        parcel_type: ParcelTypeId,
        weight: f64,
        unit: WeightUnit,
    },
    #[error("special service {service:?} is missing required parameter {parameter}")]
    MissingRequiredParameter {
        service: SpecialServiceCode,
        parameter: String,
    },
    #[error("special service {service:?} does not accept parameter {parameter}")]
    UnknownParameter {
        service: SpecialServiceCode,
        parameter: String,
    },
    #[error(
        "parameter {parameter} of special service {service:?} has value {value} outside the \
         allowed range {min} to {max}"
    )]
    ParameterOutOfRange {
        service: SpecialServiceCode,
        parameter: String,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },
    #[error("special service {service:?} requires {prerequisite:?} to also be requested")]
    MissingPrerequisite {
        service: SpecialServiceCode,
        prerequisite: SpecialServiceCode,
    },
    #[error(
        "special service {service:?} requires {prerequisite:?} with a declared value of at least \
         {minimum}"
    )]
    PrerequisiteBelowMinimum {
        service: SpecialServiceCode,
        prerequisite: SpecialServiceCode,
        minimum: Decimal,
    },
    #[error("special services {service:?} and {other:?} cannot be combined")]
    IncompatibleSpecialServices {
        service: SpecialServiceCode,
        other: SpecialServiceCode,
    },
}
