//! The tree-walking shipment validator.
//!
//! One dedicated check routine per tree level, invoked top-down, short
//! circuiting on the first failure: carrier, then service, then parcel
//! type, then special services. Each routine threads its outcome through
//! `Result`, so the walk carries no mutable state and a single assembled
//! rule tree can back any number of concurrent validations.

pub mod checks;
pub mod verdict;

pub use verdict::{Rejection, Verdict};

use {
    crate::{
        multimap::MissingKey,
        rules::{CarrierRule, ParcelTypeRule, ServiceRule, SpecialServicesRule},
    },
    model::{rate::Rate, shipment::Shipment},
};

/// The rule tree itself is inconsistent (a lookup hit a key that was never
/// indexed). This is a defect in rule assembly, not in the shipment, and is
/// deliberately not folded into [`Verdict::Invalid`].
#[derive(Debug, thiserror::Error)]
#[error("malformed rule tree: {0}")]
pub struct RuleTreeError(#[from] MissingKey);

/// Either a shipment-level rejection or a rule-tree integrity failure.
/// Internal to the walk; the entry point splits the two apart.
enum Violation {
    Reject(Rejection),
    Tree(MissingKey),
}

impl From<Rejection> for Violation {
    fn from(rejection: Rejection) -> Self {
        Self::Reject(rejection)
    }
}

impl From<MissingKey> for Violation {
    fn from(err: MissingKey) -> Self {
        Self::Tree(err)
    }
}

/// Validates a candidate shipment against a carrier's assembled rule tree.
///
/// Binds the shipment's first rate line as the active rate and walks the
/// tree top-down. Returns the verdict for shipment-level outcomes; only a
/// malformed rule tree surfaces as an error.
pub fn validate(shipment: &Shipment, rules: &CarrierRule) -> Result<Verdict, RuleTreeError> {
    match walk(shipment, rules) {
        Ok(()) => Ok(Verdict::Valid),
        Err(Violation::Reject(rejection)) => {
            tracing::debug!(%rejection, "shipment failed rate-rule validation");
            Ok(Verdict::Invalid(rejection))
        }
        Err(Violation::Tree(err)) => Err(err.into()),
    }
}

fn walk(shipment: &Shipment, rules: &CarrierRule) -> Result<(), Violation> {
    let rate = shipment.first_rate().ok_or(Rejection::MissingRate)?;
    check_carrier(shipment, rate, rules)
}

fn check_carrier(shipment: &Shipment, rate: &Rate, rule: &CarrierRule) -> Result<(), Violation> {
    if rate.carrier != rule.carrier {
        return Err(Rejection::CarrierMismatch {
            requested: rate.carrier,
            rule: rule.carrier,
        }
        .into());
    }
    if shipment.to_address.country_code != rule.destination_country {
        return Err(Rejection::DestinationMismatch {
            requested: shipment.to_address.country_code,
            rule: rule.destination_country,
        }
        .into());
    }
    if shipment.from_address.country_code != rule.origin_country {
        return Err(Rejection::OriginMismatch {
            requested: shipment.from_address.country_code,
            rule: rule.origin_country,
        }
        .into());
    }
    if !rule.services.contains_key(&rate.service_id) {
        return Err(Rejection::UnsupportedService {
            carrier: rule.carrier,
            service: rate.service_id,
        }
        .into());
    }
    for service in rule.services.get(&rate.service_id)? {
        check_service(shipment, rate, service)?;
    }
    Ok(())
}

fn check_service(shipment: &Shipment, rate: &Rate, rule: &ServiceRule) -> Result<(), Violation> {
    if rule.service_id != rate.service_id {
        // The multi-map can hold several rules per key; skip the ones that
        // are not for the active rate's service.
        return Ok(());
    }
    if !rule.parcel_types.contains_key(&rate.parcel_type) {
        return Err(Rejection::UnsupportedParcelType {
            service: rule.service_id,
            parcel_type: rate.parcel_type,
        }
        .into());
    }
    for parcel_type in rule.parcel_types.get(&rate.parcel_type)? {
        check_parcel_type(shipment, rate, parcel_type)?;
    }
    Ok(())
}

fn check_parcel_type(
    shipment: &Shipment,
    rate: &Rate,
    rule: &ParcelTypeRule,
) -> Result<(), Violation> {
    if rule.parcel_type != rate.parcel_type {
        return Ok(());
    }
    for requested in &rate.special_services {
        if !rule.special_services.contains_key(&requested.special_service_id) {
            return Err(Rejection::UnsupportedSpecialService {
                parcel_type: rule.parcel_type,
                code: requested.special_service_id,
            }
            .into());
        }
    }
    // The physical envelope applies whether or not any special services
    // are requested.
    checks::bounds::check_dimensions(&shipment.parcel, rule)?;
    checks::bounds::check_weight(&shipment.parcel, rule)?;
    for requested in &rate.special_services {
        for special_service in rule.special_services.get(&requested.special_service_id)? {
            check_special_services(rate, special_service)?;
        }
    }
    Ok(())
}

fn check_special_services(rate: &Rate, rule: &SpecialServicesRule) -> Result<(), Violation> {
    for requested in &rate.special_services {
        if requested.special_service_id == rule.special_service_id {
            if !rule.input_parameters.is_empty() {
                checks::parameters::require_parameters(rule, requested)?;
                checks::parameters::check_parameter_values(rule, requested)?;
            }
        } else if rule.is_incompatible_with(requested.special_service_id) {
            return Err(Rejection::IncompatibleSpecialServices {
                service: rule.special_service_id,
                other: requested.special_service_id,
            }
            .into());
        }
    }
    checks::parameters::check_prerequisites(rule, &rate.special_services)?;
    Ok(())
}

/// Convenience wrapper that remembers the outcome of the last run, for
/// callers that want to ask `is_valid()` / `reason()` after the fact.
///
/// Holds the verdict of one run at a time: use one instance per validation
/// or re-run before reading the accessors.
#[derive(Debug, Default)]
pub struct ShipmentValidator {
    verdict: Option<Verdict>,
}

impl ShipmentValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores the verdict, returning whether the shipment
    /// passed.
    pub fn validate(
        &mut self,
        shipment: &Shipment,
        rules: &CarrierRule,
    ) -> Result<bool, RuleTreeError> {
        let verdict = validate(shipment, rules)?;
        let valid = verdict.is_valid();
        self.verdict = Some(verdict);
        Ok(valid)
    }

    /// The verdict of the last run, if any.
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.verdict.as_ref().is_some_and(Verdict::is_valid)
    }

    /// Reason of the last run, or "Not validated" before the first run.
    pub fn reason(&self) -> String {
        match &self.verdict {
            Some(verdict) => verdict.reason(),
            None => "Not validated".to_string(),
        }
    }
}
