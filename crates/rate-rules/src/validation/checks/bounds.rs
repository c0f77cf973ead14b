//! Dimension and weight envelope checks.
//!
//! All comparisons are inclusive and axis-to-axis: a parcel's length is
//! checked against the length bounds only, with no attempt to rotate the
//! parcel into a fitting orientation. No unit conversion is performed
//! either; a parcel declaring different units than the rule is rejected
//! outright, so callers must normalize units upstream.

use {
    crate::{
        rules::{DimensionBounds, ParcelTypeRule, WeightBounds},
        validation::verdict::Rejection,
    },
    model::parcel::Parcel,
};

/// Whether the measured dimensions fall within the rule's envelope on all
/// three axes independently. Ignores units.
pub fn fits_dimensions(parcel: &Parcel, bounds: &DimensionBounds) -> bool {
    let dimension = &parcel.dimension;
    dimension.length >= bounds.min_length
        && dimension.length <= bounds.max_length
        && dimension.height >= bounds.min_height
        && dimension.height <= bounds.max_height
        && dimension.width >= bounds.min_width
        && dimension.width <= bounds.max_width
}

/// Whether the measured weight falls within the rule's envelope. Ignores
/// units.
pub fn holds_weight(parcel: &Parcel, bounds: &WeightBounds) -> bool {
    parcel.weight.weight >= bounds.min && parcel.weight.weight <= bounds.max
}

/// Checks the parcel's dimensions against a parcel-type rule, including the
/// unit guard.
pub fn check_dimensions(parcel: &Parcel, rule: &ParcelTypeRule) -> Result<(), Rejection> {
    if parcel.dimension.unit_of_measurement != rule.dimensions.unit {
        return Err(Rejection::DimensionUnitMismatch {
            parcel_type: rule.parcel_type,
            measured: parcel.dimension.unit_of_measurement,
            rule: rule.dimensions.unit,
        });
    }
    if !fits_dimensions(parcel, &rule.dimensions) {
        return Err(Rejection::DimensionsOutOfRange {
            parcel_type: rule.parcel_type,
            length: parcel.dimension.length,
            height: parcel.dimension.height,
            width: parcel.dimension.width,
            unit: parcel.dimension.unit_of_measurement,
        });
    }
    Ok(())
}

/// Checks the parcel's weight against a parcel-type rule, including the
/// unit guard.
pub fn check_weight(parcel: &Parcel, rule: &ParcelTypeRule) -> Result<(), Rejection> {
    if parcel.weight.unit_of_measurement != rule.weight.unit {
        return Err(Rejection::WeightUnitMismatch {
            parcel_type: rule.parcel_type,
            measured: parcel.weight.unit_of_measurement,
            rule: rule.weight.unit,
        });
    }
    if !holds_weight(parcel, &rule.weight) {
        return Err(Rejection::WeightOutOfRange {
            parcel_type: rule.parcel_type,
            weight: parcel.weight.weight,
            unit: parcel.weight.unit_of_measurement,
        });
    }
    Ok(())
}
