//! Folds the flat rating-services records into the indexed rule tree.

use {
    crate::dto::{
        ParcelTypeRuleRecord, PrerequisiteRuleRecord, RuleQuery, ServiceRuleRecord,
        SpecialServiceRuleRecord,
    },
    rate_rules::{
        multimap::MultiMap,
        rules::{
            CarrierRule, DimensionBounds, ParcelTypeRule, PrerequisiteRule, ServiceRule,
            ServicesParameterRule, SpecialServicesRule, WeightBounds,
        },
    },
};

/// Builds the carrier rule tree for one lane out of the flat response
/// records, indexing every level by its discriminator. Record order within
/// a key is preserved.
pub fn assemble(query: &RuleQuery, records: Vec<ServiceRuleRecord>) -> CarrierRule {
    let mut services = MultiMap::new();
    for record in records {
        services.add(record.service_id, service_rule(record));
    }
    tracing::debug!(
        carrier = ?query.carrier,
        origin = %query.origin_country,
        destination = %query.destination_country,
        services = services.len(),
        "assembled carrier rule tree",
    );
    CarrierRule {
        carrier: query.carrier,
        origin_country: query.origin_country,
        destination_country: query.destination_country,
        services,
    }
}

fn service_rule(record: ServiceRuleRecord) -> ServiceRule {
    let mut parcel_types = MultiMap::new();
    for parcel_type in record.parcel_type_rules {
        parcel_types.add(parcel_type.parcel_type, parcel_type_rule(parcel_type));
    }
    ServiceRule {
        service_id: record.service_id,
        branded_name: record.branded_name,
        parcel_types,
    }
}

fn parcel_type_rule(record: ParcelTypeRuleRecord) -> ParcelTypeRule {
    let mut special_services = MultiMap::new();
    for special_service in record.special_service_rules {
        special_services.add(
            special_service.special_service_id,
            special_services_rule(special_service),
        );
    }
    ParcelTypeRule {
        parcel_type: record.parcel_type,
        branded_name: record.branded_name,
        dimensions: DimensionBounds {
            min_length: record.dimensions.min_length,
            max_length: record.dimensions.max_length,
            min_height: record.dimensions.min_height,
            max_height: record.dimensions.max_height,
            min_width: record.dimensions.min_width,
            max_width: record.dimensions.max_width,
            unit: record.dimensions.unit_of_measurement,
        },
        weight: WeightBounds {
            min: record.weight.min_weight,
            max: record.weight.max_weight,
            unit: record.weight.unit_of_measurement,
        },
        special_services,
    }
}

fn special_services_rule(record: SpecialServiceRuleRecord) -> SpecialServicesRule {
    let mut prerequisites = MultiMap::new();
    for prerequisite in record.prerequisite_rules {
        prerequisites.add(
            prerequisite.special_service_id,
            prerequisite_rule(prerequisite),
        );
    }
    SpecialServicesRule {
        special_service_id: record.special_service_id,
        branded_name: record.branded_name,
        category_id: record.category_id,
        category_name: record.category_name,
        trackable: record.trackable,
        input_parameters: record
            .input_parameter_rules
            .into_iter()
            .map(|parameter| {
                (
                    parameter.name.clone(),
                    ServicesParameterRule {
                        name: parameter.name,
                        required: parameter.required,
                        min_value: parameter.min_value,
                        max_value: parameter.max_value,
                        free_value: parameter.free_value,
                        format: parameter.format,
                        description: parameter.description,
                    },
                )
            })
            .collect(),
        prerequisites,
        incompatible_special_services: record.incompatible_special_services,
    }
}

fn prerequisite_rule(record: PrerequisiteRuleRecord) -> PrerequisiteRule {
    PrerequisiteRule {
        special_service_id: record.special_service_id,
        min_input_value: record.min_input_value,
    }
}
