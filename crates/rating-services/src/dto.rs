//! Wire shapes of the rating-services response.
//!
//! The response is an array of per-service records: each service lists its
//! parcel-type records, each of those declares the weight/dimension
//! envelope and the special-service rules with their nested parameter,
//! prerequisite and incompatibility sub-rules. Numeric money-like fields
//! arrive as decimal strings and are kept exact.

use {
    model::{
        CountryCode,
        parcel::{DimensionUnit, WeightUnit},
        rate::{Carrier, ParcelTypeId, ServiceId, SpecialServiceCode},
    },
    rust_decimal::Decimal,
    serde::{Deserialize, Serialize},
    serde_with::{DisplayFromStr, serde_as},
};

/// One carrier lane: the tuple the rating-services call is keyed by.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleQuery {
    pub carrier: Carrier,
    pub origin_country: CountryCode,
    pub destination_country: CountryCode,
}

impl RuleQuery {
    pub fn new(carrier: Carrier, origin_country: CountryCode, destination_country: CountryCode) -> Self {
        Self {
            carrier,
            origin_country,
            destination_country,
        }
    }
}

/// Top-level response record: the rules of one carrier service.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRuleRecord {
    pub service_id: ServiceId,
    #[serde(default)]
    pub branded_name: String,
    #[serde(default)]
    pub parcel_type_rules: Vec<ParcelTypeRuleRecord>,
}

/// The constraints of one parcel type under one service.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelTypeRuleRecord {
    pub parcel_type: ParcelTypeId,
    #[serde(default)]
    pub branded_name: String,
    /// Rate category this parcel-type entry was published under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_type_id: Option<String>,
    pub weight: WeightLimitsRecord,
    pub dimensions: DimensionLimitsRecord,
    #[serde(default)]
    pub special_service_rules: Vec<SpecialServiceRuleRecord>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightLimitsRecord {
    pub min_weight: f64,
    pub max_weight: f64,
    #[serde(default)]
    pub unit_of_measurement: WeightUnit,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionLimitsRecord {
    pub min_length: f64,
    pub max_length: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub min_width: f64,
    pub max_width: f64,
    #[serde(default)]
    pub unit_of_measurement: DimensionUnit,
}

/// Eligibility rules of one special service under one parcel type.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialServiceRuleRecord {
    pub special_service_id: SpecialServiceCode,
    #[serde(default)]
    pub branded_name: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub trackable: bool,
    #[serde(default)]
    pub input_parameter_rules: Vec<InputParameterRuleRecord>,
    #[serde(default)]
    pub prerequisite_rules: Vec<PrerequisiteRuleRecord>,
    #[serde(default)]
    pub incompatible_special_services: Vec<SpecialServiceCode>,
}

#[serde_as]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputParameterRuleRecord {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde_as(as = "DisplayFromStr")]
    pub min_value: Decimal,
    #[serde_as(as = "DisplayFromStr")]
    pub max_value: Decimal,
    /// Below this declared value the add-on is free of charge.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[serde_as]
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisiteRuleRecord {
    pub special_service_id: SpecialServiceCode,
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    pub min_input_value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_rating_services_response() {
        let records: Vec<ServiceRuleRecord> = serde_json::from_value(serde_json::json!([
            {
                "serviceId": "PM",
                "brandedName": "Priority Mail",
                "parcelTypeRules": [
                    {
                        "parcelType": "PKG",
                        "brandedName": "Package",
                        "rateTypeId": "COMMERCIAL_BASE",
                        "weight": {
                            "minWeight": 0.0,
                            "maxWeight": 1120.0,
                            "unitOfMeasurement": "OZ"
                        },
                        "dimensions": {
                            "minLength": 0.25,
                            "maxLength": 108.0,
                            "minHeight": 0.125,
                            "maxHeight": 108.0,
                            "minWidth": 0.125,
                            "maxWidth": 108.0,
                            "unitOfMeasurement": "IN"
                        },
                        "specialServiceRules": [
                            {
                                "specialServiceId": "Ins",
                                "brandedName": "Insurance",
                                "categoryId": "1",
                                "categoryName": "Insurance",
                                "trackable": false,
                                "inputParameterRules": [
                                    {
                                        "name": "INPUT_VALUE",
                                        "required": true,
                                        "minValue": "0.01",
                                        "maxValue": "5000",
                                        "freeValue": "100",
                                        "format": "d{0,5}.d{2}",
                                        "description": "Insured value"
                                    }
                                ],
                                "prerequisiteRules": [],
                                "incompatibleSpecialServices": ["Reg"]
                            }
                        ]
                    }
                ]
            }
        ]))
        .unwrap();

        assert_eq!(records.len(), 1);
        let service = &records[0];
        assert_eq!(service.service_id, ServiceId::PriorityMail);
        let parcel_type = &service.parcel_type_rules[0];
        assert_eq!(parcel_type.parcel_type, ParcelTypeId::Package);
        assert_eq!(parcel_type.weight.max_weight, 1120.0);
        let special = &parcel_type.special_service_rules[0];
        assert_eq!(special.special_service_id, SpecialServiceCode::Insurance);
        let parameter = &special.input_parameter_rules[0];
        assert_eq!(parameter.min_value, Decimal::new(1, 2));
        assert_eq!(parameter.free_value, Some(Decimal::from(100)));
        assert_eq!(
            special.incompatible_special_services,
            vec![SpecialServiceCode::RegisteredMail]
        );
    }

    #[test]
    fn absent_optional_fields_default() {
        let record: SpecialServiceRuleRecord = serde_json::from_value(serde_json::json!({
            "specialServiceId": "DelCon",
        }))
        .unwrap();
        assert!(!record.trackable);
        assert!(record.input_parameter_rules.is_empty());
        assert!(record.prerequisite_rules.is_empty());
        assert!(record.incompatible_special_services.is_empty());
    }

    #[test]
    fn prerequisite_minimum_defaults_to_zero() {
        let record: PrerequisiteRuleRecord = serde_json::from_value(serde_json::json!({
            "specialServiceId": "Ins",
        }))
        .unwrap();
        assert_eq!(record.min_input_value, Decimal::ZERO);
    }
}
