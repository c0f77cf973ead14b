//! Special-service parameter and relationship checks.

use {
    crate::{
        rules::SpecialServicesRule,
        validation::verdict::Rejection,
    },
    model::rate::SpecialService,
    rust_decimal::Decimal,
    std::str::FromStr,
};

/// Checks that every parameter the rule marks as required is supplied by
/// name, and that nothing unknown to the rule is supplied at all.
pub fn require_parameters(
    rule: &SpecialServicesRule,
    requested: &SpecialService,
) -> Result<(), Rejection> {
    for parameter in rule.required_parameters() {
        if requested.parameter(&parameter.name).is_none() {
            return Err(Rejection::MissingRequiredParameter {
                service: rule.special_service_id,
                parameter: parameter.name.clone(),
            });
        }
    }
    for supplied in &requested.input_parameters {
        if rule.parameter(&supplied.name).is_none() {
            return Err(Rejection::UnknownParameter {
                service: rule.special_service_id,
                parameter: supplied.name.clone(),
            });
        }
    }
    Ok(())
}

/// Range-checks every supplied parameter value that parses as a decimal
/// number against the rule's bounds for that parameter name. Non-numeric
/// values pass through unchecked.
pub fn check_parameter_values(
    rule: &SpecialServicesRule,
    requested: &SpecialService,
) -> Result<(), Rejection> {
    for supplied in &requested.input_parameters {
        let Some(parameter) = rule.parameter(&supplied.name) else {
            continue;
        };
        let Ok(value) = Decimal::from_str(&supplied.value) else {
            continue;
        };
        if value < parameter.min_value || value > parameter.max_value {
            return Err(Rejection::ParameterOutOfRange {
                service: rule.special_service_id,
                parameter: supplied.name.clone(),
                value,
                min: parameter.min_value,
                max: parameter.max_value,
            });
        }
    }
    Ok(())
}

/// Checks the rule's prerequisite constraints against the full set of
/// special services requested on the rate line.
///
/// Every declared prerequisite must be present, and when the prerequisite
/// carries a positive minimum, the present service's declared value (its
/// `INPUT_VALUE` parameter) must reach it. A rule without prerequisites is
/// vacuously satisfied.
pub fn check_prerequisites(
    rule: &SpecialServicesRule,
    requested: &[SpecialService],
) -> Result<(), Rejection> {
    for prerequisite in rule.prerequisites.values() {
        let present = requested
            .iter()
            .find(|service| service.special_service_id == prerequisite.special_service_id);
        let Some(service) = present else {
            return Err(Rejection::MissingPrerequisite {
                service: rule.special_service_id,
                prerequisite: prerequisite.special_service_id,
            });
        };
        if prerequisite.min_input_value > Decimal::ZERO
            && service
                .declared_value()
                .is_none_or(|value| value < prerequisite.min_input_value)
        {
            return Err(Rejection::PrerequisiteBelowMinimum {
                service: rule.special_service_id,
                prerequisite: prerequisite.special_service_id,
                minimum: prerequisite.min_input_value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            multimap::MultiMap,
            rules::{PrerequisiteRule, ServicesParameterRule},
        },
        maplit::btreemap,
        model::rate::{INPUT_VALUE, SpecialServiceCode},
    };

    fn insurance_rule() -> SpecialServicesRule {
        SpecialServicesRule {
            special_service_id: SpecialServiceCode::Insurance,
            branded_name: "Insurance".to_string(),
            category_id: "1".to_string(),
            category_name: "Insurance".to_string(),
            trackable: false,
            input_parameters: btreemap! {
                INPUT_VALUE.to_string() => ServicesParameterRule::new(
                    INPUT_VALUE,
                    true,
                    Decimal::ONE,
                    Decimal::from(5000),
                ),
            },
            prerequisites: MultiMap::new(),
            incompatible_special_services: vec![],
        }
    }

    fn cod_rule_requiring_insurance(minimum: Decimal) -> SpecialServicesRule {
        let mut prerequisites = MultiMap::new();
        prerequisites.add(
            SpecialServiceCode::Insurance,
            PrerequisiteRule {
                special_service_id: SpecialServiceCode::Insurance,
                min_input_value: minimum,
            },
        );
        SpecialServicesRule {
            special_service_id: SpecialServiceCode::CollectOnDelivery,
            branded_name: "Collect on Delivery".to_string(),
            category_id: "2".to_string(),
            category_name: "Delivery".to_string(),
            trackable: true,
            input_parameters: Default::default(),
            prerequisites,
            incompatible_special_services: vec![],
        }
    }

    #[test]
    fn missing_required_parameter_rejects() {
        let requested = SpecialService::new(SpecialServiceCode::Insurance);
        let rejection = require_parameters(&insurance_rule(), &requested).unwrap_err();
        assert_eq!(
            rejection,
            Rejection::MissingRequiredParameter {
                service: SpecialServiceCode::Insurance,
                parameter: INPUT_VALUE.to_string(),
            }
        );
    }

    #[test]
    fn unknown_parameter_rejects() {
        let requested = SpecialService::new(SpecialServiceCode::Insurance)
            .with_parameter(INPUT_VALUE, "100")
            .with_parameter("GIFT_WRAP", "yes");
        let rejection = require_parameters(&insurance_rule(), &requested).unwrap_err();
        assert!(matches!(rejection, Rejection::UnknownParameter { .. }));
    }

    #[test]
    fn supplied_parameters_satisfy_the_rule() {
        let requested =
            SpecialService::new(SpecialServiceCode::Insurance).with_parameter(INPUT_VALUE, "100");
        assert!(require_parameters(&insurance_rule(), &requested).is_ok());
        assert!(check_parameter_values(&insurance_rule(), &requested).is_ok());
    }

    #[test]
    fn out_of_range_value_rejects() {
        let requested =
            SpecialService::new(SpecialServiceCode::Insurance).with_parameter(INPUT_VALUE, "5001");
        let rejection = check_parameter_values(&insurance_rule(), &requested).unwrap_err();
        assert!(matches!(
            rejection,
            Rejection::ParameterOutOfRange { ref parameter, .. } if parameter == INPUT_VALUE
        ));
    }

    #[test]
    fn non_numeric_value_is_not_range_checked() {
        let requested = SpecialService::new(SpecialServiceCode::Insurance)
            .with_parameter(INPUT_VALUE, "a lot of money");
        assert!(check_parameter_values(&insurance_rule(), &requested).is_ok());
    }

    #[test]
    fn absent_prerequisite_rejects() {
        let rule = cod_rule_requiring_insurance(Decimal::from(100));
        let requested = vec![SpecialService::new(SpecialServiceCode::CollectOnDelivery)];
        let rejection = check_prerequisites(&rule, &requested).unwrap_err();
        assert!(matches!(rejection, Rejection::MissingPrerequisite { .. }));
    }

    #[test]
    fn prerequisite_below_minimum_rejects() {
        let rule = cod_rule_requiring_insurance(Decimal::from(100));
        let requested = vec![
            SpecialService::new(SpecialServiceCode::CollectOnDelivery),
            SpecialService::new(SpecialServiceCode::Insurance).with_parameter(INPUT_VALUE, "99"),
        ];
        let rejection = check_prerequisites(&rule, &requested).unwrap_err();
        assert!(matches!(
            rejection,
            Rejection::PrerequisiteBelowMinimum { .. }
        ));
    }

    #[test]
    fn prerequisite_at_minimum_is_satisfied() {
        let rule = cod_rule_requiring_insurance(Decimal::from(100));
        let requested = vec![
            SpecialService::new(SpecialServiceCode::CollectOnDelivery),
            SpecialService::new(SpecialServiceCode::Insurance).with_parameter(INPUT_VALUE, "100"),
        ];
        assert!(check_prerequisites(&rule, &requested).is_ok());
    }

    #[test]
    fn zero_minimum_prerequisite_only_requires_presence() {
        let rule = cod_rule_requiring_insurance(Decimal::ZERO);
        let requested = vec![
            SpecialService::new(SpecialServiceCode::CollectOnDelivery),
            SpecialService::new(SpecialServiceCode::Insurance),
        ];
        assert!(check_prerequisites(&rule, &requested).is_ok());
    }

    #[test]
    fn no_prerequisites_is_vacuously_satisfied() {
        let requested = vec![SpecialService::new(SpecialServiceCode::Insurance)];
        assert!(check_prerequisites(&insurance_rule(), &requested).is_ok());
    }
}
