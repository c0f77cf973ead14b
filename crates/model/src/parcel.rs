use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Unit the parcel dimensions are measured in.
#[derive(
    AsRefStr, Clone, Copy, Debug, Default, Deserialize, EnumString, Eq, Hash, PartialEq, Serialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum DimensionUnit {
    #[default]
    In,
    Cm,
}

/// Unit the parcel weight is measured in.
#[derive(
    AsRefStr, Clone, Copy, Debug, Default, Deserialize, EnumString, Eq, Hash, PartialEq, Serialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightUnit {
    #[default]
    Oz,
    Gm,
}

/// Measured parcel dimensions.
///
/// Rule bounds published by the carrier are expressed in the carrier's
/// canonical units; the validator rejects a parcel whose declared unit does
/// not match the rule's instead of converting.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub length: f64,
    pub height: f64,
    pub width: f64,
    #[serde(default)]
    pub unit_of_measurement: DimensionUnit,
}

/// Measured parcel weight.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Weight {
    pub weight: f64,
    #[serde(default)]
    pub unit_of_measurement: WeightUnit,
}

/// The physical package of a shipment.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub dimension: Dimension,
    pub weight: Weight,
}

impl Parcel {
    pub fn new(length: f64, height: f64, width: f64, weight: f64) -> Self {
        Self {
            dimension: Dimension {
                length,
                height,
                width,
                unit_of_measurement: Default::default(),
            },
            weight: Weight {
                weight,
                unit_of_measurement: Default::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_wire_codes() {
        assert_eq!(serde_json::to_value(DimensionUnit::In).unwrap(), "IN");
        assert_eq!(serde_json::to_value(WeightUnit::Gm).unwrap(), "GM");
        let unit: WeightUnit = serde_json::from_value("OZ".into()).unwrap();
        assert_eq!(unit, WeightUnit::Oz);
    }

    #[test]
    fn parcel_defaults_to_imperial_units() {
        let parcel = Parcel::new(10.0, 5.0, 3.0, 16.0);
        assert_eq!(parcel.dimension.unit_of_measurement, DimensionUnit::In);
        assert_eq!(parcel.weight.unit_of_measurement, WeightUnit::Oz);
    }
}
