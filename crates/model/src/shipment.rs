use crate::{address::Address, parcel::Parcel, rate::Rate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A candidate shipment as submitted for rating and validation.
///
/// The validation engine reads this graph and never mutates it. The first
/// rate line is the one validated against a carrier's rule tree.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub from_address: Address,
    pub to_address: Address,
    pub parcel: Parcel,
    #[serde(default)]
    pub rates: Vec<Rate>,
    /// Intended ship date; rates may differ by date, validation ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<NaiveDate>,
}

impl Shipment {
    /// The rate line validation binds to.
    pub fn first_rate(&self) -> Option<&Rate> {
        self.rates.first()
    }
}

#[derive(Clone, Default, Debug)]
pub struct ShipmentBuilder(Shipment);

impl ShipmentBuilder {
    pub fn with_from_address(mut self, address: Address) -> Self {
        self.0.from_address = address;
        self
    }

    pub fn with_to_address(mut self, address: Address) -> Self {
        self.0.to_address = address;
        self
    }

    pub fn with_parcel(mut self, parcel: Parcel) -> Self {
        self.0.parcel = parcel;
        self
    }

    pub fn with_rate(mut self, rate: Rate) -> Self {
        self.0.rates.push(rate);
        self
    }

    pub fn with_ship_date(mut self, ship_date: NaiveDate) -> Self {
        self.0.ship_date = Some(ship_date);
        self
    }

    pub fn build(self) -> Shipment {
        self.0
    }
}
