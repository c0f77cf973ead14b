//! Carrier rate-rule validation engine.
//!
//! Carriers publish constraint trees describing which services exist for a
//! carrier and country pair, which parcel types each service allows, which
//! special services each parcel type allows, and the parameter, prerequisite
//! and incompatibility constraints of each special service. This crate holds
//! the assembled tree ([`rules::CarrierRule`] and descendants) and walks a
//! candidate shipment through it ([`validation::validate`]) so that callers
//! learn about a doomed shipment immediately instead of waiting for a
//! carrier-side rejection after a network round-trip.
//!
//! The tree is built once (see the `rating-services` crate) and is read-only
//! afterwards, so one assembled tree can be shared across any number of
//! concurrent validations.

pub mod multimap;
pub mod rules;
pub mod validation;
