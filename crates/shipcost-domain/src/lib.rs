//! Domain layer: shipment/route/tariff records, cost rules and fleet selection

pub mod model;
pub mod repository;
pub mod service;
