//! Carrier calculators implementing [`ShippingStrategy`].
//!
//! The tariffs are placeholders: every carrier ignores the shipment and charges a
//! flat rate. Swap in real pricing by implementing [`ShippingStrategy`] again.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;

use super::CarrierError;

/// Describes what is being shipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Shipment {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// An interchangeable way of pricing a [`Shipment`].
///
/// Implementations must be pure: the same shipment always costs the same.
pub trait ShippingStrategy: Debug + Send + Sync {
    /// Display name of the carrier.
    fn name(&self) -> &str;

    fn calculate(&self, shipment: &Shipment) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FedEx;

impl ShippingStrategy for FedEx {
    fn name(&self) -> &str {
        "Fedex"
    }

    fn calculate(&self, _shipment: &Shipment) -> f64 {
        2.45
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ups;

impl ShippingStrategy for Ups {
    fn name(&self) -> &str {
        "UPS"
    }

    fn calculate(&self, _shipment: &Shipment) -> f64 {
        1.56
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Usps;

impl ShippingStrategy for Usps {
    fn name(&self) -> &str {
        "USPS"
    }

    fn calculate(&self, _shipment: &Shipment) -> f64 {
        4.5
    }
}

/// The closed set of carriers shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Carrier {
    FedEx,
    Ups,
    Usps,
}

impl Carrier {
    pub const ALL: [Carrier; 3] = [Carrier::FedEx, Carrier::Ups, Carrier::Usps];

    pub fn strategy(self) -> Arc<dyn ShippingStrategy> {
        match self {
            Carrier::FedEx => Arc::new(FedEx),
            Carrier::Ups => Arc::new(Ups),
            Carrier::Usps => Arc::new(Usps),
        }
    }
}

impl FromStr for Carrier {
    type Err = CarrierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fedex" => Ok(Carrier::FedEx),
            "ups" => Ok(Carrier::Ups),
            "usps" => Ok(Carrier::Usps),
            _ => Err(CarrierError::Unknown(s.to_string())),
        }
    }
}
