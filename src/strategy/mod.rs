//! # Strategy
//!
//! A [`Shipping`] context holds a swappable [`ShippingStrategy`] and delegates cost
//! calculation to it.
//!
//! ```rust
//! use pattern_catalog::strategy::{FedEx, Shipment, Shipping, StrategyError, Ups};
//! use std::sync::Arc;
//!
//! let parcel = Shipment::new("Alabama", "Georgia", 1.56);
//! let mut shipping = Shipping::new();
//! assert_eq!(shipping.calculate(&parcel), Err(StrategyError::NoStrategySet));
//!
//! shipping.set_strategy(Arc::new(FedEx));
//! let fedex = shipping.calculate(&parcel).unwrap();
//! shipping.set_strategy(Arc::new(Ups));
//! assert_eq!(fedex, 2.45);
//! assert_eq!(shipping.calculate(&parcel).unwrap(), 1.56);
//! ```
//!
//! Results are plain numbers, so replacing the strategy never rewrites a cost that was
//! already handed out.

pub mod carrier;
pub mod error;

pub use carrier::*;
pub use error::*;

use std::sync::Arc;
use tracing::{debug, warn};

/// Context object that prices shipments with whichever strategy it currently holds.
#[derive(Debug, Clone, Default)]
pub struct Shipping {
    strategy: Option<Arc<dyn ShippingStrategy>>,
}

impl Shipping {
    /// A context with no strategy yet.
    pub fn new() -> Self {
        Self { strategy: None }
    }

    pub fn with_strategy(strategy: Arc<dyn ShippingStrategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// Replaces the current strategy.
    pub fn set_strategy(&mut self, strategy: Arc<dyn ShippingStrategy>) {
        debug!(carrier = strategy.name(), "Strategy set");
        self.strategy = Some(strategy);
    }

    /// Name of the carrier currently in use, if any.
    pub fn strategy_name(&self) -> Option<&str> {
        self.strategy.as_deref().map(|s| s.name())
    }

    /// Prices `shipment` with the current strategy.
    ///
    /// # Errors
    /// [`StrategyError::NoStrategySet`] if no strategy has been set.
    pub fn calculate(&self, shipment: &Shipment) -> Result<f64, StrategyError> {
        let Some(strategy) = self.strategy.as_deref() else {
            warn!(?shipment, "Calculate failed");
            return Err(StrategyError::NoStrategySet);
        };
        let cost = strategy.calculate(shipment);
        debug!(carrier = strategy.name(), cost, "Calculated");
        Ok(cost)
    }
}
