//! The six standard demonstrations run by [`Catalog::standard`](super::Catalog::standard).

use std::sync::{Arc, Mutex, PoisonError};

use super::Demonstration;
use crate::builder::{Address, User, UserOptions};
use crate::factory::EmployeeFactory;
use crate::iterator::{Cursor, Item};
use crate::observer::{Observer, Subject};
use crate::singleton::{self, ProcessRegistry};
use crate::strategy::{Carrier, Shipment, Shipping};
use crate::CatalogError;

/// Hires a small team through the [`EmployeeFactory`] and has each member introduce
/// themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryDemo;

impl Demonstration for FactoryDemo {
    fn title(&self) -> &'static str {
        "Factory Method"
    }

    fn run(&self) -> Result<Vec<String>, CatalogError> {
        let employees =
            EmployeeFactory::new().create_all([("Patrick", 2u8), ("LeShawn", 1), ("Alfred", 2)])?;
        Ok(employees.iter().map(|e| e.introduce()).collect())
    }
}

/// Acquires the process manager twice and reports whether both handles are the same
/// instance.
#[derive(Debug, Clone, Copy)]
pub struct SingletonDemo {
    registry: &'static ProcessRegistry,
}

impl SingletonDemo {
    pub fn new(registry: &'static ProcessRegistry) -> Self {
        Self { registry }
    }
}

impl Default for SingletonDemo {
    /// Uses the process-wide registry.
    fn default() -> Self {
        Self::new(singleton::registry())
    }
}

impl Demonstration for SingletonDemo {
    fn title(&self) -> &'static str {
        "Singleton"
    }

    fn run(&self) -> Result<Vec<String>, CatalogError> {
        let first = self.registry.acquire();
        let second = self.registry.acquire();
        Ok(vec![std::ptr::eq(first, second).to_string()])
    }
}

/// Prices the same parcel with every carrier.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyDemo;

impl Demonstration for StrategyDemo {
    fn title(&self) -> &'static str {
        "Strategy"
    }

    fn run(&self) -> Result<Vec<String>, CatalogError> {
        let parcel = Shipment::new("Alabama", "Georgia", 1.56);
        let mut shipping = Shipping::new();
        let mut lines = Vec::with_capacity(Carrier::ALL.len());
        for carrier in Carrier::ALL {
            let strategy = carrier.strategy();
            let name = strategy.name().to_string();
            shipping.set_strategy(strategy);
            let cost = shipping.calculate(&parcel)?;
            lines.push(format!("{name}: {cost}"));
        }
        Ok(lines)
    }
}

/// Walks a mixed list of values with a [`Cursor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IteratorDemo;

impl Demonstration for IteratorDemo {
    fn title(&self) -> &'static str {
        "Iterator"
    }

    fn run(&self) -> Result<Vec<String>, CatalogError> {
        let items = [
            Item::Int(1),
            Item::from("LeShawn"),
            Item::Bool(false),
            Item::Float(1.24),
        ];
        let mut cursor = Cursor::new(&items);
        let mut lines = Vec::with_capacity(items.len());
        while cursor.has_next() {
            lines.push(cursor.try_next()?.to_string());
        }
        Ok(lines)
    }
}

/// Subscribes two observers, drops the first, then fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObserverDemo;

impl Demonstration for ObserverDemo {
    fn title(&self) -> &'static str {
        "Observer"
    }

    fn run(&self) -> Result<Vec<String>, CatalogError> {
        let output = Arc::new(Mutex::new(Vec::new()));
        let announce = |name: &'static str, message: &'static str| {
            let output = Arc::clone(&output);
            Observer::named(name, move || {
                output
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(message.to_string());
            })
        };
        let observer_1 = announce("observer_1", "Observer 1 Firing!");
        let observer_2 = announce("observer_2", "Observer 2 Firing!");

        let subject = Subject::new();
        subject.subscribe(observer_1.clone());
        subject.subscribe(observer_2);
        subject.unsubscribe(&observer_1);
        subject.fire();

        let lines = output.lock().unwrap_or_else(PoisonError::into_inner).clone();
        Ok(lines)
    }
}

/// Builds a user with an age and an address but no phone.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuilderDemo;

impl Demonstration for BuilderDemo {
    fn title(&self) -> &'static str {
        "Builder"
    }

    fn run(&self) -> Result<Vec<String>, CatalogError> {
        let user = User::new(
            "LeShawn",
            UserOptions {
                age: Some(10),
                address: Some(Address::new(27610, "Raleigh")),
                ..Default::default()
            },
        );
        Ok(vec![format!("{user:?}")])
    }
}
