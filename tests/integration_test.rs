use pattern_catalog::builder::{Address, User, UserOptions};
use pattern_catalog::factory::{EmployeeFactory, FactoryError, Role, RoleSelector};
use pattern_catalog::iterator::{Cursor, Item, IteratorError};
use pattern_catalog::observer::{Observer, Subject};
use pattern_catalog::runtime::Catalog;
use pattern_catalog::strategy::{Carrier, FedEx, Shipment, Shipping, StrategyError, Ups, Usps};
use pattern_catalog::CatalogError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Full end-to-end run of the standard catalog.
/// Checks every section against the expected console output.
#[test]
fn test_standard_catalog_output() {
    let report = Catalog::standard().run().expect("Catalog run failed");

    let titles: Vec<_> = report.sections().iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        ["Factory Method", "Singleton", "Strategy", "Iterator", "Observer", "Builder"]
    );

    let lines = |title: &str| {
        report
            .section(title)
            .unwrap_or_else(|| panic!("Missing section {title}"))
            .lines
            .clone()
    };
    assert_eq!(
        lines("Factory Method"),
        [
            "Hi, I am Patrick and I am a Tester",
            "Hi, I am LeShawn and I am a Developer",
            "Hi, I am Alfred and I am a Tester",
        ]
    );
    assert_eq!(lines("Singleton"), ["true"]);
    assert_eq!(lines("Strategy"), ["Fedex: 2.45", "UPS: 1.56", "USPS: 4.5"]);
    assert_eq!(lines("Iterator"), ["1", "LeShawn", "false", "1.24"]);
    assert_eq!(lines("Observer"), ["Observer 2 Firing!"]);
    assert_eq!(lines("Builder").len(), 1);

    let rendered = report.to_string();
    assert!(rendered.starts_with("===== Factory Method Example Output =====\n"));
    assert!(rendered.contains("===== Builder Example Output =====\n"));
}

#[test]
fn test_factory_roles_and_unknown_selector() {
    let factory = EmployeeFactory::new();

    let developer = factory.create("LeShawn", Role::Developer).unwrap();
    let tester = factory
        .create("Patrick", "tester".parse::<RoleSelector>().unwrap())
        .unwrap();
    assert_eq!(developer.role, Role::Developer);
    assert_eq!(tester.role, Role::Tester);

    let err = factory.create("Ghost", 42u8).unwrap_err();
    assert_eq!(err, FactoryError::UnknownRole("42".into()));

    // Converts into the catalog-wide error
    let catalog_err: CatalogError = err.into();
    assert_eq!(catalog_err.to_string(), "Unknown role: 42");
}

#[test]
fn test_strategy_switching_does_not_touch_old_results() {
    let parcel = Shipment::new("Alabama", "Georgia", 1.56);
    let mut shipping = Shipping::new();

    assert_eq!(shipping.calculate(&parcel), Err(StrategyError::NoStrategySet));

    shipping.set_strategy(Arc::new(FedEx));
    let fedex = shipping.calculate(&parcel).unwrap();
    shipping.set_strategy(Arc::new(Ups));
    let ups = shipping.calculate(&parcel).unwrap();
    shipping.set_strategy(Arc::new(Usps));
    let usps = shipping.calculate(&parcel).unwrap();

    assert_eq!((fedex, ups, usps), (2.45, 1.56, 4.5));

    // Picking by name yields the same tariffs
    let by_name = Shipping::with_strategy("ups".parse::<Carrier>().unwrap().strategy());
    assert_eq!(by_name.calculate(&parcel), Ok(ups));
}

#[test]
fn test_cursor_over_mixed_sequence() {
    let items = [
        Item::Int(1),
        Item::from("x"),
        Item::Bool(false),
        Item::Float(1.24),
    ];
    let mut cursor = Cursor::new(&items);

    let mut has_next_count = 0;
    let mut seen = Vec::new();
    while cursor.has_next() {
        has_next_count += 1;
        seen.push(cursor.try_next().unwrap());
    }

    assert_eq!(has_next_count, 4);
    assert_eq!(seen, items.iter().collect::<Vec<_>>());
    assert!(!cursor.has_next());
    assert_eq!(cursor.try_next(), Err(IteratorError::Exhausted { len: 4 }));

    // A fresh cursor starts over
    assert_eq!(Cursor::new(&items).try_next(), Ok(&Item::Int(1)));
}

#[test]
fn test_observer_unsubscribe_then_fire() {
    let o1_calls = Arc::new(AtomicUsize::new(0));
    let o2_calls = Arc::new(AtomicUsize::new(0));
    let counting = |calls: &Arc<AtomicUsize>| {
        let calls = Arc::clone(calls);
        Observer::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
        })
    };
    let o1 = counting(&o1_calls);
    let o2 = counting(&o2_calls);

    let subject = Subject::new();
    assert_eq!(subject.fire(), 0);

    subject.subscribe(o1.clone());
    subject.subscribe(o2);
    subject.unsubscribe(&o1);
    assert_eq!(subject.fire(), 1);

    assert_eq!(o1_calls.load(Ordering::SeqCst), 0);
    assert_eq!(o2_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_user_with_partial_options() {
    let user = User::new(
        "LeShawn",
        UserOptions {
            age: Some(10),
            address: Some(Address::new(27610, "Raleigh")),
            ..Default::default()
        },
    );

    assert_eq!(user.name, "LeShawn");
    assert_eq!(user.age, Some(10));
    assert!(user.phone.is_none());
    assert_eq!(user.address.as_ref().map(Address::zip), Some(27610));
}
