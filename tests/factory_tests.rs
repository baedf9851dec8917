//! Tests for the factory layer: family/kind invariants, registry totality,
//! instance independence, and factory interchangeability.

use boceto::model::{Family, WidgetKind};
use boceto::platform::{factory_for, MacFactory, WidgetFactory, WindowsFactory};

/// A client that only ever sees the abstract contracts. Used to show that
/// swapping the factory swaps the family of everything produced without
/// touching this code.
fn client_labels(factory: &dyn WidgetFactory) -> Vec<String> {
    vec![
        factory.create_button().label(),
        factory.create_check_box().label(),
    ]
}

// === Family/Kind Invariant ===

#[test]
fn every_factory_reports_its_own_family() {
    for family in Family::ALL {
        assert_eq!(factory_for(family).family(), family);
    }
}

#[test]
fn every_widget_is_family_and_kind_qualified() {
    for family in Family::ALL {
        let factory = factory_for(family);
        let family_name = family.to_string();

        let button = factory.create_button().label();
        assert!(button.contains(&family_name), "bad button label: {}", button);
        assert!(button.contains(&WidgetKind::Button.to_string()));

        let check_box = factory.create_check_box().label();
        assert!(
            check_box.contains(&family_name),
            "bad checkbox label: {}",
            check_box
        );
        assert!(check_box.contains(&WidgetKind::CheckBox.to_string()));
    }
}

#[test]
fn windows_factory_labels_exactly() {
    let factory = WindowsFactory;
    assert_eq!(factory.create_button().label(), "Windows Button");
    assert_eq!(factory.create_check_box().label(), "Windows CheckBox");
}

#[test]
fn mac_factory_labels_exactly() {
    let factory = MacFactory;
    assert_eq!(factory.create_button().label(), "macOS Button");
    assert_eq!(factory.create_check_box().label(), "macOS CheckBox");
}

// === Instance Independence ===

#[test]
fn repeated_creation_yields_independent_instances() {
    let factory = WindowsFactory;
    let first = factory.create_button();
    let second = factory.create_button();

    // Both handles are owned independently: dropping one leaves the other
    // fully usable, which rules out sharing or caching between calls.
    drop(first);
    assert_eq!(second.label(), "Windows Button");
}

// === Factory Interchangeability ===

#[test]
fn swapping_the_factory_swaps_every_label() {
    let windows = client_labels(&WindowsFactory);
    let mac = client_labels(&MacFactory);

    assert_eq!(windows, ["Windows Button", "Windows CheckBox"]);
    assert_eq!(mac, ["macOS Button", "macOS CheckBox"]);
}

#[test]
fn factories_in_a_list_keep_their_order() {
    let factories: Vec<Box<dyn WidgetFactory>> =
        vec![Box::new(WindowsFactory), Box::new(MacFactory)];

    let buttons: Vec<String> = factories
        .iter()
        .map(|factory| factory.create_button().label())
        .collect();

    assert_eq!(buttons, ["Windows Button", "macOS Button"]);
}
