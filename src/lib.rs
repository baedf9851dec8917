//! Pure widget contracts, families, and factories. Keep this crate free of
//! real OS calls so the whole surface can run as normal integration tests.

pub mod model;
pub mod platform;
pub mod widgets;

// Re-export model types for convenience
pub use model::{Family, FamilyError, WidgetKind};

// Re-export the factory entry points for convenience
pub use platform::{factory_for, WidgetFactory};
pub use widgets::{Button, CheckBox};

/// Family-qualified identifying label for a widget, e.g. "Windows Button".
///
/// Every concrete widget renders exactly this text, so tests can compare
/// against it instead of re-deriving names.
pub fn widget_label(family: Family, kind: WidgetKind) -> String {
    format!("{} {}", family, kind)
}
