//! Abstract widget contracts shared by every platform family.
//!
//! A widget's only capability is painting itself: one identifying line on
//! stdout, family-qualified so the concrete variant stays observable.
//! `label()` is the pure half of that contract; `paint()` is the
//! side-effecting half, provided once here so variants cannot drift in how
//! they render.
//!
//! Painting is total: no error conditions, no return value.

/// A clickable button, polymorphic over platform families.
pub trait Button {
    /// Family-qualified identifying label, e.g. "Windows Button".
    fn label(&self) -> String;

    /// Paint the button: write its identifying line to stdout.
    fn paint(&self) {
        println!("{}", self.label());
    }
}

/// A two-state checkbox, polymorphic over platform families.
pub trait CheckBox {
    /// Family-qualified identifying label, e.g. "macOS CheckBox".
    fn label(&self) -> String;

    /// Paint the checkbox: write its identifying line to stdout.
    fn paint(&self) {
        println!("{}", self.label());
    }
}
