//! Canonical display names.
//!
//! These are the tokens widgets render and tests assert on. The `Display`
//! impls in `family` and `kind` go through them, so every name exists in
//! exactly one place.

// === Family Names ===

/// Display name for the Windows widget family.
pub const FAMILY_WINDOWS: &str = "Windows";

/// Display name for the macOS widget family.
pub const FAMILY_MACOS: &str = "macOS";

// === Widget Kind Names ===

/// Display name for the button widget kind.
pub const KIND_BUTTON: &str = "Button";

/// Display name for the checkbox widget kind.
pub const KIND_CHECKBOX: &str = "CheckBox";
