//! Application domain model.
//!
//! This module contains pure classification logic (no I/O):
//! the widget families, the widget kinds, and their canonical names.
//!
//! Family-specific widget construction is in `platform::{macos,windows}`.

pub mod constants;
pub mod family;
pub mod kind;

pub use constants::*;
pub use family::{Family, FamilyError};
pub use kind::WidgetKind;
