//! Platform widget families and their factories.
//!
//! Each family has its own submodule implementing:
//! - the concrete widgets (button, checkbox)
//! - the concrete factory that produces them
//!
//! Unlike a real toolkit, the family modules are not gated behind
//! `cfg(target_os)`: the demo must be able to render either look-and-feel
//! on any host, so both families are always compiled in.

pub mod macos;
pub mod windows;

// Re-export the concrete factories for convenience
pub use macos::MacFactory;
pub use windows::WindowsFactory;

use crate::model::Family;
use crate::widgets::{Button, CheckBox};

/// Abstract widget factory: one creation operation per widget kind.
///
/// Every widget a factory returns belongs to the factory's own family; the
/// binding is part of the concrete factory's type and cannot change over
/// its lifetime. Creation always succeeds, and each call returns a newly
/// owned instance (no sharing, no pooling, no caching).
pub trait WidgetFactory {
    /// The family this factory produces widgets for.
    fn family(&self) -> Family;

    /// Create a new button of this factory's family.
    fn create_button(&self) -> Box<dyn Button>;

    /// Create a new checkbox of this factory's family.
    fn create_check_box(&self) -> Box<dyn CheckBox>;
}

/// Select the concrete factory for a family.
///
/// Exhaustive over `Family`, so lookup is total: every family resolves to
/// exactly one factory.
pub fn factory_for(family: Family) -> Box<dyn WidgetFactory> {
    match family {
        Family::Windows => Box::new(WindowsFactory),
        Family::MacOs => Box::new(MacFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_for_matches_family() {
        for family in Family::ALL {
            assert_eq!(factory_for(family).family(), family);
        }
    }
}
