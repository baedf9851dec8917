//! Concrete factory for the Windows family.

use crate::model::Family;
use crate::platform::WidgetFactory;
use crate::widgets::{Button, CheckBox};

use super::{WindowsButton, WindowsCheckBox};

/// Produces Windows-family widgets behind the abstract contracts.
///
/// The family binding is part of the type itself: this factory can never
/// hand out a widget from another family.
#[derive(Debug, Default)]
pub struct WindowsFactory;

impl WidgetFactory for WindowsFactory {
    fn family(&self) -> Family {
        Family::Windows
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_check_box(&self) -> Box<dyn CheckBox> {
        Box::new(WindowsCheckBox)
    }
}
