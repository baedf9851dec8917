//! Concrete factory for the macOS family.

use crate::model::Family;
use crate::platform::WidgetFactory;
use crate::widgets::{Button, CheckBox};

use super::{MacButton, MacCheckBox};

/// Produces macOS-family widgets behind the abstract contracts.
#[derive(Debug, Default)]
pub struct MacFactory;

impl WidgetFactory for MacFactory {
    fn family(&self) -> Family {
        Family::MacOs
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_check_box(&self) -> Box<dyn CheckBox> {
        Box::new(MacCheckBox)
    }
}
