//! macOS-family checkbox.

use crate::model::{Family, WidgetKind};
use crate::widget_label;
use crate::widgets::CheckBox;

/// Checkbox with the macOS look-and-feel.
#[derive(Debug, Default)]
pub struct MacCheckBox;

impl CheckBox for MacCheckBox {
    fn label(&self) -> String {
        widget_label(Family::MacOs, WidgetKind::CheckBox)
    }
}
