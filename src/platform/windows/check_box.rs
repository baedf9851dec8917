//! Windows-family checkbox.

use crate::model::{Family, WidgetKind};
use crate::widget_label;
use crate::widgets::CheckBox;

/// Checkbox with the Windows look-and-feel.
#[derive(Debug, Default)]
pub struct WindowsCheckBox;

impl CheckBox for WindowsCheckBox {
    fn label(&self) -> String {
        widget_label(Family::Windows, WidgetKind::CheckBox)
    }
}
