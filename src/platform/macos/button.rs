//! macOS-family button.

use crate::model::{Family, WidgetKind};
use crate::widget_label;
use crate::widgets::Button;

/// Button with the macOS look-and-feel.
#[derive(Debug, Default)]
pub struct MacButton;

impl Button for MacButton {
    fn label(&self) -> String {
        widget_label(Family::MacOs, WidgetKind::Button)
    }
}
