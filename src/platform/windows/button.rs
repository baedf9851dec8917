//! Windows-family button.

use crate::model::{Family, WidgetKind};
use crate::widget_label;
use crate::widgets::Button;

/// Button with the Windows look-and-feel.
///
/// Stateless beyond its family/kind classification: every instance paints
/// the same identifying line.
#[derive(Debug, Default)]
pub struct WindowsButton;

impl Button for WindowsButton {
    fn label(&self) -> String {
        widget_label(Family::Windows, WidgetKind::Button)
    }
}
