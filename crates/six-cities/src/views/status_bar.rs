//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] emoji message        last error: ...  [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let ts_str = format!("[{}] ", vm.timestamp);
            buf.set_string(x, area.y, &ts_str, vm.metadata_style);
            x += ts_str.len() as u16;
        }

        // emoji renders as two cells
        buf.set_string(x, area.y, format!("{} ", vm.emoji), vm.message_style);
        x += 3;

        let source = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let error = vm.last_error.clone().unwrap_or_default();
        let right_width = (source.chars().count() + error.chars().count() + 3) as u16;

        let available_width = area.width.saturating_sub(x - area.x + right_width);
        if vm.message.chars().count() > available_width as usize {
            let truncate_at = available_width.saturating_sub(1) as usize;
            let truncated: String = vm.message.chars().take(truncate_at).collect();
            buf.set_string(x, area.y, format!("{}…", truncated), vm.message_style);
        } else {
            buf.set_string(x, area.y, &vm.message, vm.message_style);
        }

        if right_width + x - area.x > area.width {
            return;
        }
        let mut right_x = area.x + area.width - right_width + 1;
        if !error.is_empty() {
            buf.set_string(right_x, area.y, &error, vm.error_style);
            right_x += error.chars().count() as u16 + 1;
        }
        if !source.is_empty() {
            buf.set_string(right_x, area.y, &source, vm.metadata_style);
        }
    }
}
