//! Header Widget
//!
//! Format: `six cities                 oliver@example.com ♥ 3  [a] Sign out`

use crate::view_models::HeaderViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use six_cities_theme::Theme;

pub struct HeaderWidget<'a>(pub &'a HeaderViewModel, pub &'a Theme);

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (vm, theme) = (self.0, self.1);
        if area.height < 1 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(theme.bg_secondary).set_char(' ');
        }

        buf.set_string(area.x + 1, area.y, vm.title, theme.panel_title());

        let mut right = format!("♥ {}  [a] {} ", vm.favorite_count, vm.session_action);
        if let Some(email) = &vm.email {
            right = format!("{}  {}", email, right);
        }
        let width = right.chars().count() as u16;
        if width + vm.title.len() as u16 + 2 <= area.width {
            let x = area.x + area.width - width;
            buf.set_string(x, area.y, &right, theme.text().bg(theme.bg_secondary));
        }
    }
}
