//! Key hints bar, one line of `key description` pairs

use crate::keymap::KeyHint;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use six_cities_theme::Theme;

pub struct KeyHintsWidget<'a>(pub &'a [KeyHint], pub &'a Theme);

impl Widget for KeyHintsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (hints, theme) = (self.0, self.1);
        if area.height < 1 {
            return;
        }

        let end = area.x + area.width;
        let mut x = area.x + 1;
        for hint in hints {
            let width = (hint.key.chars().count() + hint.description.chars().count() + 3) as u16;
            if x + width > end {
                break;
            }
            buf.set_string(x, area.y, hint.key, theme.key_hint());
            x += hint.key.chars().count() as u16 + 1;
            buf.set_string(x, area.y, hint.description, theme.key_description());
            x += hint.description.chars().count() as u16 + 2;
        }
    }
}
