//! City map drawn on a braille canvas

use crate::view_models::MapViewModel;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders,
    },
    Frame,
};
use six_cities_theme::Theme;

pub fn render(vm: &MapViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let inactive = vm.inactive_coords();
    let active = vm.active_coords();
    let active_style = Style::default()
        .fg(theme.marker_active)
        .add_modifier(Modifier::BOLD);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Map ")
                .borders(Borders::ALL)
                .border_style(theme.panel_border())
                .title_style(theme.panel_title()),
        )
        .marker(Marker::Braille)
        .x_bounds(vm.x_bounds)
        .y_bounds(vm.y_bounds)
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &inactive,
                color: theme.marker_default,
            });
            ctx.layer();
            for &(x, y) in &active {
                ctx.print(x, y, Span::styled("●", active_style));
            }
        });

    f.render_widget(canvas, area);
}
