use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use six_cities_theme::Theme;

pub fn render(theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("404 Not Found", theme.error())),
        Line::from(""),
        Line::from(Span::styled(
            "The page you are looking for does not exist.",
            theme.text(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter ", theme.key_hint()),
            Span::styled("Return to main page", theme.key_description()),
        ]),
    ];

    f.render_widget(
        Paragraph::new(text).block(block).alignment(Alignment::Center),
        area,
    );
}
