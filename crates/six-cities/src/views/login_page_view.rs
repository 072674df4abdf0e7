//! Sign-in form centred in the page

use crate::actions::LoginField;
use crate::view_models::LoginPageViewModel;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use six_cities_theme::Theme;

pub fn render(vm: &LoginPageViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let [column] = Layout::horizontal([Constraint::Length(50)])
        .flex(Flex::Center)
        .areas(area);
    let [form] = Layout::vertical([Constraint::Length(12)])
        .flex(Flex::Center)
        .areas(column);

    let block = Block::default()
        .title(" Sign in ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    let field = |label: &'static str, value: &str, field: LoginField| {
        let focused = vm.focus == field;
        let style = if focused {
            theme.list_selected()
        } else {
            theme.list_row()
        };
        let cursor = if focused { "▏" } else { "" };
        vec![
            Line::from(Span::styled(label, theme.muted())),
            Line::from(Span::styled(format!(" {}{} ", value, cursor), style)),
        ]
    };

    let button_style = if vm.can_submit {
        theme.success()
    } else {
        theme.muted()
    };

    let mut text = vec![Line::from("")];
    text.extend(field("E-mail", &vm.email, LoginField::Email));
    text.push(Line::from(""));
    text.extend(field("Password", &vm.password_mask, LoginField::Password));
    text.push(Line::from(""));
    text.push(Line::from(Span::styled("[ Sign in ]", button_style)));
    text.push(Line::from(""));
    text.push(Line::from(vec![
        Span::styled(vm.featured_city, theme.panel_title()),
        Span::styled("  Ctrl+E to explore", theme.muted()),
    ]));

    f.render_widget(Paragraph::new(text).block(block), form);
}
