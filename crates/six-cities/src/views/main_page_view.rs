//! Main page: city tabs on top, offer list on the left, map on the right

use super::{map_view, offer_card_view::card_item};
use crate::view_models::MainPageViewModel;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph, Tabs, Wrap},
    Frame,
};
use six_cities_theme::Theme;

pub fn render(vm: &MainPageViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let [tabs_area, heading_area, content] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let tabs = Tabs::new(vm.tabs.iter().copied())
        .select(vm.selected_tab)
        .style(theme.tab_inactive())
        .highlight_style(theme.tab_active())
        .divider(" ");
    f.render_widget(tabs, tabs_area);

    let heading = Line::from(vec![
        Span::styled(vm.heading.as_str(), theme.section_header()),
        Span::raw("   "),
        Span::styled(vm.sort_label.as_str(), theme.muted()),
    ]);
    f.render_widget(Paragraph::new(heading), heading_area);

    let [list_area, map_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(content);

    let block = Block::default()
        .title(" Places ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    if vm.is_loading && vm.cards.is_empty() {
        let loading = Paragraph::new(Span::styled("Loading offers...", theme.muted()))
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(loading, list_area);
    } else if let Some(message) = &vm.empty_message {
        let text = vec![
            Line::from(Span::styled("No places to stay available", theme.text())),
            Line::from(""),
            Line::from(Span::styled(message.as_str(), theme.muted())),
        ];
        let empty = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(empty, list_area);
    } else {
        let items: Vec<_> = vm.cards.iter().map(|c| card_item(c, theme)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(theme.list_selected())
            .highlight_symbol("▶ ");
        let mut list_state = ListState::default().with_selected(vm.selected);
        f.render_stateful_widget(list, list_area, &mut list_state);
    }

    map_view::render(&vm.map, theme, map_area, f);
}
