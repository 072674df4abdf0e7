//! Favorites grouped by city; city names are headings between the cards

use super::offer_card_view::card_item;
use crate::view_models::FavoritesPageViewModel;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use six_cities_theme::Theme;

pub fn render(vm: &FavoritesPageViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(format!(" {} ", vm.title))
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    if vm.is_empty() {
        let message = if vm.is_loading {
            "Loading favorites..."
        } else {
            vm.empty_message.unwrap_or_default()
        };
        let text = vec![
            Line::from(""),
            Line::from(Span::styled("Favorites (empty)", theme.section_header())),
            Line::from(""),
            Line::from(Span::styled(message, theme.muted())),
        ];
        f.render_widget(
            Paragraph::new(text).block(block).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let mut items = Vec::new();
    let mut selected = None;
    for group in &vm.groups {
        items.push(ListItem::new(Line::from(Span::styled(
            group.city.as_str(),
            theme.section_header(),
        ))));
        for card in &group.cards {
            if card.is_selected {
                selected = Some(items.len());
            }
            items.push(card_item(card, theme));
        }
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.list_selected())
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut list_state);
}
