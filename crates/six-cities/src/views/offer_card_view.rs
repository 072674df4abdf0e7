//! Two-line list items for offer cards

use crate::view_models::OfferCardViewModel;
use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};
use six_cities_theme::Theme;

pub fn card_item<'a>(card: &'a OfferCardViewModel, theme: &Theme) -> ListItem<'a> {
    let mut title = Vec::new();
    if card.is_premium {
        title.push(Span::styled(" Premium ", theme.premium_badge()));
        title.push(Span::raw(" "));
    }
    title.push(Span::styled(card.title.as_str(), theme.text()));
    if card.is_favorite {
        title.push(Span::styled(" ♥", theme.favorite_marker()));
    }

    let details = Line::from(vec![
        Span::raw("  "),
        Span::styled(card.price.as_str(), theme.price()),
        Span::raw("  "),
        Span::styled(card.stars.as_str(), theme.rating_stars()),
        Span::raw("  "),
        Span::styled(card.kind.as_str(), theme.muted()),
    ]);

    ListItem::new(vec![Line::from(title), details])
}
