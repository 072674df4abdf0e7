//! Offer detail page
//!
//! Left column: the offer itself, reviews and the review form. Right column:
//! map with the offer and its neighbours, then the nearby list.

use super::{map_view, not_found_view, offer_card_view::card_item};
use crate::view_models::{OfferDetailsViewModel, OfferPageViewModel, ReviewFormViewModel};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, Paragraph, Wrap},
    Frame,
};
use six_cities_theme::Theme;

pub fn render(vm: &OfferPageViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    match vm {
        OfferPageViewModel::Loading => {
            let loading = Paragraph::new(Span::styled("Loading offer...", theme.muted()))
                .block(Block::default().borders(Borders::ALL).border_style(theme.panel_border()))
                .alignment(Alignment::Center);
            f.render_widget(loading, area);
        }
        OfferPageViewModel::NotFound => not_found_view::render(theme, area, f),
        OfferPageViewModel::Loaded(details) => render_details(details, theme, area, f),
    }
}

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title())
}

fn render_details(vm: &OfferDetailsViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);

    let form_height = if vm.review_form.is_some() { 8 } else { 0 };
    let [info_area, reviews_area, form_area] = Layout::vertical([
        Constraint::Percentage(55),
        Constraint::Min(3),
        Constraint::Length(form_height),
    ])
    .areas(left);

    f.render_widget(
        Paragraph::new(info_lines(vm, theme))
            .block(panel(" Offer ", theme))
            .wrap(Wrap { trim: true }),
        info_area,
    );

    let reviews_title = format!(" Reviews · {} ", vm.review_count);
    f.render_widget(
        Paragraph::new(review_lines(vm, theme))
            .block(panel(&reviews_title, theme))
            .wrap(Wrap { trim: true }),
        reviews_area,
    );

    if let Some(form) = &vm.review_form {
        render_review_form(form, theme, form_area, f);
    }

    let [map_area, nearby_area] =
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(right);
    map_view::render(&vm.map, theme, map_area, f);

    let nearby: Vec<_> = vm.nearby.iter().map(|c| card_item(c, theme)).collect();
    f.render_widget(
        List::new(nearby).block(panel(" Other places in the neighbourhood ", theme)),
        nearby_area,
    );
}

fn info_lines<'a>(vm: &'a OfferDetailsViewModel, theme: &Theme) -> Vec<Line<'a>> {
    let mut title = Vec::new();
    if vm.is_premium {
        title.push(Span::styled(" Premium ", theme.premium_badge()));
        title.push(Span::raw(" "));
    }
    title.push(Span::styled(vm.title.as_str(), theme.text()));
    if vm.is_favorite {
        title.push(Span::styled("  ♥ In bookmarks", theme.favorite_marker()));
    }

    let mut lines = vec![
        Line::from(title),
        Line::from(vec![
            Span::styled(vm.stars.as_str(), theme.rating_stars()),
            Span::raw(" "),
            Span::styled(vm.rating.as_str(), theme.text()),
        ]),
        Line::from(Span::styled(vm.features.join(" · "), theme.muted())),
        Line::from(Span::styled(vm.price.as_str(), theme.price())),
        Line::from(""),
    ];

    if !vm.goods.is_empty() {
        lines.push(Line::from(Span::styled("What's inside", theme.section_header())));
        lines.push(Line::from(Span::styled(vm.goods.join(", "), theme.text())));
        lines.push(Line::from(""));
    }

    if let Some(host) = &vm.host {
        lines.push(Line::from(Span::styled("Meet the host", theme.section_header())));
        let mut spans = vec![Span::styled(host.name.as_str(), theme.text())];
        if host.is_pro {
            spans.push(Span::styled("  Pro", theme.muted()));
        }
        lines.push(Line::from(spans));
    }
    if let Some(description) = &vm.description {
        lines.push(Line::from(Span::styled(description.as_str(), theme.text())));
    }

    if !vm.gallery.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Gallery ({} photos)", vm.gallery.len()),
            theme.section_header(),
        )));
        lines.extend(
            vm.gallery
                .iter()
                .map(|url| Line::from(Span::styled(url.as_str(), theme.muted()))),
        );
    }
    lines
}

fn review_lines<'a>(vm: &'a OfferDetailsViewModel, theme: &Theme) -> Vec<Line<'a>> {
    if vm.reviews.is_empty() {
        return vec![Line::from(Span::styled("No reviews yet", theme.muted()))];
    }
    let mut lines = Vec::new();
    for review in &vm.reviews {
        lines.push(Line::from(vec![
            Span::styled(review.author.as_str(), theme.text()),
            Span::raw("  "),
            Span::styled(review.stars.as_str(), theme.rating_stars()),
            Span::raw("  "),
            Span::styled(review.date.as_str(), theme.muted()),
        ]));
        lines.push(Line::from(Span::styled(
            review.comment.as_str(),
            theme.key_description(),
        )));
        lines.push(Line::from(""));
    }
    lines
}

fn render_review_form(vm: &ReviewFormViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let border = if vm.is_focused {
        theme.tab_active()
    } else {
        theme.panel_border()
    };
    let block = Block::default()
        .title(" Your review ")
        .borders(Borders::ALL)
        .border_style(border)
        .title_style(theme.panel_title());

    let button_style = if vm.can_submit {
        theme.success()
    } else {
        theme.muted()
    };
    let cursor = if vm.is_focused { "▏" } else { "" };

    let text = vec![
        Line::from(vec![
            Span::styled(vm.rating_stars.as_str(), theme.rating_stars()),
            Span::raw(" "),
            Span::styled(vm.rating_title, theme.muted()),
            Span::raw("   "),
            Span::styled(vm.counter.as_str(), theme.muted()),
        ]),
        Line::from(Span::styled(format!("{}{}", vm.text, cursor), theme.text())),
        Line::from(""),
        Line::from(Span::styled(vm.hint.as_str(), theme.muted())),
        Line::from(Span::styled(format!("[ {} ]", vm.submit_label()), button_style)),
    ];

    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
