use iced::widget::{container, text};
use iced::Element;

use crate::style;
use crate::theme;

/// A single genre badge — colored pill, white label.
pub fn genre_badge<'a, Message: 'a>(genre: &str, index: usize) -> Element<'a, Message> {
    container(
        text(genre.to_string())
            .size(style::TEXT_XS)
            .line_height(style::LINE_HEIGHT_LOOSE),
    )
    .style(theme::badge(theme::genre_color(index)))
    .padding([style::BADGE_PADDING_V, style::BADGE_PADDING_H])
    .into()
}

/// A wrapping row of genre badges, cycling the fixed palette.
///
/// `max` bounds how many genres render (suggestion rows show three,
/// the detail view shows all).
pub fn genre_badges<'a, Message: 'a>(genres: &[String], max: usize) -> Element<'a, Message> {
    let elements: Vec<Element<'a, Message>> = genres
        .iter()
        .take(max)
        .enumerate()
        .map(|(i, g)| genre_badge(g, i))
        .collect();

    iced_aw::Wrap::with_elements(elements)
        .spacing(style::SPACE_XS)
        .line_spacing(style::SPACE_XS)
        .into()
}
