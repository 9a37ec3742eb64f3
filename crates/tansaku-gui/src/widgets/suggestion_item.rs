use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};

use tansaku_api::traits::Anime;

use crate::cover_cache::{self, CoverCache};
use crate::format;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Synopsis snippet length for a suggestion row.
const SNIPPET_CHARS: usize = 90;

/// A single suggestion row: thumbnail, title, synopsis snippet, and up
/// to three genre badges, with episode count and score on the right.
pub fn suggestion_item<'a, Message: Clone + 'static>(
    cs: &'a ColorScheme,
    anime: &'a Anime,
    covers: &'a CoverCache,
    on_select: Message,
) -> Element<'a, Message> {
    let thumb = widgets::rounded_cover(
        cs,
        covers,
        cover_cache::thumb_key(anime.service_id),
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let mut info_col = column![text(anime.title.preferred())
        .size(style::TEXT_SM)
        .font(style::FONT_HEADING)
        .line_height(style::LINE_HEIGHT_NORMAL)]
    .spacing(style::SPACE_XXS);

    if let Some(synopsis) = &anime.synopsis {
        info_col = info_col.push(
            text(format::snippet(synopsis, SNIPPET_CHARS))
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_NORMAL),
        );
    }

    if !anime.genres.is_empty() {
        info_col = info_col.push(widgets::genre_badges(&anime.genres, 3));
    }

    let mut right_col = column![].spacing(style::SPACE_XXS).align_x(Alignment::End);
    if let Some(eps) = anime.episodes {
        right_col = right_col.push(
            text(format!("{eps} eps"))
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }
    if let Some(score) = anime.average_score {
        right_col = right_col.push(
            text(format!("\u{2605} {score}%"))
                .size(style::TEXT_XS)
                .color(cs.primary)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }

    let content = row![thumb, info_col.width(Length::Fill), right_col]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center);

    button(content)
        .width(Length::Fill)
        .padding([style::SPACE_XS, style::SPACE_SM])
        .on_press(on_select)
        .style(theme::list_item(cs))
        .into()
}
