use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use tansaku_api::traits::Anime;

use crate::cover_cache::{self, CoverCache};
use crate::format;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// The detail modal's content: titles, cover, meta grid, genres, and
/// the synopsis with markup stripped.
pub fn detail_card<'a, Message: Clone + 'static>(
    cs: &'a ColorScheme,
    anime: &'a Anime,
    covers: &'a CoverCache,
    on_close: Message,
) -> Element<'a, Message> {
    // Heading: romaji first, with english/native subtitles when they
    // add anything.
    let mut title_col = column![text(anime.title.heading())
        .size(style::TEXT_XL)
        .font(style::FONT_HEADING)
        .line_height(style::LINE_HEIGHT_TIGHT)]
    .spacing(style::SPACE_XXS);

    if let Some(english) = &anime.title.english {
        if Some(english.as_str()) != anime.title.romaji.as_deref() {
            title_col = title_col.push(
                text(english.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }
    }
    if let Some(native) = &anime.title.native {
        title_col = title_col.push(
            text(native.as_str())
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }

    let close_button = button(
        lucide_icons::iced::icon_x()
            .size(style::TEXT_LG)
            .color(cs.on_surface_variant)
            .center(),
    )
    .padding(style::SPACE_XS)
    .on_press(on_close)
    .style(theme::icon_button(cs));

    let header = row![title_col.width(Length::Fill), close_button]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Start);

    let cover = widgets::rounded_cover(
        cs,
        covers,
        cover_cache::detail_key(anime.service_id),
        style::COVER_WIDTH,
        style::COVER_HEIGHT,
        style::RADIUS_MD,
    );

    let studio = anime.studios.first().map(String::as_str).unwrap_or("N/A");

    let meta_grid = column![
        row![
            meta_cell(cs, "Format", anime.format.as_deref().map(format::media_format)),
            meta_cell(cs, "Episodes", Some(format::episodes(anime.episodes))),
            meta_cell(cs, "Score", Some(format::score_percent(anime.average_score))),
        ]
        .spacing(style::SPACE_LG),
        row![
            meta_cell(
                cs,
                "Status",
                anime.status.as_deref().map(format::airing_status)
            ),
            meta_cell(
                cs,
                "Season",
                Some(format::season_year(
                    anime.season.as_deref(),
                    anime.season_year
                ))
            ),
            meta_cell(cs, "Studio", Some(studio.to_string())),
        ]
        .spacing(style::SPACE_LG),
        row![
            meta_cell(cs, "Duration", Some(format::duration(anime.duration))),
            meta_cell(
                cs,
                "Aired",
                Some(format!(
                    "{} \u{2013} {}",
                    format::air_date(anime.start_date.as_ref()),
                    format::air_date(anime.end_date.as_ref())
                ))
            ),
        ]
        .spacing(style::SPACE_LG),
    ]
    .spacing(style::SPACE_SM);

    let mut info_col = column![meta_grid].spacing(style::SPACE_MD).width(Length::Fill);

    if !anime.genres.is_empty() {
        info_col = info_col.push(widgets::genre_badges(&anime.genres, anime.genres.len()));
    }

    let mut body = column![row![cover, info_col]
        .spacing(style::SPACE_LG)
        .align_y(Alignment::Start)]
    .spacing(style::SPACE_LG);

    if let Some(synopsis) = &anime.synopsis {
        body = body.push(
            text(format::strip_markup(synopsis))
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_NORMAL),
        );
    }

    let scroll = widgets::styled_scrollable(body.padding([0.0, style::SPACE_XS]), cs)
        .height(Length::Fixed(style::DETAIL_BODY_HEIGHT));

    container(
        column![header, scroll]
            .spacing(style::SPACE_LG)
            .width(Length::Fill),
    )
    .style(theme::dialog_container(cs))
    .padding(style::SPACE_2XL)
    .width(Length::Fixed(style::DETAIL_WIDTH))
    .into()
}

/// One labeled cell of the meta grid.
fn meta_cell<'a, Message: 'a>(
    cs: &ColorScheme,
    label: &'a str,
    value: Option<String>,
) -> Element<'a, Message> {
    column![
        text(label)
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
        text(value.unwrap_or_else(|| "N/A".into()))
            .size(style::TEXT_SM)
            .line_height(style::LINE_HEIGHT_NORMAL),
    ]
    .spacing(style::SPACE_XXS)
    .width(Length::Fill)
    .into()
}
