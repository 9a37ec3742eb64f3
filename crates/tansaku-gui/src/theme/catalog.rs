//! Style functions parameterized by ColorScheme.
//!
//! Each function returns a closure suitable for Iced's `.style()`
//! method, capturing the needed color tokens from a `ColorScheme`.

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Theme};

use crate::style;

use super::ColorScheme;

/// Root application background.
pub fn app_background(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface;
    let text = cs.on_surface;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// A card container: elevated surface, rounded corners, subtle border.
pub fn card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_LG.into(),
        },
        ..Default::default()
    }
}

/// The detail modal's dialog container.
pub fn dialog_container(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    let border_color = cs.outline_variant;
    let text = cs.on_surface;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_LG.into(),
        },
        ..Default::default()
    }
}

/// Composite search bar container — pill-shaped with subtle border.
pub fn search_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_MD.into(),
        },
        ..Default::default()
    }
}

/// The suggestion dropdown panel under the search bar.
pub fn suggestion_panel(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_MD.into(),
        },
        ..Default::default()
    }
}

/// Borderless text input for use inside the composite search bar.
pub fn text_input_borderless(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline = cs.outline;
    let primary = cs.primary;

    move |_theme, _status| text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 0.0.into(),
        },
        icon: on_surface_variant,
        placeholder: outline,
        value: on_surface,
        selection: primary,
    }
}

/// Primary action button (the random pick). Dimmed while disabled.
pub fn primary_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    let primary_hover = cs.primary_hover;
    let primary_dim = cs.primary_dim;
    let on_primary = cs.on_primary;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => primary_hover,
            button::Status::Pressed | button::Status::Disabled => primary_dim,
            _ => primary,
        };
        let text_color = match status {
            button::Status::Disabled => Color {
                a: 0.7,
                ..on_primary
            },
            _ => on_primary,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color,
            border: Border {
                radius: style::RADIUS_MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Secondary action button (the explicit search).
pub fn accent_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let accent = cs.accent;
    let accent_hover = cs.accent_hover;
    let on_accent = cs.on_accent;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => accent_hover,
            _ => accent,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: on_accent,
            border: Border {
                radius: style::RADIUS_MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Transparent icon button — no border, subtle hover.
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => Some(Background::Color(surface_bright)),
            _ => None,
        };
        button::Style {
            background: bg,
            text_color: on_surface_variant,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: style::RADIUS_FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Suggestion row button — transparent with hover highlight.
pub fn list_item(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(surface_bright))
            }
            _ => None,
        };
        button::Style {
            background: bg,
            text_color: on_surface,
            border: Border {
                radius: style::RADIUS_SM.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Genre badge — solid colored pill with white text.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(color)),
        border: Border {
            radius: style::RADIUS_FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Placeholder frame behind cover images.
pub fn cover_placeholder(cs: &ColorScheme, radius: f32) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

/// Thin overlay scrollbar used by every scrollable in the app.
pub fn overlay_scrollbar(
    cs: &ColorScheme,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let outline = cs.outline;
    let outline_variant = cs.outline_variant;

    move |theme, status| {
        let scroller_color = match status {
            scrollable::Status::Hovered { .. } | scrollable::Status::Dragged { .. } => outline,
            _ => outline_variant,
        };
        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(scroller_color),
                border: Border {
                    radius: style::RADIUS_FULL.into(),
                    ..Border::default()
                },
            },
        };
        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::default(theme, status).auto_scroll,
        }
    }
}
