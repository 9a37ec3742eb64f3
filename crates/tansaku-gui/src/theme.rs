//! Semantic color tokens and theme resolution.
//!
//! Two built-in schemes (dark mirrors the original explorer's slate
//! look; light is its inversion). `ThemeMode::System` follows the OS
//! preference via the dark-light crate.

mod catalog;

pub use catalog::*;

use iced::{Color, Theme};

pub use crate::config::ThemeMode;

/// All semantic color tokens for the application.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces (low -> high elevation)
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_bright: Color,

    // Text hierarchy
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Primary accent (purple — the random-pick action)
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,

    // Secondary accent (blue — the search action)
    pub accent: Color,
    pub accent_hover: Color,
    pub on_accent: Color,

    // Error
    pub error: Color,

    // Modal backdrop
    pub modal_backdrop: Color,
}

impl ColorScheme {
    pub fn dark() -> Self {
        Self {
            surface: Color::from_rgb8(0x11, 0x18, 0x27),
            surface_container_low: Color::from_rgb8(0x1A, 0x22, 0x33),
            surface_container: Color::from_rgb8(0x1F, 0x29, 0x37),
            surface_container_high: Color::from_rgb8(0x2B, 0x36, 0x47),
            surface_bright: Color::from_rgb8(0x37, 0x41, 0x51),

            on_surface: Color::from_rgb8(0xF9, 0xFA, 0xFB),
            on_surface_variant: Color::from_rgb8(0x9C, 0xA3, 0xAF),
            outline: Color::from_rgb8(0x6B, 0x72, 0x80),
            outline_variant: Color::from_rgb8(0x37, 0x41, 0x51),

            primary: Color::from_rgb8(0x93, 0x33, 0xEA),
            primary_hover: Color::from_rgb8(0x7E, 0x22, 0xCE),
            primary_dim: Color::from_rgb8(0x6B, 0x21, 0xA8),
            on_primary: Color::WHITE,

            accent: Color::from_rgb8(0x25, 0x63, 0xEB),
            accent_hover: Color::from_rgb8(0x1D, 0x4E, 0xD8),
            on_accent: Color::WHITE,

            error: Color::from_rgb8(0xEF, 0x44, 0x44),

            modal_backdrop: Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.65,
            },
        }
    }

    pub fn light() -> Self {
        Self {
            surface: Color::from_rgb8(0xF3, 0xF4, 0xF6),
            surface_container_low: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            surface_container: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            surface_container_high: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            surface_bright: Color::from_rgb8(0xD1, 0xD5, 0xDB),

            on_surface: Color::from_rgb8(0x11, 0x18, 0x27),
            on_surface_variant: Color::from_rgb8(0x4B, 0x55, 0x63),
            outline: Color::from_rgb8(0x6B, 0x72, 0x80),
            outline_variant: Color::from_rgb8(0xD1, 0xD5, 0xDB),

            primary: Color::from_rgb8(0x93, 0x33, 0xEA),
            primary_hover: Color::from_rgb8(0x7E, 0x22, 0xCE),
            primary_dim: Color::from_rgb8(0x6B, 0x21, 0xA8),
            on_primary: Color::WHITE,

            accent: Color::from_rgb8(0x25, 0x63, 0xEB),
            accent_hover: Color::from_rgb8(0x1D, 0x4E, 0xD8),
            on_accent: Color::WHITE,

            error: Color::from_rgb8(0xDC, 0x26, 0x26),

            modal_backdrop: Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.45,
            },
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match resolve_mode(mode) {
            ThemeMode::Light => Self::light(),
            _ => Self::dark(),
        }
    }
}

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Tansaku",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.accent,
            warning: cs.primary_dim,
            danger: cs.error,
        },
    )
}

/// Fixed palette the genre badges cycle through, matching the original
/// explorer's ten badge colors.
const GENRE_PALETTE: [Color; 10] = [
    Color::from_rgb8(0xEF, 0x44, 0x44), // red
    Color::from_rgb8(0x3B, 0x82, 0xF6), // blue
    Color::from_rgb8(0x22, 0xC5, 0x5E), // green
    Color::from_rgb8(0xEA, 0xB3, 0x08), // yellow
    Color::from_rgb8(0xA8, 0x55, 0xF7), // purple
    Color::from_rgb8(0xEC, 0x48, 0x99), // pink
    Color::from_rgb8(0x63, 0x66, 0xF1), // indigo
    Color::from_rgb8(0x14, 0xB8, 0xA6), // teal
    Color::from_rgb8(0xF9, 0x73, 0x16), // orange
    Color::from_rgb8(0x06, 0xB6, 0xD4), // cyan
];

/// Badge color for the genre at `index`, cycling the fixed palette.
pub fn genre_color(index: usize) -> Color {
    GENRE_PALETTE[index % GENRE_PALETTE.len()]
}
