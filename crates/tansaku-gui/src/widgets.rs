pub mod detail_card;
pub mod genre_badge;
pub mod modal;
pub mod rounded_cover;
pub mod suggestion_item;

pub use detail_card::detail_card;
pub use genre_badge::genre_badges;
pub use modal::modal;
pub use rounded_cover::rounded_cover;
pub use suggestion_item::suggestion_item;

use iced::widget::scrollable;
use iced::Element;

use crate::theme::{self, ColorScheme};

/// A scrollable with consistent direction and style across the application.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(4)
                .margin(2),
        ))
        .style(theme::overlay_scrollbar(cs))
}
