//! Modal overlay widget.
//!
//! Stacks content centered over a semi-transparent backdrop. Clicking
//! the backdrop publishes the `on_blur` message; Escape is handled by
//! the app-level subscription.

use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Background, Color, Element};

/// Wrap `base` with a modal overlay showing `content` over a backdrop.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    backdrop: Color,
    on_blur: Message,
) -> Element<'a, Message> {
    let overlay = mouse_area(
        center(opaque(content))
            .style(move |_theme| container::Style {
                background: Some(Background::Color(backdrop)),
                ..Default::default()
            }),
    )
    .on_press(on_blur);

    stack![base.into(), opaque(overlay)].into()
}
