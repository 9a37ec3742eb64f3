mod app;
mod config;
mod cover_cache;
mod format;
mod screen;
mod style;
mod theme;
mod widgets;
mod window_state;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("tansaku=debug")
        .init();

    let ws = window_state::WindowState::load();

    let mut app = iced::application(app::Tansaku::new, app::Tansaku::update, app::Tansaku::view)
        .title(app::Tansaku::title)
        .subscription(app::Tansaku::subscription)
        .theme(app::Tansaku::theme)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .window_size(ws.size());

    if let Some(pos) = ws.position() {
        app = app.position(iced::window::Position::Specific(pos));
    } else {
        app = app.centered();
    }

    app.run()
}
