use std::time::Duration;

use iced::widget::container;
use iced::{keyboard, window, Element, Length, Subscription, Task, Theme};

use tansaku_api::traits::{Anime, AnimeCatalog};
use tansaku_api::AniListClient;

use crate::config::AppConfig;
use crate::cover_cache::{self, CoverCache, CoverState};
use crate::screen::{explorer, Action, ModalKind};
use crate::theme::{self, ColorScheme};
use crate::widgets;
use crate::window_state::WindowState;

/// Application state — a slim router that delegates to the explorer
/// screen and interprets its actions.
pub struct Tansaku {
    config: AppConfig,
    client: AniListClient,
    scheme: ColorScheme,
    explorer: explorer::Explorer,
    cover_cache: CoverCache,
    modal_state: Option<ModalKind>,
    window_state: WindowState,
}

impl Default for Tansaku {
    fn default() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {e}");
            AppConfig::default()
        });
        let scheme = ColorScheme::for_mode(config.appearance.mode);

        Self {
            config,
            client: AniListClient::new(),
            scheme,
            explorer: explorer::Explorer::new(),
            cover_cache: CoverCache::default(),
            modal_state: None,
            window_state: WindowState::load(),
        }
    }
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    Explorer(explorer::Message),
    CoverLoaded {
        key: i64,
        result: Result<std::path::PathBuf, String>,
    },
    DismissModal,
    WindowEvent(window::Event),
}

impl Tansaku {
    pub fn new() -> (Self, Task<Message>) {
        (Self::default(), Task::none())
    }

    pub fn title(&self) -> String {
        String::from("Tansaku")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Explorer(msg) => {
                // Fire cover downloads for freshly loaded suggestion rows
                // before the screen consumes the message.
                let cover_task = if let explorer::Message::ResultsLoaded {
                    result: Ok(list), ..
                } = &msg
                {
                    let items: Vec<(i64, Option<String>)> = list
                        .iter()
                        .map(|a| (cover_cache::thumb_key(a.service_id), a.cover_medium.clone()))
                        .collect();
                    self.batch_request_covers(items)
                } else {
                    Task::none()
                };

                let action = self.explorer.update(msg, &self.config);
                Task::batch([cover_task, self.handle_action(action)])
            }
            Message::CoverLoaded { key, result } => {
                match result {
                    Ok(path) => {
                        self.cover_cache.states.insert(key, CoverState::Loaded(path));
                    }
                    Err(_) => {
                        self.cover_cache.states.insert(key, CoverState::Failed);
                    }
                }
                Task::none()
            }
            Message::DismissModal => {
                self.modal_state = None;
                Task::none()
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => {
                        self.window_state.width = size.width;
                        self.window_state.height = size.height;
                        self.window_state.save();
                    }
                    window::Event::Moved(pos) => {
                        self.window_state.x = pos.x;
                        self.window_state.y = pos.y;
                        self.window_state.save();
                    }
                    _ => {}
                }
                Task::none()
            }
        }
    }

    /// Interpret an Action returned by the explorer screen.
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::Debounce { generation } => {
                let delay = Duration::from_millis(self.config.search.debounce_ms);
                Task::perform(tokio::time::sleep(delay), move |_| {
                    Message::Explorer(explorer::Message::DebounceElapsed(generation))
                })
            }
            Action::Search { seq, query } => {
                let client = self.client.clone();
                let per_page = self.config.search.per_page;
                Task::perform(
                    async move {
                        client
                            .search(&query, per_page)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    move |result| {
                        Message::Explorer(explorer::Message::ResultsLoaded { seq, result })
                    },
                )
            }
            Action::FetchRandom { page, per_page } => {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        client
                            .browse_page(page, per_page)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |result| Message::Explorer(explorer::Message::RandomLoaded(result)),
                )
            }
            Action::ShowDetail(anime) => {
                let cover_task = self.request_detail_cover(&anime);
                self.modal_state = Some(ModalKind::Detail(anime));
                cover_task
            }
        }
    }

    /// Batch-request cover downloads for a set of (key, url) pairs.
    fn batch_request_covers(&mut self, items: Vec<(i64, Option<String>)>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = items
            .into_iter()
            .map(|(key, url)| self.request_cover(key, url.as_deref()))
            .collect();
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    /// Request the large cover shown in the detail modal.
    fn request_detail_cover(&mut self, anime: &Anime) -> Task<Message> {
        self.request_cover(
            cover_cache::detail_key(anime.service_id),
            anime.cover_large.as_deref(),
        )
    }

    /// Request a cover image download if not already requested.
    fn request_cover(&mut self, key: i64, cover_url: Option<&str>) -> Task<Message> {
        let Some(url) = cover_url else {
            // No cover URL available — mark as failed so the placeholder renders.
            self.cover_cache
                .states
                .entry(key)
                .or_insert(CoverState::Failed);
            return Task::none();
        };
        if self.cover_cache.states.contains_key(&key) {
            return Task::none();
        }
        // Check disk cache first.
        let path = cover_cache::cover_path(key);
        if path.exists() {
            self.cover_cache.states.insert(key, CoverState::Loaded(path));
            return Task::none();
        }
        self.cover_cache.states.insert(key, CoverState::Loading);
        let url = url.to_string();
        Task::perform(
            async move { cover_cache::fetch_cover(key, url).await },
            move |result| Message::CoverLoaded { key, result },
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = &self.scheme;

        let base = container(self.explorer.view(cs, &self.cover_cache).map(Message::Explorer))
            .style(theme::app_background(cs))
            .width(Length::Fill)
            .height(Length::Fill);

        match &self.modal_state {
            Some(ModalKind::Detail(anime)) => {
                let card = widgets::detail_card(cs, anime, &self.cover_cache, Message::DismissModal);
                widgets::modal(base, card, cs.modal_backdrop, Message::DismissModal)
            }
            None => base.into(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _id| match event {
            iced::Event::Window(e) => Some(Message::WindowEvent(e)),
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::DismissModal),
            _ => None,
        })
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.scheme)
    }
}
