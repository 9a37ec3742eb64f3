use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use rand::Rng;
use tansaku_api::traits::Anime;

use crate::config::AppConfig;
use crate::cover_cache::CoverCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

// ── State ─────────────────────────────────────────────────────────

/// Explorer screen state.
///
/// Everything here is ephemeral: it exists for the lifetime of the
/// window and is replaced wholesale by fetch results.
pub struct Explorer {
    query: String,
    suggestions: Vec<Anime>,
    /// A completed search came back empty (distinct from "not searched").
    no_results: bool,
    /// Random pick in flight; disables the button.
    random_loading: bool,
    /// In-page offset drawn when the random fetch was issued.
    random_offset: usize,
    /// Bumped on every edit; a quiescence timer carrying an older
    /// generation is stale and ignored.
    debounce_generation: u64,
    /// Sequence number of the most recently issued search. Responses
    /// carrying any other value are discarded, so a slow response can
    /// never overwrite a newer query's results.
    search_seq: u64,
}

// ── Messages ──────────────────────────────────────────────────────

/// Messages handled by the Explorer screen.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    DebounceElapsed(u64),
    SearchPressed,
    ResultsLoaded {
        seq: u64,
        result: Result<Vec<Anime>, String>,
    },
    SuggestionChosen(usize),
    RandomPressed,
    RandomLoaded(Result<Vec<Anime>, String>),
}

// ── Implementation ────────────────────────────────────────────────

impl Explorer {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            no_results: false,
            random_loading: false,
            random_offset: 0,
            debounce_generation: 0,
            search_seq: 0,
        }
    }

    /// Suggestion rows currently displayed.
    pub fn suggestions(&self) -> &[Anime] {
        &self.suggestions
    }

    /// Handle a message, returning an Action for the app router.
    pub fn update(&mut self, msg: Message, config: &AppConfig) -> Action {
        match msg {
            Message::QueryChanged(new_query) => {
                self.query = new_query;
                // Any edit invalidates a pending quiescence timer.
                self.debounce_generation += 1;
                if self.query.trim().is_empty() {
                    // Clearing the field clears suggestions with no fetch.
                    self.suggestions.clear();
                    self.no_results = false;
                    return Action::None;
                }
                Action::Debounce {
                    generation: self.debounce_generation,
                }
            }
            Message::DebounceElapsed(generation) => {
                if generation != self.debounce_generation || self.query.trim().is_empty() {
                    // A newer keystroke restarted the wait.
                    return Action::None;
                }
                self.begin_search()
            }
            Message::SearchPressed => {
                if self.query.trim().is_empty() {
                    return Action::None;
                }
                // The explicit search wins over any pending timer.
                self.debounce_generation += 1;
                self.begin_search()
            }
            Message::ResultsLoaded { seq, result } => {
                if seq != self.search_seq {
                    tracing::debug!(seq, current = self.search_seq, "stale search response dropped");
                    return Action::None;
                }
                match result {
                    Ok(list) => {
                        self.no_results = list.is_empty() && !self.query.trim().is_empty();
                        self.suggestions = list;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "suggestion search failed");
                    }
                }
                Action::None
            }
            Message::SuggestionChosen(idx) => {
                let Some(anime) = self.suggestions.get(idx).cloned() else {
                    return Action::None;
                };
                self.query.clear();
                self.suggestions.clear();
                self.no_results = false;
                self.debounce_generation += 1;
                Action::ShowDetail(Box::new(anime))
            }
            Message::RandomPressed => {
                if self.random_loading {
                    return Action::None;
                }
                let mut rng = rand::thread_rng();
                let page = rng.gen_range(1..=config.random.max_page.max(1));
                self.random_offset = rng.gen_range(0..config.random.per_page.max(1)) as usize;
                self.random_loading = true;
                Action::FetchRandom {
                    page,
                    per_page: config.random.per_page,
                }
            }
            Message::RandomLoaded(result) => {
                self.random_loading = false;
                match result {
                    Ok(list) => {
                        if list.is_empty() {
                            tracing::warn!("random page fetch returned no media");
                            return Action::None;
                        }
                        // Pages at the tail of the catalog can run short.
                        let idx = self.random_offset.min(list.len() - 1);
                        let anime = list.into_iter().nth(idx).map(Box::new);
                        match anime {
                            Some(anime) => Action::ShowDetail(anime),
                            None => Action::None,
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "random anime fetch failed");
                        Action::None
                    }
                }
            }
        }
    }

    fn begin_search(&mut self) -> Action {
        self.search_seq += 1;
        Action::Search {
            seq: self.search_seq,
            query: self.query.trim().to_string(),
        }
    }

    // ── View ──────────────────────────────────────────────────────

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, covers: &'a CoverCache) -> Element<'a, Message> {
        let brand = text("TANSAKU")
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE);

        let title = text("Anime Explorer")
            .size(style::TEXT_2XL)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_TIGHT);

        let random_label: Element<'_, Message> = if self.random_loading {
            row![
                lucide_icons::iced::icon_loader()
                    .size(style::TEXT_BASE)
                    .color(cs.on_primary)
                    .center(),
                text("Loading...")
                    .size(style::TEXT_BASE)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            ]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center)
            .into()
        } else {
            row![
                lucide_icons::iced::icon_sparkles()
                    .size(style::TEXT_BASE)
                    .color(cs.on_primary)
                    .center(),
                text("Random Anime")
                    .size(style::TEXT_BASE)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            ]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center)
            .into()
        };

        let random_button = button(
            container(random_label)
                .center_x(Length::Fill)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .padding([style::SPACE_SM, style::SPACE_XL])
        .on_press_maybe((!self.random_loading).then_some(Message::RandomPressed))
        .style(theme::primary_button(cs));

        let search_icon = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.on_surface_variant);

        let search_input = text_input("Search anime...", &self.query)
            .on_input(Message::QueryChanged)
            .on_submit(Message::SearchPressed)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fill)
            .style(theme::text_input_borderless(cs));

        let search_field = container(
            row![search_icon, search_input]
                .spacing(style::SPACE_SM)
                .align_y(Alignment::Center),
        )
        .style(theme::search_bar(cs))
        .padding([style::SPACE_XS, style::SPACE_MD])
        .width(Length::Fill);

        let search_button = button(
            lucide_icons::iced::icon_search()
                .size(style::TEXT_BASE)
                .color(cs.on_accent)
                .center(),
        )
        .padding([style::SPACE_SM, style::SPACE_MD])
        .on_press(Message::SearchPressed)
        .style(theme::accent_button(cs));

        let search_row = row![search_field, search_button]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center);

        let mut content = column![brand, title, random_button, search_row]
            .spacing(style::SPACE_LG)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        if !self.suggestions.is_empty() {
            let items: Vec<Element<'a, Message>> = self
                .suggestions
                .iter()
                .enumerate()
                .map(|(idx, anime)| {
                    widgets::suggestion_item(cs, anime, covers, Message::SuggestionChosen(idx))
                })
                .collect();

            let list = widgets::styled_scrollable(
                column(items)
                    .spacing(style::SPACE_XXS)
                    .padding(style::SPACE_XS),
                cs,
            )
            .height(Length::Fixed(style::SUGGESTION_LIST_HEIGHT));

            content = content.push(
                container(list)
                    .style(theme::suggestion_panel(cs))
                    .width(Length::Fill),
            );
        } else if self.no_results {
            content = content.push(
                container(
                    text("No results found.")
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                )
                .padding(style::SPACE_MD)
                .width(Length::Fill)
                .center_x(Length::Fill),
            );
        }

        let card = container(content)
            .style(theme::card(cs))
            .padding(style::SPACE_XL)
            .width(Length::Fixed(style::CARD_WIDTH));

        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tansaku_api::traits::AnimeTitle;

    fn anime(id: u64, romaji: &str) -> Anime {
        Anime {
            service_id: id,
            title: AnimeTitle {
                romaji: Some(romaji.into()),
                english: None,
                native: None,
            },
            cover_large: None,
            cover_medium: None,
            synopsis: None,
            genres: Vec::new(),
            episodes: None,
            average_score: None,
            status: None,
            format: None,
            season: None,
            season_year: None,
            start_date: None,
            end_date: None,
            duration: None,
            studios: Vec::new(),
        }
    }

    fn debounce_generation(action: &Action) -> u64 {
        match action {
            Action::Debounce { generation } => *generation,
            other => panic!("expected Debounce, got {other:?}"),
        }
    }

    #[test]
    fn test_keystroke_burst_produces_one_search() {
        let config = AppConfig::default();
        let mut screen = Explorer::new();

        let g1 = debounce_generation(&screen.update(Message::QueryChanged("c".into()), &config));
        let g2 = debounce_generation(&screen.update(Message::QueryChanged("co".into()), &config));
        let g3 = debounce_generation(&screen.update(Message::QueryChanged("cow".into()), &config));
        assert!(g1 < g2 && g2 < g3);

        // Timers for superseded keystrokes fire and are ignored.
        assert_eq!(
            screen.update(Message::DebounceElapsed(g1), &config),
            Action::None
        );
        assert_eq!(
            screen.update(Message::DebounceElapsed(g2), &config),
            Action::None
        );

        // Only the final timer turns into a query, for the final text.
        match screen.update(Message::DebounceElapsed(g3), &config) {
            Action::Search { seq, query } => {
                assert_eq!(seq, 1);
                assert_eq!(query, "cow");
            }
            other => panic!("expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_clearing_query_clears_suggestions_without_fetch() {
        let config = AppConfig::default();
        let mut screen = Explorer::new();

        screen.update(Message::QueryChanged("frieren".into()), &config);
        let action = screen.update(Message::DebounceElapsed(screen.debounce_generation), &config);
        let seq = match action {
            Action::Search { seq, .. } => seq,
            other => panic!("expected Search, got {other:?}"),
        };
        screen.update(
            Message::ResultsLoaded {
                seq,
                result: Ok(vec![anime(1, "Sousou no Frieren")]),
            },
            &config,
        );
        assert_eq!(screen.suggestions().len(), 1);

        // Emptying the field clears the list immediately, no action.
        assert_eq!(
            screen.update(Message::QueryChanged(String::new()), &config),
            Action::None
        );
        assert!(screen.suggestions().is_empty());

        // A stale timer firing afterwards must not fetch either.
        assert_eq!(
            screen.update(Message::DebounceElapsed(1), &config),
            Action::None
        );
    }

    #[test]
    fn test_stale_response_cannot_overwrite_newer_results() {
        let config = AppConfig::default();
        let mut screen = Explorer::new();

        screen.update(Message::QueryChanged("co".into()), &config);
        screen.update(Message::SearchPressed, &config); // seq 1
        screen.update(Message::QueryChanged("cowboy".into()), &config);
        screen.update(Message::SearchPressed, &config); // seq 2

        // The older response arrives late and is dropped.
        screen.update(
            Message::ResultsLoaded {
                seq: 1,
                result: Ok(vec![anime(10, "Wrong Show")]),
            },
            &config,
        );
        assert!(screen.suggestions().is_empty());

        // The current response lands.
        screen.update(
            Message::ResultsLoaded {
                seq: 2,
                result: Ok(vec![anime(1, "Cowboy Bebop")]),
            },
            &config,
        );
        assert_eq!(screen.suggestions().len(), 1);
        assert_eq!(screen.suggestions()[0].service_id, 1);
    }

    #[test]
    fn test_search_error_keeps_previous_suggestions() {
        let config = AppConfig::default();
        let mut screen = Explorer::new();

        screen.update(Message::QueryChanged("bebop".into()), &config);
        screen.update(Message::SearchPressed, &config);
        screen.update(
            Message::ResultsLoaded {
                seq: 1,
                result: Ok(vec![anime(1, "Cowboy Bebop")]),
            },
            &config,
        );

        screen.update(Message::SearchPressed, &config);
        screen.update(
            Message::ResultsLoaded {
                seq: 2,
                result: Err("connection reset".into()),
            },
            &config,
        );
        assert_eq!(screen.suggestions().len(), 1);
    }

    #[test]
    fn test_choosing_suggestion_opens_detail_and_resets_search() {
        let config = AppConfig::default();
        let mut screen = Explorer::new();

        screen.update(Message::QueryChanged("frieren".into()), &config);
        screen.update(Message::SearchPressed, &config);
        screen.update(
            Message::ResultsLoaded {
                seq: 1,
                result: Ok(vec![anime(7, "Sousou no Frieren")]),
            },
            &config,
        );

        match screen.update(Message::SuggestionChosen(0), &config) {
            Action::ShowDetail(a) => assert_eq!(a.service_id, 7),
            other => panic!("expected ShowDetail, got {other:?}"),
        }
        assert!(screen.suggestions().is_empty());
        assert!(screen.query.is_empty());
    }

    #[test]
    fn test_random_pick_draws_within_bounds() {
        let config = AppConfig::default();
        let mut screen = Explorer::new();

        match screen.update(Message::RandomPressed, &config) {
            Action::FetchRandom { page, per_page } => {
                assert!((1..=config.random.max_page).contains(&page));
                assert_eq!(per_page, config.random.per_page);
            }
            other => panic!("expected FetchRandom, got {other:?}"),
        }
        assert!(screen.random_loading);
        assert!(screen.random_offset < config.random.per_page as usize);

        // A second press while loading is ignored.
        assert_eq!(
            screen.update(Message::RandomPressed, &config),
            Action::None
        );
    }

    #[test]
    fn test_random_success_selects_offset_clamped_to_short_page() {
        let config = AppConfig::default();
        let mut screen = Explorer::new();
        screen.update(Message::RandomPressed, &config);
        screen.random_offset = 9;

        let list = vec![anime(1, "A"), anime(2, "B"), anime(3, "C")];
        match screen.update(Message::RandomLoaded(Ok(list)), &config) {
            Action::ShowDetail(a) => assert_eq!(a.service_id, 3),
            other => panic!("expected ShowDetail, got {other:?}"),
        }
        assert!(!screen.random_loading);
    }

    #[test]
    fn test_random_failure_leaves_state_unchanged() {
        let config = AppConfig::default();
        let mut screen = Explorer::new();
        screen.update(Message::RandomPressed, &config);

        assert_eq!(
            screen.update(Message::RandomLoaded(Err("timeout".into())), &config),
            Action::None
        );
        assert!(!screen.random_loading);

        // An empty page is the same logged no-op.
        screen.update(Message::RandomPressed, &config);
        assert_eq!(
            screen.update(Message::RandomLoaded(Ok(Vec::new())), &config),
            Action::None
        );
        assert!(!screen.random_loading);
    }
}
