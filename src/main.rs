use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, scrollable, stack, text, text_input};
use iced::{Alignment, Element, Length, Size, Task, Theme};
use std::collections::HashMap;

// Declare the application modules
mod api;
mod config;
mod error;
mod state;
mod ui;

use api::client::SearchClient;
use api::models::{Hit, SearchResponse};
use config::Config;
use error::ApiError;
use state::search::SearchState;
use ui::lightbox::Lightbox;
use ui::toast::{Severity, Toast};

/// Toast copy shown to the user.
const MSG_EMPTY_QUERY: &str = "Please enter a search query.";
const MSG_NO_RESULTS: &str =
    "Sorry, there are no images matching your search query. Please try again!";
const MSG_REQUEST_FAILED: &str = "Something went wrong. Please try again later.";
const MSG_END_OF_RESULTS: &str = "We're sorry, but you've reached the end of search results.";
const MSG_NO_API_KEY: &str =
    "No API key configured. Set PIXABAY_API_KEY or add it to the config file.";

/// Id of the gallery viewport, so completion handlers can scroll it.
fn gallery_scroll_id() -> scrollable::Id {
    scrollable::Id::new("gallery")
}

/// Main application state
struct Pixgrid {
    /// Runtime configuration (API key, page size, pagination toggle)
    config: Config,
    /// Search API client shared by all fetch tasks
    client: SearchClient,
    /// Paging state for the active query
    search: SearchState,
    /// Text currently in the search box
    query_input: String,
    /// Hits rendered as gallery cards, in arrival order
    hits: Vec<Hit>,
    /// Downloaded card thumbnails keyed by hit id
    thumbnails: HashMap<u64, Handle>,
    /// A page fetch is in flight
    loading: bool,
    /// Whether the "Load more" button is shown
    show_load_more: bool,
    /// Full-size overlay viewer, when open
    lightbox: Option<Lightbox>,
    /// Active toast notifications, oldest first
    toasts: Vec<Toast>,
    /// Monotonic source of toast ids
    next_toast_id: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Search box content changed
    QueryChanged(String),
    /// User submitted the search form
    SearchSubmitted,
    /// User clicked the "Load more" button
    LoadMore,
    /// A page fetch finished
    SearchCompleted {
        token: u64,
        append: bool,
        result: Result<SearchResponse, ApiError>,
    },
    /// A card thumbnail finished downloading
    ThumbnailLoaded {
        token: u64,
        id: u64,
        result: Result<Handle, ApiError>,
    },
    /// User clicked a gallery card
    OpenLightbox(u64),
    /// The lightbox full-size image finished downloading
    LightboxLoaded {
        id: u64,
        result: Result<Handle, ApiError>,
    },
    /// User dismissed the lightbox
    CloseLightbox,
    /// A toast timed out or was clicked away
    ToastDismissed(u64),
}

impl Pixgrid {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = config::load();

        // If this fails, we panic because the app cannot function without
        // its HTTP client.
        let mut app = Pixgrid::with_config(config).expect("Failed to initialize HTTP client");

        println!("🔎 Pixgrid ready ({} hits per page)", app.config.per_page);

        let startup = if app.config.api_key.is_none() {
            app.push_toast(Severity::Warning, MSG_NO_API_KEY)
        } else {
            Task::none()
        };

        (app, startup)
    }

    /// Build the application from an explicit configuration.
    fn with_config(config: Config) -> Result<Self, ApiError> {
        let client = SearchClient::new(&config)?;
        let search = SearchState::new(config.per_page);

        Ok(Pixgrid {
            config,
            client,
            search,
            query_input: String::new(),
            hits: Vec::new(),
            thumbnails: HashMap::new(),
            loading: false,
            show_load_more: false,
            lightbox: None,
            toasts: Vec::new(),
            next_toast_id: 0,
        })
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(value) => {
                self.query_input = value;
                Task::none()
            }
            Message::SearchSubmitted => {
                let query = self.query_input.trim().to_string();
                if query.is_empty() {
                    return self.push_toast(Severity::Warning, MSG_EMPTY_QUERY);
                }

                self.search.begin_query(query);
                self.hits.clear();
                self.thumbnails.clear();
                self.show_load_more = false;
                self.loading = true;

                self.spawn_search(false)
            }
            Message::LoadMore => {
                // The button only exists for an active query; ignore stray
                // messages otherwise.
                if self.search.query().is_empty() {
                    return Task::none();
                }

                self.search.begin_next_page();
                self.show_load_more = false;
                self.loading = true;

                self.spawn_search(true)
            }
            Message::SearchCompleted {
                token,
                append,
                result,
            } => {
                if !self.search.is_current(token) {
                    // A newer request superseded this one; its own
                    // completion will settle the UI.
                    return Task::none();
                }

                // The loader clears on every completion path.
                self.loading = false;

                match result {
                    Ok(response) => self.apply_results(token, append, response),
                    Err(err) => {
                        eprintln!("⚠️  Search request failed: {}", err);
                        if append {
                            self.search.rollback_page();
                            self.show_load_more = self.config.pagination && self.search.has_more();
                        }
                        self.push_toast(Severity::Error, MSG_REQUEST_FAILED)
                    }
                }
            }
            Message::ThumbnailLoaded { token, id, result } => {
                if !self.search.is_current(token) {
                    return Task::none();
                }

                match result {
                    Ok(handle) => {
                        self.thumbnails.insert(id, handle);
                    }
                    Err(err) => {
                        // The card keeps its placeholder; not worth a toast.
                        eprintln!("⚠️  Thumbnail download failed for hit {}: {}", id, err);
                    }
                }

                Task::none()
            }
            Message::OpenLightbox(id) => {
                let Some(hit) = self.hits.iter().find(|hit| hit.id == id).cloned() else {
                    return Task::none();
                };

                let url = hit.large_image_url.clone();
                self.lightbox = Some(Lightbox::new(hit));

                let client = self.client.clone();
                Task::perform(
                    async move { client.fetch_image(&url).await },
                    move |result| Message::LightboxLoaded { id, result },
                )
            }
            Message::LightboxLoaded { id, result } => {
                // Guarded by identity rather than request generation: the
                // overlay may outlive the search that produced its hit.
                let Some(lightbox) = self.lightbox.as_mut() else {
                    return Task::none();
                };
                if lightbox.hit.id != id {
                    // The user already opened a different hit.
                    return Task::none();
                }

                match result {
                    Ok(handle) => {
                        lightbox.image = Some(handle);
                        Task::none()
                    }
                    Err(err) => {
                        eprintln!("⚠️  Full-size download failed for hit {}: {}", id, err);
                        self.lightbox = None;
                        self.push_toast(Severity::Error, MSG_REQUEST_FAILED)
                    }
                }
            }
            Message::CloseLightbox => {
                self.lightbox = None;
                Task::none()
            }
            Message::ToastDismissed(id) => {
                self.toasts.retain(|toast| toast.id != id);
                Task::none()
            }
        }
    }

    /// Launch the fetch task for the current query and page.
    fn spawn_search(&self, append: bool) -> Task<Message> {
        let token = self.search.generation();
        let client = self.client.clone();
        let query = self.search.query().to_string();
        let page = self.search.page();
        let per_page = self.search.per_page();

        Task::perform(
            async move { client.search(&query, page, per_page).await },
            move |result| Message::SearchCompleted {
                token,
                append,
                result,
            },
        )
    }

    /// Fold a successful page of results into the gallery and settle the
    /// "Load more" visibility against the reported total.
    fn apply_results(&mut self, token: u64, append: bool, response: SearchResponse) -> Task<Message> {
        self.search.record_total(response.total_hits);

        if !append && response.hits.is_empty() {
            return self.push_toast(Severity::Info, MSG_NO_RESULTS);
        }

        // One download task per fresh card; completions are keyed by hit id
        // and guarded by the request token.
        let mut tasks: Vec<Task<Message>> = response
            .hits
            .iter()
            .map(|hit| {
                let client = self.client.clone();
                let url = hit.webformat_url.clone();
                let id = hit.id;
                Task::perform(
                    async move { client.fetch_image(&url).await },
                    move |result| Message::ThumbnailLoaded { token, id, result },
                )
            })
            .collect();

        let appended = response.hits.len();
        self.hits.extend(response.hits);

        if self.config.pagination {
            if append {
                if self.search.has_more() {
                    self.show_load_more = true;
                } else {
                    self.show_load_more = false;
                    tasks.push(self.push_toast(Severity::Info, MSG_END_OF_RESULTS));
                }
                if appended > 0 {
                    // Keep the viewport moving with the freshly appended rows.
                    tasks.push(scrollable::scroll_by(
                        gallery_scroll_id(),
                        scrollable::AbsoluteOffset {
                            x: 0.0,
                            y: ui::gallery::CARD_HEIGHT * 2.0,
                        },
                    ));
                }
            } else {
                self.show_load_more = self.search.has_more();
            }
        }

        Task::batch(tasks)
    }

    /// Queue a toast and its auto-dismiss timer.
    fn push_toast(&mut self, severity: Severity, message: &str) -> Task<Message> {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast::new(id, severity, message));

        Task::perform(
            async move { tokio::time::sleep(ui::toast::DISMISS_AFTER).await },
            move |_| Message::ToastDismissed(id),
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let search_bar = row![
            text_input("Search images...", &self.query_input)
                .on_input(Message::QueryChanged)
                .on_submit(Message::SearchSubmitted)
                .padding(10)
                .width(Length::Fixed(360.0)),
            button("Search")
                .on_press(Message::SearchSubmitted)
                .padding(10),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let mut content = column![ui::gallery::view(&self.hits, &self.thumbnails)]
            .spacing(20)
            .padding(20)
            .width(Length::Fill)
            .align_x(Alignment::Center);

        if self.loading {
            content = content.push(text("Loading images...").size(16));
        }

        if self.show_load_more {
            content = content.push(
                button("Load more")
                    .on_press(Message::LoadMore)
                    .padding(10)
                    .style(button::primary),
            );
        }

        let page = column![
            container(search_bar)
                .center_x(Length::Fill)
                .padding(20),
            scrollable(content)
                .id(gallery_scroll_id())
                .width(Length::Fill)
                .height(Length::Fill),
        ];

        let mut layers = stack![container(page).width(Length::Fill).height(Length::Fill)];

        if let Some(lightbox) = &self.lightbox {
            layers = layers.push(ui::lightbox::view(lightbox));
        }

        if !self.toasts.is_empty() {
            layers = layers.push(ui::toast::view(&self.toasts));
        }

        layers.into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Pixgrid", Pixgrid::update, Pixgrid::view)
        .theme(Pixgrid::theme)
        .window_size(Size::new(1180.0, 840.0))
        .centered()
        .run_with(Pixgrid::new)
}
