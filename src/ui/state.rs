//! Application state management
//!
//! This module provides the session state behind the recipe window: the
//! search inputs, the recipe currently on screen, the favorites list and
//! the pending notice popup.

use crate::favorites::{AddOutcome, FavoritesRepository, InMemoryFavorites, RemoveOutcome};
use crate::recipes::{Category, ProviderCommand, ProviderEvent, Recipe, RecipeQuery};
use crate::RecipeError;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use egui::{ColorImage, TextureHandle, TextureOptions};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Severity of a notice popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message popup shown over the main window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn warning(body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: "Warning".to_string(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Popup for a failed user action
    pub fn from_error(error: &RecipeError) -> Self {
        let body = error.user_message();
        match error {
            RecipeError::NotFound => Self::info("Not Found", body),
            RecipeError::Unreachable(_) => Self::error("Connection Error", body),
            RecipeError::StoreUnavailable(_) => Self::error("Favorites Error", body),
            RecipeError::InvalidName(_) => Self::warning(body),
            RecipeError::ConfigError(_) | RecipeError::ChannelError(_) => Self::error("Error", body),
        }
    }
}

/// Central application state
pub struct AppState {
    /// Recipe name typed into the search box
    pub search_text: String,

    /// Category picked in the filter dropdown
    pub selected_category: Option<Category>,

    /// Recipe currently on screen
    pub current_recipe: Option<Recipe>,

    /// Decoded thumbnail waiting to be uploaded to the GPU
    pub pending_thumbnail: Option<ColorImage>,

    /// Thumbnail texture of the current recipe
    pub thumbnail: Option<TextureHandle>,

    /// Request that is still in flight
    pub pending_request: Option<Uuid>,

    /// Request that produced `current_recipe`
    pub current_request: Option<Uuid>,

    /// The current recipe's thumbnail has not arrived yet
    pub awaiting_thumbnail: bool,

    /// Cached favorites list, refreshed after every change
    pub favorites: Vec<String>,

    /// Whether the favorites window is open
    pub show_favorites: bool,

    /// Selected row in the favorites window
    pub selected_favorite: Option<usize>,

    /// Popup to show, if any
    pub notice: Option<Notice>,

    favorites_store: Arc<dyn FavoritesRepository>,

    /// Channel to send provider commands
    pub provider_command_tx: Option<Sender<ProviderCommand>>,

    /// Channel to receive provider events
    pub provider_event_rx: Option<Receiver<ProviderEvent>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryFavorites::new()))
    }
}

impl AppState {
    /// Create a new application state backed by `favorites`
    pub fn new(favorites: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            search_text: String::new(),
            selected_category: None,
            current_recipe: None,
            pending_thumbnail: None,
            thumbnail: None,
            pending_request: None,
            current_request: None,
            awaiting_thumbnail: false,
            favorites: Vec::new(),
            show_favorites: false,
            selected_favorite: None,
            notice: None,
            favorites_store: favorites,
            provider_command_tx: None,
            provider_event_rx: None,
        }
    }

    /// Connect the state to a provider pipeline
    pub fn with_provider(
        mut self,
        command_tx: Sender<ProviderCommand>,
        event_rx: Receiver<ProviderEvent>,
    ) -> Self {
        self.provider_command_tx = Some(command_tx);
        self.provider_event_rx = Some(event_rx);
        self
    }

    /// Whether a lookup is in flight
    pub fn is_loading(&self) -> bool {
        self.pending_request.is_some()
    }

    /// Whether more provider events are expected
    pub fn needs_polling(&self) -> bool {
        self.is_loading() || self.awaiting_thumbnail
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Search by the name in the search box
    pub fn run_search(&mut self) {
        let query = self.search_text.trim().to_string();
        if query.is_empty() {
            self.notice = Some(Notice::warning("Enter a food name."));
            return;
        }
        self.dispatch(RecipeQuery::ByName(query));
    }

    /// Ask for a random recipe
    pub fn run_random(&mut self) {
        self.dispatch(RecipeQuery::Random);
    }

    /// Ask for the first recipe of the selected category
    pub fn run_filter(&mut self) {
        match self.selected_category {
            Some(category) => self.dispatch(RecipeQuery::ByCategory(category)),
            None => self.notice = Some(Notice::warning("Please pick a category first!")),
        }
    }

    fn dispatch(&mut self, query: RecipeQuery) {
        let Some(tx) = &self.provider_command_tx else {
            warn!("No provider connected, dropping {}", query);
            self.notice = Some(Notice::from_error(&RecipeError::ChannelError(
                "provider not connected".to_string(),
            )));
            return;
        };

        let request_id = Uuid::new_v4();
        debug!("Dispatching {} as {}", query, request_id);
        // Never block the frame on a full queue
        match tx.try_send(ProviderCommand::Fetch { query, request_id }) {
            Ok(()) => self.pending_request = Some(request_id),
            Err(TrySendError::Full(_)) => {
                warn!("Provider queue full, dropping {}", request_id);
                self.notice = Some(Notice::warning(
                    "Still fetching earlier requests. Try again in a moment.",
                ));
            }
            Err(TrySendError::Disconnected(_)) => {
                self.notice = Some(Notice::from_error(&RecipeError::ChannelError(
                    "provider worker stopped".to_string(),
                )));
            }
        }
    }

    /// Process incoming events from the provider pipeline
    pub fn poll_events(&mut self) {
        // Collect first, the handlers need `&mut self`
        let events: Vec<ProviderEvent> = match &self.provider_event_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        };

        for event in events {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: ProviderEvent) {
        match event {
            ProviderEvent::Recipe { recipe, request_id } => {
                if self.pending_request != Some(request_id) {
                    debug!("Dropping stale recipe for {}", request_id);
                    return;
                }
                self.pending_request = None;
                self.current_request = Some(request_id);
                self.current_recipe = Some(recipe);
                self.awaiting_thumbnail = true;
                self.pending_thumbnail = None;
                self.thumbnail = None;
            }
            ProviderEvent::Failed { error, request_id } => {
                if self.pending_request != Some(request_id) {
                    debug!("Dropping stale failure for {}", request_id);
                    return;
                }
                self.pending_request = None;
                let error: RecipeError = error.into();
                self.notice = Some(Notice::from_error(&error));
            }
            ProviderEvent::Thumbnail { image, request_id } => {
                if self.current_request == Some(request_id) {
                    self.awaiting_thumbnail = false;
                    self.pending_thumbnail = image;
                }
            }
            ProviderEvent::Shutdown => {
                debug!("Provider pipeline shut down");
                self.provider_command_tx = None;
                self.pending_request = None;
                self.awaiting_thumbnail = false;
            }
        }
    }

    /// Upload a freshly decoded thumbnail as a texture
    pub fn upload_thumbnail(&mut self, ctx: &egui::Context) {
        if let Some(image) = self.pending_thumbnail.take() {
            self.thumbnail = Some(ctx.load_texture("recipe-thumbnail", image, TextureOptions::LINEAR));
        }
    }

    /// Save the current recipe's name to favorites
    pub fn save_favorite(&mut self) {
        let Some(recipe) = &self.current_recipe else {
            return;
        };

        match self.favorites_store.add(&recipe.name) {
            Ok(AddOutcome::Added) => {
                self.notice = Some(Notice::info("Saved", "Added to favorites!"));
            }
            Ok(AddOutcome::AlreadyPresent) => {
                self.notice = Some(Notice::info("Saved", "Already in favorites."));
            }
            Err(e) => {
                warn!("Saving favorite failed: {}", e);
                self.notice = Some(Notice::from_error(&e));
            }
        }
        self.refresh_favorites();
    }

    /// Reload the favorites list from the store
    pub fn refresh_favorites(&mut self) {
        match self.favorites_store.list() {
            Ok(favorites) => {
                self.favorites = favorites;
                if self.selected_favorite.is_some_and(|i| i >= self.favorites.len()) {
                    self.selected_favorite = None;
                }
            }
            Err(e) => {
                warn!("Listing favorites failed: {}", e);
                self.notice = Some(Notice::from_error(&e));
            }
        }
    }

    /// Open the favorites window with a fresh list
    pub fn open_favorites(&mut self) {
        self.refresh_favorites();
        self.selected_favorite = None;
        self.show_favorites = true;
    }

    /// Delete the selected favorite
    pub fn remove_selected_favorite(&mut self) {
        let Some(name) = self
            .selected_favorite
            .and_then(|i| self.favorites.get(i))
            .cloned()
        else {
            return;
        };

        match self.favorites_store.remove(&name) {
            Ok(RemoveOutcome::Removed) => {
                self.notice = Some(Notice::info("Removed", format!("Deleted {}", name)));
            }
            Ok(RemoveOutcome::NotFound) => {
                self.notice = Some(Notice::info("Removed", format!("{} was already gone", name)));
            }
            Err(e) => {
                warn!("Removing favorite failed: {}", e);
                self.notice = Some(Notice::from_error(&e));
            }
        }
        self.selected_favorite = None;
        self.refresh_favorites();
    }

    /// Search for a favorite and close the favorites window
    pub fn load_favorite(&mut self, index: usize) {
        let Some(name) = self.favorites.get(index).cloned() else {
            return;
        };
        self.search_text = name;
        self.show_favorites = false;
        self.selected_favorite = None;
        self.run_search();
    }

    /// Stop the provider worker
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.provider_command_tx.take() {
            let _ = tx.send(ProviderCommand::Shutdown);
        }
    }
}
