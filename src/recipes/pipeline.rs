//! Provider pipeline
//!
//! Runs recipe lookups on a worker thread with its own tokio runtime. The UI
//! sends commands and polls events over crossbeam channels, so a slow
//! request never stalls a frame.

use super::provider::{ProviderError, RecipeProvider};
use super::thumbnail::decode_thumbnail;
use super::types::{Recipe, RecipeQuery};
use crate::Result;
use crossbeam_channel::{bounded, Receiver, Sender};
use egui::ColorImage;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;
use tokio::runtime::Builder;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Commands that can be sent to the provider pipeline
#[derive(Debug, Clone)]
pub enum ProviderCommand {
    /// Look up a recipe, then its thumbnail
    Fetch {
        query: RecipeQuery,
        /// Unique request ID for tracking
        request_id: Uuid,
    },

    /// Shutdown the pipeline
    Shutdown,
}

/// Events emitted by the provider pipeline
#[derive(Debug, Clone)]
pub enum ProviderEvent {
    /// A recipe was found
    Recipe { recipe: Recipe, request_id: Uuid },

    /// The lookup produced no recipe
    Failed {
        error: ProviderError,
        request_id: Uuid,
    },

    /// Thumbnail for the recipe of `request_id`; `None` when unavailable
    Thumbnail {
        image: Option<ColorImage>,
        request_id: Uuid,
    },

    /// Pipeline has shut down
    Shutdown,
}

/// Provider pipeline with channel-based communication
pub struct ProviderPipeline {
    provider: Arc<dyn RecipeProvider>,

    /// Thumbnail edge length in pixels
    thumbnail_size: u32,

    command_tx: Sender<ProviderCommand>,
    command_rx: Receiver<ProviderCommand>,
    event_tx: Sender<ProviderEvent>,
    event_rx: Receiver<ProviderEvent>,
}

impl ProviderPipeline {
    /// Create a new provider pipeline
    pub fn new(provider: Arc<dyn RecipeProvider>, thumbnail_size: u32) -> Self {
        let (command_tx, command_rx) = bounded(16);
        let (event_tx, event_rx) = bounded(16);

        Self {
            provider,
            thumbnail_size,
            command_tx,
            command_rx,
            event_tx,
            event_rx,
        }
    }

    /// Get a sender for commands
    pub fn command_sender(&self) -> Sender<ProviderCommand> {
        self.command_tx.clone()
    }

    /// Get a receiver for events
    pub fn event_receiver(&self) -> Receiver<ProviderEvent> {
        self.event_rx.clone()
    }

    /// Start the pipeline worker thread.
    ///
    /// Commands are handled one at a time; the thread exits on
    /// [`ProviderCommand::Shutdown`] or when every command sender is gone.
    pub fn start_worker(self) -> Result<JoinHandle<()>> {
        let Self {
            provider,
            thumbnail_size,
            command_tx,
            command_rx,
            event_tx,
            event_rx: _,
        } = self;
        // Only external senders keep the worker alive
        drop(command_tx);

        let handle = std::thread::spawn(move || {
            info!("Provider pipeline worker starting");

            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(rt) => rt,
                Err(e) => {
                    error!("Failed to create tokio runtime: {}", e);
                    let _ = event_tx.send(ProviderEvent::Shutdown);
                    return;
                }
            };

            loop {
                let command = match command_rx.recv() {
                    Ok(command) => latest_command(&command_rx, command),
                    Err(_) => {
                        debug!("All command senders dropped");
                        break;
                    }
                };

                match command {
                    ProviderCommand::Fetch { query, request_id } => {
                        debug!("Processing {} ({})", query, request_id);
                        let start = Instant::now();

                        match runtime.block_on(provider.fetch(&query)) {
                            Ok(recipe) => {
                                info!(
                                    "Found {:?} for {} in {}ms",
                                    recipe.name,
                                    query,
                                    start.elapsed().as_millis()
                                );
                                let image_url = recipe.image_url.clone();
                                let _ = event_tx.send(ProviderEvent::Recipe { recipe, request_id });

                                let image = match image_url {
                                    Some(url) => match runtime.block_on(provider.thumbnail(&url)) {
                                        Ok(bytes) => decode_thumbnail(&bytes, thumbnail_size),
                                        Err(e) => {
                                            debug!("Thumbnail unavailable: {}", e);
                                            None
                                        }
                                    },
                                    None => None,
                                };
                                let _ = event_tx.send(ProviderEvent::Thumbnail { image, request_id });
                            }
                            Err(e) => {
                                info!("{} failed: {}", query, e);
                                let _ = event_tx.send(ProviderEvent::Failed {
                                    error: e,
                                    request_id,
                                });
                            }
                        }
                    }

                    ProviderCommand::Shutdown => {
                        info!("Provider pipeline worker shutting down");
                        let _ = event_tx.send(ProviderEvent::Shutdown);
                        break;
                    }
                }
            }

            info!("Provider pipeline worker stopped");
        });

        Ok(handle)
    }
}

/// The newest of `first` and every command already queued behind it.
///
/// Only the newest fetch is still wanted by the UI; a queued shutdown wins.
fn latest_command(rx: &Receiver<ProviderCommand>, first: ProviderCommand) -> ProviderCommand {
    let mut latest = first;
    if matches!(latest, ProviderCommand::Shutdown) {
        return latest;
    }

    for next in rx.try_iter() {
        if let ProviderCommand::Fetch { request_id, .. } = &latest {
            debug!("Skipping superseded request {}", request_id);
        }
        latest = next;
        if matches!(latest, ProviderCommand::Shutdown) {
            break;
        }
    }
    latest
}
