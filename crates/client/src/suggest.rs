//! Latest-keystroke-wins autocomplete.
//!
//! Every call to [`SuggestionFeed::push`] supersedes the previous one: the older request
//! task is aborted and the generation counter moves on. A task only publishes if its
//! generation is still current when it holds the channel's write lock, so an
//! out-of-order response can never overwrite the list for newer input.

use crate::lookup::MedicineLookup;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// The suggestion list published for one input value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Suggestions {
    /// Input the names were fetched for.
    pub query: String,
    pub names: Vec<String>,
}

pub struct SuggestionFeed<L> {
    lookup: Arc<L>,
    debounce: Duration,
    generation: Arc<AtomicU64>,
    in_flight: Option<JoinHandle<()>>,
    published: Arc<watch::Sender<Suggestions>>,
}

impl<L: MedicineLookup> SuggestionFeed<L> {
    /// Creates a feed. `debounce` delays each fetch inside the cancellable task; zero
    /// fetches immediately.
    pub fn new(lookup: Arc<L>, debounce: Duration) -> Self {
        let (published, _) = watch::channel(Suggestions::default());
        Self {
            lookup,
            debounce,
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
            published: Arc::new(published),
        }
    }

    /// Receiver that observes every published list.
    pub fn subscribe(&self) -> watch::Receiver<Suggestions> {
        self.published.subscribe()
    }

    /// The most recently published list.
    pub fn current(&self) -> Suggestions {
        self.published.borrow().clone()
    }

    /// Supersedes any in-flight request with one for `text`.
    ///
    /// Blank text publishes an empty list immediately and sends nothing. Must be called
    /// from within a tokio runtime.
    pub fn push(&mut self, text: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(stale) = self.in_flight.take() {
            stale.abort();
        }

        if text.trim().is_empty() {
            self.published.send_replace(Suggestions {
                query: text.to_owned(),
                names: Vec::new(),
            });
            return;
        }

        let lookup = Arc::clone(&self.lookup);
        let current = Arc::clone(&self.generation);
        let published = Arc::clone(&self.published);
        let debounce = self.debounce;
        let query = text.to_owned();

        self.in_flight = Some(tokio::spawn(async move {
            if !debounce.is_zero() {
                tokio::time::sleep(debounce).await;
            }

            let names = match lookup.suggestions(&query).await {
                Ok(names) => names,
                Err(e) => {
                    tracing::warn!("Suggestions for {:?} failed: {}", query, e);
                    Vec::new()
                }
            };

            let applied = published.send_if_modified(|shown| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *shown = Suggestions {
                    query: query.clone(),
                    names,
                };
                true
            });
            if !applied {
                tracing::debug!("Dropped stale suggestions for {:?}", query);
            }
        }));
    }
}

impl<L> Drop for SuggestionFeed<L> {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
