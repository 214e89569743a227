//! Query resolution: debounce, cache, fetch, publish.
//!
//! `DataController::observe` is called with every new query text. Blank
//! queries publish an empty state immediately. Anything else is handed to
//! the debouncer; once the input settles the query is resolved from the
//! cache or the remote client, and the outcome is published on a
//! `tokio::sync::watch` channel that the presentation subscribes to.
//!
//! Every `observe` bumps a generation counter. A resolution only publishes
//! if its generation is still current, so a slow response for a query the
//! user already typed past can never overwrite newer state.

use std::num::NonZeroUsize;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::cache::QueryCache;
use crate::debounce::Debouncer;
use crate::remote::SearchClient;
use crate::types::{UserRecord, is_blank};

/// Published lookup state for the current query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSnapshot {
    pub data: Vec<UserRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl FetchSnapshot {
    pub fn loaded(data: Vec<UserRecord>) -> Self {
        Self {
            data,
            is_loading: false,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            is_loading: false,
            error: Some(message.into()),
        }
    }
}

/// A settled query waiting to be resolved.
#[derive(Debug, Clone)]
struct Resolution {
    generation: u64,
    query: String,
}

struct ControllerState {
    generation: u64,
    current_query: String,
    cache: QueryCache,
}

struct ControllerInner<C> {
    client: C,
    state: Mutex<ControllerState>,
    published: watch::Sender<FetchSnapshot>,
}

pub struct DataController<C: SearchClient + 'static> {
    inner: Arc<ControllerInner<C>>,
    debouncer: Debouncer<Resolution>,
}

impl<C: SearchClient + 'static> DataController<C> {
    pub fn new(client: C, delay: Duration) -> Self {
        Self::with_cache_capacity(client, delay, None)
    }

    pub fn with_cache_capacity(
        client: C,
        delay: Duration,
        cache_capacity: Option<NonZeroUsize>,
    ) -> Self {
        let (published, _) = watch::channel(FetchSnapshot::default());
        let inner = Arc::new(ControllerInner {
            client,
            state: Mutex::new(ControllerState {
                generation: 0,
                current_query: String::new(),
                cache: QueryCache::with_capacity(cache_capacity),
            }),
            published,
        });

        // The timer only holds a weak reference: once the controller is gone
        // there is nothing left to resolve against.
        let weak: Weak<ControllerInner<C>> = Arc::downgrade(&inner);
        let debouncer = Debouncer::new(delay, move |resolution: Resolution| {
            if let Some(inner) = weak.upgrade() {
                inner.resolve(resolution);
            }
        });

        Self { inner, debouncer }
    }

    /// Register a new query text and return the state to render right now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn observe(&self, query: &str) -> FetchSnapshot {
        let generation = {
            let mut state = self.inner.state.lock();
            state.generation += 1;
            state.current_query = query.to_string();
            if is_blank(query) {
                self.inner.published.send_replace(FetchSnapshot::default());
            }
            state.generation
        };

        if is_blank(query) {
            self.debouncer.cancel();
            return FetchSnapshot::default();
        }

        self.debouncer.schedule(Resolution {
            generation,
            query: query.to_string(),
        });
        self.snapshot()
    }

    /// Current published state.
    pub fn snapshot(&self) -> FetchSnapshot {
        self.inner.published.borrow().clone()
    }

    /// Receiver notified on every published change.
    pub fn subscribe(&self) -> watch::Receiver<FetchSnapshot> {
        self.inner.published.subscribe()
    }

    /// The query text most recently passed to `observe`.
    pub fn current_query(&self) -> String {
        self.inner.state.lock().current_query.clone()
    }

    pub fn is_cached(&self, query: &str) -> bool {
        self.inner.state.lock().cache.contains(query)
    }

    pub fn cached_query_count(&self) -> usize {
        self.inner.state.lock().cache.len()
    }

    /// Whether a debounced resolution is waiting for its quiet period.
    pub fn is_debouncing(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn client(&self) -> &C {
        &self.inner.client
    }
}

impl<C: SearchClient + 'static> ControllerInner<C> {
    /// Publish `snapshot` only if `generation` is still the latest query.
    fn publish_if_current(&self, generation: u64, snapshot: FetchSnapshot) -> bool {
        // Hold the lock while publishing so a concurrent observe cannot slip
        // in between the check and the send.
        let state = self.state.lock();
        if state.generation != generation {
            return false;
        }
        self.published.send_replace(snapshot);
        true
    }

    /// Called when the debounce timer fires for a settled query.
    fn resolve(self: Arc<Self>, resolution: Resolution) {
        {
            // Check and publish under one lock so a blank observe on another
            // thread cannot be overwritten by a stale loading state.
            let mut state = self.state.lock();
            if state.generation != resolution.generation {
                return;
            }

            if let Some(users) = state.cache.get(&resolution.query) {
                tracing::debug!(query = %resolution.query, "serving cached results");
                self.published.send_replace(FetchSnapshot::loaded(users));
                return;
            }

            self.published.send_modify(|snapshot| {
                snapshot.is_loading = true;
                snapshot.error = None;
            });
        }

        tokio::spawn(async move {
            self.fetch(resolution).await;
        });
    }

    async fn fetch(&self, resolution: Resolution) {
        let Resolution { generation, query } = resolution;
        tracing::debug!(%query, "fetching suggestions");

        let snapshot = match self.client.search_users(&query).await {
            Ok(users) => {
                self.state.lock().cache.insert(&query, users.clone());
                FetchSnapshot::loaded(users)
            }
            Err(e) => {
                tracing::warn!(%query, "user lookup failed: {e}");
                if e.is_rate_limited() {
                    tracing::warn!("rate limited by GitHub; set GITHUB_TOKEN for a higher limit");
                }
                FetchSnapshot::failed(e.to_string())
            }
        };

        if !self.publish_if_current(generation, snapshot) {
            tracing::debug!(%query, "discarding response for superseded query");
        }
    }
}
