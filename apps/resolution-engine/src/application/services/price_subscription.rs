//! Price Subscription Controller
//!
//! Keeps an externally observed price map current as the derived symbol
//! set changes. Consumers watch the committed map through a
//! `tokio::sync::watch` channel; committing a new map is the staleness
//! signal.
//!
//! Overlapping passes are resolved by generation: every trigger advances
//! a monotonically increasing counter, and a completing pass commits only
//! if its generation is still the latest. A superseded pass is dropped on
//! completion - the network call itself is not aborted. Teardown advances
//! the generation the same way, so nothing in flight can commit after
//! [`PriceSubscriptionController::detach`].

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::application::services::PriceResolver;
use crate::domain::pricing::PriceMap;
use crate::domain::shared::Symbol;

/// Coordinates resolution passes against symbol-set changes.
pub struct PriceSubscriptionController {
    resolver: Arc<PriceResolver>,
    shared: Arc<ControllerShared>,
}

struct ControllerShared {
    /// Latest requested generation. Only a pass carrying this value may
    /// commit its result.
    generation: AtomicU64,
    /// Last requested symbol set. `None` until the first trigger, so a
    /// freshly attached controller always treats the first set as a
    /// change.
    requested: Mutex<Option<HashSet<Symbol>>>,
    /// Committed price map, observed by consumers.
    price_tx: watch::Sender<PriceMap>,
}

impl ControllerShared {
    /// Commit a completed pass if its generation is still the latest.
    ///
    /// Runs under the request lock so the check cannot interleave with a
    /// concurrent trigger. A superseded result is dropped; the latest
    /// request wins.
    fn commit(&self, generation: u64, prices: PriceMap) {
        let _requested = self.requested.lock();
        if self.generation.load(Ordering::SeqCst) == generation {
            self.price_tx.send_replace(prices);
        }
    }
}

impl PriceSubscriptionController {
    /// Create a controller over the given resolver.
    ///
    /// The committed map starts empty.
    #[must_use]
    pub fn new(resolver: Arc<PriceResolver>) -> Self {
        let (price_tx, _) = watch::channel(PriceMap::new());
        Self {
            resolver,
            shared: Arc::new(ControllerShared {
                generation: AtomicU64::new(0),
                requested: Mutex::new(None),
                price_tx,
            }),
        }
    }

    /// Watch the committed price map.
    ///
    /// The receiver observes every commit, starting from the map current
    /// at subscription time.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PriceMap> {
        self.shared.price_tx.subscribe()
    }

    /// Read the currently committed price map.
    #[must_use]
    pub fn current_prices(&self) -> PriceMap {
        self.shared.price_tx.borrow().clone()
    }

    /// React to a (possibly unchanged) derived symbol set.
    ///
    /// Compares by content against the previous request: an unchanged set
    /// is a no-op. An empty set commits an empty map synchronously with
    /// no resolver call. Any other change starts a resolution pass on the
    /// tokio runtime, stamped with a fresh generation; whichever pass
    /// carries the latest generation at completion time is the one that
    /// commits.
    ///
    /// Must be called from within a tokio runtime.
    pub fn update_symbols(&self, symbols: &HashSet<Symbol>) {
        let generation = {
            let mut requested = self.shared.requested.lock();
            if requested.as_ref() == Some(symbols) {
                return;
            }
            *requested = Some(symbols.clone());

            // Advancing the generation here also invalidates any pass
            // still in flight for the previous set.
            let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

            if symbols.is_empty() {
                self.shared.price_tx.send_replace(PriceMap::new());
                return;
            }
            generation
        };

        let resolver = Arc::clone(&self.resolver);
        let shared = Arc::clone(&self.shared);
        let request: Vec<Symbol> = symbols.iter().cloned().collect();

        tokio::spawn(async move {
            let prices = resolver.resolve_prices(&request).await;
            shared.commit(generation, prices);
        });
    }

    /// Detach the consumer.
    ///
    /// Advances the generation past every pass in flight, so no result
    /// started before the detach can ever commit. Advisory only: running
    /// requests are not aborted, merely ignored on completion.
    pub fn detach(&self) {
        self.shared.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl fmt::Debug for PriceSubscriptionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceSubscriptionController")
            .field(
                "generation",
                &self.shared.generation.load(Ordering::SeqCst),
            )
            .field("committed_symbols", &self.current_prices().len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
