//! In-process invalidation bus.
//!
//! Admin mutations publish a topic, public views subscribe and refetch.
//! Delivery is synchronous and in registration order; there is no payload,
//! a topic only says "what you hold for this is stale".

use std::sync::{Arc, Mutex, MutexGuard, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    SettingsUpdated,
    ProductsUpdated,
    CategoriesUpdated,
    ReviewsUpdated,
    OpenConsultation,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::SettingsUpdated,
        Topic::ProductsUpdated,
        Topic::CategoriesUpdated,
        Topic::ReviewsUpdated,
        Topic::OpenConsultation,
    ];

    /// Wire name, as used by the admin panel when it broadcasts.
    pub fn name(&self) -> &'static str {
        match self {
            Topic::SettingsUpdated => "settings:updated",
            Topic::ProductsUpdated => "products:updated",
            Topic::CategoriesUpdated => "categories:updated",
            Topic::ReviewsUpdated => "reviews:updated",
            Topic::OpenConsultation => "open:consultation",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

type Handler = Arc<dyn Fn(Topic) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Topic, Handler)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for one topic. The handler stays registered for as
    /// long as the returned [`Subscription`] lives.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, topic: Topic, handler: F) -> Subscription
    where
        F: Fn(Topic) + Send + Sync + 'static,
    {
        self.subscribe_many(&[topic], handler)
    }

    /// Register one handler for several topics behind a single handle.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe_many<F>(&self, topics: &[Topic], handler: F) -> Subscription
    where
        F: Fn(Topic) + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        let mut registry = lock(&self.registry);
        let mut ids = Vec::with_capacity(topics.len());
        for topic in topics {
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.push((id, *topic, handler.clone()));
            ids.push(id);
        }
        Subscription {
            registry: Arc::downgrade(&self.registry),
            ids,
        }
    }

    /// Deliver `topic` to every handler registered for it. Returns the
    /// number of handlers called.
    ///
    /// Handlers run outside the registry lock, so they may subscribe,
    /// unsubscribe or publish again.
    pub fn publish(&self, topic: Topic) -> usize {
        let targets: Vec<Handler> = lock(&self.registry)
            .handlers
            .iter()
            .filter(|(_, t, _)| *t == topic)
            .map(|(_, _, h)| h.clone())
            .collect();
        log::debug!("publish {} -> {} handler(s)", topic.name(), targets.len());
        for handler in &targets {
            handler(topic);
        }
        targets.len()
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        lock(&self.registry)
            .handlers
            .iter()
            .filter(|(_, t, _)| *t == topic)
            .count()
    }
}

/// Disposal handle returned by [`EventBus::subscribe`].
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    ids: Vec<u64>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry)
                .handlers
                .retain(|(id, _, _)| !self.ids.contains(id));
        }
    }
}
