use std::{collections::HashMap, sync::Arc, time::Duration};

use bindisa_contact::{ContactPage, Scheduler};
use tokio::{sync::RwLock, task::JoinHandle, time::Instant};
use ulid::Ulid;

pub type SharedScheduler = Arc<dyn Scheduler>;

struct Visit {
    page: ContactPage<SharedScheduler>,
    last_seen: Instant,
}

/// Contact page controllers of the visits in progress, keyed by the id
/// carried in the visitor's cookie.
///
/// Removing a visit drops its controller, which discards any submission
/// still waiting on the scheduler.
#[derive(Clone)]
pub struct Visits {
    inner: Arc<RwLock<HashMap<String, Visit>>>,
    scheduler: SharedScheduler,
    delay: Duration,
    ttl: Duration,
}

impl Visits {
    pub fn new(scheduler: SharedScheduler, delay: Duration, ttl: Duration) -> Self {
        Self {
            inner: Arc::default(),
            scheduler,
            delay,
            ttl,
        }
    }

    pub async fn start(&self) -> String {
        self.start_with(|_| ()).await.0
    }

    /// Starts a visit and runs `f` against its fresh controller.
    pub async fn start_with<R>(
        &self,
        f: impl FnOnce(&ContactPage<SharedScheduler>) -> R,
    ) -> (String, R) {
        let id = Ulid::new().to_string();
        let visit = Visit {
            page: ContactPage::with_delay(self.scheduler.clone(), self.delay),
            last_seen: Instant::now(),
        };
        let result = f(&visit.page);

        self.inner.write().await.insert(id.to_owned(), visit);
        tracing::debug!(visit = %id, "contact visit started");

        (id, result)
    }

    /// Runs `f` against the visit's controller and marks the visit as seen.
    /// `None` when the visit is unknown or already expired.
    pub async fn with<R>(
        &self,
        id: &str,
        f: impl FnOnce(&ContactPage<SharedScheduler>) -> R,
    ) -> Option<R> {
        let mut visits = self.inner.write().await;
        let visit = visits.get_mut(id)?;
        visit.last_seen = Instant::now();

        Some(f(&visit.page))
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.inner.read().await.contains_key(id)
    }

    pub async fn end(&self, id: &str) -> bool {
        let ended = self.inner.write().await.remove(id).is_some();
        if ended {
            tracing::debug!(visit = %id, "contact visit ended");
        }

        ended
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Drops visits idle for longer than the configured ttl.
    pub async fn sweep(&self) -> usize {
        let mut visits = self.inner.write().await;
        let before = visits.len();
        let ttl = self.ttl;
        visits.retain(|_, visit| visit.last_seen.elapsed() < ttl);

        before - visits.len()
    }

    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let visits = self.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.tick().await;

            loop {
                interval.tick().await;
                let expired = visits.sweep().await;
                if expired > 0 {
                    tracing::info!(expired, "expired contact visits removed");
                }
            }
        })
    }
}
