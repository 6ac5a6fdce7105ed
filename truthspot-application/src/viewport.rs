use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{sync::watch, task::JoinHandle};

use super::*;
use crate::session::Session;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Progress of the spot retrieval for the latest viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RetrievalState {
    #[default]
    Idle,
    Loading {
        generation: u64,
        bbox: MapBbox,
        zoom: Zoom,
    },
    Loaded {
        generation: u64,
        bbox: MapBbox,
        zoom: Zoom,
        spots: Vec<Spot>,
    },
    Failed {
        generation: u64,
        message: String,
    },
}

impl RetrievalState {
    pub const fn generation(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Loading { generation, .. }
            | Self::Loaded { generation, .. }
            | Self::Failed { generation, .. } => Some(*generation),
        }
    }

    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded { .. } | Self::Failed { .. })
    }
}

/// Retrieves the spots of the visible map region after the viewport
/// has been quiet for the debounce delay.
///
/// Every viewport change aborts the pending retrieval, including a
/// request that is already in flight. Only the task of the latest
/// generation may publish its result.
pub struct ViewportTracker<G: ?Sized> {
    gateway: Arc<G>,
    session: Session,
    limits: usecases::PageLimits,
    debounce: Duration,
    generation: Arc<AtomicU64>,
    state: Arc<watch::Sender<RetrievalState>>,
    pending: Option<JoinHandle<()>>,
}

impl<G: ?Sized> std::fmt::Debug for ViewportTracker<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportTracker")
            .field("session", &self.session)
            .field("limits", &self.limits)
            .field("debounce", &self.debounce)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl<G> ViewportTracker<G>
where
    G: SpotGateway + ?Sized + 'static,
{
    pub fn new(
        gateway: Arc<G>,
        session: Session,
        limits: usecases::PageLimits,
        debounce: Duration,
    ) -> Self {
        let (state, _) = watch::channel(RetrievalState::Idle);
        Self {
            gateway,
            session,
            limits,
            debounce,
            generation: Arc::new(AtomicU64::new(0)),
            state: Arc::new(state),
            pending: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<RetrievalState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> RetrievalState {
        self.state.borrow().clone()
    }

    /// Retrievals started afterwards act on behalf of the new session.
    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    /// Debounced retrieval after a pan or zoom.
    pub fn viewport_changed(&mut self, bbox: MapBbox, zoom: Zoom) -> u64 {
        self.spawn(bbox, zoom, self.debounce)
    }

    /// Immediate retrieval, e.g. for the initial view.
    pub fn load_now(&mut self, bbox: MapBbox, zoom: Zoom) -> u64 {
        self.spawn(bbox, zoom, Duration::ZERO)
    }

    /// Aborts the pending retrieval without starting a new one.
    pub fn cancel(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    fn spawn(&mut self, bbox: MapBbox, zoom: Zoom, delay: Duration) -> u64 {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let task = Retrieval {
            generation,
            current: Arc::clone(&self.generation),
            state: Arc::clone(&self.state),
        };
        let gateway = Arc::clone(&self.gateway);
        let identity = self.session.identity();
        let limits = self.limits;
        self.pending = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            task.publish(RetrievalState::Loading {
                generation,
                bbox,
                zoom,
            });
            debug!("Retrieving spots in {bbox} at zoom {zoom} (#{generation})");
            let result = usecases::query_spots(&*gateway, &identity, bbox, zoom, &limits).await;
            let next = match result {
                Ok(spots) => RetrievalState::Loaded {
                    generation,
                    bbox,
                    zoom,
                    spots,
                },
                Err(err) => {
                    error!("Failed to retrieve spots in {bbox}: {err}");
                    RetrievalState::Failed {
                        generation,
                        message: err.to_string(),
                    }
                }
            };
            task.publish(next);
        }));
        generation
    }
}

impl<G: ?Sized> Drop for ViewportTracker<G> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

struct Retrieval {
    generation: u64,
    current: Arc<AtomicU64>,
    state: Arc<watch::Sender<RetrievalState>>,
}

impl Retrieval {
    fn publish(&self, next: RetrievalState) {
        let published = self.state.send_if_modified(|state| {
            if self.current.load(Ordering::SeqCst) != self.generation {
                return false;
            }
            *state = next;
            true
        });
        if !published {
            debug!("Discarding result of outdated retrieval #{}", self.generation);
        }
    }
}
