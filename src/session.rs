//! Asynchronous analysis session with supersession.
//!
//! Every request bumps a generation counter. A result is published only when
//! its generation is still the newest one once the simulated latency has
//! elapsed, so rapid re-submission always ends with the latest request's
//! result on display.
//!
//! ```text
//! begin(kind, text) ──► Pending{g}  ──sleep──► analyze ──► Ready{g} if g is latest
//!                                                      └─► dropped otherwise
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::{debug, trace};
use tokio::sync::watch;

use crate::analysis::analyzer::AnalyzerKind;
use crate::analysis::result::AnalysisResult;
use crate::config::ToolkitConfig;
use crate::error::Result;
use crate::toolkit::{Toolkit, is_blank};

/// What the session is currently showing.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Nothing has been requested yet.
    Idle,
    /// A request is waiting out its simulated latency.
    Pending { generation: u64, kind: AnalyzerKind },
    /// The result of the latest delivered request.
    Ready {
        generation: u64,
        kind: AnalyzerKind,
        result: Arc<AnalysisResult>,
    },
}

impl SessionState {
    /// The generation this state belongs to, if any.
    pub fn generation(&self) -> Option<u64> {
        match self {
            SessionState::Idle => None,
            SessionState::Pending { generation, .. } | SessionState::Ready { generation, .. } => {
                Some(*generation)
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Pending { .. })
    }

    /// The delivered result, if the state is `Ready`.
    pub fn result(&self) -> Option<&Arc<AnalysisResult>> {
        match self {
            SessionState::Ready { result, .. } => Some(result),
            _ => None,
        }
    }
}

/// Outcome of completing a pending analysis.
#[derive(Clone, Debug, PartialEq)]
pub enum Delivery {
    /// The result was published.
    Delivered(Arc<AnalysisResult>),
    /// A newer request was made in the meantime; the result was discarded.
    Superseded { generation: u64, latest: u64 },
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Delivery::Delivered(_))
    }

    /// The published result, if any.
    pub fn result(&self) -> Option<&Arc<AnalysisResult>> {
        match self {
            Delivery::Delivered(result) => Some(result),
            Delivery::Superseded { .. } => None,
        }
    }
}

struct SessionInner {
    toolkit: Arc<Toolkit>,
    latency: Duration,
    latest: AtomicU64,
    state: watch::Sender<SessionState>,
}

/// Runs analyses with simulated latency and publishes the newest result.
///
/// Cloning is cheap; clones share the generation counter and state.
#[derive(Clone)]
pub struct AnalysisSession {
    inner: Arc<SessionInner>,
}

impl AnalysisSession {
    /// Build a toolkit from `config` and wrap it in a session.
    pub fn new(config: ToolkitConfig) -> Result<Self> {
        let latency = config.simulated_latency();
        Ok(Self::with_toolkit(Arc::new(Toolkit::new(config)?), latency))
    }

    /// Wrap an existing toolkit.
    pub fn with_toolkit(toolkit: Arc<Toolkit>, latency: Duration) -> Self {
        let (state, _) = watch::channel(SessionState::Idle);
        AnalysisSession {
            inner: Arc::new(SessionInner {
                toolkit,
                latency,
                latest: AtomicU64::new(0),
                state,
            }),
        }
    }

    /// Start a request and publish its pending state.
    ///
    /// Blank input is answered at once: the error result is published as
    /// `Ready` and no analyzer runs.
    pub fn begin(&self, kind: AnalyzerKind, text: &str) -> PendingAnalysis {
        let inner = &self.inner;
        let immediate = is_blank(text)
            .then(|| Arc::new(AnalysisResult::error(inner.toolkit.locale())));

        let mut generation = 0;
        inner.state.send_modify(|state| {
            generation = inner.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *state = match &immediate {
                Some(result) => SessionState::Ready {
                    generation,
                    kind,
                    result: Arc::clone(result),
                },
                None => SessionState::Pending { generation, kind },
            };
        });

        debug!(
            "session: request {generation} for {kind} ({} chars, blank: {})",
            text.chars().count(),
            immediate.is_some()
        );

        PendingAnalysis {
            session: self.clone(),
            generation,
            kind,
            text: text.to_string(),
            immediate,
        }
    }

    /// Begin a request and wait for its delivery.
    pub async fn run(&self, kind: AnalyzerKind, text: &str) -> Delivery {
        self.begin(kind, text).complete().await
    }

    /// Begin a request and complete it on the tokio runtime.
    ///
    /// Returns the request's generation. Must be called from within a
    /// runtime.
    pub fn submit(&self, kind: AnalyzerKind, text: &str) -> u64 {
        let pending = self.begin(kind, text);
        let generation = pending.generation();
        tokio::spawn(pending.complete());
        generation
    }

    /// Watch the session state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// A copy of the current state.
    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Whether the newest request is still waiting for its result.
    pub fn is_busy(&self) -> bool {
        self.inner.state.borrow().is_pending()
    }

    /// Generation of the newest request; 0 before the first one.
    pub fn latest_generation(&self) -> u64 {
        self.inner.latest.load(Ordering::SeqCst)
    }

    pub fn toolkit(&self) -> &Arc<Toolkit> {
        &self.inner.toolkit
    }

    pub fn latency(&self) -> Duration {
        self.inner.latency
    }
}

impl std::fmt::Debug for AnalysisSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisSession")
            .field("latency", &self.inner.latency)
            .field("latest_generation", &self.latest_generation())
            .finish()
    }
}

/// A request that has been announced but not yet delivered.
#[derive(Debug)]
#[must_use = "a pending analysis does nothing until completed"]
pub struct PendingAnalysis {
    session: AnalysisSession,
    generation: u64,
    kind: AnalyzerKind,
    text: String,
    immediate: Option<Arc<AnalysisResult>>,
}

impl PendingAnalysis {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn kind(&self) -> AnalyzerKind {
        self.kind
    }

    /// Wait out the simulated latency, analyze, and publish the result if
    /// this request is still the newest.
    pub async fn complete(self) -> Delivery {
        let inner = &self.session.inner;

        if let Some(result) = self.immediate {
            let latest = inner.latest.load(Ordering::SeqCst);
            return if latest == self.generation {
                Delivery::Delivered(result)
            } else {
                Delivery::Superseded {
                    generation: self.generation,
                    latest,
                }
            };
        }

        if !inner.latency.is_zero() {
            tokio::time::sleep(inner.latency).await;
        }

        let latest = inner.latest.load(Ordering::SeqCst);
        if latest != self.generation {
            debug!(
                "session: request {} superseded by {latest} before analysis",
                self.generation
            );
            return Delivery::Superseded {
                generation: self.generation,
                latest,
            };
        }

        let result = Arc::new(inner.toolkit.analyze(self.kind, &self.text));

        let mut latest = self.generation;
        let published = inner.state.send_if_modified(|state| {
            latest = inner.latest.load(Ordering::SeqCst);
            if latest != self.generation {
                return false;
            }
            *state = SessionState::Ready {
                generation: self.generation,
                kind: self.kind,
                result: Arc::clone(&result),
            };
            true
        });

        if published {
            trace!("session: request {} delivered", self.generation);
            Delivery::Delivered(result)
        } else {
            debug!(
                "session: request {} superseded by {latest}, result dropped",
                self.generation
            );
            Delivery::Superseded {
                generation: self.generation,
                latest,
            }
        }
    }
}
