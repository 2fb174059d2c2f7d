//! Background analysis with latest-request-wins semantics.
//!
//! Each submitted document gets a generation number. The worker reports
//! `Busy` before it starts computing and exactly one terminal event per
//! generation: `Done`, `Failed`, or `Superseded` when a newer document
//! arrived first. Results are published whole or not at all.

use crate::config::EngineConfig;
use crate::contour::{Analysis, analyze_svg};
use crate::error::DocumentError;
use anyhow::Context;
use flume::{Receiver, Sender};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::JoinHandle;

pub type Generation = u64;

#[derive(Debug)]
struct Request {
    generation: Generation,
    document: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkerEvent {
    Busy { generation: Generation },
    Done {
        generation: Generation,
        analysis: Analysis,
    },
    Failed {
        generation: Generation,
        error: String,
    },
    Superseded { generation: Generation },
}

impl WorkerEvent {
    pub fn generation(&self) -> Generation {
        match self {
            WorkerEvent::Busy { generation }
            | WorkerEvent::Done { generation, .. }
            | WorkerEvent::Failed { generation, .. }
            | WorkerEvent::Superseded { generation } => *generation,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, WorkerEvent::Busy { .. })
    }
}

pub struct AnalysisWorker {
    requests: Option<Sender<Request>>,
    events: Receiver<WorkerEvent>,
    latest: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl AnalysisWorker {
    pub fn spawn(config: EngineConfig) -> anyhow::Result<Self> {
        let (request_tx, request_rx) = flume::unbounded::<Request>();
        let (event_tx, event_rx) = flume::unbounded::<WorkerEvent>();
        let latest = Arc::new(AtomicU64::new(0));

        let worker_latest = Arc::clone(&latest);
        let handle = std::thread::Builder::new()
            .name("contour-analysis".to_string())
            .spawn(move || run(config, request_rx, event_tx, worker_latest))
            .context("Failed to spawn analysis worker")?;

        Ok(Self {
            requests: Some(request_tx),
            events: event_rx,
            latest,
            handle: Some(handle),
        })
    }

    /// Queues a document, superseding anything queued or running.
    pub fn submit(&self, document: impl Into<String>) -> anyhow::Result<Generation> {
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        let requests = self
            .requests
            .as_ref()
            .context("Analysis worker is shut down")?;
        requests
            .send(Request {
                generation,
                document: document.into(),
            })
            .context("Analysis worker has stopped")?;
        Ok(generation)
    }

    /// Blocks for the next event.
    pub fn recv(&self) -> anyhow::Result<WorkerEvent> {
        self.events.recv().context("Analysis worker has stopped")
    }

    /// Blocks until `generation` reaches a terminal event, dropping events for
    /// other generations.
    pub fn wait_for(&self, generation: Generation) -> anyhow::Result<WorkerEvent> {
        loop {
            let event = self.recv()?;
            if event.generation() == generation && event.is_terminal() {
                return Ok(event);
            }
        }
    }
}

impl Drop for AnalysisWorker {
    fn drop(&mut self) {
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("analysis worker panicked");
            }
        }
    }
}

fn run(
    config: EngineConfig,
    requests: Receiver<Request>,
    events: Sender<WorkerEvent>,
    latest: Arc<AtomicU64>,
) {
    while let Ok(mut request) = requests.recv() {
        // Skip straight to the newest queued document.
        while let Ok(newer) = requests.try_recv() {
            log::debug!("generation {} superseded before start", request.generation);
            if events
                .send(WorkerEvent::Superseded {
                    generation: request.generation,
                })
                .is_err()
            {
                return;
            }
            request = newer;
        }

        let generation = request.generation;
        if events.send(WorkerEvent::Busy { generation }).is_err() {
            return;
        }

        let result = analyze_svg(&request.document, &config);

        let event = finish(generation, latest.load(Ordering::Acquire), result);
        if events.send(event).is_err() {
            return;
        }
    }
}

/// Turns a finished computation into its terminal event. A result whose
/// generation is no longer the latest is discarded, success or not.
fn finish(
    generation: Generation,
    latest: Generation,
    result: Result<Analysis, DocumentError>,
) -> WorkerEvent {
    if latest != generation {
        log::debug!("generation {generation} finished after being superseded");
        return WorkerEvent::Superseded { generation };
    }
    match result {
        Ok(analysis) => WorkerEvent::Done {
            generation,
            analysis,
        },
        Err(err) => WorkerEvent::Failed {
            generation,
            error: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const RING: &str = r#"<svg>
        <path d="M -10 -10 L 10 -10 L 10 10 L -10 10 Z"/>
        <path d="M -5 -5 L 5 -5 L 5 5 L -5 5 Z"/>
    </svg>"#;

    #[test]
    fn busy_then_done() {
        let worker = AnalysisWorker::spawn(EngineConfig::default()).unwrap();
        let generation = worker.submit(RING).unwrap();
        assert_eq!(worker.recv().unwrap(), WorkerEvent::Busy { generation });
        match worker.recv().unwrap() {
            WorkerEvent::Done {
                generation: g,
                analysis,
            } => {
                assert_eq!(g, generation);
                assert!((analysis.net_area - 300.0).abs() < 1e-9);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn bad_document_fails() {
        let worker = AnalysisWorker::spawn(EngineConfig::default()).unwrap();
        let generation = worker.submit("<svg><path></svg>").unwrap();
        assert!(matches!(
            worker.wait_for(generation).unwrap(),
            WorkerEvent::Failed { .. }
        ));
    }

    #[test]
    fn latest_submission_wins() {
        let worker = AnalysisWorker::spawn(EngineConfig::default()).unwrap();
        let generations: Vec<Generation> = (0..5).map(|_| worker.submit(RING).unwrap()).collect();
        let last = *generations.last().unwrap();

        let mut terminal: HashMap<Generation, WorkerEvent> = HashMap::new();
        while terminal.len() < generations.len() {
            let event = worker.recv().unwrap();
            if event.is_terminal() {
                let previous = terminal.insert(event.generation(), event);
                assert!(previous.is_none(), "two terminal events for one generation");
            }
        }

        assert!(matches!(terminal[&last], WorkerEvent::Done { .. }));
        assert_eq!(generations, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn finished_after_newer_submission_is_superseded() {
        let analysis = analyze_svg(RING, &EngineConfig::default()).unwrap();
        assert_eq!(
            finish(1, 2, Ok(analysis)),
            WorkerEvent::Superseded { generation: 1 }
        );

        let failure = analyze_svg("<svg><path></svg>", &EngineConfig::default()).unwrap_err();
        assert_eq!(
            finish(3, 4, Err(failure)),
            WorkerEvent::Superseded { generation: 3 }
        );
    }

    #[test]
    fn finished_while_latest_is_published() {
        let analysis = analyze_svg(RING, &EngineConfig::default()).unwrap();
        assert_eq!(
            finish(2, 2, Ok(analysis.clone())),
            WorkerEvent::Done {
                generation: 2,
                analysis,
            }
        );

        let failure = analyze_svg("<svg><path></svg>", &EngineConfig::default()).unwrap_err();
        assert!(matches!(
            finish(5, 5, Err(failure)),
            WorkerEvent::Failed { generation: 5, .. }
        ));
    }

    #[test]
    fn drop_joins_idle_worker() {
        let worker = AnalysisWorker::spawn(EngineConfig::default()).unwrap();
        drop(worker);
    }
}
