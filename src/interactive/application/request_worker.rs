use crate::interactive::application::search_service::SearchService;
use crate::interactive::domain::models::{
    DetailRequest, DetailResponse, SearchRequest, SearchResponse,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::debug;

/// Shared flag a request thread checks before publishing its response.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Handle to an outstanding request. Dropping it cancels the request.
#[derive(Debug)]
pub struct InFlight {
    id: u64,
    flag: CancelFlag,
}

impl InFlight {
    fn new(id: u64, flag: CancelFlag) -> Self {
        Self { id, flag }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flag.cancel();
    }
}

#[derive(Debug)]
pub enum WorkerEvent {
    Search(SearchResponse),
    Detail(DetailResponse),
}

/// Runs each request on its own thread and hands responses back over a channel.
///
/// At most one search and one detail request are outstanding; starting a new
/// one cancels the previous one of the same kind.
pub struct RequestWorker {
    service: Arc<SearchService>,
    sender: Sender<WorkerEvent>,
    receiver: Receiver<WorkerEvent>,
    search: Option<InFlight>,
    detail: Option<InFlight>,
}

impl RequestWorker {
    pub fn new(service: Arc<SearchService>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            service,
            sender,
            receiver,
            search: None,
            detail: None,
        }
    }

    pub fn spawn_search(&mut self, request: SearchRequest) {
        self.cancel_search();

        let flag = CancelFlag::new();
        self.search = Some(InFlight::new(request.id, flag.clone()));

        let service = self.service.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            if flag.is_cancelled() {
                return;
            }
            let response = service.search(&request);
            if flag.is_cancelled() {
                debug!(id = request.id, "Dropping response of cancelled search");
                return;
            }
            let _ = sender.send(WorkerEvent::Search(response));
        });
    }

    pub fn spawn_detail(&mut self, request: DetailRequest) {
        self.cancel_detail();

        let flag = CancelFlag::new();
        self.detail = Some(InFlight::new(request.id, flag.clone()));

        let service = self.service.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            if flag.is_cancelled() {
                return;
            }
            let response = service.detail(&request);
            if flag.is_cancelled() {
                debug!(id = request.id, "Dropping response of cancelled detail fetch");
                return;
            }
            let _ = sender.send(WorkerEvent::Detail(response));
        });
    }

    pub fn cancel_search(&mut self) {
        if let Some(in_flight) = self.search.take() {
            debug!(id = in_flight.id(), "Cancelling search");
        }
    }

    pub fn cancel_detail(&mut self) {
        if let Some(in_flight) = self.detail.take() {
            debug!(id = in_flight.id(), "Cancelling detail fetch");
        }
    }

    pub fn pending_search(&self) -> Option<u64> {
        self.search.as_ref().map(InFlight::id)
    }

    pub fn pending_detail(&self) -> Option<u64> {
        self.detail.as_ref().map(InFlight::id)
    }

    /// Next finished response, if any. Never blocks.
    pub fn try_recv(&mut self) -> Option<WorkerEvent> {
        let event = self.receiver.try_recv().ok()?;
        match &event {
            WorkerEvent::Search(response) if self.pending_search() == Some(response.id) => {
                self.search = None;
            }
            WorkerEvent::Detail(response) if self.pending_detail() == Some(response.id) => {
                self.detail = None;
            }
            _ => {}
        }
        Some(event)
    }
}
