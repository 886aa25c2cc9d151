//! Test doubles for the browser seams of `FormClient`.
//!
//! All doubles built by [`harness`] write into one shared [`Timeline`], so a
//! test can assert on the exact order of notifications, waits and navigation.

use async_trait::async_trait;
use campus_forms::{
    Delay, FormClient, FormError, FormRequest, FormResponse, FormsConfig, Navigator,
    NotificationKind, Notifier, Result, Transport,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Something observable that happened during a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Notified(NotificationKind, String),
    Slept(u32),
    Navigated(String),
    Reloaded,
}

#[derive(Clone, Default)]
pub struct Timeline(Rc<RefCell<Vec<Event>>>);

impl Timeline {
    pub fn record(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn notifications(&self) -> Vec<(NotificationKind, String)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Notified(kind, message) => Some((kind, message)),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|event| matches!(event, Event::Navigated(_) | Event::Reloaded))
            .collect()
    }
}

enum Reply {
    Json(&'static str),
    Status(u16),
    NetworkDown,
}

/// Transport that answers every request with a canned reply and remembers
/// what it was asked to send.
pub struct MockTransport {
    reply: Reply,
    requests: Rc<RefCell<Vec<FormRequest>>>,
}

impl MockTransport {
    /// Answer with the given JSON body and a 200 status
    pub fn json(body: &'static str) -> Self {
        Self::with_reply(Reply::Json(body))
    }

    /// Answer with a non-2xx status
    pub fn status(code: u16) -> Self {
        Self::with_reply(Reply::Status(code))
    }

    /// Fail before any response arrives
    pub fn failing() -> Self {
        Self::with_reply(Reply::NetworkDown)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Rc::default(),
        }
    }

    pub fn requests(&self) -> Rc<RefCell<Vec<FormRequest>>> {
        self.requests.clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn post_form(&self, request: FormRequest) -> Result<FormResponse> {
        self.requests.borrow_mut().push(request);
        match self.reply {
            Reply::Json(body) => {
                serde_json::from_str(body).map_err(|e| FormError::Parse(e.to_string()))
            }
            Reply::Status(code) => Err(FormError::Status(code)),
            Reply::NetworkDown => Err(FormError::Network("Mock network failure".to_string())),
        }
    }
}

pub struct RecordingNotifier(Timeline);

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.0.record(Event::Notified(kind, message.to_string()));
    }
}

pub struct RecordingNavigator(Timeline);

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.0.record(Event::Navigated(url.to_string()));
    }

    fn reload(&self) {
        self.0.record(Event::Reloaded);
    }
}

/// Records the requested wait and returns immediately
pub struct InstantDelay(Timeline);

#[async_trait(?Send)]
impl Delay for InstantDelay {
    async fn sleep(&self, millis: u32) {
        self.0.record(Event::Slept(millis));
    }
}

pub type MockClient = FormClient<MockTransport, RecordingNotifier, RecordingNavigator, InstantDelay>;

/// A client over `transport` with recording doubles for everything else
pub fn harness(
    transport: MockTransport,
) -> (MockClient, Timeline, Rc<RefCell<Vec<FormRequest>>>) {
    harness_with_config(FormsConfig::default(), transport)
}

pub fn harness_with_config(
    config: FormsConfig,
    transport: MockTransport,
) -> (MockClient, Timeline, Rc<RefCell<Vec<FormRequest>>>) {
    let timeline = Timeline::default();
    let requests = transport.requests();
    let client = FormClient::new(
        config,
        transport,
        RecordingNotifier(timeline.clone()),
        RecordingNavigator(timeline.clone()),
        InstantDelay(timeline.clone()),
    );
    (client, timeline, requests)
}
