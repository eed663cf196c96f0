//! # Snackbar State
//!
//! Queue of short user-facing messages.
//!
//! ## Message Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartStore rejects a call                                               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  sink.notify(MessageId::CartIncreaseError)                              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  SnackbarManager: queue.push(Message { id: <uuid>, message })           │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Presentation shows current() ──► set_message_shown(id) ──► next one    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;
use uuid::Uuid;

/// Messages the core can ask the presentation to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageId {
    CartIncreaseError,
    CartDecreaseError,
    CartAddError,
}

impl MessageId {
    /// User-facing text for this message.
    pub fn text(&self) -> &'static str {
        match self {
            MessageId::CartIncreaseError => {
                "There was an error and the quantity couldn't be increased. Please try again."
            }
            MessageId::CartDecreaseError => {
                "There was an error and the quantity couldn't be decreased. Please try again."
            }
            MessageId::CartAddError => {
                "There was an error and the snack couldn't be added. Please try again."
            }
        }
    }
}

/// Receives notifications from session state.
///
/// Implementations must not call back into the store that notified them
/// synchronously with anything that blocks on it.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: MessageId);
}

/// A queued snackbar message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub message: MessageId,
}

impl Message {
    pub fn text(&self) -> &'static str {
        self.message.text()
    }
}

/// Pending snackbar messages, oldest first.
#[derive(Debug)]
pub struct SnackbarManager {
    messages: watch::Sender<Vec<Message>>,
}

impl SnackbarManager {
    pub fn new() -> Self {
        let (messages, _) = watch::channel(Vec::new());
        SnackbarManager { messages }
    }

    /// Queues a message and returns its id.
    pub fn show_message(&self, message: MessageId) -> Uuid {
        let id = Uuid::new_v4();
        debug!(%id, ?message, "Queueing snackbar message");
        self.messages
            .send_modify(|queue| queue.push(Message { id, message }));
        id
    }

    /// The message that should be on screen, if any.
    pub fn current(&self) -> Option<Message> {
        self.messages.borrow().first().cloned()
    }

    /// Every pending message.
    pub fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }

    /// Drops a message once the presentation has shown it.
    ///
    /// Unknown ids are ignored.
    pub fn set_message_shown(&self, id: Uuid) {
        self.messages.send_if_modified(|queue| {
            let before = queue.len();
            queue.retain(|m| m.id != id);
            queue.len() != before
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Message>> {
        self.messages.subscribe()
    }
}

impl Default for SnackbarManager {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for SnackbarManager {
    fn notify(&self, message: MessageId) {
        self.show_message(message);
    }
}
