use tracing::{error, info};

use super::client::AskError;
use super::history::History;
use super::types::{AskRequest, Message};

pub const GREETING: &str = "Hi! I'm here to help. Ask me anything!";
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// State of one embedded widget.
///
/// Two independent machines live here: the panel (`Closed <-> Open`) and the
/// send path (`Idle -> Sending -> Idle`). Network I/O happens between
/// [`Controller::begin_send`] and [`Controller::settle`], outside of this type.
#[derive(Debug)]
pub struct Controller {
    history: History,
    transcript: Vec<Message>,
    draft: String,
    open: bool,
    loading: bool,
    focus_seq: u64,
}

impl Default for Controller {
    fn default() -> Self {
        Controller::new()
    }
}

impl Controller {
    pub fn new() -> Controller {
        Controller {
            history: History::default(),
            transcript: vec![Message::assistant(GREETING)],
            draft: String::new(),
            open: false,
            loading: false,
            focus_seq: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Everything shown in the panel, greeting included.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Bumped every time the text field should take focus.
    pub fn focus_seq(&self) -> u64 {
        self.focus_seq
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.request_focus();
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Moves to `Sending` and hands back the request to issue.
    ///
    /// Returns `None` without touching any state when the draft is blank or a
    /// request is already in flight.
    pub fn begin_send(&mut self) -> Option<AskRequest> {
        if self.loading || self.draft.trim().is_empty() {
            return None;
        }

        self.loading = true;
        let message = std::mem::take(&mut self.draft);
        self.record(Message::user(message.clone()));

        Some(AskRequest {
            message,
            history: self.history.snapshot(),
        })
    }

    /// Back to `Idle` with the bot's reply, or the fallback text on failure.
    pub fn settle(&mut self, outcome: Result<String, AskError>) -> Message {
        let reply = match outcome {
            Ok(answer) => {
                info!("bot answered ({} bytes)", answer.len());
                answer
            }
            Err(err) => {
                error!("widget request failed: {err}");
                FALLBACK_REPLY.to_string()
            }
        };

        let reply = Message::assistant(reply);
        self.record(reply.clone());
        self.loading = false;
        self.request_focus();
        reply
    }

    fn record(&mut self, message: Message) {
        self.history.push(message.clone());
        self.transcript.push(message);
    }

    fn request_focus(&mut self) {
        self.focus_seq = self.focus_seq.wrapping_add(1);
    }
}
