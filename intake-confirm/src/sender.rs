//! Notification sender boundary.

use async_trait::async_trait;
use intake_core::SendError;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Acknowledgment from the SMS provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsReceipt {
    /// Provider-assigned message identifier.
    pub sid: String,
    /// Provider-reported status (e.g., "queued").
    pub status: String,
}

/// Sends one SMS to one destination. Implementations must be
/// thread-safe; the concrete provider client lives outside this crate.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<SmsReceipt, SendError>;
}

/// One message captured by the mock sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentSms {
    pub to: String,
    pub body: String,
    pub sid: String,
}

#[derive(Debug, Default)]
struct SenderState {
    sent: Vec<SentSms>,
    fail: bool,
}

/// Mock SMS sender for testing: records every send, optionally fails.
#[derive(Debug, Default, Clone)]
pub struct MockSmsSender {
    state: Arc<Mutex<SenderState>>,
}

impl MockSmsSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, fail: bool) {
        self.state.lock().unwrap().fail = fail;
    }

    /// All messages sent so far.
    pub fn sent(&self) -> Vec<SentSms> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn sent_count(&self) -> usize {
        self.state.lock().unwrap().sent.len()
    }
}

#[async_trait]
impl SmsSender for MockSmsSender {
    async fn send(&self, to: &str, body: &str) -> Result<SmsReceipt, SendError> {
        let mut state = self.state.lock().unwrap();
        if state.fail {
            return Err(SendError::Transport {
                reason: "injected send failure".to_string(),
            });
        }

        let sid = format!("SM{}", Uuid::now_v7().simple());
        state.sent.push(SentSms {
            to: to.to_string(),
            body: body.to_string(),
            sid: sid.clone(),
        });
        Ok(SmsReceipt {
            sid,
            status: "queued".to_string(),
        })
    }
}
