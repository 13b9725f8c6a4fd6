//! Confirmation coordinator.
//!
//! Drives one delivered message through the idempotent confirmation
//! flow: decode, check the completion flag, send the SMS, then flip the
//! flag. Delivery is at least once, so every step is ordered to keep
//! redelivery safe - the flag check runs before the send, and the flag
//! update runs only after the send succeeds.

use crate::phone::{mask_phone, normalize_phone};
use crate::sender::SmsSender;
use crate::sms::format_confirmation_body;
use crate::store::FlagStore;
use intake_core::{ConfirmError, ConfirmationMessage};
use tracing::{error, info, warn};

/// How one delivery was resolved. Every variant is a terminal success
/// from the transport's point of view; redelivery-worthy failures
/// surface as `Err` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    /// The message was malformed or unusable. Acknowledged without
    /// action; redelivering it could never succeed.
    Dropped,
    /// The completion flag was already set, so an earlier delivery
    /// finished the work. No SMS sent.
    Skipped,
    /// The SMS was sent and the completion flag updated.
    Marked,
    /// The SMS was sent but the flag update failed or misbehaved. The
    /// participant was notified, but a redelivered copy may notify them
    /// again.
    Degraded,
}

/// Coordinates one confirmation per delivered message.
pub struct ConfirmationCoordinator<S, N> {
    store: S,
    sender: N,
}

impl<S, N> ConfirmationCoordinator<S, N>
where
    S: FlagStore,
    N: SmsSender,
{
    pub fn new(store: S, sender: N) -> Self {
        Self { store, sender }
    }

    /// Handle a raw transport envelope. Envelopes that fail to decode
    /// are dropped rather than returned as errors, since no number of
    /// redeliveries will make them decodable.
    pub async fn handle_envelope(&self, envelope: &str) -> Result<ConfirmationOutcome, ConfirmError> {
        let message = match ConfirmationMessage::from_envelope(envelope) {
            Ok(message) => message,
            Err(err) => {
                error!(error = %err, "dropping undecodable confirmation envelope");
                return Ok(ConfirmationOutcome::Dropped);
            }
        };
        self.handle(&message).await
    }

    /// Handle a decoded confirmation message.
    pub async fn handle(
        &self,
        message: &ConfirmationMessage,
    ) -> Result<ConfirmationOutcome, ConfirmError> {
        let response_id = message.response_id.as_str();

        let Some(phone) = normalize_phone(&message.phone) else {
            error!(
                response_id,
                phone = %mask_phone(&message.phone),
                "dropping confirmation with unusable phone number"
            );
            return Ok(ConfirmationOutcome::Dropped);
        };

        let selected_date = match message.selected_date() {
            Ok(date) => date,
            Err(err) => {
                error!(response_id, error = %err, "dropping confirmation with unparseable date");
                return Ok(ConfirmationOutcome::Dropped);
            }
        };

        // Idempotency gate. A store failure here propagates so the
        // transport redelivers; skipping the check would risk double
        // sends.
        match self.store.read_flag(response_id).await? {
            Some(true) => {
                info!(response_id, "confirmation already processed, skipping");
                return Ok(ConfirmationOutcome::Skipped);
            }
            Some(false) => {}
            None => {
                warn!(
                    response_id,
                    "no row found for response, may not be visible yet, proceeding"
                );
            }
        }

        let body = format_confirmation_body(selected_date, &message.timezone);
        let receipt = self
            .sender
            .send(&phone, &body)
            .await
            .map_err(|source| ConfirmError::Send {
                response_id: response_id.to_string(),
                source,
            })?;
        info!(
            response_id,
            phone = %mask_phone(&phone),
            sid = %receipt.sid,
            "confirmation SMS sent"
        );

        match self.store.mark_processed(response_id).await {
            Ok(1) => {
                info!(response_id, "response marked processed");
                Ok(ConfirmationOutcome::Marked)
            }
            Ok(0) => {
                warn!(
                    response_id,
                    "flag update matched no rows, row absent or already marked"
                );
                Ok(ConfirmationOutcome::Marked)
            }
            Ok(affected) => {
                // The guarded update matches at most one row; more means
                // the store misbehaved and the flag state is suspect.
                error!(response_id, affected, "flag update touched multiple rows");
                Ok(ConfirmationOutcome::Degraded)
            }
            Err(err) => {
                // The SMS is already out; failing now would trigger a
                // redelivery that sends it again.
                warn!(
                    response_id,
                    error = %err,
                    "SMS sent but flag update failed, may result in duplicate SMS on retry"
                );
                Ok(ConfirmationOutcome::Degraded)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::MockSmsSender;
    use crate::store::MemoryFlagStore;
    use async_trait::async_trait;
    use intake_core::StoreError;

    fn message() -> ConfirmationMessage {
        ConfirmationMessage {
            response_id: "R_abc123".to_string(),
            phone: "5551234567".to_string(),
            selected_date: "2026-09-05".to_string(),
            timezone: "US/Central".to_string(),
        }
    }

    fn coordinator() -> (
        ConfirmationCoordinator<MemoryFlagStore, MockSmsSender>,
        MemoryFlagStore,
        MockSmsSender,
    ) {
        let store = MemoryFlagStore::new();
        let sender = MockSmsSender::new();
        let coordinator = ConfirmationCoordinator::new(store.clone(), sender.clone());
        (coordinator, store, sender)
    }

    #[tokio::test]
    async fn first_delivery_sends_and_marks() {
        let (coordinator, store, sender) = coordinator();
        store.insert_row("R_abc123");

        let outcome = coordinator.handle(&message()).await.unwrap();

        assert_eq!(outcome, ConfirmationOutcome::Marked);
        assert_eq!(store.flag("R_abc123"), Some(true));
        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "+15551234567");
        assert!(sent[0].body.contains("September 05, 2026"));
        assert!(sent[0].body.contains("US/Central"));
    }

    #[tokio::test]
    async fn redelivery_after_success_sends_nothing() {
        let (coordinator, store, sender) = coordinator();
        store.insert_row("R_abc123");

        let first = coordinator.handle(&message()).await.unwrap();
        let second = coordinator.handle(&message()).await.unwrap();

        assert_eq!(first, ConfirmationOutcome::Marked);
        assert_eq!(second, ConfirmationOutcome::Skipped);
        assert_eq!(sender.sent_count(), 1);
    }

    #[tokio::test]
    async fn already_processed_row_is_skipped() {
        let (coordinator, store, sender) = coordinator();
        store.insert_with_flag("R_abc123", true);

        let outcome = coordinator.handle(&message()).await.unwrap();

        assert_eq!(outcome, ConfirmationOutcome::Skipped);
        assert_eq!(sender.sent_count(), 0);
    }

    #[tokio::test]
    async fn absent_row_still_sends() {
        // The row write and the message publish race; an invisible row
        // must not suppress the confirmation.
        let (coordinator, _store, sender) = coordinator();

        let outcome = coordinator.handle(&message()).await.unwrap();

        assert_eq!(outcome, ConfirmationOutcome::Marked);
        assert_eq!(sender.sent_count(), 1);
    }

    #[tokio::test]
    async fn send_failure_propagates_and_leaves_flag_unset() {
        let (coordinator, store, sender) = coordinator();
        store.insert_row("R_abc123");
        sender.fail(true);

        let err = coordinator.handle(&message()).await.unwrap_err();

        assert!(matches!(err, ConfirmError::Send { .. }));
        // Flag untouched, so the redelivered copy retries the send.
        assert_eq!(store.flag("R_abc123"), Some(false));
    }

    #[tokio::test]
    async fn flag_update_failure_after_send_is_degraded() {
        let (coordinator, store, sender) = coordinator();
        store.insert_row("R_abc123");
        store.fail_updates(true);

        let outcome = coordinator.handle(&message()).await.unwrap();

        assert_eq!(outcome, ConfirmationOutcome::Degraded);
        assert_eq!(sender.sent_count(), 1);
        assert_eq!(store.flag("R_abc123"), Some(false));
    }

    #[tokio::test]
    async fn store_read_failure_propagates() {
        let (coordinator, store, sender) = coordinator();
        store.insert_row("R_abc123");
        store.fail_reads(true);

        let err = coordinator.handle(&message()).await.unwrap_err();

        assert!(matches!(err, ConfirmError::Store(_)));
        assert_eq!(sender.sent_count(), 0);
    }

    #[tokio::test]
    async fn multi_row_flag_update_is_degraded() {
        // A store that violates the at-most-one-row update contract.
        struct MultiRowStore;

        #[async_trait]
        impl FlagStore for MultiRowStore {
            async fn read_flag(&self, _response_id: &str) -> Result<Option<bool>, StoreError> {
                Ok(Some(false))
            }

            async fn mark_processed(&self, _response_id: &str) -> Result<u64, StoreError> {
                Ok(2)
            }
        }

        let sender = MockSmsSender::new();
        let coordinator = ConfirmationCoordinator::new(MultiRowStore, sender.clone());

        let outcome = coordinator.handle(&message()).await.unwrap();

        assert_eq!(outcome, ConfirmationOutcome::Degraded);
        assert_eq!(sender.sent_count(), 1);
    }

    #[tokio::test]
    async fn unusable_phone_is_dropped() {
        let (coordinator, store, sender) = coordinator();
        store.insert_row("R_abc123");

        let mut bad = message();
        bad.phone = "12345".to_string();
        let outcome = coordinator.handle(&bad).await.unwrap();

        assert_eq!(outcome, ConfirmationOutcome::Dropped);
        assert_eq!(sender.sent_count(), 0);
        assert_eq!(store.flag("R_abc123"), Some(false));
    }

    #[tokio::test]
    async fn non_ascii_phone_is_dropped() {
        // The drop log masks the raw phone text, which can be arbitrary
        // survey input.
        let (coordinator, store, sender) = coordinator();
        store.insert_row("R_abc123");

        let mut bad = message();
        bad.phone = "☎☎☎☎☎☎☎".to_string();
        let outcome = coordinator.handle(&bad).await.unwrap();

        assert_eq!(outcome, ConfirmationOutcome::Dropped);
        assert_eq!(sender.sent_count(), 0);
    }

    #[tokio::test]
    async fn malformed_envelope_is_dropped() {
        let (coordinator, _store, sender) = coordinator();

        let outcome = coordinator.handle_envelope("not base64!!!").await.unwrap();

        assert_eq!(outcome, ConfirmationOutcome::Dropped);
        assert_eq!(sender.sent_count(), 0);
    }

    #[tokio::test]
    async fn valid_envelope_flows_end_to_end() {
        let (coordinator, store, sender) = coordinator();
        store.insert_row("R_abc123");

        let envelope = message().to_envelope().unwrap();
        let outcome = coordinator.handle_envelope(&envelope).await.unwrap();

        assert_eq!(outcome, ConfirmationOutcome::Marked);
        assert_eq!(sender.sent_count(), 1);
        assert_eq!(store.flag("R_abc123"), Some(true));
    }
}
