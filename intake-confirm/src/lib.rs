//! Intake Confirm - Idempotent Confirmation Pipeline
//!
//! Consumes confirmation messages published after a successful survey
//! write, sends the participant an SMS confirming their follow-up
//! schedule, and marks the persisted row as processed. Messages are
//! delivered at least once; the completion-flag check is what makes
//! redelivery safe.

pub mod coordinator;
pub mod phone;
pub mod sender;
pub mod sms;
pub mod store;

pub use coordinator::{ConfirmationCoordinator, ConfirmationOutcome};
pub use phone::{mask_phone, normalize_phone};
pub use sender::{MockSmsSender, SentSms, SmsReceipt, SmsSender};
pub use sms::format_confirmation_body;
pub use store::{FlagStore, MemoryFlagStore};
