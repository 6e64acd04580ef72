//! Notification delivery for homework verdicts.
//!
//! - `telegram`: the `Messenger` seam and its Telegram Bot API implementation
//! - `dedup`: `Notifier`, which skips repeats of the last delivered message

pub mod dedup;
pub mod telegram;

pub use dedup::{Notifier, NotifyOutcome};
pub use telegram::{Messenger, TelegramMessenger};
