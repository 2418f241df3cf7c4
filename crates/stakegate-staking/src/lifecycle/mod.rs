//! Lifecycle status of deposits and validator exits
//!
//! Nothing is persisted: a status is re-derived on every call from
//! confirmations, execution time and the provider's duration estimates, so the
//! same transaction moves forward as wall-clock time passes.

use {
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    stakegate_common::utils::add_seconds,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepositStatus {
    SignatureNeeded,
    AwaitingExecution,
    AwaitingEntry,
    ValidationStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidatorsExitStatus {
    SignatureNeeded,
    AwaitingExecution,
    RequestPending,
    ReadyToWithdraw,
}

/// `true` while `now` is strictly before `executed_at + window_seconds`.
/// A window that overflows the calendar never elapses.
fn within_window(executed_at: DateTime<Utc>, window_seconds: u64, now: DateTime<Utc>) -> bool {
    match add_seconds(executed_at, window_seconds) {
        Some(window_end) => now < window_end,
        None => true,
    }
}

pub fn deposit_status(
    is_confirmed: bool,
    deposit_execution_date: Option<DateTime<Utc>>,
    estimated_entry_time_seconds: u64,
    now: DateTime<Utc>,
) -> DepositStatus {
    if !is_confirmed {
        return DepositStatus::SignatureNeeded;
    }

    match deposit_execution_date {
        None => DepositStatus::AwaitingExecution,
        Some(executed_at) if within_window(executed_at, estimated_entry_time_seconds, now) => {
            DepositStatus::AwaitingEntry
        }
        Some(_) => DepositStatus::ValidationStarted,
    }
}

pub fn validators_exit_status(
    confirmations_count: u64,
    confirmations_required: u64,
    execution_date: Option<DateTime<Utc>>,
    estimated_exit_time_seconds: u64,
    now: DateTime<Utc>,
) -> ValidatorsExitStatus {
    if confirmations_count < confirmations_required {
        return ValidatorsExitStatus::SignatureNeeded;
    }

    match execution_date {
        None => ValidatorsExitStatus::AwaitingExecution,
        Some(executed_at) if within_window(executed_at, estimated_exit_time_seconds, now) => {
            ValidatorsExitStatus::RequestPending
        }
        Some(_) => ValidatorsExitStatus::ReadyToWithdraw,
    }
}
