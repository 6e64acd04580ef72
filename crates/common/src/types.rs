use std::str::FromStr;

use serde_json::Value;

use crate::error::HeraldError;

/// Review status of a homework submission, as reported by the Practicum API.
///
/// The set is closed: any other status code is rejected by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Human-readable verdict sent to the user for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = HeraldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(HeraldError::UnknownVerdict(other.to_string())),
        }
    }
}

/// One homework submission that passed field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

/// A validated poll response.
///
/// Records stay raw JSON: only the ones picked for delivery are ever checked,
/// so a malformed record elsewhere in the batch does not fail the cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct PollResponse {
    /// Submissions in server order (newest first).
    pub homeworks: Vec<Value>,
    /// Server-supplied cursor for the next poll.
    pub current_date: Option<i64>,
}

/// Which records of a batch are turned into notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordSelection {
    /// Only the first record of the batch.
    #[default]
    First,
    /// Every record, oldest first.
    All,
}

impl FromStr for RecordSelection {
    type Err = HeraldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(RecordSelection::First),
            "all" => Ok(RecordSelection::All),
            other => Err(HeraldError::Config(format!(
                "HOMEWORK_SELECTION must be 'first' or 'all', got '{other}'"
            ))),
        }
    }
}
