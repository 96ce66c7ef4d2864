use serde::{Deserialize, Serialize};
use time::macros::datetime;
use time::serde::rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// Value stored in `completed_at` until a task is completed.
pub const UNSET_TIMESTAMP: OffsetDateTime = datetime!(0001-01-01 0:00 UTC);

/// A single to-do entry as it is persisted in the backing file.
///
/// Tasks carry no stored identifier; their id is their position in the
/// owning list (see [`crate::model::TaskLocator`]). Files that still carry an
/// `ID` key load fine, the key is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    #[serde(default)]
    pub completed: bool,
    pub description: String,
    #[serde(with = "rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "rfc3339", default = "unset_timestamp")]
    pub completed_at: OffsetDateTime,
}

impl Task {
    pub fn new<D: Into<String>>(description: D) -> Self {
        Self {
            completed: false,
            description: description.into(),
            created_at: local_now(),
            completed_at: UNSET_TIMESTAMP,
        }
    }

    pub fn finished_at(&self) -> Option<OffsetDateTime> {
        if self.completed_at == UNSET_TIMESTAMP {
            None
        } else {
            Some(self.completed_at)
        }
    }
}

fn unset_timestamp() -> OffsetDateTime {
    UNSET_TIMESTAMP
}

/// Current time in the local offset, UTC when the offset cannot be determined.
pub fn local_now() -> OffsetDateTime {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc().to_offset(offset)
}
