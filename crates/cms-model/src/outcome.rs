use serde::{Deserialize, Serialize};

/// What happened to one CSV data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RowStatus {
    #[serde(rename_all = "camelCase")]
    Created { content_id: i64, title: String },
    Failed { message: String },
}

/// Per-row import result, accumulated for the life of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    /// Zero-based data-row index in file order.
    pub row_index: usize,
    #[serde(flatten)]
    pub status: RowStatus,
}

impl ImportOutcome {
    pub fn created(row_index: usize, content_id: i64, title: impl Into<String>) -> Self {
        Self {
            row_index,
            status: RowStatus::Created {
                content_id,
                title: title.into(),
            },
        }
    }

    pub fn failed(row_index: usize, message: impl Into<String>) -> Self {
        Self {
            row_index,
            status: RowStatus::Failed {
                message: message.into(),
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, RowStatus::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_outcome_round_trips() {
        let outcome = ImportOutcome::failed(3, "invalid boolean value: banana");
        let json = serde_json::to_string(&outcome).expect("serialize");
        let round: ImportOutcome = serde_json::from_str(&json).expect("deserialize");
        assert!(round.is_failed());
        assert_eq!(round.row_index, 3);
    }
}
