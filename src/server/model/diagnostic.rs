//! Connectivity status of the document store.

use crate::model::diagnostic::DiagnosticDto;

const MAX_REASON_LENGTH: usize = 50;

/// Outcome of probing the document store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreStatus {
    /// No store connection was ever established.
    NotInitialized,
    /// Collections were enumerated successfully.
    Connected { collections: Vec<String> },
    /// A connection exists but enumerating collections failed.
    Degraded { reason: String },
}

impl StoreStatus {
    /// Renders the status as the human readable diagnostic report.
    ///
    /// Database url and name are only reported once a connection exists. The degraded
    /// reason is truncated to its first 50 characters so engine errors never leak in full.
    pub fn into_dto(self, database_name: Option<String>, database_url_set: bool) -> DiagnosticDto {
        let backend = "✅ Running".to_string();
        let database_url = Some(if database_url_set { "✅ Set" } else { "❌ Not Set" }.to_string());

        match self {
            Self::NotInitialized => DiagnosticDto {
                backend,
                database: "⚠️ Available but not initialized".to_string(),
                database_url: None,
                database_name: None,
                connection_status: "Not Connected".to_string(),
                collections: Vec::new(),
            },
            Self::Connected { collections } => DiagnosticDto {
                backend,
                database: "✅ Connected & Working".to_string(),
                database_url,
                database_name,
                connection_status: "Connected".to_string(),
                collections,
            },
            Self::Degraded { reason } => DiagnosticDto {
                backend,
                database: format!(
                    "⚠️ Connected but Error: {}",
                    reason.chars().take(MAX_REASON_LENGTH).collect::<String>()
                ),
                database_url,
                database_name,
                connection_status: "Connected".to_string(),
                collections: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_degraded_reason() {
        let reason = "x".repeat(80);
        let dto = StoreStatus::Degraded { reason }.into_dto(None, true);

        assert_eq!(dto.database, format!("⚠️ Connected but Error: {}", "x".repeat(50)));
        assert!(dto.collections.is_empty());
    }

    #[test]
    fn reports_uninitialized_store() {
        let dto = StoreStatus::NotInitialized.into_dto(Some("calciomercato".to_string()), false);

        assert_eq!(dto.backend, "✅ Running");
        assert_eq!(dto.database, "⚠️ Available but not initialized");
        assert_eq!(dto.connection_status, "Not Connected");
        assert_eq!(dto.database_url, None);
        assert_eq!(dto.database_name, None);
    }

    #[test]
    fn lists_collections_when_connected() {
        let dto = StoreStatus::Connected {
            collections: vec!["club".to_string(), "player".to_string()],
        }
        .into_dto(Some("calciomercato".to_string()), false);

        assert_eq!(dto.database, "✅ Connected & Working");
        assert_eq!(dto.database_url.as_deref(), Some("❌ Not Set"));
        assert_eq!(dto.database_name.as_deref(), Some("calciomercato"));
        assert_eq!(dto.collections, vec!["club", "player"]);
    }
}
