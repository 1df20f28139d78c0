use crate::domain::model::PageSnapshot;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub const HTML_FILE: &str = "page.html";
pub const JSON_FILE: &str = "snapshot.json";
pub const OUTPUT_FORMATS: [&str; 2] = ["html", "json"];

/// Writes the snapshot in each requested format. Returns the file names
/// written, in request order.
pub async fn export_snapshot<S: Storage>(
    storage: &S,
    snapshot: &PageSnapshot,
    formats: &[String],
) -> Result<Vec<String>> {
    let mut written = Vec::with_capacity(formats.len());

    for format in formats {
        let (file, data) = match format.as_str() {
            "html" => (HTML_FILE, snapshot.to_html().into_bytes()),
            "json" => (JSON_FILE, serde_json::to_vec_pretty(snapshot)?),
            other => {
                tracing::warn!("Skipping unknown output format '{}'", other);
                continue;
            }
        };

        tracing::debug!("Writing {} ({} bytes)", file, data.len());
        storage.write_file(file, &data).await?;
        written.push(file.to_string());
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{markup_for, TargetSnapshot};
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn snapshot() -> PageSnapshot {
        PageSnapshot {
            generated_at: Utc::now(),
            targets: vec![TargetSnapshot {
                id: "container".to_string(),
                inner_html: markup_for(1),
                child_count: 0,
            }],
        }
    }

    #[tokio::test]
    async fn test_export_html_and_json() {
        let storage = MockStorage::default();
        let formats = vec!["html".to_string(), "json".to_string()];

        let written = export_snapshot(&storage, &snapshot(), &formats).await.unwrap();

        assert_eq!(written, vec![HTML_FILE, JSON_FILE]);

        let html = String::from_utf8(storage.get_file(HTML_FILE).await.unwrap()).unwrap();
        assert_eq!(html, format!("<div id=\"container\">{}</div>", markup_for(1)));

        let json: serde_json::Value =
            serde_json::from_slice(&storage.get_file(JSON_FILE).await.unwrap()).unwrap();
        assert_eq!(json["targets"][0]["id"], "container");
        assert_eq!(json["targets"][0]["child_count"], 0);
        assert!(json["generated_at"].is_string());
    }

    #[tokio::test]
    async fn test_export_skips_unknown_formats() {
        let storage = MockStorage::default();
        let formats = vec!["csv".to_string(), "json".to_string()];

        let written = export_snapshot(&storage, &snapshot(), &formats).await.unwrap();

        assert_eq!(written, vec![JSON_FILE]);
        assert!(storage.get_file(HTML_FILE).await.is_none());
    }
}
