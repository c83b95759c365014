//! Catalog Store — the static card database, read once at startup.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// A single card entry from the catalog.
///
/// Only `name` and `eligibility` are interpreted by the server; every other
/// field is carried opaquely and forwarded to the recommendation prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    /// Free-text eligibility description. May embed a numeric minimum-income
    /// threshold ("Minimum income ₹30,000 per month").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Loads the card catalog from a JSON file.
/// Called once in `main`; the result is shared read-only for the process lifetime.
pub fn load_catalog(path: &Path) -> Result<Vec<CardRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read card catalog at {}", path.display()))?;
    let catalog: Vec<CardRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Card catalog at {} is not a valid card list", path.display()))?;
    info!("Card catalog loaded ({} records)", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_load_catalog_reads_records() {
        let file = write_catalog(
            r#"[
                {"name": "Alpha Card", "eligibility": "Minimum income ₹30,000", "annual_fee": "₹500"},
                {"name": "Beta Card"}
            ]"#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "Alpha Card");
        assert_eq!(
            catalog[0].eligibility.as_deref(),
            Some("Minimum income ₹30,000")
        );
    }

    #[test]
    fn test_unrecognized_fields_are_preserved() {
        let file = write_catalog(
            r#"[{"name": "Alpha Card", "issuer": "Alpha Bank", "rewards": "2% cashback"}]"#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog[0].extra["issuer"], "Alpha Bank");
        assert_eq!(catalog[0].extra["rewards"], "2% cashback");

        // Opaque fields must survive into the serialized form fed to the prompt.
        let out = serde_json::to_value(&catalog[0]).unwrap();
        assert_eq!(out["issuer"], "Alpha Bank");
    }

    #[test]
    fn test_missing_eligibility_is_none() {
        let file = write_catalog(r#"[{"name": "No Rules Card"}]"#);

        let catalog = load_catalog(file.path()).unwrap();
        assert!(catalog[0].eligibility.is_none());
        assert!(catalog[0].extra.is_empty());
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        let file = write_catalog("not json");
        assert!(load_catalog(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_catalog(Path::new("/nonexistent/card_db.json")).is_err());
    }
}
