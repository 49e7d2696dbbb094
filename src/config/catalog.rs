//! Catalog configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::ValidationError;
use crate::domain::plan::{CatalogError, PlanCatalog};
use crate::domain::segment::{SegmentCatalog, SegmentResolver};

/// Where the segment table comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Optional YAML file replacing the built-in segment table
    pub segments_file: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.segments_file {
            let is_yaml = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
                .unwrap_or(false);
            if !is_yaml {
                return Err(ValidationError::InvalidCatalogExtension);
            }
        }
        Ok(())
    }

    /// Build the resolver, loading the override file when configured.
    ///
    /// An invalid override is fatal; there is no fallback to the built-in
    /// table.
    pub fn build_resolver(&self) -> Result<SegmentResolver, CatalogError> {
        let segments = match &self.segments_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading segment catalog override");
                SegmentCatalog::from_yaml_file(path)?
            }
            None => SegmentCatalog::standard().clone(),
        };

        Ok(SegmentResolver::new(
            Arc::new(PlanCatalog::standard().clone()),
            Arc::new(segments),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_has_no_override() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        let resolver = config.build_resolver().unwrap();
        assert_eq!(resolver.segments(), SegmentCatalog::standard());
    }

    #[test]
    fn rejects_non_yaml_override() {
        let config = CatalogConfig {
            segments_file: Some(PathBuf::from("segments.json")),
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCatalogExtension));
    }

    #[test]
    fn accepts_yml_extension() {
        let config = CatalogConfig {
            segments_file: Some(PathBuf::from("/etc/erp/segments.YML")),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builds_resolver_from_override_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "segments:\n  - id: food\n    display_name: Padaria\n    icon: bread\n    modules:\n      - {{ id: caixa, path: /food/cashier, label: Caixa, icon: cash, category: sales }}\n"
        )
        .unwrap();

        let config = CatalogConfig {
            segments_file: Some(file.path().to_path_buf()),
        };
        let resolver = config.build_resolver().unwrap();
        assert!(resolver.get_modules("food").is_configured());
        assert!(!resolver.get_modules("sales").is_configured());
    }

    #[test]
    fn missing_override_file_is_fatal() {
        let config = CatalogConfig {
            segments_file: Some(PathBuf::from("/nonexistent/segments.yaml")),
        };
        assert!(matches!(config.build_resolver(), Err(CatalogError::Io { .. })));
    }
}
