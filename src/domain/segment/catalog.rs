//! The validated segment table.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use super::builtin::standard_segments;
use super::{Segment, SegmentId};
use crate::domain::plan::CatalogError;

/// Immutable segment table, in declaration order.
///
/// Every segment is unique, non-empty, and has unique module ids and paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentCatalog {
    segments: Vec<Segment>,
}

/// Layout of a YAML override file.
#[derive(Debug, Deserialize)]
struct SegmentCatalogFile {
    segments: Vec<Segment>,
}

static STANDARD_SEGMENTS: Lazy<SegmentCatalog> = Lazy::new(|| {
    SegmentCatalog::new(standard_segments()).expect("built-in segment table must be valid")
});

impl SegmentCatalog {
    /// Validates and builds a segment table.
    pub fn new(segments: Vec<Segment>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for segment in &segments {
            if !seen.insert(segment.id) {
                return Err(CatalogError::DuplicateSegment(segment.id));
            }
            if segment.modules.is_empty() {
                return Err(CatalogError::EmptySegment(segment.id));
            }

            let mut ids = HashSet::new();
            let mut paths = HashSet::new();
            for module in &segment.modules {
                if !ids.insert(module.id.as_str()) {
                    return Err(CatalogError::DuplicateModuleId {
                        segment: segment.id,
                        module: module.id.clone(),
                    });
                }
                if !paths.insert(module.path.as_str()) {
                    return Err(CatalogError::DuplicateModulePath {
                        segment: segment.id,
                        path: module.path.clone(),
                    });
                }
            }
        }

        Ok(Self { segments })
    }

    /// The built-in segment table.
    pub fn standard() -> &'static SegmentCatalog {
        &STANDARD_SEGMENTS
    }

    /// Parses and validates a YAML catalog.
    ///
    /// ```yaml
    /// segments:
    ///   - id: sales
    ///     display_name: Vendas
    ///     icon: shopping-cart
    ///     modules:
    ///       - { id: pdv, path: /sales/pdv, label: PDV, icon: monitor, category: sales }
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: SegmentCatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file.segments)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::{Category, PlanId};
    use crate::domain::segment::ModuleDescriptor;

    fn module(id: &str, path: &str) -> ModuleDescriptor {
        ModuleDescriptor::new(id, path, id, "box", Category::Sales)
    }

    fn segment(id: SegmentId, modules: Vec<ModuleDescriptor>) -> Segment {
        Segment {
            id,
            display_name: id.to_string(),
            icon: "box".to_string(),
            modules,
        }
    }

    #[test]
    fn standard_table_covers_every_segment() {
        for id in SegmentId::ALL {
            let segment = SegmentCatalog::standard().get(id);
            assert!(segment.is_some(), "missing segment {}", id);
            assert!(!segment.unwrap().modules.is_empty());
        }
    }

    #[test]
    fn sales_segment_keeps_declared_order() {
        let sales = SegmentCatalog::standard().get(SegmentId::Sales).unwrap();
        let ids: Vec<&str> = sales.modules.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["pdv", "estoque", "crm", "financeiro", "comissoes", "bi"]);
    }

    #[test]
    fn rejects_duplicate_segment() {
        let result = SegmentCatalog::new(vec![
            segment(SegmentId::Food, vec![module("a", "/a")]),
            segment(SegmentId::Food, vec![module("b", "/b")]),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateSegment(SegmentId::Food))));
    }

    #[test]
    fn rejects_empty_segment() {
        let result = SegmentCatalog::new(vec![segment(SegmentId::Health, vec![])]);
        assert!(matches!(result, Err(CatalogError::EmptySegment(SegmentId::Health))));
    }

    #[test]
    fn rejects_duplicate_module_id() {
        let result = SegmentCatalog::new(vec![segment(
            SegmentId::Sales,
            vec![module("pdv", "/a"), module("pdv", "/b")],
        )]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateModuleId { ref module, .. }) if module == "pdv"
        ));
    }

    #[test]
    fn rejects_duplicate_module_path() {
        let result = SegmentCatalog::new(vec![segment(
            SegmentId::Sales,
            vec![module("a", "/same"), module("b", "/same")],
        )]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateModulePath { ref path, .. }) if path == "/same"
        ));
    }

    #[test]
    fn loads_yaml_catalog() {
        let yaml = r#"
segments:
  - id: services
    display_name: Serviços
    icon: briefcase
    modules:
      - id: ordens
        path: /services/orders
        label: Ordens de Serviço
        icon: clipboard
        category: operations
      - id: relatorios
        path: /services/reports
        label: Relatórios
        icon: chart
        category: reports
        min_plan: starter
"#;
        let catalog = SegmentCatalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.segments().len(), 1);
        let services = catalog.get(SegmentId::Services).unwrap();
        assert_eq!(services.modules[1].min_plan, Some(PlanId::Starter));
        assert_eq!(services.modules[1].category, Category::Reports);
        assert!(catalog.get(SegmentId::Sales).is_none());
    }

    #[test]
    fn yaml_with_unknown_category_fails_to_parse() {
        let yaml = r#"
segments:
  - id: services
    display_name: Serviços
    icon: briefcase
    modules:
      - { id: x, path: /x, label: X, icon: x, category: astrology }
"#;
        assert!(matches!(
            SegmentCatalog::from_yaml_str(yaml),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn missing_yaml_file_reports_path() {
        let err = SegmentCatalog::from_yaml_file(Path::new("/nonexistent/segments.yaml"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/segments.yaml"));
    }
}
