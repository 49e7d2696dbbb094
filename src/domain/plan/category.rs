//! Feature categories used to gate modules behind plans.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag attached to every module; plans unlock modules by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    FinancialBasic,
    Sales,
    Operations,
    Inventory,
    Crm,
    Hr,
    Reports,
    Advanced,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::FinancialBasic,
        Category::Sales,
        Category::Operations,
        Category::Inventory,
        Category::Crm,
        Category::Hr,
        Category::Reports,
        Category::Advanced,
    ];

    /// Returns the canonical tag.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Category::FinancialBasic => "financial-basic",
            Category::Sales => "sales",
            Category::Operations => "operations",
            Category::Inventory => "inventory",
            Category::Crm => "crm",
            Category::Hr => "hr",
            Category::Reports => "reports",
            Category::Advanced => "advanced",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::FinancialBasic => "Financeiro básico",
            Category::Sales => "Vendas",
            Category::Operations => "Operações",
            Category::Inventory => "Estoque",
            Category::Crm => "CRM",
            Category::Hr => "RH",
            Category::Reports => "Relatórios",
            Category::Advanced => "Avançado",
        }
    }

    /// Looks up a category by tag.
    ///
    /// Case-insensitive; also understands the Portuguese labels the
    /// dashboard uses ("Avançado", "Estoque", ...). Unknown tags yield
    /// `None`.
    pub fn from_tag(tag: &str) -> Option<Category> {
        let tag = tag.trim().to_lowercase();
        let category = match tag.as_str() {
            "financial-basic" | "financeiro" => Category::FinancialBasic,
            "sales" | "vendas" => Category::Sales,
            "operations" | "operações" | "operacoes" => Category::Operations,
            "inventory" | "estoque" => Category::Inventory,
            "crm" => Category::Crm,
            "hr" | "rh" => Category::Hr,
            "reports" | "relatórios" | "relatorios" => Category::Reports,
            "advanced" | "avançado" | "avancado" => Category::Advanced,
            _ => return None,
        };
        Some(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_tags_resolve() {
        for category in Category::ALL {
            assert_eq!(Category::from_tag(category.as_tag()), Some(category));
        }
    }

    #[test]
    fn portuguese_advanced_label_resolves() {
        assert_eq!(Category::from_tag("Avançado"), Some(Category::Advanced));
        assert_eq!(Category::from_tag("AVANÇADO"), Some(Category::Advanced));
        assert_eq!(Category::from_tag("avancado"), Some(Category::Advanced));
    }

    #[test]
    fn unknown_tag_is_none() {
        assert_eq!(Category::from_tag("quantum"), None);
        assert_eq!(Category::from_tag(""), None);
    }

    #[test]
    fn serializes_kebab_case() {
        let json = serde_json::to_string(&Category::FinancialBasic).unwrap();
        assert_eq!(json, "\"financial-basic\"");
        let parsed: Category = serde_json::from_str("\"crm\"").unwrap();
        assert_eq!(parsed, Category::Crm);
    }
}
