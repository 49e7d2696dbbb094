//! Built-in segment → module table.

use super::{ModuleDescriptor, Segment, SegmentId};
use crate::domain::plan::{Category, PlanId};

fn segment(id: SegmentId, display_name: &str, icon: &str, modules: Vec<ModuleDescriptor>) -> Segment {
    Segment {
        id,
        display_name: display_name.to_string(),
        icon: icon.to_string(),
        modules,
    }
}

pub fn standard_segments() -> Vec<Segment> {
    use Category::*;

    vec![
        segment(
            SegmentId::Sales,
            "Vendas & Varejo",
            "shopping-cart",
            vec![
                ModuleDescriptor::new("pdv", "/sales/pdv", "PDV", "monitor", Sales),
                ModuleDescriptor::new("estoque", "/sales/inventory", "Estoque", "package", Inventory),
                ModuleDescriptor::new("crm", "/sales/crm", "CRM & Comercial", "users", Crm),
                ModuleDescriptor::new("financeiro", "/sales/finance", "Financeiro", "wallet", FinancialBasic),
                ModuleDescriptor::new("comissoes", "/sales/commissions", "Comissões", "percent", Hr),
                ModuleDescriptor::new("bi", "/sales/analytics", "Inteligência de Vendas", "bar-chart", Advanced),
            ],
        ),
        segment(
            SegmentId::Health,
            "Saúde",
            "heart-pulse",
            vec![
                ModuleDescriptor::new("agenda", "/health/schedule", "Agenda", "calendar", Operations),
                ModuleDescriptor::new("prontuarios", "/health/records", "Prontuários", "file-text", Operations),
                ModuleDescriptor::new("faturamento", "/health/billing", "Faturamento", "receipt", FinancialBasic),
                ModuleDescriptor::new("convenios", "/health/insurers", "Convênios", "shield", Crm),
                ModuleDescriptor::new("telemedicina", "/health/telemedicine", "Telemedicina", "video", Operations)
                    .with_min_plan(PlanId::Business),
            ],
        ),
        segment(
            SegmentId::Education,
            "Educação",
            "graduation-cap",
            vec![
                ModuleDescriptor::new("matriculas", "/education/enrollments", "Matrículas", "user-plus", Operations),
                ModuleDescriptor::new("turmas", "/education/classes", "Turmas", "users", Operations),
                ModuleDescriptor::new("mensalidades", "/education/tuition", "Mensalidades", "wallet", FinancialBasic),
                ModuleDescriptor::new("professores", "/education/staff", "Professores & RH", "id-card", Hr),
                ModuleDescriptor::new("ead", "/education/online", "Ensino a Distância", "video", Operations)
                    .with_min_plan(PlanId::Business),
            ],
        ),
        segment(
            SegmentId::Ecommerce,
            "E-commerce",
            "store",
            vec![
                ModuleDescriptor::new("loja", "/ecommerce/store", "Loja Virtual", "store", Sales),
                ModuleDescriptor::new("pedidos", "/ecommerce/orders", "Pedidos", "shopping-bag", Sales),
                ModuleDescriptor::new("estoque", "/ecommerce/inventory", "Estoque", "package", Inventory),
                ModuleDescriptor::new("financeiro", "/ecommerce/finance", "Financeiro", "wallet", FinancialBasic),
                ModuleDescriptor::new("marketing", "/ecommerce/marketing", "Marketing & Automação", "megaphone", Advanced),
                ModuleDescriptor::new("marketplaces", "/ecommerce/marketplaces", "Marketplaces", "globe", Advanced),
            ],
        ),
        segment(
            SegmentId::Manufacturing,
            "Indústria",
            "factory",
            vec![
                ModuleDescriptor::new("producao", "/manufacturing/production", "Ordens de Produção", "cog", Advanced)
                    .with_min_plan(PlanId::Starter),
                ModuleDescriptor::new("estoque", "/manufacturing/inventory", "Estoque", "package", Inventory),
                ModuleDescriptor::new("compras", "/manufacturing/purchasing", "Compras", "truck", Inventory),
                ModuleDescriptor::new("custos", "/manufacturing/costs", "Custos Industriais", "calculator", Reports),
                ModuleDescriptor::new("financeiro", "/manufacturing/finance", "Financeiro", "wallet", FinancialBasic),
            ],
        ),
        segment(
            SegmentId::Services,
            "Serviços",
            "briefcase",
            vec![
                ModuleDescriptor::new("ordens", "/services/orders", "Ordens de Serviço", "clipboard", Operations),
                ModuleDescriptor::new("agenda", "/services/schedule", "Agenda", "calendar", Operations),
                ModuleDescriptor::new("contratos", "/services/contracts", "Contratos", "file-signature", Crm),
                ModuleDescriptor::new("financeiro", "/services/finance", "Financeiro", "wallet", FinancialBasic),
            ],
        ),
        segment(
            SegmentId::Food,
            "Alimentação",
            "utensils",
            vec![
                ModuleDescriptor::new("comandas", "/food/tabs", "Comandas", "clipboard-list", Operations),
                ModuleDescriptor::new("cardapio", "/food/menu", "Cardápio", "book-open", Sales),
                ModuleDescriptor::new("estoque", "/food/inventory", "Estoque", "package", Inventory),
                ModuleDescriptor::new("financeiro", "/food/finance", "Financeiro", "wallet", FinancialBasic),
                ModuleDescriptor::new("delivery", "/food/delivery", "Delivery", "bike", Advanced),
            ],
        ),
    ]
}
