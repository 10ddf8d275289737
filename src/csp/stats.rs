//! Table rendering of solver state and statistics, used by the evaluator
//! layer when it turns solver output into explanations.

use prettytable::{Cell, Row, Table};

use crate::csp::{domain::DomainStore, model::ConstraintModel, search::SearchStats};

/// Renders each variable's remaining domain, in declaration order.
pub fn render_domains_table(model: &ConstraintModel, store: &DomainStore) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Variable"),
        Cell::new("Size"),
        Cell::new("Remaining Domain"),
    ]));

    for (var, domain) in store.domains() {
        let values = domain
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(Row::new(vec![
            Cell::new(model.name(var)),
            Cell::new(&domain.len().to_string()),
            Cell::new(&format!("{{{values}}}")),
        ]));
    }

    table.to_string()
}

/// Renders the counters of one search run.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Nodes Visited"),
        Cell::new("Backtracks"),
        Cell::new("Prunings"),
    ]));
    table.add_row(Row::new(vec![
        Cell::new(&stats.nodes_visited.to_string()),
        Cell::new(&stats.backtracks.to_string()),
        Cell::new(&stats.prunings.to_string()),
    ]));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{render_domains_table, render_stats_table};
    use crate::csp::{
        model::ConstraintModel,
        search::SearchStats,
        value::Value,
    };

    #[test]
    fn domains_table_lists_every_variable() {
        let variables = vec!["X".to_owned(), "Y".to_owned()];
        let mut domains = HashMap::new();
        domains.insert("X".to_owned(), vec![Value::Int(1), Value::Int(2)]);
        domains.insert("Y".to_owned(), vec![Value::from("Rosu")]);
        let model = ConstraintModel::new(variables, domains, vec![]).unwrap();

        let rendered = render_domains_table(&model, &model.store());
        assert!(rendered.contains("X"));
        assert!(rendered.contains("{1, 2}"));
        assert!(rendered.contains("{Rosu}"));
    }

    #[test]
    fn stats_table_shows_counters() {
        let stats = SearchStats {
            nodes_visited: 12,
            backtracks: 4,
            prunings: 7,
        };
        let rendered = render_stats_table(&stats);
        assert!(rendered.contains("12"));
        assert!(rendered.contains("4"));
        assert!(rendered.contains("7"));
    }
}
