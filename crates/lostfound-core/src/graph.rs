use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::DatabaseSchema;

/// Summary of FK graph structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FkGraphSummary {
    pub nodes: usize,
    pub edges: usize,
}

/// Report for FK dependency ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FkGraphReport {
    pub summary: FkGraphSummary,
    /// Parent-first table order, absent when the graph has a cycle.
    pub topo_order: Option<Vec<String>>,
    pub cycle: Option<Vec<String>>,
}

/// Build a deterministic FK dependency report for a database schema.
pub fn build_fk_graph_report(schema: &DatabaseSchema) -> FkGraphReport {
    let graph = build_adjacency(schema);
    let nodes = graph.len();
    let edges = graph.values().map(|targets| targets.len()).sum();
    let summary = FkGraphSummary { nodes, edges };

    match toposort(&graph) {
        Ok(order) => FkGraphReport {
            summary,
            topo_order: Some(order),
            cycle: None,
        },
        Err(cycle) => FkGraphReport {
            summary,
            topo_order: None,
            cycle: Some(cycle),
        },
    }
}

/// Order in which tables can be dropped: every table precedes the tables it
/// references.
pub fn drop_order(schema: &DatabaseSchema) -> Result<Vec<String>> {
    let report = build_fk_graph_report(schema);
    match report.topo_order {
        Some(mut order) => {
            order.reverse();
            Ok(order)
        }
        None => Err(Error::Unsupported(format!(
            "cyclic FK graph: {}",
            report.cycle.unwrap_or_default().join(", ")
        ))),
    }
}

// Edges point from referenced (parent) table to referencing (child) table.
fn build_adjacency(schema: &DatabaseSchema) -> BTreeMap<String, BTreeSet<String>> {
    let mut graph: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for table in &schema.tables {
        graph.entry(table.name.clone()).or_default();

        for fk in table.foreign_keys() {
            graph
                .entry(fk.referenced_table.clone())
                .or_default()
                .insert(table.name.clone());
        }
    }

    graph
}

fn toposort(graph: &BTreeMap<String, BTreeSet<String>>) -> std::result::Result<Vec<String>, Vec<String>> {
    let mut indegree: BTreeMap<String, usize> = BTreeMap::new();

    for node in graph.keys() {
        indegree.entry(node.clone()).or_insert(0);
    }

    for targets in graph.values() {
        for target in targets {
            *indegree.entry(target.clone()).or_insert(0) += 1;
        }
    }

    let mut ready: BTreeSet<String> = indegree
        .iter()
        .filter_map(|(node, count)| if *count == 0 { Some(node.clone()) } else { None })
        .collect();

    let mut order = Vec::with_capacity(graph.len());

    while let Some(node) = ready.pop_first() {
        order.push(node.clone());

        if let Some(targets) = graph.get(&node) {
            for target in targets {
                if let Some(count) = indegree.get_mut(target) {
                    *count = count.saturating_sub(1);
                    if *count == 0 {
                        ready.insert(target.clone());
                    }
                }
            }
        }
    }

    if order.len() == graph.len() {
        Ok(order)
    } else {
        let cycle_nodes: Vec<String> = indegree
            .into_iter()
            .filter_map(|(node, count)| if count > 0 { Some(node) } else { None })
            .collect();
        Err(cycle_nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{tables, tracker_schema};
    use crate::constraints::ForeignKey;
    use crate::schema::{DatabaseSchema, Table};

    fn schema_of(tables: Vec<Table>) -> DatabaseSchema {
        DatabaseSchema {
            database: "db".to_string(),
            tables,
            legacy_tables: Vec::new(),
        }
    }

    #[test]
    fn toposort_reports_cycle() {
        let schema = schema_of(vec![
            Table::with_id("users", "id").foreign_key(ForeignKey::to("id", "users", "id")),
        ]);

        let report = build_fk_graph_report(&schema);
        assert!(report.topo_order.is_none());
        assert!(
            report
                .cycle
                .as_ref()
                .unwrap()
                .contains(&"users".to_string())
        );
        assert!(drop_order(&schema).is_err());
    }

    #[test]
    fn toposort_orders_dependencies() {
        let schema = schema_of(vec![
            Table::with_id("orders", "id")
                .foreign_key(ForeignKey::to("id", "users", "id")),
            Table::with_id("users", "id"),
        ]);

        let report = build_fk_graph_report(&schema);
        let order = report.topo_order.expect("expected toposort");
        let users_idx = order.iter().position(|item| item == "users").unwrap();
        let orders_idx = order.iter().position(|item| item == "orders").unwrap();
        assert!(users_idx < orders_idx);
    }

    #[test]
    fn tracker_drop_order_puts_dependents_first() {
        let schema = tracker_schema();
        let order = drop_order(&schema).expect("acyclic catalog");
        assert_eq!(order.len(), schema.tables.len());

        let position = |name: &str| order.iter().position(|item| item == name).unwrap();
        assert!(position(tables::MATCHES) < position(tables::ITEMS));
        assert!(position(tables::ITEMS) < position(tables::USERS));
        assert!(position(tables::USERS) < position(tables::USER_ROLES));
        assert!(position(tables::ALERTS) < position(tables::ITEMS));
    }
}
