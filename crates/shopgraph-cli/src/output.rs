//! Terminal output formatting.

use colored::Colorize;
use shopgraph_core::model::GraphCounts;
use shopgraph_db::TableCounts;
use shopgraph_graph::SyncResult;

/// Print per-table row counts after extraction.
pub fn print_table_counts(counts: &TableCounts) {
    let rows = [
        ("customers", counts.customers),
        ("categories", counts.categories),
        ("products", counts.products),
        ("orders", counts.orders),
        ("order_items", counts.order_items),
        ("events", counts.events),
    ];
    for (table, count) in rows {
        println!("  {:<12} {}", table, count.to_string().cyan());
    }
    println!("  {:<12} {}", "total".bold(), counts.total().to_string().cyan().bold());
}

/// Print the load summary.
pub fn print_sync_result(result: &SyncResult) {
    println!("\n{}", "Sync complete:".green().bold());
    println!("  Nodes merged:         {}", result.nodes);
    println!("  Relationships merged: {}", result.relationships);
    if result.skipped() > 0 {
        println!("  Rows skipped:         {}", result.skipped().to_string().yellow());
    }
    println!(
        "  {}",
        format!("{} rows in {} steps, {} batches", result.rows, result.steps, result.batches).dimmed()
    );
}

/// Print graph status.
pub fn print_graph_counts(uri: &str, counts: &GraphCounts) {
    println!("{}", "Graph Status".bold());
    println!("{}", "─".repeat(40));
    println!("  Server:        {}", uri.dimmed());
    println!("  Nodes:         {}", counts.nodes.to_string().cyan());
    println!("  Relationships: {}", counts.relationships.to_string().cyan());
    println!("{}", "─".repeat(40));
}
