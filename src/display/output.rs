use colored::*;
use riot_endpoints::catalogue::ResourceInfo;
use serde_json::Value;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MethodRow {
    endpoint: String,
    method: String,
    arguments: String,
    options: String,
}

pub fn display_catalogue(resources: &[ResourceInfo]) {
    println!("\n{}", "📚 Riot API endpoint catalogue".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let mut rows = vec![];
    for resource in resources {
        for method in resource.methods {
            rows.push(MethodRow {
                endpoint: resource.name.to_string(),
                method: method.name.to_string(),
                arguments: method.args.join(" "),
                options: method.options.join(", "),
            });
        }
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

/// Prints a request record as returned by the dry-run dispatcher.
pub fn display_query(record: &Value) {
    let field = |name: &str| record[name].as_str().unwrap_or("-").to_string();

    println!("\n{}", "🔗 Request".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    println!("{} {}", "Method:".bold(), field("method_key"));
    println!("{} {}", "Routing:".bold(), field("routing_value").yellow());
    println!("{} {}", "URL:".bold(), field("url").green());

    match serde_json::to_string_pretty(record) {
        Ok(pretty) => println!("\n{}\n", pretty.dimmed()),
        Err(e) => display_error(&e.to_string()),
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
