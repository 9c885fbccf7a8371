//! `linkgen routes` – list registered routes.

use anyhow::Result;
use linkgen_core::routes::RouteTable;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RouteView<'a> {
    name: &'a str,
    template: &'a str,
    params: Vec<&'a str>,
}

pub fn run_routes(table: &RouteTable, json: bool) -> Result<()> {
    let views: Vec<RouteView<'_>> = table
        .routes()
        .map(|(name, template)| RouteView {
            name,
            template,
            params: table.params(name).unwrap_or_default(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!("{:<24} {:<48} {}", "NAME", "TEMPLATE", "PARAMS");
    for v in views {
        println!("{:<24} {:<48} {}", v.name, v.template, v.params.join(","));
    }
    Ok(())
}
