//! `linkgen lock <ID>` – print the lock view link.

use anyhow::Result;
use linkgen_core::generator::UrlGenerator;
use linkgen_core::routes::RouteTable;

pub fn run_lock(links: &UrlGenerator<RouteTable>, id: &str) -> Result<()> {
    println!("{}", links.generate_lock_url(id));
    Ok(())
}
