//! `linkgen decode <VALUE>` – undo query escaping.

use anyhow::Result;
use linkgen_core::url_model::query_unescape;

pub fn run_decode(value: &str) -> Result<()> {
    println!("{}", query_unescape(value));
    Ok(())
}
