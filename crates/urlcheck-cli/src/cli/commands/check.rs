//! `urlcheck check <url>` – one-shot reputation lookup.

use anyhow::Result;
use std::path::Path;
use urlcheck_core::store::UrlStore;

pub fn run_check(dataset_dir: &Path, url: &str) -> Result<()> {
    let store = UrlStore::load_from_dataset(dataset_dir)?;
    let info = store.get_info(url);
    println!("{:<8} {:<10} {}", info.risk, info.category, info.url);
    Ok(())
}
