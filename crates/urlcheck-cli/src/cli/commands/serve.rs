//! `urlcheck serve` – run the urlinfo lookup API.

use anyhow::Result;
use std::path::Path;
use urlcheck_core::server;
use urlcheck_core::store::UrlStore;

pub async fn run_serve(dataset_dir: &Path, addr: &str) -> Result<()> {
    let store = UrlStore::load_from_dataset(dataset_dir)?;
    println!(
        "urlinfo API available on {addr} ({} URLs loaded)",
        store.len()
    );
    server::serve(addr, store).await
}
