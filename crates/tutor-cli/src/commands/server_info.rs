use anyhow::{Context, Result};
use tutor_core::api::{AnalysisApi, HttpClient, ServerInfo};
use tutor_core::config::ClientConfig;

use super::spinner;

pub fn run(config: &ClientConfig) -> Result<()> {
    let client = HttpClient::new(config)?;
    let origin = client.endpoints().origin().to_string();

    let pb = spinner(&format!("Querying {origin}"))?;
    let info = client.server_info();
    pb.finish_and_clear();

    match info.with_context(|| format!("Failed to query {origin}"))? {
        ServerInfo::Version(version) => println!("OCR engine: {version}"),
        ServerInfo::Unavailable(error) => println!("OCR engine unavailable: {error}"),
    }
    Ok(())
}
