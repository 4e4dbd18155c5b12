use anyhow::Result;
use tutor_core::api::AnalysisKind;
use tutor_core::config::ClientConfig;

use crate::summary::print_endpoint_summary;

pub fn run(config: &ClientConfig) -> Result<()> {
    let endpoints = config.endpoints();
    let analyze: Vec<_> = AnalysisKind::ALL
        .iter()
        .map(|&kind| (kind, endpoints.analyze(kind)))
        .collect();
    print_endpoint_summary(config, &endpoints, &analyze);
    Ok(())
}
