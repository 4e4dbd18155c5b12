pub mod ask;
pub mod chat;
pub mod config;
pub mod endpoint;
pub mod server_info;

use anyhow::Result;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use tutor_core::api::AnalysisKind;

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Verbal,
    Quant,
    Writing,
}

impl From<KindArg> for AnalysisKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Verbal => AnalysisKind::Verbal,
            KindArg::Quant => AnalysisKind::Quant,
            KindArg::Writing => AnalysisKind::Writing,
        }
    }
}

/// Loading indicator shown while a request is in flight.
pub(crate) fn spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}
