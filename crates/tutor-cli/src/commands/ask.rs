use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use tutor_core::api::HttpClient;
use tutor_core::chat::ChatController;
use tutor_core::config::ClientConfig;
use tutor_core::image_io::ImageAttachment;

use super::{spinner, KindArg};
use crate::summary::print_message;

#[derive(Args)]
pub struct AskArgs {
    /// The question to ask
    pub question: String,

    /// Image of the problem to upload with the question
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Test section (defaults to the config's `analysis`)
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Print the server's answer without rendering markup
    #[arg(long)]
    pub raw: bool,
}

pub fn run(args: &AskArgs, config: &ClientConfig) -> Result<()> {
    if args.question.trim().is_empty() {
        bail!("Question is empty");
    }

    let attachment = args
        .image
        .as_deref()
        .map(|path| {
            ImageAttachment::load(path)
                .with_context(|| format!("Failed to read image {}", path.display()))
        })
        .transpose()?;

    let client = HttpClient::new(config)?;
    let kind = args.kind.map(Into::into).unwrap_or(config.analysis);
    let mut chat = ChatController::new(kind);

    let pb = spinner(&format!("Asking the {kind} tutor"))?;
    chat.submit(&args.question, attachment.as_ref(), &client);
    pb.finish_and_clear();

    let Some(answer) = chat.log().messages().last() else {
        bail!("No answer received");
    };
    if chat.last_response().is_none() {
        // The controller records failures as an assistant message.
        bail!("{}", answer.body.text);
    }
    print_message(answer, args.raw);
    Ok(())
}
