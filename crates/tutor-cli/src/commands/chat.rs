use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tutor_core::api::HttpClient;
use tutor_core::chat::ChatController;
use tutor_core::config::ClientConfig;
use tutor_core::error::TutorError;
use tutor_core::image_io::ImageAttachment;

use super::{spinner, KindArg};
use crate::summary::{print_follow_up, print_message};

#[derive(Args)]
pub struct ChatArgs {
    /// Test section (defaults to the config's `analysis`)
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Print the server's answers without rendering markup
    #[arg(long)]
    pub raw: bool,
}

const HELP: &str = "\
Type a question and press Enter. Commands:
  /image <path>      attach an image to the next questions
  /image             detach the image
  /followup <text>   ask about the last answer
  /feedback yes|no   rate the last answer
  /help              show this help
  /quit              leave";

enum Line<'a> {
    Question(&'a str),
    Image(Option<&'a str>),
    FollowUp(&'a str),
    Feedback(Option<bool>),
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Line<'_> {
    let line = line.trim();
    let Some(command) = line.strip_prefix('/') else {
        return Line::Question(line);
    };
    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };
    match name {
        "image" if rest.is_empty() => Line::Image(None),
        "image" => Line::Image(Some(rest)),
        "followup" | "follow-up" => Line::FollowUp(rest),
        "feedback" => Line::Feedback(match rest {
            "yes" | "y" => Some(true),
            "no" | "n" => Some(false),
            _ => None,
        }),
        "help" | "?" => Line::Help,
        "quit" | "exit" | "q" => Line::Quit,
        _ => Line::Unknown(name),
    }
}

pub fn run(args: &ChatArgs, config: &ClientConfig) -> Result<()> {
    let client = HttpClient::new(config)?;
    let kind = args.kind.map(Into::into).unwrap_or(config.analysis);
    let mut chat = ChatController::new(kind);
    let mut attachment: Option<ImageAttachment> = None;

    println!("{kind} tutor at {}", client.endpoints().origin());
    println!("{HELP}");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }

        match parse_line(&line) {
            Line::Question("") => {}
            Line::Question(question) => {
                let pb = spinner("Thinking")?;
                let sent = chat.submit(question, attachment.as_ref(), &client);
                pb.finish_and_clear();
                if sent {
                    if let Some(answer) = chat.log().messages().last() {
                        print_message(answer, args.raw);
                    }
                }
            }
            Line::Image(None) => {
                attachment = None;
                println!("Image detached");
            }
            Line::Image(Some(path)) => match ImageAttachment::load(Path::new(path)) {
                Ok(image) => {
                    println!("Attached {} ({})", image.file_name, image.mime);
                    attachment = Some(image);
                }
                Err(e) => println!("Failed to read image {path}: {e}"),
            },
            Line::FollowUp(question) => {
                let pb = spinner("Thinking")?;
                let result = chat.follow_up(question, &client);
                pb.finish_and_clear();
                match result {
                    Ok(()) => {
                        if let Some(body) = chat.follow_up_response() {
                            print_follow_up(body, args.raw);
                        }
                    }
                    Err(TutorError::EmptyQuestion) => println!("Usage: /followup <question>"),
                    Err(e) => println!("{e}"),
                }
            }
            Line::Feedback(None) => println!("Usage: /feedback yes|no"),
            Line::Feedback(Some(helpful)) => match chat.send_feedback(helpful, &client) {
                Ok(()) => {
                    if let Some(notice) = chat.take_notice() {
                        println!("{notice}");
                    }
                }
                Err(e) => println!("{e}"),
            },
            Line::Help => println!("{HELP}"),
            Line::Quit => break,
            Line::Unknown(name) => println!("Unknown command /{name}, try /help"),
        }
    }

    tracing::info!(turns = chat.history().len() / 2, "Chat ended");
    Ok(())
}
