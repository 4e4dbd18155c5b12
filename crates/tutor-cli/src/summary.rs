use console::Style;
use tutor_core::api::{AnalysisKind, Endpoints};
use tutor_core::chat::{ChatMessage, ContentKind, MessageBody, Role};
use tutor_core::config::ClientConfig;
use tutor_core::render::{plain_text, render_body};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    user: Style,
    assistant: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            user: Style::new().green().bold(),
            assistant: Style::new().magenta().bold(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_endpoint_summary(
    config: &ClientConfig,
    endpoints: &Endpoints,
    analyze: &[(AnalysisKind, String)],
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("GRE Tutor Endpoints"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(19)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Hostname"),
        s.value.apply_to(&config.hostname)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Origin"),
        s.path.apply_to(endpoints.origin())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Section"),
        s.value.apply_to(config.analysis)
    );
    if let Some(secs) = config.request_timeout_secs {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Timeout"),
            s.value.apply_to(format!("{secs}s"))
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Analyze"));
    for (kind, url) in analyze {
        println!(
            "    {:<12}{}",
            s.label.apply_to(kind.to_string()),
            s.path.apply_to(url)
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Other"));
    for (label, url) in [
        ("Follow-up", endpoints.follow_up()),
        ("Feedback", endpoints.feedback()),
        ("Server info", endpoints.server_version()),
    ] {
        println!(
            "    {:<12}{}",
            s.label.apply_to(label),
            s.path.apply_to(url)
        );
    }
    println!();
}

/// Print one chat message. Markup is rendered to text unless `raw` is set.
pub fn print_message(message: &ChatMessage, raw: bool) {
    let s = Styles::new();
    let who = match message.role {
        Role::User => s.user.apply_to("You"),
        Role::Assistant => s.assistant.apply_to("Tutor"),
    };
    println!("{who}");
    print_body(&message.body, raw);
    println!();
}

pub fn print_follow_up(body: &MessageBody, raw: bool) {
    let s = Styles::new();
    println!("{}", s.header.apply_to("Follow-up"));
    print_body(body, raw);
    println!();
}

fn print_body(body: &MessageBody, raw: bool) {
    if raw || body.kind == ContentKind::Plain {
        println!("{}", body.text.trim_end());
    } else {
        print!("{}", plain_text(&render_body(body)));
    }
}
