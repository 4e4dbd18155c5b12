//! Safe rendering of server markup.
//!
//! Server answers are HTML. Rather than handing that HTML to anything that
//! would interpret it, it is reduced to a small block model: headings,
//! paragraphs and list items made of styled text spans. Every attribute is
//! discarded and the contents of `script`, `style` and similar elements are
//! dropped, so nothing in a response can execute or load remote content.

use crate::chat::{ContentKind, MessageBody};

/// Elements whose contents are never displayed.
const SKIPPED_TAGS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "head", "template", "noscript", "svg",
];

/// Elements that start and end a paragraph.
const PARAGRAPH_TAGS: &[&str] = &[
    "p", "div", "section", "article", "blockquote", "pre", "table", "tr", "header", "footer",
    "main", "body", "dd", "dt",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Heading(u8),
    Paragraph,
    /// `marker` is `•` for unordered lists or `N.` for ordered ones.
    ListItem { marker: String, depth: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub spans: Vec<Span>,
}

impl Block {
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    fn has_content(&self) -> bool {
        self.spans.iter().any(|s| !s.text.trim().is_empty())
    }
}

/// Render a message body. Plain bodies are split into literal lines.
pub fn render_body(body: &MessageBody) -> Vec<Block> {
    match body.kind {
        ContentKind::Markup => render_markup(&body.text),
        ContentKind::Plain => render_plain(&body.text),
    }
}

pub fn render_plain(text: &str) -> Vec<Block> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Block {
            kind: BlockKind::Paragraph,
            spans: vec![Span {
                text: line.to_string(),
                ..Default::default()
            }],
        })
        .collect()
}

pub fn render_markup(html: &str) -> Vec<Block> {
    let mut renderer = Renderer::default();
    let mut rest = html;

    while !rest.is_empty() {
        if let Some(comment) = rest.strip_prefix("<!--") {
            rest = match comment.find("-->") {
                Some(end) => &comment[end + 3..],
                None => "",
            };
            continue;
        }

        if let Some(after) = rest.strip_prefix('<') {
            // Doctype and processing instructions.
            if after.starts_with(['!', '?']) {
                let Some(end) = after.find('>') else {
                    renderer.text(rest);
                    break;
                };
                rest = &after[end + 1..];
                continue;
            }

            // Only `<x` or `</x` with an ASCII letter opens a tag; any other
            // `<` is text, as in `a < b`.
            let name_start = after.strip_prefix('/').unwrap_or(after);
            if !name_start.starts_with(|c: char| c.is_ascii_alphabetic()) {
                renderer.text("<");
                rest = after;
                continue;
            }

            let Some(end) = after.find('>') else {
                renderer.text(rest);
                break;
            };
            let tag = Tag::parse(&after[..end]);
            rest = &after[end + 1..];
            if !tag.closing && !tag.self_closing && SKIPPED_TAGS.contains(&tag.name.as_str()) {
                rest = skip_element(rest, &tag.name);
            } else {
                renderer.tag(&tag);
            }
            continue;
        }

        let next = rest.find('<').unwrap_or(rest.len());
        renderer.text(&rest[..next]);
        rest = &rest[next..];
    }

    renderer.finish()
}

/// One line per block, for terminal output.
pub fn plain_text(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        let text = block.text();
        let text = text.trim_end();
        match &block.kind {
            BlockKind::Heading(_) => {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(text);
            }
            BlockKind::Paragraph => out.push_str(text),
            BlockKind::ListItem { marker, depth } => {
                out.push_str(&"  ".repeat(*depth));
                out.push_str(marker);
                out.push(' ');
                out.push_str(text);
            }
        }
        out.push('\n');
    }
    out
}

struct Tag {
    name: String,
    closing: bool,
    self_closing: bool,
}

impl Tag {
    /// `inner` is the text between `<` and `>` and starts with the name or
    /// with `/` and the name.
    fn parse(inner: &str) -> Tag {
        let (closing, body) = match inner.strip_prefix('/') {
            Some(b) => (true, b),
            None => (false, inner),
        };
        let name = body
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        Tag {
            name,
            closing,
            self_closing: body.trim_end().ends_with('/'),
        }
    }

    fn heading_level(&self) -> Option<u8> {
        let mut chars = self.name.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some('h'), Some(d @ '1'..='6'), None) => Some(d as u8 - b'0'),
            _ => None,
        }
    }
}

/// Skip to just past `</name ...>`, or to the end if it never closes.
/// The name matches case-insensitively and must be followed by `>`, `/` or
/// whitespace, so `</scripts>` does not close `script`.
fn skip_element<'a>(rest: &'a str, name: &str) -> &'a str {
    let bytes = rest.as_bytes();
    let mut from = 0;
    while let Some(pos) = rest[from..].find("</") {
        let start = from + pos;
        let after = &bytes[start + 2..];
        let matches = after.len() >= name.len()
            && after[..name.len()].eq_ignore_ascii_case(name.as_bytes())
            && after
                .get(name.len())
                .map_or(true, |&b| b == b'>' || b == b'/' || b.is_ascii_whitespace());
        if matches {
            return match rest[start..].find('>') {
                Some(end) => &rest[start + end + 1..],
                None => "",
            };
        }
        from = start + 2;
    }
    ""
}

#[derive(Default)]
struct Renderer {
    blocks: Vec<Block>,
    current: Option<Block>,
    bold: usize,
    italic: usize,
    code: usize,
    /// Open lists; `Some(n)` is an ordered list whose next item is `n`.
    lists: Vec<Option<usize>>,
    pending_space: bool,
}

impl Renderer {
    fn tag(&mut self, tag: &Tag) {
        if let Some(level) = tag.heading_level() {
            if tag.closing {
                self.end_block();
            } else {
                self.start_block(BlockKind::Heading(level));
            }
            return;
        }

        match tag.name.as_str() {
            name if PARAGRAPH_TAGS.contains(&name) => self.end_block(),
            "ul" | "ol" => {
                self.end_block();
                if tag.closing {
                    self.lists.pop();
                } else if tag.name == "ol" {
                    self.lists.push(Some(1));
                } else {
                    self.lists.push(None);
                }
            }
            "li" => {
                if tag.closing {
                    self.end_block();
                    return;
                }
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let m = format!("{n}.");
                        *n += 1;
                        m
                    }
                    _ => "\u{2022}".to_string(),
                };
                let depth = self.lists.len().max(1);
                self.start_block(BlockKind::ListItem { marker, depth });
            }
            "br" => {
                if self.current.is_some() {
                    self.push_str("\n");
                }
                self.pending_space = false;
            }
            "hr" => self.end_block(),
            "strong" | "b" => adjust(&mut self.bold, tag.closing),
            "em" | "i" => adjust(&mut self.italic, tag.closing),
            "code" | "kbd" | "samp" => adjust(&mut self.code, tag.closing),
            _ => {}
        }
    }

    fn text(&mut self, raw: &str) {
        let decoded = decode_entities(raw);
        for c in decoded.chars() {
            if c.is_whitespace() && c != '\u{a0}' {
                self.pending_space = true;
                continue;
            }
            if self.current.is_none() {
                self.start_block(BlockKind::Paragraph);
            }
            if self.pending_space && self.current.as_ref().is_some_and(|b| b.has_content()) {
                self.push_space();
            }
            self.pending_space = false;
            self.push_char(c);
        }
    }

    fn push_str(&mut self, s: &str) {
        for c in s.chars() {
            self.push_char(c);
        }
    }

    fn style(&self) -> (bool, bool, bool) {
        (self.bold > 0, self.italic > 0, self.code > 0)
    }

    /// A collapsed space takes the current style only when it continues the
    /// previous span, so styled runs never start or end with a space.
    fn push_space(&mut self) {
        let style = self.style();
        let continues = self
            .current
            .as_ref()
            .and_then(|b| b.spans.last())
            .is_some_and(|s| (s.bold, s.italic, s.code) == style);
        if continues {
            self.push_styled(' ', style);
        } else {
            self.push_styled(' ', (false, false, false));
        }
    }

    fn push_char(&mut self, c: char) {
        self.push_styled(c, self.style());
    }

    fn push_styled(&mut self, c: char, (bold, italic, code): (bool, bool, bool)) {
        let Some(block) = self.current.as_mut() else {
            return;
        };
        match block.spans.last_mut() {
            Some(span) if span.bold == bold && span.italic == italic && span.code == code => {
                span.text.push(c);
            }
            _ => block.spans.push(Span {
                text: c.to_string(),
                bold,
                italic,
                code,
            }),
        }
    }

    fn start_block(&mut self, kind: BlockKind) {
        self.end_block();
        self.current = Some(Block {
            kind,
            spans: Vec::new(),
        });
    }

    fn end_block(&mut self) {
        if let Some(block) = self.current.take() {
            if block.has_content() {
                self.blocks.push(block);
            }
        }
        self.pending_space = false;
    }

    fn finish(mut self) -> Vec<Block> {
        self.end_block();
        self.blocks
    }
}

fn adjust(depth: &mut usize, closing: bool) {
    if closing {
        *depth = depth.saturating_sub(1);
    } else {
        *depth += 1;
    }
}

/// Decode the common named entities and numeric character references.
/// Unknown entities are left as written.
pub fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| decode_entity(&rest[1..end]).map(|c| (c, end)));
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "mdash" => Some('\u{2014}'),
        "ndash" => Some('\u{2013}'),
        "hellip" => Some('\u{2026}'),
        "times" => Some('\u{d7}'),
        "divide" => Some('\u{f7}'),
        _ => None,
    }
}
