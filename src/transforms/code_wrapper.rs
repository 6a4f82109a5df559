//! Turns runs of code-font paragraphs into fenced code blocks.
//!
//! Word processors mark code by font rather than structure. Given the
//! paragraphs of a document with the font of their first run, this emits
//! Markdown where each run of code-font paragraphs becomes one fence.

/// Font the note-taking export uses for code.
pub const CODE_STYLE_FONT_NAME: &str = "Consolas";

const NBSP: char = '\u{a0}';

/// One document paragraph: the font of its first run (`None` when it has no
/// runs) and its plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub font: Option<String>,
    pub text: String,
}

impl Paragraph {
    pub fn new(font: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            font: font.map(str::to_string),
            text: text.into(),
        }
    }

    fn has_font(&self, font: &str) -> bool {
        self.font.as_deref() == Some(font)
    }
}

/// Rewrite leading indentation so converters keep it inside code blocks.
///
/// Within the leading run of spaces and non-breaking spaces, every space not
/// preceded by a non-breaking space becomes a non-breaking space followed by
/// a space. The rest of the line is copied as-is.
pub fn replace_leading_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut prev = text.chars().next();
    let mut leading = true;

    for c in text.chars() {
        if c != ' ' && c != NBSP {
            leading = false;
        }

        if leading && c == ' ' && prev != Some(NBSP) {
            out.push(NBSP);
            out.push(' ');
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

#[derive(Default)]
struct Wrapper {
    lines: Vec<String>,
    in_code_block: bool,
    pending_blank: usize,
}

impl Wrapper {
    fn open(&mut self) {
        self.lines.push("```".to_string());
        self.in_code_block = true;
    }

    fn push_code(&mut self, text: &str) {
        let line = replace_leading_spaces(text.trim_end());
        if line.is_empty() {
            self.pending_blank += 1;
            return;
        }
        self.flush_blank();
        self.lines.push(line);
    }

    fn close(&mut self) {
        self.lines.push("```".to_string());
        self.flush_blank();
        self.in_code_block = false;
    }

    fn flush_blank(&mut self) {
        for _ in 0..self.pending_blank {
            self.lines.push(String::new());
        }
        self.pending_blank = 0;
    }
}

/// Render `paragraphs` as Markdown, fencing each run in `code_font`.
///
/// A run opens on a non-blank code-font paragraph and closes at the next
/// paragraph in another font, or at the end. Blank lines that end a run are
/// moved after its closing fence. Paragraphs without a font are emitted as
/// empty lines outside a run and dropped inside one.
pub fn wrap_code_paragraphs(paragraphs: &[Paragraph], code_font: &str) -> String {
    let mut wrapper = Wrapper::default();

    for paragraph in paragraphs {
        if paragraph.font.is_none() {
            if !wrapper.in_code_block {
                wrapper.lines.push(String::new());
            }
            continue;
        }

        let is_code = paragraph.has_font(code_font);
        if is_code && !wrapper.in_code_block && !paragraph.text.trim().is_empty() {
            wrapper.open();
        }

        if wrapper.in_code_block {
            if is_code {
                wrapper.push_code(&paragraph.text);
                continue;
            }
            wrapper.close();
        }
        wrapper.lines.push(paragraph.text.clone());
    }

    if wrapper.in_code_block {
        wrapper.close();
    }

    log::debug!("[notefix-wrap] Rendered {} paragraphs", paragraphs.len());
    wrapper.lines.join("\n")
}
