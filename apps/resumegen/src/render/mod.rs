//! Rendering: turns a validated record into a LaTeX or plain-text document.
//!
//! `Outputter` holds the per-format primitives (escaping, headings, lists,
//! entry blocks). Document structure (which sections, in which order, where
//! the blank lines go) lives once in `Document` and is shared by every format.

pub mod escape;
pub mod latex;
pub mod plaintext;
pub mod urls;
pub mod wrap;

use tracing::debug;

use crate::config::Config;
use crate::models::{
    Identity, Job, LetterRecord, Metadata, Publication, Reference, ReferencesRecord, ResumeRecord,
    School, Section, Skill,
};
use crate::record::Record;

pub use latex::Latex;
pub use plaintext::Plaintext;

use escape::normalize_whitespace;
use urls::Segment;

// ────────────────────────────────────────────────────────────────────────────
// Formatting primitives
// ────────────────────────────────────────────────────────────────────────────

/// Target document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Latex,
    Plaintext,
}

/// Per-format formatting primitives.
///
/// Methods taking `&str` values expect raw input text unless the name says
/// otherwise; each implementation escapes at the point of insertion.
pub trait Outputter {
    /// Escapes a fragment of an already whitespace-normalised value.
    fn escape_fragment(&self, text: &str) -> String;

    /// Formats a URL found in free-form text, or a publication link.
    fn format_url(&self, url: &str) -> String;

    fn format_email(&self, email: &str) -> String;

    fn format_phone(&self, phone: &str) -> String;

    /// `heading` is already formatted. Level 1 is a section, anything else a sub-heading.
    fn format_heading(&self, heading: &str, level: u8) -> String;

    /// `items` are already formatted; each is wrapped to the list width.
    fn format_list(&self, items: &[String]) -> String;

    /// Joins whichever dates are present; `None` when neither is.
    fn format_date_range(&self, start: Option<&str>, end: Option<&str>) -> Option<String>;

    fn format_summary(&self, summary: &str) -> String;

    /// Text that opens the document. Empty when the format has none.
    fn preamble(&self, metadata: &Metadata) -> String;

    /// Text that closes the document, if any.
    fn postamble(&self) -> Option<String>;

    fn header(&self, identity: &Identity) -> String;

    fn job(&self, job: &Job) -> String;

    fn school(&self, school: &School) -> String;

    fn reference(&self, reference: &Reference) -> String;

    /// Escapes a whole input value.
    fn escape(&self, text: &str) -> String {
        self.escape_fragment(&normalize_whitespace(text))
    }

    /// Escapes free-form text, formatting any URLs it contains.
    fn format_text(&self, text: &str) -> String {
        let text = normalize_whitespace(text);
        urls::segments(&text)
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(t) => self.escape_fragment(t),
                Segment::Url(u) => self.format_url(u),
            })
            .collect()
    }

    fn skill(&self, skill: &Skill) -> String {
        let mut parts = Vec::new();
        if let Some(name) = &skill.name {
            parts.push(self.format_heading(&self.escape(name), 2));
        }
        if !skill.notes.is_empty() {
            let notes: Vec<String> = skill.notes.iter().map(|n| self.format_text(n)).collect();
            parts.push(self.format_list(&notes));
        }
        parts.join("\n")
    }

    fn publication(&self, publication: &Publication) -> Option<String> {
        match (&publication.title, &publication.url) {
            (Some(title), Some(url)) => Some(format!(
                "{} ({})",
                self.escape(title),
                self.format_url(url.trim())
            )),
            (Some(title), None) => Some(self.escape(title)),
            (None, Some(url)) => Some(self.format_url(url.trim())),
            (None, None) => None,
        }
    }
}

/// Splits a ten-digit phone number into area code, exchange and line number.
///
/// Spaces, dashes, dots and parentheses are ignored. Any other character, or a
/// digit count other than ten, means the value is displayed as given.
pub(crate) fn split_phone(phone: &str) -> Option<(String, String, String)> {
    let mut digits = String::with_capacity(10);
    for c in phone.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return None,
        }
    }
    if digits.len() != 10 {
        return None;
    }
    Some((
        digits[0..3].to_string(),
        digits[3..6].to_string(),
        digits[6..].to_string(),
    ))
}

/// Builds the outputter for `format`.
pub fn outputter(format: Format, config: &Config) -> Box<dyn Outputter> {
    match format {
        Format::Latex => Box::new(Latex::new(config)),
        Format::Plaintext => Box::new(Plaintext::new(config)),
    }
}

/// Renders `record` into a complete document held in memory.
pub fn render(record: &Record, format: Format, config: &Config) -> String {
    let out = outputter(format, config);
    let mut doc = Document::new(out.as_ref());
    match record {
        Record::Resume(r) => doc.resume(r),
        Record::References(r) => doc.references(r),
        Record::Letter(r) => doc.letter(r),
    }
    let text = doc.finish();
    debug!("Rendered {:?} document ({} bytes)", format, text.len());
    text
}

// ────────────────────────────────────────────────────────────────────────────
// Document assembly
// ────────────────────────────────────────────────────────────────────────────

/// Line-oriented document builder shared by every format.
pub struct Document<'a> {
    out: &'a dyn Outputter,
    buf: String,
}

impl<'a> Document<'a> {
    pub fn new(out: &'a dyn Outputter) -> Self {
        Document {
            out,
            buf: String::new(),
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }

    /// Appends `text` followed by a newline.
    fn print(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn open(&mut self, metadata: &Metadata, identity: &Identity) {
        let preamble = self.out.preamble(metadata);
        if !preamble.is_empty() {
            self.print(&preamble);
        }
        let header = self.out.header(identity);
        self.print(&header);
        self.blank();
    }

    fn close(&mut self) {
        if let Some(postamble) = self.out.postamble() {
            self.print(&postamble);
        }
    }

    /// Heading, then one block per entry with a blank line after each.
    /// Entries that render to nothing are skipped, and so is a heading with no entries.
    fn entries<T>(&mut self, heading: &str, items: &[T], block: impl Fn(&T) -> String) {
        let blocks: Vec<String> = items
            .iter()
            .map(block)
            .filter(|text| !text.is_empty())
            .collect();
        if blocks.is_empty() {
            return;
        }

        let heading = self.out.format_heading(heading, 1);
        self.print(&heading);
        for text in &blocks {
            self.print(text);
            self.blank();
        }
    }

    pub fn resume(&mut self, resume: &ResumeRecord) {
        self.open(&resume.metadata, &resume.identity);
        for section in &resume.sections {
            self.section(section);
        }
        self.close();
    }

    fn section(&mut self, section: &Section) {
        let out = self.out;
        match section {
            Section::Summary(summary) => {
                self.print(&out.format_heading(section.heading(), 1));
                self.print(&out.format_summary(summary));
                self.blank();
            }
            Section::Education(schools) => {
                self.entries(section.heading(), schools, |s| out.school(s))
            }
            Section::Experience(jobs) => self.entries(section.heading(), jobs, |j| out.job(j)),
            Section::Skills(skills) => self.entries(section.heading(), skills, |s| out.skill(s)),
            Section::Publications(publications) => {
                let items: Vec<String> = publications
                    .iter()
                    .filter_map(|p| out.publication(p))
                    .collect();
                if !items.is_empty() {
                    self.print(&out.format_heading(section.heading(), 1));
                    self.print(&out.format_list(&items));
                    self.blank();
                }
            }
        }
    }

    pub fn references(&mut self, references: &ReferencesRecord) {
        let out = self.out;
        self.open(&references.metadata, &references.identity);
        self.entries("References", &references.references, |r| out.reference(r));
        self.close();
    }

    /// Letterhead only: preamble, header, postamble.
    pub fn letter(&mut self, letter: &LetterRecord) {
        self.open(&letter.metadata, &letter.identity);
        self.close();
    }
}
