//! Plain-text outputter. Values are inserted verbatim after whitespace normalisation.

use crate::config::Config;
use crate::models::{Identity, Job, Metadata, Reference, School};

use super::escape::normalize_whitespace;
use super::wrap::fill;
use super::{split_phone, Outputter};

pub struct Plaintext {
    list_width: usize,
    summary_width: usize,
}

impl Plaintext {
    pub fn new(config: &Config) -> Self {
        Plaintext {
            list_width: config.list_width,
            summary_width: config.summary_width,
        }
    }
}

/// Pushes `Label: value` when the value is present.
fn labelled(lines: &mut Vec<String>, label: &str, value: Option<String>) {
    if let Some(value) = value {
        lines.push(format!("{label}: {value}"));
    }
}

impl Outputter for Plaintext {
    fn escape_fragment(&self, text: &str) -> String {
        text.to_string()
    }

    fn format_url(&self, url: &str) -> String {
        url.to_string()
    }

    fn format_email(&self, email: &str) -> String {
        normalize_whitespace(email)
    }

    fn format_phone(&self, phone: &str) -> String {
        match split_phone(phone) {
            Some((area, exchange, line)) => format!("({area}){exchange}-{line}"),
            None => normalize_whitespace(phone),
        }
    }

    fn format_heading(&self, heading: &str, level: u8) -> String {
        let underline = if level == 1 { "=" } else { "-" };
        format!(
            "{heading}\n{}",
            underline.repeat(heading.chars().count())
        )
    }

    fn format_list(&self, items: &[String]) -> String {
        items
            .iter()
            .map(|item| fill(&format!("* {item}"), self.list_width, "  "))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_date_range(&self, start: Option<&str>, end: Option<&str>) -> Option<String> {
        match (start, end) {
            (Some(s), Some(e)) => Some(format!("{} - {}", self.escape(s), self.escape(e))),
            (Some(d), None) | (None, Some(d)) => Some(self.escape(d)),
            (None, None) => None,
        }
    }

    fn format_summary(&self, summary: &str) -> String {
        fill(&self.format_text(summary), self.summary_width, "")
    }

    fn preamble(&self, _metadata: &Metadata) -> String {
        String::new()
    }

    fn postamble(&self) -> Option<String> {
        None
    }

    fn header(&self, identity: &Identity) -> String {
        let mut lines = vec![self.escape(&identity.name)];
        labelled(&mut lines, "Address", identity.address.as_deref().map(|a| self.escape(a)));
        labelled(&mut lines, "Phone", identity.phone.as_deref().map(|p| self.format_phone(p)));
        labelled(&mut lines, "Email", identity.email.as_deref().map(|e| self.format_email(e)));
        lines.join("\n")
    }

    fn job(&self, job: &Job) -> String {
        let title = job.title.as_deref().map(|t| self.escape(t));
        let dates = self.format_date_range(job.start.as_deref(), job.end.as_deref());
        let heading = match (title, dates) {
            (Some(t), Some(d)) => Some(format!("{t} ({d})")),
            (Some(h), None) | (None, Some(h)) => Some(h),
            (None, None) => None,
        };

        let mut lines = Vec::new();
        if let Some(heading) = heading {
            lines.push(self.format_heading(&heading, 2));
        }
        labelled(&mut lines, "Organization", job.organization.as_deref().map(|o| self.escape(o)));
        labelled(&mut lines, "Location", job.location.as_deref().map(|l| self.escape(l)));
        if !job.experiences.is_empty() {
            let items: Vec<String> = job.experiences.iter().map(|e| self.format_text(e)).collect();
            lines.push(self.format_list(&items));
        }
        lines.join("\n")
    }

    fn school(&self, school: &School) -> String {
        let mut lines = Vec::new();
        if let Some(name) = &school.name {
            lines.push(self.format_heading(&self.escape(name), 2));
        }
        labelled(&mut lines, "Graduated", school.graduated.as_deref().map(|g| self.escape(g)));
        labelled(&mut lines, "Degree", school.degree.as_deref().map(|d| self.escape(d)));
        labelled(&mut lines, "Overall G.P.A.", school.gpa.as_deref().map(|g| self.escape(g)));
        if !school.awards.is_empty() {
            let items: Vec<String> = school.awards.iter().map(|a| self.format_text(a)).collect();
            lines.push("Awards and designations:".to_string());
            lines.push(self.format_list(&items));
        }
        lines.join("\n")
    }

    fn reference(&self, reference: &Reference) -> String {
        let mut lines = Vec::new();
        if let Some(name) = &reference.name {
            lines.push(self.format_heading(&self.escape(name), 2));
        }
        labelled(&mut lines, "Relationship", reference.relationship.as_deref().map(|r| self.escape(r)));
        labelled(&mut lines, "Email", reference.email.as_deref().map(|e| self.format_email(e)));
        labelled(&mut lines, "Phone", reference.phone.as_deref().map(|p| self.format_phone(p)));
        lines.join("\n")
    }
}
