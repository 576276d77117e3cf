//! LaTeX outputter.
//!
//! Page styles and the `\entry` / `\reference` macros live in the external
//! preamble file pulled in with `\input`, so the generated document only
//! carries content. Every input value passes through `escape_latex` (or is a
//! URL that `is_latex_safe_url` accepted) before insertion.

use crate::config::Config;
use crate::models::{Identity, Job, Metadata, Reference, School};

use super::escape::{escape_latex_chars, is_latex_safe_url, normalize_whitespace};
use super::wrap::fill;
use super::{split_phone, Outputter};

pub struct Latex {
    list_width: usize,
    summary_width: usize,
    preamble_input: String,
    phone_prefix: String,
}

impl Latex {
    pub fn new(config: &Config) -> Self {
        Latex {
            list_width: config.list_width,
            summary_width: config.summary_width,
            preamble_input: config.latex_preamble.clone(),
            phone_prefix: config.phone_prefix.clone(),
        }
    }

    /// `\name{a}` followed by one `{arg}` line per remaining argument, then
    /// `items` as an itemize list. Absent arguments stay as empty groups so
    /// the macro arity is fixed; an entry with no arguments and no items
    /// renders nothing.
    fn entry_macro(&self, name: &str, args: [Option<String>; 4], items: &[String]) -> String {
        if args.iter().all(Option::is_none) && items.is_empty() {
            return String::new();
        }

        let args: Vec<String> = args
            .iter()
            .map(|arg| format!("{{{}}}", arg.as_deref().unwrap_or("")))
            .collect();
        let entry = format!("\\{name}{}", args.join("\n"));
        if items.is_empty() {
            return entry;
        }
        let items: Vec<String> = items.iter().map(|i| self.format_text(i)).collect();
        format!("{entry}\n{}", self.format_list(&items))
    }
}

impl Outputter for Latex {
    fn escape_fragment(&self, text: &str) -> String {
        escape_latex_chars(text)
    }

    fn format_url(&self, url: &str) -> String {
        if is_latex_safe_url(url) {
            format!(r"\url{{{url}}}")
        } else {
            self.escape(url)
        }
    }

    fn format_email(&self, email: &str) -> String {
        let email = normalize_whitespace(email);
        if is_latex_safe_url(&email) {
            format!(
                r"\href{{mailto:{email}}}{{{}}}",
                escape_latex_chars(&email)
            )
        } else {
            self.escape(&email)
        }
    }

    fn format_phone(&self, phone: &str) -> String {
        match split_phone(phone) {
            Some((area, exchange, line)) if is_latex_safe_url(&self.phone_prefix) => format!(
                r"\href{{tel:{}{area}{exchange}{line}}}{{({area}) {exchange}--{line}}}",
                self.phone_prefix
            ),
            Some((area, exchange, line)) => format!("({area}) {exchange}--{line}"),
            None => self.escape(phone),
        }
    }

    fn format_heading(&self, heading: &str, level: u8) -> String {
        if level == 1 {
            format!(r"\section*{{{heading}}}")
        } else {
            format!(r"\textbf{{{heading}}}")
        }
    }

    fn format_list(&self, items: &[String]) -> String {
        if items.is_empty() {
            return String::new();
        }
        let lines: Vec<String> = items
            .iter()
            .map(|item| fill(&format!(r"\item{{}} {item}"), self.list_width, "  "))
            .collect();
        format!("\\begin{{itemize}}\n{}\n\\end{{itemize}}", lines.join("\n"))
    }

    fn format_date_range(&self, start: Option<&str>, end: Option<&str>) -> Option<String> {
        match (start, end) {
            (Some(s), Some(e)) => {
                let (s, e) = (self.escape(s), self.escape(e));
                // Dashes at the join would run into the `--` separator.
                let s = s.trim_end_matches('-').trim_end();
                let e = e.trim_start_matches('-').trim_start();
                match (s.is_empty(), e.is_empty()) {
                    (false, false) => Some(format!("{s}--{e}")),
                    (false, true) => Some(s.to_string()),
                    (true, false) => Some(e.to_string()),
                    (true, true) => None,
                }
            }
            (Some(d), None) | (None, Some(d)) => Some(self.escape(d)),
            (None, None) => None,
        }
    }

    fn format_summary(&self, summary: &str) -> String {
        fill(&self.format_text(summary), self.summary_width, "")
    }

    fn preamble(&self, metadata: &Metadata) -> String {
        let mut out = format!(
            "\\documentclass[10pt]{{article}}\n\\input{{{}}}",
            self.preamble_input
        );

        let mut tags: Vec<String> = Vec::new();
        if let Some(author) = &metadata.author {
            tags.push(format!("pdfauthor={{{}}}", self.escape(author)));
        }
        if let Some(title) = &metadata.title {
            tags.push(format!("pdftitle={{{}}}", self.escape(title)));
        }
        if let Some(subject) = &metadata.subject {
            tags.push(format!("pdfsubject={{{}}}", self.escape(subject)));
        }
        if !metadata.keywords.is_empty() {
            let keywords: Vec<String> = metadata.keywords.iter().map(|k| self.escape(k)).collect();
            tags.push(format!("pdfkeywords={{{}}}", keywords.join(", ")));
        }
        if !tags.is_empty() {
            out.push_str(&format!("\n\\hypersetup{{\n  {}\n}}", tags.join(",\n  ")));
        }

        out.push_str("\n\\begin{document}");
        out
    }

    fn postamble(&self) -> Option<String> {
        Some(r"\end{document}".to_string())
    }

    fn header(&self, identity: &Identity) -> String {
        let mut lines = vec![format!(r"{{\Large\bfseries {}}}", self.escape(&identity.name))];
        if let Some(address) = &identity.address {
            lines.push(self.escape(address));
        }
        if let Some(phone) = &identity.phone {
            lines.push(self.format_phone(phone));
        }
        if let Some(email) = &identity.email {
            lines.push(self.format_email(email));
        }
        format!(
            "\\begin{{center}}\n  {}\n\\end{{center}}",
            lines.join(" \\\\\n  ")
        )
    }

    fn job(&self, job: &Job) -> String {
        self.entry_macro(
            "entry",
            [
                job.title.as_deref().map(|t| self.escape(t)),
                self.format_date_range(job.start.as_deref(), job.end.as_deref()),
                job.organization.as_deref().map(|o| self.escape(o)),
                job.location.as_deref().map(|l| self.escape(l)),
            ],
            &job.experiences,
        )
    }

    fn school(&self, school: &School) -> String {
        self.entry_macro(
            "entry",
            [
                school.name.as_deref().map(|n| self.escape(n)),
                school.graduated.as_deref().map(|g| self.escape(g)),
                school.degree.as_deref().map(|d| self.escape(d)),
                school
                    .gpa
                    .as_deref()
                    .map(|g| format!("Overall G.P.A.: {}", self.escape(g))),
            ],
            &school.awards,
        )
    }

    fn reference(&self, reference: &Reference) -> String {
        self.entry_macro(
            "reference",
            [
                reference.name.as_deref().map(|n| self.escape(n)),
                reference.relationship.as_deref().map(|r| self.escape(r)),
                reference.email.as_deref().map(|e| self.format_email(e)),
                reference.phone.as_deref().map(|p| self.format_phone(p)),
            ],
            &[],
        )
    }
}
