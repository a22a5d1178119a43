// File: ./src/model/display.rs
use crate::model::item::{AnnotationKind, ParsedTask};
use unicode_width::UnicodeWidthChar;

impl AnnotationKind {
    /// Character drawn under a span of this kind in [`TaskDisplay::highlight_line`].
    pub fn marker(self) -> char {
        match self {
            AnnotationKind::Date => 'D',
            AnnotationKind::Time => 'T',
            AnnotationKind::Priority => 'P',
            AnnotationKind::Tag => '#',
            AnnotationKind::Project => '@',
            AnnotationKind::Recurrence => 'R',
        }
    }
}

pub trait TaskDisplay {
    /// Every field, one per line, followed by the annotation list.
    fn to_plain_text(&self) -> String;
    /// A line to print under the input, marking each recognized span.
    fn highlight_line(&self) -> String;
    /// Compact one-line form, e.g. `Pay rent !2 ^2026-10-20 ↻ every day`.
    fn to_smart_string(&self) -> String;
}

const EMPTY: &str = "-";

fn or_empty(value: Option<String>) -> String {
    value.unwrap_or_else(|| EMPTY.to_string())
}

impl TaskDisplay for ParsedTask {
    fn to_plain_text(&self) -> String {
        let mut lines = Vec::new();
        let mut field = |name: &str, value: String| lines.push(format!("{:<12}{}", name, value));

        field("Input:", self.original_input.clone());
        let highlight = self.highlight_line();
        if !highlight.is_empty() {
            field("", highlight);
        }
        field("Title:", self.title.clone());
        field(
            "Scheduled:",
            or_empty(self.scheduled_at().map(|d| d.format_smart())),
        );
        field(
            "Deadline:",
            or_empty(self.deadline_at().map(|d| d.format_smart())),
        );
        field(
            "Time:",
            or_empty(self.time.map(|t| match self.time_anchor {
                Some(anchor) => format!("{} ({})", t.format("%H:%M"), anchor),
                None => t.format("%H:%M").to_string(),
            })),
        );
        field(
            "Priority:",
            or_empty(self.priority.map(|p| format!("{} ({})", p, p.level()))),
        );
        field("Project:", or_empty(self.project.clone()));
        field(
            "Labels:",
            if self.labels.is_empty() {
                EMPTY.to_string()
            } else {
                self.labels.join(", ")
            },
        );
        field(
            "Recurrence:",
            or_empty(
                self.recurring
                    .as_ref()
                    .map(|r| format!("{} [{}]", r, r.to_rrule())),
            ),
        );

        lines.push("Annotations:".to_string());
        if self.annotations.is_empty() {
            lines.push(format!("  {}", EMPTY));
        }
        for a in &self.annotations {
            lines.push(format!(
                "  {:<11}{:>3}..{:<4}\"{}\"",
                a.kind.to_string(),
                a.range.start,
                a.range.end,
                a.text
            ));
        }
        lines.join("\n")
    }

    fn highlight_line(&self) -> String {
        let mut line = String::new();
        for (idx, c) in self.original_input.char_indices() {
            let width = c.width().unwrap_or(0);
            let marker = self
                .annotations
                .iter()
                .find(|a| a.range.contains(&idx))
                .map_or(' ', |a| a.kind.marker());
            // Tabs have no width of their own; keep them so columns line up.
            if c == '\t' {
                line.push('\t');
                continue;
            }
            line.extend(std::iter::repeat_n(marker, width));
        }
        line.trim_end().to_string()
    }

    fn to_smart_string(&self) -> String {
        let mut s = self.title.clone();
        if let Some(p) = self.priority {
            s.push_str(&format!(" !{}", p.level()));
        }
        if let Some(start) = self.scheduled_at() {
            s.push_str(&format!(" ^{}", start.format_smart()));
        }
        if let Some(due) = self.deadline_at() {
            s.push_str(&format!(" due:{}", due.format_smart()));
        }
        if let Some(r) = &self.recurring {
            s.push_str(&format!(" ↻ {}", r));
        }
        s
    }
}
