/// One run of text inside a rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    /// A substituted parameter (email, role, permission, setting key).
    Highlight(String),
}

/// Plain text interleaved with highlighted spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    pub segments: Vec<Segment>,
}

impl RichText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Plain(text.into())],
        }
    }

    /// Append plain text, merging with a trailing plain run. Empty text is dropped.
    pub fn push_plain(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Plain(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Plain(text.to_string()));
        }
    }

    pub fn push_highlight(&mut self, text: impl Into<String>) {
        self.segments.push(Segment::Highlight(text.into()));
    }

    /// Text with highlighting dropped.
    pub fn to_plain(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Plain(t) | Segment::Highlight(t) => t.as_str(),
            })
            .collect()
    }

    /// Highlighted values in order of appearance.
    #[cfg(test)]
    pub fn highlights(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Highlight(t) => Some(t.as_str()),
                Segment::Plain(_) => None,
            })
            .collect()
    }
}
