/// Longest value shown without an expand toggle.
pub const PREVIEW_LIMIT: usize = 60;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Shown whenever there is nothing to display for a side of a diff.
pub const NOT_APPLICABLE: &str = "N/A";

/// Keep `max - 3` leading characters plus an ellipsis when `text` is longer
/// than `max`; otherwise return it unchanged. Counts characters, not bytes.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// A formatted value with its own expand/collapse state.
///
/// The full text is always kept, so collapsing never loses data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandableValue {
    full: String,
    expanded: bool,
}

impl ExpandableValue {
    pub fn new(full: impl Into<String>) -> Self {
        Self {
            full: full.into(),
            expanded: false,
        }
    }

    /// Only values longer than the preview limit get a toggle.
    pub fn is_toggleable(&self) -> bool {
        self.full.chars().count() > PREVIEW_LIMIT
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip this cell's state. No-op for short values.
    pub fn toggle(&mut self) {
        if self.is_toggleable() {
            self.expanded = !self.expanded;
        }
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        if self.is_expanded() != expanded {
            self.toggle();
        }
    }

    /// What the cell currently shows.
    pub fn display(&self) -> String {
        if self.expanded {
            self.full.clone()
        } else {
            truncate(&self.full, PREVIEW_LIMIT)
        }
    }

    pub fn full(&self) -> &str {
        &self.full
    }

    /// Characters hidden by the collapsed preview.
    pub fn hidden_chars(&self) -> usize {
        if self.expanded || !self.is_toggleable() {
            return 0;
        }
        self.full.chars().count() - (PREVIEW_LIMIT - ELLIPSIS.len())
    }
}

/// One before/after cell of the activity table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeCell {
    NotApplicable,
    /// A localized label such as a role name.
    Highlight(String),
    Value(ExpandableValue),
}

impl ChangeCell {
    /// Text of the cell in its current state.
    pub fn display(&self) -> String {
        match self {
            ChangeCell::NotApplicable => NOT_APPLICABLE.to_string(),
            ChangeCell::Highlight(label) => label.clone(),
            ChangeCell::Value(value) => value.display(),
        }
    }

    /// Expand or collapse a value cell; other cells are unaffected.
    pub fn set_expanded(&mut self, expanded: bool) {
        if let ChangeCell::Value(value) = self {
            value.set_expanded(expanded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_text_is_unchanged() {
        assert_eq!(truncate("hello", 20), "hello");
        assert_eq!(truncate("exactly twenty chars", 20), "exactly twenty chars");
    }

    #[test]
    fn truncate_long_text_keeps_max_minus_three() {
        let out = truncate("abcdefghijklmnopqrstuvwxyz", 10);
        assert_eq!(out, "abcdefg...");
        assert_eq!(out.chars().count(), 10);
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let arabic = "مرحبا بكم في لوحة التحكم الخاصة بالمسؤول";
        let out = truncate(arabic, 30);
        assert_eq!(out.chars().count(), 30);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn long_value_previews_at_sixty_and_expands_to_full() {
        let full = "x".repeat(100);
        let mut cell = ExpandableValue::new(full.clone());
        assert!(cell.is_toggleable());
        assert_eq!(cell.display().chars().count(), 60);
        assert!(cell.display().ends_with("..."));
        assert_eq!(cell.hidden_chars(), 43);

        cell.toggle();
        assert!(cell.is_expanded());
        assert_eq!(cell.display(), full);

        cell.toggle();
        assert_eq!(cell.display().chars().count(), 60);
    }

    #[test]
    fn short_value_has_no_toggle() {
        let mut cell = ExpandableValue::new("short");
        assert!(!cell.is_toggleable());
        cell.toggle();
        assert!(!cell.is_expanded());
        assert_eq!(cell.display(), "short");
        assert_eq!(cell.hidden_chars(), 0);
    }

    #[test]
    fn toggling_one_cell_leaves_siblings_alone() {
        let mut first = ExpandableValue::new("a".repeat(80));
        let second = first.clone();
        first.toggle();
        assert!(first.is_expanded());
        assert!(!second.is_expanded());
    }

    #[test]
    fn not_applicable_cell_displays_sentinel() {
        assert_eq!(ChangeCell::NotApplicable.display(), "N/A");
    }
}
