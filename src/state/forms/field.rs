//! Form field descriptors

/// How a field is edited and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Masked free text
    Secret,
    /// `YYYY-MM-DD`; Up/Down step the date by a day
    Date,
    /// One of a fixed set of values, cycled with Left/Right
    Choice(&'static [&'static str]),
}

/// A single form field's name, label and editing kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name used by the validation rules and the error map
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    pub const fn secret(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Secret,
        }
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Date,
        }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice(options),
        }
    }

    /// Whether typing `c` into this field is allowed
    pub fn accepts_char(&self, c: char) -> bool {
        match self.kind {
            FieldKind::Text | FieldKind::Secret => !c.is_control(),
            FieldKind::Date => c.is_ascii_digit() || c == '-',
            FieldKind::Choice(_) => false,
        }
    }

    /// Whether characters can be removed with backspace
    pub fn is_editable_text(&self) -> bool {
        !matches!(self.kind, FieldKind::Choice(_))
    }

    /// Next (or previous) option after `current`, wrapping around.
    ///
    /// Returns `None` for non-choice fields. An unknown current value
    /// starts from the first option.
    pub fn cycle(&self, current: &str, forward: bool) -> Option<&'static str> {
        let FieldKind::Choice(options) = self.kind else {
            return None;
        };
        if options.is_empty() {
            return None;
        }
        let next = match options.iter().position(|o| *o == current) {
            Some(idx) if forward => (idx + 1) % options.len(),
            Some(idx) if idx == 0 => options.len() - 1,
            Some(idx) => idx - 1,
            None => 0,
        };
        Some(options[next])
    }

    /// Value as shown on screen
    pub fn display_value(&self, raw: &str) -> String {
        match self.kind {
            FieldKind::Secret => "•".repeat(raw.chars().count()),
            FieldKind::Choice(_) => format!("◂ {raw} ▸"),
            FieldKind::Text | FieldKind::Date => raw.to_string(),
        }
    }
}
