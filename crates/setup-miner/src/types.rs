use std::fmt;

/// A header-delimited slice of a README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Header text without the leading `#` markers
    pub header: String,
    /// Trimmed body lines in document order (blank lines included)
    pub body_lines: Vec<String>,
}

impl Section {
    pub fn new(header: impl Into<String>, body_lines: Vec<String>) -> Self {
        Self {
            header: header.into(),
            body_lines,
        }
    }
}

/// A single human-readable follow-up action, always rendered as a list line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetupStep(String);

impl SetupStep {
    /// `- <text>`
    pub fn item(text: &str) -> Self {
        Self(format!("- {text}"))
    }

    /// ``- Run `<command>` ``
    pub fn run(command: &str) -> Self {
        Self(format!("- Run `{command}`"))
    }

    /// Wrap an already formatted line verbatim.
    pub fn from_line(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
