use thiserror::Error;

/// Source location information for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors raised by the fallible operations around the converter.
///
/// Conversion itself never fails; these cover loading and querying the post feed.
#[derive(Debug, Error)]
pub enum BlogmdError {
    /// The post feed JSON could not be decoded.
    #[error("Invalid post feed: {0}")]
    Feed(#[from] serde_json::Error),
    /// No post with the requested id exists in the feed.
    #[error("Post not found: {id}")]
    PostNotFound {
        /// Requested post id
        id: String,
    },
}

impl BlogmdError {
    /// Create a not-found error for the given post id
    pub fn post_not_found(id: impl Into<String>) -> Self {
        Self::PostNotFound { id: id.into() }
    }
}

/// Non-fatal warnings that don't prevent rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// Code fence opened but never closed
    UnclosedCodeFence {
        /// Source location where the fence started
        location: SourceLocation,
        /// Surrounding context for the message
        context: String,
    },
    /// Markup that looked intentional but could not be interpreted
    SuspiciousMarkup {
        /// Source location where the markup was found
        location: SourceLocation,
        /// Warning message
        message: String,
    },
}

impl ParseWarning {
    /// Get the location of this warning
    pub fn location(&self) -> &SourceLocation {
        match self {
            ParseWarning::UnclosedCodeFence { location, .. } => location,
            ParseWarning::SuspiciousMarkup { location, .. } => location,
        }
    }
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::UnclosedCodeFence { location, context } => {
                write!(f, "Unclosed code fence: {}, near '{}'", location, context)
            }
            ParseWarning::SuspiciousMarkup { location, message } => {
                write!(f, "{}: {}", location, message)
            }
        }
    }
}

/// Collection of parse diagnostics
#[derive(Debug, Clone, Default)]
pub struct ParseDiagnostics {
    /// List of non-fatal warnings
    pub warnings: Vec<ParseWarning>,
}

impl ParseDiagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning to the diagnostics collection
    pub fn add_warning(&mut self, warning: ParseWarning) {
        self.warnings.push(warning);
    }

    /// Add a suspicious-markup warning with location
    pub fn add_warning_at(&mut self, message: impl Into<String>, line: usize, column: usize) {
        self.warnings.push(ParseWarning::SuspiciousMarkup {
            location: SourceLocation::new(line, column),
            message: message.into(),
        });
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get total count of all diagnostics
    pub fn count(&self) -> usize {
        self.warnings.len()
    }
}
