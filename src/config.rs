//! Reader configuration
//!
//! Controls how textual stored values are coerced under boolean and
//! date-family column tags. The same configuration drives the generic value
//! fetch and every typed getter.

/// Default date/time formats tried after RFC 3339
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y",
];

/// Configuration for a [`DataReader`](crate::DataReader).
///
/// # Examples
///
/// ```rust
/// use engine_reader::ReaderConfig;
///
/// let config = ReaderConfig::new()
///     .with_date_format("%d.%m.%Y")
///     .with_trim_text(false);
/// assert!(config.date_formats.iter().any(|f| f == "%d.%m.%Y"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Formats tried in order when text is read under a date-family tag.
    /// Date-only formats produce midnight.
    pub date_formats: Vec<String>,
    /// Strip surrounding whitespace before parsing boolean/date text
    pub trim_text: bool,
}

impl ReaderConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a date/time format tried after the existing ones
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_formats.push(format.into());
        self
    }

    /// Replace the full list of date/time formats
    pub fn with_date_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether text is trimmed before parsing
    pub fn with_trim_text(mut self, trim: bool) -> Self {
        self.trim_text = trim;
        self
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
            trim_text: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert!(config.trim_text);
        assert_eq!(config.date_formats.len(), DEFAULT_DATE_FORMATS.len());
    }

    #[test]
    fn test_builder() {
        let config = ReaderConfig::new()
            .with_date_formats(["%d.%m.%Y"])
            .with_date_format("%Y%m%d")
            .with_trim_text(false);
        assert_eq!(config.date_formats, vec!["%d.%m.%Y", "%Y%m%d"]);
        assert!(!config.trim_text);
    }
}
