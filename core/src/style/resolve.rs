use super::registry::StylePair;

const SEPARATOR: char = ' ';

/// Runtime overrides taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOverrides {
    /// Prefix for both streams.
    pub prefix: Option<String>,
    pub stdout_prefix: Option<String>,
    pub stderr_prefix: Option<String>,
    /// Number of separator characters between prefix/symbol and text.
    pub spacing: Option<usize>,
}

impl StylePair {
    /// Registry lookup followed by [`StylePair::apply`].
    pub fn resolve(mode: &str, overrides: &StyleOverrides) -> Self {
        if !Self::is_known_mode(mode) {
            tracing::debug!(mode = %mode, "unknown style mode, using normal");
        }
        Self::for_mode(mode).apply(overrides)
    }

    /// Per-stream prefixes win over the combined prefix. Without an explicit
    /// spacing a single separator is inserted, unless both prefixes are empty.
    pub fn apply(mut self, overrides: &StyleOverrides) -> Self {
        if let Some(prefix) = &overrides.prefix {
            self.stdout.prefix = prefix.clone();
            self.stderr.prefix = prefix.clone();
        }
        if let Some(prefix) = &overrides.stdout_prefix {
            self.stdout.prefix = prefix.clone();
        }
        if let Some(prefix) = &overrides.stderr_prefix {
            self.stderr.prefix = prefix.clone();
        }

        let spacing = match overrides.spacing {
            Some(width) => SEPARATOR.to_string().repeat(width),
            None if !self.stdout.prefix.is_empty() || !self.stderr.prefix.is_empty() => {
                SEPARATOR.to_string()
            }
            None => String::new(),
        };
        self.stdout.spacing = spacing.clone();
        self.stderr.spacing = spacing;
        self
    }
}
