use crate::runner::LineStream;

pub const DEFAULT_MODE: &str = "normal";

const RESET: &str = "\x1b[0m";

struct VariantSpec {
    prefix: &'static str,
    leading: &'static str,
    trailing: &'static str,
    symbol: &'static str,
}

const fn plain(prefix: &'static str) -> VariantSpec {
    VariantSpec {
        prefix,
        leading: "",
        trailing: "",
        symbol: "",
    }
}

const fn wrapped(prefix: &'static str, leading: &'static str, symbol: &'static str) -> VariantSpec {
    VariantSpec {
        prefix,
        leading,
        trailing: RESET,
        symbol,
    }
}

// (mode, stdout, stderr)
const REGISTRY: &[(&str, VariantSpec, VariantSpec)] = &[
    ("normal", plain("[stdout]"), plain("[stderr]")),
    (
        "dim",
        wrapped("[stdout]", "\x1b[2m", ""),
        wrapped("[stderr]", "\x1b[2m", ""),
    ),
    (
        "color",
        wrapped("", "\x1b[32m", ""),
        wrapped("", "\x1b[31m", ""),
    ),
    (
        "dimu",
        wrapped("", "\x1b[2m", "✅"),
        wrapped("", "\x1b[2m", "❌"),
    ),
    (
        "dimred",
        wrapped("", "\x1b[2m", ""),
        wrapped("", "\x1b[2;31m", ""),
    ),
];

/// Decoration applied to every line of one stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleVariant {
    pub prefix: String,
    pub leading: String,
    pub trailing: String,
    pub symbol: String,
    pub spacing: String,
}

impl StyleVariant {
    fn from_spec(spec: &VariantSpec) -> Self {
        Self {
            prefix: spec.prefix.to_string(),
            leading: spec.leading.to_string(),
            trailing: spec.trailing.to_string(),
            symbol: spec.symbol.to_string(),
            spacing: String::new(),
        }
    }

    /// Render one line, terminator included, so it can be written in one go.
    pub fn render(&self, text: &str) -> String {
        let mut out = String::with_capacity(
            self.prefix.len()
                + self.symbol.len()
                + self.spacing.len()
                + self.leading.len()
                + text.len()
                + self.trailing.len()
                + 1,
        );
        out.push_str(&self.prefix);
        out.push_str(&self.symbol);
        out.push_str(&self.spacing);
        out.push_str(&self.leading);
        out.push_str(text);
        out.push_str(&self.trailing);
        out.push('\n');
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePair {
    pub stdout: StyleVariant,
    pub stderr: StyleVariant,
}

impl StylePair {
    /// Look up a registry entry. Unknown names fall back to [`DEFAULT_MODE`].
    pub fn for_mode(mode: &str) -> Self {
        let entry = REGISTRY
            .iter()
            .find(|(name, _, _)| *name == mode)
            .or_else(|| REGISTRY.iter().find(|(name, _, _)| *name == DEFAULT_MODE));

        match entry {
            Some((_, out, err)) => Self {
                stdout: StyleVariant::from_spec(out),
                stderr: StyleVariant::from_spec(err),
            },
            None => Self::default(),
        }
    }

    pub fn is_known_mode(mode: &str) -> bool {
        REGISTRY.iter().any(|(name, _, _)| *name == mode)
    }

    pub fn variant(&self, stream: LineStream) -> &StyleVariant {
        match stream {
            LineStream::Stdout => &self.stdout,
            LineStream::Stderr => &self.stderr,
        }
    }
}

/// All registered modes, `normal` first and the rest alphabetically.
pub fn mode_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.iter().map(|(name, _, _)| *name).collect();
    names.sort_by(|a, b| {
        (*a != DEFAULT_MODE)
            .cmp(&(*b != DEFAULT_MODE))
            .then_with(|| a.cmp(b))
    });
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_mode_falls_back_to_normal() {
        assert_eq!(StylePair::for_mode("sparkles"), StylePair::for_mode("normal"));
        assert_eq!(StylePair::for_mode(""), StylePair::for_mode("normal"));
        assert!(!StylePair::is_known_mode("sparkles"));
    }

    #[test]
    fn normal_mode_has_bracket_prefixes() {
        let pair = StylePair::for_mode("normal");
        assert_eq!(pair.stdout.prefix, "[stdout]");
        assert_eq!(pair.stderr.prefix, "[stderr]");
        assert_eq!(pair.stdout.leading, "");
        assert_eq!(pair.stdout.spacing, "");
    }

    #[test]
    fn color_mode_wraps_in_escape_codes() {
        let pair = StylePair::for_mode("color");
        assert_eq!(pair.stdout.render("ok"), "\x1b[32mok\x1b[0m\n");
        assert_eq!(pair.stderr.render("bad"), "\x1b[31mbad\x1b[0m\n");
    }

    #[test]
    fn dimu_mode_puts_symbol_after_prefix() {
        let mut pair = StylePair::for_mode("dimu");
        pair.stdout.prefix = "P".to_string();
        pair.stdout.spacing = " ".to_string();
        assert_eq!(pair.stdout.render("x"), "P✅ \x1b[2mx\x1b[0m\n");
    }

    #[test]
    fn variant_selects_by_stream() {
        let pair = StylePair::for_mode("dimred");
        assert_eq!(pair.variant(LineStream::Stderr).leading, "\x1b[2;31m");
        assert_eq!(pair.variant(LineStream::Stdout).leading, "\x1b[2m");
    }

    #[test]
    fn mode_names_put_normal_first() {
        assert_eq!(mode_names(), vec!["normal", "color", "dim", "dimred", "dimu"]);
    }
}
