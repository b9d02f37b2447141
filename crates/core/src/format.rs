//! Presentation styles for rendered directive output.

const FENCE: &str = "```";
const QUOTE_MARKER: &str = "> ";

/// How the lines produced by a command are presented in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fenced code block.
    #[default]
    Code,
    /// Every line prefixed with a quote marker.
    Blockquote,
}

impl OutputFormat {
    /// Maps the `fmt` argument to a format.
    ///
    /// Only the exact value `"blockquote"` selects [`OutputFormat::Blockquote`];
    /// anything else, including an absent argument, selects [`OutputFormat::Code`].
    #[must_use]
    pub fn from_arg(value: Option<&str>) -> Self {
        match value {
            Some("blockquote") => Self::Blockquote,
            _ => Self::Code,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Blockquote => "blockquote",
        }
    }

    /// Wraps `lines` in this format.
    ///
    /// `language` tags the opening fence of a code block and is ignored for
    /// blockquotes. Line content is never inspected or escaped.
    #[must_use]
    pub fn wrap(self, lines: Vec<String>, language: Option<&str>) -> Vec<String> {
        match self {
            Self::Code => {
                let mut wrapped = Vec::with_capacity(lines.len() + 2);
                wrapped.push(format!("{FENCE}{}", language.unwrap_or_default()));
                wrapped.extend(lines);
                wrapped.push(FENCE.to_string());
                wrapped
            }
            Self::Blockquote => lines
                .into_iter()
                .map(|line| format!("{QUOTE_MARKER}{line}"))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_from_arg() {
        assert_eq!(OutputFormat::from_arg(Some("blockquote")), OutputFormat::Blockquote);
        assert_eq!(OutputFormat::from_arg(Some("code")), OutputFormat::Code);
        assert_eq!(OutputFormat::from_arg(Some("Blockquote")), OutputFormat::Code);
        assert_eq!(OutputFormat::from_arg(Some("")), OutputFormat::Code);
        assert_eq!(OutputFormat::from_arg(None), OutputFormat::Code);
    }

    #[test]
    fn test_wrap_code_with_language() {
        let wrapped = OutputFormat::Code.wrap(lines(&["fn main() {}", ""]), Some("rs"));
        assert_eq!(wrapped, lines(&["```rs", "fn main() {}", "", "```"]));
    }

    #[test]
    fn test_wrap_code_without_language() {
        let wrapped = OutputFormat::Code.wrap(lines(&["hello", ""]), None);
        assert_eq!(wrapped, lines(&["```", "hello", "", "```"]));
    }

    #[test]
    fn test_wrap_blockquote_prefixes_every_line() {
        let wrapped = OutputFormat::Blockquote.wrap(lines(&["a", "b", ""]), Some("txt"));
        assert_eq!(wrapped, lines(&["> a", "> b", "> "]));
    }

    #[test]
    fn test_wrap_does_not_escape_fences() {
        let wrapped = OutputFormat::Code.wrap(lines(&["```"]), None);
        assert_eq!(wrapped, lines(&["```", "```", "```"]));
    }
}
