//! Raw text normalization.

/// Canonical line-oriented form of raw extracted text.
///
/// Two shapes of the same content: `text` keeps line breaks so
/// whole-document regex scans can span wrapped lines, while `lines` holds
/// only the non-empty trimmed lines for line-local heuristics (item rows,
/// the merchant header). Created once per parse call and discarded after
/// extraction completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    /// Joined normalized text with unified line breaks.
    pub text: String,

    /// Non-empty trimmed lines in document order.
    pub lines: Vec<String>,
}

impl NormalizedDocument {
    /// True when the input contained no visible content at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Normalize raw OCR/PDF text into a canonical form.
///
/// Total function: empty or garbage input yields an empty document, never
/// an error. Unifies `\r\n`/`\r` line breaks to `\n`, maps non-breaking
/// spaces to regular spaces, drops other control characters, collapses runs
/// of horizontal whitespace to a single space and trims each line.
/// Idempotent: `normalize(&normalize(x).text) == normalize(x)`.
pub fn normalize(raw: &str) -> NormalizedDocument {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");

    let mut normalized_lines: Vec<String> = Vec::new();
    for raw_line in unified.split('\n') {
        let mut line = String::with_capacity(raw_line.len());
        let mut pending_space = false;

        for c in raw_line.chars() {
            let c = if c == '\u{00a0}' { ' ' } else { c };
            if c == ' ' || c == '\t' {
                pending_space = true;
            } else if c.is_control() {
                // OCR noise; dropped outright.
            } else {
                if pending_space && !line.is_empty() {
                    line.push(' ');
                }
                pending_space = false;
                line.push(c);
            }
        }

        normalized_lines.push(line);
    }

    let text = normalized_lines.join("\n");
    let lines = normalized_lines
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect();

    NormalizedDocument { text, lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unifies_line_breaks() {
        let doc = normalize("first\r\nsecond\rthird");
        assert_eq!(doc.lines, vec!["first", "second", "third"]);
        assert_eq!(doc.text, "first\nsecond\nthird");
    }

    #[test]
    fn test_collapses_horizontal_whitespace() {
        let doc = normalize("Wireless\t\tKeyboard   combo");
        assert_eq!(doc.lines, vec!["Wireless Keyboard combo"]);
    }

    #[test]
    fn test_replaces_non_breaking_space() {
        let doc = normalize("Rs.\u{00a0}500");
        assert_eq!(doc.lines, vec!["Rs. 500"]);
    }

    #[test]
    fn test_trims_lines_and_drops_empties() {
        let doc = normalize("  SUPERFRESH MART  \n\n   \nTOTAL: 500\n");
        assert_eq!(doc.lines, vec!["SUPERFRESH MART", "TOTAL: 500"]);
        // The joined form keeps the line-break structure.
        assert_eq!(doc.text, "SUPERFRESH MART\n\n\nTOTAL: 500\n");
    }

    #[test]
    fn test_drops_control_characters() {
        let doc = normalize("abc\u{0000}def\u{0007}");
        assert_eq!(doc.lines, vec!["abcdef"]);
    }

    #[test]
    fn test_empty_input_yields_empty_document() {
        let doc = normalize("");
        assert!(doc.is_empty());
        assert_eq!(doc.text, "");
    }

    #[test]
    fn test_idempotent() {
        let raw = "  SUPERFRESH\u{00a0}MART \r\n\r\n GSTIN:   123 \t x ";
        let once = normalize(raw);
        let twice = normalize(&once.text);
        assert_eq!(once, twice);
    }
}
