use crate::error::TemplateError;

// ── Segment ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Text copied to the output as-is, with quoting already resolved.
    Literal(String),
    Placeholder(Placeholder),
}

/// A `{index}`, `{index,type}` or `{index,type,style}` element.
///
/// `format_type` and `style` are kept for callers that inspect templates;
/// rendering always goes through `Display`.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub index: usize,
    pub format_type: Option<String>,
    pub style: Option<String>,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    /// 1-based column of the last consumed character.
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, col: 0 }
    }

    pub fn tokenize(mut self) -> Result<Vec<Segment>, TemplateError> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut quoted = false;

        while let Some(ch) = self.advance() {
            match ch {
                '\'' => {
                    if self.peek() == Some('\'') {
                        self.advance();
                        text.push('\'');
                    } else {
                        quoted = !quoted;
                    }
                }
                '{' if !quoted => {
                    let open = self.col;
                    if !text.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Placeholder(self.lex_placeholder(open)?));
                }
                c => text.push(c),
            }
        }

        if !text.is_empty() {
            segments.push(Segment::Literal(text));
        }
        Ok(segments)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        self.col += 1;
        Some(ch)
    }

    /// Lex the body of a placeholder; the opening `{` is already consumed.
    ///
    /// Commas split index, type and style. Inside the style, nested braces
    /// must balance and quoted text is kept verbatim.
    fn lex_placeholder(&mut self, open: usize) -> Result<Placeholder, TemplateError> {
        let mut parts = vec![String::new()];
        let mut depth = 0usize;
        let mut quoted = false;

        loop {
            let ch = self
                .advance()
                .ok_or_else(|| TemplateError::new("unmatched '{'", open))?;
            let part = parts.len() - 1;
            match ch {
                '\'' => {
                    quoted = !quoted;
                    parts[part].push(ch);
                }
                _ if quoted => parts[part].push(ch),
                ',' if depth == 0 && parts.len() < 3 => parts.push(String::new()),
                '{' => {
                    depth += 1;
                    parts[part].push(ch);
                }
                '}' if depth == 0 => break,
                '}' => {
                    depth -= 1;
                    parts[part].push(ch);
                }
                c => parts[part].push(c),
            }
        }

        let raw = &parts[0];
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TemplateError::new(
                format!("argument index must be a non-negative integer, got {:?}", raw),
                open,
            ));
        }
        let index = raw
            .parse::<usize>()
            .map_err(|_| TemplateError::new(format!("argument index {} is too large", raw), open))?;

        let trimmed = |i: usize| {
            parts
                .get(i)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Ok(Placeholder { index, format_type: trimmed(1), style: trimmed(2) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> Vec<Segment> { Lexer::new(src).tokenize().unwrap() }
    fn lit(s: &str) -> Segment { Segment::Literal(s.to_string()) }
    fn ph(index: usize) -> Segment {
        Segment::Placeholder(Placeholder { index, format_type: None, style: None })
    }

    #[test] fn empty() { assert!(lex("").is_empty()); }
    #[test] fn plain_text() { assert_eq!(lex("disk full"), vec![lit("disk full")]); }
    #[test] fn single_placeholder() { assert_eq!(lex("value={0}"), vec![lit("value="), ph(0)]); }
    #[test] fn adjacent_placeholders() { assert_eq!(lex("{1}{0}"), vec![ph(1), ph(0)]); }
    #[test] fn doubled_quote() { assert_eq!(lex("can''t"), vec![lit("can't")]); }
    #[test] fn quoted_braces() { assert_eq!(lex("'{0}' is {0}"), vec![lit("{0} is "), ph(0)]); }
    #[test] fn unterminated_quote() { assert_eq!(lex("a 'b {0}"), vec![lit("a b {0}")]); }
    #[test] fn stray_close_brace() { assert_eq!(lex("a } b"), vec![lit("a } b")]); }
    #[test] fn multibyte_text() { assert_eq!(lex("größe={0}"), vec![lit("größe="), ph(0)]); }

    #[test]
    fn type_and_style() {
        let segs = lex("{2, number , #.## }");
        assert_eq!(
            segs,
            vec![Segment::Placeholder(Placeholder {
                index: 2,
                format_type: Some("number".into()),
                style: Some("#.##".into()),
            })]
        );
    }

    #[test]
    fn nested_style_braces() {
        let segs = lex("{0,choice,0#none|1#{0} file}!");
        assert_eq!(segs.len(), 2);
        match &segs[0] {
            Segment::Placeholder(p) => assert_eq!(p.style.as_deref(), Some("0#none|1#{0} file")),
            other => panic!("expected placeholder, got {:?}", other),
        }
        assert_eq!(segs[1], lit("!"));
    }

    #[test]
    fn empty_type_is_none() {
        assert_eq!(lex("{0,}"), vec![ph(0)]);
    }

    #[test]
    fn unmatched_brace_reports_column() {
        let err = Lexer::new("ab{0").tokenize().unwrap_err();
        assert_eq!(err.col, 3);
    }

    #[test] fn err_empty_index() { Lexer::new("{}").tokenize().unwrap_err(); }
    #[test] fn err_named_index() { Lexer::new("{name}").tokenize().unwrap_err(); }
    #[test] fn err_signed_index() { Lexer::new("{+1}").tokenize().unwrap_err(); }
    #[test] fn err_padded_index() { Lexer::new("{ 0}").tokenize().unwrap_err(); }
    #[test] fn err_huge_index() { Lexer::new("{99999999999999999999999}").tokenize().unwrap_err(); }
}
