//! Stateless line tokenizers.
//!
//! A tokenizer looks at exactly one line and carries nothing over to the
//! next, so any line can be highlighted on its own, in any order.

use super::token::{Token, TokenKind};

/// Core tokenizer abstraction for syntax highlighting.
pub trait Tokenizer: Send + Sync {
    /// Human-readable name of this tokenizer.
    fn name(&self) -> &'static str;

    /// Classify one line. The returned tokens are ordered, contiguous and
    /// cover the whole line.
    fn tokenize_line(&self, line: &[u8]) -> Vec<Token>;
}

/// Keywords recognized by [`CLikeTokenizer::new`].
pub const C_LIKE_KEYWORDS: &[&str] = &[
    "int",
    "char",
    "bool",
    "void",
    "string",
    "float",
    "double",
    "if",
    "else",
    "for",
    "while",
    "return",
    "class",
    "public",
    "private",
    "protected",
    "namespace",
    "using",
    "include",
    "const",
    "static",
    "virtual",
    "override",
    "template",
    "auto",
    "vector",
    "size_t",
    "true",
    "false",
    "nullptr",
];

/// Tokenizer for C-family source: keywords, `"`/`'` literals with backslash
/// escapes, `//` line comments and decimal numbers.
#[derive(Clone, Debug)]
pub struct CLikeTokenizer {
    keywords: &'static [&'static str],
}

impl Default for CLikeTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CLikeTokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_keywords(C_LIKE_KEYWORDS)
    }

    /// Tokenizer using a custom keyword set.
    #[must_use]
    pub fn with_keywords(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }

    fn is_keyword(&self, word: &[u8]) -> bool {
        self.keywords.iter().any(|kw| kw.as_bytes() == word)
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Append a token, merging adjacent plain text.
fn push(tokens: &mut Vec<Token>, kind: TokenKind, start: usize, end: usize) {
    if start == end {
        return;
    }
    if kind == TokenKind::Text {
        if let Some(last) = tokens.last_mut() {
            if last.kind == TokenKind::Text && last.end == start {
                last.end = end;
                return;
            }
        }
    }
    tokens.push(Token::new(kind, start, end));
}

impl Tokenizer for CLikeTokenizer {
    fn name(&self) -> &'static str {
        "C-like"
    }

    fn tokenize_line(&self, line: &[u8]) -> Vec<Token> {
        let mut tokens = Vec::new();
        let len = line.len();
        let mut i = 0;

        while i < len {
            let b = line[i];

            if b == b'/' && line.get(i + 1) == Some(&b'/') {
                push(&mut tokens, TokenKind::Comment, i, len);
                break;
            }

            if b == b'"' || b == b'\'' {
                let start = i;
                let mut escaped = false;
                i += 1;
                while i < len {
                    let c = line[i];
                    i += 1;
                    if escaped {
                        escaped = false;
                    } else if c == b'\\' {
                        escaped = true;
                    } else if c == b {
                        break;
                    }
                }
                push(&mut tokens, TokenKind::String, start, i);
                continue;
            }

            if b.is_ascii_digit() {
                let start = i;
                while i < len && (line[i].is_ascii_digit() || line[i] == b'.') {
                    i += 1;
                }
                push(&mut tokens, TokenKind::Number, start, i);
                continue;
            }

            if is_word_byte(b) {
                let start = i;
                while i < len && is_word_byte(line[i]) {
                    i += 1;
                }
                let kind = if self.is_keyword(&line[start..i]) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Text
                };
                push(&mut tokens, kind, start, i);
                continue;
            }

            push(&mut tokens, TokenKind::Text, i, i + 1);
            i += 1;
        }

        tokens
    }
}
