//! Input-line tokenizer.
//!
//! Splits a raw line on runs of whitespace. A single- or double-quoted span
//! is one token even if it contains whitespace, and the quote characters are
//! kept as part of the token -- commands that want the bare text strip them
//! themselves. An unterminated quote matches greedily to the end of the line.

/// Split `line` into tokens. Pure; never fails.
///
/// Empty or whitespace-only input yields an empty vector.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) => {
                current.push(ch);
                if ch == q {
                    quote = None;
                }
            },
            None => match ch {
                '"' | '\'' => {
                    quote = Some(ch);
                    current.push(ch);
                },
                c if c.is_whitespace() => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                },
                _ => current.push(ch),
            },
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
