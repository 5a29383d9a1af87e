use std::borrow::Cow;

use crate::error::Error;

// Splits a command string into tokens while respecting quotes
pub fn split(input: &str) -> Result<Vec<String>, Error> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars();
    let mut in_single = false;
    let mut in_double = false;
    let mut has_token = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' if !in_single => {
                has_token = true;
                match chars.next() {
                    // Inside double quotes only these keep their escape meaning
                    Some(next) if in_double && !matches!(next, '"' | '\\' | '$' | '`') => {
                        current.push('\\');
                        current.push(next);
                    }
                    Some(next) => current.push(next),
                    None => return Err(Error::MalformedCommand("trailing backslash".into())),
                }
            }
            '"' if !in_single => {
                in_double = !in_double;
                has_token = true;
            }
            '\'' if !in_double => {
                in_single = !in_single;
                has_token = true;
            }
            c if c.is_whitespace() && !in_single && !in_double => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            _ => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_single || in_double {
        return Err(Error::MalformedCommand("unterminated quote".into()));
    }
    if has_token {
        tokens.push(current);
    }

    Ok(tokens)
}

fn needs_quoting(token: &str) -> bool {
    token.is_empty()
        || token
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\'))
}

/// Re-emits a single token: verbatim when it carries no whitespace or
/// quoting characters, otherwise single-quoted with embedded `'`
/// written as `'\''`. Bare operators like `&&` pass through untouched
/// so joined output keeps its meaning under the shell.
pub fn quote(token: &str) -> Cow<'_, str> {
    if !needs_quoting(token) {
        return Cow::Borrowed(token);
    }

    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push('\'');
    for c in token.chars() {
        if c == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}

/// Quotes each token and joins them with single spaces. Round-trips
/// with [`split`] for literal argument vectors; not meant for emitting
/// shell syntax.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| quote(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
