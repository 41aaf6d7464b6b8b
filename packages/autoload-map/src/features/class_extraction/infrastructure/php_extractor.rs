//! PHP class declaration scanner
//!
//! Two passes: blank out everything that is not PHP code (inline HTML,
//! comments, strings, heredocs), then match declarations and namespace
//! statements in the remaining text.

use crate::features::class_extraction::ports::ClassExtractor;
use once_cell::sync::Lazy;
use regex::Regex;

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:(?P<ns>namespace\b\s*(?P<ns_name>[A-Za-z_\\][A-Za-z0-9_\\]*)?\s*[;{])|(?:class|interface|trait|enum)\s+(?P<name>[A-Za-z_][A-Za-z0-9_]*))",
    )
    .expect("declaration pattern is valid")
});

#[derive(Debug, Default, Clone, Copy)]
pub struct PhpClassExtractor;

impl PhpClassExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ClassExtractor for PhpClassExtractor {
    fn extract(&self, source: &str) -> Vec<String> {
        let code = strip_non_code(source);
        let mut namespace = String::new();
        let mut classes = Vec::new();

        for caps in DECLARATION.captures_iter(&code) {
            if caps.name("ns").is_some() {
                namespace = caps
                    .name("ns_name")
                    .map(|m| m.as_str().trim_start_matches('\\').to_string())
                    .unwrap_or_default();
                continue;
            }
            let (Some(whole), Some(name)) = (caps.get(0), caps.name("name")) else {
                continue;
            };
            if !is_declaration_context(&code[..whole.start()]) {
                continue;
            }
            if namespace.is_empty() {
                classes.push(name.as_str().to_string());
            } else {
                classes.push(format!("{}\\{}", namespace, name.as_str()));
            }
        }

        classes
    }
}

/// Rules out `Foo::class`, `$class`, `->class` and anonymous `new class`.
fn is_declaration_context(before: &str) -> bool {
    if before.ends_with('$') {
        return false;
    }
    let before = before.trim_end();
    if before.ends_with("::") || before.ends_with("->") {
        return false;
    }
    let last_word = before
        .rsplit(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .next()
        .unwrap_or("");
    !last_word.eq_ignore_ascii_case("new")
}

fn at(chars: &[char], i: usize, pat: &str) -> bool {
    pat.chars()
        .enumerate()
        .all(|(k, p)| chars.get(i + k) == Some(&p))
}

fn at_ignore_case(chars: &[char], i: usize, pat: &str) -> bool {
    pat.chars().enumerate().all(|(k, p)| {
        chars
            .get(i + k)
            .is_some_and(|c| c.eq_ignore_ascii_case(&p))
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace non-code regions with single spaces. Newlines inside code are kept.
fn strip_non_code(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let n = chars.len();
    let mut out = String::with_capacity(source.len());
    let mut in_php = false;
    let mut i = 0;

    while i < n {
        if !in_php {
            if at_ignore_case(&chars, i, "<?php") {
                in_php = true;
                i += 5;
                out.push(' ');
            } else if at(&chars, i, "<?=") {
                in_php = true;
                i += 3;
                out.push(' ');
            } else if at(&chars, i, "<?") && chars.get(i + 2).map_or(true, |c| c.is_whitespace()) {
                in_php = true;
                i += 2;
                out.push(' ');
            } else {
                i += 1;
            }
            continue;
        }

        let c = chars[i];
        let next = chars.get(i + 1).copied();
        match c {
            '?' if next == Some('>') => {
                in_php = false;
                i += 2;
                out.push(' ');
            }
            '/' if next == Some('/') => {
                i = skip_line_comment(&chars, i);
                out.push(' ');
            }
            '#' if next != Some('[') => {
                i = skip_line_comment(&chars, i);
                out.push(' ');
            }
            '/' if next == Some('*') => {
                i += 2;
                while i < n && !at(&chars, i, "*/") {
                    i += 1;
                }
                i = (i + 2).min(n);
                out.push(' ');
            }
            '\'' | '"' | '`' => {
                i = skip_quoted(&chars, i, c);
                out.push(' ');
            }
            '<' if at(&chars, i, "<<<") => match skip_heredoc(&chars, i) {
                Some(end) => {
                    i = end;
                    out.push(' ');
                }
                None => {
                    out.push_str("<<<");
                    i += 3;
                }
            },
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Line comments end at a newline or at a closing `?>` tag (left in place).
fn skip_line_comment(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i] != '\n' && !at(chars, i, "?>") {
        i += 1;
    }
    i
}

fn skip_quoted(chars: &[char], start: usize, quote: char) -> usize {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}

/// `<<<ID`, `<<<'ID'` or `<<<"ID"` up to the closing identifier line.
/// Returns `None` when no identifier follows the `<<<`.
fn skip_heredoc(chars: &[char], start: usize) -> Option<usize> {
    let n = chars.len();
    let mut i = start + 3;
    while i < n && (chars[i] == ' ' || chars[i] == '\t') {
        i += 1;
    }
    let quoted = matches!(chars.get(i), Some('\'') | Some('"'));
    if quoted {
        i += 1;
    }
    let ident_start = i;
    while i < n && is_ident_char(chars[i]) {
        i += 1;
    }
    if i == ident_start {
        return None;
    }
    let ident: Vec<char> = chars[ident_start..i].to_vec();

    // Body starts on the next line
    while i < n && chars[i] != '\n' {
        i += 1;
    }
    while i < n {
        // i sits on a newline; inspect the following line
        let mut j = i + 1;
        while j < n && (chars[j] == ' ' || chars[j] == '\t') {
            j += 1;
        }
        let closes = chars.len() >= j + ident.len()
            && chars[j..j + ident.len()] == ident[..]
            && chars.get(j + ident.len()).map_or(true, |c| !is_ident_char(*c));
        if closes {
            return Some(j + ident.len());
        }
        i = j;
        while i < n && chars[i] != '\n' {
            i += 1;
        }
    }
    Some(n)
}
