//! Parser for the list-valued abilities column.
//!
//! Cells hold a list literal of quoted strings:
//!
//! ```text
//! ['Overgrow', 'Chlorophyll']
//! ["Farfetch'd Guard"]
//! []
//! ```
//!
//! Either quote style may be used per item, a backslash escapes the next
//! character, and a single trailing comma is tolerated. Abilities form a set,
//! so an item repeated verbatim is rejected rather than collapsed. Anything
//! else is rejected with a short reason.

use std::iter::Peekable;
use std::str::Chars;

/// Parses a list literal into its items, preserving order.
///
/// # Errors
///
/// Returns a static reason string describing the first syntax problem.
pub fn parse_ability_list(text: &str) -> Result<Vec<String>, &'static str> {
    let mut chars = text.trim().chars().peekable();
    if chars.next() != Some('[') {
        return Err("expected '[' at start of list");
    }

    let mut items = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        match chars.peek().copied() {
            None => return Err("missing closing bracket"),
            Some(']') => {
                chars.next();
                break;
            }
            Some(quote @ ('\'' | '"')) => {
                chars.next();
                let item = read_quoted(&mut chars, quote)?;
                if item.trim().is_empty() {
                    return Err("empty ability name");
                }
                if items.contains(&item) {
                    return Err("duplicate ability");
                }
                items.push(item);

                skip_whitespace(&mut chars);
                match chars.next() {
                    Some(',') => continue,
                    Some(']') => break,
                    None => return Err("missing closing bracket"),
                    Some(_) => return Err("expected ',' or ']' after item"),
                }
            }
            Some(_) => return Err("expected quoted string"),
        }
    }

    skip_whitespace(&mut chars);
    if chars.next().is_some() {
        return Err("unexpected characters after closing bracket");
    }
    Ok(items)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

fn read_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Result<String, &'static str> {
    let mut out = String::new();
    loop {
        match chars.next() {
            None => return Err("unterminated string"),
            Some('\\') => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => return Err("unterminated string"),
            },
            Some(c) if c == quote => return Ok(out),
            Some(c) => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_and_double_quotes() {
        assert_eq!(
            parse_ability_list("['Overgrow', 'Chlorophyll']").unwrap(),
            vec!["Overgrow", "Chlorophyll"]
        );
        assert_eq!(
            parse_ability_list(r#"["Keen Eye", 'Inner Focus']"#).unwrap(),
            vec!["Keen Eye", "Inner Focus"]
        );
        assert_eq!(
            parse_ability_list(r#"["Farfetch'd"]"#).unwrap(),
            vec!["Farfetch'd"]
        );
    }

    #[test]
    fn parses_empty_and_trailing_comma() {
        assert!(parse_ability_list("[]").unwrap().is_empty());
        assert!(parse_ability_list("  [ ]  ").unwrap().is_empty());
        assert_eq!(parse_ability_list("['Blaze',]").unwrap(), vec!["Blaze"]);
    }

    #[test]
    fn handles_escapes() {
        assert_eq!(parse_ability_list(r"['it\'s']").unwrap(), vec!["it's"]);
    }

    #[test]
    fn rejects_malformed_input() {
        let cases = [
            ("", "expected '[' at start of list"),
            ("Overgrow", "expected '[' at start of list"),
            ("['Overgrow'", "missing closing bracket"),
            ("['Overgrow", "unterminated string"),
            ("['Overgrow' 'Blaze']", "expected ',' or ']' after item"),
            ("[Overgrow]", "expected quoted string"),
            ("[,]", "expected quoted string"),
            ("['a',,'b']", "expected quoted string"),
            ("['']", "empty ability name"),
            ("['Torrent', 'Torrent']", "duplicate ability"),
            (r#"['Blaze', "Blaze",]"#, "duplicate ability"),
            ("['a'] x", "unexpected characters after closing bracket"),
            ("[", "missing closing bracket"),
        ];
        for (input, reason) in cases {
            assert_eq!(parse_ability_list(input), Err(reason), "input {input:?}");
        }
    }
}
