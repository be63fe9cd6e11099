// Parser for the serialized list columns of the catalog CSV.
//
// The source data stores `ingredients` and `steps` as Python list literals,
// e.g. `['salt', "baker's yeast", 'a \'quoted\' word']`.
use crate::error::{Error, Result};
use std::iter::Peekable;
use std::str::Chars;

/// Parse a list-of-strings literal into an ordered vector.
pub fn parse_string_list(literal: &str) -> Result<Vec<String>> {
    let mut chars = literal.trim().chars().peekable();

    if chars.next() != Some('[') {
        return Err(Error::Load("list literal must start with '['".to_string()));
    }

    let mut items = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        match chars.next() {
            Some(']') => break,
            Some(quote @ ('\'' | '"')) => {
                items.push(parse_string(&mut chars, quote)?);

                skip_whitespace(&mut chars);
                match chars.next() {
                    Some(',') => continue,
                    Some(']') => break,
                    Some(other) => {
                        return Err(Error::Load(format!(
                            "expected ',' or ']' after list item, found '{other}'"
                        )))
                    }
                    None => return Err(Error::Load("unterminated list literal".to_string())),
                }
            }
            Some(other) => {
                return Err(Error::Load(format!(
                    "expected a quoted string in list literal, found '{other}'"
                )))
            }
            None => return Err(Error::Load("unterminated list literal".to_string())),
        }
    }

    skip_whitespace(&mut chars);
    if let Some(trailing) = chars.next() {
        return Err(Error::Load(format!(
            "unexpected '{trailing}' after end of list literal"
        )));
    }

    Ok(items)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn parse_string(chars: &mut Peekable<Chars<'_>>, quote: char) -> Result<String> {
    let mut value = String::new();

    loop {
        match chars.next() {
            Some(c) if c == quote => return Ok(value),
            Some('\\') => match chars.next() {
                Some('\\') => value.push('\\'),
                Some('\'') => value.push('\''),
                Some('"') => value.push('"'),
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some('r') => value.push('\r'),
                Some('x') => value.push(parse_hex_escape(chars, 2)?),
                Some('u') => value.push(parse_hex_escape(chars, 4)?),
                // Unknown escapes are kept verbatim
                Some(other) => {
                    value.push('\\');
                    value.push(other);
                }
                None => return Err(Error::Load("unterminated escape sequence".to_string())),
            },
            Some(c) => value.push(c),
            None => return Err(Error::Load("unterminated string in list literal".to_string())),
        }
    }
}

fn parse_hex_escape(chars: &mut Peekable<Chars<'_>>, digits: usize) -> Result<char> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.chars().count() != digits {
        return Err(Error::Load("truncated hex escape".to_string()));
    }

    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| Error::Load(format!("invalid hex escape '{hex}'")))
}
