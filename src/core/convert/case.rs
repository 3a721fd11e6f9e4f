//! Identifier case conversion.
//!
//! C# members are PascalCase; Swift members are lowerCamelCase. Every renamed
//! declaration goes through [`lower_camelcase`].

/// What to do with the first letter of the converted identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstLetter {
    Upper,
    Lower,
    Keep,
}

const DEFAULT_SEPARATORS: &[char] = &['_'];

/// Join separator-delimited words into camel case.
///
/// A run of separators followed by a letter is dropped and the letter is
/// upper-cased. Separators followed by anything else stay. Each separator is
/// processed independently, in order. An empty `separators` slice means `_`.
pub fn camelcase(input: &str, first: FirstLetter, separators: &[char]) -> String {
    let separators = if separators.is_empty() {
        DEFAULT_SEPARATORS
    } else {
        separators
    };

    let mut out = input.to_string();
    for &separator in separators {
        out = join_on(&out, separator);
    }

    match first {
        FirstLetter::Upper => force_word_starts(&out, |c| c.to_ascii_uppercase()),
        FirstLetter::Lower => force_word_starts(&out, |c| c.to_ascii_lowercase()),
        FirstLetter::Keep => out,
    }
}

/// `camelcase(input, FirstLetter::Lower, &['_'])`.
pub fn lower_camelcase(input: &str) -> String {
    camelcase(input, FirstLetter::Lower, DEFAULT_SEPARATORS)
}

fn join_on(input: &str, separator: char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != separator {
            out.push(c);
            continue;
        }

        let mut run = 1;
        while chars.peek() == Some(&separator) {
            chars.next();
            run += 1;
        }

        match chars.peek() {
            Some(&next) if next.is_ascii_alphabetic() => {
                chars.next();
                out.push(next.to_ascii_uppercase());
            }
            _ => out.extend(std::iter::repeat(separator).take(run)),
        }
    }

    out
}

/// Apply `f` to the first character of the string and to every character
/// that follows whitespace.
fn force_word_starts(input: &str, f: impl Fn(char) -> char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_start = true;

    for c in input.chars() {
        if at_start && c.is_ascii_alphabetic() {
            out.push(f(c));
        } else {
            out.push(c);
        }
        at_start = c.is_whitespace();
    }

    out
}
