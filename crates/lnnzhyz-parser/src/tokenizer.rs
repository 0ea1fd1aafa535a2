//! Splits source text into words and character tokens.
//!
//! Words are separated by runs of whitespace. Inside a word, characters are
//! separated by `_`, or split right before a `-`, which then marks the
//! following character as a hyphen character. A character may start with at
//! most one `^` (proper) and at most one `-` (hyphen) marker, in either order.
//!
//! The tokenizer does not know any grammar: it hands the marker-stripped body
//! of every character to the language grammars together with its span.

use winnow::{
    Parser as _,
    combinator::{alt, eof, opt, peek, preceded, repeat, separated, terminated},
    error::{ContextError, ErrMode},
    stream::{LocatingSlice, Stream},
    token::take_while,
};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

type Input<'src> = LocatingSlice<&'src str>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A character token: a body with its markers stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'src> {
    /// The text between the markers and the next separator.
    pub body: &'src str,
    /// Span of the whole token, markers included.
    pub span: Span,
    /// Span of `body` alone.
    pub body_span: Span,
    pub proper: bool,
    pub hyphen: bool,
}

impl Token<'_> {
    fn shifted(self, offset: usize) -> Self {
        Self {
            span: self.span.shifted(offset),
            body_span: self.body_span.shifted(offset),
            ..self
        }
    }
}

fn is_body_char(c: char) -> bool {
    !c.is_whitespace() && c != '_' && c != '-'
}

/// Parse the `^` and `-` markers, each at most once.
fn markers(input: &mut Input<'_>) -> IResult<(bool, bool)> {
    let mut proper = false;
    let mut hyphen = false;
    loop {
        if !proper && opt('^').parse_next(input)?.is_some() {
            proper = true;
        } else if !hyphen && opt('-').parse_next(input)?.is_some() {
            hyphen = true;
        } else {
            return Ok((proper, hyphen));
        }
    }
}

fn character<'src>(input: &mut Input<'src>) -> IResult<Token<'src>> {
    (markers, take_while(0.., is_body_char).with_span())
        .with_span()
        .map(|(((proper, hyphen), (body, body_range)), range)| Token {
            body,
            span: Span::new(range),
            body_span: Span::new(body_range),
            proper,
            hyphen,
        })
        .parse_next(input)
}

fn word<'src>(input: &mut Input<'src>) -> IResult<Vec<Token<'src>>> {
    let first = character.parse_next(input)?;
    let rest: Vec<Token<'src>> = repeat(
        0..,
        alt((preceded('_', character), preceded(peek('-'), character))),
    )
    .parse_next(input)?;

    let mut tokens = Vec::with_capacity(rest.len() + 1);
    tokens.push(first);
    tokens.extend(rest);
    Ok(tokens)
}

fn text<'src>(input: &mut Input<'src>) -> IResult<Vec<Vec<Token<'src>>>> {
    terminated(
        separated(1.., word, take_while(1.., char::is_whitespace)),
        eof,
    )
    .parse_next(input)
}

/// Split `source` into words of character tokens.
///
/// Input that is empty after trimming yields no words. Spans refer to byte
/// offsets in the untrimmed `source`.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Vec<Token<'_>>>, Diagnostic> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let offset = source.len() - source.trim_start().len();

    let mut input = LocatingSlice::new(trimmed);
    match text(&mut input) {
        Ok(words) => Ok(words
            .into_iter()
            .map(|word| word.into_iter().map(|token| token.shifted(offset)).collect())
            .collect()),
        Err(_) => {
            let position = trimmed.len() - input.eof_offset();
            let width = trimmed[position..].chars().next().map_or(0, char::len_utf8);
            let span = Span::new(position..position + width).shifted(offset);
            Err(Diagnostic::error("input could not be split into characters")
                .with_code(ErrorCode::E001)
                .with_label(span, "unexpected character")
                .with_help("separate words with spaces and characters with `_` or `-`"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies(source: &str) -> Vec<Vec<&str>> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|word| word.into_iter().map(|token| token.body).collect())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t\n ").unwrap().is_empty());
    }

    #[test]
    fn test_words_and_characters() {
        assert_eq!(
            bodies("  a_b   c_d\te "),
            vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]
        );
    }

    #[test]
    fn test_hyphen_splits_and_marks() {
        let words = tokenize("i1_xin1-i1_i4").unwrap();
        let word = &words[0];

        let parts: Vec<_> = word.iter().map(|token| (token.body, token.hyphen)).collect();
        assert_eq!(
            parts,
            vec![("i1", false), ("xin1", false), ("i1", true), ("i4", false)]
        );
    }

    #[test]
    fn test_leading_hyphen_stays_attached() {
        let words = tokenize("-a").unwrap();
        assert_eq!(words[0].len(), 1);
        assert!(words[0][0].hyphen);
        assert_eq!(words[0][0].body, "a");
    }

    #[test]
    fn test_markers_in_either_order() {
        for source in ["^-x", "-^x"] {
            let token = &tokenize(source).unwrap()[0][0];
            assert!(token.proper, "{source}");
            assert!(token.hyphen, "{source}");
            assert_eq!(token.body, "x");
        }
    }

    #[test]
    fn test_repeated_marker_stays_in_body() {
        let token = &tokenize("^^x").unwrap()[0][0];
        assert!(token.proper);
        assert_eq!(token.body, "^x");
    }

    #[test]
    fn test_empty_characters_are_kept() {
        assert_eq!(bodies("a__b"), vec![vec!["a", "", "b"]]);
        assert_eq!(bodies("a_"), vec![vec!["a", ""]]);
    }

    #[test]
    fn test_spans_refer_to_untrimmed_source() {
        let source = "  ni3_^hau3";
        let words = tokenize(source).unwrap();
        let hau = &words[0][1];

        assert_eq!(hau.span, Span::new(6..11));
        assert_eq!(hau.body_span, Span::new(7..11));
        assert_eq!(&source[hau.body_span.start()..hau.body_span.end()], "hau3");
    }
}
