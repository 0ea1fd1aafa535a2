//! Compact plain-text notation for [`CompiledText`].
//!
//! The notation spells every element by its table name and keeps the
//! structure of the model visible:
//!
//! - words are separated by spaces, characters by `_`, and a `-` replaces the
//!   `_` before a character that follows a morpheme boundary;
//! - `^` marks a proper character;
//! - inside a character, `pre` elements and `main` are joined by `+`, the
//!   first `post` element directly follows `main` and later ones are joined
//!   by `+`;
//! - the null consonant is `w`, the null final is `.`, and a trailing `~`
//!   marks a reversed final; a `~` directly followed by `+` drops the `+`;
//! - a lone `~` separates `main` from `post` where the compact spelling
//!   would be misread.
//!
//! # Example
//!
//! ```
//! use lnnzhyz_core::notation::{deserialize_text, serialize_text};
//! use lnnzhyz_core::semantic::{Character, CompiledText, Element, Final, Glide};
//!
//! let ni = Character::new(Element::consonant("n"))
//!     .with_pre(vec![Final::new(Some(Glide::I), None, None).reversed().into()]);
//! let text = CompiledText::new(vec![vec![ni]]);
//!
//! let notation = serialize_text(&text);
//! assert_eq!(notation, "i~n");
//! assert_eq!(deserialize_text(&notation).unwrap(), text);
//! ```

use log::trace;
use thiserror::Error;

use crate::{
    glyph,
    semantic::{Character, Coda, CompiledText, Element, Final, Glide, Vowel, Word},
};

const NULL_CONSONANT: &str = "w";
const NULL_FINAL: &str = ".";
const REVERSED: char = '~';
const JOINER: char = '+';

/// Errors raised while reading notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid element `{0}`")]
    InvalidElement(String),

    #[error("character `{0}` has no main element")]
    MissingMain(String),

    #[error("character `{0}` has more than one main element")]
    DuplicateMain(String),

    #[error("character `{0}` has affixes around a bare final")]
    AffixedFinal(String),
}

/// Spell a single element.
pub fn serialize_element(element: &Element) -> String {
    match element {
        Element::Consonant(name) if name.is_empty() => NULL_CONSONANT.to_string(),
        Element::Consonant(name) | Element::Modifier(name) => name.clone(),
        Element::Final(fin) => serialize_final(fin),
    }
}

fn serialize_final(fin: &Final) -> String {
    let mut out = String::new();
    if fin.is_null() {
        out.push_str(NULL_FINAL);
    }
    if let Some(glide) = fin.glide() {
        out.push_str(glide.name());
    }
    if let Some(vowel) = fin.vowel() {
        out.push_str(vowel.name());
    }
    if let Some(coda) = fin.coda() {
        out.push_str(coda.name());
    }
    if fin.is_reversed() {
        out.push(REVERSED);
    }
    out
}

/// Spell a character without its `-` and `^` markers.
fn serialize_body(character: &Character) -> String {
    let head: Vec<String> = character
        .pre()
        .iter()
        .chain(std::iter::once(character.main()))
        .map(serialize_element)
        .collect();
    let head = head.join("+");

    if character.post().is_empty() {
        return collapse(head);
    }

    let tail: Vec<String> = character.post().iter().map(serialize_element).collect();
    let tail = tail.join("+");

    let bare = Character::new(character.main().clone())
        .with_pre(character.pre().to_vec())
        .with_post(character.post().to_vec());

    let compact = collapse(format!("{head}{tail}"));
    if parse_body(&compact).is_ok_and(|parsed| parsed == bare) {
        compact
    } else {
        collapse(format!("{head}{REVERSED}{tail}"))
    }
}

fn collapse(spelling: String) -> String {
    spelling.replace("~+", "~")
}

/// Spell a whole text.
pub fn serialize_text(text: &CompiledText) -> String {
    let words: Vec<String> = text.words().iter().map(serialize_word).collect();
    words.join(" ")
}

fn serialize_word(word: &Word) -> String {
    let mut out = String::new();
    for (index, character) in word.iter().enumerate() {
        if character.is_hyphen() {
            out.push('-');
        } else if index > 0 {
            out.push('_');
        }
        if character.is_proper() {
            out.push('^');
        }
        out.push_str(&serialize_body(character));
    }
    out
}

/// Read a text written in notation.
///
/// # Errors
///
/// Returns [`NotationError`] for any token that does not spell a known
/// element or does not form a well-shaped character.
pub fn deserialize_text(notation: &str) -> Result<CompiledText, NotationError> {
    notation
        .split_whitespace()
        .map(|word| split_characters(word).map(parse_character).collect())
        .collect()
}

/// Splits a word on `_` and before every `-` that does not start a token.
fn split_characters(word: &str) -> impl Iterator<Item = &str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (index, ch) in word.char_indices() {
        match ch {
            '_' => {
                tokens.push(&word[start..index]);
                start = index + 1;
            }
            '-' if index > start => {
                tokens.push(&word[start..index]);
                start = index;
            }
            _ => {}
        }
    }
    tokens.push(&word[start..]);
    tokens.into_iter()
}

fn parse_character(token: &str) -> Result<Character, NotationError> {
    let (hyphen, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let (proper, body) = match rest.strip_prefix('^') {
        Some(body) => (true, body),
        None => (false, rest),
    };
    let character = parse_body(body)?;
    Ok(character.with_hyphen(hyphen).with_proper(proper))
}

/// Splits a character body on `+` and after every `~`.
fn split_elements(body: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (index, ch) in body.char_indices() {
        match ch {
            JOINER => {
                segments.push(&body[start..index]);
                start = index + 1;
            }
            REVERSED => {
                segments.push(&body[start..=index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    segments.push(&body[start..]);
    segments.retain(|segment| !segment.is_empty());
    segments
}

fn parse_body(body: &str) -> Result<Character, NotationError> {
    let segments = split_elements(body);
    let allow_modifier = segments.len() == 1;

    let mut pre = Vec::new();
    let mut main = None;
    let mut post = Vec::new();

    for segment in segments {
        if let Some(element) = parse_element(segment, allow_modifier) {
            match main {
                None => pre.push(element),
                Some(_) => post.push(element),
            }
            continue;
        }

        let (initial, rest) = split_initial(segment)
            .ok_or_else(|| NotationError::InvalidElement(segment.to_string()))?;
        if main.is_some() {
            return Err(NotationError::DuplicateMain(body.to_string()));
        }
        main = Some(initial);
        if let Some(element) = rest {
            post.push(element);
        }
    }

    let main = match main {
        Some(main) => main,
        None => pre
            .pop()
            .ok_or_else(|| NotationError::MissingMain(body.to_string()))?,
    };
    if matches!(main, Element::Final(_)) && !pre.is_empty() {
        return Err(NotationError::AffixedFinal(body.to_string()));
    }

    trace!(body = body, pre_len = pre.len(), post_len = post.len(); "Read character notation");
    Ok(Character::new(main).with_pre(pre).with_post(post))
}

/// Splits a segment into a leading consonant and the element that follows it.
///
/// Longer consonant names are tried first; a remainder of `~` only closes the
/// main consonant.
fn split_initial(segment: &str) -> Option<(Element, Option<Element>)> {
    let candidates = glyph::consonant_names()
        .filter(|name| !name.is_empty())
        .chain(std::iter::once(NULL_CONSONANT));

    for name in candidates {
        let Some(rest) = segment.strip_prefix(name) else {
            continue;
        };
        let initial = consonant_from_name(name);
        if rest == "~" {
            return Some((initial, None));
        }
        if rest.is_empty() {
            continue;
        }
        if let Some(element) = parse_element(rest, false) {
            return Some((initial, Some(element)));
        }
    }
    None
}

fn consonant_from_name(name: &str) -> Element {
    if name == NULL_CONSONANT {
        Element::consonant("")
    } else {
        Element::consonant(name)
    }
}

/// Read a single element spelling.
pub fn parse_element(spelling: &str, allow_modifier: bool) -> Option<Element> {
    if spelling == NULL_CONSONANT {
        return Some(Element::consonant(""));
    }
    if glyph::consonant(spelling).is_some() {
        return Some(Element::consonant(spelling));
    }
    if allow_modifier && glyph::modifier(spelling).is_some() {
        return Some(Element::modifier(spelling));
    }
    parse_final(spelling).map(Element::Final)
}

fn parse_final(spelling: &str) -> Option<Final> {
    let (body, reversed) = match spelling.strip_suffix(REVERSED) {
        Some(body) => (body, true),
        None => (spelling, false),
    };
    if body == NULL_FINAL {
        return Some(Final::null().with_reversed(reversed));
    }
    if body.is_empty() {
        return None;
    }

    let glides = Glide::ALL
        .into_iter()
        .filter_map(|glide| body.strip_prefix(glide.name()).map(|rest| (Some(glide), rest)))
        .chain(std::iter::once((None, body)));

    for (glide, rest) in glides {
        if rest.is_empty() {
            return Some(Final::new(glide, None, None).with_reversed(reversed));
        }
        for vowel in Vowel::ALL {
            let Some(rest) = rest.strip_prefix(vowel.name()) else {
                continue;
            };
            let coda = if rest.is_empty() {
                None
            } else {
                match Coda::ALL.into_iter().find(|coda| coda.name() == rest) {
                    Some(coda) => Some(coda),
                    None => continue,
                }
            };
            return Some(Final::new(glide, Some(vowel), coda).with_reversed(reversed));
        }
    }
    None
}
