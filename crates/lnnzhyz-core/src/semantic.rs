//! Structured phonological model shared by the compiler and the layout engine.
//!
//! A piece of text compiles into a [`CompiledText`]: ordered words, each an
//! ordered list of [`Character`]s. Every character is built around a `main`
//! [`Element`] with optional prefix (`pre`) and suffix (`post`) elements.
//!
//! # Example
//!
//! ```
//! use lnnzhyz_core::semantic::{Character, Element, Final, Glide};
//!
//! // "ni3": consonant n with a reversed glide i drawn before it
//! let ni = Character::new(Element::consonant("n"))
//!     .with_pre(vec![Final::new(Some(Glide::I), None, None).reversed().into()]);
//!
//! assert_eq!(ni.pre().len(), 1);
//! assert!(ni.pre()[0].is_reversed());
//! ```

use std::{fmt, slice};

use serde::{Deserialize, Serialize};

/// A glide preceding the nucleus of a final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glide {
    I,
    U,
    Y,
}

impl Glide {
    /// All glides, in table order.
    pub const ALL: [Glide; 3] = [Glide::I, Glide::U, Glide::Y];

    /// Returns the romanized spelling of this glide.
    pub fn name(self) -> &'static str {
        match self {
            Self::I => "i",
            Self::U => "u",
            Self::Y => "y",
        }
    }
}

/// The nucleus vowel of a final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vowel {
    E,
    A,
    O,
    Eh,
    Oo,
    Ii,
    Uu,
    Ih,
}

impl Vowel {
    /// All vowels, in table order.
    pub const ALL: [Vowel; 8] = [
        Vowel::E,
        Vowel::A,
        Vowel::O,
        Vowel::Eh,
        Vowel::Oo,
        Vowel::Ii,
        Vowel::Uu,
        Vowel::Ih,
    ];

    /// Returns the romanized spelling of this vowel.
    pub fn name(self) -> &'static str {
        match self {
            Self::E => "e",
            Self::A => "a",
            Self::O => "o",
            Self::Eh => "eh",
            Self::Oo => "oo",
            Self::Ii => "ii",
            Self::Uu => "uu",
            Self::Ih => "ih",
        }
    }

    /// Open vowels get an extra vertical stroke when drawn without a coda.
    pub fn is_open(self) -> bool {
        matches!(self, Self::E | Self::A | Self::O | Self::Eh)
    }

    /// Long vowels occupy the full height of their column.
    pub fn is_long(self) -> bool {
        matches!(self, Self::Oo | Self::Ii | Self::Uu)
    }
}

/// The coda closing a final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coda {
    I,
    U,
    N,
    Ng,
    R,
}

impl Coda {
    /// All codas, in table order.
    pub const ALL: [Coda; 5] = [Coda::I, Coda::U, Coda::N, Coda::Ng, Coda::R];

    /// Returns the romanized spelling of this coda.
    pub fn name(self) -> &'static str {
        match self {
            Self::I => "i",
            Self::U => "u",
            Self::N => "n",
            Self::Ng => "ng",
            Self::R => "r",
        }
    }
}

fn is_false(value: &bool) -> bool {
    !value
}

/// A glide, vowel and coda bundle, each part optional.
///
/// A final with none of the three parts is the *null final*, drawn as a
/// single short stroke. A reversed final is drawn flipped below the baseline
/// and joins the word's bottom connecting line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Final {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    glide: Option<Glide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vowel: Option<Vowel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coda: Option<Coda>,
    #[serde(default, skip_serializing_if = "is_false")]
    reversed: bool,
}

impl Final {
    /// Create an upright final from its parts.
    pub fn new(glide: Option<Glide>, vowel: Option<Vowel>, coda: Option<Coda>) -> Self {
        Self {
            glide,
            vowel,
            coda,
            reversed: false,
        }
    }

    /// The null final.
    pub fn null() -> Self {
        Self::default()
    }

    /// Returns this final drawn flipped below the baseline.
    pub fn reversed(self) -> Self {
        self.with_reversed(true)
    }

    /// Returns this final with the given orientation.
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// Returns this final with the given glide.
    pub fn with_glide(mut self, glide: Option<Glide>) -> Self {
        self.glide = glide;
        self
    }

    pub fn glide(&self) -> Option<Glide> {
        self.glide
    }

    pub fn vowel(&self) -> Option<Vowel> {
        self.vowel
    }

    pub fn coda(&self) -> Option<Coda> {
        self.coda
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Returns `true` for the null final.
    pub fn is_null(&self) -> bool {
        self.glide.is_none() && self.vowel.is_none() && self.coda.is_none()
    }
}

impl fmt::Display for Final {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "∅")?;
        }
        if let Some(glide) = self.glide {
            write!(f, "{}", glide.name())?;
        }
        if let Some(vowel) = self.vowel {
            write!(f, "{}", vowel.name())?;
        }
        if let Some(coda) = self.coda {
            write!(f, "{}", coda.name())?;
        }
        if self.reversed {
            write!(f, "~")?;
        }
        Ok(())
    }
}

/// The atomic phonetic and graphic unit.
///
/// Only [`Element::Final`] carries glide, vowel, coda or orientation data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    /// A consonant spelling; the empty string is the null onset.
    Consonant(String),
    /// A standalone diacritic-like mark, identified by name.
    Modifier(String),
    /// A glide, vowel and coda bundle.
    Final(Final),
}

impl Element {
    pub fn consonant(name: impl Into<String>) -> Self {
        Self::Consonant(name.into())
    }

    pub fn modifier(name: impl Into<String>) -> Self {
        Self::Modifier(name.into())
    }

    /// Returns the final if this element is one.
    pub fn as_final(&self) -> Option<&Final> {
        match self {
            Self::Final(fin) => Some(fin),
            Self::Consonant(_) | Self::Modifier(_) => None,
        }
    }

    /// Returns `true` if this element is a reversed final.
    pub fn is_reversed(&self) -> bool {
        self.as_final().is_some_and(Final::is_reversed)
    }
}

impl From<Final> for Element {
    fn from(fin: Final) -> Self {
        Self::Final(fin)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consonant(name) if name.is_empty() => write!(f, "consonant ∅"),
            Self::Consonant(name) => write!(f, "consonant `{name}`"),
            Self::Modifier(name) => write!(f, "modifier `{name}`"),
            Self::Final(fin) => write!(f, "final `{fin}`"),
        }
    }
}

/// One glyph unit: a main element with ordered prefix and suffix elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    #[serde(default, skip_serializing_if = "is_false")]
    proper: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    hyphen: bool,
    #[serde(default)]
    pre: Vec<Element>,
    main: Element,
    #[serde(default)]
    post: Vec<Element>,
}

impl Character {
    /// Create a character with the given main element and no affixes.
    pub fn new(main: Element) -> Self {
        Self {
            proper: false,
            hyphen: false,
            pre: Vec::new(),
            main,
            post: Vec::new(),
        }
    }

    /// Set the prefix elements, in drawing order.
    pub fn with_pre(mut self, pre: Vec<Element>) -> Self {
        self.pre = pre;
        self
    }

    /// Set the suffix elements, in drawing order.
    pub fn with_post(mut self, post: Vec<Element>) -> Self {
        self.post = post;
        self
    }

    /// Mark this character as part of a proper noun.
    pub fn with_proper(mut self, proper: bool) -> Self {
        self.proper = proper;
        self
    }

    /// Mark this character as following a morpheme boundary.
    pub fn with_hyphen(mut self, hyphen: bool) -> Self {
        self.hyphen = hyphen;
        self
    }

    pub fn is_proper(&self) -> bool {
        self.proper
    }

    pub fn is_hyphen(&self) -> bool {
        self.hyphen
    }

    pub fn main(&self) -> &Element {
        &self.main
    }

    pub fn pre(&self) -> &[Element] {
        &self.pre
    }

    pub fn post(&self) -> &[Element] {
        &self.post
    }

    /// Iterates `pre`, then `main`, then `post`: left-to-right reading order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.pre
            .iter()
            .chain(std::iter::once(&self.main))
            .chain(self.post.iter())
    }
}

/// A word: an ordered, non-empty run of characters.
pub type Word = Vec<Character>;

/// Ordered words of ordered characters.
///
/// This is the sole artifact passed between the compiler and the layout
/// engine. Insertion order is rendering order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompiledText {
    words: Vec<Word>,
}

impl CompiledText {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total number of characters across all words.
    pub fn character_count(&self) -> usize {
        self.words.iter().map(Vec::len).sum()
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }
}

impl FromIterator<Word> for CompiledText {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CompiledText {
    type Item = &'a Word;
    type IntoIter = slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_final() {
        let fin = Final::null();
        assert!(fin.is_null());
        assert!(!fin.is_reversed());
        assert!(fin.reversed().is_reversed());
    }

    #[test]
    fn test_element_is_reversed_only_for_finals() {
        assert!(!Element::consonant("n").is_reversed());
        assert!(!Element::modifier("rr").is_reversed());
        assert!(Element::from(Final::null().reversed()).is_reversed());
    }

    #[test]
    fn test_vowel_qualities() {
        let open: Vec<_> = Vowel::ALL.into_iter().filter(|v| v.is_open()).collect();
        assert_eq!(open, vec![Vowel::E, Vowel::A, Vowel::O, Vowel::Eh]);

        let long: Vec<_> = Vowel::ALL.into_iter().filter(|v| v.is_long()).collect();
        assert_eq!(long, vec![Vowel::Oo, Vowel::Ii, Vowel::Uu]);
    }

    #[test]
    fn test_character_reading_order() {
        let character = Character::new(Element::consonant("h"))
            .with_pre(vec![Element::consonant("x")])
            .with_post(vec![Final::new(None, Some(Vowel::Oo), None).into()]);

        let names: Vec<String> = character.elements().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec!["consonant `x`", "consonant `h`", "final `oo`"]
        );
    }

    #[test]
    fn test_final_display() {
        let fin = Final::new(Some(Glide::U), Some(Vowel::E), Some(Coda::Ng)).reversed();
        assert_eq!(fin.to_string(), "ueng~");
        assert_eq!(Final::null().to_string(), "∅");
    }

    #[test]
    fn test_compiled_text_counts() {
        let text = CompiledText::new(vec![
            vec![Character::new(Element::consonant("a")); 2],
            vec![Character::new(Element::consonant("b"))],
        ]);
        assert_eq!(text.words().len(), 2);
        assert_eq!(text.character_count(), 3);
        assert!(!text.is_empty());
        assert!(CompiledText::default().is_empty());
    }
}
