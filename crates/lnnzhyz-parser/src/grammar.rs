//! Ordered rule dispatch shared by the language grammars.

use log::trace;

use lnnzhyz_core::semantic::{Character, Element, Final};

/// The parts of a character produced by a grammar rule.
///
/// Markers (`proper`, `hyphen`) are attached by the compiler afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CharacterBody {
    pub main: Element,
    pub pre: Vec<Element>,
    pub post: Vec<Element>,
}

impl CharacterBody {
    pub fn new(main: Element) -> Self {
        Self {
            main,
            pre: Vec::new(),
            post: Vec::new(),
        }
    }

    pub fn with_pre(mut self, pre: Vec<Element>) -> Self {
        self.pre = pre;
        self
    }

    pub fn with_post(mut self, post: Vec<Element>) -> Self {
        self.post = post;
        self
    }

    /// Place a toned final: tones 2 and 3 go before `main`, tones 3 and 4 are
    /// reversed.
    pub fn with_tone(mut self, fin: Final, tone: u8) -> Self {
        let fin = fin.with_reversed(matches!(tone, 3 | 4));
        if matches!(tone, 2 | 3) {
            self.pre.insert(0, fin.into());
        } else {
            self.post.push(fin.into());
        }
        self
    }

    pub fn into_character(self, proper: bool, hyphen: bool) -> Character {
        Character::new(self.main)
            .with_pre(self.pre)
            .with_post(self.post)
            .with_proper(proper)
            .with_hyphen(hyphen)
    }
}

/// A named strategy matching the whole body of a character.
#[derive(Clone, Copy)]
pub(crate) struct Rule {
    pub name: &'static str,
    pub attempt: fn(&str) -> Option<CharacterBody>,
}

/// An ordered list of rules; the first match wins.
#[derive(Clone, Copy)]
pub(crate) struct Grammar {
    pub rules: &'static [Rule],
}

impl Grammar {
    /// Returns the body produced by the first matching rule.
    pub fn apply(&self, body: &str) -> Option<CharacterBody> {
        self.rules.iter().find_map(|rule| {
            let matched = (rule.attempt)(body)?;
            trace!(body = body, rule = rule.name; "Character matched");
            Some(matched)
        })
    }

    /// Returns the name of the first rule that matches `body`.
    #[cfg(test)]
    pub fn matching_rule(&self, body: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| (rule.attempt)(body).is_some())
            .map(|rule| rule.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never(_: &str) -> Option<CharacterBody> {
        None
    }

    fn anything(_: &str) -> Option<CharacterBody> {
        Some(CharacterBody::new(Element::consonant("")))
    }

    fn digit(body: &str) -> Option<CharacterBody> {
        body.chars()
            .all(|c| c.is_ascii_digit())
            .then(|| CharacterBody::new(Element::consonant(body)))
    }

    static RULES: &[Rule] = &[
        Rule {
            name: "never",
            attempt: never,
        },
        Rule {
            name: "digit",
            attempt: digit,
        },
        Rule {
            name: "anything",
            attempt: anything,
        },
    ];

    #[test]
    fn test_first_matching_rule_wins() {
        let grammar = Grammar { rules: RULES };

        assert_eq!(grammar.matching_rule("7"), Some("digit"));
        assert_eq!(grammar.matching_rule("x"), Some("anything"));
        assert_eq!(grammar.apply("7").unwrap().main, Element::consonant("7"));
    }

    #[test]
    fn test_tone_placement() {
        let fin = Final::null();
        let body = |tone| CharacterBody::new(Element::consonant("z")).with_tone(fin, tone);

        assert_eq!(body(1).post, vec![Element::Final(fin)]);
        assert_eq!(body(2).pre, vec![Element::Final(fin)]);
        assert_eq!(body(3).pre, vec![Element::Final(fin.reversed())]);
        assert_eq!(body(4).post, vec![Element::Final(fin.reversed())]);
    }
}
