//! Mandarin grammar over LNNZHYZ romanization.
//!
//! A Mandarin character is one of, in matching order:
//!
//! 1. an interjection, `hm` or `hng`;
//! 2. the null syllable `ng` with a tone;
//! 3. an `eh` syllable, an optional onset followed by `eh` and a tone;
//! 4. a toned syllable, `onset? glide? vowel? coda? tone`;
//! 5. a letteral, a capitalized letter name or a digit.
//!
//! Tones never appear in the compiled model: they only decide on which side
//! of the main consonant the final is drawn and whether it is reversed.

use winnow::{
    Parser as _,
    combinator::{alt, eof, opt, peek, terminated},
    error::{ContextError, ErrMode},
    token::one_of,
};

use lnnzhyz_core::semantic::{Coda, Element, Final, Glide, Vowel};

use crate::grammar::{CharacterBody, Grammar, Rule};

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Single-letter onsets; `zh`, `ch` and `sh` are matched first.
const ONSET_LETTERS: &str = "bpmfdtnlgkhjqxrzcsv";

/// Capital letters that spell a consonant letteral.
const LETTERAL_CONSONANTS: &str = "BPMFDTNLGKHJQXRZCSV";

pub(crate) static GRAMMAR: Grammar = Grammar {
    rules: &[
        Rule {
            name: "interjection",
            attempt: interjection,
        },
        Rule {
            name: "null syllable",
            attempt: null_syllable,
        },
        Rule {
            name: "eh syllable",
            attempt: eh_syllable,
        },
        Rule {
            name: "syllable",
            attempt: toned_syllable,
        },
        Rule {
            name: "letteral",
            attempt: letteral,
        },
    ],
};

fn tone(input: &mut &str) -> IResult<u8> {
    one_of('1'..='4')
        .map(|digit: char| digit as u8 - b'0')
        .parse_next(input)
}

fn onset<'s>(input: &mut &'s str) -> IResult<&'s str> {
    alt((
        "zh",
        "ch",
        "sh",
        one_of(|c: char| ONSET_LETTERS.contains(c)).take(),
    ))
    .parse_next(input)
}

fn glide(input: &mut &str) -> IResult<Glide> {
    alt((
        // `iu` directly before `ng` spells the rounded glide
        terminated("iu", peek("ng")).value(Glide::Y),
        'i'.value(Glide::I),
        'u'.value(Glide::U),
        'y'.value(Glide::Y),
    ))
    .parse_next(input)
}

fn vowel(input: &mut &str) -> IResult<Vowel> {
    alt(('a'.value(Vowel::A), 'e'.value(Vowel::E), 'o'.value(Vowel::O))).parse_next(input)
}

fn coda(input: &mut &str) -> IResult<Coda> {
    alt((
        "ng".value(Coda::Ng),
        'i'.value(Coda::I),
        'u'.value(Coda::U),
        'n'.value(Coda::N),
        'r'.value(Coda::R),
    ))
    .parse_next(input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Syllable<'s> {
    onset: Option<&'s str>,
    glide: Option<Glide>,
    vowel: Option<Vowel>,
    coda: Option<Coda>,
    tone: u8,
}

impl Syllable<'_> {
    fn is_bare(&self) -> bool {
        self.onset.is_none() && self.glide.is_none() && self.vowel.is_none() && self.coda.is_none()
    }

    /// Spell out the final, resolving the back-rounded `o` nucleus.
    ///
    /// Returns `None` for an `o` that no spelling rule accounts for.
    fn final_part(&self) -> Option<Final> {
        let mut glide = self.glide;
        let coda = self.coda;
        let mut vowel = match (self.vowel, coda) {
            (None, Some(_)) => Some(Vowel::E),
            (vowel, _) => vowel,
        };

        if vowel == Some(Vowel::O) {
            if coda == Some(Coda::U) || glide == Some(Glide::U) {
                vowel = Some(Vowel::E);
            } else if glide == Some(Glide::I) && coda == Some(Coda::Ng) {
                glide = Some(Glide::Y);
                vowel = Some(Vowel::E);
            } else if self.onset.is_some() && glide.is_none() {
                glide = Some(Glide::U);
                vowel = Some(Vowel::E);
            } else if glide.is_some() || matches!(coda, Some(Coda::I | Coda::N | Coda::R)) {
                return None;
            }
        }

        Some(Final::new(glide, vowel, coda))
    }
}

fn syllable<'s>(input: &mut &'s str) -> IResult<Syllable<'s>> {
    let (onset, glide, vowel, coda, tone) =
        terminated((opt(onset), opt(glide), opt(vowel), opt(coda), tone), eof)
            .parse_next(input)?;
    Ok(Syllable {
        onset,
        glide,
        vowel,
        coda,
        tone,
    })
}

fn interjection(body: &str) -> Option<CharacterBody> {
    let tail = match body {
        "hm" => "m",
        "hng" => "",
        _ => return None,
    };
    Some(CharacterBody::new(Element::consonant("h")).with_post(vec![Element::consonant(tail)]))
}

fn null_syllable(body: &str) -> Option<CharacterBody> {
    let mut input = body;
    let tone = terminated(("ng", tone), eof)
        .map(|(_, tone)| tone)
        .parse_next(&mut input)
        .ok()?;
    Some(CharacterBody::new(Element::consonant("")).with_tone(Final::null(), tone))
}

fn eh_syllable(body: &str) -> Option<CharacterBody> {
    let mut input = body;
    let (onset, _, tone) = terminated((opt(onset), "eh", tone), eof)
        .parse_next(&mut input)
        .ok()?;
    let fin = Final::new(None, Some(Vowel::Eh), None);
    Some(CharacterBody::new(Element::consonant(onset.unwrap_or(""))).with_tone(fin, tone))
}

fn toned_syllable(body: &str) -> Option<CharacterBody> {
    let mut input = body;
    let syllable = syllable(&mut input).ok()?;
    if syllable.is_bare() {
        return None;
    }
    let fin = syllable.final_part()?;
    let main = Element::consonant(syllable.onset.unwrap_or(""));
    Some(CharacterBody::new(main).with_tone(fin, syllable.tone))
}

fn letteral(body: &str) -> Option<CharacterBody> {
    let glide = |glide: Glide| -> Element { Final::new(Some(glide), None, None).into() };
    let vowel = |vowel: Vowel| -> Element { Final::new(None, Some(vowel), None).into() };

    let main = match body {
        "Zh" => Element::consonant("zh"),
        "Ch" => Element::consonant("ch"),
        "Sh" => Element::consonant("sh"),
        "Er" => Element::modifier("rr"),
        "I" => glide(Glide::I),
        "U" => glide(Glide::U),
        "Y" => glide(Glide::Y),
        "A" => vowel(Vowel::A),
        "O" => vowel(Vowel::O),
        "E" => vowel(Vowel::E),
        _ => match body.as_bytes() {
            [b'X', hex @ b'a'..=b'f'] => Element::consonant(format!("x{}", *hex as char)),
            [digit @ b'0'..=b'9'] => Element::consonant((*digit as char).to_string()),
            [upper] if LETTERAL_CONSONANTS.contains(*upper as char) => {
                Element::consonant(upper.to_ascii_lowercase() as char)
            }
            _ => return None,
        },
    };
    Some(CharacterBody::new(main))
}

#[cfg(test)]
mod tests {
    use proptest::{prelude::*, test_runner::TestCaseError};

    use super::*;

    fn fin(glide: Option<Glide>, vowel: Option<Vowel>, coda: Option<Coda>) -> Element {
        Final::new(glide, vowel, coda).into()
    }

    fn post_final(body: &str) -> Element {
        let matched = GRAMMAR.apply(body).unwrap();
        assert!(matched.pre.is_empty(), "{body}");
        assert_eq!(matched.post.len(), 1, "{body}");
        matched.post[0].clone()
    }

    #[test]
    fn test_interjections() {
        let hm = GRAMMAR.apply("hm").unwrap();
        assert_eq!(hm.main, Element::consonant("h"));
        assert_eq!(hm.post, vec![Element::consonant("m")]);

        let hng = GRAMMAR.apply("hng").unwrap();
        assert_eq!(hng.post, vec![Element::consonant("")]);
    }

    #[test]
    fn test_null_syllable() {
        let ng = GRAMMAR.apply("ng1").unwrap();
        assert_eq!(ng.main, Element::consonant(""));
        assert_eq!(ng.post, vec![Element::Final(Final::null())]);
        assert_eq!(GRAMMAR.matching_rule("ng1"), Some("null syllable"));
    }

    #[test]
    fn test_eh_syllable() {
        assert_eq!(post_final("eh1"), fin(None, Some(Vowel::Eh), None));
        let beh = GRAMMAR.apply("beh1").unwrap();
        assert_eq!(beh.main, Element::consonant("b"));
        assert!(GRAMMAR.apply("ieh1").is_none());
        assert!(GRAMMAR.apply("ehn1").is_none());
    }

    #[test]
    fn test_default_vowel_before_coda() {
        assert_eq!(
            post_final("xin1"),
            fin(Some(Glide::I), Some(Vowel::E), Some(Coda::N))
        );
        assert_eq!(post_final("nr1"), fin(None, Some(Vowel::E), Some(Coda::R)));
    }

    #[test]
    fn test_rounded_glide_before_ng() {
        assert_eq!(
            post_final("iung1"),
            fin(Some(Glide::Y), Some(Vowel::E), Some(Coda::Ng))
        );
        assert_eq!(post_final("yu1"), fin(Some(Glide::Y), Some(Vowel::E), Some(Coda::U)));
    }

    #[test]
    fn test_back_rounded_o_spellings() {
        assert_eq!(post_final("o1"), fin(None, Some(Vowel::O), None));
        assert_eq!(post_final("ong1"), fin(None, Some(Vowel::O), Some(Coda::Ng)));
        assert_eq!(post_final("ou1"), fin(None, Some(Vowel::E), Some(Coda::U)));
        assert_eq!(post_final("uo1"), fin(Some(Glide::U), Some(Vowel::E), None));
        assert_eq!(post_final("bo1"), fin(Some(Glide::U), Some(Vowel::E), None));
        assert_eq!(
            post_final("hong1"),
            fin(Some(Glide::U), Some(Vowel::E), Some(Coda::Ng))
        );
        assert_eq!(post_final("hou1"), fin(None, Some(Vowel::E), Some(Coda::U)));
        assert_eq!(
            post_final("iong1"),
            fin(Some(Glide::Y), Some(Vowel::E), Some(Coda::Ng))
        );
    }

    #[test]
    fn test_unaccounted_o_is_rejected() {
        for body in ["io1", "yo1", "oi1", "on1", "or1", "ion1"] {
            assert!(GRAMMAR.apply(body).is_none(), "{body} should be rejected");
        }
    }

    #[test]
    fn test_syllable_needs_tone_and_content() {
        assert!(GRAMMAR.apply("hau").is_none());
        assert!(GRAMMAR.apply("hau5").is_none());
        assert!(GRAMMAR.apply("hau33").is_none());
        assert_eq!(GRAMMAR.matching_rule("3"), Some("letteral"));
    }

    #[test]
    fn test_onset_only_syllable_gets_null_final() {
        let z = GRAMMAR.apply("z4").unwrap();
        assert_eq!(z.main, Element::consonant("z"));
        assert_eq!(z.post, vec![Element::Final(Final::null().reversed())]);
    }

    #[test]
    fn test_letterals() {
        let main = |body| GRAMMAR.apply(body).unwrap().main;

        assert_eq!(main("Zh"), Element::consonant("zh"));
        assert_eq!(main("Er"), Element::modifier("rr"));
        assert_eq!(main("Xa"), Element::consonant("xa"));
        assert_eq!(main("8"), Element::consonant("8"));
        assert_eq!(main("L"), Element::consonant("l"));
        assert_eq!(main("V"), Element::consonant("v"));
        assert_eq!(main("Y"), fin(Some(Glide::Y), None, None));
        assert_eq!(main("O"), fin(None, Some(Vowel::O), None));

        for body in ["W", "Xg", "ZH", "er", "10"] {
            assert!(GRAMMAR.apply(body).is_none(), "{body} should be rejected");
        }
    }

    // =========================================================================
    // Property-Based Tests
    // =========================================================================

    const LETTERALS: &[&str] = &[
        "Zh", "Ch", "Sh", "Er", "I", "U", "Y", "A", "O", "E", "Xa", "Xb", "Xc", "Xd", "Xe", "Xf",
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "B", "P", "M", "F", "D", "T", "N", "L",
        "G", "K", "H", "J", "Q", "X", "R", "Z", "C", "S", "V",
    ];

    fn check_letteral_reaches_letteral_rule(body: &str) -> Result<(), TestCaseError> {
        prop_assert_eq!(GRAMMAR.matching_rule(body), Some("letteral"));
        Ok(())
    }

    fn check_tone_placement(onset: &str, rime: &str, tone: u8) -> Result<(), TestCaseError> {
        let body = format!("{onset}{rime}{tone}");
        if GRAMMAR.matching_rule(&body) == Some("letteral") {
            return Ok(());
        }
        let Some(matched) = GRAMMAR.apply(&body) else {
            return Ok(());
        };
        let placed = if matches!(tone, 2 | 3) {
            prop_assert!(matched.post.is_empty(), "{}", body);
            &matched.pre
        } else {
            prop_assert!(matched.pre.is_empty(), "{}", body);
            &matched.post
        };
        prop_assert_eq!(placed.len(), 1, "{}", body);
        prop_assert_eq!(placed[0].is_reversed(), matches!(tone, 3 | 4), "{}", body);
        Ok(())
    }

    // =========================================================================
    // Proptest Wrappers
    // =========================================================================

    proptest! {
        #[test]
        fn letterals_are_not_syllables(body in proptest::sample::select(LETTERALS)) {
            check_letteral_reaches_letteral_rule(body)?;
        }

        #[test]
        fn tones_place_the_final(
            onset in proptest::sample::select(vec!["", "b", "zh", "n", "x", "s"]),
            rime in proptest::sample::select(vec!["", "i", "u", "a", "e", "o", "ia", "uai", "ang", "iung", "eh", "ou", "ng"]),
            tone in 1u8..=4,
        ) {
            check_tone_placement(onset, rime, tone)?;
        }
    }
}
