//! Shidinn grammar over the Shidinn chat alphabet.
//!
//! Every letter stands for one element. A character is a run of radical
//! letters, an onset letter, an optional glide, a nucleus letter and another
//! run of radicals. The onset becomes `main`; everything before it is `pre`
//! and the nucleus (with its glide) opens `post`.
//!
//! When several splits are possible the leading radical run is taken as long
//! as possible, and a glide is preferred over reading the same letter as a
//! radical.

use lnnzhyz_core::semantic::{Coda, Element, Final, Glide, Vowel};

use crate::grammar::{CharacterBody, Grammar, Rule};

pub(crate) static GRAMMAR: Grammar = Grammar {
    rules: &[
        Rule {
            name: "full",
            attempt: full,
        },
        Rule {
            name: "vowelless",
            attempt: vowelless,
        },
        Rule {
            name: "letter",
            attempt: single_letter,
        },
    ],
};

/// Where a consonant letter stands inside its character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Onset,
    Radical,
}

fn is_radical(letter: char) -> bool {
    matches!(letter, '1'..='8' | 'A' | 'B' | 'D' | 'E' | 'F' | 'H' | 'L' | 'N' | 'T' | 'V' | 'Y' | 'a'..='z')
}

fn is_onset(letter: char) -> bool {
    matches!(letter, '4' | '5' | '7' | 'B' | 'D' | 'F' | 'H' | 'N' | 'b'..='d' | 'f'..='h' | 'j'..='n' | 'p'..='t' | 'v'..='z')
}

fn consonant(letter: char, position: Position) -> Option<&'static str> {
    let name = match letter {
        'b' => "b",
        'p' => "p",
        'm' => "m",
        'j' => "j",
        'q' => "q",
        'x' => "x",
        'z' => "z",
        's' => "s",
        'r' => "r",
        'l' => "l",
        'd' => "d",
        't' => "t",
        'g' => "g",
        'k' => "k",
        'h' => "h",
        'y' => "yj",
        'w' => "f",
        'D' => "c",
        'H' => "nz",
        'N' => "ng",
        '4' => "",
        '5' => "ngw",
        'v' => "lw",
        'F' => "dw",
        '7' => "tw",
        'B' => "gw",
        'c' => "kw",
        'f' => "fw",
        'n' => match position {
            Position::Onset => "nj",
            Position::Radical => "n",
        },
        _ => return None,
    };
    Some(name)
}

fn glide(letter: char) -> Option<Glide> {
    match letter {
        'i' => Some(Glide::I),
        'u' => Some(Glide::U),
        _ => None,
    }
}

fn nucleus(letter: char) -> Option<Final> {
    let (vowel, coda) = match letter {
        'a' => (Vowel::A, None),
        'e' => (Vowel::E, None),
        'o' => (Vowel::Oo, None),
        'E' => (Vowel::Ii, None),
        'A' => (Vowel::Uu, None),
        '1' => (Vowel::Ih, None),
        'Y' => (Vowel::A, Some(Coda::I)),
        'L' => (Vowel::A, Some(Coda::U)),
        '6' => (Vowel::E, Some(Coda::U)),
        '2' => (Vowel::A, Some(Coda::N)),
        'T' => (Vowel::A, Some(Coda::Ng)),
        '8' => (Vowel::E, Some(Coda::Ng)),
        '3' => (Vowel::E, Some(Coda::N)),
        'V' => (Vowel::E, Some(Coda::I)),
        _ => return None,
    };
    Some(Final::new(None, Some(vowel), coda))
}

/// The element a letter stands for at `position`.
fn letter(letter: char, position: Position) -> Option<Element> {
    if let Some(name) = consonant(letter, position) {
        return Some(Element::consonant(name));
    }
    if let Some(glide) = glide(letter) {
        return Some(Final::new(Some(glide), None, None).into());
    }
    nucleus(letter).map(Element::Final)
}

fn radicals(letters: &[char]) -> Option<Vec<Element>> {
    letters
        .iter()
        .map(|&l| {
            if is_radical(l) {
                letter(l, Position::Radical)
            } else {
                None
            }
        })
        .collect()
}

/// Try every split `pre · onset · glide? · nucleus? · post`, longest `pre`
/// first.
fn split(body: &str, needs_nucleus: bool) -> Option<CharacterBody> {
    let letters: Vec<char> = body.chars().collect();

    for onset_at in (0..letters.len()).rev() {
        let onset = letters[onset_at];
        if !is_onset(onset) {
            continue;
        }
        let Some(pre) = radicals(&letters[..onset_at]) else {
            continue;
        };
        let Some(main) = consonant(onset, Position::Onset) else {
            continue;
        };

        let after = &letters[onset_at + 1..];
        for with_glide in [true, false] {
            let (glide, rest) = match (with_glide, after.split_first()) {
                (true, Some((&first, rest))) => match glide(first) {
                    Some(glide) => (Some(glide), rest),
                    None => continue,
                },
                (true, None) => continue,
                (false, _) => (None, after),
            };

            let (fin, rest) = if needs_nucleus {
                let Some((&first, rest)) = rest.split_first() else {
                    continue;
                };
                let Some(fin) = nucleus(first) else {
                    continue;
                };
                (fin.with_glide(glide), rest)
            } else {
                let Some(glide) = glide else {
                    continue;
                };
                (Final::new(Some(glide), None, None), rest)
            };

            let Some(trailing) = radicals(rest) else {
                continue;
            };

            let mut post = Vec::with_capacity(trailing.len() + 1);
            post.push(fin.into());
            post.extend(trailing);
            return Some(
                CharacterBody::new(Element::consonant(main))
                    .with_pre(pre)
                    .with_post(post),
            );
        }
    }
    None
}

fn full(body: &str) -> Option<CharacterBody> {
    split(body, true)
}

fn vowelless(body: &str) -> Option<CharacterBody> {
    split(body, false)
}

fn single_letter(body: &str) -> Option<CharacterBody> {
    let mut chars = body.chars();
    let (Some(only), None) = (chars.next(), chars.next()) else {
        return None;
    };
    if !is_radical(only) {
        return None;
    }
    letter(only, Position::Onset).map(CharacterBody::new)
}
