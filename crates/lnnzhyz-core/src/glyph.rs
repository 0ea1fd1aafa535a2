//! Static stroke fragment tables.
//!
//! Every drawable unit of the script is a short run of [`Stroke`]s, its
//! *fragment*. The layout engine positions the pen at a fragment's origin and
//! then replays the strokes relative to it.
//!
//! Fragments come in four families:
//!
//! - **Wide consonants**: the `main` glyph of a character, [`CONSONANT_WIDTH`] units wide.
//! - **Narrow consonants**: consonants used as affixes, drawn inside a 2 unit column.
//! - **Finals**: glide, vowel and coda fragments, combined at draw time.
//! - **Modifiers**: standalone marks such as the rhotacization mark.
//!
//! Glide, vowel and coda fragments only use relative strokes so that they can
//! be mirrored with [`Stroke::flipped`].
//!
//! # Example
//!
//! ```
//! use lnnzhyz_core::glyph::{self, Flip, Stroke};
//! use lnnzhyz_core::semantic::Glide;
//!
//! assert!(glyph::consonant("zh").is_some());
//! assert!(glyph::consonant("w").is_none());
//!
//! let flipped: Vec<Stroke> = glyph::glide(Glide::U)
//!     .iter()
//!     .map(|stroke| stroke.flipped(Flip::HORIZONTAL))
//!     .collect();
//! assert_eq!(flipped, vec![Stroke::V(4), Stroke::H(-2)]);
//! ```

use crate::semantic::{Coda, Glide, Vowel};

/// Horizontal advance of a wide consonant glyph.
pub const CONSONANT_WIDTH: i32 = 6;
/// Horizontal advance of a modifier or a bare final used as `main`.
pub const NARROW_MAIN_WIDTH: i32 = 2;
/// Horizontal advance of each prefix or suffix element.
pub const AFFIX_WIDTH: i32 = 4;
/// Gap inserted after every character.
pub const CHARACTER_GAP: i32 = 2;
/// Full height of a column, from the top line to the bottom line.
pub const COLUMN_HEIGHT: i32 = 12;
/// Amount by which a shrunk [`Stroke::Stem`] loses length.
pub const SHRINK: i32 = 2;

/// A single pen instruction inside a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stroke {
    /// Relative horizontal line.
    H(i32),
    /// Relative vertical line.
    V(i32),
    /// Relative vertical line that loses [`SHRINK`] units when drawn shrunk.
    Stem(i32),
    /// Relative pen move.
    M(i32, i32),
    /// Pen move relative to the fragment origin.
    At(i32, i32),
}

/// Mirroring applied to a fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Flip {
    pub const NONE: Flip = Flip {
        horizontal: false,
        vertical: false,
    };
    pub const HORIZONTAL: Flip = Flip {
        horizontal: true,
        vertical: false,
    };

    pub fn new(horizontal: bool, vertical: bool) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Stroke {
    /// Returns this stroke mirrored by `flip`.
    pub fn flipped(self, flip: Flip) -> Self {
        let h = |n: i32| if flip.horizontal { -n } else { n };
        let v = |n: i32| if flip.vertical { -n } else { n };
        match self {
            Self::H(n) => Self::H(h(n)),
            Self::V(n) => Self::V(v(n)),
            Self::Stem(n) => Self::Stem(v(n)),
            Self::M(dx, dy) => Self::M(h(dx), v(dy)),
            Self::At(dx, dy) => Self::At(h(dx), v(dy)),
        }
    }

    /// Returns this stroke as drawn with or without the shrink flag.
    pub fn shrunk(self, shrink: bool) -> Self {
        match self {
            Self::Stem(n) if shrink => Self::Stem(n - n.signum() * SHRINK),
            other => other,
        }
    }
}

/// A fragment: the strokes of one drawable unit.
pub type Fragment = &'static [Stroke];

use Stroke::{At, H, M, Stem, V};

// =============================================================================
// Wide consonants
// =============================================================================
//
// Six base shapes, each combined with up to six interior marks.

const WIDE_CONSONANTS: &[(&str, Fragment)] = &[
    // Open-top cup
    ("", &[V(12), H(6), V(-12)]),
    ("b", &[V(12), H(6), V(-12), At(2, 4), V(4)]),
    ("p", &[V(12), H(6), V(-12), At(1, 6), H(4)]),
    ("m", &[V(12), H(6), V(-12), At(4, 4), V(4)]),
    ("f", &[V(12), H(6), V(-12), At(2, 4), V(4), M(2, -4), V(4)]),
    ("v", &[V(12), H(6), V(-12), At(1, 4), H(4), M(-4, 4), H(4)]),
    // Right bracket
    ("d", &[H(6), V(12), H(-6)]),
    ("t", &[H(6), V(12), H(-6), At(2, 4), V(4)]),
    ("n", &[H(6), V(12), H(-6), At(1, 6), H(4)]),
    ("l", &[H(6), V(12), H(-6), At(4, 4), V(4)]),
    ("nj", &[H(6), V(12), H(-6), At(2, 4), V(4), M(2, -4), V(4)]),
    ("nz", &[H(6), V(12), H(-6), At(1, 4), H(4), M(-4, 4), H(4)]),
    // Left bracket
    ("g", &[H(6), M(-6, 0), V(12), H(6)]),
    ("k", &[H(6), M(-6, 0), V(12), H(6), At(2, 4), V(4)]),
    ("h", &[H(6), M(-6, 0), V(12), H(6), At(1, 6), H(4)]),
    ("ng", &[H(6), M(-6, 0), V(12), H(6), At(4, 4), V(4)]),
    ("gw", &[H(6), M(-6, 0), V(12), H(6), At(2, 4), V(4), M(2, -4), V(4)]),
    ("kw", &[H(6), M(-6, 0), V(12), H(6), At(1, 4), H(4), M(-4, 4), H(4)]),
    // Twin stems
    ("j", &[V(12), M(6, -12), V(12)]),
    ("q", &[V(12), M(6, -12), V(12), At(2, 4), V(4)]),
    ("x", &[V(12), M(6, -12), V(12), At(1, 6), H(4)]),
    ("yj", &[V(12), M(6, -12), V(12), At(4, 4), V(4)]),
    ("lw", &[V(12), M(6, -12), V(12), At(2, 4), V(4), M(2, -4), V(4)]),
    ("ngw", &[V(12), M(6, -12), V(12), At(1, 4), H(4), M(-4, 4), H(4)]),
    // Arch
    ("zh", &[V(12), M(0, -12), H(6), V(12)]),
    ("ch", &[V(12), M(0, -12), H(6), V(12), At(2, 4), V(4)]),
    ("sh", &[V(12), M(0, -12), H(6), V(12), At(1, 6), H(4)]),
    ("r", &[V(12), M(0, -12), H(6), V(12), At(4, 4), V(4)]),
    ("dw", &[V(12), M(0, -12), H(6), V(12), At(2, 4), V(4), M(2, -4), V(4)]),
    ("tw", &[V(12), M(0, -12), H(6), V(12), At(1, 4), H(4), M(-4, 4), H(4)]),
    // Tee
    ("z", &[H(6), M(-3, 0), V(12)]),
    ("c", &[H(6), M(-3, 0), V(12), At(1, 4), V(4)]),
    ("s", &[H(6), M(-3, 0), V(12), At(1, 6), H(4)]),
    ("fw", &[H(6), M(-3, 0), V(12), At(5, 4), V(4)]),
    // Numerals: a closed box with binary bars
    ("0", &[H(6), V(12), H(-6), V(-12)]),
    ("1", &[H(6), V(12), H(-6), V(-12), At(1, 3), H(4)]),
    ("2", &[H(6), V(12), H(-6), V(-12), At(1, 5), H(4)]),
    ("3", &[H(6), V(12), H(-6), V(-12), At(1, 3), H(4), M(-4, 2), H(4)]),
    ("4", &[H(6), V(12), H(-6), V(-12), At(1, 7), H(4)]),
    ("5", &[H(6), V(12), H(-6), V(-12), At(1, 3), H(4), M(-4, 4), H(4)]),
    ("6", &[H(6), V(12), H(-6), V(-12), At(1, 5), H(4), M(-4, 2), H(4)]),
    ("7", &[H(6), V(12), H(-6), V(-12), At(1, 3), H(4), M(-4, 2), H(4), M(-4, 2), H(4)]),
    ("8", &[H(6), V(12), H(-6), V(-12), At(1, 9), H(4)]),
    ("9", &[H(6), V(12), H(-6), V(-12), At(1, 3), H(4), M(-4, 6), H(4)]),
    ("xa", &[H(6), V(12), H(-6), V(-12), At(1, 5), H(4), M(-4, 4), H(4)]),
    ("xb", &[H(6), V(12), H(-6), V(-12), At(1, 3), H(4), M(-4, 2), H(4), M(-4, 4), H(4)]),
    ("xc", &[H(6), V(12), H(-6), V(-12), At(1, 7), H(4), M(-4, 2), H(4)]),
    ("xd", &[H(6), V(12), H(-6), V(-12), At(1, 3), H(4), M(-4, 4), H(4), M(-4, 2), H(4)]),
    ("xe", &[H(6), V(12), H(-6), V(-12), At(1, 5), H(4), M(-4, 2), H(4), M(-4, 2), H(4)]),
    ("xf", &[H(6), V(12), H(-6), V(-12), At(1, 3), H(4), M(-4, 2), H(4), M(-4, 2), H(4), M(-4, 2), H(4)]),
];

// =============================================================================
// Narrow consonants
// =============================================================================
//
// Stems shrink when an affix has to compress against its neighbor.

const NARROW_CONSONANTS: &[(&str, Fragment)] = &[
    // Corner
    ("b", &[Stem(12), H(2)]),
    ("p", &[Stem(12), H(2), At(1, 2), V(2)]),
    ("m", &[Stem(12), H(2), At(1, 5), V(2)]),
    ("f", &[Stem(12), H(2), At(1, 2), V(2), At(1, 6), V(2)]),
    ("fw", &[Stem(12), H(2), At(1, 4), V(4)]),
    ("", &[Stem(12), H(2), At(0, 4), H(2)]),
    // Hook
    ("d", &[H(2), Stem(12)]),
    ("t", &[H(2), Stem(12), At(1, 2), V(2)]),
    ("n", &[H(2), Stem(12), At(1, 5), V(2)]),
    ("l", &[H(2), Stem(12), At(1, 2), V(2), At(1, 6), V(2)]),
    ("dw", &[H(2), Stem(12), At(1, 4), V(4)]),
    ("tw", &[H(2), Stem(12), At(0, 4), H(2)]),
    // Rails
    ("j", &[Stem(12), At(2, 0), Stem(12)]),
    ("q", &[Stem(12), At(2, 0), Stem(12), At(1, 2), V(2)]),
    ("x", &[Stem(12), At(2, 0), Stem(12), At(1, 5), V(2)]),
    ("yj", &[Stem(12), At(2, 0), Stem(12), At(1, 2), V(2), At(1, 6), V(2)]),
    ("lw", &[Stem(12), At(2, 0), Stem(12), At(1, 4), V(4)]),
    // Open bracket
    ("z", &[H(2), At(0, 0), Stem(12), H(2)]),
    ("c", &[H(2), At(0, 0), Stem(12), H(2), At(1, 2), V(2)]),
    ("s", &[H(2), At(0, 0), Stem(12), H(2), At(1, 5), V(2)]),
    ("r", &[H(2), At(0, 0), Stem(12), H(2), At(1, 2), V(2), At(1, 6), V(2)]),
    ("nz", &[H(2), At(0, 0), Stem(12), H(2), At(1, 4), V(4)]),
    // Cup
    ("g", &[Stem(12), H(2), Stem(-12)]),
    ("k", &[Stem(12), H(2), Stem(-12), At(1, 2), V(2)]),
    ("h", &[Stem(12), H(2), Stem(-12), At(1, 5), V(2)]),
    ("gw", &[Stem(12), H(2), Stem(-12), At(1, 2), V(2), At(1, 6), V(2)]),
    ("kw", &[Stem(12), H(2), Stem(-12), At(1, 4), V(4)]),
    // Closing bracket
    ("ng", &[H(2), Stem(12), H(-2)]),
    ("ngw", &[H(2), Stem(12), H(-2), At(1, 2), V(2)]),
];

const MODIFIERS: &[(&str, Fragment)] = &[("rr", &[V(4), H(2), V(4)])];

fn lookup(table: &'static [(&'static str, Fragment)], name: &str) -> Option<Fragment> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, fragment)| *fragment)
}

/// Returns the wide glyph of a consonant drawn as `main`.
pub fn consonant(name: &str) -> Option<Fragment> {
    lookup(WIDE_CONSONANTS, name)
}

/// Returns the narrow glyph of a consonant drawn as an affix.
pub fn narrow_consonant(name: &str) -> Option<Fragment> {
    lookup(NARROW_CONSONANTS, name)
}

/// Returns the fragment of a modifier.
pub fn modifier(name: &str) -> Option<Fragment> {
    lookup(MODIFIERS, name)
}

/// Names of every consonant with a wide glyph, longest first.
pub fn consonant_names() -> impl Iterator<Item = &'static str> {
    let mut names: Vec<&'static str> = WIDE_CONSONANTS.iter().map(|(name, _)| *name).collect();
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));
    names.into_iter()
}

/// Names of every consonant with a narrow glyph.
pub fn narrow_consonant_names() -> impl Iterator<Item = &'static str> {
    NARROW_CONSONANTS.iter().map(|(name, _)| *name)
}

/// Names of every modifier.
pub fn modifier_names() -> impl Iterator<Item = &'static str> {
    MODIFIERS.iter().map(|(name, _)| *name)
}

/// Fragment of a glide, starting at the top of the inner column.
pub fn glide(glide: Glide) -> Fragment {
    match glide {
        Glide::I => &[V(4)],
        Glide::U => &[V(4), H(2)],
        Glide::Y => &[V(2), H(2), M(-2, 0), V(2)],
    }
}

/// Fragment of a vowel, starting at the top of the stem.
pub fn vowel(vowel: Vowel) -> Fragment {
    match vowel {
        Vowel::E => &[V(6)],
        Vowel::A => &[V(3), H(-2), M(2, 0), V(3)],
        Vowel::O => &[H(-2), V(6), H(2)],
        Vowel::Eh => &[V(3), H(-2), V(3), H(2)],
        Vowel::Oo => &[V(12), M(-2, -12), V(4)],
        Vowel::Ii => &[V(12), M(-2, -6), H(2)],
        Vowel::Uu => &[V(12), H(-2), V(-4)],
        Vowel::Ih => &[V(12), M(0, -8), H(-2)],
    }
}

/// Fragment of a coda, starting near the bottom of the inner column.
pub fn coda(coda: Coda) -> Fragment {
    match coda {
        Coda::I => &[H(2), V(2)],
        Coda::U => &[V(2), H(2)],
        Coda::N => &[H(2), M(-2, 2), H(2)],
        Coda::Ng => &[H(2), V(2), H(-2)],
        Coda::R => &[V(2), M(2, -2), V(2)],
    }
}
