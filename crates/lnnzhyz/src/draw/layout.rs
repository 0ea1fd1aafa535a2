//! Glyph placement for one text.
//!
//! Characters are laid out left to right on a single line. Each word is
//! joined by a bottom line at `y = 12`; characters with affixes connected at
//! the top get a top line at `y = 0`.

use log::debug;

use lnnzhyz_core::{
    glyph::{self, AFFIX_WIDTH, CHARACTER_GAP, CONSONANT_WIDTH, COLUMN_HEIGHT, Flip, NARROW_MAIN_WIDTH},
    semantic::{Character, Element, Final},
};

use super::{DrawError, path::PathData};

/// Index of the first element matching `pred`, or `elements.len()`.
fn first_index(elements: &[Element], pred: impl Fn(&Element) -> bool) -> usize {
    elements.iter().position(pred).unwrap_or(elements.len())
}

/// One past the index of the last element matching `pred`, or `0`.
fn last_index_end(elements: &[Element], pred: impl Fn(&Element) -> bool) -> usize {
    elements.iter().rposition(pred).map_or(0, |index| index + 1)
}

fn affix_offset(count: usize) -> i32 {
    // Characters hold a handful of affixes
    AFFIX_WIDTH * count as i32
}

fn main_width(main: &Element) -> i32 {
    match main {
        Element::Consonant(_) => CONSONANT_WIDTH,
        Element::Modifier(_) | Element::Final(_) => NARROW_MAIN_WIDTH,
    }
}

/// Whether a prefix joins the top line of its character.
///
/// Reversed finals hang from the bottom line; those with a coda or a long
/// vowel do not reach the top at all.
fn connects_top(pre: &Element) -> bool {
    match pre.as_final() {
        Some(fin) if fin.is_reversed() => {
            fin.coda().is_none() && !fin.vowel().is_some_and(|vowel| vowel.is_long())
        }
        _ => true,
    }
}

/// The line joining the characters of a word at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BottomLine {
    pub start_x: i32,
    pub end_x: i32,
    /// Positions of the morpheme boundary ticks.
    pub hyphens: Vec<i32>,
}

impl BottomLine {
    /// Measure the bottom line of `word` starting at `x`, or `None` for an
    /// empty word.
    pub fn measure(word: &[Character], x: i32) -> Option<Self> {
        let (first, last) = (word.first()?, word.last()?);

        let start_x = x + affix_offset(first_index(first.pre(), Element::is_reversed));
        let mut hyphens = Vec::new();
        let mut cursor = x;
        for (index, character) in word.iter().enumerate() {
            if character.is_hyphen() {
                hyphens.push(cursor - 2);
            }
            if index + 1 == word.len() {
                break;
            }
            cursor += character_width(character);
        }

        let main_end = cursor + affix_offset(last.pre().len()) + main_width(last.main());
        let end_x = main_end + affix_offset(last_index_end(last.post(), Element::is_reversed));

        Some(Self {
            start_x,
            end_x,
            hyphens,
        })
    }
}

/// Horizontal advance of a character, including the gap after it.
pub(crate) fn character_width(character: &Character) -> i32 {
    affix_offset(character.pre().len())
        + main_width(character.main())
        + affix_offset(character.post().len())
        + CHARACTER_GAP
}

/// Pen state while drawing a text.
#[derive(Debug, Default)]
pub(crate) struct LayoutContext {
    x: i32,
    path: PathData,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pen position, which is the width drawn so far.
    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn into_path(self) -> PathData {
        self.path
    }

    pub fn draw_word(&mut self, word: &[Character]) -> Result<(), DrawError> {
        let Some(bottom) = BottomLine::measure(word, self.x) else {
            return Ok(());
        };

        for (index, character) in word.iter().enumerate() {
            // Only the last character's suffixes are bounded by the bottom line
            let bottom_end = if index + 1 == word.len() {
                bottom.end_x
            } else {
                i32::MAX
            };
            self.draw_character(character, bottom.start_x, bottom_end)?;
        }

        self.path.move_to(bottom.start_x, COLUMN_HEIGHT);
        for &tick in &bottom.hyphens {
            self.path.horizontal_to(tick);
            self.path.vertical(2);
            self.path.horizontal(2);
            self.path.vertical(-2);
        }
        self.path.horizontal_to(bottom.end_x);

        debug!(
            start_x = bottom.start_x,
            end_x = bottom.end_x,
            hyphens = bottom.hyphens.len(),
            characters = word.len();
            "Word drawn"
        );
        Ok(())
    }

    fn draw_character(
        &mut self,
        character: &Character,
        bottom_start: i32,
        bottom_end: i32,
    ) -> Result<(), DrawError> {
        let x = self.x;
        let pre = character.pre();
        let proper_end = x + affix_offset(first_index(pre, connects_top));
        let top_start = x + affix_offset(first_index(pre, |el| !el.is_reversed()));
        let main_x = x + affix_offset(pre.len());

        if character.is_proper() {
            self.path.move_to(x, -2);
            self.path.vertical(2);
            if proper_end > x && proper_end <= top_start {
                self.path.horizontal_to(proper_end);
            }
        }
        if top_start < main_x {
            if !character.is_proper() || proper_end == x || proper_end < top_start {
                self.path.move_to(top_start, 0);
            }
            self.path.horizontal_to(main_x);
        }

        for element in pre {
            let shrink = if element.is_reversed() {
                self.x < proper_end || self.x > top_start
            } else {
                self.x > bottom_start
            };
            self.draw_affix(element, self.x, shrink, true)?;
            self.x += AFFIX_WIDTH;
        }

        self.draw_main(character.main())?;

        let post = character.post();
        if !post.is_empty() {
            let top_end = self.x + affix_offset(last_index_end(post, |el| !el.is_reversed()));
            if top_end > self.x {
                self.path.move_to(self.x, 0);
                self.path.horizontal_to(top_end);
            }
            for element in post {
                self.x += AFFIX_WIDTH;
                let shrink = if element.is_reversed() {
                    self.x < top_end
                } else {
                    self.x < bottom_end
                };
                self.draw_affix(element, self.x, shrink, false)?;
            }
        }

        self.x += CHARACTER_GAP;
        Ok(())
    }

    fn draw_main(&mut self, main: &Element) -> Result<(), DrawError> {
        let x = self.x;
        match main {
            Element::Modifier(name) => {
                let fragment =
                    glyph::modifier(name).ok_or_else(|| DrawError::UnknownModifier(name.clone()))?;
                self.path.fragment((x, 0), fragment, Flip::NONE, false);
            }
            Element::Consonant(name) => {
                let fragment = glyph::consonant(name)
                    .ok_or_else(|| DrawError::UnknownConsonant(name.clone()))?;
                self.path.fragment((x, 0), fragment, Flip::NONE, false);
            }
            Element::Final(fin) => {
                self.path.move_to(x, 0);
                self.path.horizontal(2);
                self.draw_final(fin, x + 2, false, false);
            }
        }
        self.x += main_width(main);
        Ok(())
    }

    /// Draw a prefix (`flip_x`), a suffix or a final used as `main` whose
    /// inner column ends at `x`.
    fn draw_affix(
        &mut self,
        element: &Element,
        x: i32,
        shrink: bool,
        flip_x: bool,
    ) -> Result<(), DrawError> {
        match element {
            Element::Consonant(name) => {
                let fragment = glyph::narrow_consonant(name)
                    .ok_or_else(|| DrawError::UnknownAffixConsonant(name.clone()))?;
                let origin_x = if flip_x { x } else { x - 2 };
                self.path.fragment((origin_x, 0), fragment, Flip::NONE, shrink);
            }
            Element::Modifier(name) => {
                let fragment =
                    glyph::modifier(name).ok_or_else(|| DrawError::UnknownModifier(name.clone()))?;
                self.path.fragment((x - 2, 0), fragment, Flip::NONE, false);
            }
            Element::Final(fin) => self.draw_final(fin, x, shrink, flip_x),
        }
        Ok(())
    }

    fn draw_final(&mut self, fin: &Final, x: i32, shrink: bool, flip_x: bool) {
        let reversed = fin.is_reversed();
        let flip = Flip::new(flip_x, reversed);
        let sign = if reversed { -1 } else { 1 };
        let side_x = if flip_x { x + 2 } else { x - 2 };
        let top = if reversed { COLUMN_HEIGHT } else { 0 };

        if let Some(glide) = fin.glide() {
            self.path.fragment((side_x, top), glyph::glide(glide), flip, false);
        }

        self.path.move_to(x, top);
        match fin.vowel() {
            Some(vowel) => {
                self.path.strokes((x, top), glyph::vowel(vowel), flip, false);
                if let Some(coda) = fin.coda() {
                    let coda_y = if reversed { 2 } else { 10 };
                    self.path.fragment((side_x, coda_y), glyph::coda(coda), flip, false);
                } else if vowel.is_open() {
                    self.path.vertical(sign * if shrink { 4 } else { 6 });
                }
            }
            None => self.path.vertical(sign * if shrink { 10 } else { 12 }),
        }
    }
}
