use lnnzhyz_core::semantic::{Character, Coda, CompiledText, Element, Final, Glide, Vowel};
use lnnzhyz_parser::{Language, compile, compile_mandarin, compile_shidinn};
use proptest::{prelude::*, test_runner::TestCaseError};

fn fin(glide: Option<Glide>, vowel: Option<Vowel>, coda: Option<Coda>) -> Element {
    Final::new(glide, vowel, coda).into()
}

fn consonant(name: &str) -> Element {
    Element::consonant(name)
}

fn character(pre: Vec<Element>, main: Element, post: Vec<Element>) -> Character {
    Character::new(main).with_pre(pre).with_post(post)
}

#[test]
fn test_mandarin_text() {
    let text = compile_mandarin("^zhung1_hua2_y3_z4").expect("Failed to compile");

    let expected = CompiledText::new(vec![vec![
        character(
            vec![],
            consonant("zh"),
            vec![fin(Some(Glide::U), Some(Vowel::E), Some(Coda::Ng))],
        )
        .with_proper(true),
        character(
            vec![fin(Some(Glide::U), Some(Vowel::A), None)],
            consonant("h"),
            vec![],
        ),
        character(
            vec![Final::new(Some(Glide::Y), None, None).reversed().into()],
            consonant(""),
            vec![],
        ),
        character(vec![], consonant("z"), vec![Final::null().reversed().into()]),
    ]]);
    assert_eq!(text, expected);
}

#[test]
fn test_mandarin_special_spellings() {
    let text = compile_mandarin("hm hng   ng1   iung1   eh1   o1 ong1 ou1 uo1 bo1 hong1 hou1")
        .expect("Failed to compile");

    let post_only = |main: &str, post: Element| vec![character(vec![], consonant(main), vec![post])];
    let expected = CompiledText::new(vec![
        post_only("h", consonant("m")),
        post_only("h", consonant("")),
        post_only("", Final::null().into()),
        post_only("", fin(Some(Glide::Y), Some(Vowel::E), Some(Coda::Ng))),
        post_only("", fin(None, Some(Vowel::Eh), None)),
        post_only("", fin(None, Some(Vowel::O), None)),
        post_only("", fin(None, Some(Vowel::O), Some(Coda::Ng))),
        post_only("", fin(None, Some(Vowel::E), Some(Coda::U))),
        post_only("", fin(Some(Glide::U), Some(Vowel::E), None)),
        post_only("b", fin(Some(Glide::U), Some(Vowel::E), None)),
        post_only("h", fin(Some(Glide::U), Some(Vowel::E), Some(Coda::Ng))),
        post_only("h", fin(None, Some(Vowel::E), Some(Coda::U))),
    ]);
    assert_eq!(text, expected);
}

#[test]
fn test_mandarin_letterals() {
    let text = compile_mandarin("8_1 ^L_^N_^N Xa").expect("Failed to compile");

    let letteral = |name: &str| Character::new(consonant(name));
    let expected = CompiledText::new(vec![
        vec![letteral("8"), letteral("1")],
        vec![
            letteral("l").with_proper(true),
            letteral("n").with_proper(true),
            letteral("n").with_proper(true),
        ],
        vec![letteral("xa")],
    ]);
    assert_eq!(text, expected);
}

#[test]
fn test_mandarin_hyphens() {
    let text = compile_mandarin("i1_xin1-i1_i4").expect("Failed to compile");

    let i = fin(Some(Glide::I), None, None);
    let expected = CompiledText::new(vec![vec![
        character(vec![], consonant(""), vec![i.clone()]),
        character(
            vec![],
            consonant("x"),
            vec![fin(Some(Glide::I), Some(Vowel::E), Some(Coda::N))],
        ),
        character(vec![], consonant(""), vec![i]).with_hyphen(true),
        character(
            vec![],
            consonant(""),
            vec![Final::new(Some(Glide::I), None, None).reversed().into()],
        ),
    ]]);
    assert_eq!(text, expected);
}

#[test]
fn test_mandarin_ni3_hau3() {
    let text = compile_mandarin("ni3_hau3").expect("Failed to compile");
    let ni = &text.words()[0][0];

    assert_eq!(ni.main(), &consonant("n"));
    assert_eq!(
        ni.pre(),
        &[Element::from(Final::new(Some(Glide::I), None, None).reversed())]
    );
}

#[test]
fn test_shidinn_text() {
    let text = compile_shidinn("Vnu8_AHL ^xdi8_aho").expect("Failed to compile");

    let expected = CompiledText::new(vec![
        vec![
            character(
                vec![fin(None, Some(Vowel::E), Some(Coda::I))],
                consonant("nj"),
                vec![fin(Some(Glide::U), Some(Vowel::E), Some(Coda::Ng))],
            ),
            character(
                vec![fin(None, Some(Vowel::Uu), None)],
                consonant("nz"),
                vec![fin(None, Some(Vowel::A), Some(Coda::U))],
            ),
        ],
        vec![
            character(
                vec![consonant("x")],
                consonant("d"),
                vec![fin(Some(Glide::I), Some(Vowel::E), Some(Coda::Ng))],
            )
            .with_proper(true),
            character(
                vec![fin(None, Some(Vowel::A), None)],
                consonant("h"),
                vec![fin(None, Some(Vowel::Oo), None)],
            ),
        ],
    ]);
    assert_eq!(text, expected);
}

#[test]
fn test_shidinn_complex_text() {
    let text = compile_shidinn("yy8i_xho_kD3H t38_gzoT xd8").expect("Failed to compile");

    let expected = CompiledText::new(vec![
        vec![
            character(
                vec![consonant("yj")],
                consonant("yj"),
                vec![
                    fin(None, Some(Vowel::E), Some(Coda::Ng)),
                    fin(Some(Glide::I), None, None),
                ],
            ),
            character(
                vec![consonant("x")],
                consonant("h"),
                vec![fin(None, Some(Vowel::Oo), None)],
            ),
            character(
                vec![consonant("k")],
                consonant("c"),
                vec![fin(None, Some(Vowel::E), Some(Coda::N)), consonant("nz")],
            ),
        ],
        vec![
            character(
                vec![],
                consonant("t"),
                vec![
                    fin(None, Some(Vowel::E), Some(Coda::N)),
                    fin(None, Some(Vowel::E), Some(Coda::Ng)),
                ],
            ),
            character(
                vec![consonant("g")],
                consonant("z"),
                vec![
                    fin(None, Some(Vowel::Oo), None),
                    fin(None, Some(Vowel::A), Some(Coda::Ng)),
                ],
            ),
        ],
        vec![character(
            vec![consonant("x")],
            consonant("d"),
            vec![fin(None, Some(Vowel::E), Some(Coda::Ng))],
        )],
    ]);
    assert_eq!(text, expected);
}

#[test]
fn test_shidinn_hyphens() {
    let text = compile_shidinn("3-yruL").expect("Failed to compile");

    let expected = CompiledText::new(vec![vec![
        Character::new(fin(None, Some(Vowel::E), Some(Coda::N))),
        character(
            vec![consonant("yj")],
            consonant("r"),
            vec![fin(Some(Glide::U), Some(Vowel::A), Some(Coda::U))],
        )
        .with_hyphen(true),
    ]]);
    assert_eq!(text, expected);
}

#[test]
fn test_shidinn_bare_null_consonant() {
    let text = compile_shidinn("4-yruL").expect("Failed to compile");
    assert_eq!(text.words()[0][0], Character::new(consonant("")));
}

#[test]
fn test_empty_input_compiles_to_nothing() {
    for language in [Language::Mandarin, Language::Shidinn] {
        let text = compile(language, "  \n ").expect("Failed to compile");
        assert!(text.is_empty());
    }
}

#[test]
fn test_invalid_character_fails_whole_text() {
    let err = compile_mandarin("ni3 xyz hau3").unwrap_err();

    assert_eq!(err.diagnostics().len(), 1);
    assert_eq!(
        err.to_string(),
        "error[E100]: invalid Mandarin character `xyz`"
    );
}

// =============================================================================
// Property-Based Tests
// =============================================================================

const SYLLABLES: &[&str] = &[
    "ni3", "hau3", "zhung1", "hua2", "xin1", "shr4", "ai4", "^ma1", "-de5x", "iung1", "Er", "8",
];

fn check_order_is_preserved(words: &[Vec<&str>]) -> Result<(), TestCaseError> {
    let source = words
        .iter()
        .map(|word| word.join("_"))
        .collect::<Vec<_>>()
        .join(" ");
    let Ok(compiled) = compile_mandarin(&source) else {
        // Inputs containing an invalid syllable are rejected as a whole
        prop_assert!(source.contains("-de5x"));
        return Ok(());
    };

    prop_assert_eq!(compiled.words().len(), words.len());
    for (word, expected) in compiled.words().iter().zip(words) {
        prop_assert_eq!(word.len(), expected.len());
        for (character, syllable) in word.iter().zip(expected) {
            let single = compile_mandarin(syllable).map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(character, &single.words()[0][0]);
        }
    }
    Ok(())
}

// =============================================================================
// Proptest Wrappers
// =============================================================================

proptest! {
    #[test]
    fn compiling_preserves_word_and_character_order(
        words in proptest::collection::vec(
            proptest::collection::vec(proptest::sample::select(SYLLABLES), 1..4),
            1..4,
        )
    ) {
        check_order_is_preserved(&words)?;
    }
}
