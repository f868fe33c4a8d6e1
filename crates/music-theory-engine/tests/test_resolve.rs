//! End-to-end resolution tests for chords, scales and keys.

use music_theory_core::{ErrorCode, Spelling};
use music_theory_engine::{
    chord_rule_names, scale_rule_names, Chord, Key, KeyMode, ResolveOptions, Scale, DEFAULT_MODE,
};
use pretty_assertions::assert_eq;

fn pairs(map: std::collections::BTreeMap<u8, String>) -> Vec<(u8, String)> {
    map.into_iter().collect()
}

fn expect(pairs: &[(u8, &str)]) -> Vec<(u8, String)> {
    pairs.iter().map(|(d, n)| (*d, n.to_string())).collect()
}

// ============================================================================
// Documented examples
// ============================================================================

#[test]
fn test_chord_documented_example() {
    let chord = Chord::of("Cm nondominant -5 679").unwrap();
    assert_eq!(chord.root_name(), "C");
    assert_eq!(
        pairs(chord.note_names()),
        expect(&[(3, "D#"), (6, "A"), (7, "A#"), (9, "D")])
    );
}

#[test]
fn test_minor_major_seventh_chord() {
    for name in ["CmM7", "CmΔ7"] {
        let chord = Chord::of(name).unwrap();
        assert_eq!(
            pairs(chord.note_names()),
            expect(&[(1, "C"), (3, "D#"), (5, "G"), (7, "B")]),
            "chord {:?}",
            name
        );
    }
}

#[test]
fn test_scale_documented_example() {
    let scale = Scale::of("C aug").unwrap();
    assert_eq!(scale.root_name(), "C");
    assert_eq!(scale.mode(), "Augmented");
    assert_eq!(
        pairs(scale.note_names()),
        expect(&[
            (1, "C"),
            (2, "D#"),
            (3, "E"),
            (4, "G"),
            (5, "G#"),
            (6, "B")
        ])
    );
}

#[test]
fn test_key_documented_example() {
    let key = Key::of("Db").unwrap();
    assert_eq!(key.root_name(), "Db");
    assert_eq!(key.mode(), KeyMode::Major);
    let relative = key.relative().unwrap();
    assert_eq!(relative.root_name(), "Bb");
    assert_eq!(relative.mode(), KeyMode::Minor);
    assert!(relative.relative().is_none());
}

#[test]
fn test_bare_root_is_valid() {
    let chord = Chord::of("G").unwrap();
    assert_eq!(
        pairs(chord.note_names()),
        expect(&[(1, "G"), (3, "B"), (5, "D")])
    );
    assert_eq!(Scale::of("G").unwrap().mode(), DEFAULT_MODE);
    assert_eq!(Key::of("G").unwrap().mode(), KeyMode::Major);
}

// ============================================================================
// Roots and spelling
// ============================================================================

#[test]
fn test_enharmonic_roots_resolve_alike() {
    let sharp = Chord::of("C#m7").unwrap();
    let flat = Chord::of("Dbm7").unwrap();
    assert_eq!(sharp.tones(), flat.tones());
    assert_eq!(sharp.root_name(), "C#");
    assert_eq!(flat.root_name(), "Db");
}

#[test]
fn test_unicode_accidentals() {
    assert_eq!(Chord::of("B♭").unwrap().root_name(), "Bb");
    assert_eq!(Chord::of("F♯").unwrap().root_name(), "F#");
}

#[test]
fn test_forced_sharp_spelling() {
    let opts = ResolveOptions::new().with_spelling(Spelling::Sharp);
    let key = Key::of_with("Db", &opts).unwrap();
    assert_eq!(key.root_name(), "C#");
    assert_eq!(key.relative().unwrap().root_name(), "A#");
}

#[test]
fn test_invalid_roots() {
    for name in ["", "   ", "H", "cm", "+7", "#C"] {
        let err = Chord::of(name).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRoot, "input {:?}", name);
        assert_eq!(Scale::of(name).unwrap_err().code(), ErrorCode::InvalidRoot);
        assert_eq!(Key::of(name).unwrap_err().code(), ErrorCode::InvalidRoot);
    }
}

// ============================================================================
// Scales and keys
// ============================================================================

#[test]
fn test_scales_have_ascending_degrees() {
    for name in scale_rule_names() {
        let scale = Scale::of(&format!("E {}", name)).unwrap();
        let degrees: Vec<u8> = scale.tones().degrees().iter().map(|d| d.number()).collect();
        let expected: Vec<u8> = (1..=scale.tones().len() as u8).collect();
        assert_eq!(degrees, expected, "scale {}", name);
    }
}

#[test]
fn test_every_mode_name_resolves_to_itself() {
    for name in scale_rule_names() {
        if name == DEFAULT_MODE {
            continue;
        }
        let scale = Scale::of(&format!("C {}", name)).unwrap();
        assert_eq!(scale.mode(), name);
    }
}

#[test]
fn test_key_mode_from_scale_mode() {
    assert_eq!(Key::of("D dorian").unwrap().mode(), KeyMode::Minor);
    assert_eq!(Key::of("D lydian").unwrap().mode(), KeyMode::Major);
    assert_eq!(Key::of("E harmonic minor").unwrap().mode(), KeyMode::Minor);
}

#[test]
fn test_major_variant_keys_stay_major() {
    for name in ["C harmonic major", "C melodic major", "C natural major"] {
        let key = Key::of(name).unwrap();
        assert_eq!(key.mode(), KeyMode::Major, "key {:?}", name);
        assert_eq!(Scale::of(name).unwrap().mode(), "Major", "scale {:?}", name);
    }
}

#[test]
fn test_relative_keys_around_the_circle() {
    let cases = [
        ("C", "A"),
        ("G", "E"),
        ("D", "B"),
        ("F", "D"),
        ("Bb", "G"),
        ("Eb", "C"),
    ];
    for (major, minor) in cases {
        let key = Key::of(major).unwrap();
        assert_eq!(key.relative().unwrap().root_name(), minor);
        let back = Key::of(&format!("{}m", minor)).unwrap();
        assert_eq!(back.relative().unwrap().root(), key.root());
    }
}

// ============================================================================
// Listings
// ============================================================================

#[test]
fn test_listings_are_stable() {
    let chords = chord_rule_names();
    assert_eq!(chords.len(), 38);
    assert_eq!(chords.first(), Some(&"Basic"));
    assert_eq!(chords.last(), Some(&"Minor Thirteenth"));

    let scales = scale_rule_names();
    assert_eq!(scales.len(), 16);
    assert_eq!(scales.first(), Some(&DEFAULT_MODE));
    assert_eq!(scales.last(), Some(&"Locrian"));

    assert_eq!(chord_rule_names(), chords);
    assert_eq!(scale_rule_names(), scales);
}
