//! Host-level tests for the character-to-Morse lookup.

use morse_beacon::morse_table::{lookup, Symbol};

#[test]
fn letters_map_to_standard_patterns() {
    assert_eq!(lookup('s'), "...");
    assert_eq!(lookup('o'), "---");
    assert_eq!(lookup('a'), ".-");
    assert_eq!(lookup('e'), ".");
    assert_eq!(lookup('q'), "--.-");
    assert_eq!(lookup('t'), "-");
    assert_eq!(lookup('z'), "--..");
}

#[test]
fn every_letter_has_a_dot_dash_pattern() {
    for character in 'a'..='z' {
        let pattern = lookup(character);
        assert!(!pattern.is_empty(), "empty pattern for {character:?}");
        assert!(
            pattern
                .bytes()
                .all(|symbol| symbol == b'.' || symbol == b'-'),
            "unexpected byte in pattern for {character:?}"
        );
    }
}

#[test]
fn space_and_unknown_characters_fall_back_to_the_placeholder() {
    assert_eq!(lookup(' '), " ");
    assert_eq!(lookup('7'), " ");
    assert_eq!(lookup('!'), " ");
    // uppercase is outside the domain on purpose
    assert_eq!(lookup('S'), " ");
}

#[test]
fn classify_tags_each_pattern_byte() {
    assert_eq!(Symbol::classify(b'.'), Symbol::Dot);
    assert_eq!(Symbol::classify(b'-'), Symbol::Dash);
    assert_eq!(Symbol::classify(b' '), Symbol::Pause);
    assert_eq!(Symbol::classify(b'x'), Symbol::Pause);
}
