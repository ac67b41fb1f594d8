//! End-to-end tests for the normalization pipeline

use khnorm_core::{Input, Normalizer};

fn norm(text: &str) -> String {
    Normalizer::new().normalize(text)
}

#[test]
fn test_already_canonical_text_unchanged() {
    for text in [
        "ខ្មែរ",
        "ក្ប៉ា",
        "ស្ត្រី",
        "ភាសាខ្មែរ",
        "ព្រះរាជាណាចក្រកម្ពុជា",
    ] {
        assert_eq!(norm(text), text);
    }
}

#[test]
fn test_non_khmer_passthrough() {
    for text in ["", "hello, world!", "123 456", "日本語のテキスト", "café"] {
        assert_eq!(norm(text), text);
    }
}

#[test]
fn test_subscript_ro_ordering() {
    // sro + coeng ro + coeng ta, as frequently mistyped
    assert_eq!(norm("ស\u{17D2}\u{179A}\u{17D2}ត"), "ស\u{17D2}ត\u{17D2}\u{179A}");
    // embedded in a word with a vowel
    assert_eq!(norm("ស្រ្តី"), "ស្ត្រី");
}

#[test]
fn test_vowel_typed_before_subscript() {
    assert_eq!(norm("កេ\u{17D2}ម"), "ក\u{17D2}មេ");
}

#[test]
fn test_sign_order_within_syllable() {
    // shifter and robat move in front of vowels and diacritics
    assert_eq!(norm("ក\u{17B6}\u{17C9}"), "ក\u{17C9}\u{17B6}");
    assert_eq!(norm("ក\u{17CC}\u{17C9}"), "ក\u{17C9}\u{17CC}");
    assert_eq!(norm("ក\u{17C7}\u{17C6}"), "ក\u{17C6}\u{17C7}");
}

#[test]
fn test_duplicate_signs_collapse() {
    assert_eq!(norm("ក\u{17B6}\u{17B6}"), "កា");
    assert_eq!(norm("ក\u{17CB}\u{17CB}"), "ក\u{17CB}");
    assert_eq!(norm("ក\u{17D2}ត\u{17D2}ត"), "ក\u{17D2}ត");
}

#[test]
fn test_vowel_merges() {
    assert_eq!(norm("ក\u{17C1}\u{17B8}"), "ក\u{17BE}");
    assert_eq!(norm("ក\u{17B8}\u{17C1}"), "ក\u{17BE}");
    assert_eq!(norm("ក\u{17C1}\u{17B6}"), "ក\u{17C4}");
    // merges only touch the affected syllable
    assert_eq!(norm("abc ក\u{17C1}\u{17B8} xyz"), "abc ក\u{17BE} xyz");
}

#[test]
fn test_merge_beside_existing_vowel_collapses() {
    assert_eq!(norm("ក\u{17BE}\u{17C1}\u{17B8}"), "ក\u{17BE}");
}

#[test]
fn test_regularization_applies_before_reordering() {
    // variant qoo with a subscript
    assert_eq!(norm("ឲ្យ"), "ឱ្យ");
    // obsolete ligature expands to vowel + consonant
    assert_eq!(norm("\u{17A8}"), "\u{17A7}\u{1780}");
    // deprecated digraph expands to a full syllable
    assert_eq!(norm("\u{17A4}"), "\u{17A2}\u{17B6}");
    // deprecated trigraph expands to punctuation around lo
    assert_eq!(norm("\u{17D8}"), "\u{17D4}\u{179B}\u{17D4}");
    // invisible inherent vowels disappear
    assert_eq!(norm("ក\u{17B4}\u{17B6}"), "កា");
}

#[test]
fn test_zero_width_handling() {
    // deleted inside a syllable
    assert_eq!(norm("ក\u{200B}\u{17B6}"), "កា");
    assert_eq!(norm("ក\u{00AD}\u{17B6}"), "កា");
    // preserved outside any syllable
    assert_eq!(norm("\u{200B}hello"), "\u{200B}hello");
    assert_eq!(norm("x\u{200C}y"), "x\u{200C}y");
}

#[test]
fn test_dangling_coeng_passthrough() {
    // a coeng with no base after it stays outside the syllable
    assert_eq!(norm("ក\u{17D2}"), "ក\u{17D2}");
    assert_eq!(norm("ក\u{17D2} x"), "ក\u{17D2} x");
}

#[test]
fn test_missing_base_vowels_absorbed() {
    // a vowel run whose base was dropped merges into the prior syllable
    assert_eq!(norm("ក\u{17B6}\u{17C1}\u{17B8}"), "ក\u{17B6}\u{17BE}");
}

#[test]
fn test_base_character_preserved() {
    for text in ["កា", "ស្រ្តី", "ខ្មែរ", "ឱ្យ"] {
        let out = norm(text);
        assert_eq!(out.chars().next(), text.chars().next());
    }
}

#[test]
fn test_idempotence_on_fixtures() {
    let normalizer = Normalizer::new();
    for text in [
        "ស្រ្តី",
        "កេ\u{17D2}ម",
        "ក\u{17B6}\u{17B6}",
        "ក\u{17BE}\u{17C1}\u{17B8}",
        "ក\u{17B6}\u{17C9}\u{200B}",
        "ខ្មែរ។ hello ១២៣",
        // two differently spelled ro clusters in one syllable
        "ក\u{17D2}\u{179A}\u{17D2}\u{179A}\u{17C9}",
        "\u{17A8}\u{17A4}\u{17D8}",
    ] {
        let once = normalizer.normalize(text);
        let twice = normalizer.normalize(&once);
        assert_eq!(once, twice, "not idempotent for {:?}", text);
    }
}

#[test]
fn test_multiline_text() {
    let text = "ស្រ្តី\nកេ\u{17D2}ម\n";
    assert_eq!(norm(text), "ស្ត្រី\nក\u{17D2}មេ\n");
}

#[test]
fn test_process_file_input() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("khmer.txt");
    std::fs::write(&path, "ស្រ្តី").unwrap();

    let output = Normalizer::new().process(Input::from_file(&path)).unwrap();
    assert_eq!(output.text, "ស្ត្រី");
    assert_eq!(output.stats.chars_in, 6);
    assert_eq!(output.stats.chars_out, 6);
    assert_eq!(output.stats.syllables, 1);
    assert_eq!(output.stats.passthrough_spans, 0);
}

#[test]
fn test_process_reader_input() {
    let reader = std::io::Cursor::new("កេ\u{17D2}ម".as_bytes().to_vec());
    let output = Normalizer::new().process(Input::from_reader(reader)).unwrap();
    assert_eq!(output.text, "ក\u{17D2}មេ");
}

#[test]
fn test_process_missing_file_fails() {
    let result = Normalizer::new().process(Input::from_file("/nonexistent/khmer.txt"));
    assert!(matches!(result, Err(khnorm_core::Error::Io(_))));
}

#[test]
fn test_process_invalid_utf8_fails() {
    let result = Normalizer::new().process(Input::from_bytes(vec![0xC3, 0x28]));
    assert!(matches!(result, Err(khnorm_core::Error::InvalidUtf8(_))));
}
