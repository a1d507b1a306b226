// Host-side tests for the Konami key sequence.

use page_fx::constants::KONAMI_SEQUENCE;
use page_fx::core::KeySequence;

fn feed(seq: &mut KeySequence, keys: &[&str]) -> Vec<bool> {
    keys.iter().map(|k| seq.push(k)).collect()
}

#[test]
fn exact_sequence_matches_on_last_key() {
    let mut seq = KeySequence::new(KONAMI_SEQUENCE);
    let hits = feed(&mut seq, KONAMI_SEQUENCE);
    assert_eq!(hits.iter().filter(|h| **h).count(), 1);
    assert!(hits[9]);
}

#[test]
fn wrong_final_key_does_not_match() {
    let mut seq = KeySequence::new(KONAMI_SEQUENCE);
    feed(&mut seq, &KONAMI_SEQUENCE[..9]);
    assert!(!seq.push("c"));
}

#[test]
fn leading_noise_is_ignored() {
    let mut seq = KeySequence::new(KONAMI_SEQUENCE);
    feed(&mut seq, &["x", "ArrowUp", "Enter"]);
    let hits = feed(&mut seq, KONAMI_SEQUENCE);
    assert!(hits[9]);
}

#[test]
fn keys_are_case_sensitive() {
    let mut seq = KeySequence::new(KONAMI_SEQUENCE);
    feed(&mut seq, &KONAMI_SEQUENCE[..8]);
    assert!(!seq.push("B"));
    assert!(!seq.push("A"));
}

#[test]
fn repeat_after_match_needs_full_sequence() {
    let mut seq = KeySequence::new(KONAMI_SEQUENCE);
    assert!(feed(&mut seq, KONAMI_SEQUENCE)[9]);
    // Another "a" shifts the window; no match
    assert!(!seq.push("a"));
    assert!(feed(&mut seq, KONAMI_SEQUENCE)[9]);
}

#[test]
fn empty_pattern_never_matches() {
    let mut seq = KeySequence::new(&[]);
    assert!(!seq.push("a"));
}
