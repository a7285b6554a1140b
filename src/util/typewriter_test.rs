use super::*;

const PHRASES: &[&str] = &["ab", "xyz"];

/// Run `ticks` advances, collecting (delay slept before the tick, text after).
fn drive(tw: &mut Typewriter, ticks: usize) -> Vec<(u64, String)> {
    (0..ticks)
        .map(|_| {
            let delay = tw.delay_ms();
            tw.advance();
            (delay, tw.text())
        })
        .collect()
}

// =============================================================
// Typing
// =============================================================

#[test]
fn starts_empty_on_the_first_phrase() {
    let tw = Typewriter::new(PHRASES);
    assert_eq!(tw.text(), "");
    assert_eq!(tw.delay_ms(), TYPE_MS);
}

#[test]
fn types_one_character_per_tick() {
    let mut tw = Typewriter::new(PHRASES);
    tw.advance();
    assert_eq!(tw.text(), "a");
    tw.advance();
    assert_eq!(tw.text(), "ab");
}

#[test]
fn holds_after_completing_a_phrase() {
    let mut tw = Typewriter::new(PHRASES);
    tw.advance();
    tw.advance();
    assert_eq!(tw.delay_ms(), HOLD_MS);
}

// =============================================================
// Deleting and rollover
// =============================================================

#[test]
fn hold_tick_keeps_the_text_then_deletion_starts() {
    let mut tw = Typewriter::new(PHRASES);
    tw.advance();
    tw.advance();
    tw.advance(); // hold tick
    assert_eq!(tw.text(), "ab");
    assert_eq!(tw.delay_ms(), DELETE_MS);
    tw.advance();
    assert_eq!(tw.text(), "a");
}

#[test]
fn emptying_rolls_over_to_the_next_phrase() {
    let mut tw = Typewriter::new(PHRASES);
    drive(&mut tw, 5); // type "ab", hold, delete twice
    assert_eq!(tw.text(), "");
    assert_eq!(tw.delay_ms(), TYPE_MS);
    tw.advance();
    assert_eq!(tw.text(), "x");
}

#[test]
fn wraps_back_to_the_first_phrase() {
    let mut tw = Typewriter::new(PHRASES);
    // "ab": 2 type + 1 hold + 2 delete; "xyz": 3 type + 1 hold + 3 delete.
    drive(&mut tw, 12);
    assert_eq!(tw.text(), "");
    tw.advance();
    assert_eq!(tw.text(), "a");
}

// =============================================================
// Cadence
// =============================================================

#[test]
fn full_cycle_delays_match_the_cadence() {
    let mut tw = Typewriter::new(PHRASES);
    let ticks = drive(&mut tw, 6);
    let expected = vec![
        (TYPE_MS, "a".to_owned()),
        (TYPE_MS, "ab".to_owned()),
        (HOLD_MS, "ab".to_owned()),
        (DELETE_MS, "a".to_owned()),
        (DELETE_MS, String::new()),
        (TYPE_MS, "x".to_owned()),
    ];
    assert_eq!(ticks, expected);
}

#[test]
fn multibyte_phrases_step_whole_characters() {
    let mut tw = Typewriter::new(&["héé"]);
    tw.advance();
    assert_eq!(tw.text(), "h");
    tw.advance();
    assert_eq!(tw.text(), "hé");
    tw.advance();
    assert_eq!(tw.text(), "héé");
    assert_eq!(tw.delay_ms(), HOLD_MS);
}
