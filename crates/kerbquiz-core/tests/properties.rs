//! Property-style checks over seeded random inputs.
//!
//! Each test drives the engine with a fixed `StdRng` seed so failures are
//! reproducible.

use std::collections::HashMap;

use kerbquiz_core::choices::build_choices;
use kerbquiz_core::model::{CollectionId, Location, Quote};
use kerbquiz_core::segmenter::{segment, TermMatcher};
use kerbquiz_core::{BlankStatus, MoveOutcome, Question};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VOCAB: &[&str] = &["holmes", "watson", "lestrade", "hudson", "moriarty", "rat"];

const QUOTES: &[&str] = &[
    "HOLMES: Elementary, my dear Watson.",
    "HOLMES: You have been in Afghanistan, I perceive. WATSON: How on earth did you know that?",
    "MRS. HUDSON: Tea? LESTRADE: Not now, Hudson! HOLMES: Always now.",
    "A grateful rat once told Moriarty: \"never trust a Watson.\"",
    "  leading space, then HOLMES:  double space",
    "time 10:30: moriarty: holmes",
    "WATSON:",
    "Émile met Watson… and Holmes;   Lestrade?",
];

fn vocab() -> Vec<String> {
    VOCAB.iter().map(|s| s.to_string()).collect()
}

fn matcher() -> TermMatcher {
    TermMatcher::new(VOCAB).unwrap()
}

fn question(text: &str, decoys: usize, rng: &mut StdRng) -> Question {
    let quote = Quote {
        topic: "test".into(),
        text: text.into(),
    };
    Question::new(quote, &matcher(), &vocab(), decoys, rng).unwrap()
}

fn random_location(q: &Question, rng: &mut StdRng) -> Location {
    let blanks: Vec<_> = q.store().blank_ids().collect();
    let pick = rng.gen_range(0..=blanks.len());
    if pick == blanks.len() {
        Location::tray(rng.gen_range(0..q.store().tray().len() + 2))
    } else {
        Location::new(CollectionId::Blank(blanks[pick]), rng.gen_range(0..2))
    }
}

#[test]
fn segmentation_is_lossless() {
    let m = matcher();
    for quote in QUOTES {
        let seg = segment(quote, &m);
        assert_eq!(seg.text(), *quote, "lossless for {quote:?}");
        for (i, s) in seg.segments.iter().enumerate() {
            let expected = if i % 2 == 0 { "speaker" } else { "saying" };
            assert_eq!(s.kind.to_string(), expected, "alternation in {quote:?}");
            assert!(s.bits.iter().all(|b| !b.text.is_empty()));
        }
        assert_eq!(seg.ground_truth_terms.len(), seg.blanks().len());
    }
}

#[test]
fn random_text_is_lossless() {
    let mut rng = StdRng::seed_from_u64(2024);
    let alphabet: Vec<char> = "abc holmes WATSON rat: .,!?\"“”\n_é".chars().collect();
    let m = matcher();
    for _ in 0..500 {
        let len = rng.gen_range(0..60);
        let text: String = (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();
        assert_eq!(segment(&text, &m).text(), text);
    }
}

#[test]
fn conservation_across_random_moves() {
    let mut rng = StdRng::seed_from_u64(77);
    for quote in QUOTES.iter().filter(|q| matcher().contains_term(q)) {
        let mut q = question(quote, 4, &mut rng);
        let ids = q.store().candidate_ids();
        let total = q.store().len();

        for _ in 0..300 {
            let origin = random_location(&q, &mut rng);
            let dest = if rng.gen_bool(0.1) {
                None
            } else {
                Some(random_location(&q, &mut rng))
            };
            q.apply_move(origin, dest);

            assert_eq!(q.store().candidate_ids(), ids);
            assert_eq!(q.store().len(), total);
            for blank in q.store().blank_ids() {
                let held = q
                    .store()
                    .collection(CollectionId::Blank(blank))
                    .unwrap()
                    .len();
                assert!(held <= 1, "blank {blank} holds {held}");
            }
        }
    }
}

#[test]
fn swap_symmetry() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut q = question(QUOTES[0], 3, &mut rng);
    let blank = q.segmented().blank_ids()[0];

    q.apply_move(Location::tray(0), Some(Location::blank(blank)));
    let placed = q.store().clone();
    let b = q.store().occupant(blank).unwrap().id;
    let a = q.store().tray()[2].id;

    let outcome = q.apply_move(Location::tray(2), Some(Location::blank(blank)));
    assert_eq!(outcome, MoveOutcome::Swapped { displaced: b });
    assert_eq!(q.store().occupant(blank).unwrap().id, a);
    assert_eq!(q.store().tray()[2].id, b);

    q.apply_move(Location::tray(2), Some(Location::blank(blank)));
    assert_eq!(*q.store(), placed);
}

#[test]
fn tray_to_blank_then_second_candidate_swaps_back() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut q = question(QUOTES[0], 2, &mut rng);
    let blank = q.segmented().blank_ids()[1];
    let first = q.store().tray()[0].id;

    q.apply_move(Location::tray(0), Some(Location::blank(blank)));
    let second = q.store().tray()[0].id;
    q.apply_move(Location::tray(0), Some(Location::blank(blank)));

    assert_eq!(q.store().occupant(blank).unwrap().id, second);
    assert!(q.store().tray().iter().any(|c| c.id == first));
    assert!(!q.store().tray().iter().any(|c| c.id == second));
}

#[test]
fn reveal_is_always_complete() {
    let mut rng = StdRng::seed_from_u64(31);
    let vocab = vocab();
    for quote in QUOTES.iter().filter(|q| matcher().contains_term(q)) {
        let mut q = question(quote, 2, &mut rng);
        for _ in 0..20 {
            let origin = random_location(&q, &mut rng);
            let dest = random_location(&q, &mut rng);
            q.apply_move(origin, Some(dest));
        }
        q.reveal(&vocab, &mut rng).unwrap();
        let judgment = q.judge();
        assert!(judgment.complete);
        assert!(judgment
            .per_blank
            .values()
            .all(|s| *s == BlankStatus::Correct));
    }
}

#[test]
fn choice_set_size() {
    let mut rng = StdRng::seed_from_u64(12);
    let vocab = vocab();
    for decoys in 0..6 {
        for quote in QUOTES {
            let seg = segment(quote, &matcher());
            let choices =
                build_choices(&seg.ground_truth_terms, &vocab, decoys, &mut rng).unwrap();
            assert_eq!(choices.len(), seg.ground_truth_terms.len() + decoys);
            for term in &seg.ground_truth_terms {
                assert!(choices.iter().any(|c| &c.term == term));
            }
        }
    }
}

#[test]
fn shuffle_is_roughly_uniform() {
    let mut rng = StdRng::seed_from_u64(1000);
    let truth = vec!["holmes".to_string(), "watson".to_string()];
    let vocab = vec!["lestrade".to_string()];
    let runs = 1000;
    let mut positions: HashMap<String, [u32; 5]> = HashMap::new();

    for _ in 0..runs {
        let choices = build_choices(&truth, &vocab, 3, &mut rng).unwrap();
        assert_eq!(choices.len(), 5);
        for (pos, c) in choices.iter().enumerate() {
            if c.term != "lestrade" {
                positions.entry(c.term.clone()).or_default()[pos] += 1;
            }
        }
    }

    // Expected 200 per position; allow a wide band.
    for (term, counts) in &positions {
        for (pos, n) in counts.iter().enumerate() {
            assert!(
                (120..=280).contains(n),
                "{term} landed at position {pos} {n} times"
            );
        }
    }
}
