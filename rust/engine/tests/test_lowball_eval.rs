use std::cmp::Ordering;

use lowball_engine::cards::{parse_cards, Card};
use lowball_engine::hand::{compare_lowball, evaluate_lowball, has_pair, is_flush, is_straight};

fn hand(s: &str) -> [Card; 5] {
    parse_cards(s)
        .expect("valid cards")
        .try_into()
        .expect("five cards")
}

#[test]
fn seven_five_beats_king_high() {
    let seven = hand("7c 5d 4h 3s 2c");
    let king = hand("Kc 9d 6h 4s 2d");
    assert_eq!(compare_lowball(&seven, &king), Ordering::Less);
    assert_eq!(compare_lowball(&king, &seven), Ordering::Greater);
}

#[test]
fn pair_is_worse_than_unpaired_hand() {
    let clean = hand("9c 8d 6h 4s 3c");
    let paired = hand("7c 7d 5h 3s 2c");
    assert!(has_pair(&paired));
    assert_eq!(compare_lowball(&clean, &paired), Ordering::Less);
}

#[test]
fn straight_and_flush_add_badness() {
    let straight = hand("6c 5d 4h 3s 2c");
    let flush = hand("9h 7h 5h 3h 2h");
    assert!(is_straight(&straight));
    assert!(is_flush(&flush));
    assert_eq!(evaluate_lowball(&straight).badness, 1);
    assert_eq!(evaluate_lowball(&flush).badness, 1);
    assert_eq!(evaluate_lowball(&hand("6h 5h 4h 3h 2h")).badness, 2);
    assert_eq!(
        compare_lowball(&hand("Kc Qd Jh 9s 8c"), &straight),
        Ordering::Less
    );
}

#[test]
fn ace_is_always_high() {
    let wheel = hand("Ac 5d 4h 3s 2c");
    assert!(!is_straight(&wheel));
    let key = evaluate_lowball(&wheel);
    assert_eq!(key.badness, 0);
    assert_eq!(key.ranks[0], 12);
    assert_eq!(compare_lowball(&hand("Kc 5d 4h 3s 2c"), &wheel), Ordering::Less);
}

#[test]
fn comparison_is_antisymmetric_and_reflexive() {
    let hands = [
        hand("7c 5d 4h 3s 2c"),
        hand("8c 6d 4h 3s 2c"),
        hand("7c 5d 4h 3s 2d"),
        hand("Tc Td 4h 3s 2c"),
        hand("9h 7h 5h 3h 2h"),
        hand("6c 5d 4h 3s 2c"),
        hand("Ac Ad As Kh Kc"),
    ];
    for a in &hands {
        assert_eq!(compare_lowball(a, a), Ordering::Equal);
        for b in &hands {
            assert_eq!(compare_lowball(a, b), compare_lowball(b, a).reverse());
        }
    }
    // same ranks, different suits tie
    assert_eq!(compare_lowball(&hands[0], &hands[2]), Ordering::Equal);
}

#[test]
fn key_display_lists_ranks_high_first() {
    assert_eq!(
        evaluate_lowball(&hand("2c 3d 4h 5s 7c")).to_string(),
        "7-5-4-3-2 (badness 0)"
    );
}
