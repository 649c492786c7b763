//! Statistical checks on the coin toss resolver.
//!
//! Seeded, so the numbers are reproducible; the tolerances would hold for
//! any reasonable stream regardless.

use blink_tac_toe::{toss, CoinFace, GameRng, PlayerId};

const N: usize = 10_000;

/// Each marginal lands near 50/50.
#[test]
fn test_marginals_are_uniform() {
    let mut rng = GameRng::new(0xB11A);

    let mut heads = 0usize;
    let mut player_one = 0usize;
    for _ in 0..N {
        let outcome = toss::resolve(&mut rng);
        if outcome.face == CoinFace::Heads {
            heads += 1;
        }
        if outcome.first_player == PlayerId::One {
            player_one += 1;
        }
    }

    // 5 sigma on N=10,000 fair draws is 250.
    let lo = N / 2 - 300;
    let hi = N / 2 + 300;
    assert!((lo..=hi).contains(&heads), "heads = {}", heads);
    assert!(
        (lo..=hi).contains(&player_one),
        "player one first = {}",
        player_one
    );
}

/// The face does not predict the first mover: joint frequencies match the
/// product of the marginals.
#[test]
fn test_face_independent_of_first_player() {
    let mut rng = GameRng::new(0x70_55);

    let mut heads = 0usize;
    let mut player_one = 0usize;
    let mut heads_and_one = 0usize;
    for _ in 0..N {
        let outcome = toss::resolve(&mut rng);
        let h = outcome.face == CoinFace::Heads;
        let p1 = outcome.first_player == PlayerId::One;
        heads += h as usize;
        player_one += p1 as usize;
        heads_and_one += (h && p1) as usize;
    }

    let p_h = heads as f64 / N as f64;
    let p_1 = player_one as f64 / N as f64;
    let p_joint = heads_and_one as f64 / N as f64;

    assert!(
        (p_joint - p_h * p_1).abs() < 0.02,
        "joint {} vs product {}",
        p_joint,
        p_h * p_1
    );
}

/// Both first movers actually occur for a fixed face — heads does not
/// mean Player 1.
#[test]
fn test_heads_does_not_pick_player_one() {
    let mut rng = GameRng::new(9);

    let mut heads_with_two = false;
    let mut tails_with_one = false;
    for _ in 0..N {
        let outcome = toss::resolve(&mut rng);
        match (outcome.face, outcome.first_player) {
            (CoinFace::Heads, PlayerId::Two) => heads_with_two = true,
            (CoinFace::Tails, PlayerId::One) => tails_with_one = true,
            _ => {}
        }
    }

    assert!(heads_with_two);
    assert!(tails_with_one);
}
