//! Tracing stays optional: a subscriber can be installed before play without
//! changing results.

use bowling::test_support::sample_game;

#[test]
fn game_scores_with_subscriber_installed() {
    bowling::logging::init();
    let game = bowling::replay::replay(sample_game()).expect("replay");
    assert_eq!(game.score(), 133);
}
