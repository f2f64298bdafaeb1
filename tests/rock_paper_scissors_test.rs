//! Tests for rock, paper, scissors.

use strictly_phone::{
    Choice, ChoiceError, Outcome, RockPaperScissors, ScriptedInput, ScriptedRandom, SessionEnd,
    Transcript, decide,
};

#[test]
fn test_user_wins_pairs() {
    assert_eq!(decide(Choice::Rock, Choice::Scissors), Outcome::UserWins);
    assert_eq!(decide(Choice::Paper, Choice::Rock), Outcome::UserWins);
    assert_eq!(decide(Choice::Scissors, Choice::Paper), Outcome::UserWins);
}

#[test]
fn test_equal_pairs_draw() {
    for choice in [Choice::Rock, Choice::Paper, Choice::Scissors] {
        assert_eq!(decide(choice, choice), Outcome::Draw);
    }
}

#[test]
fn test_opponent_wins_pairs() {
    assert_eq!(decide(Choice::Scissors, Choice::Rock), Outcome::OpponentWins);
    assert_eq!(decide(Choice::Rock, Choice::Paper), Outcome::OpponentWins);
    assert_eq!(decide(Choice::Paper, Choice::Scissors), Outcome::OpponentWins);
}

#[test]
fn test_invalid_choice_draws_no_opponent() {
    let mut game = RockPaperScissors::new();
    let mut rng = ScriptedRandom::new([3, 1]);

    assert_eq!(game.submit_choice(0, &mut rng), Err(ChoiceError::InvalidChoice(0)));
    assert_eq!(game.submit_choice(4, &mut rng), Err(ChoiceError::InvalidChoice(4)));
    assert!(game.rounds().is_empty());

    // The first random value is still unused.
    let round = game.submit_choice(1, &mut rng).expect("Valid choice");
    assert_eq!(round.opponent, Choice::Scissors);
    assert_eq!(round.outcome, Outcome::UserWins);
}

#[test]
fn test_play_until_declined() {
    let mut game = RockPaperScissors::new();
    let mut rng = ScriptedRandom::new([1, 2, 3]);
    let mut input = ScriptedInput::new(["1", "y", "9", "1", "Y", "1", "n"]);
    let mut output = Transcript::new();

    assert_eq!(game.play(&mut input, &mut output, &mut rng), SessionEnd::Finished);

    let outcomes: Vec<Outcome> = game.rounds().iter().map(|r| r.outcome).collect();
    assert_eq!(
        outcomes,
        vec![Outcome::Draw, Outcome::OpponentWins, Outcome::UserWins]
    );
    assert!(game.is_finished());
    assert_eq!(output.count("Invalid choice. Please choose 1, 2, or 3."), 1);
    assert!(output.contains("Computer chose: 2"));
    assert!(output.contains("Computer wins!"));
    assert!(output.contains("You win!"));
    assert_eq!(input.remaining(), 0);
}

#[test]
fn test_missing_answer_ends_session() {
    let mut game = RockPaperScissors::new();
    let mut rng = ScriptedRandom::new([2]);
    let mut input = ScriptedInput::new(["2"]);
    let mut output = Transcript::new();

    assert_eq!(game.play(&mut input, &mut output, &mut rng), SessionEnd::Finished);
    assert_eq!(game.rounds().len(), 1);
    assert!(game.is_finished());
}
