//! Integration tests for complete rounds.
//!
//! These tests drive whole rounds with scripted entropy and a scripted
//! player, so every draw result is known in advance.

use dice_game_core::{
    DiceSet, DieId, DrawPurpose, Party, Phase, Round, RoundError, RoundId, RoundOutcome,
    RoundSummary, ScriptedParticipant, ScriptedSource,
};

fn classic_dice() -> DiceSet {
    DiceSet::new(vec![
        "2,2,4,4,9,9".parse().unwrap(),
        "6,8,1,1,8,6".parse().unwrap(),
        "7,5,3,7,5,3".parse().unwrap(),
    ])
    .unwrap()
}

/// Log lines other than the key disclosures
fn narration(player: &ScriptedParticipant) -> Vec<&str> {
    player
        .log()
        .iter()
        .map(String::as_str)
        .filter(|line| !line.contains("KEY="))
        .collect()
}

/// Human moves first and wins 9 against 3
#[test]
fn test_full_round_human_first_human_wins() {
    // Committed values: first move 0, computer die 1, computer roll 2, human roll 4.
    let source = ScriptedSource::new([0, 1, 2, 4]);
    let mut player = ScriptedParticipant::new([0, 0, 3, 1], [0]);

    let summary = Round::new(classic_dice(), source).run(&mut player).unwrap();

    // 0 + 0 = 0: human first. Computer die: (1 + 0) % 2 = 1 -> second of the
    // remaining dice. Computer roll: (2 + 3) % 6 = 5. Human roll: (4 + 1) % 6 = 5.
    assert_eq!(summary.first_mover, Party::Human);
    assert_eq!(summary.human_die.faces(), &[2, 2, 4, 4, 9, 9]);
    assert_eq!(summary.computer_die.faces(), &[7, 5, 3, 7, 5, 3]);
    assert_eq!(summary.computer_roll, 3);
    assert_eq!(summary.human_roll, 9);
    assert_eq!(summary.outcome, RoundOutcome::HumanWins);

    assert_eq!(
        narration(&player),
        vec![
            "You make the first move.",
            "You choose the [2,2,4,4,9,9] dice.",
            "I choose the [7,5,3,7,5,3] dice.",
            "My roll result is 3.",
            "Your roll result is 9.",
            "You win (9 > 3)!",
        ]
    );
}

/// Computer moves first, draws its die fairly, and wins 5 against 1
#[test]
fn test_full_round_computer_first_computer_wins() {
    let source = ScriptedSource::new([1, 0, 0, 2]);
    let mut player = ScriptedParticipant::new([0, 2, 1, 0], [1]);

    let summary = Round::new(classic_dice(), source).run(&mut player).unwrap();

    assert_eq!(summary.first_mover, Party::Computer);
    assert_eq!(summary.computer_die.faces(), &[7, 5, 3, 7, 5, 3]);
    assert_eq!(summary.human_die.faces(), &[6, 8, 1, 1, 8, 6]);
    assert_eq!(summary.computer_roll, 5);
    assert_eq!(summary.human_roll, 1);
    assert_eq!(summary.outcome, RoundOutcome::ComputerWins);
    assert_eq!(narration(&player).last(), Some(&"I win (1 < 5)!"));
}

#[test]
fn test_equal_faces_tie() {
    let dice = DiceSet::new(vec![
        "1,2,3".parse().unwrap(),
        "3,4,5".parse().unwrap(),
        "2,6,7".parse().unwrap(),
    ])
    .unwrap();
    let source = ScriptedSource::new([0, 0, 0, 2]);
    let mut player = ScriptedParticipant::new([0, 0, 0, 0], [0]);

    let summary = Round::new(dice, source).run(&mut player).unwrap();

    assert_eq!(summary.human_roll, 3);
    assert_eq!(summary.computer_roll, 3);
    assert_eq!(summary.outcome, RoundOutcome::Tie);
}

#[test]
fn test_requests_publish_commitment_before_contribution() {
    let source = ScriptedSource::new([0, 1, 2, 4]);
    let mut player = ScriptedParticipant::new([0, 0, 3, 1], [0]);

    let summary = Round::new(classic_dice(), source).run(&mut player).unwrap();

    let asked: Vec<(DrawPurpose, u32)> = player
        .requests()
        .iter()
        .map(|r| (r.purpose, r.range))
        .collect();
    assert_eq!(
        asked,
        vec![
            (DrawPurpose::FirstMover, 2),
            (DrawPurpose::ComputerDie, 2),
            (DrawPurpose::ComputerRoll, 6),
            (DrawPurpose::HumanRoll, 6),
        ]
    );

    // Each published commitment is the one later opened, and it verifies.
    assert_eq!(summary.draws.len(), 4);
    for (request, transcript) in player.requests().iter().zip(&summary.draws) {
        assert_eq!(request.round_id, summary.round_id);
        assert_eq!(request.commitment, transcript.commitment);
        assert!(transcript.verify());
    }
}

#[test]
fn test_same_draws_same_round() {
    let run = || -> RoundSummary {
        let id: RoundId = "6f1c2a2e-8b0d-4d8e-9a51-0c7f3f2b9e10".parse().unwrap();
        let source = ScriptedSource::new([1, 0, 5, 3]);
        let mut player = ScriptedParticipant::new([1, 1, 4, 4], [0]);
        Round::with_id(id, classic_dice(), source)
            .run(&mut player)
            .unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_dice_never_shared() {
    for first_word in 0..2 {
        for die_word in 0..3 {
            for choice in 0..3 {
                let source = ScriptedSource::new([first_word, die_word, 0, 0]);
                let mut player = ScriptedParticipant::new([0, 0, 0, 0], [choice]);
                match Round::new(classic_dice(), source).run(&mut player) {
                    Ok(summary) => assert_ne!(summary.human_die, summary.computer_die),
                    Err(e) => assert!(matches!(e, RoundError::InvalidChoice(_))),
                }
            }
        }
    }
}

#[test]
fn test_aborted_round_yields_no_summary() {
    let source = ScriptedSource::new([0, 1, 2, 4]);
    // Exits when asked for the computer roll contribution.
    let mut player = ScriptedParticipant::new([0, 0], [0]);

    let mut round = Round::new(classic_dice(), source);
    assert_eq!(round.step(&mut player).unwrap(), Phase::SelectingDice);
    assert_eq!(round.step(&mut player).unwrap(), Phase::RollingComputer);
    assert_eq!(round.step(&mut player).unwrap_err(), RoundError::Aborted);
    assert!(round.summary().is_none());
    assert_eq!(round.state().human_die, Some(DieId::new(0)));
    assert_eq!(round.state().computer_roll, None);
    // Three commitments were shown, only two were opened.
    assert_eq!(player.requests().len(), 3);
    assert_eq!(round.draws().len(), 2);
    // The abandoned round stays abandoned.
    assert_eq!(round.step(&mut player).unwrap_err(), RoundError::Discarded);
    assert_eq!(player.requests().len(), 3);
}

#[test]
fn test_summary_serializes() {
    let source = ScriptedSource::new([0, 1, 2, 4]);
    let mut player = ScriptedParticipant::new([0, 0, 3, 1], [0]);
    let summary = Round::new(classic_dice(), source).run(&mut player).unwrap();

    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"outcome\":\"human_wins\""));
    assert!(json.contains("\"human_die\":[2,2,4,4,9,9]"));

    let parsed: RoundSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, summary);
}
