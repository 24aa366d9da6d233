//! Text of every notification the router sends.

use crate::game::core::messages::OutboundMessage;
use crate::game::core::{Match, RoundResult, Slot, Winner};

pub const WAITING: &str = "Waiting for an opponent...";
pub const WON: &str = "You won! :-)";
pub const LOST: &str = "You lost. :-(";
pub const DRAW: &str = "It's a draw. :-|";

pub fn match_starting(total_rounds: u32) -> String {
    format!("Opponent found! Best of {total_rounds}. Reply 1 (rock), 2 (scissors) or 3 (paper).")
}

/// Scores as (yours, opponent's)
fn scores_for(scores: (u32, u32), slot: Slot) -> (u32, u32) {
    match slot {
        Slot::Player1 => scores,
        Slot::Player2 => (scores.1, scores.0),
    }
}

fn verdict(winner: Winner, slot: Slot) -> &'static str {
    match (winner, slot) {
        (Winner::Draw, _) => "drew",
        (Winner::Player1, Slot::Player1) | (Winner::Player2, Slot::Player2) => "won",
        _ => "lost",
    }
}

fn round_line(round: &RoundResult, slot: Slot, total_rounds: u32) -> String {
    let (yours, theirs) = match slot {
        Slot::Player1 => (round.player_1_move, round.player_2_move),
        Slot::Player2 => (round.player_2_move, round.player_1_move),
    };
    let (you, opponent) = scores_for(round.scores, slot);
    format!(
        "Round {} of {}: you {} ({} vs {}). Score {}-{}.",
        round.number,
        total_rounds,
        verdict(round.winner, slot),
        yours,
        theirs,
        you,
        opponent
    )
}

/// One message per player, player 1 first
pub fn round_result(game: &Match, round: &RoundResult) -> Vec<OutboundMessage> {
    let Some(player_2) = game.player_2() else {
        return Vec::new();
    };
    vec![
        OutboundMessage::new(
            game.player_1(),
            round_line(round, Slot::Player1, game.total_rounds()),
        ),
        OutboundMessage::new(
            player_2,
            round_line(round, Slot::Player2, game.total_rounds()),
        ),
    ]
}

fn final_line(outcome: Winner, slot: Slot) -> &'static str {
    match (outcome, slot) {
        (Winner::Draw, _) => DRAW,
        (Winner::Player1, Slot::Player1) | (Winner::Player2, Slot::Player2) => WON,
        _ => LOST,
    }
}

/// Final result for both players, player 1 first
pub fn match_over(game: &Match, outcome: Winner) -> Vec<OutboundMessage> {
    let Some(player_2) = game.player_2() else {
        return Vec::new();
    };
    vec![
        OutboundMessage::new(game.player_1(), final_line(outcome, Slot::Player1)),
        OutboundMessage::new(player_2, final_line(outcome, Slot::Player2)),
    ]
}

/// Reply to a session start from someone who is already seated
pub fn reminder(game: &Match, address: &str) -> OutboundMessage {
    let content = match game.slot_of(address) {
        Some(slot) if game.is_ready() => {
            let (you, opponent) = scores_for(game.scores(), slot);
            format!("Match in progress. Score {you}-{opponent}.")
        }
        _ => WAITING.to_string(),
    };
    OutboundMessage::new(address, content)
}
