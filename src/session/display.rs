//! Text the game prints.

use crate::core::{PlayerName, Seat};
use crate::rules::{RoundOutcome, Score};

use super::history::HistoryEntry;

pub const WELCOME: &str = "Welcome to Rock, Paper, Scissors, Lizard, Spock!";
pub const GOODBYE: &str = "Thanks for playing Rock, Paper, Scissors, Lizard, Spock!";
pub const TIE_ANNOUNCEMENT: &str = "It's a tie!";

/// `<name> chose <move>.` for each seat, human first.
pub fn moves_lines(entry: &HistoryEntry) -> [String; 2] {
    Seat::BOTH.map(|seat| {
        let throw = entry.throw(seat);
        format!("{} chose {}.", throw.name, throw.choice)
    })
}

pub fn winner_line(entry: &HistoryEntry, outcome: RoundOutcome) -> String {
    match outcome {
        RoundOutcome::Winner(seat) => format!("{} won!", entry.throw(seat).name),
        RoundOutcome::Tie => TIE_ANNOUNCEMENT.to_string(),
    }
}

pub fn score_line(human: &PlayerName, computer: &PlayerName, score: &Score) -> String {
    format!(
        "{}: {} || {}: {}",
        human,
        score.get(Seat::Human),
        computer,
        score.get(Seat::Computer)
    )
}

pub fn history_line(entry: &HistoryEntry) -> String {
    let human = entry.throw(Seat::Human);
    let computer = entry.throw(Seat::Computer);
    format!(
        "{{{} => {}, {} => {}, winner => {}}}",
        human.name,
        human.choice,
        computer.name,
        computer.choice,
        entry.winner()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;
    use crate::session::history::Throw;

    fn entry(human: Move, computer: Move) -> HistoryEntry {
        HistoryEntry::new(
            Throw {
                name: PlayerName::new("Ada").unwrap(),
                choice: human,
            },
            Throw {
                name: PlayerName::new("R2D2").unwrap(),
                choice: computer,
            },
            RoundOutcome::judge(human, computer),
        )
    }

    #[test]
    fn test_moves_lines() {
        let e = entry(Move::Rock, Move::Scissors);
        assert_eq!(
            moves_lines(&e),
            ["Ada chose rock.".to_string(), "R2D2 chose scissors.".to_string()]
        );
    }

    #[test]
    fn test_winner_line() {
        let e = entry(Move::Spock, Move::Lizard);
        assert_eq!(winner_line(&e, RoundOutcome::judge(Move::Spock, Move::Lizard)), "R2D2 won!");
        let e = entry(Move::Paper, Move::Paper);
        assert_eq!(winner_line(&e, RoundOutcome::Tie), "It's a tie!");
    }

    #[test]
    fn test_score_line() {
        let mut score = Score::new();
        score.record_round(Move::Rock, Move::Lizard);
        let line = score_line(
            &PlayerName::new("Ada").unwrap(),
            &PlayerName::new("R2D2").unwrap(),
            &score,
        );
        assert_eq!(line, "Ada: 1 || R2D2: 0");
    }

    #[test]
    fn test_history_line() {
        assert_eq!(
            history_line(&entry(Move::Rock, Move::Scissors)),
            "{Ada => rock, R2D2 => scissors, winner => Ada}"
        );
        assert_eq!(
            history_line(&entry(Move::Paper, Move::Paper)),
            "{Ada => paper, R2D2 => paper, winner => ---}"
        );
    }
}
