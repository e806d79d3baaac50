//! Round loop and session state machine.
//!
//! ```text
//! AwaitingChoices -> RoundEvaluated -> SessionContinues -> (next round)
//!                                   \-> SessionOver     -> replay? -> reset
//! ```
//!
//! Rounds repeat without asking anything until one side reaches the win
//! threshold. Only then is the replay policy consulted.
//!
//! `RoundEvaluated` only exists inside `play_round`, between judging the
//! moves and checking the threshold. `phase()` never returns it; the
//! judged outcome is handed out as `RoundReport::outcome`.

use tracing::{debug, info};

use crate::core::Seat;
use crate::error::{GameError, Result};
use crate::io::Console;
use crate::players::Player;
use crate::rules::{RoundOutcome, Score};

use super::config::SessionConfig;
use super::display;
use super::history::{History, HistoryEntry, Throw};
use super::replay::ReplayPolicy;

/// Where the session is in its round cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for both players to choose.
    AwaitingChoices,
    /// Moves are in and judged; the threshold is not yet checked.
    ///
    /// Transient: set and replaced within a single `play_round` call.
    RoundEvaluated(RoundOutcome),
    /// Nobody has reached the threshold; another round follows.
    SessionContinues,
    /// A player reached the threshold.
    SessionOver,
}

/// What happened in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number within the current session.
    pub round: u32,
    pub outcome: RoundOutcome,
    pub entry: HistoryEntry,
    pub session_over: bool,
}

/// A human and a computer playing sessions to `WIN_THRESHOLD`.
pub struct GameSession<H: Player, C: Player> {
    human: H,
    computer: C,
    score: Score,
    history: History,
    phase: SessionPhase,
    config: SessionConfig,
    round_in_session: u32,
    sessions_completed: u32,
}

impl<H: Player, C: Player> GameSession<H, C> {
    pub fn new(human: H, computer: C) -> Self {
        Self::with_config(human, computer, SessionConfig::default())
    }

    pub fn with_config(human: H, computer: C, config: SessionConfig) -> Self {
        Self {
            human,
            computer,
            score: Score::new(),
            history: History::new(),
            phase: SessionPhase::AwaitingChoices,
            config,
            round_in_session: 0,
            sessions_completed: 0,
        }
    }

    pub fn human(&self) -> &H {
        &self.human
    }

    pub fn computer(&self) -> &C {
        &self.computer
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Sessions that reached a winner so far.
    pub fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    /// Play one round: human chooses, then computer, then judge, score and
    /// record. Prints nothing beyond what the players' prompts print.
    ///
    /// Fails with `GameError::SessionFinished` once the session is over;
    /// call `reset` first.
    pub fn play_round(&mut self, io: &mut dyn Console) -> Result<RoundReport> {
        if self.phase == SessionPhase::SessionOver {
            return Err(GameError::SessionFinished);
        }
        self.phase = SessionPhase::AwaitingChoices;

        let human_move = self.human.choose_move(io)?;
        let computer_move = self.computer.choose_move(io)?;

        let outcome = self.score.record_round(human_move, computer_move);
        self.phase = SessionPhase::RoundEvaluated(outcome);
        self.round_in_session += 1;

        let entry = HistoryEntry::new(
            Throw {
                name: self.human.name().clone(),
                choice: human_move,
            },
            Throw {
                name: self.computer.name().clone(),
                choice: computer_move,
            },
            outcome,
        );
        self.history.push(entry.clone());

        let session_over = self.score.is_session_over();
        self.phase = if session_over {
            SessionPhase::SessionOver
        } else {
            SessionPhase::SessionContinues
        };

        debug!(
            round = self.round_in_session,
            human = %human_move,
            computer = %computer_move,
            ?outcome,
            human_score = self.score.get(Seat::Human),
            computer_score = self.score.get(Seat::Computer),
            "round evaluated"
        );

        Ok(RoundReport {
            round: self.round_in_session,
            outcome,
            entry,
            session_over,
        })
    }

    /// Play rounds until someone reaches the threshold, printing the moves,
    /// the round winner and the running score after each one.
    ///
    /// Returns the seat that took the session.
    pub fn play_session(&mut self, io: &mut dyn Console) -> Result<Option<Seat>> {
        info!(session = self.sessions_completed + 1, "session started");
        loop {
            let report = self.play_round(io)?;
            self.announce(io, &report)?;
            if report.session_over {
                break;
            }
        }

        self.sessions_completed += 1;
        let winner = self.score.leader();
        info!(
            session = self.sessions_completed,
            rounds = self.round_in_session,
            winner = ?winner,
            "session over"
        );
        Ok(winner)
    }

    /// Zero the score and start a fresh session.
    ///
    /// History is kept unless the config says otherwise.
    pub fn reset(&mut self) {
        self.score.reset();
        if !self.config.keep_history_across_replays {
            self.history.clear();
        }
        self.round_in_session = 0;
        self.phase = SessionPhase::AwaitingChoices;
    }

    /// Full game: welcome, sessions until `replay` declines, then the whole
    /// history, the final score and a goodbye.
    pub fn run(&mut self, io: &mut dyn Console, replay: &mut dyn ReplayPolicy) -> Result<()> {
        io.write_line(display::WELCOME)?;
        loop {
            self.play_session(io)?;
            let again = replay.play_again(io)?;
            info!(again, "replay decision");
            if !again {
                break;
            }
            self.reset();
        }

        self.show_history(io)?;
        io.write_line(display::GOODBYE)?;
        Ok(())
    }

    /// Print every recorded round and the current score.
    pub fn show_history(&self, io: &mut dyn Console) -> Result<()> {
        for entry in self.history.iter() {
            io.write_line(&display::history_line(entry))?;
        }
        io.write_line(&self.score_line())
    }

    fn announce(&self, io: &mut dyn Console, report: &RoundReport) -> Result<()> {
        for line in display::moves_lines(&report.entry) {
            io.write_line(&line)?;
        }
        io.write_line(&display::winner_line(&report.entry, report.outcome))?;
        io.write_line(&self.score_line())
    }

    fn score_line(&self) -> String {
        display::score_line(self.human.name(), self.computer.name(), &self.score)
    }
}
