//! # Play Command
//!
//! Interactive higher/lower gameplay on the terminal.
//!
//! The handler announces the session constants, then hands control to the
//! engine with a [`TermPlayer`] decision source that prompts on stdout and
//! reads guesses and continue/stop decisions from stdin. Invalid input is
//! rejected and re-prompted indefinitely; EOF or `q`/`quit` aborts the
//! session cleanly.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_card;
use crate::io_utils::read_stdin_line;
use crate::validation::{
    decision_choices_text, guess_choices_text, parse_decision, parse_guess, ParseResult,
};
use hilo_engine::cards::Card;
use hilo_engine::deck::Deck;
use hilo_engine::errors::GameError;
use hilo_engine::session::{
    Decision, DecisionSource, Guess, RoundClass, Rules, SessionEngine, SessionEvent,
    SessionOutcome,
};
use std::io::{BufRead, Write};

/// Decision source backed by the terminal. Prompt writes fail soft; the
/// read path reports a closed stream as [`GameError::InputClosed`].
struct TermPlayer<'a> {
    stdin: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    rules: Rules,
    /// Current score as reported by the last session event; announced at
    /// the top of every round.
    score: u64,
}

impl TermPlayer<'_> {
    fn read_line(&mut self) -> Result<String, GameError> {
        read_stdin_line(self.stdin).ok_or(GameError::InputClosed)
    }
}

impl DecisionSource for TermPlayer<'_> {
    fn guess(&mut self, house: Card) -> Result<Guess, GameError> {
        let house_info = format_card(&house);
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "Your current score is: {}", self.score);
        let _ = writeln!(self.out, "House has {}", house_info);
        let _ = writeln!(
            self.out,
            "Is your card {} than {}?",
            guess_choices_text(),
            house_info
        );
        loop {
            match parse_guess(&self.read_line()?) {
                ParseResult::Choice(g) => return Ok(g),
                ParseResult::Quit => return Err(GameError::InputClosed),
                ParseResult::Invalid(msg) => {
                    let _ = writeln!(self.out, "{}:", msg);
                }
            }
        }
    }

    fn continue_or_stop(&mut self, _pending_reward: u64) -> Result<Decision, GameError> {
        let _ = writeln!(
            self.out,
            "Would you like to {}?",
            decision_choices_text()
        );
        loop {
            match parse_decision(&self.read_line()?) {
                ParseResult::Choice(d) => return Ok(d),
                ParseResult::Quit => return Err(GameError::InputClosed),
                ParseResult::Invalid(msg) => {
                    let _ = writeln!(self.out, "{}:", msg);
                }
            }
        }
    }

    fn on_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::MatchStarted { number, score } => {
                self.score = *score;
                let _ = writeln!(self.out);
                let _ = writeln!(self.out, "Match {}", number);
                let _ = writeln!(
                    self.out,
                    "Start new match, -{} cost for playing",
                    self.rules.match_cost
                );
            }
            SessionEvent::RoundResolved(report) => {
                let _ = writeln!(self.out, "You have {}", format_card(&report.player));
                match report.class {
                    RoundClass::Win => {
                        let _ = writeln!(
                            self.out,
                            "Correct! You earned +{} reward points",
                            report.reward
                        );
                    }
                    RoundClass::Push => {
                        let _ = writeln!(
                            self.out,
                            "Cards were equal. Your reward points is still {}",
                            report.reward
                        );
                    }
                    RoundClass::Loss => {
                        let _ = writeln!(
                            self.out,
                            "Incorrect! You lose -{} reward points",
                            report.reward
                        );
                    }
                }
            }
            SessionEvent::MatchEnded { banked, score } => {
                self.score = *score;
                if *banked > 0 {
                    let _ = writeln!(self.out, "You stopped and banked +{} points", banked);
                }
                let _ = writeln!(self.out, "Score after match: {}", score);
            }
        }
    }
}

/// Handle the play command: one interactive session from the starting
/// score to a win/loss announcement.
///
/// # Arguments
///
/// * `seed` - Deck seed (default: config seed, else random)
/// * `out` - Output stream for prompts and announcements
/// * `stdin` - Input stream for player decisions
///
/// # Returns
///
/// * `Ok(())` when the session ends in a win or loss, or the player quits
/// * `Err(CliError)` on configuration or I/O failures
pub fn handle_play_command(
    seed: Option<u64>,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let rules = Rules::default();

    writeln!(out, "play: seed={}", seed)?;
    writeln!(out, "Game Start!")?;
    writeln!(out, "You have {} points", rules.initial_score)?;
    writeln!(out, "Cost for playing is {} points", rules.match_cost)?;
    writeln!(out, "Initial reward is {} points", rules.base_reward)?;

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let mut engine = SessionEngine::new(deck, rules);

    let result = {
        let mut player = TermPlayer {
            stdin,
            out: &mut *out,
            rules,
            score: rules.initial_score,
        };
        engine.run_session(&mut player)
    };

    match result {
        Ok(summary) => {
            match summary.outcome {
                SessionOutcome::Won => writeln!(
                    out,
                    "Congratulations! You won with {} points!",
                    summary.final_score
                )?,
                SessionOutcome::Lost => {
                    writeln!(out, "You lost with {} points.", summary.final_score)?
                }
            }
            Ok(())
        }
        Err(GameError::InputClosed) => {
            writeln!(out, "Session aborted.")?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    #[test]
    #[serial]
    fn test_play_announces_constants_then_aborts_on_eof() {
        let mut out = Vec::new();
        let mut input = Cursor::new(b"" as &[u8]);

        let result = handle_play_command(Some(42), &mut out, &mut input);
        assert!(result.is_ok(), "EOF should abort cleanly");

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Game Start!"));
        assert!(output.contains("You have 60 points"));
        assert!(output.contains("Cost for playing is 30 points"));
        assert!(output.contains("Initial reward is 20 points"));
        assert!(output.contains("Match 1"));
        assert!(output.contains("Session aborted."));
    }

    #[test]
    #[serial]
    fn test_play_quit_command_aborts() {
        let mut out = Vec::new();
        let mut input = Cursor::new(b"q\n" as &[u8]);

        let result = handle_play_command(Some(42), &mut out, &mut input);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Session aborted."));
    }

    #[test]
    #[serial]
    fn test_play_reprompts_on_invalid_input() {
        let mut out = Vec::new();
        let mut input = Cursor::new(b"banana\nquit\n" as &[u8]);

        let result = handle_play_command(Some(42), &mut out, &mut input);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Invalid input 'banana'"));
        assert!(output.contains("lower(l) or higher(h)"));
    }

    #[test]
    #[serial]
    fn test_play_seed_is_reported_and_deterministic() {
        let run = || {
            let mut out = Vec::new();
            let mut input = Cursor::new(b"h\ns\nl\ns\nq\n" as &[u8]);
            handle_play_command(Some(7), &mut out, &mut input).unwrap();
            String::from_utf8(out).unwrap()
        };
        let out1 = run();
        let out2 = run();
        assert!(out1.contains("play: seed=7"));
        assert_eq!(out1, out2, "same seed and script must replay identically");
    }

    #[test]
    #[serial]
    fn test_play_announces_the_score_before_every_round() {
        let mut out = Vec::new();
        let mut input = Cursor::new(b"h\ns\nl\ns\nq\n" as &[u8]);

        handle_play_command(Some(7), &mut out, &mut input).unwrap();

        // every round opens with the score line, then the house card
        let output = String::from_utf8(out).unwrap();
        let score_lines = output.matches("Your current score is: ").count();
        let house_lines = output.matches("House has ").count();
        assert_eq!(score_lines, house_lines);
        assert!(score_lines >= 2, "script spans at least two rounds");
        assert!(output.contains("Your current score is: 30"));
    }

    #[test]
    #[serial]
    fn test_play_full_session_reaches_a_verdict_or_aborts() {
        // alternate guess/stop long enough to outlast most sessions; if the
        // script runs out first the session aborts, which is also fine here
        let script = "h\ns\n".repeat(400);
        let mut out = Vec::new();
        let mut input = Cursor::new(script.into_bytes());

        let result = handle_play_command(Some(11), &mut out, &mut input);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Match 1"));
        assert!(
            output.contains("You won with")
                || output.contains("You lost with")
                || output.contains("Session aborted."),
        );
    }
}
