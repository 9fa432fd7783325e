use crate::cards::Card;
use crate::compare::{compare, RoundOutcome};
use crate::deck::CardSource;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// The player's prediction for one round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Guess {
    Higher,
    Lower,
}

impl Guess {
    /// Whether this prediction agrees with the round outcome. An `Equal`
    /// outcome matches neither guess; it is classified as a push instead.
    pub fn matches(&self, outcome: RoundOutcome) -> bool {
        matches!(
            (self, outcome),
            (Guess::Higher, RoundOutcome::Higher) | (Guess::Lower, RoundOutcome::Lower)
        )
    }
}

/// The player's choice after a won or pushed round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    Continue,
    Stop,
}

/// Classification of a resolved round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundClass {
    /// Guess agreed with the outcome; reward at stake can be banked or doubled
    Win,
    /// Cards had equal rank; reward at stake is unchanged
    Push,
    /// Guess disagreed with a non-equal outcome; the match ends, reward forfeited
    Loss,
}

/// Fixed rule constants for a session. Built once and handed to the
/// [`SessionEngine`] at construction; the game has no configurable variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Score the player starts the session with
    pub initial_score: u64,
    /// Reward at stake for the first correct guess of every match
    pub base_reward: u64,
    /// Cost deducted at the start of every match, win or lose
    pub match_cost: u64,
    /// Score at or above which the session ends in a win
    pub win_threshold: u64,
    /// Score below which the session ends in a loss
    pub loss_threshold: u64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            initial_score: 60,
            base_reward: 20,
            match_cost: 30,
            win_threshold: 1000,
            loss_threshold: 30,
        }
    }
}

/// Transient per-match state: the reward currently at stake and whether the
/// match is still accepting rounds.
#[derive(Debug, Clone, Copy)]
pub struct MatchState {
    /// Reward banked on the next stop, doubled on a win-then-continue
    pub pending_reward: u64,
    /// False once the match has reached a loss or a banked stop
    pub active: bool,
}

impl MatchState {
    pub fn new(base_reward: u64) -> Self {
        Self {
            pending_reward: base_reward,
            active: true,
        }
    }
}

/// Everything that happened in one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub house: Card,
    pub player: Card,
    pub guess: Guess,
    pub outcome: RoundOutcome,
    pub class: RoundClass,
    /// Reward that was at stake when the round resolved
    pub reward: u64,
}

/// Terminal state of a session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SessionOutcome {
    /// Score reached the win threshold
    Won,
    /// Score fell below the loss threshold
    Lost,
}

/// Progress notifications emitted while a session runs, so the decision
/// source can announce every round and match outcome as it happens.
#[derive(Debug, Clone, Copy)]
pub enum SessionEvent {
    /// A new match began; `score` already reflects the entry cost
    MatchStarted { number: u32, score: u64 },
    /// A round resolved; the continue/stop prompt (if any) follows this event
    RoundResolved(RoundReport),
    /// The match ended; `banked` is 0 on a loss
    MatchEnded { banked: u64, score: u64 },
}

/// External source of player decisions. Both requests block until a valid
/// choice is available; there are no timeout semantics. Implementations own
/// all prompting and input validation, so the engine only ever sees one of
/// the canonical values.
pub trait DecisionSource {
    /// Asks for a Higher/Lower prediction against the shown house card.
    fn guess(&mut self, house: Card) -> Result<Guess, GameError>;
    /// Asks whether to continue the match or stop and bank `pending_reward`.
    fn continue_or_stop(&mut self, pending_reward: u64) -> Result<Decision, GameError>;
    /// Progress notification; interactive sources announce these to the
    /// player, automated ones usually ignore them.
    fn on_event(&mut self, _event: &SessionEvent) {}
}

/// Record of one completed match.
#[derive(Debug, Clone)]
pub struct MatchSummary {
    /// Every round of the match in play order
    pub rounds: Vec<RoundReport>,
    /// Score delta the match produced: 0 on a loss, the final pending
    /// reward on a banked stop
    pub banked: u64,
}

/// Record of one completed session.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub outcome: SessionOutcome,
    pub final_score: u64,
    pub matches: Vec<MatchSummary>,
}

/// Drives matches and rounds for one session: pays the entry cost, applies
/// reward escalation, banks or forfeits pending rewards, and ends the
/// session once a score threshold is crossed.
///
/// The deck and the decision source are collaborators; the engine owns only
/// the score, the match counter, and the rules.
#[derive(Debug)]
pub struct SessionEngine<D> {
    deck: D,
    rules: Rules,
    score: u64,
    match_count: u32,
}

impl<D: CardSource> SessionEngine<D> {
    pub fn new(deck: D, rules: Rules) -> Self {
        Self {
            deck,
            rules,
            score: rules.initial_score,
            match_count: 1,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    pub fn deck(&self) -> &D {
        &self.deck
    }

    /// Plays one round: draws a house/player pair, solicits a guess,
    /// resolves it, and applies the result to the match state.
    ///
    /// Both drawn cards go back into the deck before the round is
    /// classified, so the deck is whole again whenever no round is in
    /// flight.
    pub fn play_round(
        &mut self,
        state: &mut MatchState,
        decisions: &mut dyn DecisionSource,
    ) -> Result<RoundReport, GameError> {
        let house = self.deck.draw()?;
        let player = self.deck.draw()?;

        let guess = match decisions.guess(house) {
            Ok(g) => g,
            Err(e) => {
                self.deck.return_cards(&[house, player]);
                return Err(e);
            }
        };
        let outcome = compare(player, house);
        self.deck.return_cards(&[house, player]);

        let class = if outcome == RoundOutcome::Equal {
            RoundClass::Push
        } else if guess.matches(outcome) {
            RoundClass::Win
        } else {
            RoundClass::Loss
        };
        let report = RoundReport {
            house,
            player,
            guess,
            outcome,
            class,
            reward: state.pending_reward,
        };
        decisions.on_event(&SessionEvent::RoundResolved(report));

        match class {
            RoundClass::Loss => {
                state.active = false;
            }
            RoundClass::Win => match decisions.continue_or_stop(state.pending_reward)? {
                Decision::Stop => state.active = false,
                Decision::Continue => {
                    state.pending_reward = state.pending_reward.saturating_mul(2);
                }
            },
            RoundClass::Push => match decisions.continue_or_stop(state.pending_reward)? {
                Decision::Stop => state.active = false,
                Decision::Continue => {}
            },
        }
        Ok(report)
    }

    /// Plays one match to completion: rounds repeat until a loss or a
    /// banked stop. Returns the rounds played and the score delta to apply
    /// (0 on a loss).
    pub fn play_match(
        &mut self,
        decisions: &mut dyn DecisionSource,
    ) -> Result<MatchSummary, GameError> {
        let mut state = MatchState::new(self.rules.base_reward);
        let mut rounds = Vec::new();
        while state.active {
            let report = self.play_round(&mut state, decisions)?;
            rounds.push(report);
        }
        let banked = match rounds.last() {
            Some(r) if r.class == RoundClass::Loss => 0,
            _ => state.pending_reward,
        };
        Ok(MatchSummary { rounds, banked })
    }

    /// Runs matches until the score crosses a threshold. The entry cost is
    /// paid unconditionally before every match, and termination is checked
    /// only between matches: a match in progress always resolves even if
    /// the cost deduction already dropped the score below the loss
    /// threshold.
    pub fn run_session(
        &mut self,
        decisions: &mut dyn DecisionSource,
    ) -> Result<SessionSummary, GameError> {
        let mut matches = Vec::new();
        let outcome = loop {
            let number = self.match_count;
            self.score = self.score.saturating_sub(self.rules.match_cost);
            decisions.on_event(&SessionEvent::MatchStarted {
                number,
                score: self.score,
            });

            let summary = self.play_match(decisions)?;
            self.score = self.score.saturating_add(summary.banked);
            decisions.on_event(&SessionEvent::MatchEnded {
                banked: summary.banked,
                score: self.score,
            });
            matches.push(summary);
            self.match_count += 1;

            if self.score >= self.rules.win_threshold {
                break SessionOutcome::Won;
            }
            if self.score < self.rules.loss_threshold {
                break SessionOutcome::Lost;
            }
        };
        Ok(SessionSummary {
            outcome,
            final_score: self.score,
            matches,
        })
    }
}
