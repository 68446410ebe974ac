//! The convergence controller: the generate / validate / accept loop.
//!
//! The engine owns all per-game state (atom space, scenario, knowledge base,
//! RNG); nothing is shared between games, so batches parallelize trivially
//! with one engine per seed. The knowledge base is mutated in exactly one
//! place, after a candidate passes the feasibility oracle, which is what makes
//! wrong convergence impossible: every accepted formula provably keeps the
//! true killer satisfiable, so a suspect count of one can only name them.

use crate::puzzle::atoms::AtomSpace;
use crate::puzzle::config::{ConfigError, GameConfig};
use crate::puzzle::generator::generate;
use crate::puzzle::knowledge::KnowledgeBase;
use crate::puzzle::oracle::{is_feasible, possible_suspects};
use crate::puzzle::proposition::Proposition;
use crate::puzzle::record::GameRecord;
use crate::puzzle::scenario::{exactly_one_killer, Scenario};
use thiserror::Error;
use tracing::{debug, info};

/// Generation attempts (not acceptances) allowed before the engine gives up.
/// Exceeding it indicates a generator or oracle defect, not bad luck.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// A fault surfaced by the engine. Neither variant is ever disguised as a
/// converged answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The configuration was rejected before initialization.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal-consistency violation: the suspect set became empty right
    /// after a feasible accept, which the oracle's guarantee rules out.
    #[error("no suspects remain after accepting a feasible proposition")]
    NoSuspects,

    /// The attempt bound was exhausted without convergence. Carries the best
    /// current suspect set so the caller can decide to retry or abort.
    #[error("attempt budget of {attempts} exhausted with {} suspects remaining", remaining.len())]
    AttemptsExhausted {
        /// How many generation attempts were consumed.
        attempts: usize,
        /// The suspects still in contention when the bound was hit.
        remaining: Vec<String>,
    },
}

/// One game's generation engine. Create with [`Engine::new`], drive with
/// [`Engine::run`], then export via [`Engine::into_record`].
#[derive(Debug)]
pub struct Engine {
    config: GameConfig,
    atoms: AtomSpace,
    scenario: Scenario,
    kb: KnowledgeBase,
    accepted: Vec<Proposition>,
    rng: fastrand::Rng,
    seed: u64,
    max_attempts: usize,
}

impl Engine {
    /// Validates the configuration and initializes a game: atom space, ground
    /// truth, killer, and the exactly-one-killer base constraints.
    ///
    /// When `seed` is `None`, one is drawn from entropy and stored, so the
    /// resulting record is always reproducible from its own seed field.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an invalid configuration.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = seed.unwrap_or_else(|| fastrand::u64(..));
        let mut rng = fastrand::Rng::with_seed(seed);

        let atoms = AtomSpace::build(&config);
        let scenario = Scenario::draw(&config, &mut rng);

        let mut kb = KnowledgeBase::new(atoms.num_vars());
        for formula in exactly_one_killer(&config, &atoms) {
            kb.push(formula);
        }

        Ok(Self {
            config,
            atoms,
            scenario,
            kb,
            accepted: Vec::new(),
            rng,
            seed,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Overrides the generation attempt bound.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The seed this game runs on.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The ground-truth killer.
    #[must_use]
    pub fn killer(&self) -> &str {
        &self.scenario.killer
    }

    /// The hidden scenario.
    #[must_use]
    pub const fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// The propositions accepted so far, in order.
    #[must_use]
    pub fn accepted(&self) -> &[Proposition] {
        &self.accepted
    }

    /// The suspects still in contention.
    #[must_use]
    pub fn suspects(&self) -> Vec<String> {
        possible_suspects(&self.kb, &self.atoms, &self.config.names)
    }

    /// Generates and validates propositions until exactly one suspect remains.
    ///
    /// Returns the identified killer's name, which by the oracle's guarantee
    /// equals the ground-truth killer.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoSuspects`] on an internal-consistency violation,
    /// [`EngineError::AttemptsExhausted`] if the attempt bound is hit.
    ///
    /// # Panics
    ///
    /// Panics if the killer's atom is missing from the atom space, which
    /// initialization makes impossible.
    pub fn run(&mut self) -> Result<String, EngineError> {
        let killer_var = self
            .atoms
            .killer(&self.scenario.killer)
            .expect("killer atom exists for the drawn killer");

        for attempt in 1..=self.max_attempts {
            let Some((formula, proposition)) = generate(
                &self.config,
                &self.atoms,
                &self.scenario,
                &self.kb,
                &mut self.rng,
            ) else {
                // Malformed or moot candidate; the attempt is consumed.
                continue;
            };

            if !is_feasible(&self.kb, &formula, killer_var) {
                debug!(attempt, clue = %proposition, "rejected infeasible candidate");
                continue;
            }

            self.kb.push(formula);
            self.accepted.push(proposition.clone());
            debug!(attempt, accepted = self.accepted.len(), clue = %proposition, "accepted");

            let suspects = self.suspects();
            match suspects.len() {
                0 => return Err(EngineError::NoSuspects),
                1 => {
                    let identified = suspects.into_iter().next().expect("length was checked");
                    info!(
                        seed = self.seed,
                        propositions = self.accepted.len(),
                        killer = %identified,
                        "converged"
                    );
                    return Ok(identified);
                }
                remaining => {
                    debug!(attempt, remaining, "still ambiguous");
                }
            }
        }

        Err(EngineError::AttemptsExhausted {
            attempts: self.max_attempts,
            remaining: self.suspects(),
        })
    }

    /// Consumes the engine and produces the immutable game record.
    #[must_use]
    pub fn into_record(self) -> GameRecord {
        GameRecord {
            seed: self.seed,
            killer: self.scenario.killer,
            config: self.config,
            ground_truth: self.scenario.ground_truth,
            propositions: self.accepted,
        }
    }
}

/// Runs one full game: initialize, converge, export the record.
///
/// # Errors
///
/// Propagates configuration and engine faults; see [`EngineError`].
pub fn generate_game(config: GameConfig, seed: Option<u64>) -> Result<GameRecord, EngineError> {
    let mut engine = Engine::new(config, seed)?;
    engine.run()?;
    Ok(engine.into_record())
}
