//! Execution cursor over an immutable automaton.

use crate::builder::Automaton;
use crate::core::{State, Symbol};
use crate::runtime::error::{RunError, StepError};
use crate::runtime::trace::{StepRecord, Trace};

/// A single caller's position within an [`Automaton`].
///
/// The runner borrows the definition read-only and owns only its cursor,
/// so any number of runners may walk one automaton at the same time.
#[derive(Clone, Debug)]
pub struct Runner<'a, S: State, Y: Symbol> {
    automaton: &'a Automaton<S, Y>,
    current: S,
}

impl<'a, S: State, Y: Symbol> Runner<'a, S, Y> {
    /// Create a runner positioned at the automaton's start state.
    pub fn new(automaton: &'a Automaton<S, Y>) -> Self {
        Self {
            automaton,
            current: automaton.start.clone(),
        }
    }

    /// Move the cursor back to the start state.
    pub fn reset(&mut self) {
        self.current = self.automaton.start.clone();
    }

    /// Consume one symbol.
    ///
    /// `position` is only used for diagnostics. On failure the cursor does
    /// not move.
    pub fn step(&mut self, symbol: Y, position: usize) -> Result<(), StepError<S, Y>> {
        if !self.automaton.alphabet.contains(&symbol) {
            return Err(StepError::InvalidSymbol { symbol, position });
        }

        let Some(next) = self.automaton.target(&self.current, &symbol) else {
            return Err(StepError::NoTransition {
                state: self.current.clone(),
                symbol,
                position,
            });
        };

        tracing::trace!(
            from = self.current.name(),
            to = next.name(),
            symbol = ?symbol,
            position,
            "step"
        );
        self.current = next.clone();
        Ok(())
    }

    /// The state the cursor is in (pure)
    pub fn current(&self) -> &S {
        &self.current
    }

    /// Whether the cursor is in an accepting state (pure)
    pub fn is_accepting(&self) -> bool {
        self.automaton.is_final(&self.current)
    }

    /// Validate, reset, then consume `input` in order.
    ///
    /// Stops at the first symbol that cannot be consumed. An empty input
    /// leaves the cursor at the start state.
    pub fn run<I>(&mut self, input: I) -> Result<S, RunError<S, Y>>
    where
        I: IntoIterator<Item = Y>,
    {
        self.automaton.validate()?;
        self.reset();

        for (position, symbol) in input.into_iter().enumerate() {
            if let Err(err) = self.step(symbol, position) {
                tracing::debug!(error = %err, "run failed");
                return Err(err.into());
            }
        }

        Ok(self.current.clone())
    }
}

impl<S: State> Runner<'_, S, char> {
    /// Run over the characters of `input` with surrounding whitespace trimmed.
    ///
    /// Whitespace inside the text is consumed like any other character.
    pub fn process(&mut self, input: &str) -> Result<S, RunError<S, char>> {
        self.run(input.trim().chars())
    }
}

impl<S: State, Y: Symbol> Automaton<S, Y> {
    /// A fresh cursor positioned at the start state.
    pub fn runner(&self) -> Runner<'_, S, Y> {
        Runner::new(self)
    }

    /// Run `input` on a fresh cursor and return the state it ends in.
    pub fn run<I>(&self, input: I) -> Result<S, RunError<S, Y>>
    where
        I: IntoIterator<Item = Y>,
    {
        self.runner().run(input)
    }

    /// Run `input` and report whether it ends in an accepting state.
    pub fn accepts<I>(&self, input: I) -> Result<bool, RunError<S, Y>>
    where
        I: IntoIterator<Item = Y>,
    {
        let end = self.run(input)?;
        Ok(self.is_final(&end))
    }

    /// Run `input`, recording every step taken.
    pub fn trace<I>(&self, input: I) -> Result<Trace<S, Y>, RunError<S, Y>>
    where
        I: IntoIterator<Item = Y>,
    {
        self.validate()?;
        let mut runner = self.runner();
        let mut trace = Trace::new(self.start.clone());

        for (position, symbol) in input.into_iter().enumerate() {
            let from = runner.current().clone();
            runner.step(symbol.clone(), position)?;
            trace = trace.record(StepRecord {
                from,
                symbol,
                to: runner.current().clone(),
                position,
            });
        }

        Ok(trace)
    }
}

impl<S: State> Automaton<S, char> {
    /// Run the trimmed characters of `input` on a fresh cursor.
    pub fn process(&self, input: &str) -> Result<S, RunError<S, char>> {
        self.runner().process(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ValidationError;
    use crate::state_enum;

    state_enum! {
        enum Mod {
            S0,
            S1,
            S2,
        }
    }

    state_enum! {
        enum Pair {
            A,
            B,
        }
    }

    fn mod_three() -> Automaton<Mod, char> {
        let edges = [
            (Mod::S0, '0', Mod::S0),
            (Mod::S0, '1', Mod::S1),
            (Mod::S1, '0', Mod::S2),
            (Mod::S1, '1', Mod::S0),
            (Mod::S2, '0', Mod::S1),
            (Mod::S2, '1', Mod::S2),
        ];

        let mut automaton = Automaton::new(Mod::S0)
            .with_final(Mod::S0)
            .with_final(Mod::S1)
            .with_final(Mod::S2)
            .with_symbols(['0', '1']);
        for (from, symbol, to) in edges {
            automaton.add_transition(from, symbol, to).unwrap();
        }
        automaton
    }

    fn a_to_b() -> Automaton<Pair, char> {
        Automaton::new(Pair::A)
            .with_final(Pair::B)
            .with_symbols(['0'])
            .with_transition(Pair::A, '0', Pair::B)
            .unwrap()
    }

    #[test]
    fn process_reaches_expected_states() {
        let automaton = mod_three();
        assert_eq!(automaton.process("1101"), Ok(Mod::S1));
        assert_eq!(automaton.process("1110"), Ok(Mod::S2));
        assert_eq!(automaton.process("1111"), Ok(Mod::S0));
    }

    #[test]
    fn process_trims_outer_whitespace() {
        assert_eq!(mod_three().process("   0   "), Ok(Mod::S0));
        assert_eq!(mod_three().process("\t10\n"), Ok(Mod::S2));
    }

    #[test]
    fn process_rejects_internal_whitespace() {
        let result = mod_three().process("0 0");
        assert_eq!(
            result,
            Err(RunError::Step(StepError::InvalidSymbol {
                symbol: ' ',
                position: 1,
            }))
        );
    }

    #[test]
    fn empty_input_stays_at_start() {
        let automaton = a_to_b();
        let mut runner = automaton.runner();
        assert_eq!(runner.run(Vec::new()), Ok(Pair::A));
        assert_eq!(runner.current(), &Pair::A);
        assert!(!runner.is_accepting());
        assert_eq!(automaton.process(""), Ok(Pair::A));
        assert_eq!(automaton.process("   "), Ok(Pair::A));
    }

    #[test]
    fn step_rejects_symbol_outside_alphabet() {
        let automaton = a_to_b();
        let mut runner = automaton.runner();
        assert_eq!(
            runner.step('1', 0),
            Err(StepError::InvalidSymbol {
                symbol: '1',
                position: 0,
            })
        );
        assert_eq!(runner.current(), &Pair::A);
    }

    #[test]
    fn step_reports_missing_transition() {
        let automaton = a_to_b();
        let mut runner = automaton.runner();
        runner.step('0', 0).unwrap();
        assert_eq!(
            runner.step('0', 1),
            Err(StepError::NoTransition {
                state: Pair::B,
                symbol: '0',
                position: 1,
            })
        );
        assert_eq!(runner.current(), &Pair::B);
    }

    #[test]
    fn run_current_accepting_reset() {
        let automaton = a_to_b();
        let mut runner = automaton.runner();

        assert_eq!(runner.current(), &Pair::A);
        assert!(!runner.is_accepting());

        assert_eq!(runner.run(['0']), Ok(Pair::B));
        assert_eq!(runner.current(), &Pair::B);
        assert!(runner.is_accepting());

        runner.reset();
        assert_eq!(runner.current(), &Pair::A);
        assert!(!runner.is_accepting());
    }

    #[test]
    fn run_resets_before_stepping() {
        let automaton = a_to_b();
        let mut runner = automaton.runner();
        runner.run(['0']).unwrap();
        assert_eq!(runner.run(['0']), Ok(Pair::B));
    }

    #[test]
    fn run_validates_before_touching_cursor() {
        let automaton: Automaton<Pair, char> = Automaton::new(Pair::A).with_state(Pair::B, true);
        let mut runner = automaton.runner();
        assert_eq!(
            runner.run(['0']),
            Err(RunError::Invalid(ValidationError::EmptyAlphabet))
        );
        assert_eq!(runner.current(), &Pair::A);
    }

    #[test]
    fn run_fails_fast_at_first_bad_symbol() {
        let err = mod_three().run("10x1y".chars()).unwrap_err();
        assert_eq!(err.position(), Some(2));
    }

    #[test]
    fn run_fails_on_missing_transition() {
        let partial: Automaton<Pair, char> = Automaton::new(Pair::A)
            .with_state(Pair::B, false)
            .with_symbols(['0', '1'])
            .with_transition(Pair::A, '1', Pair::B)
            .unwrap();
        let err = partial.run(['1', '1', '0']).unwrap_err();
        assert_eq!(
            err,
            RunError::Step(StepError::NoTransition {
                state: Pair::B,
                symbol: '1',
                position: 1,
            })
        );
    }

    #[test]
    fn accepts_reports_final_state() {
        let automaton = a_to_b();
        assert_eq!(automaton.accepts(['0']), Ok(true));
        assert_eq!(automaton.accepts([]), Ok(false));
        assert!(automaton.accepts(['1']).is_err());
    }

    #[test]
    fn trace_records_each_step() {
        let trace = mod_three().trace("110".chars()).unwrap();
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.path(), vec![&Mod::S0, &Mod::S1, &Mod::S0, &Mod::S0]);
        assert_eq!(trace.steps()[1].symbol, '1');
        assert_eq!(trace.steps()[1].position, 1);
        assert_eq!(trace.end(), &Mod::S0);
    }

    #[test]
    fn trace_propagates_step_errors() {
        let err = mod_three().trace("1 1".chars()).unwrap_err();
        assert_eq!(err.position(), Some(1));
    }

    #[test]
    fn runs_on_one_automaton_are_independent() {
        let automaton = mod_three();
        let mut first = automaton.runner();
        let mut second = automaton.runner();

        first.run("1".chars()).unwrap();
        assert_eq!(first.current(), &Mod::S1);
        assert_eq!(second.current(), &Mod::S0);

        second.run("10".chars()).unwrap();
        assert_eq!(first.current(), &Mod::S1);
        assert_eq!(second.current(), &Mod::S2);
    }

    #[test]
    fn concurrent_runs_share_one_definition() {
        let automaton = mod_three();
        let inputs = ["1101", "1110", "1111", "0", "10", "11"];

        let results: Vec<Mod> = std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| {
                    let automaton = &automaton;
                    scope.spawn(move || automaton.process(input).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(
            results,
            vec![Mod::S1, Mod::S2, Mod::S0, Mod::S0, Mod::S2, Mod::S0]
        );
    }
}
