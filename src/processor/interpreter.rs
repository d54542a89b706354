//! The driver: walks the script, expands loops, records the trace.

use tracing::{debug, info};

use super::ast::{Command, Line};
use super::block::{self, Block, SourceLine};
use super::cursor;
use super::error::ScriptError;
use super::script_parser::classify;
use crate::model::{CursorState, ExecutionResult, Options, Step};

/// Why the walk stopped early.
enum Halt {
    /// Step ceiling reached. Reported as a normal end of script.
    Truncated,
    Failed(ScriptError),
}

impl From<ScriptError> for Halt {
    fn from(e: ScriptError) -> Self {
        Halt::Failed(e)
    }
}

/// State of one run. Never reused: build a new one per script.
pub struct Interpreter<'o> {
    options: &'o Options,
    state: CursorState,
    steps: Vec<Step>,
    path_length: f64,
    total_turns: f64,
}

impl<'o> Interpreter<'o> {
    pub fn new(options: &'o Options) -> Self {
        let state = CursorState::new(options.default_color.clone());
        Self {
            options,
            steps: vec![Step {
                id: 0,
                state: state.clone(),
            }],
            state,
            path_length: 0.0,
            total_turns: 0.0,
        }
    }

    pub fn run(mut self, script: &str) -> ExecutionResult {
        let lines = block::split_lines(script);
        let error = match self.scan(&lines) {
            Ok(()) => None,
            Err(Halt::Truncated) => {
                info!(max_steps = self.options.max_steps, "step ceiling reached, stopping");
                None
            }
            Err(Halt::Failed(e)) => {
                debug!(error = %e, steps = self.steps.len(), "script failed");
                Some(e)
            }
        };

        ExecutionResult {
            steps: self.steps,
            error,
            path_length: self.path_length,
            total_turns: self.total_turns,
        }
    }

    fn scan(&mut self, lines: &[SourceLine<'_>]) -> Result<(), Halt> {
        let mut i = 0;
        while i < lines.len() {
            let line = &lines[i];
            match classify(line.text, line.number)? {
                Line::Header(header) => {
                    let block = block::scan(lines, i, header)?;
                    self.expand(&block)?;
                    i = block.resume;
                    continue;
                }
                Line::Command(cmd) => self.apply(&cmd)?,
                Line::NotACommand => {
                    debug!(line = line.number, text = line.text, "not a command, skipping");
                }
                Line::Blank => {}
            }
            i += 1;
        }
        Ok(())
    }

    fn expand(&mut self, block: &Block<'_>) -> Result<(), Halt> {
        // Classify once; a failure is replayed at its place in the first iteration.
        let mut body: Vec<Result<Command, ScriptError>> = Vec::new();
        for line in &block.body {
            match classify(line.text, line.number) {
                Ok(Line::Command(cmd)) => body.push(Ok(cmd)),
                // block::scan already rejected nested headers
                Ok(Line::Blank | Line::NotACommand | Line::Header(_)) => {}
                Err(e) => body.push(Err(e)),
            }
        }

        debug!(
            variable = %block.header.variable,
            count = block.header.count,
            commands = body.len(),
            "expanding loop"
        );
        if body.is_empty() {
            return Ok(());
        }

        for _ in 0..block.header.count {
            for cmd in &body {
                match cmd {
                    Ok(cmd) => self.apply(cmd)?,
                    Err(e) => return Err(e.clone().into()),
                }
            }
        }
        Ok(())
    }

    fn apply(&mut self, cmd: &Command) -> Result<(), Halt> {
        if self.steps.len() > self.options.max_steps {
            return Err(Halt::Truncated);
        }

        let effect = cursor::effect(cmd, &self.state);
        self.state = cursor::apply(&self.state, &effect);
        if effect.contributes_to_path {
            self.path_length += effect.magnitude;
        }
        if effect.contributes_to_turn {
            self.total_turns += effect.magnitude;
        }

        let id = self.steps.len();
        self.steps.push(Step {
            id,
            state: self.state.clone(),
        });

        if id >= self.options.max_steps {
            return Err(Halt::Truncated);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str, max_steps: usize) -> ExecutionResult {
        let options = Options {
            max_steps,
            ..Options::default()
        };
        Interpreter::new(&options).run(script)
    }

    #[test]
    fn test_ids_are_sequential() {
        let result = run("fd(1)\nfor i in range(3):\n  lt(1)\n  rt(1)\nbk(1)", 1000);
        let ids: Vec<_> = result.steps.iter().map(|s| s.id).collect();
        assert_eq!(ids, (0..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_ceiling_is_configurable() {
        let result = run("for i in range(50):\n  fd(1)", 10);
        assert!(result.error.is_none());
        assert_eq!(result.steps.len(), 11);
        assert_eq!(result.path_length, 10.0);
    }

    #[test]
    fn test_zero_ceiling_records_only_start() {
        let result = run("fd(1)\nfd(1)", 0);
        assert!(result.error.is_none());
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.path_length, 0.0);
    }

    #[test]
    fn test_ceiling_hit_exactly_is_not_an_error_later() {
        // the line after the ceiling never runs, even if it is broken
        let result = run("fd(1)\nfd(1)\nfd(oops)", 2);
        assert!(result.error.is_none());
        assert_eq!(result.steps.len(), 3);
    }

    #[test]
    fn test_error_in_second_body_line_keeps_first() {
        let result = run("for i in range(5):\n  fd(10)\n  lt(x)\nfd(99)", 1000);
        let err = result.error.expect("should fail");
        assert_eq!(err.line(), 3);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.path_length, 10.0);
        assert_eq!(result.total_turns, 0.0);
    }

    #[test]
    fn test_empty_body_with_huge_count_terminates() {
        let result = run("for i in range(4000000000):\n    pass\nfd(1)", 1000);
        assert!(result.error.is_none());
        assert_eq!(result.steps.len(), 2);
    }
}
