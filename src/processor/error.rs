//! Terminal failures of a run. Each one halts the interpreter and ends up
//! in `ExecutionResult::error`; lines that simply aren't commands never do.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: {keyword} doesn't like its input: {detail}")]
    MalformedArgument {
        line: usize,
        keyword: String,
        detail: String,
    },
    #[error("line {line}: bad loop header: {detail}")]
    MalformedRepetitionCount { line: usize, detail: String },
    #[error("line {line}: loops can't be nested inside another loop")]
    NestedRepetition { line: usize },
}

impl ScriptError {
    /// 1-based line the failure was raised on.
    pub fn line(&self) -> usize {
        match self {
            ScriptError::MalformedArgument { line, .. } => *line,
            ScriptError::MalformedRepetitionCount { line, .. } => *line,
            ScriptError::NestedRepetition { line } => *line,
        }
    }
}
