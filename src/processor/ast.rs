//! What one recognized line means, before it touches the cursor.

/// Every command word the recognizer knows, independent of spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Forward,
    Backward,
    Left,
    Right,
    PenColor,
    PenUp,
    PenDown,
}

impl Keyword {
    /// Dispatch table: spelling -> keyword. Case-sensitive.
    pub const TABLE: &'static [(&'static str, Keyword)] = &[
        ("forward", Keyword::Forward),
        ("fd", Keyword::Forward),
        ("backward", Keyword::Backward),
        ("back", Keyword::Backward),
        ("bk", Keyword::Backward),
        ("left", Keyword::Left),
        ("lt", Keyword::Left),
        ("right", Keyword::Right),
        ("rt", Keyword::Right),
        ("pencolor", Keyword::PenColor),
        ("color", Keyword::PenColor),
        ("penup", Keyword::PenUp),
        ("pu", Keyword::PenUp),
        ("pendown", Keyword::PenDown),
        ("pd", Keyword::PenDown),
    ];

    pub fn lookup(word: &str) -> Option<Keyword> {
        Self::TABLE
            .iter()
            .find(|(spelling, _)| *spelling == word)
            .map(|(_, kw)| *kw)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `forward(n)` – move `n` units along the heading.
    Forward(f64),
    /// `backward(n)` – move `n` units against the heading.
    Backward(f64),
    /// `left(deg)` – rotate counter-clockwise.
    Left(f64),
    /// `right(deg)` – rotate clockwise.
    Right(f64),
    /// `pencolor('name')` – replace the pen colour verbatim.
    PenColor(String),
    PenUp,
    PenDown,
}

/// `for <variable> in range(<count>):`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopHeader {
    pub variable: String,
    /// Saturates at `u64::MAX`; the step ceiling stops a run long before.
    pub count: u64,
}

/// The recognizer's classification of a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// Empty or comment only.
    Blank,
    Header(LoopHeader),
    Command(Command),
    /// Anything else (`pass`, free text, typos). Skipped without error.
    NotACommand,
}

/// What applying a command does to a cursor, relative to its current state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Effect {
    pub position_delta: (f64, f64),
    pub heading_delta: f64,
    pub color: Option<String>,
    pub pen_down: Option<bool>,
    pub contributes_to_path: bool,
    pub contributes_to_turn: bool,
    /// Always non-negative; added to whichever metric the effect contributes to.
    pub magnitude: f64,
}
