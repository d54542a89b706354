//! Line splitting and indentation-delimited block detection.
//!
//! A script is a flat list of lines, each with its leading-whitespace
//! column computed once. A loop body is the run of lines right after a
//! header that are blank or indented; it stops at the first non-blank
//! line that starts in column 0. Only one level is supported.

use super::ast::LoopHeader;
use super::error::ScriptError;
use super::lexer::starts_with_for;

/// One physical line of the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based, for error messages.
    pub number: usize,
    /// Count of leading spaces/tabs.
    pub indent: usize,
    /// Content with surrounding whitespace stripped.
    pub text: &'a str,
}

impl SourceLine<'_> {
    fn belongs_to_body(&self) -> bool {
        self.text.is_empty() || self.indent > 0
    }
}

pub fn split_lines(script: &str) -> Vec<SourceLine<'_>> {
    script
        .split('\n')
        .enumerate()
        .map(|(i, raw)| SourceLine {
            number: i + 1,
            indent: raw.chars().take_while(|c| *c == ' ' || *c == '\t').count(),
            text: raw.trim(),
        })
        .collect()
}

/// A detected loop: header, dedented body and where the outer scan resumes.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<'a> {
    pub header: LoopHeader,
    pub body: Vec<SourceLine<'a>>,
    pub resume: usize,
}

/// Extract the body of the loop whose header sits at `lines[at]`.
///
/// Rejects a second header inside the body.
pub fn scan<'a>(
    lines: &[SourceLine<'a>],
    at: usize,
    header: LoopHeader,
) -> Result<Block<'a>, ScriptError> {
    let start = at + 1;
    let len = lines[start..]
        .iter()
        .take_while(|l| l.belongs_to_body())
        .count();
    let body = &lines[start..start + len];

    if let Some(nested) = body.iter().find(|l| starts_with_for(l.text)) {
        return Err(ScriptError::NestedRepetition {
            line: nested.number,
        });
    }

    Ok(Block {
        header,
        body: body.to_vec(),
        resume: start + len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header(count: u64) -> LoopHeader {
        LoopHeader {
            variable: "i".into(),
            count,
        }
    }

    #[test]
    fn test_split_lines() {
        let lines = split_lines("forward(1)\n    left(2)\r\n\t\n");
        assert_eq!(
            lines,
            vec![
                SourceLine {
                    number: 1,
                    indent: 0,
                    text: "forward(1)"
                },
                SourceLine {
                    number: 2,
                    indent: 4,
                    text: "left(2)"
                },
                SourceLine {
                    number: 3,
                    indent: 1,
                    text: ""
                },
                SourceLine {
                    number: 4,
                    indent: 0,
                    text: ""
                },
            ]
        );
    }

    #[test]
    fn test_body_stops_at_dedent() {
        let src = "for i in range(4):\n    forward(100)\n\n    right(90)\nforward(5)\n";
        let lines = split_lines(src);
        let block = scan(&lines, 0, header(4)).unwrap();

        let texts: Vec<_> = block.body.iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["forward(100)", "", "right(90)"]);
        assert_eq!(block.resume, 4);
        assert_eq!(lines[block.resume].text, "forward(5)");
    }

    #[test]
    fn test_body_runs_to_end_of_script() {
        let lines = split_lines("forward(1)\nfor i in range(2):\n\tleft(1)\n\t  right(1)");
        let block = scan(&lines, 1, header(2)).unwrap();
        assert_eq!(block.body.len(), 2);
        assert_eq!(block.resume, lines.len());
    }

    #[test]
    fn test_empty_body() {
        let lines = split_lines("for i in range(3):\nforward(10)");
        let block = scan(&lines, 0, header(3)).unwrap();
        assert!(block.body.is_empty());
        assert_eq!(block.resume, 1);

        let lines = split_lines("for i in range(3):");
        let block = scan(&lines, 0, header(3)).unwrap();
        assert!(block.body.is_empty());
        assert_eq!(block.resume, 1);
    }

    #[test]
    fn test_column_zero_comment_ends_body() {
        let lines = split_lines("for i in range(2):\n  fd(1)\n# done\n  fd(2)");
        let block = scan(&lines, 0, header(2)).unwrap();
        assert_eq!(block.body.len(), 1);
        assert_eq!(block.resume, 2);
    }

    #[test]
    fn test_nested_header_rejected() {
        let lines = split_lines("for i in range(2):\n  fd(1)\n  for j in range(2):\n    fd(2)");
        let err = scan(&lines, 0, header(2)).unwrap_err();
        assert_eq!(err, ScriptError::NestedRepetition { line: 3 });
    }
}
