//! Dump an execution result as pretty JSON.

use crate::model::ExecutionResult;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn render(result: &ExecutionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

pub fn emit(result: &ExecutionResult, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, result)?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::execute;
    use serde_json::Value;

    #[test]
    fn test_render_shape() {
        let result = execute("forward(10)\npencolor('red')\nforward(x)");
        let json: Value = serde_json::from_str(&render(&result).unwrap()).unwrap();

        assert_eq!(json["steps"].as_array().unwrap().len(), 3);
        assert_eq!(json["steps"][2]["color"], "red");
        assert_eq!(json["steps"][2]["heading"], 90.0);
        assert_eq!(json["pathLength"], 10.0);
        assert_eq!(json["totalTurns"], 0.0);
        assert!(json["error"].as_str().unwrap().starts_with("line 3:"));
    }

    #[test]
    fn test_emit_writes_rendered_result() {
        let result = execute("for i in range(4):\n    fd(10)\n    rt(90)");
        let path = std::env::temp_dir().join(format!("turtle-dojo-{}.json", std::process::id()));
        emit(&result, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, format!("{}\n", render(&result).unwrap()));
        let json: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["steps"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_ok_run_has_null_error() {
        let json: Value = serde_json::from_str(&render(&execute("")).unwrap()).unwrap();
        assert!(json["error"].is_null());
    }
}
