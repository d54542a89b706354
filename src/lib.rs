pub mod cli;
pub mod logging;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

pub use model::{CursorState, ExecutionResult, Options, Step};
pub use processor::{execute, execute_with};

use anyhow::{Context, bail};
use clap::Parser;
use std::path::Path;

use cli::Action;
use model::Verdict;

pub fn run() -> anyhow::Result<()> {
    logging::init();
    let args = cli::Cli::parse();

    match args.action {
        Action::Run {
            script,
            json,
            json_out,
            svg,
            options,
        } => run_script(
            &script,
            json,
            json_out.as_deref(),
            svg.as_deref(),
            &options.into(),
        ),
        Action::Check {
            level,
            script,
            levels,
            options,
        } => check(level, &script, levels.as_deref(), &options.into()),
        Action::Preview { level, svg, levels } => preview(level, &svg, levels.as_deref()),
        Action::Levels { levels } => list(levels.as_deref()),
    }
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))
}

fn run_script(
    path: &Path,
    json: bool,
    json_out: Option<&Path>,
    svg: Option<&Path>,
    options: &Options,
) -> anyhow::Result<()> {
    // 1. ── Execute ────────────────────────────────────────────────────
    let source = read_script(path)?;
    let result = execute_with(&source, options);

    // 2. ── Write outputs ──────────────────────────────────────────────
    if let Some(svg) = svg {
        writer::svg::emit(&result.steps, svg)
            .with_context(|| format!("Writing {}", svg.display()))?;
    }
    if let Some(out) = json_out {
        writer::json::emit(&result, out)
            .with_context(|| format!("Writing {}", out.display()))?;
    }

    if json {
        println!("{}", writer::json::render(&result).context("Serialising result")?);
    } else {
        print_summary(&result);
    }
    Ok(())
}

fn check(id: u32, path: &Path, catalog: Option<&Path>, options: &Options) -> anyhow::Result<()> {
    let levels = parser::load_levels_from(catalog)?;
    let level = parser::find_level(&levels, id)?;
    let source = read_script(path)?;

    let result = execute_with(&source, options);
    print_summary(&result);

    match level.evaluate(&result) {
        Verdict::Solved => {
            println!("Level {} ({}) solved!", level.id, level.title);
            Ok(())
        }
        Verdict::Unsolved => {
            if let Some(hint) = level.hints.first() {
                println!("Hint: {hint}");
            }
            bail!("the drawing doesn't match the {} yet", level.target_shape)
        }
        Verdict::Errored(e) => bail!("script failed: {e}"),
    }
}

fn preview(id: u32, svg: &Path, catalog: Option<&Path>) -> anyhow::Result<()> {
    let levels = parser::load_levels_from(catalog)?;
    let level = parser::find_level(&levels, id)?;
    writer::svg::emit(&level.preview(), svg).with_context(|| format!("Writing {}", svg.display()))
}

fn list(catalog: Option<&Path>) -> anyhow::Result<()> {
    for level in parser::load_levels_from(catalog)? {
        println!("{:>3}  {:<24} {}", level.id, level.title, level.target_shape);
    }
    Ok(())
}

fn print_summary(result: &ExecutionResult) {
    println!("steps:       {}", result.steps.len());
    println!("path length: {:.2}", result.path_length);
    println!("total turns: {:.2}", result.total_turns);
    if let Some(end) = result.final_state() {
        println!(
            "final state: ({:.2}, {:.2}) heading {} pen {} colour {}",
            end.x,
            end.y,
            end.heading,
            if end.pen_down { "down" } else { "up" },
            end.color
        );
    }
    if let Some(e) = &result.error {
        println!("error:       {e}");
    }
}
