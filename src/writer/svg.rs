//! Emit a static SVG drawing of a trace.
//!
//! Plane coordinates have +y up; SVG has +y down, so every y is negated.

use crate::model::Step;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

const MARGIN: f64 = 20.0;
const STROKE_WIDTH: f64 = 2.0;

pub fn emit(steps: &[Step], path: &Path) -> io::Result<()> {
    fs::write(path, render(steps))
}

pub fn render(steps: &[Step]) -> String {
    let (min_x, min_y, max_x, max_y) = bounds(steps);
    let mut svg = String::new();

    // writing into a String can't fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.3} {:.3} {:.3} {:.3}">"#,
        min_x - MARGIN,
        -max_y - MARGIN,
        (max_x - min_x) + 2.0 * MARGIN,
        (max_y - min_y) + 2.0 * MARGIN,
    );

    for pair in steps.windows(2) {
        let (from, to) = (&pair[0].state, &pair[1].state);
        if !to.pen_down || (from.x == to.x && from.y == to.y) {
            continue;
        }
        let _ = writeln!(
            svg,
            r#"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            from.x,
            -from.y,
            to.x,
            -to.y,
            escape(&to.color),
            STROKE_WIDTH,
        );
    }

    if let Some(last) = steps.last() {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.3}" cy="{:.3}" r="4" fill="{}"/>"#,
            last.state.x,
            -last.state.y,
            escape(&last.state.color),
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Bounding box of all positions, always including the origin.
fn bounds(steps: &[Step]) -> (f64, f64, f64, f64) {
    steps.iter().fold((0.0, 0.0, 0.0, 0.0), |(x0, y0, x1, y1), s| {
        (
            f64::min(x0, s.state.x),
            f64::min(y0, s.state.y),
            f64::max(x1, s.state.x),
            f64::max(y1, s.state.y),
        )
    })
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
