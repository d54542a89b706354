//! Pure turtle geometry: command -> effect -> new cursor state.

use super::ast::{Command, Effect};
use crate::model::CursorState;

/// Effect of `cmd` when issued from `state`.
pub fn effect(cmd: &Command, state: &CursorState) -> Effect {
    match cmd {
        Command::Forward(dist) => travel(state.heading, *dist),
        Command::Backward(dist) => travel(state.heading, -*dist),
        Command::Left(deg) => turn(*deg),
        Command::Right(deg) => turn(-*deg),
        Command::PenColor(color) => Effect {
            color: Some(color.clone()),
            ..Effect::default()
        },
        Command::PenUp => Effect {
            pen_down: Some(false),
            ..Effect::default()
        },
        Command::PenDown => Effect {
            pen_down: Some(true),
            ..Effect::default()
        },
    }
}

fn travel(heading: f64, signed_dist: f64) -> Effect {
    let rad = heading.to_radians();
    Effect {
        position_delta: (rad.cos() * signed_dist, rad.sin() * signed_dist),
        contributes_to_path: true,
        magnitude: signed_dist.abs(),
        ..Effect::default()
    }
}

fn turn(delta: f64) -> Effect {
    Effect {
        heading_delta: delta,
        contributes_to_turn: true,
        magnitude: delta.abs(),
        ..Effect::default()
    }
}

/// Apply an effect. Heading is left unnormalised on purpose.
pub fn apply(state: &CursorState, effect: &Effect) -> CursorState {
    CursorState {
        x: state.x + effect.position_delta.0,
        y: state.y + effect.position_delta.1,
        heading: state.heading + effect.heading_delta,
        pen_down: effect.pen_down.unwrap_or(state.pen_down),
        color: effect.color.clone().unwrap_or_else(|| state.color.clone()),
    }
}
