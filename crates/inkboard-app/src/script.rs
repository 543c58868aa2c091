//! Replay scripts: a JSON array of toolbar, pointer and keyboard steps.
//!
//! ```json
//! [
//!   { "action": "set_tool", "tool": "rectangle" },
//!   { "action": "down", "x": 10, "y": 74 },
//!   { "action": "move", "x": 50, "y": 94 },
//!   { "action": "up", "x": 50, "y": 94 }
//! ]
//! ```
//!
//! Pointer coordinates are client coordinates, toolbar included.

use inkboard_core::shapes::Shape;
use inkboard_core::{PointerEvent, Rgba, Tool, Whiteboard};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    SetTool { tool: Tool },
    SetColor { color: String },
    SetStrokeWidth { width: u32 },
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Resize { width: f64, height: f64 },
    TypeText { text: String },
    Backspace,
    Escape,
    Undo,
    Redo,
}

pub fn parse(json: &str) -> serde_json::Result<Vec<Step>> {
    serde_json::from_str(json)
}

/// Apply `steps` in order.
pub fn run(board: &mut Whiteboard, steps: &[Step]) {
    for (i, step) in steps.iter().enumerate() {
        log::debug!("step {}: {:?}", i, step);
        match step {
            Step::SetTool { tool } => board.set_tool(*tool),
            Step::SetColor { color } => board.set_color(color.clone()),
            Step::SetStrokeWidth { width } => board.set_stroke_width(*width),
            Step::Down { x, y } => board.pointer(PointerEvent::Down { position: Point::new(*x, *y) }),
            Step::Move { x, y } => board.pointer(PointerEvent::Move { position: Point::new(*x, *y) }),
            Step::Up { x, y } => board.pointer(PointerEvent::Up { position: Point::new(*x, *y) }),
            Step::Resize { width, height } => board.resize(Size::new(*width, *height)),
            Step::TypeText { text } => {
                if !board.type_text(text) {
                    log::warn!("step {}: no text is being edited", i);
                }
            }
            Step::Backspace => {
                board.backspace();
            }
            Step::Escape => board.escape(),
            Step::Undo => {
                if !board.undo() {
                    log::debug!("step {}: nothing to undo", i);
                }
            }
            Step::Redo => {
                if !board.redo() {
                    log::debug!("step {}: nothing to redo", i);
                }
            }
        }
    }
}

/// One-line summary of a shape.
pub fn describe(shape: &Shape) -> String {
    let style = shape.style();
    let geometry = match shape {
        Shape::Rectangle(r) => format!(
            "x={:.1} y={:.1} w={:.1} h={:.1}",
            r.position.x, r.position.y, r.width, r.height
        ),
        Shape::Circle(c) => format!("cx={:.1} cy={:.1} r={:.1}", c.center.x, c.center.y, c.radius),
        Shape::Line(l) => format!(
            "({:.1}, {:.1}) -> ({:.1}, {:.1})",
            l.start.x, l.start.y, l.end.x, l.end.y
        ),
        Shape::ArrowHead(h) => format!(
            "tip=({:.1}, {:.1}) left=({:.1}, {:.1}) right=({:.1}, {:.1})",
            h.tip.x, h.tip.y, h.left_barb.x, h.left_barb.y, h.right_barb.x, h.right_barb.y
        ),
        Shape::Freehand(f) => format!("{} points", f.len()),
        Shape::Text(t) => format!(
            "at ({:.1}, {:.1}) size={:.0} {:?}",
            t.position.x, t.position.y, t.font_size, t.content
        ),
    };
    format!(
        "{:<10} {} stroke={} fill={} width={}",
        shape.kind_name(),
        geometry,
        color_label(&style.stroke),
        color_label(&style.fill),
        style.stroke_width
    )
}

/// Canonical hex for a color, `none` when fully transparent. Strings that are
/// not colors are shown as given.
fn color_label(color: &str) -> String {
    match Rgba::parse(color) {
        Ok(rgba) if rgba.a == 0 => "none".to_string(),
        Ok(rgba) => rgba.to_hex(),
        Err(err) => {
            log::debug!("{}", err);
            color.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkboard_core::RenderSurface;

    #[test]
    fn test_parse_steps() {
        let steps = parse(
            r##"[
                {"action": "set_tool", "tool": "circle"},
                {"action": "set_color", "color": "#ff0000"},
                {"action": "down", "x": 0, "y": 64},
                {"action": "type_text", "text": "hi"},
                {"action": "undo"}
            ]"##,
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![
                Step::SetTool { tool: Tool::Circle },
                Step::SetColor { color: "#ff0000".to_string() },
                Step::Down { x: 0.0, y: 64.0 },
                Step::TypeText { text: "hi".to_string() },
                Step::Undo,
            ]
        );
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!(parse(r#"[{"action": "lasso"}]"#).is_err());
        assert!(parse(r#"[{"action": "set_tool", "tool": "lasso"}]"#).is_err());
    }

    #[test]
    fn test_run_rectangle_script() {
        let steps = parse(
            r#"[
                {"action": "set_tool", "tool": "rectangle"},
                {"action": "down", "x": 10, "y": 74},
                {"action": "move", "x": 50, "y": 94},
                {"action": "up", "x": 50, "y": 94}
            ]"#,
        )
        .unwrap();
        let mut board = Whiteboard::default();
        run(&mut board, &steps);
        let lines: Vec<String> = board.scene().shapes().iter().map(describe).collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("rectangle"));
        assert!(lines[0].contains("x=10.0 y=10.0 w=40.0 h=20.0"));
    }

    #[test]
    fn test_describe_normalizes_colors() {
        let mut board = Whiteboard::default();
        run(
            &mut board,
            &[
                Step::SetColor { color: "#F00".to_string() },
                Step::SetTool { tool: Tool::Circle },
                Step::Down { x: 0.0, y: 64.0 },
                Step::Move { x: 40.0, y: 64.0 },
                Step::Up { x: 40.0, y: 64.0 },
                Step::SetColor { color: "tomato".to_string() },
                Step::SetTool { tool: Tool::Text },
                Step::Down { x: 100.0, y: 164.0 },
                Step::Up { x: 100.0, y: 164.0 },
            ],
        );
        let lines: Vec<String> = board.scene().shapes().iter().map(describe).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("stroke=#ff0000 fill=none"));
        assert!(lines[1].contains("stroke=none fill=tomato"));
    }

    #[test]
    fn test_run_undo_on_empty_board() {
        let mut board = Whiteboard::default();
        run(&mut board, &[Step::Undo, Step::Redo, Step::Backspace, Step::Escape]);
        assert!(board.scene().is_empty());
    }
}
