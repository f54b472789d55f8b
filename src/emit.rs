//! Script emission: frames → generated Manim scene classes.

use std::io::Write;

use crate::{
    config::CanvasConfig,
    error::ScenecastResult,
    model::{Frame, ShapeKind},
    transform::{frame_scale, to_canvas},
};

/// Scene class name for a frame: title-case the name, strip all whitespace,
/// wrap as `Frame<Name>Scene`. Two frames whose names sanitize to the same
/// identifier produce duplicate class definitions in the output; the later
/// one wins under Python's class-definition semantics. Known limitation.
pub fn scene_identifier(name: &str) -> String {
    let mut ident = String::with_capacity(name.len() + 10);
    ident.push_str("Frame");

    let mut prev_alpha = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            prev_alpha = false;
            continue;
        }
        if prev_alpha {
            ident.extend(ch.to_lowercase());
        } else {
            ident.extend(ch.to_uppercase());
        }
        prev_alpha = ch.is_alphabetic();
    }

    ident.push_str("Scene");
    ident
}

/// Write the complete script: one import header, then one scene class per
/// frame in aggregation order. Fails on the first frame with a zero
/// dimension; earlier scenes already written stay in the output.
pub fn write_script<W: Write>(
    out: &mut W,
    frames: &[Frame],
    canvas: &CanvasConfig,
) -> ScenecastResult<()> {
    writeln!(out, "from manim import *")?;
    writeln!(out)?;

    for frame in frames {
        let scale = frame_scale(frame, canvas)?;
        let ident = scene_identifier(&frame.name);

        tracing::info!(
            scene = %ident,
            width = frame.width,
            height = frame.height,
            x = frame.x,
            y = frame.y,
            scale,
            "emitting scene"
        );

        writeln!(out, "class {ident}(Scene):")?;
        writeln!(out, "    def construct(self):")?;

        for obj in &frame.objects {
            let p = to_canvas(obj, frame, scale);
            match obj.kind {
                ShapeKind::Rectangle => writeln!(
                    out,
                    "        self.add(Rectangle(width={}, height={}).move_to([{}, {}, 0]))",
                    p.width, p.height, p.x, p.y
                )?,
                ShapeKind::Ellipse => writeln!(
                    out,
                    "        self.add(Ellipse(width={}, height={}).move_to([{}, {}, 0]))",
                    p.width, p.height, p.x, p.y
                )?,
                ShapeKind::Text => {
                    let font_size = obj.font_size * 0.3;
                    let lines: Vec<String> = obj
                        .text
                        .split('\n')
                        .map(|line| {
                            format!(
                                "Text({}, should_center=False, font_size={font_size})",
                                py_str(line)
                            )
                        })
                        .collect();
                    writeln!(
                        out,
                        "        self.add(VGroup({}).arrange(DOWN, buff=0.02, center=False, aligned_edge=LEFT).move_to([{}, {}, 0]))",
                        lines.join(", "),
                        p.x,
                        p.y
                    )?;
                }
                // Other shape types carry no drawing rule; leave them out of
                // the scene rather than fail.
                ShapeKind::Unknown => {}
            }
        }

        writeln!(out)?;
    }

    Ok(())
}

/// A Python single-quoted string literal for `s`.
fn py_str(s: &str) -> String {
    let mut lit = String::with_capacity(s.len() + 2);
    lit.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => lit.push_str("\\\\"),
            '\'' => lit.push_str("\\'"),
            '\n' => lit.push_str("\\n"),
            '\r' => lit.push_str("\\r"),
            '\t' => lit.push_str("\\t"),
            _ => lit.push(ch),
        }
    }
    lit.push('\'');
    lit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FrameObject;

    fn frame_with(objects: Vec<FrameObject>) -> Frame {
        Frame {
            id: "f1".to_string(),
            name: "Intro Scene".to_string(),
            x: 0.0,
            y: 0.0,
            width: 1400.0,
            height: 800.0,
            objects,
        }
    }

    fn obj(kind: ShapeKind, x: f64, y: f64) -> FrameObject {
        FrameObject {
            kind,
            x,
            y,
            width: 100.0,
            height: 100.0,
            text: String::new(),
            font_size: 0.0,
        }
    }

    const CANVAS: CanvasConfig = CanvasConfig {
        frame_width: 14.0,
        frame_height: 8.0,
    };

    fn render(frames: &[Frame]) -> String {
        let mut buf = Vec::new();
        write_script(&mut buf, frames, &CANVAS).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn identifier_title_cases_and_strips_whitespace() {
        assert_eq!(scene_identifier("my frame"), "FrameMyFrameScene");
        assert_eq!(scene_identifier("Intro Scene"), "FrameIntroSceneScene");
        assert_eq!(scene_identifier("INTRO"), "FrameIntroScene");
        assert_eq!(scene_identifier("a  b\tc"), "FrameABCScene");
        assert_eq!(scene_identifier(""), "FrameScene");
    }

    #[test]
    fn identifier_restarts_words_at_non_alphabetic() {
        // Matches Python str.title(): digits and punctuation end a word.
        assert_eq!(scene_identifier("scene 2 redux"), "FrameScene2ReduxScene");
        assert_eq!(scene_identifier("a-b"), "FrameA-BScene");
    }

    #[test]
    fn header_comes_first() {
        let out = render(&[frame_with(vec![])]);
        assert!(out.starts_with("from manim import *\n\n"));
    }

    #[test]
    fn rectangle_statement_uses_canvas_geometry() {
        // Center sits 100 frame units above the frame center: x maps to 0,
        // y to +1 after the axis flip, and the 100x100 box scales to 1x1.
        let out = render(&[frame_with(vec![obj(ShapeKind::Rectangle, 650.0, 250.0)])]);
        assert!(out.contains("class FrameIntroSceneScene(Scene):"));
        assert!(out.contains("    def construct(self):"));
        assert!(out.contains("self.add(Rectangle(width=1, height=1).move_to([0, 1, 0]))"));
    }

    #[test]
    fn ellipse_uses_the_same_placement_rule() {
        let out = render(&[frame_with(vec![obj(ShapeKind::Ellipse, 650.0, 250.0)])]);
        assert!(out.contains("self.add(Ellipse(width=1, height=1).move_to([0, 1, 0]))"));
    }

    #[test]
    fn text_splits_lines_and_scales_font() {
        let mut text = obj(ShapeKind::Text, 650.0, 250.0);
        text.text = "hello\nworld".to_string();
        text.font_size = 20.0;

        let out = render(&[frame_with(vec![text])]);
        assert!(out.contains(
            "VGroup(Text('hello', should_center=False, font_size=6), \
             Text('world', should_center=False, font_size=6))"
        ));
        assert!(out.contains(
            ".arrange(DOWN, buff=0.02, center=False, aligned_edge=LEFT).move_to([0, 1, 0])"
        ));
    }

    #[test]
    fn unknown_shapes_are_skipped_without_error() {
        let out = render(&[frame_with(vec![
            obj(ShapeKind::Unknown, 0.0, 0.0),
            obj(ShapeKind::Rectangle, 650.0, 350.0),
        ])]);
        assert_eq!(out.matches("self.add(").count(), 1);
    }

    #[test]
    fn zero_dimension_frame_aborts_emission() {
        let mut f = frame_with(vec![obj(ShapeKind::Rectangle, 0.0, 0.0)]);
        f.width = 0.0;

        let mut buf = Vec::new();
        let err = write_script(&mut buf, &[f], &CANVAS).unwrap_err();
        assert!(err.to_string().contains("zero width or height"));
        // Header was already written; no scene entries follow.
        assert!(!String::from_utf8(buf).unwrap().contains("class "));
    }

    #[test]
    fn python_string_literal_escapes() {
        assert_eq!(py_str("plain"), "'plain'");
        assert_eq!(py_str("it's"), r"'it\'s'");
        assert_eq!(py_str(r"a\b"), r"'a\\b'");
        assert_eq!(py_str("tab\there"), r"'tab\there'");
    }
}
