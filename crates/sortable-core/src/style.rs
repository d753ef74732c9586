//! Visual commands sent from the engine to the host.

use crate::math::Vec2;
use std::time::Duration;

/// Parse a CSS length in pixels. Anything that is not a `px` value is 0.
pub fn css_pixels(value: &str) -> f32 {
    value
        .trim()
        .strip_suffix("px")
        .and_then(|number| number.trim().parse::<f32>().ok())
        .filter(|number| number.is_finite())
        .unwrap_or(0.0)
}

/// Placement of the floating drag helper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatPlacement {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub z_index: i32,
}

/// A single visual mutation of one element.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleCommand {
    /// Offset the element from its layout position.
    Translate(Vec2),
    /// Drop any translate back to the stylesheet value.
    ResetTransform,
    /// Animate subsequent transform changes over this duration.
    TransitionDuration(Duration),
    ResetTransition,
    /// Hide in place, keeping the element's layout slot.
    Conceal,
    Reveal,
    /// Take the element out of flow at a fixed viewport position, sized
    /// border-box, stacked above the page and transparent to input.
    Float(FloatPlacement),
    AddClass(String),
}

impl StyleCommand {
    /// CSS declarations equivalent to this command, for DOM-backed hosts.
    ///
    /// An empty value means "remove the inline declaration". Class changes
    /// carry no declarations.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        match self {
            StyleCommand::Translate(offset) => vec![(
                "transform",
                format!("translate3d({}px, {}px, 0)", offset.x, offset.y),
            )],
            StyleCommand::ResetTransform => vec![("transform", String::new())],
            StyleCommand::TransitionDuration(duration) => {
                vec![("transition-duration", format!("{}ms", duration.as_millis()))]
            }
            StyleCommand::ResetTransition => vec![("transition-duration", String::new())],
            StyleCommand::Conceal => vec![
                ("visibility", "hidden".to_string()),
                ("opacity", "0".to_string()),
            ],
            StyleCommand::Reveal => vec![("visibility", String::new()), ("opacity", String::new())],
            StyleCommand::Float(placement) => vec![
                ("position", "fixed".to_string()),
                ("top", format!("{}px", placement.top)),
                ("left", format!("{}px", placement.left)),
                ("width", format!("{}px", placement.width)),
                ("height", format!("{}px", placement.height)),
                ("box-sizing", "border-box".to_string()),
                ("pointer-events", "none".to_string()),
                ("z-index", placement.z_index.to_string()),
            ],
            StyleCommand::AddClass(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_pixels() {
        assert_eq!(css_pixels("12px"), 12.0);
        assert_eq!(css_pixels("-4.5px"), -4.5);
        assert_eq!(css_pixels(" 3px "), 3.0);
        assert_eq!(css_pixels("1.5em"), 0.0);
        assert_eq!(css_pixels("auto"), 0.0);
        assert_eq!(css_pixels("px"), 0.0);
        assert_eq!(css_pixels("infpx"), 0.0);
        assert_eq!(css_pixels(""), 0.0);
    }

    #[test]
    fn test_translate_declaration() {
        let decls = StyleCommand::Translate(Vec2::new(0.0, -50.0)).declarations();
        assert_eq!(decls, vec![("transform", "translate3d(0px, -50px, 0)".to_string())]);
    }

    #[test]
    fn test_transition_declaration() {
        let decls = StyleCommand::TransitionDuration(Duration::from_millis(300)).declarations();
        assert_eq!(decls, vec![("transition-duration", "300ms".to_string())]);
    }

    #[test]
    fn test_float_is_input_transparent() {
        let decls = StyleCommand::Float(FloatPlacement {
            top: 10.0,
            left: 0.0,
            width: 200.0,
            height: 50.0,
            z_index: 600,
        })
        .declarations();
        assert!(decls.contains(&("pointer-events", "none".to_string())));
        assert!(decls.contains(&("z-index", "600".to_string())));
        assert!(decls.contains(&("top", "10px".to_string())));
    }

    #[test]
    fn test_reset_clears_values() {
        for command in [StyleCommand::ResetTransform, StyleCommand::ResetTransition, StyleCommand::Reveal] {
            assert!(command.declarations().iter().all(|(_, value)| value.is_empty()));
        }
    }
}
