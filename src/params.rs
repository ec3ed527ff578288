use crate::layout::Alignment;
use crate::units::Pt;

/// Parameters controlling how boxes are wrapped and positioned
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// The maximum width of a line. Negative values mean there is no limit and
    /// every box is laid out on a single line.
    pub wrap_width: Pt,
    /// When non-zero, every line is this tall regardless of the boxes on it
    pub line_fixed_height: Pt,
    /// Scales each line's height to get the vertical distance between lines
    pub line_height_multiplier: f32,
    /// How each line is positioned horizontally within the wrap width
    pub alignment: Alignment,
    /// The space required after boxes that are added without one of their own
    pub default_min_space: Pt,
    /// Whether the final line is stretched when the alignment is
    /// [Alignment::Justified]. When `false`, it is laid out flush left instead.
    pub justify_last_line: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            wrap_width: Pt(-1.0),
            line_fixed_height: Pt::ZERO,
            line_height_multiplier: 1.2,
            alignment: Alignment::Left,
            default_min_space: Pt(10.0),
            justify_last_line: true,
        }
    }
}

impl LayoutParams {
    /// Create a new set of parameters with the defaults: no wrap limit, content-sized
    /// lines spaced at 1.2x, left aligned, and 10pt between boxes
    pub fn new() -> LayoutParams {
        LayoutParams::default()
    }

    /// Set the wrap width, modifying `self`. Pass a negative width to remove the limit.
    pub fn wrap_width<D: Into<Pt>>(&mut self, width: D) -> &mut Self {
        self.wrap_width = width.into();
        self
    }

    /// Set the fixed line height, modifying `self`. Zero sizes lines by their content.
    pub fn line_fixed_height<D: Into<Pt>>(&mut self, height: D) -> &mut Self {
        self.line_fixed_height = height.into();
        self
    }

    /// Set the line height multiplier, modifying `self`
    pub fn line_height_multiplier(&mut self, factor: f32) -> &mut Self {
        self.line_height_multiplier = factor;
        self
    }

    /// Set the alignment, modifying `self`
    pub fn alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = alignment;
        self
    }

    /// Set the default minimum space, modifying `self`
    pub fn default_min_space<D: Into<Pt>>(&mut self, space: D) -> &mut Self {
        self.default_min_space = space.into();
        self
    }

    /// Set whether the last line is justified, modifying `self`
    pub fn justify_last_line(&mut self, justify: bool) -> &mut Self {
        self.justify_last_line = justify;
        self
    }

    /// The effective wrap limit, or [None] if lines may grow without bound
    pub fn wrap_limit(&self) -> Option<Pt> {
        if self.wrap_width.0 >= 0.0 {
            Some(self.wrap_width)
        } else {
            None
        }
    }

    /// How far the vertical cursor moves for a line whose tallest box is `max_height`
    pub fn line_advance(&self, max_height: Pt) -> Pt {
        let height = if self.line_fixed_height != Pt::ZERO {
            self.line_fixed_height
        } else {
            max_height
        };
        height * self.line_height_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = LayoutParams::new();
        assert_eq!(params.wrap_limit(), None);
        assert_eq!(params.line_height_multiplier, 1.2);
        assert_eq!(params.alignment, Alignment::Left);
        assert_eq!(params.default_min_space, Pt(10.0));
        assert!(params.justify_last_line);
    }

    #[test]
    fn test_wrap_limit() {
        let mut params = LayoutParams::new();
        params.wrap_width(0.0);
        assert_eq!(params.wrap_limit(), Some(Pt(0.0)));
        params.wrap_width(-0.5);
        assert_eq!(params.wrap_limit(), None);
        params.wrap_width(f32::NAN);
        assert_eq!(params.wrap_limit(), None);
    }

    #[test]
    fn test_line_advance() {
        let mut params = LayoutParams::new();
        params.line_height_multiplier(2.0);
        assert_eq!(params.line_advance(Pt(12.0)), Pt(24.0));

        params.line_fixed_height(30.0);
        assert_eq!(params.line_advance(Pt(12.0)), Pt(60.0));
        assert_eq!(params.line_advance(Pt(90.0)), Pt(60.0));
    }
}
