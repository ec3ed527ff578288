use std::str::FromStr;

use derive_more::Display;

use super::lines::Line;
use crate::error::WrapError;
use crate::units::Pt;

/// How each line is positioned horizontally within the wrap width
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum Alignment {
    /// Lines start at `x = 0`
    #[default]
    #[display("left")]
    Left,
    /// Lines are centred within the wrap width
    #[display("center")]
    Center,
    /// Lines end flush against the wrap width
    #[display("right")]
    Right,
    /// Lines start at `x = 0` and the spacing between boxes is stretched
    /// uniformly so the line spans the whole wrap width
    #[display("justified")]
    Justified,
}

impl Alignment {
    /// Resolves where the first box of `line` starts and, for justified lines, the
    /// uniform gap that replaces each box's own spacing.
    ///
    /// Without a wrap limit there is nothing to align against, so every mode
    /// lays out as [Alignment::Left].
    pub fn resolve(self, line: &Line, wrap: Option<Pt>) -> (Pt, Option<Pt>) {
        let Some(wrap) = wrap else {
            return (Pt::ZERO, None);
        };

        match self {
            Alignment::Left => (Pt::ZERO, None),
            Alignment::Center => ((wrap - line.cum_total_width) / 2.0, None),
            Alignment::Right => (wrap - line.cum_total_width, None),
            Alignment::Justified => (Pt::ZERO, line.justified_gap(wrap)),
        }
    }
}

impl FromStr for Alignment {
    type Err = WrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "center" | "centre" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            "justified" | "justify" => Ok(Alignment::Justified),
            _ => Err(WrapError::UnknownAlignment(s.to_string())),
        }
    }
}

/// Integer codes as used by radio-button style controls: 0 = left, 1 = center,
/// 2 = right, 3 = justified
impl TryFrom<u8> for Alignment {
    type Error = WrapError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Alignment::Left),
            1 => Ok(Alignment::Center),
            2 => Ok(Alignment::Right),
            3 => Ok(Alignment::Justified),
            _ => Err(WrapError::UnknownAlignment(code.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of(cum_width: f32, cum_total_width: f32) -> Line {
        Line {
            items: Vec::new(),
            max_height: Pt(20.0),
            cum_total_width: Pt(cum_total_width),
            cum_width: Pt(cum_width),
        }
    }

    #[test]
    fn test_mirror_offsets() {
        let line = line_of(100.0, 110.0);
        let wrap = Some(Pt(150.0));

        let (left, _) = Alignment::Left.resolve(&line, wrap);
        let (right, _) = Alignment::Right.resolve(&line, wrap);
        let (center, _) = Alignment::Center.resolve(&line, wrap);

        assert_eq!(left, Pt(0.0));
        assert_eq!(right, Pt(40.0));
        assert_eq!(center, (left + right) / 2.0);
    }

    #[test]
    fn test_unset_wrap_falls_back_to_left() {
        let line = line_of(100.0, 110.0);
        for alignment in [
            Alignment::Left,
            Alignment::Center,
            Alignment::Right,
            Alignment::Justified,
        ] {
            assert_eq!(alignment.resolve(&line, None), (Pt(0.0), None));
        }
    }

    #[test]
    fn test_justified_without_items_has_no_gap() {
        let line = line_of(0.0, 0.0);
        assert_eq!(
            Alignment::Justified.resolve(&line, Some(Pt(100.0))),
            (Pt(0.0), None)
        );
    }

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!("Justified".parse::<Alignment>(), Ok(Alignment::Justified));
        assert_eq!(" centre ".parse::<Alignment>(), Ok(Alignment::Center));
        assert_eq!(Alignment::try_from(2), Ok(Alignment::Right));
        assert_eq!(
            "middle".parse::<Alignment>(),
            Err(WrapError::UnknownAlignment("middle".to_string()))
        );
        assert!(Alignment::try_from(4).is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Alignment::Left.to_string(), "left");
        assert_eq!(Alignment::Center.to_string(), "center");
        assert_eq!(Alignment::Right.to_string(), "right");
        assert_eq!(Alignment::Justified.to_string(), "justified");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let alignment = Alignment::Right;
        assert_eq!(alignment.to_string().parse::<Alignment>(), Ok(alignment));
    }
}
