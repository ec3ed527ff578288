use crate::units::*;

/// A rectangle, specified by two opposite corners. Layout coordinates grow rightwards
/// and downwards, so the first corner is the top-left one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (top-left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (top-left) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (bottom-right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (bottom-right) corner.
    pub y2: Pt,
}

impl Rect {
    /// Create a rectangle from its top-left corner and its size
    pub fn from_origin_size(origin: (Pt, Pt), width: Pt, height: Pt) -> Rect {
        Rect {
            x1: origin.0,
            y1: origin.1,
            x2: origin.0 + width,
            y2: origin.1 + height,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// The top-left corner
    pub fn origin(&self) -> (Pt, Pt) {
        (self.x1, self.y1)
    }

    /// The smallest rectangle containing both `self` and `other`
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }
}

impl From<Rect> for (Pt, Pt, Pt, Pt) {
    fn from(r: Rect) -> Self {
        (r.x1, r.y1, r.x2, r.y2)
    }
}

impl From<(Pt, Pt, Pt, Pt)> for Rect {
    fn from(r: (Pt, Pt, Pt, Pt)) -> Self {
        Rect {
            x1: r.0,
            y1: r.1,
            x2: r.2,
            y2: r.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_origin_size() {
        let r = Rect::from_origin_size((Pt(10.0), Pt(4.0)), Pt(50.0), Pt(20.0));
        assert_eq!(r.x2, Pt(60.0));
        assert_eq!(r.y2, Pt(24.0));
        assert_eq!(r.width(), Pt(50.0));
        assert_eq!(r.height(), Pt(20.0));
        assert_eq!(r.origin(), (Pt(10.0), Pt(4.0)));
    }

    #[test]
    fn test_union() {
        let a = Rect::from_origin_size((Pt(0.0), Pt(0.0)), Pt(10.0), Pt(10.0));
        let b = Rect::from_origin_size((Pt(5.0), Pt(-5.0)), Pt(20.0), Pt(5.0));
        let u = a.union(&b);
        assert_eq!(u, (Pt(0.0), Pt(-5.0), Pt(25.0), Pt(10.0)).into());
    }
}
