use derive_more::{Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// A length in layout points. Every width, height, spacing and coordinate in this
/// crate is expressed in points; what a point maps to on screen is up to the caller.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    DivAssign,
    Sum,
    Display,
    From,
    Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

impl Pt {
    pub const ZERO: Pt = Pt(0.0);

    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_arithmetic() {
        assert_eq!(Pt(30.0) * 2.0, Pt(60.0));
        assert_eq!(Pt(60.0) / 4.0, Pt(15.0));
        assert_eq!(Pt(50.0) + Pt(10.0) - Pt(5.0), Pt(55.0));
    }

    #[test]
    fn test_sum_and_max() {
        let total: Pt = [Pt(1.0), Pt(2.0), Pt(3.5)].into_iter().sum();
        assert_eq!(total, Pt(6.5));
        assert_eq!(Pt(3.0).max(Pt(7.0)), Pt(7.0));
        assert_eq!(Pt(3.0).min(Pt(7.0)), Pt(3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Pt(12.5).to_string(), "12.5pt");
    }
}
