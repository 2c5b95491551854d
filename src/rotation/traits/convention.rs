//! Coordinate axes and Euler angle conventions.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index: X → 0, Y → 1, Z → 2.
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Upper-case letter naming the axis.
    pub const fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    /// Parse an upper-case axis letter.
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'X' => Some(Axis::X),
            'Y' => Some(Axis::Y),
            'Z' => Some(Axis::Z),
            _ => None,
        }
    }

    /// Whether `(self, next)` is a cyclic pair: XY, YZ or ZX.
    pub(crate) const fn precedes(self, next: Axis) -> bool {
        (self.index() + 1) % 3 == next.index()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Axis sequence of an Euler angle triple.
///
/// A convention `"ABC"` means `R = R_A(θ0) · R_B(θ1) · R_C(θ2)`. Adjacent axes
/// always differ; when the first and last axes also differ the convention is
/// Tait-Bryan, otherwise it is a proper Euler convention.
///
/// Values only come out of validation, so every `EulerConvention` is usable:
///
/// ```
/// use rotr::rotation::EulerConvention;
///
/// let zyx: EulerConvention = "ZYX".parse().unwrap();
/// assert!(zyx.is_tait_bryan());
/// assert!("XXY".parse::<EulerConvention>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct EulerConvention([Axis; 3]);

impl EulerConvention {
    /// The 12 valid conventions: six Tait-Bryan, then six proper Euler.
    pub const ALL: [EulerConvention; 12] = {
        use Axis::{X, Y, Z};
        [
            EulerConvention([X, Y, Z]),
            EulerConvention([X, Z, Y]),
            EulerConvention([Y, X, Z]),
            EulerConvention([Y, Z, X]),
            EulerConvention([Z, X, Y]),
            EulerConvention([Z, Y, X]),
            EulerConvention([X, Y, X]),
            EulerConvention([X, Z, X]),
            EulerConvention([Y, X, Y]),
            EulerConvention([Y, Z, Y]),
            EulerConvention([Z, X, Z]),
            EulerConvention([Z, Y, Z]),
        ]
    };

    /// Build a convention, rejecting a middle axis equal to a neighbour.
    pub fn new(first: Axis, second: Axis, third: Axis) -> Result<Self> {
        if second == first || second == third {
            let convention: String = [first, second, third].iter().map(|a| a.letter()).collect();
            tracing::debug!(%convention, "rejecting Euler convention");
            return Err(Error::InvalidConvention {
                convention,
                reason: "consecutive axes must differ".to_string(),
            });
        }
        Ok(Self([first, second, third]))
    }

    /// The three axes, first to third.
    pub const fn axes(&self) -> [Axis; 3] {
        self.0
    }

    /// Axis of the first angle (leftmost factor).
    pub const fn first(&self) -> Axis {
        self.0[0]
    }

    /// Axis of the central angle.
    pub const fn second(&self) -> Axis {
        self.0[1]
    }

    /// Axis of the third angle (rightmost factor).
    pub const fn third(&self) -> Axis {
        self.0[2]
    }

    /// First and last axes differ (e.g. XYZ), as opposed to proper Euler (e.g. ZXZ).
    pub const fn is_tait_bryan(&self) -> bool {
        self.0[0].index() != self.0[2].index()
    }
}

impl fmt::Display for EulerConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for EulerConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let reject = |reason: String| {
            tracing::debug!(convention = s, %reason, "rejecting Euler convention");
            Error::InvalidConvention {
                convention: s.to_string(),
                reason,
            }
        };

        let letters: Vec<char> = s.chars().collect();
        if letters.len() != 3 {
            return Err(reject(format!(
                "expected 3 axis letters, got {}",
                letters.len()
            )));
        }

        let mut axes = [Axis::X; 3];
        for (slot, &c) in axes.iter_mut().zip(&letters) {
            *slot = Axis::from_letter(c)
                .ok_or_else(|| reject(format!("invalid axis letter {c:?}, expected X, Y or Z")))?;
        }

        EulerConvention::new(axes[0], axes[1], axes[2])
    }
}

impl TryFrom<&str> for EulerConvention {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for EulerConvention {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<EulerConvention> for String {
    fn from(convention: EulerConvention) -> Self {
        convention.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_conventions_parse() {
        for convention in EulerConvention::ALL {
            let parsed: EulerConvention = convention.to_string().parse().unwrap();
            assert_eq!(parsed, convention);
        }
        let tait_bryan = EulerConvention::ALL
            .iter()
            .filter(|c| c.is_tait_bryan())
            .count();
        assert_eq!(tait_bryan, 6);
    }

    #[test]
    fn test_invalid_conventions() {
        for bad in ["XY", "XYZX", "", "XYW", "xyz", "XXY", "XYY", "ZZZ"] {
            assert!(
                matches!(
                    bad.parse::<EulerConvention>(),
                    Err(Error::InvalidConvention { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_accessors() {
        let zxz = EulerConvention::try_from("ZXZ").unwrap();
        assert_eq!(zxz.axes(), [Axis::Z, Axis::X, Axis::Z]);
        assert!(!zxz.is_tait_bryan());
        assert_eq!(zxz.first(), Axis::Z);
        assert_eq!(zxz.second().index(), 0);
        assert_eq!(zxz.third().letter(), 'Z');
        assert!(Axis::Z.precedes(Axis::X));
        assert!(!Axis::Y.precedes(Axis::X));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let xyz = EulerConvention::new(Axis::X, Axis::Y, Axis::Z).unwrap();
        assert_eq!(serde_json::to_string(&xyz).unwrap(), "\"XYZ\"");
        let back: EulerConvention = serde_json::from_str("\"XYZ\"").unwrap();
        assert_eq!(back, xyz);
        assert!(serde_json::from_str::<EulerConvention>("\"XXZ\"").is_err());
    }
}
