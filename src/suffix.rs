//! English ordinal suffix resolution.
//!
//! The rule only looks at the last two digits of a number: anything ending
//! in 4 through 20 takes "th", otherwise the last digit picks "st", "nd",
//! "rd" or "th". Remainders are taken with [`rem_euclid`](i64::rem_euclid)
//! so negative numbers follow the same rule as their absolute value.

use strum::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// One of the four English ordinal suffixes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, IntoStaticStr, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Suffix {
    /// "1st", "21st", "101st"
    St,
    /// "2nd", "22nd"
    Nd,
    /// "3rd", "23rd"
    Rd,
    /// Everything else, including the 11th/12th/13th band.
    Th,
}

impl Suffix {
    /// All suffixes in the order they first appear counting up from 1.
    pub const ALL: [Suffix; 4] = [Suffix::St, Suffix::Nd, Suffix::Rd, Suffix::Th];

    /// Resolve the suffix for `n`.
    ///
    /// Total over `i64`: zero, negatives and both extremes all resolve.
    pub const fn of(n: i64) -> Self {
        from_remainders(n.rem_euclid(100) as u8, n.rem_euclid(10) as u8)
    }

    /// The suffix as it is written after the numeral.
    pub const fn as_str(self) -> &'static str {
        match self {
            Suffix::St => "st",
            Suffix::Nd => "nd",
            Suffix::Rd => "rd",
            Suffix::Th => "th",
        }
    }
}

/// Return the ordinal suffix for `n`, e.g. `"st"` for 1 and `"th"` for 111.
pub fn suffix_for(n: i64) -> &'static str {
    Suffix::of(n).as_str()
}

/// Integers that know their own ordinal suffix.
///
/// Implemented for every primitive integer type. The remainders are computed
/// in the implementing type, so no widening conversion is needed and the
/// extremes of `i128`/`u128` resolve like any other value.
pub trait OrdinalSuffix {
    fn ordinal_suffix(&self) -> Suffix;
}

macro_rules! impl_ordinal_suffix {
    ($($t:ty),* $(,)?) => {
        $(
            impl OrdinalSuffix for $t {
                fn ordinal_suffix(&self) -> Suffix {
                    from_remainders(self.rem_euclid(100) as u8, self.rem_euclid(10) as u8)
                }
            }
        )*
    };
}

impl_ordinal_suffix!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// `last_two` is in [0, 99] and `last` in [0, 9].
const fn from_remainders(last_two: u8, last: u8) -> Suffix {
    match (last_two, last) {
        (4..=20, _) => Suffix::Th,
        (_, 1) => Suffix::St,
        (_, 2) => Suffix::Nd,
        (_, 3) => Suffix::Rd,
        _ => Suffix::Th,
    }
}
