/// Orientation of a halfspace, or the aggregate over a set of them.
///
/// A single halfspace is [`Positive`](Sign::Positive) when its plane lies
/// on the cap's side of the center (cap smaller than a hemisphere),
/// [`Negative`](Sign::Negative) when it lies on the far side, and
/// [`Zero`](Sign::Zero) for a hemisphere bounded by a great circle.
/// [`Mixed`](Sign::Mixed) only arises from aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Positive,
    Negative,
    Zero,
    Mixed,
}

impl Sign {
    /// Folds another sign into an aggregate.
    ///
    /// `Zero` is neutral, opposite non-zero signs produce `Mixed`, and
    /// `Mixed` absorbs everything.
    pub fn combine(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Mixed, _) | (_, Sign::Mixed) => Sign::Mixed,
            (Sign::Zero, s) | (s, Sign::Zero) => s,
            (Sign::Positive, Sign::Positive) => Sign::Positive,
            (Sign::Negative, Sign::Negative) => Sign::Negative,
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => Sign::Mixed,
        }
    }

    /// Aggregate sign of a sequence; `Zero` when empty.
    pub fn aggregate<I: IntoIterator<Item = Sign>>(signs: I) -> Sign {
        let mut acc = Sign::Zero;
        for sign in signs {
            acc = acc.combine(sign);
            if acc == Sign::Mixed {
                break;
            }
        }
        acc
    }
}
