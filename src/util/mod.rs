use crate::core::prelude::*;

use tracing::Level;
use tracing_subscriber::fmt::time::OffsetTime;

pub mod assert;
pub mod linalg;
pub mod log;

pub mod gg_float {
    use crate::core::config::{EPSILON, EPSILON_F64};
    use num_traits::Float;
    use std::fmt::{Debug, Display};

    /// The numeric interface every geometric predicate is written against.
    ///
    /// Algorithms only ever add, subtract, multiply, divide and compare; anything that is a
    /// [`Float`] with a notion of comparison tolerance can drive them. [`f32`] is the default
    /// throughout the crate.
    pub trait Scalar: Float + Default + Debug + Display + Send + Sync + 'static {
        /// Differences smaller than this are treated as zero.
        fn tolerance() -> Self;

        fn two() -> Self {
            Self::one() + Self::one()
        }
        fn half() -> Self {
            Self::one() / Self::two()
        }
    }

    impl Scalar for f32 {
        fn tolerance() -> Self {
            EPSILON
        }
    }

    impl Scalar for f64 {
        fn tolerance() -> Self {
            EPSILON_F64
        }
    }

    pub fn almost_zero<T: Scalar>(x: T) -> bool {
        x.abs() < T::tolerance()
    }

    pub fn force_positive_zero<T: Scalar>(x: T) -> T {
        if x.is_zero() { T::zero() } else { x }
    }

    pub fn sign_zero<T: Scalar>(x: T) -> T {
        if x.is_zero() { T::zero() } else { x.signum() }
    }
}

pub mod gg_range {
    use crate::util::gg_float::Scalar;
    use std::ops::Range;

    /// True iff the closed intervals have a gap between them. Touching intervals are not
    /// separated.
    pub fn is_separated<T: PartialOrd>(r1: &Range<T>, r2: &Range<T>) -> bool {
        r1.end < r2.start || r2.end < r1.start
    }

    /// True iff the open intervals share some point. Touching intervals do not overlap.
    pub fn overlaps_strictly<T: PartialOrd>(r1: &Range<T>, r2: &Range<T>) -> bool {
        r1.start < r2.end && r2.start < r1.end
    }

    /// The smallest range containing every value, or `None` for an empty input.
    pub fn spanning<T: Scalar>(values: impl IntoIterator<Item = T>) -> Option<Range<T>> {
        values.into_iter().fold(None, |acc, x| match acc {
            None => Some(x..x),
            Some(r) => Some(r.start.min(x)..r.end.max(x)),
        })
    }
}

pub fn setup_log(verbose: bool) -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .try_init()
        .map_err(|e| anyhow!("could not install log subscriber: {e}"))
}
