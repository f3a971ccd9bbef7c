use std::ffi::OsStr;
use std::fmt;
use std::num::NonZeroU64;

/// Transfer ceiling in bytes per second. Zero means unlimited.
#[doc(alias = "--rate-limit")]
#[doc(alias = "-L")]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RateLimit(Option<NonZeroU64>);

impl RateLimit {
    /// A limit that never throttles.
    pub const UNLIMITED: Self = Self(None);

    /// Builds a limit from a raw byte-per-second value, treating `0` as unlimited.
    #[must_use]
    pub const fn from_bytes_per_second(bytes: u64) -> Self {
        Self(NonZeroU64::new(bytes))
    }

    /// Returns the configured ceiling, or `None` when unlimited.
    #[must_use]
    pub const fn ceiling(self) -> Option<NonZeroU64> {
        self.0
    }

    /// Returns the ceiling as a plain integer, `0` when unlimited.
    #[must_use]
    pub const fn bytes_per_second(self) -> u64 {
        match self.0 {
            Some(limit) => limit.get(),
            None => 0,
        }
    }

    /// Reports whether throttling is disabled.
    #[must_use]
    pub const fn is_unlimited(self) -> bool {
        self.0.is_none()
    }

    /// Parses a `-L RATE` argument.
    ///
    /// The parser is deliberately forgiving and never fails. Leading
    /// whitespace is skipped, an optional sign is accepted and the longest
    /// run of decimal digits that follows is the value; anything after it is
    /// ignored. Input without leading digits, or with a minus sign, yields
    /// [`RateLimit::UNLIMITED`]. Values that do not fit in a `u64` saturate.
    ///
    /// ```
    /// use bandwidth::RateLimit;
    ///
    /// assert_eq!(RateLimit::parse("2048").bytes_per_second(), 2048);
    /// assert_eq!(RateLimit::parse(" 100k").bytes_per_second(), 100);
    /// assert!(RateLimit::parse("fast").is_unlimited());
    /// assert!(RateLimit::parse("-5").is_unlimited());
    /// ```
    #[must_use]
    pub fn parse<S>(text: &S) -> Self
    where
        S: AsRef<OsStr> + ?Sized,
    {
        let bytes = text.as_ref().as_encoded_bytes();
        let mut rest = bytes
            .iter()
            .position(|byte| !is_c_space(*byte))
            .map_or(&[][..], |start| &bytes[start..]);

        let mut negative = false;
        if let Some((&sign, tail)) = rest.split_first() {
            if sign == b'+' || sign == b'-' {
                negative = sign == b'-';
                rest = tail;
            }
        }

        let value = rest
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .fold(0u64, |acc, digit| {
                acc.saturating_mul(10)
                    .saturating_add(u64::from(digit - b'0'))
            });

        if negative {
            Self::UNLIMITED
        } else {
            Self::from_bytes_per_second(value)
        }
    }
}

impl From<u64> for RateLimit {
    fn from(bytes: u64) -> Self {
        Self::from_bytes_per_second(bytes)
    }
}

impl fmt::Display for RateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(limit) => write!(f, "{limit} B/s"),
            None => f.write_str("unlimited"),
        }
    }
}

// isspace() in the C locale, which includes vertical tab.
const fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
