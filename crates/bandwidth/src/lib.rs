#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod limiter;
mod rate;

pub use crate::limiter::{LimiterSleep, RateWindow, sleep_for};
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub use crate::limiter::{RecordedSleepSession, recorded_sleep_session};
pub use crate::rate::RateLimit;
