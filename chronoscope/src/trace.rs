// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logging shims that compile to nothing without the `tracing` feature.

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

macro_rules! log_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
    };
}

pub(crate) use {debug, log_warn, trace};
