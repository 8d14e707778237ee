// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Where the window sits while it is positioned automatically.
///
/// Consulted by [`crate::ViewportController::recompute`] whenever the state is
/// not manually set. Manual panning overrides it; [`crate::ViewportController::reset`]
/// and zooming back out to the overview restore [`Home::DomainStart`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Home {
    /// Align the window start with the start of the padded domain.
    ///
    /// At zoom `1.0` this frames the whole domain.
    #[default]
    DomainStart,
    /// Center the window on the given time.
    ///
    /// Installed by [`crate::ViewportController::zoom_to_fit`], so that later
    /// zoom changes stay centered on the fitted data.
    Center(f64),
}
