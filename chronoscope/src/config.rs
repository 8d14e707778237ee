// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning constants for a [`Timeline`](crate::Timeline).
//!
//! Every number that shapes the feel of the timeline lives in
//! [`TimelineConfig`]. The defaults are the values the timeline was tuned
//! with; hosts may override any of them, and with the `serde` feature load
//! them from TOML.

use core::fmt;

use chronoscope_gesture::tap::TapConfig;
use chronoscope_gesture::touch::TouchConfig;
use chronoscope_gesture::wheel::WheelConfig;

/// The host platform, as far as wheel handling is concerned.
///
/// Mac trackpads report much smaller pinch deltas than other platforms'
/// Ctrl+wheel, so they get a larger zoom sensitivity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Platform {
    /// macOS and iOS.
    Mac,
    /// Everything else.
    #[default]
    Other,
}

impl Platform {
    /// Guesses the platform from a browser-style platform or user-agent string.
    #[must_use]
    pub fn from_user_agent(agent: &str) -> Self {
        let agent = agent.to_ascii_lowercase();
        if ["mac", "iphone", "ipad"].iter().any(|p| agent.contains(p)) {
            Self::Mac
        } else {
            Self::Other
        }
    }
}

/// Every tuning constant of a timeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TimelineConfig {
    /// Platform used to pick the wheel zoom sensitivity.
    pub platform: Platform,
    /// Factor applied by zoom in / zoom out.
    pub zoom_step: f64,
    /// Lowest allowed zoom level.
    pub min_zoom: f64,
    /// Ctrl/Meta wheel zoom sensitivity on [`Platform::Mac`].
    pub mac_wheel_zoom_sensitivity: f64,
    /// Ctrl/Meta wheel zoom sensitivity on [`Platform::Other`].
    pub wheel_zoom_sensitivity: f64,
    /// Shift+wheel zoom sensitivity.
    pub shift_zoom_sensitivity: f64,
    /// Distance (pixels) a finger must travel before a touch becomes a pan.
    pub touch_pan_threshold: f64,
    /// Longest touch (milliseconds) still counted as a tap.
    pub max_tap_duration_ms: u64,
    /// Longest gap (milliseconds) between the taps of a double-tap.
    pub double_tap_window_ms: u64,
    /// Largest distance (pixels) between the taps of a double-tap.
    pub double_tap_distance: f64,
    /// Length, in time units, of an event proposed by double-click.
    pub create_duration: i64,
    /// Minimum bar width, in percent of the window.
    pub min_bar_width_pct: f64,
    /// Approximate number of axis ticks.
    pub tick_target: usize,
    /// Padding added on each side by zoom-to-fit, as a fraction of the data range.
    pub fit_padding: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            platform: Platform::Other,
            zoom_step: chronoscope_view::DEFAULT_ZOOM_STEP,
            min_zoom: chronoscope_view::DEFAULT_MIN_ZOOM,
            mac_wheel_zoom_sensitivity: 0.01,
            wheel_zoom_sensitivity: 0.002,
            shift_zoom_sensitivity: 0.002,
            touch_pan_threshold: 10.0,
            max_tap_duration_ms: 300,
            double_tap_window_ms: 500,
            double_tap_distance: 50.0,
            create_duration: 5,
            min_bar_width_pct: chronoscope_hierarchy::DEFAULT_MIN_BAR_WIDTH_PCT,
            tick_target: chronoscope_time::DEFAULT_TICK_TARGET,
            fit_padding: 0.4,
        }
    }
}

impl TimelineConfig {
    /// Defaults for `platform`.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    /// Loads a configuration from TOML. Missing keys take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that every constant is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("zoom_step", self.zoom_step)?;
        if self.zoom_step <= 1.0 {
            return Err(ConfigError::Invalid {
                field: "zoom_step",
                reason: "must be greater than 1",
            });
        }
        positive("min_zoom", self.min_zoom)?;
        positive("mac_wheel_zoom_sensitivity", self.mac_wheel_zoom_sensitivity)?;
        positive("wheel_zoom_sensitivity", self.wheel_zoom_sensitivity)?;
        positive("shift_zoom_sensitivity", self.shift_zoom_sensitivity)?;
        positive("touch_pan_threshold", self.touch_pan_threshold)?;
        positive("double_tap_distance", self.double_tap_distance)?;
        positive("min_bar_width_pct", self.min_bar_width_pct)?;
        if !(self.fit_padding.is_finite() && self.fit_padding >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "fit_padding",
                reason: "must be a finite, non-negative number",
            });
        }
        let counts = [
            ("max_tap_duration_ms", self.max_tap_duration_ms == 0),
            ("double_tap_window_ms", self.double_tap_window_ms == 0),
            ("create_duration", self.create_duration <= 0),
            ("tick_target", self.tick_target == 0),
        ];
        if let Some((field, _)) = counts.into_iter().find(|(_, bad)| *bad) {
            return Err(ConfigError::Invalid {
                field,
                reason: "must be positive",
            });
        }
        Ok(())
    }

    /// Ctrl/Meta wheel zoom sensitivity for the configured platform.
    #[must_use]
    pub fn platform_zoom_sensitivity(&self) -> f64 {
        match self.platform {
            Platform::Mac => self.mac_wheel_zoom_sensitivity,
            Platform::Other => self.wheel_zoom_sensitivity,
        }
    }

    /// Wheel recognizer settings.
    #[must_use]
    pub fn wheel(&self) -> WheelConfig {
        WheelConfig {
            zoom_sensitivity: self.platform_zoom_sensitivity(),
            shift_zoom_sensitivity: self.shift_zoom_sensitivity,
        }
    }

    /// Touch recognizer settings.
    #[must_use]
    pub fn touch(&self) -> TouchConfig {
        TouchConfig {
            pan_threshold: self.touch_pan_threshold,
            max_tap_duration_ms: self.max_tap_duration_ms,
        }
    }

    /// Tap recognizer settings.
    #[must_use]
    pub fn tap(&self) -> TapConfig {
        TapConfig {
            max_tap_duration_ms: self.max_tap_duration_ms,
            double_tap_window_ms: self.double_tap_window_ms,
            double_tap_distance: self.double_tap_distance,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be a finite, positive number",
        })
    }
}

/// Error type for configuration loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// A constant is out of range.
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// The TOML source could not be parsed.
    #[cfg(feature = "serde")]
    Parse(toml::de::Error),
    /// The configuration could not be serialized.
    #[cfg(feature = "serde")]
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { field, reason } => write!(f, "invalid `{field}`: {reason}"),
            #[cfg(feature = "serde")]
            Self::Parse(e) => write!(f, "parse error: {e}"),
            #[cfg(feature = "serde")]
            Self::Serialize(e) => write!(f, "serialize error: {e}"),
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Invalid { .. } => None,
            #[cfg(feature = "serde")]
            Self::Parse(e) => Some(e),
            #[cfg(feature = "serde")]
            Self::Serialize(e) => Some(e),
        }
    }
}

#[cfg(feature = "serde")]
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

#[cfg(feature = "serde")]
impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        TimelineConfig::default().validate().unwrap();
        TimelineConfig::for_platform(Platform::Mac).validate().unwrap();
    }

    #[test]
    fn platform_detection() {
        assert_eq!(Platform::from_user_agent("MacIntel"), Platform::Mac);
        assert_eq!(
            Platform::from_user_agent("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)"),
            Platform::Mac
        );
        assert_eq!(Platform::from_user_agent("iPad"), Platform::Mac);
        assert_eq!(Platform::from_user_agent("Win32"), Platform::Other);
        assert_eq!(Platform::from_user_agent("Linux x86_64"), Platform::Other);
    }

    #[test]
    fn wheel_sensitivity_follows_platform() {
        let mac = TimelineConfig::for_platform(Platform::Mac);
        assert_eq!(mac.wheel().zoom_sensitivity, 0.01);
        let other = TimelineConfig::default();
        assert_eq!(other.wheel().zoom_sensitivity, 0.002);
        assert_eq!(other.wheel().shift_zoom_sensitivity, 0.002);
    }

    #[test]
    fn rejects_bad_constants() {
        let cases: [(&str, fn(&mut TimelineConfig)); 6] = [
            ("zoom_step", |c| c.zoom_step = 1.0),
            ("min_zoom", |c| c.min_zoom = 0.0),
            ("wheel_zoom_sensitivity", |c| c.wheel_zoom_sensitivity = f64::NAN),
            ("fit_padding", |c| c.fit_padding = -0.1),
            ("create_duration", |c| c.create_duration = 0),
            ("tick_target", |c| c.tick_target = 0),
        ];
        for (name, break_it) in cases {
            let mut config = TimelineConfig::default();
            break_it(&mut config);
            match config.validate() {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, name),
                other => panic!("{name}: expected invalid, got {other:?}"),
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_overrides_and_defaults() {
        let config = TimelineConfig::from_toml_str(
            "platform = \"mac\"\nzoom_step = 2.0\ncreate_duration = 7\n",
        )
        .unwrap();
        assert_eq!(config.platform, Platform::Mac);
        assert_eq!(config.zoom_step, 2.0);
        assert_eq!(config.create_duration, 7);
        assert_eq!(config.min_zoom, 0.1);

        let text = config.to_toml_string().unwrap();
        assert_eq!(TimelineConfig::from_toml_str(&text).unwrap(), config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_errors_are_reported() {
        assert!(matches!(
            TimelineConfig::from_toml_str("zoom_step = \"fast\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            TimelineConfig::from_toml_str("min_zoom = -1.0"),
            Err(ConfigError::Invalid {
                field: "min_zoom",
                ..
            })
        ));
    }
}
