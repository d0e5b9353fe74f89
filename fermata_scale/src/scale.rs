// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::Range;

use crate::{Rounding, ScaleError};

/// Which side of a [`QuantizedScale`] a name refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisSide {
    /// The continuous axis.
    Domain,
    /// The stepped axis.
    Range,
}

#[derive(Clone, Debug, PartialEq)]
struct Axis {
    name: String,
    span: Range<f64>,
}

#[derive(Clone, Debug, PartialEq)]
struct Alias {
    name: String,
    side: AxisSide,
}

/// Two-point linear mapping between a continuous domain axis and a stepped range axis.
///
/// The mapping is calibrated by `domain.start ↔ range.start` and
/// `domain.end ↔ range.end`. Either span may be descending, which is how an
/// upward pitch axis is laid over a downward pixel axis.
///
/// Snapping rounds to multiples of [`QuantizedScale::step`] counted from zero
/// in range units, not from the start of the range span.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantizedScale {
    domain: Axis,
    range: Axis,
    range_per_domain: f64,
    domain_per_range: f64,
    step: f64,
    rounding: Rounding,
    aliases: Vec<Alias>,
}

impl QuantizedScale {
    /// Creates a scale with a step of `1.0` and [`Rounding::Nearest`].
    ///
    /// # Errors
    ///
    /// - [`ScaleError::DegenerateDomain`] if the domain span is empty or not finite.
    /// - [`ScaleError::DegenerateRange`] if the range span is empty or not finite.
    /// - [`ScaleError::DuplicateAxis`] if both axes share a name.
    pub fn new(
        domain_name: impl Into<String>,
        domain: Range<f64>,
        range_name: impl Into<String>,
        range: Range<f64>,
    ) -> Result<Self, ScaleError> {
        if !span_is_usable(&domain) {
            return Err(ScaleError::DegenerateDomain);
        }
        if !span_is_usable(&range) {
            return Err(ScaleError::DegenerateRange);
        }
        let domain_name = domain_name.into();
        let range_name = range_name.into();
        if domain_name == range_name {
            return Err(ScaleError::DuplicateAxis(range_name));
        }

        let domain_len = domain.end - domain.start;
        let range_len = range.end - range.start;
        Ok(Self {
            domain: Axis {
                name: domain_name,
                span: domain,
            },
            range: Axis {
                name: range_name,
                span: range,
            },
            range_per_domain: range_len / domain_len,
            domain_per_range: domain_len / range_len,
            step: 1.0,
            rounding: Rounding::default(),
            aliases: Vec::new(),
        })
    }

    /// Sets the quantization step in range units.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidStep`] unless `step` is finite and positive.
    pub fn with_step(mut self, step: f64) -> Result<Self, ScaleError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ScaleError::InvalidStep(step));
        }
        self.step = step;
        Ok(self)
    }

    /// Sets the rounding policy used when snapping onto the step grid.
    #[must_use]
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Adds `alias` as another name for the axis (or alias) called `axis`.
    ///
    /// # Errors
    ///
    /// - [`ScaleError::UnknownAxis`] if `axis` does not resolve.
    /// - [`ScaleError::DuplicateAxis`] if `alias` is already taken.
    pub fn with_alias(mut self, alias: impl Into<String>, axis: &str) -> Result<Self, ScaleError> {
        let alias = alias.into();
        if self.resolve(&alias).is_some() {
            return Err(ScaleError::DuplicateAxis(alias));
        }
        let side = self
            .resolve(axis)
            .ok_or_else(|| ScaleError::UnknownAxis(axis.to_string()))?;
        self.aliases.push(Alias { name: alias, side });
        Ok(self)
    }

    /// Returns the name of the domain axis.
    #[must_use]
    pub fn domain_name(&self) -> &str {
        &self.domain.name
    }

    /// Returns the name of the range axis.
    #[must_use]
    pub fn range_name(&self) -> &str {
        &self.range.name
    }

    /// Returns the calibration span of the domain axis.
    #[must_use]
    pub fn domain_span(&self) -> Range<f64> {
        self.domain.span.clone()
    }

    /// Returns the calibration span of the range axis.
    #[must_use]
    pub fn range_span(&self) -> Range<f64> {
        self.range.span.clone()
    }

    /// Returns the quantization step in range units.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the rounding policy.
    #[must_use]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Resolves an axis name or alias.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<AxisSide> {
        if name == self.domain.name {
            Some(AxisSide::Domain)
        } else if name == self.range.name {
            Some(AxisSide::Range)
        } else {
            self.aliases.iter().find(|a| a.name == name).map(|a| a.side)
        }
    }

    /// Maps `value` onto the axis named `target`.
    ///
    /// When `target` names the range, `value` is read as a domain value and
    /// the result is snapped. When it names the domain, `value` is read as a
    /// range value and mapped back exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::UnknownAxis`] if `target` does not resolve.
    pub fn to(&self, target: &str, value: f64) -> Result<f64, ScaleError> {
        match self.resolve(target) {
            Some(AxisSide::Range) => Ok(self.to_range(value)),
            Some(AxisSide::Domain) => Ok(self.to_domain(value)),
            None => Err(ScaleError::UnknownAxis(target.to_string())),
        }
    }

    /// Maps a domain value to the range and snaps it.
    #[must_use]
    pub fn to_range(&self, value: f64) -> f64 {
        self.snap(self.range.span.start + (value - self.domain.span.start) * self.range_per_domain)
    }

    /// Maps a range value back to the domain without snapping.
    #[must_use]
    pub fn to_domain(&self, value: f64) -> f64 {
        self.domain.span.start + (value - self.range.span.start) * self.domain_per_range
    }

    /// Snaps a range value to a multiple of the step.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        self.rounding.apply(value / self.step) * self.step
    }

    /// Maps a domain delta to a snapped range delta.
    #[must_use]
    pub fn delta_to_range(&self, delta: f64) -> f64 {
        self.snap(delta * self.range_per_domain)
    }

    /// Maps a range delta back to a domain delta without snapping.
    #[must_use]
    pub fn delta_to_domain(&self, delta: f64) -> f64 {
        delta * self.domain_per_range
    }

    /// Snaps a domain delta onto whole range steps and expresses it in domain units again.
    ///
    /// This is the shape drag gestures need: the pointer moves in continuous
    /// units and the dragged object should land on the step grid.
    #[must_use]
    pub fn quantize_domain_delta(&self, delta: f64) -> f64 {
        self.delta_to_domain(self.delta_to_range(delta))
    }
}

fn span_is_usable(span: &Range<f64>) -> bool {
    span.start.is_finite() && span.end.is_finite() && span.start != span.end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees() -> QuantizedScale {
        QuantizedScale::new("pixels", 0.0..100.0, "scaleDegrees", 0.0..10.0).unwrap()
    }

    #[test]
    fn range_to_domain_and_back_recovers_whole_steps() {
        let scale = degrees();
        let px = scale.to("pixels", 3.0).unwrap();
        assert_eq!(scale.to("scaleDegrees", px).unwrap(), 3.0);
    }

    #[test]
    fn round_trip_stays_within_one_step() {
        let scale = degrees().with_step(0.25).unwrap();
        for i in -40..40 {
            let v = f64::from(i) * 0.37;
            let back = scale.to_range(scale.to_domain(v));
            assert!((back - v).abs() <= scale.step(), "{v} -> {back}");
        }
    }

    #[test]
    fn domain_mapping_is_not_snapped() {
        let scale = degrees();
        assert!((scale.to_domain(2.5) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn rounding_policy_controls_snapping() {
        let floor = degrees().with_rounding(Rounding::Floor);
        let ceil = degrees().with_rounding(Rounding::Ceil);
        assert_eq!(floor.to_range(38.0), 3.0);
        assert_eq!(ceil.to_range(31.0), 4.0);
        assert_eq!(degrees().to_range(36.0), 4.0);
    }

    #[test]
    fn fractional_steps_snap_to_multiples() {
        let scale = QuantizedScale::new("px", 0.0..400.0, "quarterNotes", 0.0..4.0)
            .unwrap()
            .with_step(0.25)
            .unwrap();
        assert_eq!(scale.to_range(137.0), 1.25);
        assert_eq!(scale.to_range(140.0), 1.5);
    }

    #[test]
    fn descending_range_inverts_direction() {
        // Pixels grow downward while pitch grows upward.
        let scale = QuantizedScale::new("pixels", 0.0..1270.0, "pitch", 127.0..0.0).unwrap();
        assert_eq!(scale.to_range(0.0), 127.0);
        assert_eq!(scale.to_range(1270.0), 0.0);
        assert_eq!(scale.to_range(604.0), 67.0);
        assert!((scale.to_domain(60.0) - 670.0).abs() < 1e-9);
    }

    #[test]
    fn deltas_ignore_span_offsets() {
        let scale = QuantizedScale::new("pixels", 50.0..150.0, "beats", 8.0..12.0).unwrap();
        assert_eq!(scale.delta_to_range(0.0), 0.0);
        assert_eq!(scale.delta_to_range(49.0), 2.0);
        assert!((scale.delta_to_domain(1.0) - 25.0).abs() < 1e-12);
        assert!((scale.quantize_domain_delta(60.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn aliases_are_pure_renames() {
        let scale = degrees()
            .with_alias("px", "pixels")
            .unwrap()
            .with_alias("degrees", "scaleDegrees")
            .unwrap()
            .with_alias("deg", "degrees")
            .unwrap();
        assert_eq!(scale.resolve("px"), Some(AxisSide::Domain));
        assert_eq!(scale.resolve("deg"), Some(AxisSide::Range));
        assert_eq!(scale.to("px", 4.0), scale.to("pixels", 4.0));
        assert_eq!(scale.to("deg", 42.0), scale.to("scaleDegrees", 42.0));
    }

    #[test]
    fn alias_errors() {
        assert_eq!(
            degrees().with_alias("x", "nope"),
            Err(ScaleError::UnknownAxis("nope".into()))
        );
        assert_eq!(
            degrees().with_alias("pixels", "scaleDegrees"),
            Err(ScaleError::DuplicateAxis("pixels".into()))
        );
        assert_eq!(
            degrees().to("beats", 1.0),
            Err(ScaleError::UnknownAxis("beats".into()))
        );
    }

    #[test]
    fn degenerate_calibration_fails_fast() {
        assert_eq!(
            QuantizedScale::new("a", 5.0..5.0, "b", 0.0..1.0),
            Err(ScaleError::DegenerateDomain)
        );
        assert_eq!(
            QuantizedScale::new("a", 0.0..f64::NAN, "b", 0.0..1.0),
            Err(ScaleError::DegenerateDomain)
        );
        assert_eq!(
            QuantizedScale::new("a", 0.0..1.0, "b", 2.0..2.0),
            Err(ScaleError::DegenerateRange)
        );
        assert_eq!(
            QuantizedScale::new("a", 0.0..1.0, "a", 0.0..1.0),
            Err(ScaleError::DuplicateAxis("a".into()))
        );
    }

    #[test]
    fn invalid_steps_are_rejected() {
        assert_eq!(degrees().with_step(0.0), Err(ScaleError::InvalidStep(0.0)));
        assert_eq!(degrees().with_step(-1.0), Err(ScaleError::InvalidStep(-1.0)));
        assert!(degrees().with_step(f64::INFINITY).is_err());
    }
}
