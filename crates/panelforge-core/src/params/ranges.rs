//! Slider ranges and steps for the configurator controls, in millimeters.

use std::ops::RangeInclusive;

pub const SCREEN_WIDTH: RangeInclusive<f64> = 500.0..=3000.0;
pub const SCREEN_WIDTH_STEP: f64 = 10.0;

pub const SCREEN_HEIGHT: RangeInclusive<f64> = 500.0..=3000.0;
pub const SCREEN_HEIGHT_STEP: f64 = 10.0;

pub const SCREEN_THICKNESS: RangeInclusive<f64> = 6.0..=25.0;
pub const SCREEN_THICKNESS_STEP: f64 = 1.0;

pub const BORDER_MARGIN: RangeInclusive<f64> = 10.0..=200.0;
pub const BORDER_MARGIN_STEP: f64 = 5.0;

pub const PATTERN_SPACING: RangeInclusive<f64> = 10.0..=500.0;
pub const PATTERN_SPACING_STEP: f64 = 5.0;

pub const HOLE_DIAMETER: RangeInclusive<f64> = 10.0..=200.0;
pub const HOLE_DIAMETER_STEP: f64 = 1.0;
