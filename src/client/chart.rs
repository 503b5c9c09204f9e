//! Pure scene construction for the distance/magnitude scatter plot.
//!
//! `build_scene` maps the object list to a declarative scene description
//! (marker positions, radii, colors, axis ticks) with no rendering
//! dependency, so the scaling and jitter rules are testable without a DOM.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::client::util::format::{format_bool, format_distance};
use crate::model::catalog::{ObjectSummaryDto, ObjectType};

pub const CHART_WIDTH: f64 = 900.0;
pub const CHART_HEIGHT: f64 = 520.0;

const MARGIN_TOP: f64 = 30.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 70.0;
const MARGIN_LEFT: f64 = 80.0;

/// Non-positive or missing distances and masses clamp to this value so the
/// log and sqrt scales never see an invalid input.
pub const EPSILON: f64 = 1e-3;

/// Displacement radius for markers sharing an exact coordinate pair
const JITTER_RADIUS: f64 = 14.0;

const MARKER_RADIUS_MIN: f64 = 4.0;
const MARKER_RADIUS_MAX: f64 = 36.0;

const COLOR_STAR: &str = "#64ffda";
const COLOR_PLANET: &str = "#5d9eff";
const COLOR_GALAXY: &str = "#f9abff";
const COLOR_UNKNOWN: &str = "#8fa3bf";

/// One plotted marker with everything the renderer and tooltip need
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub object_id: i32,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: &'static str,
    pub selected: bool,
    pub name: String,
    pub type_label: String,
    pub distance_label: String,
    pub habitable_label: &'static str,
}

/// Axis tick at a pixel position along its axis
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Declarative description of the scatter plot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartScene {
    pub width: f64,
    pub height: f64,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_top: f64,
    pub plot_bottom: f64,
    pub markers: Vec<Marker>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

/// Log-10 scale clamped to its pixel range
struct LogScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LogScale {
    fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = (self.domain.0.log10(), self.domain.1.log10());
        let t = if d1 == d0 {
            0.5
        } else {
            (value.max(EPSILON).log10() - d0) / (d1 - d0)
        };
        let position = self.range.0 + t * (self.range.1 - self.range.0);
        position.clamp(
            self.range.0.min(self.range.1),
            self.range.0.max(self.range.1),
        )
    }
}

/// Linear scale; an inverted domain flips the axis
struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Square-root scale so marker area, not radius, tracks solar mass
struct SqrtScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl SqrtScale {
    fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = (self.domain.0.sqrt(), self.domain.1.sqrt());
        let t = if d1 == d0 {
            0.5
        } else {
            (value.max(EPSILON).sqrt() - d0) / (d1 - d0)
        };
        let radius = self.range.0 + t * (self.range.1 - self.range.0);
        radius.clamp(self.range.0, self.range.1)
    }
}

fn clamp_distance(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => EPSILON,
    }
}

fn clamp_mass(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => EPSILON,
    }
}

fn type_color(raw: &str) -> &'static str {
    match ObjectType::parse(raw) {
        Some(ObjectType::Star) => COLOR_STAR,
        Some(ObjectType::Planet) => COLOR_PLANET,
        Some(ObjectType::Galaxy) => COLOR_GALAXY,
        None => COLOR_UNKNOWN,
    }
}

fn x_domain(distances: &[f64]) -> (f64, f64) {
    let (min, max) = if distances.is_empty() {
        (0.1, 10.0)
    } else {
        let min = distances.iter().copied().fold(f64::INFINITY, f64::min);
        let max = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    };

    let padding = ((max - min) * 0.25).max(0.5);
    let padded_min = (min - padding).max(EPSILON);
    let padded_max = max + padding;

    if padded_min == padded_max {
        (padded_min * 0.8, padded_max * 1.2)
    } else {
        (padded_min, padded_max)
    }
}

fn y_domain(magnitudes: &[f64]) -> (f64, f64) {
    let mut min = magnitudes.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = magnitudes
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() {
        min = -2.0;
    }
    if !max.is_finite() {
        max = 20.0;
    }

    if min == max {
        min -= 1.0;
        max += 1.0;
    }

    let padding = match (max - min) * 0.1 {
        p if p == 0.0 => 1.0,
        p => p,
    };

    // Inverted: brighter (lower magnitude) plots higher
    (max + padding, min - padding)
}

fn mass_domain(masses: &[f64]) -> (f64, f64) {
    let min = masses.iter().copied().fold(f64::INFINITY, f64::min);
    let max = masses.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        return (EPSILON, 1.0);
    }

    if min == max {
        let low = match min * 0.8 {
            v if v == 0.0 => 0.0001,
            v => v,
        };
        let high = match max * 1.2 {
            v if v == 0.0 => 0.002,
            v => v,
        };
        (low, high)
    } else {
        (min, max)
    }
}

/// Power-of-ten ticks covering the log domain, endpoints included
fn log_ticks(scale: &LogScale) -> Vec<Tick> {
    let (d0, d1) = scale.domain;
    let mut ticks = vec![Tick {
        position: scale.scale(d0),
        label: format_distance(Some(d0)),
    }];

    let mut exponent = d0.log10().ceil() as i32;
    let last = d1.log10().floor() as i32;
    while exponent <= last {
        let value = 10f64.powi(exponent);
        if value > d0 && value < d1 {
            ticks.push(Tick {
                position: scale.scale(value),
                label: format_distance(Some(value)),
            });
        }
        exponent += 1;
    }

    ticks.push(Tick {
        position: scale.scale(d1),
        label: format_distance(Some(d1)),
    });

    ticks
}

/// Round linear ticks at a 1/2/5 step covering the (possibly inverted) domain
fn linear_ticks(scale: &LinearScale) -> Vec<Tick> {
    let low = scale.domain.0.min(scale.domain.1);
    let high = scale.domain.0.max(scale.domain.1);
    let span = high - low;
    if span <= 0.0 {
        return vec![Tick {
            position: scale.scale(low),
            label: format!("{low:.1}"),
        }];
    }

    let raw_step = span / 8.0;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let step = if normalized <= 1.0 {
        magnitude
    } else if normalized <= 2.0 {
        2.0 * magnitude
    } else if normalized <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };

    let mut ticks = Vec::new();
    let mut value = (low / step).ceil() * step;
    while value <= high + step * 1e-9 {
        ticks.push(Tick {
            position: scale.scale(value),
            label: if step >= 1.0 {
                format!("{value:.0}")
            } else {
                format!("{value:.1}")
            },
        });
        value += step;
    }

    ticks
}

/// Build the scatter-plot scene for the given objects and selection.
///
/// Markers keep the input order; co-located markers (identical clamped
/// distance and magnitude) are spread around their shared point at a fixed
/// radius, angle `(i / n) * 2π` in encounter order.
pub fn build_scene(
    objects: &[ObjectSummaryDto],
    selected_id: Option<i32>,
    width: f64,
    height: f64,
) -> ChartScene {
    if objects.is_empty() {
        return ChartScene::default();
    }

    let plot_left = MARGIN_LEFT;
    let plot_right = width - MARGIN_RIGHT;
    let plot_top = MARGIN_TOP;
    let plot_bottom = height - MARGIN_BOTTOM;

    let distances: Vec<f64> = objects
        .iter()
        .map(|o| clamp_distance(o.distance_light_years))
        .collect();
    let magnitudes: Vec<f64> = objects
        .iter()
        .filter_map(|o| o.magnitude.filter(|m| m.is_finite()))
        .collect();
    let masses: Vec<f64> = objects.iter().map(|o| clamp_mass(o.solar_mass)).collect();

    let x_scale = LogScale {
        domain: x_domain(&distances),
        range: (plot_left, plot_right),
    };
    let (y_d0, y_d1) = y_domain(&magnitudes);
    let y_scale = LinearScale {
        domain: (y_d0, y_d1),
        range: (plot_bottom, plot_top),
    };
    let size_scale = SqrtScale {
        domain: mass_domain(&masses),
        range: (MARKER_RADIUS_MIN, MARKER_RADIUS_MAX),
    };

    // Objects without a magnitude sit on the faint edge of the y domain
    let faintest = magnitudes
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let fallback_magnitude = if faintest.is_finite() { faintest } else { 20.0 };

    // Exact coordinate pairs keyed by bit pattern, as encountered
    type CoordKey = (u64, Option<u64>);
    let keys: Vec<CoordKey> = objects
        .iter()
        .enumerate()
        .map(|(i, o)| (distances[i].to_bits(), o.magnitude.map(f64::to_bits)))
        .collect();

    let mut group_sizes: HashMap<CoordKey, usize> = HashMap::new();
    for key in &keys {
        *group_sizes.entry(*key).or_default() += 1;
    }
    let mut group_index: HashMap<CoordKey, usize> = HashMap::new();

    let markers = objects
        .iter()
        .enumerate()
        .map(|(i, object)| {
            let magnitude = object
                .magnitude
                .filter(|m| m.is_finite())
                .unwrap_or(fallback_magnitude);
            let mut x = x_scale.scale(distances[i]);
            let mut y = y_scale.scale(magnitude);

            let total = group_sizes[&keys[i]];
            if total > 1 {
                let index = group_index.entry(keys[i]).or_default();
                let angle = (*index as f64 / total as f64) * 2.0 * PI;
                *index += 1;
                x += angle.cos() * JITTER_RADIUS;
                y += angle.sin() * JITTER_RADIUS;
            }

            Marker {
                object_id: object.id,
                x,
                y,
                radius: size_scale.scale(masses[i]),
                color: type_color(&object.object_type),
                selected: selected_id == Some(object.id),
                name: object.name.clone(),
                type_label: object.object_type.clone(),
                distance_label: format_distance(object.distance_light_years),
                habitable_label: format_bool(object.is_habitable),
            }
        })
        .collect();

    let x_ticks = log_ticks(&x_scale);
    let y_ticks = linear_ticks(&y_scale);

    ChartScene {
        width,
        height,
        plot_left,
        plot_right,
        plot_top,
        plot_bottom,
        markers,
        x_ticks,
        y_ticks,
    }
}
