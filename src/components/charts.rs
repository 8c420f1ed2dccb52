//! Plain-SVG charts for the dashboard, with pure data-prep helpers.
//!
//! DESIGN
//! ======
//! Bucketing and ranking are ordinary functions over alert slices so the
//! dashboard's numbers are testable without rendering anything.

#![allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use crate::net::types::Alert;

const MS_PER_DAY: f64 = 86_400_000.0;

/// One day of the trend window: a `YYYY-MM-DD` match key and a short
/// `D/M` axis label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayBucket {
    pub key: String,
    pub label: String,
}

/// The last `days` calendar days ending at `now_ms`, oldest first.
pub fn day_buckets_ending(now_ms: f64, days: usize) -> Vec<DayBucket> {
    #[allow(clippy::cast_possible_truncation)]
    let today = (now_ms / MS_PER_DAY).floor() as i64;
    (0..days)
        .rev()
        .map(|offset| {
            let (year, month, day) = civil_from_days(today - offset as i64);
            DayBucket {
                key: format!("{year:04}-{month:02}-{day:02}"),
                label: format!("{day}/{month}"),
            }
        })
        .collect()
}

/// Alert count per bucket, matched by timestamp date prefix.
pub fn alerts_per_day(alerts: &[Alert], buckets: &[DayBucket]) -> Vec<u32> {
    buckets
        .iter()
        .map(|bucket| {
            #[allow(clippy::cast_possible_truncation)]
            let count = alerts
                .iter()
                .filter(|alert| {
                    alert
                        .created_at
                        .as_deref()
                        .is_some_and(|ts| ts.starts_with(&bucket.key))
                })
                .count() as u32;
            count
        })
        .collect()
}

/// The `top` cameras by alert count, descending, ties broken by name.
pub fn busiest_cameras(alerts: &[Alert], top: usize) -> Vec<(String, u32)> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    for alert in alerts {
        let label = match (&alert.camera_name, alert.camera_id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("Camera #{id}"),
            (None, None) => continue,
        };
        match counts.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts.truncate(top);
    counts
}

/// SVG polyline `points` attribute for a value series scaled into a
/// `width` x `height` box.
pub fn polyline_points(values: &[u32], width: f64, height: f64) -> String {
    let max = values.iter().copied().max().unwrap_or(0).max(1);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = index as f64 * step;
            let y = height - f64::from(*value) / f64::from(max) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// Days-since-epoch to civil date (proleptic Gregorian).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    (
        if month <= 2 { year + 1 } else { year },
        month as u32,
        day as u32,
    )
}

/// Line chart of a labeled value series.
#[component]
pub fn LineChart(title: &'static str, labels: Vec<String>, values: Vec<u32>) -> impl IntoView {
    let points = polyline_points(&values, 300.0, 120.0);
    let slot = if labels.len() > 1 {
        300.0 / (labels.len() - 1) as f64
    } else {
        0.0
    };

    view! {
        <figure class="chart">
            <figcaption class="chart__title">{title}</figcaption>
            <svg class="chart__canvas" viewBox="-10 -10 320 160" role="img">
                <polyline class="chart__line" fill="none" points=points></polyline>
                {labels
                    .into_iter()
                    .enumerate()
                    .map(|(index, label)| {
                        let x = format!("{:.1}", index as f64 * slot);
                        view! {
                            <text class="chart__label" x=x y="140" text-anchor="middle">
                                {label}
                            </text>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
        </figure>
    }
}

/// Horizontal-label bar chart of a labeled value series.
#[component]
pub fn BarChart(title: &'static str, series: Vec<(String, u32)>) -> impl IntoView {
    let max = series.iter().map(|(_, value)| *value).max().unwrap_or(0).max(1);
    let slot = 300.0 / series.len().max(1) as f64;
    let bar_width = (slot * 0.6).min(48.0);

    view! {
        <figure class="chart">
            <figcaption class="chart__title">{title}</figcaption>
            <svg class="chart__canvas" viewBox="-10 -10 320 160" role="img">
                {series
                    .into_iter()
                    .enumerate()
                    .map(|(index, (label, value))| {
                        let height = f64::from(value) / f64::from(max) * 120.0;
                        let x = index as f64 * slot + (slot - bar_width) / 2.0;
                        let mid = format!("{:.1}", x + bar_width / 2.0);
                        view! {
                            <g>
                                <rect
                                    class="chart__bar"
                                    x=format!("{x:.1}")
                                    y=format!("{:.1}", 120.0 - height)
                                    width=format!("{bar_width:.1}")
                                    height=format!("{height:.1}")
                                ></rect>
                                <text class="chart__label" x=mid y="140" text-anchor="middle">
                                    {label}
                                </text>
                            </g>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
        </figure>
    }
}
