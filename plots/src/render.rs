//! png rendering with plotters

use std::ops::Range;
use std::path::Path;

use anyhow::Result;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::ranged1d::ValueFormatter;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use tracing::debug;
use tracing::warn;

use crate::chart::Chart;
use crate::chart::LineColor;
use crate::chart::Scale;

pub const SIZE: (u32, u32) = (640, 480);

const DEFAULT_LOG_RANGE: Range<f64> = 1e-3..1.0;
const DEFAULT_LINEAR_RANGE: Range<f64> = 0.0..1.0;

fn rgb(color: LineColor) -> RGBColor {
    match color {
        LineColor::Red => RED,
        LineColor::Green => GREEN,
        LineColor::Blue => BLUE,
    }
}

/// `(x, y)` points of a line that can be placed on the given axis
pub fn drawable(values: &[f64], scale: Scale) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite() && (scale == Scale::Linear || **v > 0.0))
        .map(|(i, v)| (i as f64, *v))
        .collect()
}

/// y range covering every drawable value of the chart, with some padding
pub fn y_range(chart: &Chart) -> Range<f64> {
    let ys = chart
        .lines
        .iter()
        .flat_map(|l| drawable(&l.values, chart.scale))
        .map(|(_, y)| y);
    let (lo, hi) = ys.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
        (lo.min(y), hi.max(y))
    });
    if lo > hi {
        return match chart.scale {
            Scale::Log => DEFAULT_LOG_RANGE,
            Scale::Linear => DEFAULT_LINEAR_RANGE,
        };
    }
    match chart.scale {
        Scale::Log => (lo / 2.0)..(hi * 2.0),
        Scale::Linear => {
            let lo = lo.min(0.0);
            let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
            lo..(hi + pad)
        }
    }
}

/// x range: one slot per problem of the longest line
pub fn x_range(chart: &Chart) -> Range<f64> {
    let n = chart.lines.iter().map(|l| l.values.len()).max().unwrap_or(0);
    0.0..(n.max(2) - 1) as f64
}

/// render `chart` to a png at `path`
pub fn render(chart: &Chart, path: &Path) -> Result<()> {
    for l in &chart.lines {
        let skipped = l.values.len() - drawable(&l.values, chart.scale).len();
        if skipped > 0 {
            warn!(
                chart = %chart.file_name,
                line = %l.label,
                skipped,
                "values cannot be drawn on this axis"
            );
        }
    }

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .caption(&chart.title, ("sans-serif", 18))
        .margin(12)
        .x_label_area_size(30)
        .y_label_area_size(60);

    let (xs, ys) = (x_range(chart), y_range(chart));
    match chart.scale {
        Scale::Log => draw(&mut builder.build_cartesian_2d(xs, ys.log_scale())?, chart)?,
        Scale::Linear => draw(&mut builder.build_cartesian_2d(xs, ys)?, chart)?,
    }

    root.present()?;
    debug!(path = %path.display(), "rendered chart");
    Ok(())
}

fn draw<'a, Y>(
    ctx: &mut ChartContext<'a, BitMapBackend<'a>, Cartesian2d<RangedCoordf64, Y>>,
    chart: &Chart,
) -> Result<()>
where
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .draw()?;

    for l in &chart.lines {
        let color = rgb(l.color);
        let points = drawable(&l.values, chart.scale);

        ctx.draw_series(LineSeries::new(points.clone(), color.stroke_width(1)))?
            .label(l.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        ctx.draw_series(
            points
                .into_iter()
                .map(|p| Circle::new(p, 2, color.filled())),
        )?;
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Line;

    fn chart(scale: Scale, values: Vec<Vec<f64>>) -> Chart {
        Chart {
            file_name: "c.png".to_string(),
            title: "t".to_string(),
            x_desc: "x".to_string(),
            y_desc: "y".to_string(),
            scale,
            lines: values
                .into_iter()
                .map(|v| Line {
                    label: "l".to_string(),
                    color: LineColor::Red,
                    values: v,
                })
                .collect(),
        }
    }

    #[test]
    fn log_axis_drops_non_positive() {
        let pts = drawable(&[0.0, -1.0, 2.0, f64::NAN, f64::INFINITY, 0.5], Scale::Log);
        assert_eq!(pts, vec![(2.0, 2.0), (5.0, 0.5)]);
    }

    #[test]
    fn linear_axis_keeps_zero() {
        let pts = drawable(&[0.0, -1.0, f64::NAN], Scale::Linear);
        assert_eq!(pts, vec![(0.0, 0.0), (1.0, -1.0)]);
    }

    #[test]
    fn log_range_is_padded() {
        let r = y_range(&chart(Scale::Log, vec![vec![0.1, 10.0], vec![1.0, 0.0]]));
        assert_eq!(r, 0.05..20.0);
    }

    #[test]
    fn linear_range_starts_at_zero() {
        let r = y_range(&chart(Scale::Linear, vec![vec![5.0, 15.0]]));
        assert_eq!(r.start, 0.0);
        assert!((r.end - 15.75).abs() < 1e-9);
    }

    #[test]
    fn empty_chart_gets_default_range() {
        assert_eq!(y_range(&chart(Scale::Log, vec![vec![]])), DEFAULT_LOG_RANGE);
        assert_eq!(
            y_range(&chart(Scale::Linear, vec![vec![f64::NAN]])),
            DEFAULT_LINEAR_RANGE
        );
    }

    #[test]
    fn x_range_spans_longest_line() {
        assert_eq!(x_range(&chart(Scale::Log, vec![vec![1.0; 3], vec![1.0; 7]])), 0.0..6.0);
        assert_eq!(x_range(&chart(Scale::Log, vec![])), 0.0..1.0);
    }
}
