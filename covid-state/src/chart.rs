//! Line-chart geometry for a [`PlotData`], drawn as SVG polylines.

use covid_data::{PlotData, PlotSeries};

pub const CHART_WIDTH: f64 = 800.0;
pub const CHART_HEIGHT: f64 = 360.0;
pub const CHART_MARGIN: f64 = 40.0;

/// Points per line above which the series is downsampled.
pub const MAX_POINTS: usize = 500;

const PALETTE: [&str; 8] = [
    "#1565C0", "#C62828", "#2E7D32", "#EF6C00", "#6A1B9A", "#00838F", "#AD1457", "#4E342E",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub label: String,
    pub color: &'static str,
    /// Deaths are dashed, cases solid.
    pub dashed: bool,
    /// SVG `points` attribute: `x,y x,y ...`.
    pub points: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartFigure {
    pub lines: Vec<ChartLine>,
    pub max_value: f64,
    pub first_date: String,
    pub last_date: String,
}

/// Indices to plot out of `len`, evenly spread, always keeping the last.
pub fn sample_indices(len: usize, max: usize) -> Vec<usize> {
    if len <= max || max < 2 {
        return (0..len).collect();
    }
    let step = len as f64 / max as f64;
    let mut indices: Vec<usize> = (0..max).map(|i| (i as f64 * step) as usize).collect();
    if indices.last() != Some(&(len - 1)) {
        indices.push(len - 1);
    }
    indices
}

fn polyline(values: &[Option<f64>], indices: &[usize], len: usize, max_value: f64) -> String {
    let span_x = CHART_WIDTH - 2.0 * CHART_MARGIN;
    let span_y = CHART_HEIGHT - 2.0 * CHART_MARGIN;
    let last = len.saturating_sub(1).max(1) as f64;
    let scale = if max_value > 0.0 { max_value } else { 1.0 };

    indices
        .iter()
        .filter_map(|&i| {
            let value = values.get(i).copied().flatten()?;
            let x = CHART_MARGIN + i as f64 / last * span_x;
            let y = CHART_HEIGHT - CHART_MARGIN - value / scale * span_y;
            Some(format!("{:.1},{:.1}", x, y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn series_lines(series: &PlotSeries, color: &'static str, indices: &[usize], len: usize, max: f64) -> [ChartLine; 2] {
    [
        ChartLine {
            label: format!("{} casos", series.label),
            color,
            dashed: false,
            points: polyline(&series.cases, indices, len, max),
        },
        ChartLine {
            label: format!("{} óbitos", series.label),
            color,
            dashed: true,
            points: polyline(&series.deaths, indices, len, max),
        },
    ]
}

/// Two lines per series on a shared scale, or `None` for an empty chart.
pub fn build_figure(data: &PlotData) -> Option<ChartFigure> {
    if data.is_empty() {
        return None;
    }
    let len = data.dates.len();
    let indices = sample_indices(len, MAX_POINTS);
    let max_value = data.max_value();

    let lines = data
        .series
        .iter()
        .enumerate()
        .flat_map(|(i, series)| {
            series_lines(series, PALETTE[i % PALETTE.len()], &indices, len, max_value)
        })
        .collect();

    Some(ChartFigure {
        lines,
        max_value,
        first_date: data.dates.first().cloned().unwrap_or_default(),
        last_date: data.dates.last().cloned().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(cases: Vec<Option<f64>>, deaths: Vec<Option<f64>>) -> PlotData {
        PlotData {
            dates: (1..=cases.len()).map(|d| format!("2020-05-{d:02}")).collect(),
            series: vec![PlotSeries {
                label: "Total".into(),
                cases,
                deaths,
            }],
        }
    }

    #[test]
    fn test_sample_indices() {
        assert_eq!(sample_indices(4, 500), vec![0, 1, 2, 3]);
        let sampled = sample_indices(2001, 500);
        assert_eq!(sampled.first(), Some(&0));
        assert_eq!(sampled.last(), Some(&2000));
        assert!(sampled.len() <= 501);
        assert!(sampled.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_points_span_the_plot_area() {
        let data = single(
            vec![Some(0.0), Some(5.0), Some(10.0)],
            vec![Some(0.0), Some(1.0), Some(2.0)],
        );
        let figure = build_figure(&data).unwrap();
        assert_eq!(figure.max_value, 10.0);
        assert_eq!(figure.first_date, "2020-05-01");
        assert_eq!(figure.last_date, "2020-05-03");
        assert_eq!(figure.lines.len(), 2);
        assert_eq!(figure.lines[0].label, "Total casos");
        assert_eq!(figure.lines[0].points, "40.0,320.0 400.0,180.0 760.0,40.0");
        assert!(!figure.lines[0].dashed);
        assert!(figure.lines[1].dashed);
        assert_eq!(figure.lines[1].points, "40.0,320.0 400.0,292.0 760.0,264.0");
    }

    #[test]
    fn test_gaps_are_skipped() {
        let data = single(vec![Some(4.0), None, Some(4.0)], vec![None, None, None]);
        let figure = build_figure(&data).unwrap();
        assert_eq!(figure.lines[0].points, "40.0,40.0 760.0,40.0");
        assert_eq!(figure.lines[1].points, "");
    }

    #[test]
    fn test_series_get_distinct_colors() {
        let mut data = single(vec![Some(1.0)], vec![Some(0.0)]);
        data.series.push(PlotSeries {
            label: "SP".into(),
            cases: vec![Some(2.0)],
            deaths: vec![Some(1.0)],
        });
        let figure = build_figure(&data).unwrap();
        assert_eq!(figure.lines.len(), 4);
        assert_eq!(figure.lines[0].color, figure.lines[1].color);
        assert_ne!(figure.lines[0].color, figure.lines[2].color);
    }

    #[test]
    fn test_empty_chart_has_no_figure() {
        assert!(build_figure(&PlotData::default()).is_none());
    }
}
