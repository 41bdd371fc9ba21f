//! Time-domain chart

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Pick every `step`-th sample so the line has roughly one point per dot column.
pub fn decimate(t: &[f64], samples: &[f64], target: usize) -> Vec<(f64, f64)> {
    let target = target.max(1);
    let step = samples.len().div_ceil(target).max(1);
    t.iter()
        .zip(samples)
        .step_by(step)
        .map(|(&x, &y)| (x, y))
        .collect()
}

/// Render one waveform against its time axis.
pub fn render_waveform(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    t: &[f64],
    samples: &[f64],
    duration: f64,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL);

    // Braille packs two dots per cell horizontally
    let data = decimate(t, samples, area.width as usize * 2);

    let peak = samples
        .iter()
        .fold(0.0f64, |acc, &x| acc.max(x.abs()))
        .max(1.0)
        * 1.1;

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("t (s)")
                .bounds([0.0, duration])
                .labels(vec![
                    "0".to_string(),
                    format!("{:.3}", duration / 2.0),
                    format!("{:.3}", duration),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("Amp")
                .bounds([-peak, peak])
                .labels(vec![format!("{:.1}", -peak), "0".to_string(), format!("{:.1}", peak)])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimate_keeps_short_buffers() {
        let t = [0.0, 1.0, 2.0];
        let s = [1.0, 2.0, 3.0];
        assert_eq!(decimate(&t, &s, 10), vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    }

    #[test]
    fn test_decimate_limits_points() {
        let t: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        let points = decimate(&t, &t, 100);
        assert_eq!(points.len(), 100);
        assert_eq!(points[1], (10.0, 10.0));
    }
}
