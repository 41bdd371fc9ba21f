//! Magnitude spectrum chart
//!
//! Bins arrive in FFT layout (positive frequencies, then the wrapped negative
//! half), so they are fft-shifted before plotting to keep the line monotonic.

use am_scope::{spectrum::magnitude_points, Complex64};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Render |S| against frequency, spanning `[-fs/2, fs/2]`.
pub fn render_spectrum(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    freqs: &[f64],
    spectrum: &[Complex64],
    sample_rate: f64,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL);

    let data = magnitude_points(freqs, spectrum);
    let nyquist = (sample_rate / 2.0).max(f64::MIN_POSITIVE);
    let max_mag = data.iter().map(|(_, m)| *m).fold(0.0, f64::max).max(1.0) * 1.1;

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("Hz")
                .bounds([-nyquist, nyquist])
                .labels(vec![
                    format!("{:.0}", -nyquist),
                    "0".to_string(),
                    format!("{:.0}", nyquist),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("|S|")
                .bounds([0.0, max_mag])
                .labels(vec!["0".to_string(), format!("{:.0}", max_mag)])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
