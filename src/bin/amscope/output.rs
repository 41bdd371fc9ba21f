//! Analysis output formatting.

use std::io::Write;

use am_scope::{
    spectrum::{dominant_bins, energy, spectral_energy},
    stats::{modulation_depth, SignalStats},
    AmAnalysis, Complex64,
};
use color_eyre::eyre::Result as EyreResult;

use crate::OutputFormat;

/// Number of spectral peaks listed in the text summary.
const SUMMARY_PEAKS: usize = 3;

/// Write `analysis` to `out` in the requested format.
pub fn write_analysis<W: Write>(
    out: &mut W,
    analysis: &AmAnalysis,
    format: OutputFormat,
) -> EyreResult<()> {
    match format {
        OutputFormat::Text => write_text(out, analysis)?,
        OutputFormat::Json => write_json(out, analysis)?,
        OutputFormat::Csv => write_csv(out, analysis)?,
    }
    tracing::debug!(?format, samples = analysis.len(), "wrote analysis");
    Ok(())
}

fn write_text<W: Write>(out: &mut W, a: &AmAnalysis) -> EyreResult<()> {
    let p = &a.params;
    writeln!(out, "AM Analysis")?;
    writeln!(out, "===========")?;
    writeln!(out, "Carrier frequency:  {} Hz", p.carrier_freq)?;
    writeln!(out, "Signal frequency:   {} Hz", p.info_freq)?;
    writeln!(out, "Modulation index:   {}", p.modulation_index)?;
    writeln!(out, "Duration:           {} s", p.duration)?;
    writeln!(out, "Sampling rate:      {} Hz", p.sample_rate)?;
    writeln!(out, "Samples:            {}", a.len())?;
    writeln!(out, "Nyquist:            {} Hz", p.nyquist())?;
    if p.is_aliased() {
        writeln!(out, "Warning:            tone at or above Nyquist, spectrum aliases")?;
    }

    if a.is_empty() {
        writeln!(out, "\nNo samples (duration * sampling rate < 1)")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(
        out,
        "{:<12} {:>10} {:>10} {:>10} {:>12}",
        "signal", "peak", "rms", "dc", "parseval err"
    )?;
    let rows = [
        ("carrier", &a.carrier, &a.carrier_spectrum),
        ("info", &a.info, &a.info_spectrum),
        ("modulated", &a.modulated, &a.modulated_spectrum),
    ];
    for (name, samples, spectrum) in rows {
        let stats = SignalStats::from_samples(samples);
        let parseval = (spectral_energy(spectrum) - energy(samples)).abs();
        writeln!(
            out,
            "{:<12} {:>10.4} {:>10.4} {:>10.4} {:>12.2e}",
            name, stats.peak, stats.rms, stats.dc, parseval
        )?;
    }

    writeln!(out)?;
    match modulation_depth(&a.freqs, &a.modulated_spectrum, p.carrier_freq, p.info_freq) {
        Some(depth) => writeln!(out, "Measured modulation depth: {:.4}", depth)?,
        None => writeln!(out, "Measured modulation depth: unresolved")?,
    }

    writeln!(out, "Dominant bins (modulated):")?;
    for peak in dominant_bins(&a.freqs, &a.modulated_spectrum, SUMMARY_PEAKS) {
        writeln!(
            out,
            "  bin {:>6}  {:>12.2} Hz  |S| = {:.4}",
            peak.bin, peak.freq, peak.magnitude
        )?;
    }
    Ok(())
}

fn complex_pairs(spectrum: &[Complex64]) -> Vec<[f64; 2]> {
    spectrum.iter().map(|c| [c.re, c.im]).collect()
}

fn write_json<W: Write>(out: &mut W, a: &AmAnalysis) -> EyreResult<()> {
    let p = &a.params;
    let json = serde_json::json!({
        "params": {
            "carrier_freq": p.carrier_freq,
            "signal_freq": p.info_freq,
            "modulation_index": p.modulation_index,
            "duration": p.duration,
            "sampling_rate": p.sample_rate,
        },
        "samples": a.len(),
        "t": a.t,
        "carrier": a.carrier,
        "info": a.info,
        "modulated": a.modulated,
        "freqs": a.freqs,
        "carrier_spectrum": complex_pairs(&a.carrier_spectrum),
        "info_spectrum": complex_pairs(&a.info_spectrum),
        "modulated_spectrum": complex_pairs(&a.modulated_spectrum),
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, a: &AmAnalysis) -> EyreResult<()> {
    writeln!(
        out,
        "index,t,carrier,info,modulated,freq,carrier_mag,info_mag,modulated_mag"
    )?;
    for i in 0..a.len() {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            i,
            a.t[i],
            a.carrier[i],
            a.info[i],
            a.modulated[i],
            a.freqs[i],
            a.carrier_spectrum[i].norm(),
            a.info_spectrum[i].norm(),
            a.modulated_spectrum[i].norm()
        )?;
    }
    Ok(())
}
