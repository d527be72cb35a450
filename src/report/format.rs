//! Formatted terminal output.
//!
//! Plain-text renderings of estimates, track sets and evolution runs.

use crate::domain::{EvolveMethod, Quantity, TrackSetId};
use crate::evolve::{Star, StarState};
use crate::interp::{Estimate, Interpolator};

/// Format one or more query results.
pub fn format_estimates(estimates: &[Estimate]) -> String {
    let mut out = String::new();

    for est in estimates {
        out.push_str(&format!(
            "{:<12} {:>12} {}\n",
            est.quantity.name(),
            fmt_value(est.value, est.quantity),
            est.quantity.unit_label()
        ));
        out.push_str(&format!("  status     : {} ({})\n", est.code(), est.message()));
        out.push_str(&format!(
            "  age status : {} ({})\n",
            est.age_code(),
            est.age_status.message()
        ));
        out.push_str(&format!(
            "  bracket    : M=[{:.4}, {:.4}] ({})\n",
            est.bracket.lower_mass,
            est.bracket.upper_mass,
            est.mass_status().message()
        ));
    }

    out
}

/// Format the loaded track set as a per-track table.
pub fn format_track_set(interp: &Interpolator) -> String {
    let tracks = interp.track_set();
    let (mass_min, mass_max) = tracks.mass_range();
    let mut out = String::new();

    if let Some(id) = interp.source() {
        out.push_str(&format!("=== {id} - {} ===\n", id.description()));
    }
    out.push_str(&format!(
        "Tracks: n={} | mass=[{mass_min:.4}, {mass_max:.4}] Msun | samples={}\n\n",
        tracks.len(),
        tracks.total_samples()
    ));

    out.push_str(&format!(
        "{:>8} {:>7} {:>15} {:>15} {:>17}\n",
        "mass", "samples", "log age", "log L", "Teff"
    ));
    out.push_str(&format!("{:-<8} {:-<7} {:-<15} {:-<15} {:-<17}\n", "", "", "", "", ""));

    for s in tracks.summary() {
        out.push_str(&format!(
            "{:>8.4} {:>7} {:>15} {:>15} {:>17}\n",
            s.mass,
            s.samples,
            format!("{:.3}..{:.3}", s.log_age_min, s.log_age_max),
            format!("{:.3}..{:.3}", s.luminosity_min, s.luminosity_max),
            format!("{:.0}..{:.0}", s.temperature_min, s.temperature_max),
        ));
    }

    out
}

/// Format the evolution of a star as one row per step.
pub fn format_evolution(star: &Star, method: EvolveMethod, states: &[StarState]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Star: M={:.4} Msun, start log age={:.3}, method={method}\n\n",
        star.mass, star.log_age
    ));
    out.push_str(&format!(
        "{:>9} {:>10} {:>10} {:>6}\n",
        "log age", "log L", "Teff", "status"
    ));
    out.push_str(&format!("{:-<9} {:-<10} {:-<10} {:-<6}\n", "", "", "", ""));

    for state in states {
        // Both quantities share the bracket and the age knots.
        let status = state.luminosity.code();
        out.push_str(&format!(
            "{:>9.3} {:>10} {:>10} {:>6}\n",
            state.log_age,
            fmt_value(state.luminosity.value, Quantity::Luminosity),
            fmt_value(state.temperature.value, Quantity::Temperature),
            status
        ));
    }

    out
}

/// List the supported track sets and where they are expected on disk.
pub fn format_catalogue(base: &std::path::Path) -> String {
    let mut out = String::new();
    for id in TrackSetId::ALL {
        out.push_str(&format!(
            "{:<8} {}\n         {}\n",
            id.name(),
            id.description(),
            id.location(base).display()
        ));
    }
    out
}

fn fmt_value(v: f64, quantity: Quantity) -> String {
    match quantity {
        Quantity::Luminosity => format!("{v:.4}"),
        Quantity::Temperature => format!("{v:.1}"),
    }
}
