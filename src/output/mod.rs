//! Rendering of distance results as text columns or JSON
//!
//! Only the numeric values and their semantics are contractual; the exact
//! column widths and rounding here are presentation choices. JSON output
//! carries every result including the reference entry; text output prints
//! a header describing the reference and one row per target.

use std::io::Write;

use crate::geodesy::DistanceResult;
use crate::settings::Settings;
use crate::{CircumpolarError, Result};

/// Writes the full result list as a compact JSON array
pub fn write_json<W: Write>(out: &mut W, results: &[DistanceResult]) -> Result<()> {
    serde_json::to_writer(&mut *out, results)
        .map_err(|e| CircumpolarError::OutputError(format!("cannot serialize results: {}", e)))?;
    writeln!(out)?;
    Ok(())
}

/// Writes a header plus one fixed-width row per target
///
/// When a declination is supplied, the header names it and each row gains
/// a bracketed magnetic heading (true heading plus declination, reduced to
/// `[0, 360)`). When it is absent the columns are simply omitted.
pub fn write_text<W: Write>(
    out: &mut W,
    results: &[DistanceResult],
    settings: &Settings,
    declination: Option<f64>,
) -> Result<()> {
    let reference = &results[0].coord;

    match declination {
        Some(decl) => writeln!(
            out,
            "Distances from {:.3}, {:.3} [using a {:.1} {} radius. Magnetic declination there is {:.2}°]",
            reference.latitude(),
            reference.longitude(),
            settings.radius,
            settings.unit,
            decl,
        )?,
        None => writeln!(
            out,
            "Distances from {:.3}, {:.3} [using a {:.1} {} radius]",
            reference.latitude(),
            reference.longitude(),
            settings.radius,
            settings.unit,
        )?,
    }

    for result in results.iter().skip(1) {
        match declination {
            Some(decl) => writeln!(
                out,
                " {:<8.3} {:<8.3}    {:.0} {}\t{:.0}°\t[{:.0}°]",
                result.coord.latitude(),
                result.coord.longitude(),
                result.distance,
                settings.unit,
                result.heading,
                (result.heading + decl).rem_euclid(360.0),
            )?,
            None => writeln!(
                out,
                " {:<8.3} {:<8.3}    {:.0} {}\t{:.0}°",
                result.coord.latitude(),
                result.coord.longitude(),
                result.distance,
                settings.unit,
                result.heading,
            )?,
        }
    }

    Ok(())
}
