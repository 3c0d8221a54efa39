//! Parsing of single `FinalEvents` particle lines.

use g2s_core::{ConvError, ErrorInfo};
use g2s_event::record::{FourMomentum, RawParticle};

/// Columns in a particle line without the production-charge extension.
const BASE_COLUMNS: usize = 15;

/// Guard byte used while repairing fused columns; never present in input.
const EXPONENT_GUARD: char = '\u{1}';

fn parse_error(line: &str, line_number: usize, what: &str) -> ConvError {
    ConvError::Parse(
        ErrorInfo::new("particle-line", what)
            .with_context("line_number", line_number.to_string())
            .with_context("line", line.trim_end().to_string()),
    )
}

fn field<T: std::str::FromStr>(
    fields: &[&str],
    index: usize,
    line: &str,
    line_number: usize,
) -> Result<T, ConvError> {
    fields
        .get(index)
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| parse_error(line, line_number, &format!("bad value in column {index}")))
}

/// Parses one particle line.
///
/// Some GiBUU builds emit columns fused together when a negative number
/// follows without separating whitespace. When the column count is off, a
/// repair pass re-splits on minus signs (guarding `E-` exponents) before
/// the line is rejected.
pub fn parse_particle_line(
    line: &str,
    line_number: usize,
    has_prod_charge: bool,
) -> Result<RawParticle, ConvError> {
    let expected = BASE_COLUMNS + usize::from(has_prod_charge);

    let mut fields: Vec<&str> = line.split_whitespace().collect();
    let repaired;
    if fields.len() != expected {
        repaired = line
            .replace("E-", &format!("E{EXPONENT_GUARD}"))
            .replace('-', " -")
            .replace(EXPONENT_GUARD, "-");
        fields = repaired.split_whitespace().collect();
        if fields.len() != expected {
            return Err(parse_error(
                line,
                line_number,
                &format!("expected {expected} columns, found {}", fields.len()),
            ));
        }
    }

    Ok(RawParticle {
        run: field(&fields, 0, line, line_number)?,
        event_number: field(&fields, 1, line, line_number)?,
        species: field(&fields, 2, line, line_number)?,
        charge: field(&fields, 3, line, line_number)?,
        per_weight: field(&fields, 4, line, line_number)?,
        position: [
            field(&fields, 5, line, line_number)?,
            field(&fields, 6, line, line_number)?,
            field(&fields, 7, line, line_number)?,
        ],
        four_mom: FourMomentum {
            e: field(&fields, 8, line, line_number)?,
            px: field(&fields, 9, line, line_number)?,
            py: field(&fields, 10, line, line_number)?,
            pz: field(&fields, 11, line, line_number)?,
        },
        history: field(&fields, 12, line, line_number)?,
        reaction_code: field(&fields, 13, line, line_number)?,
        probe_energy: field(&fields, 14, line, line_number)?,
        prod_charge: if has_prod_charge {
            Some(field(&fields, 15, line, line_number)?)
        } else {
            None
        },
        line_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str =
        "1 7 1 1 4.277E-03 1.1 -0.4 2.0 0.939 0.05 -0.02 0.10 2000001 2 1.5 1";

    #[test]
    fn parses_all_columns() {
        let part = parse_particle_line(LINE, 12, true).expect("parse");
        assert_eq!(part.run, 1);
        assert_eq!(part.event_number, 7);
        assert_eq!(part.species, 1);
        assert_eq!(part.charge, 1);
        assert_eq!(part.history, 2_000_001);
        assert_eq!(part.reaction_code, 2);
        assert_eq!(part.prod_charge, Some(1));
        assert_eq!(part.line_number, 12);
        assert!((part.four_mom.e - 0.939).abs() < 1e-12);
        assert!((part.probe_energy - 1.5).abs() < 1e-12);
    }

    #[test]
    fn repairs_fused_negative_columns() {
        // The position columns fused into "1.1-0.4"; the exponent must survive.
        let fused = "1 7 1 1 4.277E-03 1.1-0.4 2.0 0.939 0.05 -0.02 0.10 2000001 2 1.5 1";
        let part = parse_particle_line(fused, 3, true).expect("repair");
        assert!((part.position[0] - 1.1).abs() < 1e-12);
        assert!((part.position[1] + 0.4).abs() < 1e-12);
        assert!((part.per_weight - 4.277e-3).abs() < 1e-15);
    }

    #[test]
    fn rejects_short_lines() {
        assert!(parse_particle_line("1 2 3", 1, false).is_err());
    }

    #[test]
    fn column_count_tracks_prod_charge_flag() {
        let without: &str = &LINE[..LINE.len() - 2];
        assert!(parse_particle_line(without, 1, false).is_ok());
        assert!(parse_particle_line(LINE, 1, false).is_err());
    }
}
