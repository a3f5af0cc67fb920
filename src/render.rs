// src/render.rs
// Plain-text views of a catalog for the terminal.

use std::io::{self, Write};

use crate::lookup::QueryOutcome;
use crate::process::{LocalCharge, RateRecord};
use crate::schema::Field;

const RATE_COLUMNS: [(&str, Field); 9] = [
    ("POL", Field::Origin),
    ("POD", Field::Destination),
    ("NOR", Field::NonOperativeReefer),
    ("20GP", Field::Rate20),
    ("40HC", Field::Rate40),
    ("Validez", Field::Validity),
    ("Dias libres", Field::FreeDays),
    ("Naviera", Field::Carrier),
    ("Agente", Field::Agent),
];

pub fn write_choices<W: Write>(out: &mut W, label: &str, values: &[String]) -> io::Result<()> {
    writeln!(out, "{} ({}):", label, values.len())?;
    for v in values {
        writeln!(out, "  {}", v)?;
    }
    Ok(())
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &QueryOutcome<'_>) -> io::Result<()> {
    match outcome {
        QueryOutcome::SelectionIncomplete => {
            writeln!(out, "Selecciona POL y POD para buscar tarifas.")
        }
        QueryOutcome::NoMatches => {
            writeln!(out, "No se encontraron tarifas para esa combinación.")
        }
        QueryOutcome::Matches(rows) => write_rates(out, rows),
    }
}

fn write_rates<W: Write>(out: &mut W, rows: &[&RateRecord]) -> io::Result<()> {
    let headers: Vec<&str> = RATE_COLUMNS.iter().map(|(h, _)| *h).collect();
    let body: Vec<Vec<&str>> = rows
        .iter()
        .map(|r| {
            RATE_COLUMNS
                .iter()
                .map(|&(_, field)| match field {
                    Field::NonOperativeReefer => r.nor_display(),
                    _ => r.get(field),
                })
                .collect()
        })
        .collect();
    write_table(out, &headers, &body)
}

pub fn write_local_charges<W: Write>(
    out: &mut W,
    sheet: &str,
    charges: Option<&[LocalCharge]>,
) -> io::Result<()> {
    match charges {
        None => writeln!(
            out,
            "No se encontraron gastos locales en la hoja \"{}\".",
            sheet
        ),
        Some([]) => writeln!(out, "La hoja \"{}\" no contiene filas legibles.", sheet),
        Some(charges) => {
            let body: Vec<Vec<&str>> = charges
                .iter()
                .map(|c| {
                    vec![
                        c.concept.as_str(),
                        c.detail.as_str(),
                        c.calculation.as_str(),
                        c.tax.label(),
                    ]
                })
                .collect();
            write_table(out, &["Concepto", "Detalle", "Cálculo", ""], &body)
        }
    }
}

pub fn write_remarks<W: Write>(out: &mut W, remarks: Option<&[String]>) -> io::Result<()> {
    match remarks {
        Some(lines) if !lines.is_empty() => {
            for line in lines {
                writeln!(out, "  • {}", line)?;
            }
            Ok(())
        }
        _ => writeln!(out, "No remarks available."),
    }
}

/// Columns padded to their widest cell, separated by two spaces.
fn write_table<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<&str>]) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{}{}", c, " ".repeat(w - c.chars().count())))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    writeln!(out, "{}", line(headers))?;
    for row in rows {
        writeln!(out, "{}", line(row.as_slice()))?;
    }
    Ok(())
}
