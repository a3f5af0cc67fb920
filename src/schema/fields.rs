// src/schema/fields.rs

use serde::Serialize;

/// Logical columns of the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Origin,
    Destination,
    NonOperativeReefer,
    Rate20,
    Rate40,
    Validity,
    FreeDays,
    Carrier,
    Agent,
}

/// Static description of how a [`Field`] is found in a header row.
#[derive(Debug)]
pub struct FieldSpec {
    pub field: Field,
    /// Exact header variants, tried in order.
    pub aliases: &'static [&'static str],
    /// Substring token families. Each family must match as a whole; a row
    /// takes the first family whose column holds a non-empty cell.
    pub fallbacks: &'static [&'static [&'static str]],
}

pub const ORIGIN_SYNONYMS: &[&str] = &[
    "pol",
    "puerto de embarque",
    "puerto embarque",
    "puerto origen",
    "origen",
];

pub const DESTINATION_SYNONYMS: &[&str] =
    &["pod", "puerto de destino", "puerto destino", "destino"];

pub static RATE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: Field::Origin,
        aliases: &["POL", "PUERTO DE EMBARQUE", "PUERTO EMBARQUE", "PUERTO ORIGEN", "ORIGEN"],
        fallbacks: &[&["pol"]],
    },
    FieldSpec {
        field: Field::Destination,
        aliases: &["POD", "PUERTO DE DESTINO", "PUERTO DESTINO", "DESTINO"],
        fallbacks: &[&["pod"]],
    },
    FieldSpec {
        field: Field::NonOperativeReefer,
        aliases: &["NOR", "NON OPERATIVE REEFER", "NON OPPERATIVE REEFER"],
        fallbacks: &[&["nor"]],
    },
    FieldSpec {
        field: Field::Rate20,
        aliases: &["20GP", "20 GP", "20'GP", "20'", "20FT", "20 FT"],
        fallbacks: &[&["20", "gp"]],
    },
    // HC and HQ name the same container class; sheets use either.
    FieldSpec {
        field: Field::Rate40,
        aliases: &[
            "40HC", "40 HC", "40'HC", "40' HC", "40HQ", "40 HQ", "40'HQ", "40' HQ", "40FT HC",
            "40FT HQ",
        ],
        fallbacks: &[&["40", "hc"], &["40", "hq"], &["40hc"], &["40hq"]],
    },
    FieldSpec {
        field: Field::Validity,
        aliases: &["VALIDEZ", "VALIDEZ TARIFA", "VALIDITY", "VALID"],
        fallbacks: &[&["validez"]],
    },
    FieldSpec {
        field: Field::FreeDays,
        aliases: &["DIAS LIBRES", "DÍAS LIBRES", "DIAS LIBRES DESTINO", "FREE DAYS"],
        fallbacks: &[&["dias", "libres"]],
    },
    FieldSpec {
        field: Field::Carrier,
        aliases: &["NAVIERA", "LINEA", "LÍNEA", "CARRIER"],
        fallbacks: &[&["naviera"]],
    },
    FieldSpec {
        field: Field::Agent,
        aliases: &[
            "AGENTE",
            "AGENTE ORIGEN",
            "FREIGHT FORWARDER",
            "FORWARDER",
            "EMBARCADOR",
            "SHIPPER AGENT",
        ],
        fallbacks: &[&["agente"]],
    },
];
