//! Displayable customer fields, shared by the grid columns and the
//! details modal so both always list the same fields in the same order.

use super::row::CustomerRow;
use std::borrow::Cow;

pub struct CustomerField {
    /// Field identifier, as used by filters and the details labels.
    pub name: &'static str,
    /// Grid column header.
    pub header: &'static str,
    pub value: for<'a> fn(&'a CustomerRow) -> Cow<'a, str>,
}

impl CustomerField {
    /// Label shown in the details modal.
    pub fn label(&self) -> String {
        camel_to_title(self.name)
    }
}

pub const CUSTOMER_FIELDS: &[CustomerField] = &[
    CustomerField { name: "id", header: "#", value: id },
    CustomerField { name: "name", header: "Name", value: name },
    CustomerField { name: "address", header: "Address", value: address },
    CustomerField { name: "city", header: "City", value: city },
    CustomerField { name: "pinCode", header: "Pin Code", value: pin_code },
    CustomerField { name: "country", header: "Country", value: country },
];

fn id(row: &CustomerRow) -> Cow<'_, str> {
    Cow::Owned(row.id.to_string())
}

fn name(row: &CustomerRow) -> Cow<'_, str> {
    Cow::Borrowed(&row.name)
}

fn address(row: &CustomerRow) -> Cow<'_, str> {
    Cow::Borrowed(&row.address)
}

fn city(row: &CustomerRow) -> Cow<'_, str> {
    Cow::Borrowed(&row.city)
}

fn pin_code(row: &CustomerRow) -> Cow<'_, str> {
    Cow::Borrowed(&row.pin_code)
}

fn country(row: &CustomerRow) -> Cow<'_, str> {
    Cow::Borrowed(&row.country)
}

/// `(label, value)` pairs for every displayable field of `row`.
pub fn detail_pairs(row: &CustomerRow) -> Vec<(String, String)> {
    CUSTOMER_FIELDS
        .iter()
        .map(|field| (field.label(), (field.value)(row).into_owned()))
        .collect()
}

/// Turns a camelCase identifier into a title: a space goes before every
/// uppercase ASCII letter, the first character is uppercased, and the
/// result is trimmed. `pinCode` becomes `Pin Code`.
pub fn camel_to_title(value: &str) -> String {
    let mut spaced = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut chars = spaced.chars();
    let titled: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    titled.trim().to_string()
}
