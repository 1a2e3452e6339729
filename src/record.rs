//! One output row per parsed address.

use ipoctets_core::{parse, Family, IpAddress, OctetStrings, Octets};

use crate::error::Result;

/// Column names in output order. `dnsbl` is only present when a zone is set.
pub const BASE_COLUMNS: [&str; 7] = [
    "input",
    "family",
    "text",
    "octets",
    "str_octets",
    "reversed",
    "ptr",
];

/// Name of the optional DNSBL column.
pub const DNSBL_COLUMN: &str = "dnsbl";

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain text
    Text(String),
    /// Byte values, rendered as decimal numbers
    Octets(Octets),
    /// Digit-group tokens
    Tokens(OctetStrings),
}

/// An address together with the input line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    /// The input text exactly as given (after trimming)
    pub input: String,
    /// The parsed address
    pub address: IpAddress,
    /// DNSBL query name, when a zone was requested
    pub dnsbl: Option<String>,
}

impl AddressRecord {
    /// Build a record from one line of input.
    ///
    /// Returns `Ok(None)` if the text is not an address, and an error only
    /// if `zone` is given but empty.
    pub fn from_input(input: &str, zone: Option<&str>) -> Result<Option<Self>> {
        let Some(address) = parse(input) else {
            return Ok(None);
        };

        let dnsbl = match zone {
            Some(zone) => Some(address.dnsbl_name(zone)?),
            None => None,
        };

        Ok(Some(Self {
            input: input.to_string(),
            address,
            dnsbl,
        }))
    }

    /// The address family.
    pub fn family(&self) -> Family {
        self.address.family()
    }

    /// Column names for this record.
    pub fn columns(&self) -> Vec<&'static str> {
        columns(self.dnsbl.is_some())
    }

    /// Cell values, in the same order as [`AddressRecord::columns`].
    pub fn fields(&self) -> Vec<FieldValue> {
        let mut fields = vec![
            FieldValue::Text(self.input.clone()),
            FieldValue::Text(self.family().to_string()),
            FieldValue::Text(self.address.to_text()),
            FieldValue::Octets(self.address.to_octets()),
            FieldValue::Tokens(self.address.to_octet_strings()),
            FieldValue::Tokens(self.address.to_reversed_octet_strings()),
            FieldValue::Text(self.address.ptr_name()),
        ];
        if let Some(dnsbl) = &self.dnsbl {
            fields.push(FieldValue::Text(dnsbl.clone()));
        }
        fields
    }
}

/// Column names for a result set, with or without the DNSBL column.
pub fn columns(with_dnsbl: bool) -> Vec<&'static str> {
    let mut columns = BASE_COLUMNS.to_vec();
    if with_dnsbl {
        columns.push(DNSBL_COLUMN);
    }
    columns
}
