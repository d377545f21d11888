use std::fmt::{self, Write};

use tracing::warn;

use super::EDID_LENGTH;
use crate::utils::{Printer, SeqBuf};

/// Size of the vendor & product identification in bytes
pub const PRODUCT_ID_SIZE: usize = 10;

/// Capacity of the buffer the manufacture date is formatted into
pub const DATE_BUF_SIZE: usize = 40;

// Offset of the vendor & product identification inside the base block
const PRODUCT_ID_OFFSET: usize = 8;

/// Vendor & product identification of a display
///
/// All fields are kept in the byte order they have in the EDID block. Use the
/// accessor methods to get host values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId {
    /// Manufacturer id, big endian
    pub manufacturer_name: [u8; 2],
    /// Manufacturer assigned product code, little endian
    pub product_code: [u8; 2],
    /// Serial number, little endian
    pub serial_number: [u8; 4],
    /// Week of manufacture; `0` if unspecified, `0xff` if `year_of_manufacture` is a model year
    pub week_of_manufacture: u8,
    /// Year of manufacture (or model year), offset from 1990
    pub year_of_manufacture: u8,
}

impl ProductId {
    /// Build the record from its raw wire representation
    pub fn from_bytes(raw: &[u8; PRODUCT_ID_SIZE]) -> ProductId {
        ProductId {
            manufacturer_name: [raw[0], raw[1]],
            product_code: [raw[2], raw[3]],
            serial_number: [raw[4], raw[5], raw[6], raw[7]],
            week_of_manufacture: raw[8],
            year_of_manufacture: raw[9],
        }
    }

    /// Raw wire representation of this record
    pub fn to_bytes(&self) -> [u8; PRODUCT_ID_SIZE] {
        let mut raw = [0u8; PRODUCT_ID_SIZE];
        raw[0..2].copy_from_slice(&self.manufacturer_name);
        raw[2..4].copy_from_slice(&self.product_code);
        raw[4..8].copy_from_slice(&self.serial_number);
        raw[8] = self.week_of_manufacture;
        raw[9] = self.year_of_manufacture;
        raw
    }

    /// The decoded three letter manufacturer id
    pub fn manufacturer_id(&self) -> ManufacturerId {
        decode_mfg_id(u16::from_be_bytes(self.manufacturer_name))
    }

    /// Product code as host value
    pub fn product_code(&self) -> u16 {
        u16::from_le_bytes(self.product_code)
    }

    /// Serial number as host value
    pub fn serial_number(&self) -> u32 {
        u32::from_le_bytes(self.serial_number)
    }

    /// Week and year of manufacture
    pub fn manufacture_date(&self) -> ManufactureDate {
        ManufactureDate::new(self.week_of_manufacture, self.year_of_manufacture)
    }
}

/// Get the vendor & product identification of an EDID
///
/// An absent EDID, or one shorter than a single block, yields the all zero
/// record. The fields are copied as is; header and checksum are not checked, use
/// [`EdidBlock`](super::EdidBlock) for that.
pub fn get_product_id(edid: Option<&[u8]>) -> ProductId {
    match edid {
        Some(edid) if edid.len() >= EDID_LENGTH => {
            let mut raw = [0u8; PRODUCT_ID_SIZE];
            raw.copy_from_slice(&edid[PRODUCT_ID_OFFSET..PRODUCT_ID_OFFSET + PRODUCT_ID_SIZE]);
            ProductId::from_bytes(&raw)
        }
        _ => ProductId::default(),
    }
}

/// Three letter manufacturer id, also known as PNP id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManufacturerId(pub [char; 3]);

impl ManufacturerId {
    /// The three characters of the id
    pub fn as_chars(&self) -> &[char; 3] {
        &self.0
    }

    /// Returns true if all three characters are in `A..=Z`
    ///
    /// Groups of `0` or above `26` decode to characters around the alphabet
    /// (`@`, `[`, `\`, ...) that no registered PNP id uses.
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|c| c.is_ascii_uppercase())
    }

    /// Pack the id back into its 16 bit big endian representation
    pub fn to_raw(&self) -> u16 {
        self.0
            .iter()
            .fold(0u16, |acc, &c| (acc << 5) | ((c as u16).wrapping_sub('@' as u16) & 0x1f))
    }
}

impl fmt::Display for ManufacturerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            f.write_char(c)?;
        }
        Ok(())
    }
}

/// Decode the manufacturer id from its big endian 16 bit value
///
/// The id consists of three 5 bit letters, `1` being `A`. Bit 15 is reserved.
pub fn decode_mfg_id(mfg_id: u16) -> ManufacturerId {
    let letter = |shift: u16| char::from(b'@' + ((mfg_id >> shift) & 0x1f) as u8);
    ManufacturerId([letter(10), letter(5), letter(0)])
}

/// Manufacture date as encoded in the EDID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManufactureDate {
    /// The year is the model year (week `0xff`)
    ModelYear(u16),
    /// Only the year of manufacture is known (week `0`)
    Year(u16),
    /// Week and year of manufacture
    WeekYear {
        /// Week of the year
        week: u8,
        /// Year of manufacture
        year: u16,
    },
}

impl ManufactureDate {
    /// Interpret the raw week and year bytes
    pub fn new(week: u8, year_offset: u8) -> ManufactureDate {
        let year = year_offset as u16 + 1990;
        match week {
            0xff => ManufactureDate::ModelYear(year),
            0 => ManufactureDate::Year(year),
            week => ManufactureDate::WeekYear { week, year },
        }
    }

    /// The calendar year
    pub fn year(&self) -> u16 {
        match *self {
            ManufactureDate::ModelYear(year)
            | ManufactureDate::Year(year)
            | ManufactureDate::WeekYear { year, .. } => year,
        }
    }
}

impl fmt::Display for ManufactureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManufactureDate::ModelYear(year) => write!(f, "model year: {}", year),
            ManufactureDate::Year(year) => write!(f, "year of manufacture: {}", year),
            ManufactureDate::WeekYear { week, year } => {
                write!(f, "week/year of manufacture: {}/{}", week, year)
            }
        }
    }
}

struct HexBytes<'a>(&'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Print the decoded product id to a printer
///
/// If `raw` is set, the raw bytes are printed as hex on an additional line.
pub fn print_product_id<P: Printer + ?Sized>(p: &mut P, id: &ProductId, raw: bool) {
    print_product_id_with::<DATE_BUF_SIZE, P>(p, id, raw);
}

// Formats the date into a buffer of `N` bytes, returns true if it was truncated.
fn print_product_id_with<const N: usize, P: Printer + ?Sized>(
    p: &mut P,
    id: &ProductId,
    raw: bool,
) -> bool {
    let mut date = SeqBuf::<N>::new();
    let _ = write!(date, "{}", id.manufacture_date());

    p.print(format_args!(
        "manufacturer name: {}, product code: {}, serial number: {}, {}\n",
        id.manufacturer_id(),
        id.product_code(),
        id.serial_number(),
        date,
    ));
    if raw {
        p.print(format_args!("raw product id: {}\n", HexBytes(&id.to_bytes())));
    }

    if date.has_overflowed() {
        warn!(capacity = N, "Manufacture date truncated: {}", date);
    }
    date.has_overflowed()
}

/// Render the decoded product id as text
///
/// Same output as [`print_product_id`], without the trailing newline.
pub fn render_product_id(id: &ProductId, raw: bool) -> String {
    let mut out = String::new();
    print_product_id(&mut out, id, raw);
    if out.ends_with('\n') {
        out.pop();
    }
    out
}
