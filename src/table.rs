
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::CrcConfig;

/// One named entry of the CRC parameter catalogue.
///
/// `check` is the CRC of the ASCII string `"123456789"` under this entry's
/// parameters, and is what the conformance tests assert against.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct CrcEntry {
    /// The catalogue name, e.g. `"CRC-32/BZIP2"`.
    pub name: &'static str,
    /// Register width in bits.
    pub bitwidth: u32,
    /// The CRC of `"123456789"` under these parameters.
    pub check: u64,
    /// Generator polynomial, without the implicit high bit.
    pub polynomial: u64,
    /// Initial register value.
    pub init: u64,
    /// Whether message bytes are folded in LSB-first.
    pub reflect_in: bool,
    /// Whether the final register is bit-reversed before the XOR mask.
    pub reflect_out: bool,
    /// Mask XORed into the finalized register.
    pub xorout: u64,
}

impl CrcEntry {
    /// Returns this entry's parameters as an engine configuration.
    pub fn config(&self) -> CrcConfig {
        CrcConfig {
            bitwidth: self.bitwidth,
            polynomial: self.polynomial,
            init: self.init,
            xorout: self.xorout,
            reflect_in: self.reflect_in,
            reflect_out: self.reflect_out,
        }
    }
}

const fn entry(
    name: &'static str,
    bitwidth: u32,
    check: u64,
    polynomial: u64,
    init: u64,
    reflect_in: bool,
    reflect_out: bool,
    xorout: u64,
) -> CrcEntry {
    CrcEntry { name, bitwidth, check, polynomial, init, reflect_in, reflect_out, xorout }
}

/// The catalogue of supported CRC variants, with check values for the ASCII
/// string `"123456789"`.
pub static TABLE: &[CrcEntry] = &[
    entry("CRC-32",             32, 0xCBF43926, 0x04C11DB7, 0xFFFFFFFF, true,  true,  0xFFFFFFFF),
    entry("CRC-32/BZIP2",       32, 0xFC891918, 0x04C11DB7, 0xFFFFFFFF, false, false, 0xFFFFFFFF),
    entry("CRC-32/JAMCRC",      32, 0x340BC6D9, 0x04C11DB7, 0xFFFFFFFF, true,  true,  0x00000000),
    entry("CRC-32/MPEG-2",      32, 0x0376E6E7, 0x04C11DB7, 0xFFFFFFFF, false, false, 0x00000000),
    entry("CRC-32/POSIX",       32, 0x765E7680, 0x04C11DB7, 0x00000000, false, false, 0xFFFFFFFF),
    entry("CRC-32/SATA",        32, 0xCF72AFE8, 0x04C11DB7, 0x52325032, false, false, 0x00000000),
    entry("CRC-32/XFER",        32, 0xBD0BE338, 0x000000AF, 0x00000000, false, false, 0x00000000),
    entry("CRC-32C",            32, 0xE3069283, 0x1EDC6F41, 0xFFFFFFFF, true,  true,  0xFFFFFFFF),
    entry("CRC-32D",            32, 0x87315576, 0xA833982B, 0xFFFFFFFF, true,  true,  0xFFFFFFFF),
    entry("CRC-32Q",            32, 0x3010BF7F, 0x814141AB, 0x00000000, false, false, 0x00000000),
    entry("CRC-16/ARC",         16, 0xBB3D,     0x8005,     0x0000,     true,  true,  0x0000),
    entry("CRC-16/AUG-CCITT",   16, 0xE5CC,     0x1021,     0x1D0F,     false, false, 0x0000),
    entry("CRC-16/BUYPASS",     16, 0xFEE8,     0x8005,     0x0000,     false, false, 0x0000),
    entry("CRC-16/CCITT-FALSE", 16, 0x29B1,     0x1021,     0xFFFF,     false, false, 0x0000),
    entry("CRC-16/CDMA2000",    16, 0x4C06,     0xC867,     0xFFFF,     false, false, 0x0000),
    entry("CRC-16/DDS-110",     16, 0x9ECF,     0x8005,     0x800D,     false, false, 0x0000),
    entry("CRC-16/DECT-R",      16, 0x007E,     0x0589,     0x0000,     false, false, 0x0001),
    entry("CRC-16/DECT-X",      16, 0x007F,     0x0589,     0x0000,     false, false, 0x0000),
    entry("CRC-16/DNP",         16, 0xEA82,     0x3D65,     0x0000,     true,  true,  0xFFFF),
    entry("CRC-16/EN-13757",    16, 0xC2B7,     0x3D65,     0x0000,     false, false, 0xFFFF),
    entry("CRC-16/GENIBUS",     16, 0xD64E,     0x1021,     0xFFFF,     false, false, 0xFFFF),
    entry("CRC-16/KERMIT",      16, 0x2189,     0x1021,     0x0000,     true,  true,  0x0000),
    entry("CRC-16/MAXIM",       16, 0x44C2,     0x8005,     0x0000,     true,  true,  0xFFFF),
    entry("CRC-16/MCRF4XX",     16, 0x6F91,     0x1021,     0xFFFF,     true,  true,  0x0000),
    entry("CRC-16/MODBUS",      16, 0x4B37,     0x8005,     0xFFFF,     true,  true,  0x0000),
    entry("CRC-16/RIELLO",      16, 0x63D0,     0x1021,     0xB2AA,     true,  true,  0x0000),
    entry("CRC-16/T10-DIF",     16, 0xD0DB,     0x8BB7,     0x0000,     false, false, 0x0000),
    entry("CRC-16/TELEDISK",    16, 0x0FB3,     0xA097,     0x0000,     false, false, 0x0000),
    entry("CRC-16/TMS37157",    16, 0x26B1,     0x1021,     0x89EC,     true,  true,  0x0000),
    entry("CRC-16/USB",         16, 0xB4C8,     0x8005,     0xFFFF,     true,  true,  0xFFFF),
    entry("CRC-16/X-25",        16, 0x906E,     0x1021,     0xFFFF,     true,  true,  0xFFFF),
    entry("CRC-16/XMODEM",      16, 0x31C3,     0x1021,     0x0000,     false, false, 0x0000),
    entry("CRC-A",              16, 0xBF05,     0x1021,     0xC6C6,     true,  true,  0x0000),
    entry("CRC-8",              8,  0xF4,       0x07,       0x00,       false, false, 0x00),
    entry("CRC-8/CDMA2000",     8,  0xDA,       0x9B,       0xFF,       false, false, 0x00),
    entry("CRC-8/DARC",         8,  0x15,       0x39,       0x00,       true,  true,  0x00),
    entry("CRC-8/DVB-S2",       8,  0xBC,       0xD5,       0x00,       false, false, 0x00),
    entry("CRC-8/EBU",          8,  0x97,       0x1D,       0xFF,       true,  true,  0x00),
    entry("CRC-8/I-CODE",       8,  0x7E,       0x1D,       0xFD,       false, false, 0x00),
    entry("CRC-8/ITU",          8,  0xA1,       0x07,       0x00,       false, false, 0x55),
    entry("CRC-8/MAXIM",        8,  0xA1,       0x31,       0x00,       true,  true,  0x00),
    entry("CRC-8/ROHC",         8,  0xD0,       0x07,       0xFF,       true,  true,  0x00),
    entry("CRC-8/WCDMA",        8,  0x25,       0x9B,       0x00,       true,  true,  0x00),
    entry("CRC-5/USB",          5,  0x19,       0x05,       0x1F,       true,  true,  0x1F),
    entry("CRC-1",              1,  0x1,        0x1,        0x0,        false, false, 0x0),
];

static BY_NAME: Lazy<HashMap<&'static str, &'static CrcEntry>> =
    Lazy::new(|| TABLE.iter().map(|entry| (entry.name, entry)).collect());

/// Looks up a catalogue entry by name.
pub fn find(name: &str) -> Option<&'static CrcEntry> {
    BY_NAME.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        let crc32 = find("CRC-32").unwrap();

        assert_eq!(crc32.bitwidth, 32);
        assert_eq!(crc32.check, 0xCBF43926);
        assert_eq!(find("CRC-33"), None);
    }

    #[test]
    fn names_unique() {
        assert_eq!(TABLE.len(), BY_NAME.len());
    }

    #[test]
    fn entries_valid() {
        for entry in TABLE.iter() {
            assert!(entry.config().is_valid(), "{}", entry.name);
        }
    }
}
