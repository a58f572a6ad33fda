
use crate::config::CrcConfig;
use crate::fold;
use crate::reflect::reflect;

#[derive(Clone,Copy,Debug,PartialEq)]
enum Phase {
    /// Post-reset. Aligns the byte window to the registered data path
    /// before the first capture.
    Init,
    /// Next data tick carries the low nibble of a message byte.
    DataLo,
    /// Low nibble captured; next data tick carries the high nibble.
    DataHi,
    /// Byte assembled; folding one bit per tick.
    Shifting,
}

/// The bit-serial CRC core. Assembles message bytes from nibble pairs and
/// folds them into the running register: two intake ticks plus eight shift
/// ticks per byte, the eighth landing on the tick the next byte's low
/// nibble is presented.
pub struct Accumulator {
    crc: u64,
    byte_buffer: u8,
    bit_cursor: u32,
    phase: Phase,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            crc: 0,
            byte_buffer: 0,
            bit_cursor: 0,
            phase: Phase::Init,
        }
    }

    /// Reloads the register from the configuration's `init` and realigns
    /// the byte window. The configuration itself is untouched.
    pub fn reset(&mut self, config: &CrcConfig) {
        self.crc = config.init & fold::mask(config.bitwidth);
        self.byte_buffer = 0;
        self.bit_cursor = 0;
        self.phase = Phase::Init;
    }

    /// Consumes one message tick with `nibble` on the registered data path.
    pub fn step(&mut self, config: &CrcConfig, nibble: u8) {
        match self.phase {
            Phase::Init => {
                self.phase = Phase::DataLo;
            }
            Phase::DataLo => {
                self.byte_buffer = nibble & 0xF;
                self.phase = Phase::DataHi;
            }
            Phase::DataHi => {
                self.byte_buffer |= (nibble & 0xF) << 4;
                self.bit_cursor = 0;
                self.phase = Phase::Shifting;
            }
            Phase::Shifting => {
                let bitwidth = config.bitwidth;

                let bit_index = if config.reflect_in {
                    self.bit_cursor
                } else {
                    7 - self.bit_cursor
                };
                let input_bit = (self.byte_buffer >> bit_index) & 1 != 0;

                let feedback = fold::msb(self.crc, bitwidth) != input_bit;
                let taps = config.polynomial & fold::mask(bitwidth);

                self.crc = fold::shift_step(self.crc, bitwidth, taps, feedback);

                self.bit_cursor += 1;
                if self.bit_cursor == 8 {
                    self.phase = Phase::DataLo;
                }
            }
        }
    }

    /// The raw running register.
    pub fn register(&self) -> u64 {
        self.crc
    }

    /// The finalized checksum: the register, bit-reversed if `reflect_out`,
    /// XORed with `xorout`. Pure; message intake may resume afterwards.
    pub fn finalized(&self, config: &CrcConfig) -> u64 {
        let result = if config.reflect_out {
            reflect(self.crc, config.bitwidth)
        } else {
            self.crc
        };

        return (result ^ config.xorout) & fold::mask(config.bitwidth);
    }
}
