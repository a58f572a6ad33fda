
use crate::config::CrcConfig;
use crate::fold;
use crate::reflect::reflect;

/// Computes the CRC of `data` under `config`, one bit at a time.
///
/// This is the reference the clocked engine is validated against: the fold
/// applied here per message bit is the same fold the accumulator applies per
/// shift tick, so the two must agree for every configuration and input. It
/// also stands on its own as a plain software CRC routine.
pub fn golden_crc(config: &CrcConfig, data: &[u8]) -> u64 {
    let bitwidth = config.bitwidth;
    let m = fold::mask(bitwidth);

    let mut crc = config.init & m;

    for &byte in data.iter() {
        for cursor in 0..8 {
            let bit_index = if config.reflect_in { cursor } else { 7 - cursor };
            let input_bit = (byte >> bit_index) & 1 != 0;

            let feedback = fold::msb(crc, bitwidth) != input_bit;
            crc = fold::shift_step(crc, bitwidth, config.polynomial & m, feedback);
        }
    }

    if config.reflect_out {
        crc = reflect(crc, bitwidth);
    }

    return (crc ^ config.xorout) & m;
}
