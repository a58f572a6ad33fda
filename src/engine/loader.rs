
use log::debug;

use crate::config::CrcConfig;
use crate::fold::mask;

/// The visible phase of the setup sequencer. External code may poll this to
/// follow a configuration load; the tick at which each transition becomes
/// visible is part of the engine's conformance surface.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum SetupPhase {
    /// Idle. Entered whenever the latched command is not SETUP.
    Start,
    /// Capturing the low four bits of `bitwidth - 1`.
    ConfigLo,
    /// Capturing the high two bits of `bitwidth - 1` plus the two
    /// reflection flags.
    ConfigHi,
    /// Capturing the polynomial, one nibble per tick.
    Poly,
    /// Capturing the initial value.
    Init,
    /// Capturing the XOR-out mask.
    Xor,
    /// Configuration latched; holds here under continued SETUP.
    Done,
}

/// The setup FSM: consumes the fixed-order setup nibble stream one nibble
/// per tick and latches a [`CrcConfig`] on completion.
pub struct Loader {
    phase: SetupPhase,
    nibble_index: usize,
    bitwidth_minus: u32,
    reflect_in: bool,
    reflect_out: bool,
    polynomial: u64,
    init: u64,
    xorout: u64,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            phase: SetupPhase::Start,
            nibble_index: 0,
            bitwidth_minus: 0,
            reflect_in: false,
            reflect_out: false,
            polynomial: 0,
            init: 0,
            xorout: 0,
        }
    }

    pub fn phase(&self) -> SetupPhase {
        self.phase
    }

    /// The in-progress register width, observable mid-setup.
    pub fn bitwidth(&self) -> u32 {
        self.bitwidth_minus + 1
    }

    fn field_nibbles(&self) -> usize {
        (self.bitwidth_minus as usize) / 4 + 1
    }

    /// Returns to `Start`. Called on any tick whose latched command is not
    /// SETUP; already-latched configuration registers are left as they are.
    pub fn abort(&mut self) {
        self.phase = SetupPhase::Start;
        self.nibble_index = 0;
    }

    /// Consumes one setup tick. Returns the completed configuration on the
    /// single tick that enters `Done`.
    ///
    /// `Start` arms the sequencer without consuming a nibble (the first
    /// nibble arrives through the registered data path one tick after the
    /// command does), and `Xor` waits one settling tick after its final
    /// nibble before latching. Both delays are observable and relied upon
    /// by drivers that count cycles.
    pub fn step(&mut self, nibble: u8) -> Option<CrcConfig> {
        match self.phase {
            SetupPhase::Start => {
                self.bitwidth_minus = 0;
                self.reflect_in = false;
                self.reflect_out = false;
                self.polynomial = 0;
                self.init = 0;
                self.xorout = 0;
                self.nibble_index = 0;

                self.phase = SetupPhase::ConfigLo;
            }
            SetupPhase::ConfigLo => {
                self.bitwidth_minus = (nibble & 0xF) as u32;

                self.phase = SetupPhase::ConfigHi;
            }
            SetupPhase::ConfigHi => {
                self.bitwidth_minus |= (((nibble >> 2) & 0x3) as u32) << 4;
                self.reflect_out = nibble & 0x2 != 0;
                self.reflect_in = nibble & 0x1 != 0;
                self.nibble_index = 0;

                self.phase = SetupPhase::Poly;
            }
            SetupPhase::Poly => {
                self.polynomial |= ((nibble & 0xF) as u64) << (4 * self.nibble_index);
                self.nibble_index += 1;

                if self.nibble_index == self.field_nibbles() {
                    self.nibble_index = 0;
                    self.phase = SetupPhase::Init;
                }
            }
            SetupPhase::Init => {
                self.init |= ((nibble & 0xF) as u64) << (4 * self.nibble_index);
                self.nibble_index += 1;

                if self.nibble_index == self.field_nibbles() {
                    self.nibble_index = 0;
                    self.phase = SetupPhase::Xor;
                }
            }
            SetupPhase::Xor => {
                if self.nibble_index == self.field_nibbles() {
                    self.phase = SetupPhase::Done;

                    let config = self.latch();
                    debug!("setup complete: {:?}", config);

                    return Some(config);
                }

                self.xorout |= ((nibble & 0xF) as u64) << (4 * self.nibble_index);
                self.nibble_index += 1;
            }
            SetupPhase::Done => {}
        }

        return None;
    }

    fn latch(&self) -> CrcConfig {
        let bitwidth = self.bitwidth_minus + 1;
        let m = mask(bitwidth);

        CrcConfig {
            bitwidth,
            polynomial: self.polynomial & m,
            init: self.init & m,
            xorout: self.xorout & m,
            reflect_in: self.reflect_in,
            reflect_out: self.reflect_out,
        }
    }
}
