
mod accumulator;
mod loader;

pub use loader::SetupPhase;

use log::trace;

use accumulator::Accumulator;
use loader::Loader;

use crate::config::CrcConfig;

/// A command code driven on the control bus, one per tick.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum Command {
    /// Reloads the accumulator from the configured `init` and parks the
    /// setup sequencer.
    Reset = 0,
    /// Routes data nibbles to the setup sequencer.
    Setup = 1,
    /// Routes data nibble pairs to the accumulator as message bytes.
    Message = 2,
    /// Freezes message intake and exposes the finalized result one byte at
    /// a time, selected by the data input.
    Final = 3,
}

/// The top-level engine: a clock-accurate command dispatcher around the
/// setup sequencer and the bit-serial accumulator.
///
/// [`step`](CrcEngine::step) advances the engine by exactly one tick.
/// Behavior is a deterministic function of the driven tick sequence; both
/// the command and the data input pass through one register stage, so the
/// internal machines act on the values presented the *previous* tick, and
/// [`current_command`](CrcEngine::current_command) shows the command they
/// acted on. The tick at which each phase change becomes visible is part of
/// the bus contract, and the register stage is held as explicit state.
///
/// The multi-tick drivers ([`load_config`](CrcEngine::load_config),
/// [`restart`](CrcEngine::restart), [`write_message`](CrcEngine::write_message),
/// [`read_result`](CrcEngine::read_result)) issue the same tick sequences a
/// hardware client would, settling cycles included.
pub struct CrcEngine {
    command_reg: Command,
    current_command: Command,
    data_reg: u8,
    in_setup: bool,
    output: u8,
    loader: Loader,
    accumulator: Accumulator,
    config: CrcConfig,
}

impl CrcEngine {
    /// Creates an engine in its power-on state: everything idle, the
    /// default degenerate configuration held.
    pub fn new() -> Self {
        let config = CrcConfig::default();

        let mut accumulator = Accumulator::new();
        accumulator.reset(&config);

        Self {
            command_reg: Command::Reset,
            current_command: Command::Reset,
            data_reg: 0,
            in_setup: false,
            output: 0,
            loader: Loader::new(),
            accumulator,
            config,
        }
    }

    /// Advances one tick with `command` and `data_in` on the bus.
    pub fn step(&mut self, command: Command, data_in: u8) {
        let active_command = self.command_reg;
        let active_data = self.data_reg & 0xF;

        match active_command {
            Command::Reset => {
                self.accumulator.reset(&self.config);
                self.loader.abort();
                self.output = 0;
            }
            Command::Setup => {
                if let Some(config) = self.loader.step(active_data) {
                    self.config = config;
                }
                self.output = 0x01;
            }
            Command::Message => {
                self.loader.abort();
                self.accumulator.step(&self.config, active_data);
                self.output = 0;
            }
            Command::Final => {
                self.loader.abort();

                // Indices past the register width select zero bytes
                let result = self.accumulator.finalized(&self.config);
                self.output = result.checked_shr(8 * active_data as u32).unwrap_or(0) as u8;
            }
        }

        if self.current_command != active_command {
            trace!("command: {:?}", active_command);
        }

        self.in_setup = active_command == Command::Setup;
        self.current_command = active_command;
        self.command_reg = command;
        self.data_reg = data_in;
    }

    /// Synchronous hard reset: clears the dispatcher, sequencer, and
    /// accumulator state, and restarts the computation under the held
    /// configuration. The configuration itself survives.
    pub fn hard_reset(&mut self) {
        self.command_reg = Command::Reset;
        self.current_command = Command::Reset;
        self.data_reg = 0;
        self.in_setup = false;
        self.output = 0;
        self.loader.abort();
        self.accumulator.reset(&self.config);
    }

    /// The 8-bit output line. During FINAL this presents the result byte
    /// selected two ticks earlier; bit 0 doubles as the setup status.
    pub fn output(&self) -> u8 {
        self.output
    }

    /// The setup status bit: asserted from the first SETUP tick through the
    /// hold phase.
    pub fn in_setup(&self) -> bool {
        self.in_setup
    }

    /// The registered view of the command input, one tick behind the raw
    /// bus.
    pub fn current_command(&self) -> Command {
        self.current_command
    }

    /// The setup sequencer's visible phase.
    pub fn setup_phase(&self) -> SetupPhase {
        self.loader.phase()
    }

    /// The currently held configuration. Survives RESET and
    /// [`hard_reset`](CrcEngine::hard_reset); replaced only by a completed
    /// setup sequence.
    pub fn config(&self) -> &CrcConfig {
        &self.config
    }

    /// Streams `config` over the bus as a full setup sequence and holds
    /// SETUP through the settling ticks, leaving the sequencer parked at
    /// [`SetupPhase::Done`] with the configuration latched.
    pub fn load_config(&mut self, config: &CrcConfig) {
        self.step(Command::Setup, 0);

        for nibble in config.setup_nibbles() {
            self.step(Command::Setup, nibble);
        }

        // Pipeline sync plus the sequencer's settling tick
        self.step(Command::Setup, 0);
        self.step(Command::Setup, 0);

        debug_assert_eq!(self.setup_phase(), SetupPhase::Done);
    }

    /// Drives RESET long enough for the registered command to land,
    /// reloading the accumulator from the held configuration's `init`.
    pub fn restart(&mut self) {
        self.step(Command::Reset, 0);
        self.step(Command::Reset, 0);
    }

    /// Streams message bytes as nibble pairs, low nibble first, with the
    /// eight shift ticks each byte requires. May be called repeatedly to
    /// stream a message in chunks; once FINAL has been driven, a
    /// [`restart`](CrcEngine::restart) is required before the next message.
    pub fn write_message(&mut self, data: &[u8]) {
        if self.command_reg != Command::Message {
            self.step(Command::Message, 0);
        }

        for &byte in data.iter() {
            self.step(Command::Message, byte & 0xF);
            self.step(Command::Message, byte >> 4);

            for _ in 0..8 {
                self.step(Command::Message, 0);
            }
        }
    }

    /// Reads the finalized checksum back over the byte-wide output,
    /// presenting each byte index for the two ticks it takes to settle.
    /// The first FINAL tick also carries the last byte's final shift.
    pub fn read_result(&mut self) -> u64 {
        let result_bytes = (self.config.bitwidth as usize + 7) / 8;

        let mut result = 0;

        for index in 0..result_bytes {
            self.step(Command::Final, index as u8);
            self.step(Command::Final, index as u8);

            result |= (self.output as u64) << (8 * index);
        }

        return result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::golden::golden_crc;
    use crate::table;

    #[test]
    fn power_up() {
        let mut engine = CrcEngine::new();

        engine.step(Command::Reset, 0);
        engine.step(Command::Reset, 0);

        assert_eq!(engine.output(), 0);
        assert_eq!(engine.setup_phase(), SetupPhase::Start);
        assert!(!engine.in_setup());
    }

    #[test]
    fn end_to_end_crc8() {
        let entry = table::find("CRC-8").unwrap();

        let mut engine = CrcEngine::new();
        engine.load_config(&entry.config());
        engine.restart();
        engine.write_message(b"123456789");

        assert_eq!(engine.read_result(), entry.check);
    }

    #[test]
    fn status_bit_during_setup() {
        let config = table::find("CRC-16/XMODEM").unwrap().config();
        let nibbles = config.setup_nibbles();

        let mut engine = CrcEngine::new();

        engine.step(Command::Setup, 0);
        assert!(!engine.in_setup());

        // Asserted from the first nibble tick onward
        engine.step(Command::Setup, nibbles[0]);
        assert!(engine.in_setup());
        assert_eq!(engine.output() & 0x1, 0x1);

        for &nibble in &nibbles[1..] {
            engine.step(Command::Setup, nibble);
            assert!(engine.in_setup());
        }
    }

    #[test]
    fn chunked_message() {
        // A message streamed across several MESSAGE sequences folds the
        // same as one continuous stream
        let config = table::find("CRC-32").unwrap().config();

        let mut engine = CrcEngine::new();
        engine.load_config(&config);
        engine.restart();

        engine.write_message(b"1234");
        engine.write_message(b"5");
        engine.write_message(b"6789");

        assert_eq!(engine.read_result(), golden_crc(&config, b"123456789"));
    }
}
