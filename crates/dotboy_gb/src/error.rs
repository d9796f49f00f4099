use thiserror::Error;

/// Fatal conditions raised by the emulation core.
///
/// Bank selections past the end of a cartridge and accesses to unmapped
/// addresses are not errors: the mapper wraps the bank index and the bus
/// reads 0xFF or drops the write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GbError {
    #[error("illegal opcode 0x{opcode:02X} at 0x{address:04X}")]
    IllegalOpcode { opcode: u8, address: u16 },

    #[error("invalid cartridge header: {reason}")]
    InvalidCartridgeHeader { reason: String },

    #[error("cartridge boot logo does not match the reference logo")]
    BootLogoMismatch,

    #[error("cartridge has no battery-backed RAM")]
    SaveNotSupported,

    #[error("save data is {len} bytes but the cartridge only holds {max}")]
    SaveTooLarge { len: usize, max: usize },
}

impl GbError {
    pub(crate) fn header(reason: impl Into<String>) -> Self {
        GbError::InvalidCartridgeHeader {
            reason: reason.into(),
        }
    }
}
