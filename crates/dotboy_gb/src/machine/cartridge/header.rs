use crate::GbError;

/// Size of one switchable ROM bank.
pub(super) const ROM_BANK_SIZE: usize = 0x4000;
/// Size of one external RAM bank.
pub(super) const RAM_BANK_SIZE: usize = 0x2000;

/// Reference boot logo stored at 0x0104..=0x0133.
pub const NINTENDO_LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

const LOGO_START: usize = 0x0104;
const TITLE_START: usize = 0x0134;
const TITLE_END: usize = 0x0143;
const CARTRIDGE_TYPE: usize = 0x0147;
const ROM_SIZE: usize = 0x0148;
const RAM_SIZE: usize = 0x0149;
const HEADER_CHECKSUM: usize = 0x014D;
const HEADER_END: usize = 0x0150;

/// Memory bank controller family selected by the cartridge type byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapperKind {
    RomOnly,
    Mbc1,
    Mbc2,
    Mbc3,
}

/// Decoded cartridge header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartridgeHeader {
    pub title: String,
    pub cartridge_type: u8,
    pub mapper: MapperKind,
    pub rom_banks: usize,
    /// External RAM size in bytes. MBC2's built-in 512x4-bit RAM is
    /// reported here as 512.
    pub ram_size: usize,
    pub has_battery: bool,
    pub has_rtc: bool,
    pub header_checksum_ok: bool,
}

impl CartridgeHeader {
    pub fn parse(rom: &[u8]) -> Result<Self, GbError> {
        if rom.len() < HEADER_END {
            return Err(GbError::header(format!(
                "image is {} bytes, shorter than the 0x{HEADER_END:X}-byte header",
                rom.len()
            )));
        }

        let cartridge_type = rom[CARTRIDGE_TYPE];
        // (mapper, has_ram, has_battery, has_rtc)
        let (mapper, has_ram, has_battery, has_rtc) = match cartridge_type {
            0x00 => (MapperKind::RomOnly, false, false, false),
            0x08 => (MapperKind::RomOnly, true, false, false),
            0x09 => (MapperKind::RomOnly, true, true, false),
            0x01 => (MapperKind::Mbc1, false, false, false),
            0x02 => (MapperKind::Mbc1, true, false, false),
            0x03 => (MapperKind::Mbc1, true, true, false),
            0x05 => (MapperKind::Mbc2, true, false, false),
            0x06 => (MapperKind::Mbc2, true, true, false),
            0x0F => (MapperKind::Mbc3, false, true, true),
            0x10 => (MapperKind::Mbc3, true, true, true),
            0x11 => (MapperKind::Mbc3, false, false, false),
            0x12 => (MapperKind::Mbc3, true, false, false),
            0x13 => (MapperKind::Mbc3, true, true, false),
            other => {
                return Err(GbError::header(format!(
                    "unsupported cartridge type 0x{other:02X}"
                )))
            }
        };

        let rom_code = rom[ROM_SIZE];
        if rom_code > 0x08 {
            return Err(GbError::header(format!(
                "unsupported ROM size code 0x{rom_code:02X}"
            )));
        }
        let rom_banks = 2usize << rom_code;

        let ram_code = rom[RAM_SIZE];
        let declared_ram = match ram_code {
            0x00 => 0,
            0x01 => 0x800,
            0x02 => RAM_BANK_SIZE,
            0x03 => 4 * RAM_BANK_SIZE,
            0x04 => 16 * RAM_BANK_SIZE,
            0x05 => 8 * RAM_BANK_SIZE,
            other => {
                return Err(GbError::header(format!(
                    "unsupported RAM size code 0x{other:02X}"
                )))
            }
        };
        let ram_size = match mapper {
            MapperKind::Mbc2 => 512,
            _ if !has_ram => 0,
            // ROM+RAM boards often leave the size byte at 0.
            MapperKind::RomOnly if declared_ram == 0 => RAM_BANK_SIZE,
            _ => declared_ram,
        };

        let title = rom[TITLE_START..=TITLE_END]
            .iter()
            .take_while(|&&b| b != 0)
            .filter(|b| b.is_ascii_graphic() || **b == b' ')
            .map(|&b| b as char)
            .collect::<String>()
            .trim_end()
            .to_string();

        Ok(Self {
            title,
            cartridge_type,
            mapper,
            rom_banks,
            ram_size,
            has_battery,
            has_rtc,
            header_checksum_ok: header_checksum(rom) == rom[HEADER_CHECKSUM],
        })
    }
}

/// True when 0x0104..=0x0133 holds the reference logo.
pub fn logo_matches(rom: &[u8]) -> bool {
    rom.get(LOGO_START..LOGO_START + NINTENDO_LOGO.len()) == Some(&NINTENDO_LOGO[..])
}

fn header_checksum(rom: &[u8]) -> u8 {
    rom[TITLE_START..HEADER_CHECKSUM]
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_sub(b).wrapping_sub(1))
}
