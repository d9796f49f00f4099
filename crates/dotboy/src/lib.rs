use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dotboy_common::Palette;
use dotboy_gb::{BootOptions, GameBoy, RunOutcome, CYCLES_PER_FRAME, SCREEN_HEIGHT, SCREEN_WIDTH};
use typed_builder::TypedBuilder;

/// When a headless run ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopMode {
    /// Run a fixed number of frames.
    Frames(u32),
    /// Run until the PPU enters V-Blank once.
    UntilVBlank,
    /// Run until `LD B,B` executes or the cycle budget runs out.
    UntilSoftwareBreakpoint { max_cycles: u64 },
    /// Run until PC reaches one of the addresses or the budget runs out.
    UntilBreakpoint { addresses: Vec<u16>, max_cycles: u64 },
}

#[derive(TypedBuilder, Debug, Clone)]
pub struct RunConfig {
    #[builder(setter(into))]
    pub rom_path: PathBuf,
    /// Final frame is written here. `.pgm` writes grayscale, anything else
    /// binary PPM.
    #[builder(default, setter(strip_option, into))]
    pub output: Option<PathBuf>,
    #[builder(default = StopMode::Frames(60))]
    pub stop: StopMode,
    /// Battery save file, loaded before the run if it exists and written
    /// back afterwards.
    #[builder(default, setter(strip_option, into))]
    pub save_path: Option<PathBuf>,
    #[builder(default = false)]
    pub verify_logo: bool,
    #[builder(default)]
    pub palette: Palette,
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub title: String,
    pub outcome: RunOutcome,
    pub frames: u64,
    pub cycles: u64,
    pub serial: Vec<u8>,
}

/// Default budget for the breakpoint stop modes: one minute of emulated
/// time.
pub const DEFAULT_MAX_CYCLES: u64 = 60 * CYCLES_PER_FRAME as u64 * 60;

pub fn run(config: &RunConfig) -> Result<RunReport> {
    let rom = fs::read(&config.rom_path)
        .with_context(|| format!("failed to read ROM '{}'", config.rom_path.display()))?;
    let options = BootOptions {
        verify_logo: config.verify_logo,
    };
    let mut gb = GameBoy::from_rom(&rom, options)
        .with_context(|| format!("failed to load ROM '{}'", config.rom_path.display()))?;
    let title = gb.header().map(|h| h.title.clone()).unwrap_or_default();
    log::info!("Loaded '{}' from {}", title, config.rom_path.display());

    if let Some(save_path) = &config.save_path {
        load_save(&mut gb, save_path)?;
    }

    let outcome = run_machine(&mut gb, &config.stop);

    // Keep whatever state the run reached, even when the CPU faulted.
    if let Some(save_path) = &config.save_path {
        write_save(&gb, save_path)?;
    }
    if let Some(output) = &config.output {
        write_frame(&gb, &config.palette, output)?;
    }

    let outcome = outcome?;
    log::info!(
        "Run finished: {:?} after {} frames ({} cycles)",
        outcome,
        gb.frame_count(),
        gb.cycles()
    );

    Ok(RunReport {
        title,
        outcome,
        frames: gb.frame_count(),
        cycles: gb.cycles(),
        serial: gb.take_serial_output(),
    })
}

fn run_machine(gb: &mut GameBoy, stop: &StopMode) -> Result<RunOutcome> {
    let outcome = match stop {
        StopMode::Frames(frames) => {
            for _ in 0..*frames {
                gb.step_frame()?;
            }
            RunOutcome::FrameComplete
        }
        StopMode::UntilVBlank => gb.run_until_frame()?,
        StopMode::UntilSoftwareBreakpoint { max_cycles } => {
            gb.run_until_software_breakpoint(*max_cycles)?
        }
        StopMode::UntilBreakpoint {
            addresses,
            max_cycles,
        } => gb.run_until_breakpoint(addresses, *max_cycles)?,
    };
    Ok(outcome)
}

fn load_save(gb: &mut GameBoy, path: &Path) -> Result<()> {
    if !path.exists() {
        log::debug!("No save at {}, starting with fresh RAM", path.display());
        return Ok(());
    }
    let data =
        fs::read(path).with_context(|| format!("failed to read save '{}'", path.display()))?;
    gb.load_save(&data)
        .with_context(|| format!("failed to restore save '{}'", path.display()))?;
    Ok(())
}

fn write_save(gb: &GameBoy, path: &Path) -> Result<()> {
    match gb.save_data() {
        Some(data) => {
            fs::write(path, data)
                .with_context(|| format!("failed to write save '{}'", path.display()))?;
            log::info!("Wrote {} bytes of cartridge RAM to {}", data.len(), path.display());
        }
        None => log::warn!("Cartridge has no battery RAM; not writing {}", path.display()),
    }
    Ok(())
}

fn write_frame(gb: &GameBoy, palette: &Palette, path: &Path) -> Result<()> {
    let grayscale = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pgm"));
    let image = encode_frame(gb.framebuffer(), palette, grayscale);
    fs::write(path, image)
        .with_context(|| format!("failed to write image '{}'", path.display()))?;
    log::info!("Wrote frame to {}", path.display());
    Ok(())
}

/// Encode a frame of shade indices as binary PGM (`P5`) or PPM (`P6`).
pub fn encode_frame(shades: &[u8], palette: &Palette, grayscale: bool) -> Vec<u8> {
    let magic = if grayscale { "P5" } else { "P6" };
    let mut out = format!("{magic}\n{SCREEN_WIDTH} {SCREEN_HEIGHT}\n255\n").into_bytes();
    for &shade in shades {
        let color = palette.color(shade);
        if grayscale {
            out.push(color.luma());
        } else {
            let (r, g, b) = color.rgb();
            out.extend_from_slice(&[r, g, b]);
        }
    }
    out
}

/// Headless Game Boy runner.
#[derive(Parser, Debug)]
#[command(name = "dotboy")]
#[command(about = "Run a Game Boy ROM headless and dump the final frame", long_about = None)]
pub struct Cli {
    /// Path to the ROM image
    pub rom: PathBuf,

    /// Number of frames to run
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Run until the first V-Blank
    #[arg(long)]
    pub until_vblank: bool,

    /// Run until an LD B,B software breakpoint
    #[arg(long = "until-ld-bb")]
    pub until_ld_bb: bool,

    /// Run until PC reaches this address (hex, repeatable)
    #[arg(long = "break", value_name = "ADDR", value_parser = parse_address)]
    pub breakpoints: Vec<u16>,

    /// Cycle budget for the breakpoint modes
    #[arg(long, default_value_t = DEFAULT_MAX_CYCLES)]
    pub max_cycles: u64,

    /// Write the last frame here (.pgm grayscale, anything else .ppm)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Load and store battery RAM in this file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Output palette: gray or green
    #[arg(long, default_value = "gray", value_parser = parse_palette)]
    pub palette: Palette,

    /// Refuse ROMs whose boot logo does not match
    #[arg(long)]
    pub verify_logo: bool,
}

impl Cli {
    /// Resolve the stop flags into a `RunConfig`. A software breakpoint
    /// wins over PC breakpoints, which win over `--until-vblank`.
    pub fn into_config(self) -> RunConfig {
        let stop = if self.until_ld_bb {
            StopMode::UntilSoftwareBreakpoint {
                max_cycles: self.max_cycles,
            }
        } else if !self.breakpoints.is_empty() {
            StopMode::UntilBreakpoint {
                addresses: self.breakpoints,
                max_cycles: self.max_cycles,
            }
        } else if self.until_vblank {
            StopMode::UntilVBlank
        } else {
            StopMode::Frames(self.frames)
        };

        RunConfig {
            rom_path: self.rom,
            output: self.out,
            stop,
            save_path: self.save,
            verify_logo: self.verify_logo,
            palette: self.palette,
        }
    }
}

fn parse_address(text: &str) -> Result<u16, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix('$'))
        .unwrap_or(text);
    u16::from_str_radix(digits, 16).map_err(|err| format!("invalid address '{text}': {err}"))
}

fn parse_palette(name: &str) -> Result<Palette, String> {
    Palette::by_name(name).ok_or_else(|| format!("unknown palette '{name}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotboy_gb::machine::NINTENDO_LOGO;

    fn parse(list: &[&str]) -> Result<RunConfig, clap::Error> {
        let argv = std::iter::once("dotboy").chain(list.iter().copied());
        Cli::try_parse_from(argv).map(Cli::into_config)
    }

    /// 32 KiB battery-backed MBC1 image whose program stores 0x42 to
    /// cartridge RAM, prints "ok" over serial and hits `LD B,B`.
    fn test_rom() -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0100..0x0104].copy_from_slice(&[0x00, 0xC3, 0x50, 0x01]);
        rom[0x0104..0x0134].copy_from_slice(&NINTENDO_LOGO);
        rom[0x0134..0x0138].copy_from_slice(b"TEST");
        rom[0x0147] = 0x03;
        rom[0x0149] = 0x02;
        let program = [
            0x3E, 0x0A, 0xEA, 0x00, 0x00, // RAM enable
            0x3E, 0x42, 0xEA, 0x00, 0xA0, // (0xA000) = 0x42
            0x3E, b'o', 0xE0, 0x01, 0x3E, 0x81, 0xE0, 0x02, // send 'o'
            0x3E, b'k', 0xE0, 0x01, 0x3E, 0x81, 0xE0, 0x02, // send 'k'
            0x40, // LD B,B
            0x18, 0xFE,
        ];
        rom[0x0150..0x0150 + program.len()].copy_from_slice(&program);
        rom
    }

    #[test]
    fn parses_breakpoints_and_outputs() {
        let config = parse(&[
            "game.gb", "--break", "0x0150", "--break", "$4000", "--out", "f.ppm",
        ])
        .unwrap();
        assert_eq!(config.rom_path, PathBuf::from("game.gb"));
        assert_eq!(config.output, Some(PathBuf::from("f.ppm")));
        assert_eq!(
            config.stop,
            StopMode::UntilBreakpoint {
                addresses: vec![0x0150, 0x4000],
                max_cycles: DEFAULT_MAX_CYCLES
            }
        );
    }

    #[test]
    fn defaults_to_sixty_frames() {
        let config = parse(&["game.gb"]).unwrap();
        assert_eq!(config.stop, StopMode::Frames(60));
        assert_eq!(config.palette, Palette::GRAYSCALE);
        assert!(!config.verify_logo);
    }

    #[test]
    fn software_breakpoint_takes_precedence() {
        let config = parse(&[
            "game.gb", "--until-ld-bb", "--break", "150", "--max-cycles", "1000", "--palette",
            "green",
        ])
        .unwrap();
        assert_eq!(config.stop, StopMode::UntilSoftwareBreakpoint { max_cycles: 1000 });
        assert_eq!(config.palette, Palette::DMG_GREEN);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.gb", "b.gb"]).is_err());
        assert!(parse(&["a.gb", "--frames"]).is_err());
        assert!(parse(&["a.gb", "--palette", "sepia"]).is_err());
        assert!(parse(&["a.gb", "--break", "xyz"]).is_err());
        assert!(parse(&["a.gb", "--bogus"]).is_err());
    }

    #[test]
    fn builder_fills_defaults() {
        let config = RunConfig::builder()
            .rom_path("x.gb")
            .output("x.pgm")
            .build();
        assert_eq!(config.stop, StopMode::Frames(60));
        assert_eq!(config.output, Some(PathBuf::from("x.pgm")));
        assert_eq!(config.save_path, None);
    }

    #[test]
    fn encodes_pgm_and_ppm() {
        let shades = vec![3u8; SCREEN_WIDTH * SCREEN_HEIGHT];
        let pgm = encode_frame(&shades, &Palette::GRAYSCALE, true);
        let header = b"P5\n160 144\n255\n";
        assert!(pgm.starts_with(header));
        assert_eq!(pgm.len(), header.len() + SCREEN_WIDTH * SCREEN_HEIGHT);
        assert_eq!(pgm[header.len()], 0);

        let ppm = encode_frame(&shades, &Palette::DMG_GREEN, false);
        assert_eq!(ppm.len(), header.len() + 3 * SCREEN_WIDTH * SCREEN_HEIGHT);
        assert_eq!(&ppm[header.len()..header.len() + 3], &[0x0F, 0x38, 0x0F]);
    }

    #[test]
    fn headless_run_writes_save_image_and_serial() {
        let dir = std::env::temp_dir().join(format!("dotboy-run-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let rom_path = dir.join("test.gb");
        let save_path = dir.join("test.sav");
        let image_path = dir.join("frame.pgm");
        fs::write(&rom_path, test_rom()).unwrap();

        let config = RunConfig::builder()
            .rom_path(&rom_path)
            .output(&image_path)
            .save_path(&save_path)
            .stop(StopMode::Frames(2))
            .verify_logo(true)
            .build();
        let report = run(&config).unwrap();

        assert_eq!(report.title, "TEST");
        assert_eq!(report.frames, 2);
        assert_eq!(report.serial, b"ok".to_vec());
        assert_eq!(fs::read(&save_path).unwrap()[0], 0x42);
        assert!(fs::read(&image_path).unwrap().starts_with(b"P5\n"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
