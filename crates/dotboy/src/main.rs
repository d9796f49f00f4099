use clap::Parser;

fn main() {
    env_logger::init();

    let config = dotboy::Cli::parse().into_config();
    log::info!("Playing ROM path: '{}'", config.rom_path.display());

    match dotboy::run(&config) {
        Ok(report) => {
            if !report.serial.is_empty() {
                println!("{}", String::from_utf8_lossy(&report.serial));
            }
            log::info!("{:?} in {} frames", report.outcome, report.frames);
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
