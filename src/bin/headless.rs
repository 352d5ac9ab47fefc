// Test-harness binary: run a ROM for a fixed instruction count and compare the serial output
// (FF02 == 0x81 observations) against an expected string. Exits 0 on match, 1 with a diff
// otherwise. Grounded on the original source's `Emulator::execute_instructions`/`get_serial_link`
// and the pack's blargg-style serial test harnesses.
use dmgcore::cartridge;
use dmgcore::mmunit::Mmunit;
use dmgcore::motherboard::Motherboard;

fn main() {
    env_logger::init();

    let mut rom_path = String::new();
    let mut instruction_count: u64 = 0;
    let mut expected_serial_output = String::new();
    {
        let mut parser = argparse::ArgumentParser::new();
        parser.set_description("Run a ROM headlessly and compare its serial output");
        parser.refer(&mut rom_path).add_argument("rom_path", argparse::Store, "Path to the cartridge ROM file");
        parser.refer(&mut instruction_count).add_argument(
            "instruction_count",
            argparse::Store,
            "Number of steps to execute",
        );
        parser.refer(&mut expected_serial_output).add_argument(
            "expected_serial_output",
            argparse::Store,
            "Expected serial (FF01/FF02) output",
        );
        if let Err(code) = parser.parse_args() {
            std::process::exit(code);
        }
    }

    let cartridge = match cartridge::power_up(&rom_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mmu = Mmunit::power_up(cartridge);
    let mut board = Motherboard::power_up(mmu);
    for _ in 0..instruction_count {
        board.next();
    }

    if board.serial_link == expected_serial_output {
        std::process::exit(0);
    }
    println!("--- expected ---\n{}", expected_serial_output);
    println!("--- actual ---\n{}", board.serial_link);
    std::process::exit(1);
}
