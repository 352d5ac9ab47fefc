use dmgcore::cartridge;
use dmgcore::joypad::JoypadKey;
use dmgcore::mmunit::Mmunit;
use dmgcore::motherboard::Motherboard;

fn main() {
    env_logger::init();

    let mut rom_path = String::new();
    let mut scale: u32 = 2;
    {
        let mut parser = argparse::ArgumentParser::new();
        parser.set_description("A Game Boy (DMG) core emulator");
        parser.refer(&mut rom_path).add_argument("rom", argparse::Store, "Path to the cartridge ROM file");
        parser.refer(&mut scale).add_option(
            &["-x", "--scale-factor"],
            argparse::Store,
            "Window scale factor (1, 2, 4 or 8)",
        );
        if let Err(code) = parser.parse_args() {
            std::process::exit(code);
        }
    }

    let cartridge = match cartridge::power_up(&rom_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    log::info!("loaded cartridge: {}", cartridge.title());

    let mmu = Mmunit::power_up(cartridge);
    let mut board = Motherboard::power_up(mmu);

    #[cfg(feature = "gui")]
    {
        run_gui(&mut board, scale);
    }
    #[cfg(not(feature = "gui"))]
    {
        let _ = scale;
        run_headless_loop(&mut board);
    }
}

#[cfg(feature = "gui")]
fn run_gui(board: &mut Motherboard, scale: u32) {
    use dmgcore::gpu::{SCREEN_H, SCREEN_W};
    use minifb::{Key, Window, WindowOptions};

    let window_scale = match scale {
        1 => minifb::Scale::X1,
        4 => minifb::Scale::X4,
        8 => minifb::Scale::X8,
        _ => minifb::Scale::X2,
    };

    let mut window = Window::new(
        "dmgcore",
        SCREEN_W,
        SCREEN_H,
        WindowOptions { scale: window_scale, ..WindowOptions::default() },
    )
    .unwrap_or_else(|e| {
        log::error!("failed to open window: {}", e);
        std::process::exit(1);
    });

    let mut clock = dmgcore::clock::Clock::power_up(60);
    let mut buffer = vec![0u32; SCREEN_W * SCREEN_H];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        board.next();
        if board.take_frame() {
            for y in 0..SCREEN_H {
                for x in 0..SCREEN_W {
                    let shade = board.mmu.gpu.data[y][x];
                    buffer[y * SCREEN_W + x] = u32::from_be_bytes([0, shade, shade, shade]);
                }
            }
            window.update_with_buffer(&buffer, SCREEN_W, SCREEN_H).unwrap();
            handle_keys(&window, board);
            clock.tick();
        }
    }
}

#[cfg(feature = "gui")]
fn handle_keys(window: &minifb::Window, board: &mut Motherboard) {
    use minifb::Key;

    let mapping = [
        (Key::Right, JoypadKey::Right),
        (Key::Left, JoypadKey::Left),
        (Key::Up, JoypadKey::Up),
        (Key::Down, JoypadKey::Down),
        (Key::Z, JoypadKey::A),
        (Key::X, JoypadKey::B),
        (Key::Space, JoypadKey::Select),
        (Key::Enter, JoypadKey::Start),
    ];
    for (host_key, gb_key) in mapping {
        if window.is_key_down(host_key) {
            board.mmu.joypad.keydown(gb_key);
        } else {
            board.mmu.joypad.keyup(gb_key);
        }
    }
}

#[cfg(not(feature = "gui"))]
fn run_headless_loop(board: &mut Motherboard) {
    loop {
        board.next();
    }
}
