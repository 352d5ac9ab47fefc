use crate::cartridge::Cartridge;
use crate::gpu::Gpu;
use crate::intf::Intf;
use crate::joypad::Joypad;
use crate::memory::Memory;
use crate::serial::Serial;
use crate::timer::Timer;
use std::cell::RefCell;
use std::rc::Rc;

// Routes the full 64 KiB address space to the component that owns each region. Grounded on the
// teacher's `Mmunit`, trimmed of every GBC-only region (speed switch, HDMA, CGB palette RAM, WRAM
// banking) since this crate targets DMG only.
pub struct Mmunit {
    pub cartridge: Box<dyn Cartridge>,
    pub gpu: Gpu,
    pub joypad: Joypad,
    pub serial: Serial,
    pub timer: Timer,
    pub intf: Rc<RefCell<Intf>>,
    inte: u8,
    wram: [u8; 0x2000],
    hram: [u8; 0x7f],
    // The documented-unusable 0xFEA0-0xFEFF window. Real hardware's behavior here is quirky and
    // out of scope; this crate treats it as plain storage, pre-filled with 0xFF per spec.md 4.3.
    unusable: [u8; 0x60],
}

impl Mmunit {
    pub fn power_up(cartridge: Box<dyn Cartridge>) -> Self {
        let intf = Rc::new(RefCell::new(Intf::power_up()));
        Self {
            cartridge,
            gpu: Gpu::power_up(intf.clone()),
            joypad: Joypad::power_up(intf.clone()),
            serial: Serial::power_up(),
            timer: Timer::power_up(intf.clone()),
            intf,
            inte: 0x00,
            wram: [0; 0x2000],
            hram: [0; 0x7f],
            unusable: [0xff; 0x60],
        }
    }

    // Advances every component owned by the MMU except the CPU itself, by the cycle count the
    // emulator loop fed to `Cpu::next`.
    pub fn next(&mut self, cycles: u32) {
        self.timer.next(cycles);
        self.gpu.next(cycles);
    }

    fn run_dma(&mut self, v: u8) {
        let base = u16::from(v) << 8;
        for i in 0..0xa0u16 {
            let b = self.get(base + i);
            self.set(0xfe00 + i, b);
        }
    }
}

impl Memory for Mmunit {
    fn get(&self, a: u16) -> u8 {
        match a {
            0x0000..=0x7fff => self.cartridge.get(a),
            0x8000..=0x9fff => self.gpu.get(a),
            0xa000..=0xbfff => self.cartridge.get(a),
            0xc000..=0xdfff => self.wram[(a - 0xc000) as usize],
            0xe000..=0xfdff => self.wram[(a - 0xe000) as usize],
            0xfe00..=0xfe9f => self.gpu.get(a),
            0xfea0..=0xfeff => self.unusable[(a - 0xfea0) as usize],
            0xff00 => self.joypad.get(a),
            0xff01..=0xff02 => self.serial.get(a),
            0xff04..=0xff07 => self.timer.get(a),
            0xff0f => self.intf.borrow().data,
            0xff40..=0xff45 | 0xff47..=0xff4b => self.gpu.get(a),
            0xff46 => 0x00,
            0xff80..=0xfffe => self.hram[(a - 0xff80) as usize],
            0xffff => self.inte,
            _ => 0xff,
        }
    }

    fn set(&mut self, a: u16, v: u8) {
        match a {
            0x0000..=0x7fff => self.cartridge.set(a, v),
            0x8000..=0x9fff => self.gpu.set(a, v),
            0xa000..=0xbfff => self.cartridge.set(a, v),
            0xc000..=0xdfff => self.wram[(a - 0xc000) as usize] = v,
            0xe000..=0xfdff => self.wram[(a - 0xe000) as usize] = v,
            0xfe00..=0xfe9f => self.gpu.set(a, v),
            0xfea0..=0xfeff => self.unusable[(a - 0xfea0) as usize] = v,
            0xff00 => self.joypad.set(a, v),
            0xff01..=0xff02 => self.serial.set(a, v),
            0xff04..=0xff07 => self.timer.set(a, v),
            0xff0f => self.intf.borrow_mut().data = v,
            0xff46 => self.run_dma(v),
            0xff40..=0xff45 | 0xff47..=0xff4b => self.gpu.set(a, v),
            0xff80..=0xfffe => self.hram[(a - 0xff80) as usize] = v,
            0xffff => self.inte = v,
            _ => {}
        }
    }
}
