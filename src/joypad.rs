use crate::intf::{Flag, Intf};
use crate::memory::Memory;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Eq, PartialEq)]
pub enum JoypadKey {
    Right = 0b0000_0001,
    Left = 0b0000_0010,
    Up = 0b0000_0100,
    Down = 0b0000_1000,
    A = 0b0001_0000,
    B = 0b0010_0000,
    Select = 0b0100_0000,
    Start = 0b1000_0000,
}

// `matrix` holds one bit per key, 1 = released, 0 = pressed (active-low, matching hardware).
// `select` is the two mode bits software writes to 0xff00: bit 4 selects the direction half,
// bit 5 the action half.
pub struct Joypad {
    intf: Rc<RefCell<Intf>>,
    matrix: u8,
    select: u8,
}

impl Joypad {
    pub fn power_up(intf: Rc<RefCell<Intf>>) -> Self {
        Self { intf, matrix: 0xff, select: 0x00 }
    }

    pub fn keydown(&mut self, key: JoypadKey) {
        self.matrix &= !(key as u8);
        self.intf.borrow_mut().hi(Flag::Joypad);
    }

    pub fn keyup(&mut self, key: JoypadKey) {
        self.matrix |= key as u8;
    }
}

impl Memory for Joypad {
    fn get(&self, a: u16) -> u8 {
        assert_eq!(a, 0xff00);
        if self.select & 0b0001_0000 == 0x00 {
            self.select | (self.matrix & 0x0f)
        } else if self.select & 0b0010_0000 == 0x00 {
            self.select | (self.matrix >> 4)
        } else {
            self.select
        }
    }

    fn set(&mut self, a: u16, v: u8) {
        assert_eq!(a, 0xff00);
        self.select = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_joypad() -> Joypad {
        Joypad::power_up(Rc::new(RefCell::new(Intf::power_up())))
    }

    #[test]
    fn keydown_clears_bit_and_raises_interrupt() {
        let intf = Rc::new(RefCell::new(Intf::power_up()));
        let mut j = Joypad::power_up(intf.clone());
        j.keydown(JoypadKey::A);
        j.set(0xff00, 0b0010_0000); // select action half
        assert_eq!(j.get(0xff00) & 0x0f, 0b1110);
        assert_eq!(intf.borrow().data & 0x10, 0x10);
    }

    #[test]
    fn keyup_restores_bit() {
        let mut j = new_joypad();
        j.keydown(JoypadKey::Start);
        j.keyup(JoypadKey::Start);
        j.set(0xff00, 0b0010_0000);
        assert_eq!(j.get(0xff00) & 0x0f, 0x0f);
    }

    #[test]
    fn both_halves_selected_returns_select_bits_only() {
        let mut j = new_joypad();
        j.set(0xff00, 0b0011_0000);
        assert_eq!(j.get(0xff00), 0b0011_0000);
    }
}
