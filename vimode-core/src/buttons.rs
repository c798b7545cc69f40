//! Button masks delivered once per tick by the input layer

use bitflags::bitflags;

bitflags! {
    /// Buttons of the directional remote
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u32 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const DOWN = 1 << 2;
        const UP = 1 << 3;
        const TWO = 1 << 8;
        const ONE = 1 << 9;
        const A = 1 << 11;
        const HOME = 1 << 15;
    }
}

/// Registry navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Index offset applied to the active control
    pub fn delta(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Input state for a single tick
///
/// `pressed` is edge-triggered (set only on the tick a button went down),
/// `held` is level-triggered (set on every tick the button stays down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub pressed: Buttons,
    pub held: Buttons,
}

impl InputSnapshot {
    /// A tick with nothing pressed or held
    pub const EMPTY: Self = Self {
        pressed: Buttons::empty(),
        held: Buttons::empty(),
    };

    pub fn new(pressed: Buttons, held: Buttons) -> Self {
        Self { pressed, held }
    }

    /// Sign of a fresh LEFT/RIGHT edge, RIGHT winning when both are set
    pub fn pressed_step(&self) -> i32 {
        if self.pressed.contains(Buttons::RIGHT) {
            1
        } else if self.pressed.contains(Buttons::LEFT) {
            -1
        } else {
            0
        }
    }

    /// Sign of a held LEFT/RIGHT direction, RIGHT winning when both are set
    pub fn held_step(&self) -> i32 {
        if self.held.contains(Buttons::RIGHT) {
            1
        } else if self.held.contains(Buttons::LEFT) {
            -1
        } else {
            0
        }
    }
}
