//! Editable field descriptors
//!
//! A [`Control`] binds a screen anchor and label to one field of a settings
//! record `R`, plus the behaviour used to format and change that field. The
//! behaviour is a closed set of variants (see [`ControlKind`]) so the
//! registry can drive every row through the same `format`/`change` pair.

use std::fmt;
use std::time::Instant;

use crate::accel::RepeatState;
use crate::buttons::InputSnapshot;
use crate::label::LabelTable;

/// Typed handle to a field of `R`
///
/// Built from two non-capturing closures, e.g.
/// `Accessor::new(|m| &m.fb_width, |m| &mut m.fb_width)`.
pub struct Accessor<R, T> {
    get: fn(&R) -> &T,
    get_mut: fn(&mut R) -> &mut T,
}

impl<R, T> Accessor<R, T> {
    pub const fn new(get: fn(&R) -> &T, get_mut: fn(&mut R) -> &mut T) -> Self {
        Self { get, get_mut }
    }

    pub fn get<'a>(&self, record: &'a R) -> &'a T {
        (self.get)(record)
    }

    pub fn get_mut<'a>(&self, record: &'a mut R) -> &'a mut T {
        (self.get_mut)(record)
    }
}

impl<R, T> Clone for Accessor<R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, T> Copy for Accessor<R, T> {}

impl<R, T> fmt::Debug for Accessor<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Accessor")
    }
}

/// Integer field adjusted with repeat acceleration
#[derive(Debug, Clone, Copy)]
pub enum NumericField<R> {
    Unsigned(Accessor<R, u16>),
    Signed(Accessor<R, i16>),
}

impl<R> NumericField<R> {
    /// Current value reinterpreted as a signed 16-bit number
    fn signed_value(&self, record: &R) -> i16 {
        match self {
            NumericField::Unsigned(field) => *field.get(record) as i16,
            NumericField::Signed(field) => *field.get(record),
        }
    }

    /// Add `delta`, wrapping at the field width
    fn add(&self, record: &mut R, delta: i32) {
        match self {
            NumericField::Unsigned(field) => {
                let value = field.get_mut(record);
                *value = value.wrapping_add(delta as u16);
            }
            NumericField::Signed(field) => {
                let value = field.get_mut(record);
                *value = value.wrapping_add(delta as i16);
            }
        }
    }
}

/// How a control formats and changes its field
pub enum ControlKind<R: 'static> {
    /// Integer stepped by LEFT/RIGHT, accelerating while held
    Numeric {
        field: NumericField<R>,
        repeat: Option<RepeatState>,
    },
    /// Scalar stepped through a label table on press edges only
    Enumerated {
        field: Accessor<R, u32>,
        table: &'static LabelTable<u32>,
    },
    /// Whole record replaced by the neighbouring table entry
    Structured { table: &'static LabelTable<R> },
    /// Read-only row
    Info { format: fn(&R) -> String },
}

impl<R: 'static> fmt::Debug for ControlKind<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::Numeric { repeat, .. } => f
                .debug_struct("Numeric")
                .field("repeat", repeat)
                .finish_non_exhaustive(),
            ControlKind::Enumerated { table, .. } => f
                .debug_struct("Enumerated")
                .field("entries", &table.len())
                .finish_non_exhaustive(),
            ControlKind::Structured { table } => f
                .debug_struct("Structured")
                .field("entries", &table.len())
                .finish(),
            ControlKind::Info { .. } => f.write_str("Info"),
        }
    }
}

/// One row of the editor
#[derive(Debug)]
pub struct Control<R: 'static> {
    position: (i32, i32),
    label: Option<&'static str>,
    kind: ControlKind<R>,
}

impl<R: Clone + PartialEq + 'static> Control<R> {
    pub fn new(position: (i32, i32), label: Option<&'static str>, kind: ControlKind<R>) -> Self {
        Self {
            position,
            label,
            kind,
        }
    }

    pub fn numeric(position: (i32, i32), label: &'static str, field: NumericField<R>) -> Self {
        Self::new(
            position,
            Some(label),
            ControlKind::Numeric {
                field,
                repeat: None,
            },
        )
    }

    pub fn enumerated(
        position: (i32, i32),
        label: &'static str,
        field: Accessor<R, u32>,
        table: &'static LabelTable<u32>,
    ) -> Self {
        Self::new(position, Some(label), ControlKind::Enumerated { field, table })
    }

    pub fn structured(
        position: (i32, i32),
        label: &'static str,
        table: &'static LabelTable<R>,
    ) -> Self {
        Self::new(position, Some(label), ControlKind::Structured { table })
    }

    pub fn info(
        position: (i32, i32),
        label: Option<&'static str>,
        format: fn(&R) -> String,
    ) -> Self {
        Self::new(position, label, ControlKind::Info { format })
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// Human-readable value of the bound field
    pub fn format(&self, record: &R) -> String {
        match &self.kind {
            ControlKind::Numeric { field, .. } => format_numeric(field.signed_value(record)),
            ControlKind::Enumerated { field, table } => {
                let value = *field.get(record);
                match table.label_of(&value) {
                    Some(label) => label.to_string(),
                    None => format!("Unknown ({})", value),
                }
            }
            ControlKind::Structured { table } => table
                .label_of(record)
                .unwrap_or("Custom")
                .to_string(),
            ControlKind::Info { format } => format(record),
        }
    }

    /// Apply one tick of input to the bound field
    ///
    /// Only LEFT/RIGHT are considered. Returns true if the record changed.
    pub fn change(&mut self, input: &InputSnapshot, now: Instant, record: &mut R) -> bool {
        match &mut self.kind {
            ControlKind::Numeric { field, repeat } => {
                let delta = numeric_delta(repeat, input, now);
                if delta == 0 {
                    return false;
                }
                field.add(record, delta);
                true
            }
            ControlKind::Enumerated { field, table } => {
                let step = input.pressed_step();
                if step == 0 {
                    return false;
                }
                let value = field.get_mut(record);
                let next = *table.cycle(value, step);
                let changed = next != *value;
                *value = next;
                changed
            }
            ControlKind::Structured { table } => {
                let step = input.pressed_step();
                if step == 0 {
                    return false;
                }
                let next = table.cycle(record, step);
                let changed = *next != *record;
                *record = next.clone();
                changed
            }
            ControlKind::Info { .. } => false,
        }
    }

    /// Forget any in-progress hold
    pub(crate) fn release(&mut self) {
        if let ControlKind::Numeric { repeat, .. } = &mut self.kind {
            *repeat = None;
        }
    }
}

/// Signed step for a numeric field this tick
///
/// A press edge moves by one and restarts the hold; a held direction moves by
/// the accelerated amount. Holding without a tracked press moves nothing.
fn numeric_delta(repeat: &mut Option<RepeatState>, input: &InputSnapshot, now: Instant) -> i32 {
    let pressed = input.pressed_step();
    if pressed != 0 {
        repeat.get_or_insert_with(|| RepeatState::new(now)).press(now);
        return pressed;
    }

    let held = input.held_step();
    if held == 0 {
        return 0;
    }
    match repeat {
        Some(state) => held * state.tick(now) as i32,
        None => 0,
    }
}

/// Four-column signed decimal, non-negative values get a leading space
fn format_numeric(value: i16) -> String {
    if value < 0 {
        format!("{:>4}", value)
    } else {
        format!("{:>4}", format!(" {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::Buttons;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Sample {
        width: u16,
        offset: i16,
        kind: u32,
    }

    static KINDS: LabelTable<u32> = LabelTable::new(&[(1, "ONE"), (2, "TWO"), (3, "THREE")]);

    static SAMPLES: LabelTable<Sample> = LabelTable::new(&[
        (
            Sample {
                width: 640,
                offset: 0,
                kind: 1,
            },
            "Narrow",
        ),
        (
            Sample {
                width: 678,
                offset: -4,
                kind: 2,
            },
            "Wide",
        ),
    ]);

    fn width_control() -> Control<Sample> {
        Control::numeric(
            (0, 0),
            "Width: ",
            NumericField::Unsigned(Accessor::new(|s| &s.width, |s| &mut s.width)),
        )
    }

    fn offset_control() -> Control<Sample> {
        Control::numeric(
            (0, 0),
            "Offset: ",
            NumericField::Signed(Accessor::new(|s| &s.offset, |s| &mut s.offset)),
        )
    }

    fn kind_control() -> Control<Sample> {
        Control::enumerated(
            (0, 0),
            "Kind: ",
            Accessor::new(|s| &s.kind, |s| &mut s.kind),
            &KINDS,
        )
    }

    fn right_press() -> InputSnapshot {
        InputSnapshot::new(Buttons::RIGHT, Buttons::RIGHT)
    }

    fn right_held() -> InputSnapshot {
        InputSnapshot::new(Buttons::empty(), Buttons::RIGHT)
    }

    #[test]
    fn test_format_numeric_padding() {
        assert_eq!(format_numeric(640), " 640");
        assert_eq!(format_numeric(40), "  40");
        assert_eq!(format_numeric(-1), "  -1");
        assert_eq!(format_numeric(12345), " 12345");
    }

    #[test]
    fn test_unsigned_displayed_as_signed() {
        let control = width_control();
        let sample = Sample {
            width: u16::MAX,
            ..Default::default()
        };
        assert_eq!(control.format(&sample), "  -1");
    }

    #[test]
    fn test_numeric_press_steps_by_one() {
        let mut control = width_control();
        let mut sample = Sample {
            width: 640,
            ..Default::default()
        };
        let now = Instant::now();

        assert!(control.change(&right_press(), now, &mut sample));
        assert_eq!(sample.width, 641);

        let left = InputSnapshot::new(Buttons::LEFT, Buttons::LEFT);
        assert!(control.change(&left, now, &mut sample));
        assert_eq!(sample.width, 640);
    }

    #[test]
    fn test_numeric_hold_accelerates() {
        let mut control = width_control();
        let mut sample = Sample::default();
        let start = Instant::now();

        control.change(&right_press(), start, &mut sample);
        assert_eq!(sample.width, 1);

        // Inside the dead zone
        assert!(!control.change(&right_held(), start + Duration::from_millis(300), &mut sample));
        assert_eq!(sample.width, 1);

        control.change(&right_held(), start + Duration::from_millis(500), &mut sample);
        assert_eq!(sample.width, 2);

        control.change(&right_held(), start + Duration::from_millis(1600), &mut sample);
        assert_eq!(sample.width, 1 + 5);
    }

    #[test]
    fn test_new_press_restarts_acceleration() {
        let mut control = width_control();
        let mut sample = Sample::default();
        let start = Instant::now();

        control.change(&right_press(), start, &mut sample);
        control.change(&right_held(), start + Duration::from_millis(2000), &mut sample);
        assert_eq!(sample.width, 1 + 9);

        let again = start + Duration::from_millis(2100);
        control.change(&right_press(), again, &mut sample);
        assert_eq!(sample.width, 11);
        assert!(!control.change(&right_held(), again + Duration::from_millis(400), &mut sample));
        assert_eq!(sample.width, 11);
    }

    #[test]
    fn test_numeric_hold_left_decreases() {
        let mut control = offset_control();
        let mut sample = Sample::default();
        let start = Instant::now();

        let press = InputSnapshot::new(Buttons::LEFT, Buttons::LEFT);
        let held = InputSnapshot::new(Buttons::empty(), Buttons::LEFT);
        control.change(&press, start, &mut sample);
        control.change(&held, start + Duration::from_millis(1000), &mut sample);
        assert_eq!(sample.offset, -3);
    }

    #[test]
    fn test_numeric_hold_without_press_is_ignored() {
        let mut control = width_control();
        let mut sample = Sample::default();
        assert!(!control.change(&right_held(), Instant::now(), &mut sample));
        assert_eq!(sample.width, 0);
    }

    #[test]
    fn test_numeric_wraps_at_field_width() {
        let mut control = width_control();
        let mut sample = Sample::default();
        let left = InputSnapshot::new(Buttons::LEFT, Buttons::LEFT);
        control.change(&left, Instant::now(), &mut sample);
        assert_eq!(sample.width, u16::MAX);
    }

    #[test]
    fn test_release_forgets_hold() {
        let mut control = width_control();
        let mut sample = Sample::default();
        let start = Instant::now();
        control.change(&right_press(), start, &mut sample);
        control.release();
        control.change(&right_held(), start + Duration::from_secs(3), &mut sample);
        assert_eq!(sample.width, 1);
    }

    #[test]
    fn test_enumerated_ignores_hold() {
        let mut control = kind_control();
        let mut sample = Sample {
            kind: 1,
            ..Default::default()
        };
        let start = Instant::now();
        assert!(!control.change(&right_held(), start + Duration::from_secs(2), &mut sample));
        assert_eq!(sample.kind, 1);

        assert!(control.change(&right_press(), start, &mut sample));
        assert_eq!(sample.kind, 2);
        assert_eq!(control.format(&sample), "TWO");
    }

    #[test]
    fn test_enumerated_unknown_value_resets_to_first() {
        let mut control = kind_control();
        let mut sample = Sample {
            kind: 42,
            ..Default::default()
        };
        assert_eq!(control.format(&sample), "Unknown (42)");

        control.change(&right_press(), Instant::now(), &mut sample);
        assert_eq!(sample.kind, 1);
    }

    #[test]
    fn test_structured_swaps_whole_record() {
        let mut control = Control::structured((0, 0), "Preset: ", &SAMPLES);
        let mut sample = SAMPLES.entries()[0].0.clone();
        assert_eq!(control.format(&sample), "Narrow");

        control.change(&right_press(), Instant::now(), &mut sample);
        assert_eq!(sample, SAMPLES.entries()[1].0);
        assert_eq!(control.format(&sample), "Wide");

        sample.width += 2;
        assert_eq!(control.format(&sample), "Custom");

        // Unknown record falls back to the first entry
        control.change(&right_press(), Instant::now(), &mut sample);
        assert_eq!(sample, SAMPLES.entries()[0].0);
    }

    #[test]
    fn test_no_input_is_noop_for_every_kind() {
        let mut controls = vec![
            width_control(),
            offset_control(),
            kind_control(),
            Control::structured((0, 0), "Preset: ", &SAMPLES),
            Control::info((0, 0), None, |s: &Sample| s.width.to_string()),
        ];
        let original = Sample {
            width: 10,
            offset: -2,
            kind: 3,
        };
        let mut sample = original.clone();
        for control in &mut controls {
            assert!(!control.change(&InputSnapshot::EMPTY, Instant::now(), &mut sample));
        }
        assert_eq!(sample, original);
    }

    #[derive(Debug)]
    struct Opaque(u8);

    static OPAQUE: LabelTable<Opaque> = LabelTable::new(&[(Opaque(1), "ONE"), (Opaque(2), "TWO")]);

    #[test]
    fn test_debug_without_equality() {
        let kind: ControlKind<Opaque> = ControlKind::Structured { table: &OPAQUE };
        assert_eq!(format!("{:?}", kind), "Structured { entries: 2 }");
        assert_eq!(OPAQUE.len(), 2);
        assert_eq!(OPAQUE.entries()[1].1, "TWO");
    }

    #[test]
    fn test_vertical_input_never_edits() {
        let mut control = width_control();
        let mut sample = Sample::default();
        let vertical = InputSnapshot::new(Buttons::UP | Buttons::DOWN, Buttons::UP);
        assert!(!control.change(&vertical, Instant::now(), &mut sample));
        assert_eq!(sample, Sample::default());
    }
}
