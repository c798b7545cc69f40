//! Static value/name tables

/// Ordered mapping from a raw value to a display name
///
/// Used both to format a field and to step an enumerated field through its
/// legal values. Tables are built once as statics and never mutated.
#[derive(Debug)]
pub struct LabelTable<T: 'static> {
    entries: &'static [(T, &'static str)],
}

impl<T: 'static> LabelTable<T> {
    /// Create a table over `entries`; must not be empty
    pub const fn new(entries: &'static [(T, &'static str)]) -> Self {
        assert!(!entries.is_empty(), "label table must not be empty");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &'static [(T, &'static str)] {
        self.entries
    }
}

impl<T: PartialEq + 'static> LabelTable<T> {
    /// Index of the first entry equal to `value`
    pub fn position(&self, value: &T) -> Option<usize> {
        self.entries.iter().position(|(v, _)| v == value)
    }

    /// Name of the first entry equal to `value`
    pub fn label_of(&self, value: &T) -> Option<&'static str> {
        self.position(value).map(|i| self.entries[i].1)
    }

    /// Look up an entry by its name
    pub fn by_name(&self, name: &str) -> Option<&'static T> {
        self.entries
            .iter()
            .find(|(_, label)| *label == name)
            .map(|(v, _)| v)
    }

    /// Entry `delta` positions away from `value`
    ///
    /// Saturates at both ends of the table. A value missing from the table
    /// lands on the first entry regardless of `delta`.
    pub fn cycle(&self, value: &T, delta: i32) -> &'static T {
        let index = match self.position(value) {
            Some(i) => {
                let last = self.entries.len() as i64 - 1;
                (i as i64 + delta as i64).clamp(0, last) as usize
            }
            None => 0,
        };
        &self.entries[index].0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static COLORS: LabelTable<u32> = LabelTable::new(&[(10, "RED"), (20, "GREEN"), (30, "BLUE")]);

    #[test]
    fn test_label_lookup() {
        assert_eq!(COLORS.label_of(&20), Some("GREEN"));
        assert_eq!(COLORS.label_of(&25), None);
        assert_eq!(COLORS.by_name("BLUE"), Some(&30));
    }

    #[test]
    fn test_cycle_moves_one_entry() {
        assert_eq!(*COLORS.cycle(&10, 1), 20);
        assert_eq!(*COLORS.cycle(&30, -1), 20);
    }

    #[test]
    fn test_cycle_saturates_at_ends() {
        assert_eq!(*COLORS.cycle(&30, 1), 30);
        assert_eq!(*COLORS.cycle(&10, -1), 10);
    }

    #[test]
    fn test_cycle_unknown_value_lands_on_first() {
        assert_eq!(*COLORS.cycle(&99, 1), 10);
        assert_eq!(*COLORS.cycle(&99, -1), 10);
    }
}
