/// The star rating being edited in the detail pane.
///
/// `value` is 0 while nothing is chosen; a chosen value is always in
/// `1..=max`. `revisions` counts how many times a new non-zero value was
/// picked since the pane opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingDraft {
    value: u8,
    max: u8,
    revisions: u32,
}

impl RatingDraft {
    pub fn new(max: u8, initial: u8) -> Self {
        Self {
            value: initial.min(max),
            max,
            revisions: 0,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn revisions(&self) -> u32 {
        self.revisions
    }

    /// Sets the rating, clamped to `max`. Returns false when nothing changed.
    pub fn set(&mut self, value: u8) -> bool {
        let value = value.min(self.max);
        if value == self.value {
            return false;
        }
        self.value = value;
        if value > 0 {
            self.revisions += 1;
        }
        true
    }

    pub fn increase(&mut self) -> bool {
        self.set(self.value.saturating_add(1))
    }

    /// Steps down but never below one star once a rating is chosen.
    pub fn decrease(&mut self) -> bool {
        if self.value > 1 {
            self.set(self.value - 1)
        } else {
            false
        }
    }

    pub fn can_submit(&self) -> bool {
        self.value > 0
    }
}

/// Maps a digit key to a rating: `1`-`9` are literal, `0` means ten.
pub fn rating_for_digit(digit: char) -> Option<u8> {
    match digit.to_digit(10)? {
        0 => Some(10),
        d => u8::try_from(d).ok(),
    }
}
