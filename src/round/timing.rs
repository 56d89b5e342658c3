// Delay settings for the resolution sequences.
// All delays are multiples of one base step so the page can speed the whole
// game up or down with a single number.

pub const DEFAULT_BASE_DELAY_MS: u32 = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub base_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self { base_ms: DEFAULT_BASE_DELAY_MS }
    }
}

impl Timing {
    pub fn new(base_ms: u32) -> Self {
        Self { base_ms }
    }

    /// Selection of a non-matching pair -> wrong marker.
    pub fn wrong_mark_ms(&self) -> u32 {
        self.base_ms
    }

    /// Wrong marker -> cleared and deselected.
    pub fn wrong_clear_ms(&self) -> u32 {
        self.base_ms.saturating_mul(2)
    }

    /// Selection of the matching pair -> success indication.
    pub fn celebrate_ms(&self) -> u32 {
        self.base_ms
    }

    /// Success indication -> component reveal.
    pub fn reveal_ms(&self) -> u32 {
        self.base_ms.saturating_mul(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let t = Timing::default();
        assert_eq!((t.wrong_mark_ms(), t.wrong_clear_ms()), (150, 300));
        assert_eq!((t.celebrate_ms(), t.reveal_ms()), (150, 600));
    }

    #[test]
    fn test_zero_base_is_instant() {
        let t = Timing::new(0);
        assert_eq!(t.reveal_ms(), 0);
    }
}
