// controls.rs - Control panel logic
//
// DOM-free pieces of the UI: slider parsing, the triple-click restore
// gesture and the fullscreen toggle decision.

use crate::error::{Error, Result};

/// Range inputs report their value as a string.
pub fn parse_slider(value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::InvalidSlider(value.to_string()))
}

/// Counts document clicks; every `threshold`-th click restores the panel.
#[derive(Debug)]
pub struct RestoreGesture {
    clicks: u32,
    threshold: u32,
}

impl RestoreGesture {
    pub fn new(threshold: u32) -> Self {
        Self { clicks: 0, threshold: threshold.max(1) }
    }

    /// Returns true when the panel should be shown again.
    pub fn click(&mut self) -> bool {
        self.clicks += 1;
        if self.clicks >= self.threshold {
            self.clicks = 0;
            return true;
        }
        false
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fullscreen {
    Enter,
    Exit,
}

impl Fullscreen {
    pub fn toggle(active: bool) -> Self {
        if active { Fullscreen::Exit } else { Fullscreen::Enter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_values_parse() {
        assert_eq!(parse_slider("3").unwrap(), 3);
        assert_eq!(parse_slider(" 100 ").unwrap(), 100);
    }

    #[test]
    fn bad_slider_values_are_errors() {
        for v in ["", "abc", "-1", "2.5"] {
            assert!(matches!(parse_slider(v), Err(Error::InvalidSlider(_))), "{v:?}");
        }
    }

    #[test]
    fn third_click_restores_and_resets() {
        let mut g = RestoreGesture::new(3);
        assert!(!g.click());
        assert!(!g.click());
        assert!(g.click());
        assert_eq!(g.clicks(), 0);
        assert!(!g.click());
        assert_eq!(g.clicks(), 1);
    }

    #[test]
    fn fullscreen_toggles() {
        assert_eq!(Fullscreen::toggle(false), Fullscreen::Enter);
        assert_eq!(Fullscreen::toggle(true), Fullscreen::Exit);
    }
}
