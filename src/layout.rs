//! Presentation-support data for the two calculator layouts.
//!
//! The engine itself is display-agnostic; this module carries the button
//! catalog and window geometry a front end needs to lay itself out.
//! Toggling between layouts never touches engine state: the scientific
//! buttons are hidden, not removed.

use crate::engine::Event;
use serde::{Deserialize, Serialize};

/// The two face plates.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Layout {
    Standard,
    Scientific,
}

impl Layout {
    /// Fixed window size in pixels, width then height.
    pub fn window_size(&self) -> (u32, u32) {
        match self {
            Self::Standard => (480, 568),
            Self::Scientific => (960, 568),
        }
    }

    /// Buttons visible in this layout.
    pub fn buttons(&self) -> impl Iterator<Item = &'static Button> {
        let scientific = matches!(self, Self::Scientific);
        BUTTONS.iter().filter(move |b| scientific || !b.scientific)
    }
}

/// One button of the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Button {
    /// Face-plate caption, exactly as [`Event::from_label`] expects it.
    pub label: &'static str,
    pub row: u8,
    pub col: u8,
    /// Hidden in the standard layout.
    pub scientific: bool,
}

impl Button {
    /// The event this button sends.
    pub fn event(&self) -> Option<Event> {
        Event::from_label(self.label)
    }
}

const fn standard(label: &'static str, row: u8, col: u8) -> Button {
    Button {
        label,
        row,
        col,
        scientific: false,
    }
}

const fn scientific(label: &'static str, row: u8, col: u8) -> Button {
    Button {
        label,
        row,
        col,
        scientific: true,
    }
}

/// Full button catalog, grid coordinates from the original face plate.
/// Columns 0-3 are the standard pad, columns 4-7 the scientific extension.
pub const BUTTONS: &[Button] = &[
    // Standard pad
    standard("C", 1, 0),
    standard("CE", 1, 1),
    standard("√", 1, 2),
    standard("+", 1, 3),
    standard("7", 2, 0),
    standard("8", 2, 1),
    standard("9", 2, 2),
    standard("-", 2, 3),
    standard("4", 3, 0),
    standard("5", 3, 1),
    standard("6", 3, 2),
    standard("x", 3, 3),
    standard("1", 4, 0),
    standard("2", 4, 1),
    standard("3", 4, 2),
    standard("/", 4, 3),
    standard("0", 5, 0),
    standard(".", 5, 1),
    standard("±", 5, 2),
    standard("=", 5, 3),
    // Scientific extension
    scientific("pi", 1, 4),
    scientific("Cos", 1, 5),
    scientific("tan", 1, 6),
    scientific("sin", 1, 7),
    scientific("2pi", 2, 4),
    scientific("Cosh", 2, 5),
    scientific("Tanh", 2, 6),
    scientific("Sinh", 2, 7),
    scientific("log", 3, 4),
    scientific("exp", 3, 5),
    scientific("Mod", 3, 6),
    scientific("e", 3, 7),
    scientific("log10", 4, 4),
    scientific("log1p", 4, 5),
    scientific("expm1", 4, 6),
    scientific("gamma", 4, 7),
    scientific("log2", 5, 4),
    scientific("deg", 5, 5),
    scientific("acosh", 5, 6),
    scientific("asinh", 5, 7),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_button_maps_to_an_event() {
        for button in BUTTONS {
            assert!(
                button.event().is_some(),
                "button {:?} has no event",
                button.label
            );
        }
    }

    #[test]
    fn standard_layout_hides_the_scientific_extension() {
        assert_eq!(Layout::Standard.buttons().count(), 20);
        assert_eq!(Layout::Scientific.buttons().count(), 40);
        assert!(Layout::Standard.buttons().all(|b| b.col <= 3));
    }

    #[test]
    fn grid_cells_are_unique() {
        let mut cells = HashSet::new();
        for button in BUTTONS {
            assert!(
                cells.insert((button.row, button.col)),
                "duplicate cell for {:?}",
                button.label
            );
        }
    }

    #[test]
    fn scientific_layout_doubles_the_width() {
        let (standard_w, standard_h) = Layout::Standard.window_size();
        let (scientific_w, scientific_h) = Layout::Scientific.window_size();
        assert_eq!(scientific_w, standard_w * 2);
        assert_eq!(standard_h, scientific_h);
    }

    #[test]
    fn labels_are_unique() {
        let mut labels = HashSet::new();
        for button in BUTTONS {
            assert!(labels.insert(button.label));
        }
    }
}
