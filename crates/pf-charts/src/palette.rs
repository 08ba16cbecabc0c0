//! Phase colours.

use pf_core::Phase;

use crate::model::Color;

/// Fixed voltage-chart mapping: phase 1 red, phase 2 green, phase 3 blue.
pub fn voltage_phase_color(phase: Phase) -> Color {
    match phase.number() {
        1 => Color::RED,
        2 => Color::GREEN,
        3 => Color::BLUE,
        _ => Color::GREY,
    }
}

/// ColorBrewer "Set1" qualitative sequence.
pub const SET1: [Color; 9] = [
    Color::rgb(0xe4, 0x1a, 0x1c),
    Color::rgb(0x37, 0x7e, 0xb8),
    Color::rgb(0x4d, 0xaf, 0x4a),
    Color::rgb(0x98, 0x4e, 0xa3),
    Color::rgb(0xff, 0x7f, 0x00),
    Color::rgb(0xff, 0xff, 0x33),
    Color::rgb(0xa6, 0x56, 0x28),
    Color::rgb(0xf7, 0x81, 0xbf),
    Color::rgb(0x99, 0x99, 0x99),
];

/// Colour for the `slot`-th series, cycling through Set1.
pub fn qualitative(slot: usize) -> Color {
    SET1[slot % SET1.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voltage_palette_is_fixed() {
        let p = |n: u8| Phase::try_from(n).unwrap();
        assert_eq!(voltage_phase_color(p(1)), Color::RED);
        assert_eq!(voltage_phase_color(p(2)), Color::GREEN);
        assert_eq!(voltage_phase_color(p(3)), Color::BLUE);
        assert_eq!(voltage_phase_color(p(4)), Color::GREY);
    }

    #[test]
    fn qualitative_cycles() {
        assert_eq!(qualitative(0), qualitative(9));
        assert_ne!(qualitative(0), qualitative(1));
    }
}
