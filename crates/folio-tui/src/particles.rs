//! Decorative drifting dots behind the hero area.
//!
//! Purely cosmetic; skipped entirely under reduced motion. Positions
//! come from a small deterministic LCG so a given (tick, cell) pair
//! always draws the same frame.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::Frame;

const DOTS: &[char] = &['·', '∙', '•'];
const DENSITY: u64 = 29;

/// Overlay drifting dots on blank cells of the area.
pub fn render_particles(frame: &mut Frame, area: Rect, tick: u64) {
    let style = Style::default().fg(Color::DarkGray);
    let buffer = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let seed = hash(u64::from(x) ^ (u64::from(y) << 16) ^ (tick / 8 << 32));
            if seed % DENSITY != 0 {
                continue;
            }
            let cell = &mut buffer[(x, y)];
            if cell.symbol() == " " {
                let dot = DOTS[(seed / DENSITY) as usize % DOTS.len()];
                cell.set_char(dot);
                cell.set_style(style);
            }
        }
    }
}

/// SplitMix64 step, enough mixing for a screen of dots.
fn hash(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
