// Named colors used by the composition scenes.

use crate::Color;

pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);
pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
pub const ORANGE: Color = Color::new(1.0, 0.65, 0.0, 1.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const DARK_GREY: Color = Color::new(0.15, 0.15, 0.15, 1.0);
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

/// Opaque green color channels with zero alpha, for layers that must ignore
/// texture alpha.
pub const GREEN_ZERO_ALPHA: Color = Color::new(0.0, 1.0, 0.0, 0.0);

/// Colors that stay distinguishable from each other and from the red
/// "should not be visible" zones.
pub const UNIQUE_COLORS: [Color; 7] = [GREEN, BLUE, YELLOW, MAGENTA, CYAN, ORANGE, WHITE];
