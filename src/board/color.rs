//! The four player/cell colors and raw-tag validation.
//!
//! Colors double as player identities and as cell colors on the board. Turn
//! order and every canonical cycle follow the enumeration order red, green,
//! yellow, blue.

/// All colors in enumeration order. Iterate this instead of hand-rolling
/// the sequence so turn order stays consistent everywhere.
pub const COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

/// Number of colors / players / cell color classes.
pub const COLOR_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// Stable numeric tag of the color (red 0, green 1, yellow 2, blue 3).
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Yellow => 2,
            Color::Blue => 3,
        }
    }

    /// Inverse of [`Color::index`]. `None` for tags outside 0..=3.
    pub const fn from_index(index: usize) -> Option<Color> {
        match index {
            0 => Some(Color::Red),
            1 => Some(Color::Green),
            2 => Some(Color::Yellow),
            3 => Some(Color::Blue),
            _ => None,
        }
    }

    /// The next color in the turn cycle (blue wraps to red).
    pub const fn next(self) -> Color {
        match self {
            Color::Red => Color::Green,
            Color::Green => Color::Yellow,
            Color::Yellow => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// The color `steps` places further along the turn cycle.
    pub const fn advanced(self, steps: usize) -> Color {
        match Color::from_index((self.index() + steps) % COLOR_COUNT) {
            Some(color) => color,
            // (index + steps) % 4 is always a valid tag.
            None => self,
        }
    }

    /// One lowercase letter for rendering (r, g, y, b).
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Yellow => 'y',
            Color::Blue => 'b',
        }
    }
}

/// Validates a raw numeric color tag as read from an untyped payload.
///
/// True exactly for the integral values 0, 1, 2 and 3. Fractional,
/// negative, too-large and non-finite values are all rejected.
pub fn is_color(value: f64) -> bool {
    if !value.is_finite() || value.fract() != 0.0 {
        return false;
    }
    (0.0..=3.0).contains(&value)
}
