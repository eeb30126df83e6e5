use core::fmt;

/// A linear RGBA color, each channel in `0.0..=1.0`.
///
/// Channels are not clamped on construction; only [`to_rgba8`](Self::to_rgba8)
/// clamps when quantizing.
///
/// # Examples
///
/// ```
/// use vmc_schema::Color;
///
/// let c = Color::from_rgba8(255, 0, 51, 255);
/// assert_eq!(c.to_rgba8(), [255, 0, 51, 255]);
/// assert_eq!(Color::rgb(1.0, 1.0, 1.0), Color::WHITE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

/// Alias of [`Color`], matching the common `Rgba` spelling.
pub type Rgba = Color;

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const CLEAR: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Creates an opaque color.
    #[inline]
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[inline]
    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a color from 8-bit channels.
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        let f = |c: u8| f32::from(c) / 255.0;
        Self::rgba(f(red), f(green), f(blue), f(alpha))
    }

    /// Quantizes to 8-bit channels, clamping out-of-range values.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.red), q(self.green), q(self.blue), q(self.alpha)]
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn display_as_hex() {
        assert_eq!(Color::RED.to_string(), "#ff0000ff");
        assert_eq!(Color::CLEAR.to_string(), "#00000000");
    }

    #[test]
    fn quantize_clamps() {
        let c = Color::rgba(2.0, -1.0, 0.5, 1.0);
        assert_eq!(c.to_rgba8(), [255, 0, 128, 255]);
    }
}
