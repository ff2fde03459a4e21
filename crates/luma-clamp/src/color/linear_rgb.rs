//! Linear RGB color type
//!
//! Channels hold "color energy" on the 0..=255 display scale. Values are not
//! bounded: a channel may be negative or exceed 255 until it is clamped.

/// One of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in `r, g, b` order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// A color in linear light, scaled so that 255.0 is the display maximum.
///
/// Components are unconstrained reals; they describe the desired energy of
/// each channel, which need not be displayable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    /// Red channel energy
    pub r: f64,
    /// Green channel energy
    pub g: f64,
    /// Blue channel energy
    pub b: f64,
}

impl LinearRgb {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a color from its three channel values.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a grey with all channels set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Read a single channel.
    #[inline]
    pub fn get(self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Mutable access to a single channel.
    #[inline]
    pub fn channel_mut(&mut self, channel: Channel) -> &mut f64 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        }
    }

    /// Apply `f` to every channel.
    #[inline]
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Multiply every channel by `factor`.
    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        self.map(|c| c * factor)
    }
}
