use std::fmt;

use crate::carrier::PixelBuffer;

/// a color channel of the normalized RGBA pixel tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Channel::Red => 'R',
            Channel::Green => 'G',
            Channel::Blue => 'B',
            Channel::Alpha => 'A',
        }
    }

    pub fn role_name(self) -> &'static str {
        match self {
            Channel::Red => "Red (R)",
            Channel::Green => "Green (G)",
            Channel::Blue => "Blue (B)",
            Channel::Alpha => "Alpha (A)",
        }
    }
}

/// the order in which selected channel bits are concatenated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// channel-major: all pixels of one channel before the next ("RRR…GGG…BBB…")
    ByPlane,
    /// pixel-major: the selected channels of one pixel before the next ("RGB,RGB,…")
    ByPixel,
}

impl Traversal {
    /// short label used in artifact file names
    pub fn name(self) -> &'static str {
        match self {
            Traversal::ByPlane => "planes",
            Traversal::ByPixel => "pixel_by_pixel",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Traversal::ByPlane => "By planes (RR...GG...BB...)",
            Traversal::ByPixel => "Interleaved (RGB,RGB,RGB...)",
        }
    }
}

/// whether reassembled bytes are interpreted with their bits as
/// extracted or reversed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

impl BitOrder {
    /// short label used in artifact file names
    pub fn name(self) -> &'static str {
        match self {
            BitOrder::MsbFirst => "MSB-first",
            BitOrder::LsbFirst => "LSB-first",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BitOrder::MsbFirst => "Normal (MSB-first)",
            BitOrder::LsbFirst => "Inversed (LSB-first)",
        }
    }
}

/// one fully determined extraction attempt, no hidden state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// number of low bits per channel value to read, 1..=8
    pub bit_depth: u8,
    /// ordered channel subset; order matters for [`Traversal::ByPlane`]
    pub channels: Vec<Channel>,
    pub traversal: Traversal,
    pub bit_order: BitOrder,
}

impl ExtractionConfig {
    /// concatenated one-letter channel labels, e.g. "RGB"
    pub fn channel_label(&self) -> String {
        self.channels.iter().map(|c| c.letter()).collect()
    }
}

impl fmt::Display for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} LSB | Channels: {} | Flow: {} | Bit Order: {}",
            self.bit_depth,
            self.channel_label(),
            self.traversal.name(),
            self.bit_order.name()
        )
    }
}

/// Extracts the candidate bit sequence of one attempt.
///
/// Reads the low `bit_depth` bits of every selected channel value, most
/// significant of those bits first. Channels the buffer does not have
/// contribute no bits. Pure function of its inputs, so re-running with
/// the same buffer and config yields a bit-identical sequence.
pub fn extract(buffer: &PixelBuffer, config: &ExtractionConfig) -> Vec<bool> {
    let depth = config.bit_depth.clamp(1, 8);
    let mut bits =
        Vec::with_capacity(buffer.pixel_count() * config.channels.len() * depth as usize);

    match config.traversal {
        Traversal::ByPlane => {
            for channel in &config.channels {
                if let Some(plane) = buffer.plane(channel.index()) {
                    for value in plane {
                        push_low_bits(value, depth, &mut bits);
                    }
                }
            }
        }
        Traversal::ByPixel => {
            for pixel in buffer.pixels() {
                for channel in &config.channels {
                    if let Some(value) = pixel.get(channel.index()) {
                        push_low_bits(*value, depth, &mut bits);
                    }
                }
            }
        }
    }

    bits
}

#[inline]
fn push_low_bits(value: u8, depth: u8, bits: &mut Vec<bool>) {
    for i in (0..depth).rev() {
        bits.push((value >> i) & 1 == 1);
    }
}
