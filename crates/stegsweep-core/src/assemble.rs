use bitstream_io::{BigEndian, BitWrite, BitWriter, Endianness, LittleEndian};

use crate::extract::BitOrder;

/// Packs a bit sequence into bytes, 8 bits at a time.
///
/// A trailing group shorter than 8 bits is discarded, never zero-padded:
/// partial bytes cannot be trusted as payload data. With
/// [`BitOrder::LsbFirst`] each group of 8 is reversed before it is
/// interpreted as a byte. Empty input yields empty output.
pub fn assemble(bits: &[bool], bit_order: BitOrder) -> Vec<u8> {
    match bit_order {
        BitOrder::MsbFirst => pack::<BigEndian>(bits),
        BitOrder::LsbFirst => pack::<LittleEndian>(bits),
    }
}

fn pack<E: Endianness>(bits: &[bool]) -> Vec<u8> {
    let full = bits.len() - bits.len() % 8;
    let mut bytes = Vec::with_capacity(full / 8);
    {
        let mut writer = BitWriter::<_, E>::new(&mut bytes);
        for bit in &bits[..full] {
            // writing into a Vec is infallible
            writer.write_bit(*bit).expect("Cannot write bit");
        }
    }

    bytes
}
