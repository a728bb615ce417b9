//! CRC-16/CCITT-FALSE, the integrity checksum carried in tag `63`.

const INITIAL: u16 = 0xFFFF;
const POLYNOMIAL: u16 = 0x1021;

/// Computes CRC-16/CCITT-FALSE (no reflection, no final XOR) over `data`.
pub fn crc16(data: &[u8]) -> u16 {
    data.iter().fold(INITIAL, |mut crc, &byte| {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
        crc
    })
}

/// Renders a checksum as four uppercase hexadecimal digits.
pub fn format(crc: u16) -> String {
    format!("{crc:04X}")
}
