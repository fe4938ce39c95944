/// Rescale `value` by `multiplier / divisor`, rounding toward zero.
///
/// The product is formed in 128 bits so it cannot overflow; a quotient that
/// does not fit in a u64 saturates. Returns `None` when `divisor` is zero.
pub fn scale_large_timestamp(value: u64, multiplier: u64, divisor: u64) -> Option<u64> {
    if divisor == 0 {
        return None;
    }
    if multiplier == 0 {
        return Some(0);
    }
    if divisor >= multiplier && divisor % multiplier == 0 {
        return Some(value / (divisor / multiplier));
    }
    if divisor < multiplier && multiplier % divisor == 0 {
        return Some(value.saturating_mul(multiplier / divisor));
    }
    let scaled = (value as u128) * (multiplier as u128) / (divisor as u128);
    Some(u64::try_from(scaled).unwrap_or(u64::MAX))
}

/// Classic 16-bytes-per-row dump. `start_offset` is the absolute position of
/// `bytes[0]` in the source buffer and only affects the address column.
pub fn hex_dump(bytes: &[u8], start_offset: u64) -> String {
    let mut out = String::new();
    for (i, chunk) in bytes.chunks(16).enumerate() {
        let offs = start_offset + (i as u64) * 16;
        let hexs: String = chunk.iter().map(|b| format!("{:02x} ", b)).collect();
        let ascii: String = chunk
            .iter()
            .map(|&c| if (32..=126).contains(&c) { c as char } else { '.' })
            .collect();
        out.push_str(&format!("{:08x}  {:<48}  |{}|\n", offs, hexs, ascii));
    }
    out
}
