use anyhow::{anyhow, Result};

pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

pub fn u64s_from_str(input: &str) -> [u64; 4] {
    let u8s = u8s_from_str(input);

    let mut output = [0u64; 4];
    for i in 0..4 {
        let bytes = u8s[i * 8..(i + 1) * 8]
            .try_into()
            .expect("Should not ever panic..");
        output[i] = u64::from_le_bytes(bytes);
    }
    output
}

pub fn u64_from_str(input: &str) -> u64 {
    u64s_from_str(input)[0]
}

pub fn seed_to_hex(seed: &[u8; 32]) -> String {
    hex::encode(seed)
}

pub fn seed_from_hex(s: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(s)?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| anyhow!("Invalid seed length: {} bytes, expected 32", b.len()))
}
