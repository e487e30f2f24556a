use md5::{Digest, Md5};

/// Hex length of a full MD5 digest
pub const MD5_HEX_LEN: usize = 32;

/// Lowercase hex MD5 of `input`, cut to the first `out_len / 2` digest bytes.
///
/// Odd lengths round down to whole bytes; lengths past [`MD5_HEX_LEN`] give
/// the full digest.
pub fn to_md5_hash(input: &str, out_len: usize) -> String {
    let digest = Md5::digest(input.as_bytes());
    digest
        .iter()
        .take(out_len / 2)
        .map(|byte| format!("{:02x}", byte))
        .collect()
}
