use md5::{Digest, Md5};

/// Hash a controller password the way the firmware expects it on the wire:
/// MD5 of the UTF-8 bytes, lowercase hex.
pub fn hash_password(password: &str) -> String {
    hex::encode(Md5::digest(password.as_bytes()))
}
