//! Small helpers shared across the generator.

pub mod html;
pub mod mime;
pub mod path;

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Return "s" suffix for plural counts.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Fast content hash used to skip reloads when a watched file did not change.
#[inline]
pub fn content_hash<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_s() {
        assert_eq!(plural_s(0), "s");
        assert_eq!(plural_s(1), "");
        assert_eq!(plural_s(3), "s");
    }

    #[test]
    fn test_content_hash_stable() {
        assert_eq!(content_hash("quotes"), content_hash("quotes"));
        assert_ne!(content_hash("quotes"), content_hash("quote"));
    }
}
