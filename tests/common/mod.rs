use textcanon::is_whitespace_class;

/// Non-whitespace-class bytes of `s`, in order.
pub fn content_bytes(s: &[u8]) -> Vec<u8> {
    s.iter().copied().filter(|&b| !is_whitespace_class(b)).collect()
}
