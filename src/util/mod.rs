use std::fmt::Display;

#[inline]
pub fn is_lowercase(c: u8) -> bool {
    c.is_ascii_lowercase()
}

#[inline]
pub fn is_numeric(c: u8) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_alphanumeric(c: u8) -> bool {
    is_lowercase(c) || is_numeric(c)
}

pub fn join<T: Display>(items: &[T], separator: &str) -> String {
    items.iter().map(|item| item.to_string()).collect::<Vec<String>>().join(separator)
}

pub fn escape_byte(byte: &u8) -> String {
    std::ascii::escape_default(*byte).to_string()
}
