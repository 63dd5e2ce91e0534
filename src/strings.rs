pub const STR1: &str = "Hello";
pub const STR2: &str = "World";

pub const NAME: &str = "Alice";
pub const AGE: u32 = 30;

/// Joins two words with a single space into a new `String`; neither input is touched.
pub fn concat(first: &str, second: &str) -> String {
    let mut joined = String::with_capacity(first.len() + 1 + second.len());
    joined.push_str(first);
    joined.push(' ');
    joined.push_str(second);
    joined
}

/// Length in UTF-8 bytes, not characters.
pub fn byte_len(text: &str) -> usize {
    text.len()
}

pub fn introduce(name: &str, age: u32) -> String {
    format!("My name is {} and I am {} years old.", name, age)
}

pub fn concat_line() -> String {
    format!("Concatenated: {}", concat(STR1, STR2))
}

pub fn length_line() -> String {
    format!("Length of str1: {}", byte_len(STR1))
}

pub fn formatted_line() -> String {
    format!("Formatted: {}", introduce(NAME, AGE))
}
