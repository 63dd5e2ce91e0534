use std::io::Write;

use crate::error::FundamentalsError;
use crate::numbers;
use crate::strings;

pub const GREETING: &str = "Hello, World!";

/// Every line the program prints, in order.
pub fn lines() -> Vec<String> {
    vec![
        GREETING.to_string(),
        numbers::signed_line_platform(),
        numbers::signed_line_fixed(),
        numbers::unsigned_line_platform(),
        numbers::unsigned_line_fixed(),
        numbers::floats_line(),
        numbers::product_line(),
        strings::concat_line(),
        strings::length_line(),
        strings::formatted_line(),
    ]
}

pub fn run<W: Write>(out: &mut W) -> Result<(), FundamentalsError> {
    for line in lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn greeting_comes_first() {
        assert_eq!(lines()[0], "Hello, World!");
    }

    #[test]
    fn output_is_the_fixed_sequence() {
        let mut buf = Vec::new();
        run(&mut buf).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf-8 output");
        let printed: Vec<&str> = text.lines().collect();

        assert_eq!(printed.len(), 10);
        assert_eq!(printed[0], "Hello, World!");
        assert_eq!(printed[1], "Int: 10");
        assert_eq!(
            printed[2],
            "Int8: 120 Int16: 32000 Int32: 2000000000 Int64: 9000000000000000000"
        );
        assert_eq!(printed[3], "Unsigned Int: 10");
        assert_eq!(
            printed[4],
            "Uint8: 255 Uint16: 65535 Uint32: 4294967295 Uint64: 18446744073709551615"
        );
        assert_eq!(printed[5], "Floats: 3.14 19.9");
        assert!(printed[6].starts_with("Result of multiplication: "));
        assert_eq!(printed[7], "Concatenated: Hello World");
        assert_eq!(printed[8], "Length of str1: 5");
        assert_eq!(
            printed[9],
            "Formatted: My name is Alice and I am 30 years old."
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn printed_product_parses_back() {
        let line = &lines()[6];
        let value: f32 = line
            .trim_start_matches("Result of multiplication: ")
            .parse()
            .expect("product is a float");
        assert!((value - 31.4).abs() < 1e-4);
    }

    #[test]
    fn write_failure_surfaces_as_io_error() {
        let err = run(&mut BrokenPipe).unwrap_err();
        match err {
            FundamentalsError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
        }
    }
}
