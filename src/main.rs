use std::io;

use fundamentals::FundamentalsError;

fn main() -> Result<(), FundamentalsError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    fundamentals::run(&mut out)
}
