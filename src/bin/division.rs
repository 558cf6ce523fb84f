// Ex. 1: integer division computed by recursive repeated subtraction.
// Reads a dividend and a divisor from standard input and prints how many
// times the divisor fits.  Independent of the record manager.
use std::io::{self, prelude::*};
use std::str::FromStr;

/// Quotient of dividend / divisor by counting subtractions.  Returns 0 when
/// the dividend is smaller than the divisor.  Defined for divisor > 0; a
/// zero divisor never terminates.
fn division_r(dividend: u32, divisor: u32) -> u32 {
    if dividend < divisor {
        return 0;
    }

    1 + division_r(dividend - divisor, divisor)
}

fn read_number(prompt: &str) -> io::Result<u32> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut buffer = String::new();

    loop {
        stdout.write(prompt.as_bytes())?;
        stdout.flush()?;

        buffer.clear();
        let bytes = stdin.read_line(&mut buffer)?;
        if bytes == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        }

        match u32::from_str(buffer.trim()) {
            Ok(value) => return Ok(value),
            Err(_) => println!("Entrada no válida."),
        };
    }
}

fn main() -> io::Result<()> {
    let dividend = read_number("Ingrese el dividendo: ")?;
    let divisor = read_number("Ingrese el divisor: ")?;

    println!("El resultado es: {}", division_r(dividend, divisor));
    Ok(())
}
