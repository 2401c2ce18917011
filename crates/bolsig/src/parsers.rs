//! Parsers for solver output

// crate modules
use crate::error::{Error, Result};

// external crates
use log::trace;

// nom parser combinators
use nom::bytes::complete::is_not;
use nom::character::complete::{space0, space1};
use nom::number::complete::double;
use nom::sequence::{preceded, tuple};
use nom::IResult;

/// Header keyword of the mobility block
const MOBILITY: &str = "Mobility";

/// Electron mobility from solver output
///
/// The mobility block is a header line with `Mobility` as its third word,
/// followed by a line whose second column is the value (1/m/V/s, reduced by
/// the gas density). If there are several blocks the last one is used.
///
/// ```rust
/// # use nphys_bolsig::parse_mobility;
/// let output = "\
/// E/N (Td)     Mobility *N (1/m/V/s)
///   0.1000      0.5417E+24
/// ";
/// assert_eq!(parse_mobility(output).unwrap(), 0.5417e24);
/// ```
pub fn parse_mobility(output: &str) -> Result<f64> {
    let mut mobility = None;
    let mut expect_value = false;

    for (n, line) in output.lines().enumerate() {
        if expect_value {
            expect_value = false;
            let (_, value) = second_column(line).map_err(|_| Error::ParseError {
                line: n + 1,
                content: line.to_string(),
            })?;
            trace!("Mobility {value} on line {}", n + 1);
            mobility = Some(value);
        }

        if is_mobility_header(line) {
            expect_value = true;
        }
    }

    mobility.ok_or(Error::MobilityNotFound)
}

/// Third whitespace separated word is `Mobility`
fn is_mobility_header(line: &str) -> bool {
    line.split_whitespace().nth(2) == Some(MOBILITY)
}

/// Value in the second whitespace separated column
fn second_column(i: &str) -> IResult<&str, f64> {
    preceded(tuple((space0, is_not(" \t"), space1)), double)(i)
}
