//! Set of useful parser combinators

// crate modules
use crate::error::{Error, Result};

// nphys modules
use nphys_spectrum::CrossSectionTable;

// external crates
use log::{debug, trace};

// nom parser combinators
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{alpha1, one_of, space0, space1};
use nom::combinator::{all_consuming, opt};
use nom::error::{Error as NomError, ErrorKind};
use nom::number::complete::double;
use nom::sequence::{separated_pair, terminated, tuple};
use nom::{Err, IResult};

/// Token opening the data block of a response
const TABLE_START: &str = "Energy(eV)";

/// Token closing the data block of a response
const TABLE_END: &str = "</span>";

/// Extract the cross section table from a data service response
///
/// The response is HTML, but the useful part is plain text lines:
///
/// ```text
/// Energy(eV) XS(b)<br>
/// 1.00000E-05 3.07139<br>
/// ...
/// </span>
/// ```
///
/// Rows are only collected between a line starting with `Energy(eV)` and a
/// line starting with `</span>`.
pub(crate) fn nuchart_table(html: &str) -> Result<CrossSectionTable> {
    let mut energy = Vec::new();
    let mut xs = Vec::new();
    let mut in_table = false;

    for (n, line) in html.lines().enumerate() {
        let first = match line.split_whitespace().next() {
            Some(token) => token,
            None => continue,
        };

        if first == TABLE_START {
            trace!("Table start on line {}", n + 1);
            in_table = true;
            continue;
        }

        if first == TABLE_END {
            in_table = false;
        }

        if in_table {
            let (_, (e, sigma)) = data_row(line.trim()).map_err(|_| Error::ParseError {
                line: n + 1,
                content: line.to_string(),
            })?;
            energy.push(e);
            xs.push(sigma);
        }
    }

    if energy.is_empty() {
        return Err(Error::NoTableFound);
    }

    debug!("Found {} cross section values", energy.len());
    Ok(CrossSectionTable::new(energy, xs)?)
}

/// A single `<energy> <xs><br>` row
fn data_row(i: &str) -> IResult<&str, (f64, f64)> {
    all_consuming(terminated(
        separated_pair(double, space1, double),
        tuple((space0, opt(tag_no_case("<br>")), space0)),
    ))(i)
}

/// Normalised isotope name from loosely formatted input
///
/// Accepts `<element><separator><mass number>`, e.g. `u235`, `U-235`,
/// `pu_239`, and returns the consistent `U235` form.
pub(crate) fn isotope_name(i: &str) -> Option<String> {
    let (_, (symbol, _, a)) = all_consuming(tuple((element, opt(separator), mass_number)))(
        i.trim(),
    )
    .ok()?;

    Some(format!("{}{a}", capitalise(symbol)))
}

/// Get the element symbol
fn element(i: &str) -> IResult<&str, &str> {
    let (rest, element) = alpha1(i)?;

    if element.len() > 2 {
        Err(Err::Error(NomError::new(i, ErrorKind::Fail)))
    } else {
        Ok((rest, element))
    }
}

/// List of possible separators people may use
fn separator(i: &str) -> IResult<&str, char> {
    one_of("_- ")(i)
}

/// Get the mass number
fn mass_number(i: &str) -> IResult<&str, u16> {
    nom::character::complete::u16(i)
}

/// Element symbols are one capital and an optional lowercase letter
fn capitalise(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_uppercase().collect::<String>() + &c.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_row_formats() {
        assert_eq!(data_row("1.00000E-05 3.07139<br>"), Ok(("", (1.0e-5, 3.07139))));
        assert_eq!(data_row("2.0 0.5 <BR>"), Ok(("", (2.0, 0.5))));
        assert_eq!(data_row("2.0 0.5"), Ok(("", (2.0, 0.5))));
        assert!(data_row("2.0<br>").is_err());
        assert!(data_row("2.0 0.5 7.0<br>").is_err());
    }

    #[test]
    fn isotope_name_variants() {
        assert_eq!(isotope_name("u235"), Some("U235".to_string()));
        assert_eq!(isotope_name("PU-239"), Some("Pu239".to_string()));
        assert_eq!(isotope_name(" cm_244 "), Some("Cm244".to_string()));
        assert_eq!(isotope_name("Th 232"), Some("Th232".to_string()));
        assert_eq!(isotope_name("uranium235"), None);
        assert_eq!(isotope_name("U"), None);
        assert_eq!(isotope_name("U235m"), None);
    }

    #[test]
    fn table_between_markers() {
        let html = "<html><span>\n\
                    Energy(eV) XS(b)<br>\n\
                    1.00000E-05 3.07139<br>\n\
                    \n\
                    2.53000E-02 0.5000<br>\n\
                    </span>\n\
                    1.0 9.9<br>\n";

        let table = nuchart_table(html).unwrap();
        assert_eq!(table.energy, vec![1.0e-5, 2.53e-2]);
        assert_eq!(table.xs, vec![3.07139, 0.5]);
    }

    #[test]
    fn table_missing() {
        assert!(matches!(
            nuchart_table("<html>No data</html>"),
            Err(Error::NoTableFound)
        ));
    }

    #[test]
    fn table_bad_row() {
        let html = "Energy(eV) XS(b)<br>\n1.0 2.0<br>\nnot a number<br>\n</span>";
        assert!(matches!(
            nuchart_table(html),
            Err(Error::ParseError { line: 3, .. })
        ));
    }
}
