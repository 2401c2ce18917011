//! Isotope and evaluated data library definitions

// crate modules
use crate::error::{Error, Result};
use crate::parsers::isotope_name;

// external crates
use serde::Serialize;

/// Evaluated nuclear data library to query
///
/// ```rust
/// # use nphys_xsdata::Library;
/// # use std::str::FromStr;
/// assert_eq!(Library::from_str("JEFF3.2").unwrap(), Library::Jeff32);
/// assert_eq!(Library::Jendl40.query_name(), "jendl4.0");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Library {
    /// JEFF-3.2
    #[serde(rename = "jeff3.2")]
    Jeff32,
    /// JENDL-4.0
    #[serde(rename = "jendl4.0")]
    Jendl40,
}

impl Library {
    /// Library name as expected by the data service
    pub fn query_name(&self) -> &str {
        match self {
            Library::Jeff32 => "jeff3.2",
            Library::Jendl40 => "jendl4.0",
        }
    }
}

impl std::str::FromStr for Library {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "").as_str() {
            "jeff3.2" => Ok(Library::Jeff32),
            "jendl4.0" => Ok(Library::Jendl40),
            _ => Err(Error::UnknownLibrary {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.query_name())
    }
}

/// Target isotope for a cross section query
///
/// The service identifies a target by proton number, mass number, and the
/// ENDF material number.
///
/// The `FromStr` trait looks the name up in the [reference_isotopes()], and
/// accepts the usual variations in formatting.
///
/// ```rust
/// # use nphys_xsdata::Isotope;
/// # use std::str::FromStr;
/// let u235 = Isotope::from_str("u-235").unwrap();
/// assert_eq!(u235.z, 92);
/// assert_eq!(u235.mat, 9228);
/// assert_eq!(u235.name(), "U235");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Isotope {
    /// Element symbol
    pub symbol: String,
    /// Proton number
    pub z: u8,
    /// Mass number
    pub a: u16,
    /// ENDF material number
    pub mat: u16,
}

impl Isotope {
    /// New isotope definition
    pub fn new(symbol: &str, z: u8, a: u16, mat: u16) -> Self {
        Self {
            symbol: symbol.to_string(),
            z,
            a,
            mat,
        }
    }

    /// Display name as `<symbol><mass number>`, e.g. `Pu239`
    pub fn name(&self) -> String {
        format!("{}{}", self.symbol, self.a)
    }
}

impl std::str::FromStr for Isotope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = isotope_name(s).ok_or_else(|| Error::UnknownIsotope {
            name: s.to_string(),
        })?;

        reference_isotopes()
            .into_iter()
            .map(|(isotope, _)| isotope)
            .find(|isotope| isotope.name() == name)
            .ok_or(Error::UnknownIsotope { name })
    }
}

impl std::fmt::Display for Isotope {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Isotopes marked out on the comparison plot
const HIGHLIGHTED: [&str; 3] = ["U238", "Pu242", "U235"];

/// True for the isotopes singled out in the reference comparison
///
/// ```rust
/// # use nphys_xsdata::{is_highlighted, Isotope};
/// assert!(is_highlighted(&Isotope::new("U", 92, 235, 9228)));
/// assert!(!is_highlighted(&Isotope::new("Pu", 94, 239, 9437)));
/// ```
pub fn is_highlighted(isotope: &Isotope) -> bool {
    HIGHLIGHTED.contains(&isotope.name().as_str())
}

/// Actinides of the reference fission cross section survey
///
/// Ordered roughly by increasing fast-to-thermal ratio. Everything is taken
/// from JEFF-3.2 except Th232, which is missing there and comes from
/// JENDL-4.0 instead.
pub fn reference_isotopes() -> Vec<(Isotope, Library)> {
    #[rustfmt::skip]
    let table: [(&str, u8, u16, u16); 25] = [
        ("Th", 90, 232, 9040),
        ("U",  92, 238, 9237),
        ("U",  92, 236, 9231),
        ("Pa", 91, 231, 9131),
        ("Pu", 94, 242, 9446),
        ("Np", 93, 237, 9346),
        ("Am", 95, 243, 9549),
        ("Cm", 96, 246, 9643),
        ("Pu", 94, 240, 9440),
        ("Cm", 96, 248, 9649),
        ("U",  92, 234, 9225),
        ("Am", 95, 241, 9543),
        ("Cm", 96, 244, 9637),
        ("U",  92, 235, 9228),
        ("Cf", 98, 252, 9861),
        ("Pu", 94, 238, 9434),
        ("Pu", 94, 241, 9443),
        ("Pu", 94, 239, 9437),
        ("U",  92, 233, 9222),
        ("Cm", 96, 247, 9646),
        ("Pu", 94, 236, 9428),
        ("U",  92, 232, 9219),
        ("Cm", 96, 243, 9634),
        ("Cf", 98, 251, 9858),
        ("Cm", 96, 245, 9640),
    ];

    table
        .iter()
        .map(|(symbol, z, a, mat)| {
            let library = if (*z, *a) == (90, 232) {
                Library::Jendl40
            } else {
                Library::Jeff32
            };
            (Isotope::new(symbol, *z, *a, *mat), library)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn reference_order_and_libraries() {
        let isotopes = reference_isotopes();
        assert_eq!(isotopes.len(), 25);
        assert_eq!(isotopes[0].0.name(), "Th232");
        assert_eq!(isotopes[0].1, Library::Jendl40);
        assert!(isotopes[1..].iter().all(|(_, lib)| *lib == Library::Jeff32));

        let highlighted: Vec<usize> = isotopes
            .iter()
            .enumerate()
            .filter(|(_, (iso, _))| is_highlighted(iso))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(highlighted, vec![1, 4, 13]);
    }

    #[test]
    fn unknown_isotopes() {
        assert!(matches!(
            Isotope::from_str("Co60"),
            Err(Error::UnknownIsotope { name }) if name == "Co60"
        ));
        assert!(Isotope::from_str("not an isotope").is_err());
    }
}
