//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CRS code: {reason}")]
pub struct InvalidCrs {
    reason: &'static str,
}

/// A valid 3-letter CRS (Computer Reservation System) station code.
///
/// CRS codes are 3 ASCII letters. Because the code usually originates in a
/// hand-written configuration file, `parse` accepts either case and
/// normalizes to the uppercase form the Darwin service expects.
///
/// # Examples
///
/// ```
/// use station_board::domain::Crs;
///
/// let rdg = Crs::parse("RDG").unwrap();
/// assert_eq!(rdg.as_str(), "RDG");
///
/// // Lowercase input is normalized
/// assert_eq!(Crs::parse("rdg").unwrap(), rdg);
///
/// // Wrong length is rejected
/// assert!(Crs::parse("RD").is_err());
/// assert!(Crs::parse("RDGX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a CRS code from a string.
    ///
    /// The input must be exactly 3 ASCII letters (A-Z, a-z); the stored
    /// form is always uppercase.
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCrs {
                reason: "must be exactly 3 characters",
            });
        }

        let mut code = [0u8; 3];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_alphabetic() {
                return Err(InvalidCrs {
                    reason: "must be ASCII letters A-Z",
                });
            }
            code[i] = b.to_ascii_uppercase();
        }

        Ok(Crs(code))
    }

    /// Returns the uppercase CRS code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: only uppercase ASCII letters are ever stored
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
