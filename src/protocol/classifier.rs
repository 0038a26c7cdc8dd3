//! Reply code classification
//!
//! An expectation may name a class (`2`), a group (`23`) or an exact code
//! (`230`). The actual code is truncated to the same width before comparing.

use crate::error::ProtocolError;
use crate::protocol::Response;

/// Checks `actual` against the 1-, 2- or 3-digit prefix `expected`.
pub fn classify(expected: u16, actual: u16) -> Result<(), ProtocolError> {
    let truncated = match expected {
        1..=9 => actual / 100,
        10..=99 => actual / 10,
        _ => actual,
    };

    if truncated == expected {
        Ok(())
    } else {
        Err(ProtocolError::UnexpectedCode {
            expected,
            actual,
            response: String::new(),
        })
    }
}

/// Same as [`classify`], carrying the reply text into the error.
pub fn expect_code(expected: u16, response: &Response) -> Result<(), ProtocolError> {
    classify(expected, response.code).map_err(|_| ProtocolError::UnexpectedCode {
        expected,
        actual: response.code,
        response: response.text.clone(),
    })
}
