/// Possible errors to occur while parsing a data line
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("`{token}` is not a number")]
    InvalidNumber {
        token: String,
        source: std::num::ParseFloatError,
    },
}

/// Splits a header line into an ordered list of field names
///
/// The line as a whole is stripped of surrounding whitespace before the
/// split; the individual names are not trimmed. An empty line yields a
/// single empty name.
pub fn parse_header(line: &str) -> Vec<String> {
    line.trim().split(',').map(str::to_owned).collect()
}

/// Splits a data line into floating point values
///
/// An empty field stands for a missing value and becomes `0.0`. Any
/// non-empty field that is not a number fails the whole line. A field
/// containing only whitespace is not empty and therefore also fails.
pub fn parse_values(line: &str) -> Result<Vec<f64>, ParseError> {
    line.trim()
        .split(',')
        .map(|token| match token {
            "" => Ok(0.0),
            _ => token.trim().parse().map_err(|source| ParseError::InvalidNumber {
                token: token.to_owned(),
                source,
            }),
        })
        .collect()
}
