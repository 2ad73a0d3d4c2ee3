//! Parse failure marker.

/// A structural parse failure.
///
/// Carries no payload: the diagnostic was handed to the reporter (or
/// suppressed, in expression-only mode) when the error was raised. The
/// failure unwinds to the nearest declaration boundary, which then
/// synchronizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError;

pub type ParseResult<T> = Result<T, ParseError>;
