use std::error::Error;
use std::fmt;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------
#[derive(Debug, Clone)]
pub struct DraughtsError(String);

pub type DraughtsResult<T> = std::result::Result<T, DraughtsError>;

impl From<String> for DraughtsError {
    fn from(s: String) -> DraughtsError {
        DraughtsError(s)
    }
}

impl From<&str> for DraughtsError {
    fn from(s: &str) -> DraughtsError {
        DraughtsError(s.to_string())
    }
}

impl Error for DraughtsError {}

impl fmt::Display for DraughtsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Draughts Error occured: {}", self.0)
    }
}
