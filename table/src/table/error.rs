use std::fmt;

use protocol::Color;

#[derive(Debug)]
pub enum ErrorKind {
    EmptyPool(Color),
    DeckRead(std::io::Error),
    DeckParse(serde_json::Error),
    Config(String),
}

pub type TableResult<T> = Result<T, ErrorKind>;

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::EmptyPool(color) => write!(f, "no {} questions in the deck", color),
            ErrorKind::DeckRead(e) => write!(f, "cannot read deck: {}", e),
            ErrorKind::DeckParse(e) => write!(f, "cannot parse deck: {}", e),
            ErrorKind::Config(msg) => write!(f, "bad config: {}", msg),
        }
    }
}

impl std::error::Error for ErrorKind {}
