pub mod model;
pub mod request;
pub mod response;
pub mod deck;

pub use model::*;
pub use response::*;
pub use request::*;
pub use deck::Deck;

use serde::{Serialize, Deserialize};

/// Messages crossing the presentation boundary travel as single-line JSON.
pub trait JsonMessage<'a>: Serialize + Deserialize<'a> {
    fn deser(text: &'a str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(text)
    }

    fn ser(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }
}
