use serde::{Serialize, Deserialize};

use crate::model::{Color, Question};

/// A named set of questions, stored on disk as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub version: String,
    pub questions: Vec<Question>,
}

const BUILTIN: [(Color, &str); 12] = [
    (Color::Red, "What is your favorite Google product and why?"),
    (Color::Red, "Share a time Google Maps saved your day."),
    (Color::Red, "If you could design a Google Doodle, what theme?"),
    (Color::Green, "Best Chrome extension for productivity?"),
    (Color::Green, "Android or iOS: what would you improve?"),
    (Color::Green, "How do you stay organized with Google Drive?"),
    (Color::Blue, "What was your first search on Google you remember?"),
    (Color::Blue, "Favorite YouTube channel and why?"),
    (Color::Blue, "If Search had a superpower, what would it be?"),
    (Color::Yellow, "What Google service changed your life the most?"),
    (Color::Yellow, "Best Google Easter egg you have discovered?"),
    (Color::Yellow, "How do you use Google Photos creatively?"),
];

impl Deck {
    pub fn builtin() -> Self {
        Self {
            name: "Googleyness".to_string(),
            author: "chromatic".to_string(),
            version: "1".to_string(),
            questions: BUILTIN.iter().map(|(color, text)| Question::new(*color, text)).collect(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn count(&self, color: Color) -> usize {
        self.questions.iter().filter(|q| q.color == color).count()
    }
}
