use protocol::{Color, Deck, Question};
use rand::Rng;

use crate::table::{ErrorKind, TableResult};

/// Questions of a deck bucketed by wheel segment.
#[derive(Debug, Clone)]
pub struct QuestionPool {
    name: String,
    by_color: [Vec<Question>; 4],
}

impl QuestionPool {
    /// Fails on the first color that has nothing to ask.
    pub fn from_deck(deck: Deck) -> TableResult<Self> {
        let mut by_color: [Vec<Question>; 4] = Default::default();
        for question in deck.questions {
            by_color[question.color.segment()].push(question);
        }
        for color in Color::ALL {
            if by_color[color.segment()].is_empty() {
                return Err(ErrorKind::EmptyPool(color));
            }
        }
        Ok(Self { name: deck.name, by_color })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.by_color.iter().map(Vec::len).sum()
    }

    /// Every bucket is non-empty once `from_deck` succeeds, so a landing
    /// always has something to ask.
    pub fn draw<R: Rng>(&self, rng: &mut R, color: Color) -> &Question {
        let bucket = &self.by_color[color.segment()];
        &bucket[rng.gen_range(0..bucket.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn builtin_deck_is_valid() {
        let pool = QuestionPool::from_deck(Deck::builtin()).unwrap();
        assert_eq!(pool.len(), 12);
    }

    #[test]
    fn missing_color_fails_fast() {
        let mut deck = Deck::builtin();
        deck.questions.retain(|q| q.color != Color::Yellow);
        match QuestionPool::from_deck(deck) {
            Err(ErrorKind::EmptyPool(Color::Yellow)) => {},
            other => panic!("expected empty yellow pool, got {:?}", other),
        }
    }

    #[test]
    fn draws_only_the_landed_color() {
        let pool = QuestionPool::from_deck(Deck::builtin()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for color in Color::ALL {
            let mut seen = Vec::new();
            for _ in 0..60 {
                let q = pool.draw(&mut rng, color);
                assert_eq!(q.color, color);
                if !seen.contains(&q.text) {
                    seen.push(q.text.clone());
                }
            }
            assert_eq!(seen.len(), 3, "{}", color);
        }
    }

    #[test]
    fn single_question_colors_always_draw() {
        let deck = Deck {
            name: "tiny".to_string(),
            author: String::new(),
            version: String::new(),
            questions: Color::ALL.iter().map(|&c| Question::new(c, format!("about {}", c))).collect(),
        };
        let pool = QuestionPool::from_deck(deck).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            for color in Color::ALL {
                assert_eq!(pool.draw(&mut rng, color).text, format!("about {}", color));
            }
        }
    }
}
