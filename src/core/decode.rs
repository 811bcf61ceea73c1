use crate::constants::HERO_DECODE_STEP;
use rand::Rng;

const GLYPHS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Scrambled-text reveal for the hero title.
///
/// Characters before `iteration` show the real text; the rest are random
/// capitals, spaces kept in place. Each frame advances by half a character.
#[derive(Clone, Debug)]
pub struct TitleDecoder {
    target: Vec<char>,
    iteration: f32,
}

impl TitleDecoder {
    pub fn new(text: &str) -> Self {
        Self {
            target: text.chars().collect(),
            iteration: 0.0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.iteration >= self.target.len() as f32
    }

    /// Produce the next frame. Returns the text and whether it is the last one.
    pub fn frame<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (String, bool) {
        let text = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if (i as f32) < self.iteration {
                    c
                } else if c == ' ' {
                    ' '
                } else {
                    GLYPHS[rng.gen_range(0..GLYPHS.len())] as char
                }
            })
            .collect();
        let last = self.is_finished();
        self.iteration += HERO_DECODE_STEP;
        (text, last)
    }
}
