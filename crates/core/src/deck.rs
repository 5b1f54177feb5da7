//! Story presentation order.
//!
//! A [`StoryDeck`] hands out one story at a time for the active language.
//! Within a language every story is shown once, in a random order, before any
//! story is shown again; once the queue is exhausted it is reshuffled.
//! Switching language drops the queue immediately.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::language::Language;
use crate::story::Story;

/// Per-page presentation state: the full story list plus the shuffled queue
/// of the active language.
#[derive(Debug, Clone)]
pub struct StoryDeck {
    stories: Vec<Story>,
    language: Option<Language>,
    /// Indices into `stories`, all of the active language, in display order.
    queue: Vec<usize>,
    /// Position in `queue` of the story shown last.
    pointer: usize,
}

impl StoryDeck {
    /// Build a deck over the full (unfiltered) story list.
    pub fn new(stories: Vec<Story>) -> Self {
        Self {
            stories,
            language: None,
            queue: Vec::new(),
            pointer: 0,
        }
    }

    /// All stories the deck was built with.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Language of the current queue, if a story was drawn yet.
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Number of stories left before the queue is reshuffled.
    pub fn remaining(&self) -> usize {
        if self.queue.is_empty() {
            0
        } else {
            self.queue.len() - self.pointer - 1
        }
    }

    /// Drop the current queue; the next draw starts a fresh permutation.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.pointer = 0;
    }

    /// Draw the next story in `language` using the thread-local RNG.
    pub fn next_story(&mut self, language: Language) -> Option<&Story> {
        self.next_story_with(language, &mut rand::rng())
    }

    /// Draw the next story in `language` using the given RNG.
    ///
    /// Returns `None` when no story exists in that language.
    pub fn next_story_with<R: Rng + ?Sized>(
        &mut self,
        language: Language,
        rng: &mut R,
    ) -> Option<&Story> {
        if self.language != Some(language) {
            self.reset();
            self.language = Some(language);
        }

        if self.queue.is_empty() {
            self.shuffle(language, None, rng);
        } else if self.pointer + 1 < self.queue.len() {
            self.pointer += 1;
        } else {
            let last = self.queue[self.pointer];
            self.shuffle(language, Some(last), rng);
        }

        self.queue.get(self.pointer).map(|&i| &self.stories[i])
    }

    /// Refill the queue with a new permutation of the language's stories.
    ///
    /// `avoid_first` keeps the story shown last from opening the new round.
    fn shuffle<R: Rng + ?Sized>(
        &mut self,
        language: Language,
        avoid_first: Option<usize>,
        rng: &mut R,
    ) {
        self.queue = self
            .stories
            .iter()
            .enumerate()
            .filter(|(_, s)| s.language == language)
            .map(|(i, _)| i)
            .collect();
        self.queue.shuffle(rng);
        self.pointer = 0;

        if let Some(last) = avoid_first {
            if self.queue.len() > 1 && self.queue[0] == last {
                let swap_with = rng.random_range(1..self.queue.len());
                self.queue.swap(0, swap_with);
            }
        }
    }
}
