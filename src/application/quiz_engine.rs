// src/application/quiz_engine.rs
use crate::constants::{QUESTION_CHOICES, WRONG_CHOICES};
use crate::domain::{DomainError, MissedQuestion, Question, QuestionOutcome, SongIndex, TestResult};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::{debug, instrument, warn};

/// Questions produced for one test, plus what was asked for
#[derive(Debug, Clone)]
pub struct GeneratedTest {
    pub questions: Vec<Question>,
    pub requested: usize,
}

impl GeneratedTest {
    /// True when fewer questions were generated than requested
    pub fn was_clamped(&self) -> bool {
        self.questions.len() < self.requested
    }
}

/// Builds multiple-choice questions from a read-only [`SongIndex`].
///
/// The random source is injected so callers decide between a thread RNG and a seeded one.
pub struct QuizEngine<G: Rng> {
    index: SongIndex,
    rng: G,
}

impl<G: Rng> QuizEngine<G> {
    pub fn new(index: SongIndex, rng: G) -> Self {
        Self { index, rng }
    }

    pub fn index(&self) -> &SongIndex {
        &self.index
    }

    /// Number of distinct songs a question can be built for
    pub fn playable_song_count(&self) -> usize {
        self.index.playable_songs().len()
    }

    /// Fail unless at least one question can be generated
    pub fn check_playable(&self) -> Result<(), DomainError> {
        let albums = self.index.album_count();
        if albums < QUESTION_CHOICES {
            return Err(DomainError::InsufficientCatalogData(format!(
                "the catalog has {albums} album(s), at least {QUESTION_CHOICES} are needed"
            )));
        }
        if self.index.song_count() == 0 {
            return Err(DomainError::InsufficientCatalogData(
                "the catalog has no songs".to_string(),
            ));
        }
        if self.playable_song_count() == 0 {
            return Err(DomainError::InsufficientCatalogData(format!(
                "no song has {WRONG_CHOICES} other albums to choose wrong answers from"
            )));
        }
        Ok(())
    }

    /// Pick a song uniformly at random and build a question for it
    pub fn generate_question(&mut self) -> Result<Question, DomainError> {
        self.check_playable()?;
        let song = self
            .index
            .playable_songs()
            .choose(&mut self.rng)
            .map(|song| song.to_string())
            .ok_or_else(|| DomainError::InsufficientCatalogData("no playable songs".to_string()))?;
        self.question_for(&song)
    }

    /// Build a fresh question for a specific song
    pub fn question_for(&mut self, song: &str) -> Result<Question, DomainError> {
        let correct = self
            .index
            .album_of(song)
            .ok_or_else(|| {
                DomainError::InsufficientCatalogData(format!("'{song}' is not in the catalog"))
            })?
            .to_string();
        let choices = self.shuffled_choices(song, &correct)?;
        Ok(Question::new(song, correct, choices))
    }

    /// Generate a test of `requested` questions, each about a different song.
    ///
    /// The request is clamped to the number of playable songs; the returned
    /// [`GeneratedTest`] reports whether that happened.
    #[instrument(level = "debug", skip(self))]
    pub fn generate_test(&mut self, requested: usize) -> Result<GeneratedTest, DomainError> {
        self.check_playable()?;

        let playable = self.index.playable_songs();
        let count = if requested > playable.len() {
            warn!(
                requested,
                available = playable.len(),
                "Requested more questions than there are songs"
            );
            playable.len()
        } else {
            requested
        };

        let songs: Vec<String> = playable
            .choose_multiple(&mut self.rng, count)
            .map(|song| song.to_string())
            .collect();

        let questions = songs
            .iter()
            .map(|song| self.question_for(song))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(questions = questions.len(), "Generated test");
        Ok(GeneratedTest {
            questions,
            requested,
        })
    }

    /// Rebuild questions for previously missed songs with newly drawn wrong answers.
    ///
    /// Callers pass each song at most once; duplicates produce duplicate questions.
    #[instrument(level = "debug", skip_all, fields(missed = missed.len()))]
    pub fn generate_retake_test(
        &mut self,
        missed: &[MissedQuestion],
    ) -> Result<Vec<Question>, DomainError> {
        missed
            .iter()
            .map(|miss| -> Result<Question, DomainError> {
                let choices = self.shuffled_choices(&miss.song, &miss.correct_answer)?;
                Ok(Question::new(&miss.song, &miss.correct_answer, choices)
                    .with_previous_answer(miss.user_answer.clone()))
            })
            .collect()
    }

    fn shuffled_choices(&mut self, song: &str, correct: &str) -> Result<Vec<String>, DomainError> {
        let pool: Vec<&str> = self
            .index
            .wrong_album_pool(song)
            .into_iter()
            .filter(|album| *album != correct)
            .collect();

        // Sampling three out of fewer than three is undefined, so check first
        if pool.len() < WRONG_CHOICES {
            return Err(DomainError::InsufficientCatalogData(format!(
                "'{song}' has only {} other album(s) to use as wrong answers",
                pool.len()
            )));
        }

        let mut choices: Vec<String> = pool
            .choose_multiple(&mut self.rng, WRONG_CHOICES)
            .map(|album| album.to_string())
            .collect();
        choices.push(correct.to_string());
        choices.shuffle(&mut self.rng);
        Ok(choices)
    }
}

/// Score a list of questions by exact match of answer against correct album
pub fn grade_test(questions: &[Question]) -> TestResult {
    let outcomes: Vec<QuestionOutcome> = questions
        .iter()
        .map(|q| QuestionOutcome {
            song: q.song.clone(),
            user_answer: q.user_answer.clone(),
            correct_answer: q.correct_album.clone(),
            is_correct: q.is_correct().unwrap_or(false),
        })
        .collect();

    let wrong_questions: Vec<MissedQuestion> = outcomes
        .iter()
        .filter(|o| !o.is_correct)
        .map(|o| MissedQuestion {
            song: o.song.clone(),
            user_answer: o.user_answer.clone(),
            correct_answer: o.correct_answer.clone(),
        })
        .collect();

    let total_questions = outcomes.len();
    let correct_count = total_questions - wrong_questions.len();
    let percentage = if total_questions == 0 {
        0.0
    } else {
        correct_count as f64 / total_questions as f64 * 100.0
    };

    TestResult {
        total_questions,
        correct_count,
        percentage,
        outcomes,
        wrong_questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Catalog, Grade};
    use crate::util::testing::{catalog_from, sample_catalog};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn engine(catalog: &Catalog, seed: u64) -> QuizEngine<StdRng> {
        QuizEngine::new(SongIndex::from_catalog(catalog), StdRng::seed_from_u64(seed))
    }

    fn answer_all(questions: &mut [Question], correctly: bool) {
        for q in questions.iter_mut() {
            let index = q
                .choices
                .iter()
                .position(|c| (*c == q.correct_album) == correctly)
                .unwrap();
            q.answer(index).unwrap();
        }
    }

    #[test]
    fn given_four_albums_when_generating_question_then_offers_four_distinct_choices() {
        // Arrange
        let mut engine = engine(&sample_catalog(), 7);

        for _ in 0..200 {
            // Act
            let q = engine.generate_question().unwrap();

            // Assert
            let distinct: HashSet<&String> = q.choices.iter().collect();
            assert_eq!(q.choices.len(), 4);
            assert_eq!(distinct.len(), 4);
            assert_eq!(q.choices.iter().filter(|c| **c == q.correct_album).count(), 1);
        }
    }

    #[test]
    fn given_song_s1_when_building_question_then_offers_a_and_wrong_albums_from_the_rest() {
        let mut engine = engine(&sample_catalog(), 1);

        let q = engine.question_for("s1").unwrap();

        assert_eq!(q.correct_album, "A");
        assert!(q.choices.contains(&"A".to_string()));
        for choice in q.choices.iter().filter(|c| *c != "A") {
            assert!(["B", "C", "D"].contains(&choice.as_str()));
        }
    }

    #[test]
    fn given_many_questions_when_tracking_correct_slot_then_position_is_roughly_uniform() {
        // Arrange
        let catalog = catalog_from(&[
            ("A", &["a1", "a2"]),
            ("B", &["b1"]),
            ("C", &["c1"]),
            ("D", &["d1"]),
            ("E", &["e1"]),
            ("F", &["f1"]),
        ]);
        let mut engine = engine(&catalog, 42);
        let trials = 8000;
        let mut slots = [0usize; 4];

        // Act
        for _ in 0..trials {
            let q = engine.generate_question().unwrap();
            let slot = q.choices.iter().position(|c| *c == q.correct_album).unwrap();
            slots[slot] += 1;
        }

        // Assert: each slot within 15% of the expected 2000
        for count in slots {
            assert!((1700..=2300).contains(&count), "slot counts {slots:?}");
        }
    }

    #[test]
    fn given_enough_songs_when_generating_test_then_returns_distinct_songs() {
        let mut engine = engine(&sample_catalog(), 3);

        let test = engine.generate_test(4).unwrap();

        let songs: HashSet<&str> = test.questions.iter().map(|q| q.song.as_str()).collect();
        assert_eq!(test.questions.len(), 4);
        assert_eq!(songs.len(), 4);
        assert!(!test.was_clamped());
    }

    #[test]
    fn given_request_above_song_count_when_generating_test_then_clamps() {
        let mut engine = engine(&sample_catalog(), 3);

        let test = engine.generate_test(50).unwrap();

        assert_eq!(test.questions.len(), 5);
        assert_eq!(test.requested, 50);
        assert!(test.was_clamped());
    }

    #[test]
    fn given_zero_requested_when_generating_test_then_returns_empty_test() {
        let mut engine = engine(&sample_catalog(), 3);

        let test = engine.generate_test(0).unwrap();

        assert!(test.questions.is_empty());
        assert!(!test.was_clamped());
    }

    #[test]
    fn given_three_albums_when_generating_test_then_fails_fast() {
        let catalog = catalog_from(&[("A", &["a"]), ("B", &["b"]), ("C", &["c"])]);
        let mut engine = engine(&catalog, 3);

        let result = engine.generate_test(5);

        assert!(matches!(result, Err(DomainError::InsufficientCatalogData(_))));
        assert!(matches!(
            engine.generate_question(),
            Err(DomainError::InsufficientCatalogData(_))
        ));
    }

    #[test]
    fn given_albums_without_songs_when_checking_then_reports_no_songs() {
        let catalog = catalog_from(&[("A", &[]), ("B", &[]), ("C", &[]), ("D", &[])]);
        let engine = engine(&catalog, 3);

        let result = engine.check_playable();

        assert_eq!(
            result,
            Err(DomainError::InsufficientCatalogData(
                "the catalog has no songs".to_string()
            ))
        );
    }

    #[test]
    fn given_song_shared_by_albums_when_generating_then_no_owner_is_a_wrong_choice() {
        let catalog = catalog_from(&[
            ("A", &["shared"]),
            ("B", &["shared", "b"]),
            ("C", &["c"]),
            ("D", &["d"]),
            ("E", &["e"]),
        ]);
        let mut engine = engine(&catalog, 9);

        for _ in 0..50 {
            let q = engine.question_for("shared").unwrap();
            assert_eq!(q.correct_album, "A");
            assert!(!q.choices.contains(&"B".to_string()));
        }
    }

    #[test]
    fn given_missed_questions_when_generating_retake_then_keeps_song_answer_and_previous_pick() {
        // Arrange
        let mut engine = engine(&sample_catalog(), 11);
        let missed = vec![MissedQuestion {
            song: "s3".to_string(),
            user_answer: Some("C".to_string()),
            correct_answer: "B".to_string(),
        }];

        // Act
        let retake = engine.generate_retake_test(&missed).unwrap();

        // Assert
        assert_eq!(retake.len(), 1);
        assert_eq!(retake[0].song, "s3");
        assert_eq!(retake[0].correct_album, "B");
        assert_eq!(retake[0].previous_answer.as_deref(), Some("C"));
        assert_eq!(retake[0].choices.len(), 4);
        assert!(retake[0].user_answer.is_none());
    }

    #[test]
    fn given_all_correct_answers_when_grading_then_scores_full_marks() {
        let mut engine = engine(&sample_catalog(), 5);
        let mut questions = engine.generate_test(5).unwrap().questions;
        answer_all(&mut questions, true);

        let result = grade_test(&questions);

        assert_eq!(result.total_questions, 5);
        assert_eq!(result.correct_count, 5);
        assert_eq!(result.percentage, 100.0);
        assert!(result.wrong_questions.is_empty());
        assert_eq!(result.grade(), Grade::APlus);
    }

    #[test]
    fn given_all_wrong_answers_when_grading_then_lists_every_miss() {
        let mut engine = engine(&sample_catalog(), 5);
        let mut questions = engine.generate_test(3).unwrap().questions;
        answer_all(&mut questions, false);

        let result = grade_test(&questions);

        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.wrong_questions.len(), 3);
        assert_eq!(result.grade(), Grade::F);
        for (miss, q) in result.wrong_questions.iter().zip(&questions) {
            assert_eq!(miss.song, q.song);
            assert_eq!(miss.correct_answer, q.correct_album);
            assert_ne!(miss.user_answer.as_deref(), Some(q.correct_album.as_str()));
        }
    }

    #[test]
    fn given_no_questions_when_grading_then_percentage_is_zero() {
        let result = grade_test(&[]);

        assert_eq!(result.total_questions, 0);
        assert_eq!(result.percentage, 0.0);
        assert!(result.outcomes.is_empty());
    }

    #[test]
    fn given_unanswered_question_when_grading_then_counts_as_wrong() {
        let q = Question::new("s1", "A", vec!["A".into(), "B".into(), "C".into(), "D".into()]);

        let result = grade_test(&[q]);

        assert_eq!(result.correct_count, 0);
        assert_eq!(result.wrong_questions[0].user_answer, None);
    }
}
