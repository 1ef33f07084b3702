// src/domain/question.rs
use crate::domain::DomainError;
use std::fmt;

/// One multiple-choice item: which album does `song` belong to?
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub song: String,
    pub correct_album: String,
    /// Shuffled choices, the correct album among them exactly once
    pub choices: Vec<String>,
    pub user_answer: Option<String>,
    /// Wrong answer from an earlier attempt, shown during a retake
    pub previous_answer: Option<String>,
}

impl Question {
    pub fn new(song: impl Into<String>, correct_album: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            song: song.into(),
            correct_album: correct_album.into(),
            choices,
            user_answer: None,
            previous_answer: None,
        }
    }

    pub fn with_previous_answer(mut self, previous: Option<String>) -> Self {
        self.previous_answer = previous;
        self
    }

    /// `None` until answered
    pub fn is_correct(&self) -> Option<bool> {
        self.user_answer
            .as_ref()
            .map(|answer| *answer == self.correct_album)
    }

    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }

    /// Record the answer at zero-based `index` into [`Question::choices`]
    pub fn answer(&mut self, index: usize) -> Result<&str, DomainError> {
        if self.is_answered() {
            return Err(DomainError::AlreadyAnswered(self.song.clone()));
        }
        let choice = self
            .choices
            .get(index)
            .ok_or(DomainError::InvalidChoice {
                choice: index + 1,
                available: self.choices.len(),
            })?
            .clone();
        Ok(self.user_answer.insert(choice).as_str())
    }
}

/// Graded view of a single question
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionOutcome {
    pub song: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// A missed question, kept so it can be retaken
#[derive(Debug, Clone, PartialEq)]
pub struct MissedQuestion {
    pub song: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    pub total_questions: usize,
    pub correct_count: usize,
    pub percentage: f64,
    pub outcomes: Vec<QuestionOutcome>,
    pub wrong_questions: Vec<MissedQuestion>,
}

impl TestResult {
    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage)
    }

    pub fn missed_count(&self) -> usize {
        self.wrong_questions.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Inclusive lower bounds: 90, 80, 70, 60, 50
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::APlus
        } else if percentage >= 80.0 {
            Grade::A
        } else if percentage >= 70.0 {
            Grade::B
        } else if percentage >= 60.0 {
            Grade::C
        } else if percentage >= 50.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// How a retake went compared to the attempt it was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetakeComparison {
    Improved(usize),
    Unchanged,
    Regressed(usize),
}

impl RetakeComparison {
    pub fn between(originally_missed: usize, retake: &TestResult) -> Self {
        let still_missed = retake.missed_count();
        if still_missed < originally_missed {
            RetakeComparison::Improved(originally_missed - still_missed)
        } else if still_missed == originally_missed {
            RetakeComparison::Unchanged
        } else {
            RetakeComparison::Regressed(still_missed - originally_missed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(
            "Secret",
            "Still Fantasy",
            vec![
                "Jay".to_string(),
                "Still Fantasy".to_string(),
                "Fantasy".to_string(),
                "Ye Hui Mei".to_string(),
            ],
        )
    }

    #[test]
    fn given_unanswered_question_when_checking_then_correctness_is_unknown() {
        let q = question();

        assert_eq!(q.is_correct(), None);
        assert!(!q.is_answered());
    }

    #[test]
    fn given_correct_index_when_answering_then_marks_correct() {
        let mut q = question();

        let picked = q.answer(1).unwrap().to_string();

        assert_eq!(picked, "Still Fantasy");
        assert_eq!(q.is_correct(), Some(true));
    }

    #[test]
    fn given_out_of_range_index_when_answering_then_rejects() {
        let mut q = question();

        let result = q.answer(4);

        assert_eq!(
            result,
            Err(DomainError::InvalidChoice {
                choice: 5,
                available: 4
            })
        );
        assert!(!q.is_answered());
    }

    #[test]
    fn given_answered_question_when_answering_again_then_rejects() {
        let mut q = question();
        q.answer(0).unwrap();

        let result = q.answer(1);

        assert_eq!(result, Err(DomainError::AlreadyAnswered("Secret".to_string())));
        assert_eq!(q.is_correct(), Some(false));
    }

    #[test]
    fn given_percentages_on_boundaries_when_grading_then_uses_inclusive_lower_bounds() {
        assert_eq!(Grade::from_percentage(100.0), Grade::APlus);
        assert_eq!(Grade::from_percentage(90.0), Grade::APlus);
        assert_eq!(Grade::from_percentage(89.9), Grade::A);
        assert_eq!(Grade::from_percentage(80.0), Grade::A);
        assert_eq!(Grade::from_percentage(70.0), Grade::B);
        assert_eq!(Grade::from_percentage(60.0), Grade::C);
        assert_eq!(Grade::from_percentage(50.0), Grade::D);
        assert_eq!(Grade::from_percentage(49.99), Grade::F);
        assert_eq!(Grade::from_percentage(0.0), Grade::F);
    }

    #[test]
    fn given_grade_when_displaying_then_prints_letter() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(Grade::F.to_string(), "F");
    }

    #[test]
    fn given_retake_results_when_comparing_then_reports_direction() {
        let result = |missed: usize| TestResult {
            total_questions: 3,
            correct_count: 3 - missed,
            percentage: 0.0,
            outcomes: vec![],
            wrong_questions: (0..missed)
                .map(|i| MissedQuestion {
                    song: format!("s{i}"),
                    user_answer: None,
                    correct_answer: "A".to_string(),
                })
                .collect(),
        };

        assert_eq!(RetakeComparison::between(3, &result(1)), RetakeComparison::Improved(2));
        assert_eq!(RetakeComparison::between(1, &result(1)), RetakeComparison::Unchanged);
        assert_eq!(RetakeComparison::between(1, &result(3)), RetakeComparison::Regressed(2));
    }
}
