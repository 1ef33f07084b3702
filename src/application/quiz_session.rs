// src/application/quiz_session.rs
use crate::application::quiz_engine::grade_test;
use crate::domain::{DomainError, Question, TestResult};

/// One pass through a list of questions, answered in order
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            position: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 1-based number of the question waiting for an answer
    pub fn number(&self) -> usize {
        self.position + 1
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.questions.len()
    }

    /// Answer the current question with a zero-based choice index and move on.
    /// Returns the answered question.
    pub fn answer(&mut self, choice: usize) -> Result<&Question, DomainError> {
        let index = self.position;
        let question = self
            .questions
            .get_mut(index)
            .ok_or_else(|| DomainError::InvalidChoice {
                choice: choice + 1,
                available: 0,
            })?;
        question.answer(choice)?;
        self.position += 1;
        Ok(&self.questions[index])
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn finish(self) -> TestResult {
        grade_test(&self.questions)
    }
}
