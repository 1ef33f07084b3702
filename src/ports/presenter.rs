// src/ports/presenter.rs
use crate::constants::RULE_WIDTH;
use crate::domain::{Catalog, NoteBook, Question, QuestionOutcome, RetakeComparison, TestResult};
use crate::util::text::count_noun;
use std::fmt::Write;

/// Renders quiz and catalog data as plain terminal text
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn rule(&self) -> String {
        "=".repeat(RULE_WIDTH)
    }

    /// Title framed by separator lines, preceded by a blank line
    pub fn banner(&self, title: &str) -> String {
        format!("\n{rule}\n{title}\n{rule}", rule = self.rule())
    }

    pub fn question(&self, question: &Question, number: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n{}", self.rule());
        let _ = writeln!(out, "Question {number}:");
        let _ = writeln!(out, "Which album does the song '{}' belong to?", question.song);
        if let Some(previous) = &question.previous_answer {
            let _ = writeln!(out, "You previously answered: {previous}");
        }
        let _ = writeln!(out);
        for (i, choice) in question.choices.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, choice);
        }
        out.push_str(&self.rule());
        out
    }

    fn score_lines(&self, result: &TestResult) -> String {
        format!(
            "Score: {}/{}\nPercentage: {:.1}%",
            result.correct_count, result.total_questions, result.percentage
        )
    }

    fn outcome_lines(&self, outcomes: &[QuestionOutcome]) -> String {
        let mut out = String::new();
        for (i, outcome) in outcomes.iter().enumerate() {
            let answer = outcome.user_answer.as_deref().unwrap_or("(no answer)");
            let _ = writeln!(out, "\n{}. {}", i + 1, outcome.song);
            let _ = writeln!(out, "   Your answer: {answer}");
            if !outcome.is_correct {
                let _ = writeln!(out, "   Correct answer: {}", outcome.correct_answer);
            }
            let status = if outcome.is_correct { "✓ CORRECT" } else { "✗ WRONG" };
            let _ = writeln!(out, "   Status: {status}");
        }
        out.trim_end().to_string()
    }

    /// Score, grade and per-question breakdown of a finished test
    pub fn results(&self, result: &TestResult) -> String {
        let mut out = self.banner("TEST RESULTS");
        let _ = write!(out, "\n{}\nGrade: {}", self.score_lines(result), result.grade());
        if result.missed_count() > 0 {
            let _ = write!(
                out,
                "\n\nYou got {} wrong.\nYou can retake the test with only the questions you missed!",
                count_noun(result.missed_count(), "question")
            );
        }
        out.push('\n');
        out.push_str(&self.banner("DETAILED RESULTS"));
        out.push('\n');
        out.push_str(&self.outcome_lines(&result.outcomes));
        out
    }

    pub fn retake_results(&self, result: &TestResult, comparison: RetakeComparison) -> String {
        let mut out = self.banner("RETAKE RESULTS");
        let _ = write!(out, "\n{}\n", self.score_lines(result));
        let verdict = match comparison {
            RetakeComparison::Improved(n) => {
                format!("You improved on {}!", count_noun(n, "question"))
            }
            RetakeComparison::Unchanged => {
                "You got the same number of questions wrong.".to_string()
            }
            RetakeComparison::Regressed(n) => {
                format!("You got {} more wrong this time.", count_noun(n, "question"))
            }
        };
        out.push_str(&verdict);
        out.push('\n');
        out.push_str(&self.banner("RETAKE DETAILED RESULTS"));
        out.push('\n');
        out.push_str(&self.outcome_lines(&result.outcomes));
        out
    }

    /// Every album with its numbered songs
    pub fn catalog(&self, catalog: &Catalog) -> String {
        let mut out = self.banner("CURRENT DATABASE");
        if catalog.is_empty() {
            out.push_str("\nNo albums in database.");
            return out;
        }
        for (album, songs) in catalog.albums() {
            let _ = write!(out, "\n\n{} ({}):", album, count_noun(songs.len(), "song"));
            for (i, song) in songs.iter().enumerate() {
                let _ = write!(out, "\n   {:2}. {}", i + 1, song);
            }
        }
        out
    }

    /// Numbered album names with song counts, for picking one
    pub fn album_menu(&self, catalog: &Catalog) -> String {
        let mut out = String::from("Available albums:");
        for (i, (album, songs)) in catalog.albums().enumerate() {
            let _ = write!(out, "\n{}. {} ({})", i + 1, album, count_noun(songs.len(), "song"));
        }
        out
    }

    /// Numbered list of every song with the album it sits in
    pub fn song_menu(&self, entries: &[(&str, &str)]) -> String {
        let mut out = String::from("All songs in database:");
        for (i, (song, album)) in entries.iter().enumerate() {
            let _ = write!(out, "\n{:2}. {} (from {})", i + 1, song, album);
        }
        out
    }

    /// An album's songs, each followed by its note when there is one
    pub fn album_review(&self, album: &str, songs: &[String], notes: &NoteBook) -> String {
        let mut out = self.banner(&format!("{} - {}", album, count_noun(songs.len(), "song")));
        for (i, song) in songs.iter().enumerate() {
            match notes.get_note(song) {
                Some(note) => {
                    let _ = write!(out, "\n{:2}. {} | note: {}", i + 1, song, note);
                }
                None => {
                    let _ = write!(out, "\n{:2}. {}", i + 1, song);
                }
            }
        }
        out
    }

    pub fn note_list(&self, notes: &[(&str, &str)]) -> String {
        let mut out = String::new();
        for (i, (song, note)) in notes.iter().enumerate() {
            let _ = write!(out, "\n{}. Song: {}\n   Note: {}", i + 1, song, note);
        }
        out
    }

    pub fn numbered(&self, heading: &str, items: &[&str]) -> String {
        let mut out = heading.to_string();
        for (i, item) in items.iter().enumerate() {
            let _ = write!(out, "\n{}. {}", i + 1, item);
        }
        out
    }
}
