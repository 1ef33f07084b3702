// src/cli/quiz.rs
use crate::application::{DocumentRepository, NotesStore, QuizEngine, QuizSession};
use crate::cli::save_store;
use crate::constants::QUESTION_CHOICES;
use crate::domain::{Catalog, MissedQuestion, NoteBook, Question, RetakeComparison, SongIndex, TestResult};
use crate::ports::console::parse_count;
use crate::ports::{Console, LineSource, TerminalPresenter};
use anyhow::{bail, Result};
use rand::Rng;
use std::io::Write;
use tracing::{debug, info, warn};

/// Run the quiz until the user declines another test.
///
/// Fails before the first prompt when the catalog cannot produce a question.
/// Notes written during retakes are saved on the way out.
pub fn run_quiz<I, O, G, S>(
    console: &mut Console<I, O>,
    catalog: &Catalog,
    notes: &mut NotesStore<S>,
    rng: G,
    max_questions: usize,
) -> Result<()>
where
    I: LineSource,
    O: Write,
    G: Rng,
    S: DocumentRepository<NoteBook>,
{
    if catalog.is_empty() {
        bail!("No album data found. Please check the catalog file.");
    }
    let engine = QuizEngine::new(SongIndex::from_catalog(catalog), rng);
    engine.check_playable()?;

    console.say(format!(
        "Database loaded successfully!\nTotal albums: {}\nTotal songs: {}\n",
        engine.index().album_count(),
        engine.index().song_count()
    ))?;

    let mut shell = QuizShell {
        console,
        catalog,
        notes,
        engine,
        presenter: TerminalPresenter::new(),
        max_questions: max_questions.max(1),
    };
    shell.run()
}

struct QuizShell<'a, I, O, G: Rng, S: DocumentRepository<NoteBook>> {
    console: &'a mut Console<I, O>,
    catalog: &'a Catalog,
    notes: &'a mut NotesStore<S>,
    engine: QuizEngine<G>,
    presenter: TerminalPresenter,
    max_questions: usize,
}

impl<I, O, G, S> QuizShell<'_, I, O, G, S>
where
    I: LineSource,
    O: Write,
    G: Rng,
    S: DocumentRepository<NoteBook>,
{
    fn run(&mut self) -> Result<()> {
        loop {
            self.play_round()?;
            self.console.say(format!("\n{}", self.presenter.rule()))?;
            if !self.console.confirm("Would you like to take another test? (y/n): ")? {
                break;
            }
        }
        self.console.say("\nThanks for playing!")?;
        self.save_notes()
    }

    /// Save notes written during the quiz, offering a retry while saving fails
    fn save_notes(&mut self) -> Result<()> {
        if !self.notes.is_dirty() {
            return Ok(());
        }
        info!("Saving notes written during the quiz");
        while !save_store(self.console, self.notes)? {
            if !self.console.confirm("Retry saving notes? (y/n): ")? {
                warn!("Quiz notes discarded after a failed save");
                return self.console.say("Notes from this session were not saved.");
            }
        }
        Ok(())
    }

    fn play_round(&mut self) -> Result<()> {
        let max = self.max_questions;
        let count = self.console.ask_until(
            &format!("How many questions would you like? (1-{max}): "),
            |reply| parse_count(reply, 1, max),
        )?;

        self.console.say(format!("\nGenerating {count} questions..."))?;
        let test = self.engine.generate_test(count)?;
        if test.was_clamped() {
            self.console.say(format!(
                "You asked for {} but only {} songs can be asked about.",
                test.requested,
                test.questions.len()
            ))?;
        }

        self.console.say(
            "\nTest ready! You will be asked to identify which album each song belongs to.",
        )?;
        self.console.pause("Press Enter to start the test...")?;

        let result = self.take(test.questions, false)?;
        self.console.say(self.presenter.results(&result))?;

        let mut missed = result.wrong_questions;
        while !missed.is_empty() {
            self.console.say(format!("\n{}", self.presenter.rule()))?;
            if !self
                .console
                .confirm("Would you like to retake the questions you got wrong? (y/n): ")?
            {
                break;
            }
            missed = self.retake(&missed)?.wrong_questions;
        }

        self.console.say(format!("\n{}", self.presenter.rule()))?;
        if self.console.confirm("Would you like to review an album? (y/n): ")? {
            self.review_album()?;
        }
        Ok(())
    }

    /// Ask every question in order and grade the answers
    fn take(&mut self, questions: Vec<Question>, is_retake: bool) -> Result<TestResult> {
        let mut session = QuizSession::new(questions);
        while let Some(question) = session.current() {
            self.console
                .say(self.presenter.question(question, session.number()))?;
            let available = question.choices.len();
            let choice = self
                .console
                .choose(&format!("Enter your answer (1-{QUESTION_CHOICES}): "), available)?;

            let answered = session.answer(choice)?;
            if is_retake && answered.is_correct() == Some(true) {
                let song = answered.song.clone();
                let album = answered.correct_album.clone();
                self.offer_note(&song, &album)?;
            }
        }
        let result = session.finish();
        debug!(correct = result.correct_count, total = result.total_questions, "Test graded");
        Ok(result)
    }

    fn retake(&mut self, missed: &[MissedQuestion]) -> Result<TestResult> {
        self.console
            .say(self.presenter.banner("RETAKE QUIZ - WRONG QUESTIONS ONLY"))?;
        self.console.say(format!(
            "You will retake {} questions that you got wrong.\nThis time, the answer choices will be different!",
            missed.len()
        ))?;
        self.console.pause("\nPress Enter to start the retake...")?;

        let questions = self.engine.generate_retake_test(missed)?;
        let result = self.take(questions, true)?;
        let comparison = RetakeComparison::between(missed.len(), &result);
        self.console
            .say(self.presenter.retake_results(&result, comparison))?;
        Ok(result)
    }

    /// After a correct retake answer, show the song's note or offer to write one
    fn offer_note(&mut self, song: &str, album: &str) -> Result<()> {
        self.console.say(format!(
            "\nYou got '{song}' correct! This song belongs to '{album}'."
        ))?;

        if let Some(note) = self.notes.get_note(song).map(str::to_string) {
            return self.console.say(format!("Your note: {note}"));
        }

        if !self
            .console
            .confirm("Would you like to create a note to help remember this? (y/n): ")?
        {
            return Ok(());
        }
        let note = self
            .console
            .ask("Enter your note (to help remember which album this song belongs to): ")?;
        if note.is_empty() {
            return self.console.say("Note creation cancelled.");
        }
        match self.notes.add_note(song, &note) {
            Ok(_) => self.console.say(format!("Note saved for '{song}'!")),
            Err(e) => self.console.say(format!("Could not add note: {e}")),
        }
    }

    fn review_album(&mut self) -> Result<()> {
        let albums = self.catalog.album_names();
        self.console.say(self.presenter.banner("ALBUM REVIEW"))?;
        self.console.say(self.presenter.album_menu(self.catalog))?;

        let index = self.console.choose(
            &format!("\nSelect album to review (1-{}): ", albums.len()),
            albums.len(),
        )?;
        let album = albums[index];
        let songs = self.catalog.songs(album).unwrap_or_default();
        self.console
            .say(self.presenter.album_review(album, songs, self.notes.notes()))?;
        self.console
            .say(format!("\n{}\nAlbum review complete!", self.presenter.rule()))
    }
}
