use crate::app::i18n::Language;
use crate::core::{Assignment, Confirm, DrawEngine, Pair, Renderer, Session, Step};
use crate::utils::error::{DrawError, Result, SantaError};
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Duration;

/// 終端機顯示，所有文字來自選定語言的文字表
pub struct TerminalRenderer<W: Write> {
    out: W,
    language: Language,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, language: Language) -> Self {
        Self { out, language }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn show_step(&mut self, index: usize, pair: &Pair, is_last: bool) -> Result<()> {
        let messages = self.language.messages();
        if index == 0 {
            writeln!(self.out, "🎲 {} : {}", messages.first_draw, pair.giver)?;
        } else {
            writeln!(self.out, "👉 {}", pair.giver)?;
        }
        writeln!(self.out, "🎁 {} : {}", messages.gives_to, pair.receiver)?;

        let next = if is_last {
            messages.see_results
        } else {
            messages.draw_next
        };
        writeln!(self.out, "   [{}]", next)?;
        Ok(())
    }

    fn show_results(&mut self, assignment: &Assignment) -> Result<()> {
        writeln!(self.out, "{}", self.language.messages().results_title)?;
        for pair in assignment {
            writeln!(self.out, "  {} 🎁 {}", pair.giver, pair.receiver)?;
        }
        Ok(())
    }

    fn show_error(&mut self, error: &SantaError) -> Result<()> {
        let messages = self.language.messages();
        let text = match error {
            SantaError::DrawError(DrawError::InsufficientParticipants { .. }) => {
                messages.too_few_participants.to_string()
            }
            SantaError::DrawError(DrawError::NoValidAssignment { .. }) => {
                messages.no_valid_draw.to_string()
            }
            other => other.user_friendly_message(),
        };
        writeln!(self.out, "❌ {}", text)?;
        Ok(())
    }
}

/// 讀取 y/n 回答，空白或讀到結尾視為否
pub struct StdinConfirm<I: BufRead, W: Write> {
    input: I,
    prompt_out: W,
}

impl<I: BufRead, W: Write> StdinConfirm<I, W> {
    pub fn new(input: I, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<I: BufRead, W: Write> Confirm for StdinConfirm<I, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.prompt_out, "{} [y/N] ", question)?;
        self.prompt_out.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        let answer = answer.trim().to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes" | "o" | "oui"))
    }
}

/// Answers every prompt the same way, for batch runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        tracing::debug!("Auto-answering '{}' with {}", question, self.0);
        Ok(self.0)
    }
}

/// Reveals an already computed draw one pair at a time with a suspense delay.
pub struct RevealLoop<'a, R: Renderer> {
    renderer: &'a mut R,
    delay: Duration,
}

impl<'a, R: Renderer> RevealLoop<'a, R> {
    pub fn new(renderer: &'a mut R, delay: Duration) -> Self {
        Self { renderer, delay }
    }

    pub async fn run(&mut self, session: &mut Session) -> Result<()> {
        let total = session.assignment().map(Assignment::len).unwrap_or(0);
        let (index, first) = match (session.cursor(), session.current()) {
            (Some(index), Some(pair)) => (index, pair.clone()),
            _ => {
                return Err(SantaError::ValidationError {
                    message: "No draw in progress to reveal".to_string(),
                })
            }
        };
        self.renderer.show_step(index, &first, index + 1 == total)?;

        loop {
            self.pause().await;
            match session.advance() {
                Step::Reveal { index, pair } => {
                    tracing::debug!("Revealing pair {}/{}", index + 1, total);
                    self.renderer.show_step(index, pair, index + 1 == total)?;
                }
                Step::Finished => break,
            }
        }

        if let Some(assignment) = session.assignment() {
            self.renderer.show_results(assignment)?;
        }
        Ok(())
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Drives one or more draws over a session: draw, reveal, offer a new draw,
/// then offer to discard the result.
///
/// Returns `None` when the user restarts, the session is then back in setup.
pub struct DrawFlow {
    pub language: Language,
    pub reveal_delay: Duration,
    pub reveal: bool,
}

impl DrawFlow {
    pub async fn run<G: Rng, R: Renderer, C: Confirm>(
        &self,
        session: &mut Session,
        engine: &mut DrawEngine<G>,
        renderer: &mut R,
        confirm: &mut C,
    ) -> Result<Option<Assignment>> {
        let messages = self.language.messages();

        if let Err(e) = session.start_draw(engine) {
            let err = SantaError::from(e);
            renderer.show_error(&err)?;
            return Err(err);
        }

        loop {
            if self.reveal {
                RevealLoop::new(renderer, self.reveal_delay)
                    .run(session)
                    .await?;
            } else if let Some(assignment) = session.assignment() {
                renderer.show_results(assignment)?;
            }

            if !confirm.confirm(messages.confirm_new_draw)? {
                break;
            }

            if let Err(e) = session.redraw(engine) {
                let err = SantaError::from(e);
                renderer.show_error(&err)?;
                return Err(err);
            }
        }

        if confirm.confirm(messages.confirm_restart)? {
            tracing::info!("Draw discarded, back to setup");
            session.restart();
            return Ok(None);
        }

        session
            .assignment()
            .cloned()
            .map(Some)
            .ok_or_else(|| SantaError::ValidationError {
                message: "Draw finished without an assignment".to_string(),
            })
    }
}
