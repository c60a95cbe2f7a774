use crate::core::{Assignment, ConstraintRegistry, DrawEngine, Pair};
use crate::utils::error::DrawError;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    /// 編輯參加者與情侶
    Setup,
    /// 逐一揭曉中
    Drawing,
    /// 全部揭曉完畢
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    Reveal { index: usize, pair: &'a Pair },
    Finished,
}

#[derive(Debug, Clone)]
struct ActiveDraw {
    assignment: Assignment,
    cursor: usize,
}

/// One Secret Santa session: the registry plus at most one active draw.
///
/// The draw is computed in full by [`Session::start_draw`]; afterwards only
/// the cursor moves.
#[derive(Debug, Clone, Default)]
pub struct Session {
    registry: ConstraintRegistry,
    active: Option<ActiveDraw>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: ConstraintRegistry) -> Self {
        Self {
            registry,
            active: None,
        }
    }

    pub fn registry(&self) -> &ConstraintRegistry {
        &self.registry
    }

    /// Editing the roster discards any active draw, its assignment would be stale.
    pub fn registry_mut(&mut self) -> &mut ConstraintRegistry {
        if self.active.take().is_some() {
            tracing::debug!("Roster edited, active draw discarded");
        }
        &mut self.registry
    }

    pub fn phase(&self) -> DrawPhase {
        match &self.active {
            None => DrawPhase::Setup,
            Some(draw) if draw.cursor < draw.assignment.len() => DrawPhase::Drawing,
            Some(_) => DrawPhase::Results,
        }
    }

    /// 執行完整抽籤並回傳第一組配對；失敗時維持在 Setup 階段
    pub fn start_draw<R: Rng>(&mut self, engine: &mut DrawEngine<R>) -> Result<&Pair, DrawError> {
        self.active = None;
        let assignment = engine.draw(self.registry.participants(), &self.registry)?;
        let draw = self.active.insert(ActiveDraw {
            assignment,
            cursor: 0,
        });

        // MIN_PARTICIPANTS >= 2 guarantees a first pair
        draw.assignment
            .pair_at(0)
            .ok_or(DrawError::InsufficientParticipants {
                required: crate::core::draw::MIN_PARTICIPANTS,
                found: 0,
            })
    }

    /// Same participants, fresh assignment.
    pub fn redraw<R: Rng>(&mut self, engine: &mut DrawEngine<R>) -> Result<&Pair, DrawError> {
        tracing::info!("Starting a new draw with the same participants");
        self.start_draw(engine)
    }

    pub fn advance(&mut self) -> Step<'_> {
        let Some(draw) = self.active.as_mut() else {
            return Step::Finished;
        };

        if draw.cursor < draw.assignment.len() {
            draw.cursor += 1;
        }

        match draw.assignment.pair_at(draw.cursor) {
            Some(pair) => Step::Reveal {
                index: draw.cursor,
                pair,
            },
            None => Step::Finished,
        }
    }

    pub fn current(&self) -> Option<&Pair> {
        self.active
            .as_ref()
            .and_then(|draw| draw.assignment.pair_at(draw.cursor))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.active.as_ref().map(|draw| draw.cursor)
    }

    /// 到目前為止已揭曉的配對（包含目前這一組）
    pub fn revealed(&self) -> &[Pair] {
        match &self.active {
            Some(draw) => {
                let end = (draw.cursor + 1).min(draw.assignment.len());
                &draw.assignment.pairs()[..end]
            }
            None => &[],
        }
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        self.active.as_ref().map(|draw| &draw.assignment)
    }

    pub fn restart(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session_with(names: &[&str]) -> Session {
        let mut registry = ConstraintRegistry::new();
        for name in names {
            registry.add_participant(name);
        }
        Session::with_registry(registry)
    }

    fn engine() -> DrawEngine<ChaCha8Rng> {
        DrawEngine::with_rng(ChaCha8Rng::seed_from_u64(2024))
    }

    #[test]
    fn test_phase_transitions() {
        let mut session = session_with(&["A", "B", "C"]);
        assert_eq!(session.phase(), DrawPhase::Setup);

        let first = session.start_draw(&mut engine()).unwrap().clone();
        assert_eq!(session.phase(), DrawPhase::Drawing);
        assert_eq!(session.current(), Some(&first));
        assert_eq!(session.revealed().len(), 1);

        assert!(matches!(session.advance(), Step::Reveal { index: 1, .. }));
        assert!(matches!(session.advance(), Step::Reveal { index: 2, .. }));
        assert_eq!(session.revealed().len(), 3);
        assert_eq!(session.phase(), DrawPhase::Drawing);

        assert_eq!(session.advance(), Step::Finished);
        assert_eq!(session.phase(), DrawPhase::Results);
        assert_eq!(session.current(), None);
        assert_eq!(session.revealed().len(), 3);

        // stays exhausted
        assert_eq!(session.advance(), Step::Finished);
        assert_eq!(session.cursor(), Some(3));
    }

    #[test]
    fn test_failed_draw_stays_in_setup() {
        let mut session = session_with(&["A"]);
        assert!(session.start_draw(&mut engine()).is_err());
        assert_eq!(session.phase(), DrawPhase::Setup);
        assert!(session.assignment().is_none());
        assert_eq!(session.advance(), Step::Finished);
    }

    #[test]
    fn test_restart_discards_draw() {
        let mut session = session_with(&["A", "B"]);
        session.start_draw(&mut engine()).unwrap();
        session.restart();

        assert_eq!(session.phase(), DrawPhase::Setup);
        assert!(session.revealed().is_empty());
    }

    #[test]
    fn test_editing_roster_discards_draw() {
        let mut session = session_with(&["A", "B", "C"]);
        session.start_draw(&mut engine()).unwrap();

        session.registry_mut().add_participant("D");
        assert_eq!(session.phase(), DrawPhase::Setup);
        assert_eq!(session.registry().participant_count(), 4);
    }

    #[test]
    fn test_redraw_resets_cursor() {
        let mut session = session_with(&["A", "B", "C", "D"]);
        let mut engine = engine();
        session.start_draw(&mut engine).unwrap();
        session.advance();
        session.advance();

        session.redraw(&mut engine).unwrap();
        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.assignment().map(Assignment::len), Some(4));
    }
}
