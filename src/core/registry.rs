use crate::core::{Couple, ForbiddenPairs};

/// 參加者與情侶限制的登記表
///
/// Invalid or duplicate input is silently ignored; the mutators report
/// whether anything changed instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintRegistry {
    participants: Vec<String>,
    couples: Vec<Couple>,
}

impl ConstraintRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` (trimmed) unless it is empty or already registered.
    pub fn add_participant(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains_participant(name) {
            tracing::debug!("Ignoring participant '{}'", name);
            return false;
        }

        self.participants.push(name.to_string());
        true
    }

    /// Removes `name` together with every couple it belongs to.
    pub fn remove_participant(&mut self, name: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != name);
        if self.participants.len() == before {
            return false;
        }

        let couples_before = self.couples.len();
        self.couples.retain(|c| !c.contains(name));
        let dropped = couples_before - self.couples.len();
        if dropped > 0 {
            tracing::debug!("Removed {} couple(s) involving '{}'", dropped, name);
        }
        true
    }

    pub fn add_couple(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        if !self.contains_participant(a) || !self.contains_participant(b) {
            tracing::debug!("Ignoring couple {} / {}: unknown participant", a, b);
            return false;
        }
        if self.is_forbidden(a, b) {
            return false;
        }

        self.couples.push(Couple::new(a, b));
        true
    }

    /// 依加入順序移除情侶，超出範圍時不做任何事
    pub fn remove_couple(&mut self, index: usize) -> Option<Couple> {
        if index < self.couples.len() {
            Some(self.couples.remove(index))
        } else {
            None
        }
    }

    pub fn is_forbidden(&self, a: &str, b: &str) -> bool {
        self.couples.iter().any(|c| c.matches(a, b))
    }

    pub fn contains_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn couples(&self) -> &[Couple] {
        &self.couples
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn couple_count(&self) -> usize {
        self.couples.len()
    }

    pub fn can_draw(&self) -> bool {
        self.participants.len() >= crate::core::draw::MIN_PARTICIPANTS
    }
}

impl ForbiddenPairs for ConstraintRegistry {
    fn is_forbidden(&self, a: &str, b: &str) -> bool {
        ConstraintRegistry::is_forbidden(self, a, b)
    }
}
