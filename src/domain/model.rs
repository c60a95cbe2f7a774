use serde::{Deserialize, Serialize};
use std::fmt;

/// 一對不能互相抽到的參加者（無順序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couple {
    pub first: String,
    pub second: String,
}

impl Couple {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }

    /// Order-independent match.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

impl fmt::Display for Couple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub giver: String,
    pub receiver: String,
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.giver, self.receiver)
    }
}

/// 一次完成的抽籤結果：涵蓋所有參加者的單一循環
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pairs: Vec<Pair>,
}

impl Assignment {
    /// Builds the cycle `order[i] -> order[(i + 1) % n]`.
    pub(crate) fn from_cycle(order: &[String]) -> Self {
        let n = order.len();
        let pairs = (0..n)
            .map(|i| Pair {
                giver: order[i].clone(),
                receiver: order[(i + 1) % n].clone(),
            })
            .collect();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pair_at(&self, index: usize) -> Option<&Pair> {
        self.pairs.get(index)
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
