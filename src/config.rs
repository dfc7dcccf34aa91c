use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Hamming,
    Manhattan,
    Euclidean,
    LinearConflict,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Hamming,
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::LinearConflict,
    ];
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Hamming => write!(f, "hamming"),
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::Euclidean => write!(f, "euclidean"),
            Heuristic::LinearConflict => write!(f, "linear-conflict"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic(pub String);

impl Display for UnknownHeuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown heuristic: {}", self.0)
    }
}

impl Error for UnknownHeuristic {}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .iter()
            .cloned()
            .find(|h| h.to_string() == s)
            .ok_or_else(|| UnknownHeuristic(s.to_owned()))
    }
}

/// Shared flag to stop a running search from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Bounds on a single solve session. The default is unlimited.
#[derive(Debug, Clone, Default)]
pub struct Limits {
    pub max_expanded: Option<usize>,
    pub time_limit: Option<Duration>,
    pub cancel: Option<CancelToken>,
}

impl Limits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn max_expanded(mut self, max: usize) -> Self {
        self.max_expanded = Some(max);
        self
    }

    pub fn time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().map_or(false, CancelToken::is_cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_names() {
        for &h in &Heuristic::ALL {
            assert_eq!(h.to_string().parse::<Heuristic>().unwrap(), h);
        }
        assert_eq!(
            "linear-conflict".parse::<Heuristic>().unwrap(),
            Heuristic::LinearConflict
        );
        assert_eq!(
            "dijkstra".parse::<Heuristic>().unwrap_err(),
            UnknownHeuristic("dijkstra".to_owned())
        );
    }

    #[test]
    fn cancel_token_is_shared() {
        let token = CancelToken::new();
        let limits = Limits::unlimited().cancel_token(token.clone());
        assert!(!limits.is_cancelled());
        token.cancel();
        assert!(limits.is_cancelled());
        assert!(!Limits::unlimited().is_cancelled());
    }
}
