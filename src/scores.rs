/// How many entries the board keeps.
pub const HIGH_SCORE_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub score: usize,
}

/// Best scores of this run, highest first. Lives in memory only.
#[derive(Debug, Clone)]
pub struct HighScores {
    player: String,
    entries: Vec<Entry>,
}

impl HighScores {
    pub fn new(player: &str) -> Self {
        HighScores { player: player.to_string(), entries: vec![] }
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    /// Records a finished game for the current player. Equal scores keep the
    /// order they were made in. Returns the rank (1-based) if it made the board.
    pub fn record(&mut self, score: usize) -> Option<usize> {
        let idx = self.entries.iter().position(|e| e.score < score).unwrap_or(self.entries.len());
        if idx >= HIGH_SCORE_LIMIT {
            return None;
        }

        self.entries.insert(idx, Entry { name: self.player.clone(), score });
        self.entries.truncate(HIGH_SCORE_LIMIT);
        Some(idx + 1)
    }

    pub fn top(&self) -> &[Entry] {
        &self.entries
    }

    pub fn best(&self) -> Option<usize> {
        self.entries.first().map(|e| e.score)
    }

    /// One line per entry, ready to print: `" 1. name   12"`.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().enumerate()
            .map(|(i, e)| format!("{:>2}. {:<12} {:>4}", i + 1, e.name, e.score))
            .collect()
    }
}
