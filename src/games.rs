//! Game Catalog
//!
//! In-memory catalog of game pages with title search.
//!
//! The catalog is built once at startup and only read afterwards, so search
//! is a plain linear scan over the entries. Matching is a case-insensitive
//! substring test on the game name; an empty (or whitespace-only) query
//! returns no results rather than the whole catalog.

use serde::{Deserialize, Serialize};

/// A single game page entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    /// Display name, searched against
    pub name: String,
    /// Server-relative page URL
    pub url: String,
}

impl GameEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Immutable catalog of game entries
#[derive(Debug, Clone)]
pub struct GameCatalog {
    games: Vec<GameEntry>,
}

/// The built-in game listing, (name, page slug) pairs.
const BUILTIN_GAMES: &[(&str, &str)] = &[
    ("3 Slices", "3Slices"),
    ("3 Slices 2", "3Slices2"),
    ("2048", "2048"),
    ("Achievement Unlocked", "AchievementUnlocked"),
    ("Antbuster", "Antbuster"),
    ("Awesome Planes", "AwesomePlanes"),
    ("Awesome Tanks", "AwesomeTanks"),
    ("Awesome Tanks 2", "AwesomeTanks2"),
    ("Big FLAPPY Tower VS Tiny Square", "BigFLAPPYTowerVSTinySquare"),
    ("Big ICE Tower Tiny Square", "BigICETowerTinySquare"),
    ("Big NEON Tower VS Tiny Square", "BigNEONTowerVSTinySquare"),
    ("Big Tower Tiny Square", "BigTowerTinySquare"),
    ("Big Tower Tiny Square 2", "BigTowerTinySquare2"),
    ("Bloons Tower Defense", "BTD"),
    ("Bloons Tower Defense 2", "BTD2"),
    ("Bloons Tower Defense 3", "BTD3"),
    ("Connect 4", "Connect4"),
    ("Cookie Clicker", "CookieClicker"),
    ("Escape Road", "EscapeRoad"),
    ("Five Nights at Winston's", "FiveNightsAtWinstons"),
    ("Google Snake", "GoogleSnake"),
    ("Hong Kong 97", "HongKong97"),
    ("Learn to Fly", "LearnToFly"),
    ("Learn to Fly 2", "LearnToFly2"),
    ("Learn to Fly 3", "LearnToFly3"),
    ("Minecraft Classic", "MinecraftClassic"),
    ("Moo Moo", "MooMoo"),
    ("n-gon", "n-gon"),
    ("New Super Mario Bros.", "NewSuperMarioBros"),
    ("Pac-Man", "Pac-Man"),
    ("Quick, Draw!", "QuickDrawWithGoogle"),
    ("Run 3", "Run3"),
    ("Shell Shockers", "ShellShockers"),
    ("Slope", "Slope"),
    ("Smash Karts", "SmashKarts"),
    ("Tetris", "Tetris"),
    ("Wordle+", "Wordle+"),
];

impl GameCatalog {
    /// Build the catalog that ships with the site
    pub fn builtin() -> Self {
        let games = BUILTIN_GAMES
            .iter()
            .map(|(name, slug)| GameEntry::new(*name, format!("/games/{}.html", slug)))
            .collect();

        Self { games }
    }

    /// Build a catalog from explicit entries
    pub fn from_entries(games: Vec<GameEntry>) -> Self {
        Self { games }
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Iterate over all entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &GameEntry> {
        self.games.iter()
    }

    /// Search the catalog by name.
    ///
    /// The query is trimmed and lowercased; an empty query yields no
    /// matches. Otherwise every entry whose lowercased name contains the
    /// query is returned, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&GameEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.games
            .iter()
            .filter(|game| game.name.to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_populated() {
        let catalog = GameCatalog::builtin();
        assert_eq!(catalog.len(), 37);
        assert!(catalog.iter().all(|g| g.url.starts_with("/games/")));
    }

    #[test]
    fn test_search_slope_returns_exactly_slope() {
        let catalog = GameCatalog::builtin();
        let matches = catalog.search("slope");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Slope");
        assert_eq!(matches[0].url, "/games/Slope.html");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = GameCatalog::builtin();
        let matches = catalog.search("TOWER");
        assert!(matches.len() >= 5);
        assert!(matches.iter().any(|g| g.name == "Big Tower Tiny Square"));
        assert!(matches.iter().any(|g| g.name == "Bloons Tower Defense"));
    }

    #[test]
    fn test_empty_query_clears_results() {
        let catalog = GameCatalog::builtin();
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = GameCatalog::builtin();
        assert!(catalog.search("definitely not a game").is_empty());
    }
}
