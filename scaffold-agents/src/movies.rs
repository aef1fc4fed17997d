//! Movie search and recommendation agent backed by a small in-memory catalog.

use crate::ToolResponse;
use schemars::JsonSchema;
use scaffold_core::{AgentDefinition, ModelRef, Result};
use scaffold_tool::{FunctionTool, parse_args};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

pub const APP_NAME: &str = "movie-tool-agent";
pub const AGENT_NAME: &str = "movie_recommender_agent";
pub const DEFAULT_MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Movie {
    pub title: String,
    pub year: u16,
    pub genres: Vec<String>,
    pub synopsis: String,
}

impl Movie {
    fn new(title: &str, year: u16, genres: &[&str], synopsis: &str) -> Self {
        Self {
            title: title.to_string(),
            year,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            synopsis: synopsis.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Empty query provided.")]
    EmptyQuery,

    #[error("Empty title provided.")]
    EmptyTitle,

    #[error("Movie titled '{0}' not found.")]
    NotFound(String),
}

#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
}

impl MovieCatalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// The five-title catalog the agent ships with.
    pub fn sample() -> Self {
        Self::new(vec![
            Movie::new(
                "Inception",
                2010,
                &["Sci-Fi", "Thriller"],
                "A thief who steals corporate secrets through dream-sharing technology.",
            ),
            Movie::new(
                "The Matrix",
                1999,
                &["Sci-Fi", "Action"],
                "A computer hacker learns about the true nature of his reality.",
            ),
            Movie::new(
                "Interstellar",
                2014,
                &["Sci-Fi", "Drama"],
                "A team travels through a wormhole to ensure humanity's survival.",
            ),
            Movie::new(
                "Toy Story",
                1995,
                &["Animation", "Family", "Comedy"],
                "Toys come to life when humans aren't around.",
            ),
            Movie::new(
                "The Shawshank Redemption",
                1994,
                &["Drama"],
                "Two imprisoned men bond over years, finding solace and eventual redemption.",
            ),
        ])
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Case-insensitive substring search over title and synopsis. When no
    /// movie matches by text, falls back to an exact (case-insensitive)
    /// genre match. Results keep catalog order.
    pub fn search(&self, query: &str, max_results: usize) -> std::result::Result<Vec<Movie>, CatalogError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Err(CatalogError::EmptyQuery);
        }

        let mut matches: Vec<&Movie> = self
            .movies
            .iter()
            .filter(|m| {
                m.title.to_lowercase().contains(&query) || m.synopsis.to_lowercase().contains(&query)
            })
            .collect();

        if matches.is_empty() {
            matches = self
                .movies
                .iter()
                .filter(|m| m.genres.iter().any(|g| g.to_lowercase() == query))
                .collect();
        }

        Ok(matches.into_iter().take(max_results).cloned().collect())
    }

    /// Movies sharing at least one genre with `title`, ranked by number of
    /// shared genres, then by release year (newest first).
    pub fn recommend_similar(
        &self,
        title: &str,
        max_results: usize,
    ) -> std::result::Result<Vec<Movie>, CatalogError> {
        let wanted = title.trim().to_lowercase();
        if wanted.is_empty() {
            return Err(CatalogError::EmptyTitle);
        }

        let target = self
            .movies
            .iter()
            .find(|m| m.title.to_lowercase() == wanted)
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))?;

        let target_genres: HashSet<&str> = target.genres.iter().map(String::as_str).collect();

        let mut scored: Vec<(usize, &Movie)> = self
            .movies
            .iter()
            .filter(|m| m.title != target.title)
            .map(|m| {
                let shared = m.genres.iter().filter(|g| target_genres.contains(g.as_str())).count();
                (shared, m)
            })
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b.cmp(score_a).then_with(|| b.year.cmp(&a.year))
        });

        Ok(scored.into_iter().take(max_results).map(|(_, m)| m.clone()).collect())
    }
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchMoviesArgs {
    /// Text to look for in titles and synopses, or a genre name.
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RecommendSimilarArgs {
    /// Exact title of a movie in the catalog.
    pub title: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

pub fn search_movies_tool(catalog: Arc<MovieCatalog>) -> FunctionTool {
    FunctionTool::new(
        "search_movies",
        "Search for movies by title or synopsis (case-insensitive), falling back to genre.",
        move |_ctx, args| {
            let catalog = catalog.clone();
            async move {
                let args: SearchMoviesArgs = parse_args("search_movies", args)?;
                ToolResponse::from_result(catalog.search(&args.query, args.max_results)).into_value()
            }
        },
    )
    .with_parameters_schema::<SearchMoviesArgs>()
}

pub fn recommend_similar_tool(catalog: Arc<MovieCatalog>) -> FunctionTool {
    FunctionTool::new(
        "recommend_similar",
        "Recommend movies similar to a title based on overlapping genres.",
        move |_ctx, args| {
            let catalog = catalog.clone();
            async move {
                let args: RecommendSimilarArgs = parse_args("recommend_similar", args)?;
                ToolResponse::from_result(catalog.recommend_similar(&args.title, args.max_results))
                    .into_value()
            }
        },
    )
    .with_parameters_schema::<RecommendSimilarArgs>()
}

pub fn agent() -> Result<AgentDefinition> {
    agent_with_catalog(Arc::new(MovieCatalog::sample()))
}

pub fn agent_with_catalog(catalog: Arc<MovieCatalog>) -> Result<AgentDefinition> {
    AgentDefinition::builder(AGENT_NAME)
        .model(ModelRef::gemini("gemini-2.0-flash"))
        .description("A simple movie search and recommendation agent.")
        .instruction(
            "Use the provided tools to search for movies and to recommend similar movies. \
             Tools: search_movies(query), recommend_similar(title).",
        )
        .tool(Arc::new(search_movies_tool(catalog.clone())))
        .tool(Arc::new(recommend_similar_tool(catalog)))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_search_by_genre_fallback() {
        let catalog = MovieCatalog::sample();
        let results = catalog.search("sci-fi", DEFAULT_MAX_RESULTS).unwrap();
        assert_eq!(titles(&results), vec!["Inception", "The Matrix", "Interstellar"]);

        let results = catalog.search("SCI-FI", DEFAULT_MAX_RESULTS).unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_search_by_text() {
        let catalog = MovieCatalog::sample();
        assert_eq!(titles(&catalog.search("matrix", 5).unwrap()), vec!["The Matrix"]);
        // "drama" appears in no title or synopsis, so the genre fallback applies.
        assert_eq!(
            titles(&catalog.search(" Drama ", 5).unwrap()),
            vec!["Interstellar", "The Shawshank Redemption"]
        );
        assert_eq!(titles(&catalog.search("the", 2).unwrap()).len(), 2);
    }

    #[test]
    fn test_search_text_match_wins_over_genre() {
        let catalog = MovieCatalog::sample();
        // "action" never appears in text; "toys" only in Toy Story's synopsis.
        assert_eq!(titles(&catalog.search("toys", 5).unwrap()), vec!["Toy Story"]);
        assert_eq!(titles(&catalog.search("action", 5).unwrap()), vec!["The Matrix"]);
    }

    #[test]
    fn test_search_empty_query_is_error() {
        let catalog = MovieCatalog::sample();
        assert_eq!(catalog.search("", 5), Err(CatalogError::EmptyQuery));
        assert_eq!(catalog.search("   ", 5), Err(CatalogError::EmptyQuery));
        assert!(catalog.search("western", 5).unwrap().is_empty());
    }

    #[test]
    fn test_recommend_similar_to_inception() {
        let catalog = MovieCatalog::sample();
        let results = catalog.recommend_similar("Inception", DEFAULT_MAX_RESULTS).unwrap();
        assert_eq!(titles(&results), vec!["Interstellar", "The Matrix"]);
    }

    #[test]
    fn test_recommend_ranks_by_score_then_year() {
        let catalog = MovieCatalog::new(vec![
            Movie::new("Target", 2000, &["A", "B"], ""),
            Movie::new("One Old", 1990, &["A"], ""),
            Movie::new("Two", 1980, &["A", "B"], ""),
            Movie::new("One New", 2020, &["B"], ""),
            Movie::new("None", 2021, &["C"], ""),
        ]);
        let results = catalog.recommend_similar("target", 5).unwrap();
        assert_eq!(titles(&results), vec!["Two", "One New", "One Old"]);
        assert_eq!(titles(&catalog.recommend_similar("Target", 1).unwrap()), vec!["Two"]);
    }

    #[test]
    fn test_recommend_errors() {
        let catalog = MovieCatalog::sample();
        assert_eq!(catalog.recommend_similar("", 5), Err(CatalogError::EmptyTitle));
        let err = catalog.recommend_similar("Up", 5).unwrap_err();
        assert_eq!(err.to_string(), "Movie titled 'Up' not found.");
    }

    #[test]
    fn test_agent_definition() {
        let agent = agent().unwrap();
        assert_eq!(agent.name(), AGENT_NAME);
        assert_eq!(agent.model().model_id(), "gemini-2.0-flash");
        assert!(agent.find_tool("search_movies").is_some());
        assert!(agent.find_tool("recommend_similar").is_some());
        let schema = agent.find_tool("search_movies").unwrap().parameters_schema().unwrap();
        assert!(schema["properties"]["query"].is_object());
        assert_eq!(schema["required"], serde_json::json!(["query"]));
        let schema = agent.find_tool("recommend_similar").unwrap().parameters_schema().unwrap();
        assert_eq!(schema["required"], serde_json::json!(["title"]));
    }
}
