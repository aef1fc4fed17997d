use proptest::prelude::*;
use scaffold_agents::movies::{Movie, MovieCatalog};
use scaffold_agents::{builtin_registry, movies};
use scaffold_core::InvocationToolContext;
use serde_json::json;
use std::sync::Arc;

const GENRES: [&str; 5] = ["Sci-Fi", "Drama", "Action", "Comedy", "Family"];

fn arb_movie() -> impl Strategy<Value = Movie> {
    (
        "[A-Z][a-z]{2,8}",
        1950u16..2030,
        proptest::sample::subsequence(GENRES.to_vec(), 1..=3),
        "[a-z ]{0,30}",
    )
        .prop_map(|(title, year, genres, synopsis)| Movie {
            title,
            year,
            genres: genres.into_iter().map(String::from).collect(),
            synopsis,
        })
}

fn arb_catalog() -> impl Strategy<Value = Vec<Movie>> {
    proptest::collection::vec(arb_movie(), 1..12).prop_map(|mut movies| {
        // Titles are unique in a real catalog.
        let mut seen = std::collections::HashSet::new();
        movies.retain(|m| seen.insert(m.title.to_lowercase()));
        movies
    })
}

proptest! {
    #[test]
    fn search_results_are_bounded_and_in_catalog_order(
        movies in arb_catalog(),
        query in "[a-z-]{1,6}",
        max_results in 0usize..6,
    ) {
        let catalog = MovieCatalog::new(movies.clone());
        let results = catalog.search(&query, max_results).unwrap();
        prop_assert!(results.len() <= max_results);

        let positions: Vec<usize> = results
            .iter()
            .map(|r| movies.iter().position(|m| m == r).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn recommendations_share_a_genre_and_are_ranked(
        movies in arb_catalog(),
        pick in any::<prop::sample::Index>(),
    ) {
        let catalog = MovieCatalog::new(movies.clone());
        let target = &movies[pick.index(movies.len())];
        let results = catalog.recommend_similar(&target.title, usize::MAX).unwrap();

        let score = |m: &Movie| m.genres.iter().filter(|g| target.genres.contains(g)).count();
        for m in &results {
            prop_assert_ne!(&m.title, &target.title);
            prop_assert!(score(m) > 0);
        }
        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(score(a) > score(b) || (score(a) == score(b) && a.year >= b.year));
        }
    }
}

#[tokio::test]
async fn movie_tools_return_envelopes() {
    let registry = builtin_registry().unwrap();
    let ctx = Arc::new(InvocationToolContext::new(movies::AGENT_NAME));

    let search = registry.find_tool(movies::APP_NAME, "search_movies").unwrap();
    let found = search.execute(ctx.clone(), json!({"query": "sci-fi"})).await.unwrap();
    assert_eq!(found["status"], "success");
    let titles: Vec<&str> =
        found["results"].as_array().unwrap().iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Inception", "The Matrix", "Interstellar"]);

    let empty = search.execute(ctx.clone(), json!({"query": ""})).await.unwrap();
    assert_eq!(empty, json!({"status": "error", "error_message": "Empty query provided."}));

    let recommend = registry.find_tool(movies::APP_NAME, "recommend_similar").unwrap();
    let similar = recommend
        .execute(ctx.clone(), json!({"title": "Inception", "max_results": 1}))
        .await
        .unwrap();
    assert_eq!(similar["results"][0]["title"], "Interstellar");

    let bad = recommend.execute(ctx.clone(), json!({"title": 42})).await;
    assert!(bad.is_err());
}

#[tokio::test]
async fn movie_tools_require_their_text_argument() {
    let registry = builtin_registry().unwrap();
    let ctx = Arc::new(InvocationToolContext::new(movies::AGENT_NAME));

    let search = registry.find_tool(movies::APP_NAME, "search_movies").unwrap();
    let err = search.execute(ctx.clone(), json!({"max_results": 2})).await.unwrap_err();
    assert!(err.to_string().contains("missing field `query`"), "{err}");

    let recommend = registry.find_tool(movies::APP_NAME, "recommend_similar").unwrap();
    let err = recommend.execute(ctx, serde_json::Value::Null).await.unwrap_err();
    assert!(err.to_string().contains("missing field `title`"), "{err}");
}
