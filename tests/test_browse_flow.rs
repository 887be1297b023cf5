use mockito::Matcher;
use recipe_browser::{
    control_like, control_list, control_recipe, control_search, control_servings, BrowserError,
    LikeToggle, MemoryStore, RecipeBrowser, ServingsDirection, Unit,
};

const SEARCH_BODY: &str = r#"{
    "count": 3,
    "recipes": [
        {"publisher": "101 Cookbooks", "title": "Best Pizza Dough Ever", "recipe_id": "47746", "image_url": "http://example.com/1.jpg"},
        {"publisher": "Closet Cooking", "title": "Pizza Dip", "recipe_id": "35477", "image_url": "http://example.com/2.jpg"},
        {"publisher": "The Pioneer Woman", "title": "Deep Dish Fruit Pizza", "recipe_id": "46956", "image_url": "http://example.com/3.jpg"}
    ]
}"#;

const RECIPE_BODY: &str = r#"{
    "recipe": {
        "publisher": "101 Cookbooks",
        "title": "Best Pizza Dough Ever",
        "recipe_id": "47746",
        "image_url": "http://example.com/1.jpg",
        "source_url": "http://www.101cookbooks.com/archives/001199.html",
        "servings": 4,
        "ingredients": [
            "4 1/2 cups (20.25 ounces) unbleached high-gluten, bread, or all-purpose flour, chilled",
            "1 3/4 teaspoons salt",
            "1 teaspoon instant yeast",
            "1/4 cup olive oil (optional)",
            "1 3/4 cups water, ice cold (40F)",
            "Semolina flour OR cornmeal for dusting"
        ]
    }
}"#;

fn browser_for(server: &mockito::ServerGuard, store: MemoryStore) -> RecipeBrowser {
    RecipeBrowser::builder()
        .base_url(server.url())
        .store(Box::new(store))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_search_results_match_reported_count() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), "pizza".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEARCH_BODY)
        .create_async()
        .await;

    let mut browser = browser_for(&server, MemoryStore::new());
    let search = control_search(&mut browser.state, browser.api.as_ref(), "pizza")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(search.results.len(), 3);
    assert_eq!(search.results[1].title, "Pizza Dip");
    assert_eq!(search.results[1].author, "Closet Cooking");
}

#[tokio::test]
async fn test_search_failure_is_network_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(400)
        .create_async()
        .await;

    let mut browser = browser_for(&server, MemoryStore::new());
    let result = control_search(&mut browser.state, browser.api.as_ref(), "pizza").await;

    assert!(matches!(result, Err(BrowserError::NetworkError(_))));
    assert!(browser.state.search.is_none());
}

#[tokio::test]
async fn test_open_scale_list_and_like() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/get")
        .match_query(Matcher::UrlEncoded("rId".into(), "47746".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RECIPE_BODY)
        .create_async()
        .await;

    let store = MemoryStore::new();
    let mut browser = browser_for(&server, store.clone());

    let (recipe, liked) = control_recipe(&mut browser.state, browser.api.as_ref(), "47746")
        .await
        .unwrap();
    assert!(!liked);
    assert_eq!(recipe.time_minutes(), 90);
    assert_eq!(recipe.servings(), 4);
    assert_eq!(recipe.ingredients[0].count, Some(4.5));
    assert_eq!(recipe.ingredients[0].unit, Some(Unit::Cup));
    assert_eq!(recipe.ingredients[3].count, Some(0.25));
    assert_eq!(recipe.ingredients[5].count, None);

    // 4 -> 6 servings
    control_servings(&mut browser.state, ServingsDirection::Increment).unwrap();
    control_servings(&mut browser.state, ServingsDirection::Increment).unwrap();
    let recipe = browser.state.recipe.as_ref().unwrap();
    assert_eq!(recipe.ingredients[0].count, Some(6.75));
    assert_eq!(recipe.ingredients[0].display_count().as_deref(), Some("6 3/4"));

    let added = control_list(&mut browser.state).unwrap();
    assert_eq!(added.len(), 6);
    assert_eq!(added[1].unit, Some(Unit::Tsp));

    let toggle = control_like(&mut browser.state).unwrap();
    assert!(matches!(toggle, LikeToggle::Liked(_)));

    // A new session over the same storage sees the like
    let again = browser_for(&server, store);
    assert!(again.state.likes.is_liked("47746"));
}

#[tokio::test]
async fn test_open_unknown_recipe() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/get")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let mut browser = browser_for(&server, MemoryStore::new());
    let result = control_recipe(&mut browser.state, browser.api.as_ref(), "999").await;

    assert!(matches!(result, Err(BrowserError::NotFoundError(_))));
    assert!(browser.state.recipe.is_none());
}
