use recipe_browser::{FileStore, KeyValueStore, Likes};

fn session(dir: &std::path::Path) -> Likes {
    let mut likes = Likes::new(Box::new(FileStore::new(dir)), "likes");
    likes.read_storage();
    likes
}

#[test]
fn test_like_and_unlike_across_restarts() {
    let dir = tempfile::tempdir().unwrap();

    let mut likes = session(dir.path());
    let created = likes.add_like("42", "Pizza Dip", "Closet Cooking", "pizza.jpg");
    assert_eq!(created.id, "42");

    let mut likes = session(dir.path());
    assert!(likes.is_liked("42"));
    assert_eq!(likes.num_likes(), 1);

    likes.delete_like("42");
    let likes = session(dir.path());
    assert!(!likes.is_liked("42"));
}

#[test]
fn test_stored_as_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let mut likes = session(dir.path());
    likes.add_like("1", "Soup", "Mom", "soup.jpg");
    likes.add_like("2", "Bread", "Dad", "bread.jpg");

    let raw = FileStore::new(dir.path()).get("likes").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["id"], "1");
    assert_eq!(array[1]["title"], "Bread");
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("likes.json"), "definitely not json").unwrap();

    let mut likes = session(dir.path());
    assert_eq!(likes.num_likes(), 0);

    // The next like overwrites the corrupt data
    likes.add_like("5", "Stew", "", "");
    let likes = session(dir.path());
    assert!(likes.is_liked("5"));
}
