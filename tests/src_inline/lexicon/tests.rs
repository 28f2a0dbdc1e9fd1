use super::*;

#[test]
fn test_builtin_category_order() {
    let set = CategoryKeywordSet::builtin();
    let names: Vec<&str> = set.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Name",
            "Age",
            "Class/School",
            "Family",
            "Hobbies",
            "Goal",
            "Unique Point"
        ]
    );
}

#[test]
fn test_category_matches_substring() {
    let set = CategoryKeywordSet::builtin();
    let goal = &set.categories[5];
    assert!(goal.matches("i want to become a pilot"));
    assert!(goal.matches("my ambitions are big"));
    assert!(!goal.matches("nothing relevant"));
}

#[test]
fn test_filler_exact_match_only() {
    let fillers = FillerLexicon::builtin();
    assert!(fillers.contains("um"));
    assert!(fillers.contains("okay"));
    assert!(!fillers.contains("umm"));
    assert!(!fillers.contains("Um"));
}

#[test]
fn test_multi_word_fillers_listed() {
    let fillers = FillerLexicon::builtin();
    let multi: Vec<&str> = fillers.multi_word_entries().collect();
    assert_eq!(multi, vec!["you know", "i mean", "sort of"]);
}

#[test]
fn test_keyword_set_serializes_as_list() {
    let set = CategoryKeywordSet {
        categories: vec![KeywordCategory {
            name: "Pets".to_string(),
            triggers: vec!["dog".to_string()],
        }],
    };
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"[{"name":"Pets","triggers":["dog"]}]"#);
}
