use stamp::error::Error;
use stamp::ignore::{default_exclusion_patterns, normalize_separators, ExclusionSet};

#[test]
fn test_recursive_pattern_matches_top_level() {
    let set = ExclusionSet::new(["**/*.meta"]).unwrap();

    assert!(set.is_excluded("a.meta"));
    assert!(set.is_excluded("Assets/a.meta"));
    assert!(!set.is_excluded("b.txt"));
}

#[test]
fn test_suffix_pattern_is_anchored() {
    let set = ExclusionSet::new(["*.DotSettings.user"]).unwrap();

    assert!(set.is_excluded("Foo.DotSettings.user"));
    assert!(!set.is_excluded("Foo.DotSettings"));
}

#[test]
fn test_star_crosses_separators() {
    let set = ExclusionSet::new(["*.sln"]).unwrap();

    assert!(set.is_excluded("Game.sln"));
    assert!(set.is_excluded("nested/Game.sln"));
}

#[test]
fn test_directory_prefixed_pattern_uses_full_path() {
    let set = ExclusionSet::new(["docs/*.md"]).unwrap();

    assert!(set.is_excluded("docs/intro.md"));
    assert!(!set.is_excluded("intro.md"));
}

#[test]
fn test_windows_separators_are_normalized() {
    assert_eq!(normalize_separators(r"Assets\Scenes\a.meta"), "Assets/Scenes/a.meta");

    let set = ExclusionSet::new([r"docs\*.md"]).unwrap();
    assert!(set.is_excluded(r"docs\intro.md"));
    assert!(set.is_excluded("docs/intro.md"));
}

#[test]
fn test_matching_pattern_reports_first_match() {
    let set = ExclusionSet::new(["*.DotSettings.user", "*.user", "*.sln"]).unwrap();

    assert_eq!(set.matching_pattern("Foo.DotSettings.user"), Some("*.DotSettings.user"));
    assert_eq!(set.matching_pattern("local.user"), Some("*.user"));
    assert_eq!(set.matching_pattern("README.md"), None);
}

#[test]
fn test_default_patterns() {
    let set = ExclusionSet::new(default_exclusion_patterns()).unwrap();
    assert_eq!(set.patterns().len(), 16);

    for excluded in [
        ".DS_Store",
        "Thumbs.db",
        "Assembly-CSharp.csproj",
        "Game.sln",
        "Game.sln.DotSettings",
        "Game.sln.DotSettings.user",
        "README.md.meta",
        ".git",
    ] {
        assert!(set.is_excluded(excluded), "{excluded} should be excluded");
    }

    for kept in [".gitignore", ".editorconfig", "README.md", "package.json"] {
        assert!(!set.is_excluded(kept), "{kept} should be kept");
    }
}

#[test]
fn test_empty_set_excludes_nothing() {
    let set = ExclusionSet::new(Vec::<String>::new()).unwrap();
    assert!(set.is_empty());
    assert!(!set.is_excluded("anything"));
}

#[test]
fn test_invalid_pattern_is_reported() {
    let err = ExclusionSet::new(["*.meta", "[unclosed"]).unwrap_err();
    match err {
        Error::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
        other => panic!("Expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn test_case_sensitivity() {
    let sensitive = ExclusionSet::new(["*.SLN"]).unwrap();
    assert!(!sensitive.is_excluded("Game.sln"));

    let insensitive = ExclusionSet::with_case(["*.SLN", "**/thumbs.db"], true).unwrap();
    assert!(insensitive.is_excluded("Game.sln"));
    assert!(insensitive.is_excluded("Thumbs.db"));
    assert_eq!(insensitive.matching_pattern("GAME.Sln"), Some("*.SLN"));
}
