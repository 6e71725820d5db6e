use buildcfg_fs::NormalizedPath;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_join_and_display() {
    let root = NormalizedPath::new("/projects/lib");
    assert_eq!(root.join("tsup.config.ts").as_str(), "/projects/lib/tsup.config.ts");
    assert_eq!(
        NormalizedPath::new("/projects/lib/").join("package.json").to_string(),
        "/projects/lib/package.json"
    );
}

#[test]
fn test_backslashes_are_normalized() {
    let path = NormalizedPath::new("C:\\work\\lib\\build.config.ts");
    assert_eq!(path.as_str(), "C:/work/lib/build.config.ts");
}

#[rstest]
#[case("/work/lib", "configs/custom.json", "/work/lib/configs/custom.json")]
#[case("/work/lib", "./custom.json", "/work/lib/custom.json")]
#[case("/work/lib", "../shared/custom.json", "/work/shared/custom.json")]
#[case("/work/lib", "/etc/custom.json", "/etc/custom.json")]
fn test_resolve_relative_to_base(
    #[case] base: &str,
    #[case] candidate: &str,
    #[case] expected: &str,
) {
    #[cfg(unix)]
    assert_eq!(NormalizedPath::resolve(base, candidate).as_str(), expected);
    #[cfg(not(unix))]
    let _ = (base, candidate, expected);
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("/work/lib/package.json");
    assert_eq!(path.parent().unwrap().as_str(), "/work/lib");
    assert_eq!(NormalizedPath::new("/package.json").parent().unwrap().as_str(), "/");
    assert!(NormalizedPath::new("package.json").parent().is_none());
}

proptest! {
    #[test]
    fn test_normalized_paths_never_contain_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
    }
}
