//! Utility Function Tests

use block_codegen::util::{dash_case_to_pascal_case, Version};

#[test]
fn should_pascal_case_dash_segments() {
    assert_eq!(
        dash_case_to_pascal_case("my-plugin-my-block"),
        "MyPluginMyBlock"
    );
}

#[test]
fn should_capitalize_a_single_segment() {
    assert_eq!(dash_case_to_pascal_case("cover"), "Cover");
}

#[test]
fn should_handle_digits_after_dashes() {
    assert_eq!(dash_case_to_pascal_case("my-block-2col"), "MyBlock2col");
}

#[test]
fn should_collapse_repeated_dashes() {
    assert_eq!(dash_case_to_pascal_case("a--b"), "AB");
}

#[test]
fn should_return_empty_for_empty_input() {
    assert_eq!(dash_case_to_pascal_case(""), "");
}

#[test]
fn should_split_version_parts() {
    let version = Version::new("1.2.3");

    assert_eq!(version.full, "1.2.3");
    assert_eq!(version.major, "1");
    assert_eq!(version.minor, "2");
    assert_eq!(version.patch, "3");
}

#[test]
fn should_keep_prerelease_suffix_in_patch() {
    let version = Version::new("0.1.0-beta.1");

    assert_eq!(version.patch, "0-beta.1");
}
