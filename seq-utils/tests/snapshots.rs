use insta::assert_debug_snapshot;
use seq_utils::{compact_by, filter, map, try_map};

#[derive(Debug, Clone)]
struct User {
    name: &'static str,
    team: &'static str,
}

fn users() -> Vec<User> {
    vec![
        User {
            name: "Aloïs",
            team: "core",
        },
        User {
            name: "Creekorful",
            team: "web",
        },
        User {
            name: "Dana",
            team: "core",
        },
        User {
            name: "Eli",
            team: "ops",
        },
    ]
}

#[test]
fn test_compact_by_team() {
    assert_debug_snapshot!(
        "compact_by_team",
        compact_by(&users(), |a, b| a.team == b.team)
    );
}

#[test]
fn test_filter_then_map() {
    let core = filter(&users(), |u| u.team == "core");
    assert_debug_snapshot!("filter_then_map", map(&core, |u| u.name));
}

#[test]
fn test_try_map_error() {
    let parsed: Result<Vec<u16>, std::num::ParseIntError> =
        try_map(&["10", "200", "70000", "abc"], |s| s.parse());
    assert_debug_snapshot!("try_map_error", parsed);
}
