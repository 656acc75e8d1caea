// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Tests for the script command language.

use chirp::Feed;
use chirp::FeedConfig;
use chirp::ScriptError;
use chirp::script::Script;

fn run(text: &str) -> Vec<String> {
    let mut feed = Feed::new();
    let script = Script::parse(text).unwrap();
    return script.run(&mut feed).iter().map(|output| output.to_string()).collect();
}

#[test]
fn scenario_script() {
    let output = run("
        # user 1 posts twice
        post 1 5
        post 1 3
        feed 1

        post 1 101
        follow 2 1
        post 2 201
        feed 2
    ");
    assert_eq!(output, vec!["3 5", "201 101 3 5"]);
}

#[test]
fn unfollowed_feed_prints_empty_line() {
    let output = run("follow 1 2\nunfollow 1 2\npost 2 99\nfeed 1\n");
    assert_eq!(output, vec![""]);
}

#[test]
fn graph_queries_are_sorted() {
    let output = run("
        follow 1 9
        follow 1 4
        follow 1 6
        follow 7 4
        follow 1 1
        followees 1
        followers 4
        followees 5
    ");
    assert_eq!(output, vec!["4 6 9", "1 7", ""]);
}

#[test]
fn timeline_is_oldest_first() {
    let output = run("post 3 1\npost 3 2\npost 4 9\npost 3 3\ntimeline 3\n");
    assert_eq!(output, vec!["1 2 3"]);
}

#[test]
fn configured_feed_len_applies() {
    let mut feed = Feed::with_config(FeedConfig::new(3)).unwrap();
    let script = Script::parse("post 1 1\npost 1 2\npost 1 3\npost 1 4\nfeed 1\n").unwrap();
    let output: Vec<String> = script.run(&mut feed).iter().map(|o| o.to_string()).collect();
    assert_eq!(output, vec!["4 3 2"]);
}

#[test]
fn parse_error_reports_line() {
    let err = Script::parse("post 1 1\n\n# ok\nfollow 1\n").unwrap_err();
    assert_eq!(
        err,
        ScriptError::MissingArgument {
            line: 4,
            command: "follow",
            argument: "followee"
        }
    );
    assert_eq!(err.to_string(), "line 4: `follow` is missing its followee argument");
}
