// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! A line-oriented command language for driving a [`Feed`].
//!
//! ```text
//! # blank lines and comments are skipped
//! post 1 5           # user 1 posts item 5
//! follow 2 1         # user 2 follows user 1
//! unfollow 2 1
//! feed 2             # prints item ids, newest first
//! timeline 1         # prints user 1's item ids, oldest first
//! followees 2        # prints sorted user ids
//! followers 1
//! ```
//!
//! Mutating commands produce no output; queries produce one [`Output`] line.

use std::fmt;

use crate::error::ScriptError;
use crate::feed::Feed;
use crate::id::ItemId;
use crate::id::UserId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Post { user: UserId, item: ItemId },
    Follow { follower: UserId, followee: UserId },
    Unfollow { follower: UserId, followee: UserId },
    Feed { user: UserId },
    Timeline { user: UserId },
    Followees { user: UserId },
    Followers { user: UserId },
}

/// Splits one line into words and hands out typed arguments.
struct Args<'a> {
    line: usize,
    command: &'static str,
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn int<T: std::str::FromStr>(&mut self, argument: &'static str) -> Result<T, ScriptError> {
        let word = self.words.next().ok_or(ScriptError::MissingArgument {
            line: self.line,
            command: self.command,
            argument,
        })?;
        return word.parse().map_err(|_| ScriptError::InvalidInteger {
            line: self.line,
            argument,
            value: word.to_string(),
        });
    }

    fn finish(mut self) -> Result<(), ScriptError> {
        return match self.words.next() {
            Some(word) => Err(ScriptError::TrailingArgument {
                line: self.line,
                command: self.command,
                value: word.to_string(),
            }),
            None => Ok(()),
        };
    }
}

impl Command {
    /// Parse one line. Returns `Ok(None)` for blank and comment lines.
    ///
    /// `line` is the 1-based line number used in errors.
    pub fn parse(text: &str, line: usize) -> Result<Option<Command>, ScriptError> {
        let text = match text.find('#') {
            Some(start) => &text[..start],
            None => text,
        };
        let mut words = text.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };

        let command: &'static str = match name {
            "post" => "post",
            "follow" => "follow",
            "unfollow" => "unfollow",
            "feed" => "feed",
            "timeline" => "timeline",
            "followees" => "followees",
            "followers" => "followers",
            _ => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: name.to_string(),
                });
            }
        };
        let mut args = Args {
            line,
            command,
            words,
        };

        let parsed = match command {
            "post" => Command::Post {
                user: args.int("user")?,
                item: args.int("item")?,
            },
            "follow" => Command::Follow {
                follower: args.int("follower")?,
                followee: args.int("followee")?,
            },
            "unfollow" => Command::Unfollow {
                follower: args.int("follower")?,
                followee: args.int("followee")?,
            },
            "feed" => Command::Feed { user: args.int("user")? },
            "timeline" => Command::Timeline { user: args.int("user")? },
            "followees" => Command::Followees { user: args.int("user")? },
            _ => Command::Followers { user: args.int("user")? },
        };
        args.finish()?;
        return Ok(Some(parsed));
    }
}

/// The result of a query command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Items(Vec<ItemId>),
    Users(Vec<UserId>),
}

impl fmt::Display for Output {
    /// Space-separated ids; an empty result is an empty line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, ids: &[T]) -> fmt::Result {
            for (i, id) in ids.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{id}")?;
            }
            return Ok(());
        }

        return match self {
            Output::Items(items) => join(f, items),
            Output::Users(users) => join(f, users),
        };
    }
}

/// Apply one command to `feed`.
pub fn run(feed: &mut Feed, command: &Command) -> Option<Output> {
    return match *command {
        Command::Post { user, item } => {
            feed.post(user, item);
            None
        }
        Command::Follow { follower, followee } => {
            feed.follow(follower, followee);
            None
        }
        Command::Unfollow { follower, followee } => {
            feed.unfollow(follower, followee);
            None
        }
        Command::Feed { user } => Some(Output::Items(feed.feed(user))),
        Command::Timeline { user } => Some(Output::Items(
            feed.timeline_of(user).iter().map(|item| item.id).collect(),
        )),
        Command::Followees { user } => {
            let mut users: Vec<UserId> = feed.followees_of(user).collect();
            users.sort_unstable();
            Some(Output::Users(users))
        }
        Command::Followers { user } => {
            let mut users: Vec<UserId> = feed.followers_of(user).collect();
            users.sort_unstable();
            Some(Output::Users(users))
        }
    };
}

/// A parsed script: every non-blank line as a command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    /// Parse a whole script, stopping at the first bad line.
    pub fn parse(text: &str) -> Result<Script, ScriptError> {
        let mut commands = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if let Some(command) = Command::parse(line, index + 1)? {
                commands.push(command);
            }
        }
        return Ok(Script { commands });
    }

    pub fn commands(&self) -> &[Command] {
        return &self.commands;
    }

    /// Run every command against `feed`, collecting query outputs in order.
    pub fn run(&self, feed: &mut Feed) -> Vec<Output> {
        return self.commands.iter().filter_map(|command| run(feed, command)).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_each_command() {
        assert_eq!(
            Command::parse("post 1 5", 1),
            Ok(Some(Command::Post {
                user: UserId(1),
                item: ItemId(5)
            }))
        );
        assert_eq!(
            Command::parse("  follow   2 -1 ", 1),
            Ok(Some(Command::Follow {
                follower: UserId(2),
                followee: UserId(-1)
            }))
        );
        assert_eq!(
            Command::parse("unfollow 2 1", 1),
            Ok(Some(Command::Unfollow {
                follower: UserId(2),
                followee: UserId(1)
            }))
        );
        assert_eq!(Command::parse("feed 7", 1), Ok(Some(Command::Feed { user: UserId(7) })));
        assert_eq!(
            Command::parse("timeline 7", 1),
            Ok(Some(Command::Timeline { user: UserId(7) }))
        );
        assert_eq!(
            Command::parse("followees 7", 1),
            Ok(Some(Command::Followees { user: UserId(7) }))
        );
        assert_eq!(
            Command::parse("followers 7", 1),
            Ok(Some(Command::Followers { user: UserId(7) }))
        );
    }

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(Command::parse("", 1), Ok(None));
        assert_eq!(Command::parse("   \t", 1), Ok(None));
        assert_eq!(Command::parse("# just a note", 1), Ok(None));
        assert_eq!(
            Command::parse("feed 3 # trailing note", 1),
            Ok(Some(Command::Feed { user: UserId(3) }))
        );
    }

    #[test]
    fn parse_errors_carry_line() {
        assert_eq!(
            Command::parse("tweet 1 2", 4),
            Err(ScriptError::UnknownCommand {
                line: 4,
                command: "tweet".to_string()
            })
        );
        assert_eq!(
            Command::parse("post 1", 5),
            Err(ScriptError::MissingArgument {
                line: 5,
                command: "post",
                argument: "item"
            })
        );
        assert_eq!(
            Command::parse("feed x", 6),
            Err(ScriptError::InvalidInteger {
                line: 6,
                argument: "user",
                value: "x".to_string()
            })
        );
        assert_eq!(
            Command::parse("feed 1 2", 7),
            Err(ScriptError::TrailingArgument {
                line: 7,
                command: "feed",
                value: "2".to_string()
            })
        );
        assert_eq!(Command::parse("feed", 8).unwrap_err().line(), 8);
    }

    #[test]
    fn output_formatting() {
        assert_eq!(Output::Items(vec![ItemId(3), ItemId(5)]).to_string(), "3 5");
        assert_eq!(Output::Users(vec![UserId(-2)]).to_string(), "-2");
        assert_eq!(Output::Items(Vec::new()).to_string(), "");
    }

    #[test]
    fn script_runs_in_order() {
        let script = Script::parse(
            "post 1 101\n\
             follow 2 1\n\
             post 2 201\n\
             feed 2\n\
             followees 2\n\
             followers 1\n\
             timeline 2\n",
        )
        .unwrap();
        assert_eq!(script.commands().len(), 7);

        let mut feed = Feed::new();
        let outputs = script.run(&mut feed);
        assert_eq!(
            outputs,
            vec![
                Output::Items(vec![ItemId(201), ItemId(101)]),
                Output::Users(vec![UserId(1)]),
                Output::Users(vec![UserId(2)]),
                Output::Items(vec![ItemId(201)]),
            ]
        );
    }

    #[test]
    fn script_stops_at_first_error() {
        let err = Script::parse("post 1 1\nbogus\nfeed x\n").unwrap_err();
        assert_eq!(err.line(), 2);
    }
}
