use std::path::PathBuf;

use clap::Parser;

/// Huddle: drive a session bridge from a script of user actions and
/// runtime events.
#[derive(Parser, Debug)]
#[command(name = "huddle", version, about)]
pub struct Args {
    /// Script to run, one JSON step per line.
    #[arg(short, long)]
    pub script: PathBuf,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (an `EnvFilter` directive, e.g. `debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Room to join instead of the configured one.
    #[arg(long)]
    pub room: Option<String>,

    /// User to join as instead of the configured one.
    #[arg(long)]
    pub user: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_is_required() {
        assert!(Args::try_parse_from(["huddle"]).is_err());
    }

    #[test]
    fn overrides_parse() {
        let args = Args::try_parse_from([
            "huddle",
            "--script",
            "demo.jsonl",
            "--room",
            "standup",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.script, PathBuf::from("demo.jsonl"));
        assert_eq!(args.room.as_deref(), Some("standup"));
        assert_eq!(args.user, None);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
