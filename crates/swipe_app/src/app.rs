use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{bail, Context};
use swipe_core::{DeckConfig, DeckStatus, Direction, ItemId};
use swipe_engine::{load_catalog, load_script, replay, DeckEvent, DeckSession};
use swipe_logging::swipe_info;

use crate::config::load_deck_config;
use crate::logging::LogDestination;

/// Upper bound on how long an interactive command may animate.
const SETTLE_LIMIT_MS: f32 = 5_000.0;

pub(crate) const USAGE: &str = "usage: swipe_app <catalog.json> [--script <steps.json>] \
[--config <deck.ron>] [--log file|terminal|both] [--verbose]";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Options {
    pub catalog: PathBuf,
    pub script: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub log: LogDestination,
    pub verbose: bool,
}

pub(crate) fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Options> {
    let mut catalog = None;
    let mut script = None;
    let mut config = None;
    let mut log = LogDestination::File;
    let mut verbose = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--script" => script = Some(PathBuf::from(value_for(&mut args, "--script")?)),
            "--config" => config = Some(PathBuf::from(value_for(&mut args, "--config")?)),
            "--log" => {
                log = match value_for(&mut args, "--log")?.as_str() {
                    "file" => LogDestination::File,
                    "terminal" => LogDestination::Terminal,
                    "both" => LogDestination::Both,
                    other => bail!("unknown log destination '{other}'\n{USAGE}"),
                }
            }
            "-v" | "--verbose" => verbose = true,
            flag if flag.starts_with('-') => bail!("unknown option '{flag}'\n{USAGE}"),
            path if catalog.is_none() => catalog = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument '{extra}'\n{USAGE}"),
        }
    }

    let Some(catalog) = catalog else {
        bail!("missing catalog path\n{USAGE}");
    };
    Ok(Options {
        catalog,
        script,
        config,
        log,
        verbose,
    })
}

fn value_for(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    match args.next() {
        Some(value) => Ok(value),
        None => bail!("{flag} needs a value\n{USAGE}"),
    }
}

/// Where a decided item ends up.
fn destination(direction: Direction) -> &'static str {
    match direction {
        Direction::Like => "wishlist",
        Direction::Pass => "discard",
        Direction::Collect => "cart",
    }
}

struct Printer {
    names: HashMap<ItemId, String>,
    events: mpsc::Receiver<DeckEvent>,
}

impl Printer {
    fn drain(&self, out: &mut impl Write) -> anyhow::Result<()> {
        for event in self.events.try_iter() {
            match event {
                DeckEvent::Decision {
                    direction,
                    item_id,
                    frame,
                } => {
                    let name = self.names.get(&item_id).map(String::as_str).unwrap_or("");
                    writeln!(
                        out,
                        "[{frame:>5}] {direction:<7} #{item_id} {name} -> {}",
                        destination(direction)
                    )?;
                }
                DeckEvent::Exhausted { frame } => writeln!(out, "[{frame:>5}] deck exhausted")?,
                DeckEvent::Reset { len, frame } => {
                    writeln!(out, "[{frame:>5}] deck reset ({len} items)")?
                }
            }
        }
        Ok(())
    }
}

/// Loads the catalog and drives a session from the script, or from `input`
/// lines when no script is given. Output lines go to `out`.
pub(crate) fn run(
    options: &Options,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let items = load_catalog(&options.catalog)
        .with_context(|| format!("loading catalog {:?}", options.catalog))?;
    let config = match &options.config {
        Some(path) => load_deck_config(path),
        None => DeckConfig::default(),
    };
    let names = items
        .iter()
        .map(|item| (item.id, item.name.clone()))
        .collect();

    let mut session = DeckSession::new(items, config);
    let printer = Printer {
        names,
        events: session.subscribe(),
    };
    swipe_info!("session started with {} items", session.state().deck().len());

    match &options.script {
        Some(path) => {
            let steps =
                load_script(path).with_context(|| format!("loading script {:?}", path))?;
            replay(&mut session, &steps);
            session.settle(SETTLE_LIMIT_MS);
            printer.drain(out)?;
        }
        None => interactive(&mut session, &printer, input, out)?,
    }

    let stats = session.state().stats();
    writeln!(
        out,
        "liked {}, passed {}, collected {}; {} of {} remaining",
        stats.liked,
        stats.passed,
        stats.collected,
        session.state().deck().len(),
        session.state().deck().total()
    )?;
    Ok(())
}

fn interactive(
    session: &mut DeckSession,
    printer: &Printer,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let commands = session.commands();
    for line in input.lines() {
        let line = line.context("reading command")?;
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "reset" => commands.reset(),
            "status" => {
                match session.state().status() {
                    DeckStatus::Active(id) => writeln!(out, "front #{id}")?,
                    DeckStatus::Empty => writeln!(out, "empty")?,
                }
                continue;
            }
            name => {
                if !commands.trigger_named(name) {
                    writeln!(out, "unknown command '{name}'")?;
                    continue;
                }
            }
        }
        session.pump();
        session.settle(SETTLE_LIMIT_MS);
        printer.drain(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn catalog_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"id": 1, "name": "Lamp"}, {"id": 2, "name": "Rug"}]"#)
            .unwrap();
        file
    }

    fn options(catalog: &tempfile::NamedTempFile) -> Options {
        Options {
            catalog: catalog.path().to_path_buf(),
            script: None,
            config: None,
            log: LogDestination::File,
            verbose: false,
        }
    }

    #[test]
    fn parses_flags_in_any_order() {
        let options =
            parse_args(args(&["--verbose", "items.json", "--script", "s.json", "--log", "both"]))
                .unwrap();
        assert_eq!(options.catalog, PathBuf::from("items.json"));
        assert_eq!(options.script, Some(PathBuf::from("s.json")));
        assert_eq!(options.config, None);
        assert_eq!(options.log, LogDestination::Both);
        assert!(options.verbose);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["a.json", "--script"])).is_err());
        assert!(parse_args(args(&["a.json", "--frobnicate"])).is_err());
        assert!(parse_args(args(&["a.json", "b.json"])).is_err());
        assert!(parse_args(args(&["a.json", "--log", "syslog"])).is_err());
    }

    #[test]
    fn interactive_commands_print_decisions() {
        let catalog = catalog_file();
        let input = "like\nsideways\ncart\nlike\nreset\nstatus\nquit\npass\n".as_bytes();
        let mut out = Vec::new();
        run(&options(&catalog), input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].ends_with("like    #1 Lamp -> wishlist"), "{}", lines[0]);
        assert_eq!(lines[1], "unknown command 'sideways'");
        assert!(lines[2].ends_with("collect #2 Rug -> cart"), "{}", lines[2]);
        assert!(lines[3].ends_with("deck exhausted"));
        assert!(lines[4].ends_with("deck reset (2 items)"));
        assert_eq!(lines[5], "front #1");
        assert_eq!(lines[6], "liked 0, passed 0, collected 0; 2 of 2 remaining");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn missing_catalog_is_reported() {
        let mut opts = options(&catalog_file());
        opts.catalog = PathBuf::from("/no/such/catalog.json");
        let err = run(&opts, &b""[..], &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("loading catalog"));
    }
}
