mod demo;
mod logging;

use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context as _, Result, bail};
use swipe_core::{
    config::SwipeConfig,
    dictionary::PatternDictionary,
    engine::Engine,
    key_event::{Action, InputEvent},
    model::{Candidate, CandidateSource},
    predictor::{PredictionMode, PredictionService},
    session::Session,
};
use swipe_dict::PatternTable;

#[derive(Debug, Default)]
struct Args {
    dict: Option<PathBuf>,
    config: Option<PathBuf>,
    max: Option<usize>,
    remote: bool,
    demo: bool,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(p) => SwipeConfig::from_path(p).with_context(|| format!("loading config {}", p.display()))?,
        None => SwipeConfig::default(),
    };
    if let Some(n) = args.max {
        config.prediction.max_results = n;
    }
    if args.remote {
        config.prediction.mode = PredictionMode::Remote;
    }

    let (table, source) = match &args.dict {
        Some(p) => (
            PatternTable::from_path(p).with_context(|| format!("loading dictionary {}", p.display()))?,
            p.display().to_string(),
        ),
        None => (PatternTable::builtin(), "built-in".to_string()),
    };
    let engine = Engine::new(table)
        .max_results(config.prediction.max_results)
        .similarity_threshold(config.prediction.similarity_threshold);
    let service = PredictionService::new(engine, config.prediction.cache_capacity);
    let mut session = Session::with_config(service, &config);

    if args.demo {
        return demo::run(&mut session, &mut io::stdout()).context("writing demo output");
    }
    repl(&mut session, &source).context("running REPL")
}

fn parse_args() -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--dict" => parsed.dict = Some(PathBuf::from(args.next().context("--dict needs a path")?)),
            "--sample" => parsed.dict = Some(sample_dict_path()),
            "--config" => {
                parsed.config = Some(PathBuf::from(args.next().context("--config needs a path")?))
            }
            "--max" => {
                let n = args.next().context("--max needs a number")?;
                parsed.max = Some(n.parse().with_context(|| format!("bad --max value {n:?}"))?);
            }
            "--remote" => parsed.remote = true,
            "--demo" => parsed.demo = true,
            "--help" | "-h" => print_help(),
            other => bail!("unknown argument {other:?} (try --help)"),
        }
    }
    Ok(parsed)
}

fn print_help() -> ! {
    println!(
        "usage: swipe_cli [--dict <tsv> | --sample] [--config <toml>] [--max <n>] [--remote] [--demo]\n\
         Type the letters a swipe passed over (e.g. hlp) and press Enter, then pick a\n\
         suggestion: 1-9 selects, Enter picks 1, 0 skips.\n\
         Commands: :say :history :reuse <n> :clear-history :delete :mode :continuous :q\n\
         Set SWIPE_LOG=debug for engine logs on stderr."
    );
    std::process::exit(0);
}

fn repl(session: &mut Session<PatternTable>, dict_source: &str) -> io::Result<()> {
    let mut out = io::stdout();
    let mut line = String::new();
    writeln!(
        out,
        "swipe keyboard (line CLI) | dict: {dict_source} ({} keys)",
        session.service().engine().dictionary().len()
    )?;
    writeln!(out, "Type swiped letters and press Enter. :q quits, :help lists commands.")?;
    out.flush()?;

    loop {
        line.clear();
        let ui = session.ui_state();
        print!("[{} | {}] swipe> ", ui.mode, ui.composed_text);
        out.flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(cmd) = input.strip_prefix(':') {
            if !run_command(session, cmd, &mut out)? {
                break;
            }
            continue;
        }

        let letters: String = input.chars().filter(char::is_ascii_alphabetic).collect();
        if letters.is_empty() {
            writeln!(out, "(ignored: only letters a-z)")?;
            continue;
        }

        let suggestions = session.swipe(&letters);
        let ui = session.ui_state();
        writeln!(out, "> {}", ui.sequence)?;
        if suggestions.is_empty() {
            writeln!(out, "(no suggestions)")?;
            continue;
        }
        // annotations only describe the local engine's answer
        let ranked = match ui.mode {
            PredictionMode::Local => session.service().engine().rank(&ui.sequence, suggestions.len()),
            PredictionMode::Remote => Vec::new(),
        };
        for (i, word) in suggestions.iter().enumerate() {
            match ranked.get(i).filter(|c| &c.word == word) {
                Some(c) => writeln!(out, "{}. {word}\t({})", i + 1, describe(c))?,
                None => writeln!(out, "{}. {word}", i + 1)?,
            }
        }

        let count = suggestions.len().min(9);
        loop {
            line.clear();
            print!("select [1-{count}] (Enter=1, 0=skip)> ");
            out.flush()?;
            if io::stdin().read_line(&mut line)? == 0 {
                return Ok(());
            }
            let sel = line.trim();
            if sel == "0" {
                session.handle(InputEvent::ClearSequence);
                break;
            }
            let idx = if sel.is_empty() {
                Some(0usize)
            } else {
                sel.parse::<usize>().ok().and_then(|n| (1..=count).contains(&n).then_some(n - 1))
            };
            let Some(i) = idx else {
                writeln!(out, "invalid choice, enter 1-{count} / 0 / Enter")?;
                continue;
            };
            let (ui, _) = session.handle(InputEvent::Select(i));
            writeln!(out, "text: {}", ui.composed_text)?;
            break;
        }
    }

    Ok(())
}

/// Runs a `:command`; returns `false` when the REPL should stop.
fn run_command(session: &mut Session<PatternTable>, cmd: &str, out: &mut impl Write) -> io::Result<bool> {
    let mut parts = cmd.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let event = match name {
        "q" | "quit" | "exit" => {
            session.handle(InputEvent::Exit);
            return Ok(false);
        }
        "help" => {
            writeln!(out, ":say :history :reuse <n> :clear-history :delete :mode :continuous :q")?;
            return Ok(true);
        }
        "history" => {
            let ui = session.ui_state();
            if ui.history.is_empty() {
                writeln!(out, "(history empty)")?;
            }
            for (i, phrase) in ui.history.iter().enumerate() {
                writeln!(out, "{}. {phrase}", i + 1)?;
            }
            return Ok(true);
        }
        "say" => InputEvent::Say,
        "delete" => InputEvent::DeleteAll,
        "clear-history" => InputEvent::ClearHistory,
        "mode" => InputEvent::ToggleMode,
        "continuous" => InputEvent::ToggleContinuous,
        "reuse" => match parts.next().and_then(|n| n.parse::<usize>().ok()) {
            Some(n) if n >= 1 => InputEvent::ReuseHistory(n - 1),
            _ => {
                writeln!(out, "usage: :reuse <n> (1-based, see :history)")?;
                return Ok(true);
            }
        },
        other => {
            writeln!(out, "unknown command :{other}")?;
            return Ok(true);
        }
    };

    let (ui, actions) = session.handle(event);
    for a in actions {
        if let Action::Commit(text) = a {
            writeln!(out, "say: {text}")?;
        }
    }
    match name {
        "mode" => writeln!(out, "mode: {}", ui.mode)?,
        "continuous" => writeln!(out, "continuous: {}", if ui.continuous { "on" } else { "off" })?,
        "reuse" | "delete" => writeln!(out, "text: {}", ui.composed_text)?,
        _ => {}
    }
    Ok(true)
}

fn describe(c: &Candidate) -> String {
    match c.source {
        CandidateSource::Exact => "exact".to_string(),
        CandidateSource::Fuzzy => format!(
            "{} {:.2}",
            c.key.as_deref().unwrap_or_default(),
            c.score
        ),
        CandidateSource::LetterFallback => format!("letter {}", c.key.as_deref().unwrap_or_default()),
        CandidateSource::CommonFallback => "common".to_string(),
    }
}

/// Sample dictionary shipped with the CLI.
fn sample_dict_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("asset").join("patterns.tsv")
}
