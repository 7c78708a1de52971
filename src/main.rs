//! Binary entry point for the `mpcrack` command-line tool.
//!
//! 1. Parse flags with `clap`.
//! 2. `--list-platforms` short-circuits before touching the statistics or
//!    dictionary files.
//! 3. Otherwise: load statistics, parse the mask and thresholds, build the
//!    Markov table and dictionary index, then hand both to the coordinator.

use clap::Parser;

use mpcrack::cli::args::{parse_devices, parse_length, parse_thresholds, Args};
use mpcrack::cli::constants::set_display_level;
use mpcrack::config::MAX_PASS_LENGTH;
use mpcrack::device::{list_platforms, CpuBackend};
use mpcrack::{displaylevel, CrackError, DictionaryIndex, Mask, MarkovTable, ModelKind, ReservationState, Result, Thresholds};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap exits 0 on --help/--version; the CLI contract here wants
            // exit 1 for any informational, non-error print.
            let is_informational = matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            );
            err.print().ok();
            std::process::exit(if is_informational { 1 } else { 2 });
        }
    };
    set_display_level(match args.verbose {
        0 => 2,
        1 => 3,
        _ => 4,
    });

    let exit_code = match run(args) {
        Ok(code) => code,
        Err(err) => {
            displaylevel!(1, "mpcrack: {err}");
            mpcrack::error::exit_code(&err)
        }
    };
    std::process::exit(exit_code);
}

fn run(args: Args) -> Result<i32> {
    if args.list_platforms {
        for platform in list_platforms() {
            println!(
                "platform {}: {} ({} device(s))",
                platform.index, platform.name, platform.device_count
            );
        }
        return Ok(1);
    }

    let (min_length, max_length) = parse_length(&args.length, MAX_PASS_LENGTH)?;
    let mask = match &args.mask {
        Some(source) => Mask::parse(source)?,
        None => Mask::default_printable(),
    };
    let (global_threshold, overrides) = parse_thresholds(&args.thresholds)?;
    let thresholds = Thresholds::build(global_threshold, &overrides, &mask, max_length);

    let model = ModelKind::parse(&args.model)?;
    let statistics_path = args
        .statistics
        .as_ref()
        .expect("clap enforces --statistics outside --list-platforms");
    let statistics =
        mpcrack::read_statistics_file(statistics_path, model, max_length)?;

    let table = MarkovTable::build(&statistics, &mask, thresholds)?;

    let dictionary_path = args
        .dictionary
        .as_ref()
        .expect("clap enforces --dictionary outside --list-platforms");
    let dictionary_text =
        std::fs::read_to_string(dictionary_path).map_err(|source| CrackError::MissingFile {
            path: dictionary_path.display().to_string(),
            source,
        })?;
    let words = dictionary_text.lines().filter(|line| !line.is_empty());
    let dictionary = DictionaryIndex::build(words, args.load_factor)?;

    let device_selector = parse_devices(&args.devices)?;
    let num_workers = device_selector
        .devices
        .as_ref()
        .map(|d| d.len())
        .unwrap_or_else(|| num_cpus::get_physical());

    let global_start = table.prefix(min_length - 1);
    let global_stop = table.prefix(max_length);
    let reservation_size = reservation_size(args.gws as u64);
    let reservation = ReservationState::new(global_start, global_stop, reservation_size);

    displaylevel!(
        3,
        "enumerating candidates [{global_start}, {global_stop}) across {num_workers} worker(s)"
    );

    let backend = CpuBackend;
    let outcome = mpcrack::run_coordinator(
        &backend,
        &table,
        &dictionary,
        &reservation,
        args.gws as usize,
        num_workers,
    )?;

    let found = outcome.dictionary.found_count();
    displaylevel!(
        2,
        "generated {} candidates, {found} match(es) of {}",
        outcome.candidates_generated,
        outcome.dictionary.word_count()
    );
    if args.print {
        for (word, is_found) in outcome.dictionary.iter_entries() {
            if is_found {
                println!("{}", String::from_utf8_lossy(word));
            }
        }
    }

    Ok(0)
}

fn reservation_size(gws: u64) -> u64 {
    mpcrack::config::RESERVATION_WINDOWS.saturating_mul(gws.max(1))
}
