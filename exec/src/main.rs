// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate kbeval;

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate log;
extern crate csv;
extern crate env_logger;
#[macro_use]
extern crate clap;
#[macro_use]
extern crate prettytable;
extern crate itertools;
extern crate rayon;

use std::path::Path;
use clap::ArgMatches;

use kbeval::prelude::{ Settings, Timer, evaluate, read_prediction, read_reference };
use errors::*;

mod input;
mod batch;
mod report;

pub mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    error_chain! {
        links {
            KBEval(::kbeval::errors::Error, ::kbeval::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
            Json(::serde_json::Error);
            Csv(::csv::Error);
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        eprintln!("error: {}", e);
        for e in e.iter().skip(1) {
            eprintln!("caused by: {}", e);
        }

        // The backtrace is not always generated. Try to run with `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            eprintln!("{:?}", backtrace);
        }

        ::std::process::exit(1);
    }
}

fn path_arg<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a Path> {
    match matches.value_of(name) {
        Some(value) => Ok(Path::new(value)),
        None => bail!("missing argument: {}", name)
    }
}

fn run() -> Result<()> {
    let mut timer = Timer::start();

    let app_m = clap_app!(kbeval =>
        (version: crate_version!())
        (about: "Score extracted entities and relations against a reference")
        (@arg settings: -c +takes_value "settings file")
        (@subcommand eval =>
            (about: "Evaluate one prediction against its reference")
            (@arg reference: -r +required +takes_value "reference file")
            (@arg prediction: -p +required +takes_value "prediction file")
        )
        (@subcommand batch =>
            (about: "Evaluate several repeated runs of several models over a set of documents")
            (@arg input: -i +required +takes_value "batch input file")
        )
    ).get_matches();

    let settings = match app_m.value_of("settings") {
        Some(fsettings) => Settings::from_file(Path::new(fsettings))?,
        None => Settings::default()
    };
    debug!("Current settings: {:?}", settings);

    match app_m.subcommand() {
        ("eval", Some(sub_m)) => {
            let reference = read_reference(path_arg(sub_m, "reference")?)?;
            let predicted = read_prediction(path_arg(sub_m, "prediction")?);
            let eval = evaluate(&reference, &predicted, &settings.evaluation);

            report::print_scores(&eval);
            println!("{}", eval.f_score());
        },
        ("batch", Some(sub_m)) => {
            let input = input::BatchInput::from_file(path_arg(sub_m, "input")?)?;
            let scores = batch::run_batch(&input, &settings.evaluation)?;

            report::write_tsv_file(Path::new(&input.output_file), &scores)?;
            report::print_summary(&scores);
            info!("{} saved", input.output_file);
        },
        _ => bail!("No subcommand provided, see --help")
    }

    timer.lap_and_report("!! Finish the program !!");
    Ok(())
}
