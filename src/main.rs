use oqituvchi_extract::{extract, io, Config};
use std::io::Write;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, error, info};

fn main() {
    env_logger::init();
    let args = build_cli().get_matches();

    let config = match build_config(&args) {
        Ok(c) => c,
        Err(code) => std::process::exit(code),
    };
    debug!("Running with {:?}", config);

    if let Err(code) = run(&config) {
        std::process::exit(code);
    }
}

fn build_cli() -> Command {
    Command::new("oqituvchi-extract")
        .version(clap::crate_version!())
        .about("Extract the lessons of selected teachers from a JSON lesson document")
        .arg(
            Arg::new("INPUT")
                .help("The input JSON file, mapping teacher names to lesson lists")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(oqituvchi_extract::DEFAULT_INPUT_FILE),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("The output JSON file. It is overwritten, if it exists.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(oqituvchi_extract::DEFAULT_OUTPUT_FILE),
        )
        .arg(
            Arg::new("teacher")
                .short('t')
                .long("teacher")
                .value_name("NAME")
                .help("Name of a teacher to extract. May be given multiple times. Replaces the default list of teachers.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("teachers_file")
                .short('f')
                .long("teachers-file")
                .value_name("FILE")
                .help("JSON file with a list of teacher names to extract. Replaces the default list of teachers.")
                .value_parser(clap::value_parser!(PathBuf))
                .conflicts_with("teacher"),
        )
}

/// Assemble the run configuration from the command line arguments. The list of teachers is read from the teachers
/// file, if one is given.
///
/// Returns the exit code to terminate with, if the teachers file cannot be read.
fn build_config(args: &ArgMatches) -> Result<Config, exitcode::ExitCode> {
    let mut config = Config::default();
    if let Some(input) = args.get_one::<PathBuf>("INPUT") {
        config.input = input.clone();
    }
    if let Some(output) = args.get_one::<PathBuf>("OUTPUT") {
        config.output = output.clone();
    }

    if let Some(teachers) = args.get_many::<String>("teacher") {
        config.teachers = teachers.cloned().collect();
    } else if let Some(path) = args.get_one::<PathBuf>("teachers_file") {
        let file = std::fs::File::open(path).map_err(|e| {
            error!("Could not open teachers file {}: {}", path.display(), e);
            exitcode::NOINPUT
        })?;
        config.teachers = io::teachers::read(std::io::BufReader::new(file)).map_err(|e| {
            error!("Could not read teachers file {}: {}", path.display(), e);
            exitcode::DATAERR
        })?;
        info!(
            "Read {} teacher names from {}",
            config.teachers.len(),
            path.display()
        );
    }

    Ok(config)
}

/// Read the source document, extract the configured teachers, print their lesson counts and write the filtered
/// document.
///
/// Every failure is logged and aborts the run. Returns the exit code to terminate with in that case.
fn run(config: &Config) -> Result<(), exitcode::ExitCode> {
    let file = std::fs::File::open(&config.input).map_err(|e| {
        error!("Could not open input file {}: {}", config.input.display(), e);
        exitcode::NOINPUT
    })?;
    let source = io::lessons::read(std::io::BufReader::new(file)).map_err(|e| {
        error!("Could not read input file {}: {}", config.input.display(), e);
        exitcode::DATAERR
    })?;
    info!(
        "Read {} teachers from {}",
        source.len(),
        config.input.display()
    );

    let extraction = extract::extract_with(&source, &config.teachers, |t| {
        print!("{}", io::format_extracted_teacher(t))
    })
    .map_err(|e| {
        error!("{}", e);
        exitcode::DATAERR
    })?;
    drop(source);

    debug!(
        "Writing {} teachers to {}",
        extraction.num_teachers(),
        config.output.display()
    );
    let file = std::fs::File::create(&config.output).map_err(|e| {
        error!(
            "Could not create output file {}: {}",
            config.output.display(),
            e
        );
        exitcode::CANTCREAT
    })?;
    let mut writer = std::io::BufWriter::new(file);
    io::lessons::write(&mut writer, &extraction.document)
        .and_then(|()| writer.flush().map_err(|e| e.to_string()))
        .map_err(|e| {
            error!(
                "Could not write output file {}: {}",
                config.output.display(),
                e
            );
            exitcode::IOERR
        })?;

    print!("{}", io::format_summary(&extraction));
    Ok(())
}
