use clap::{value_t, App, Arg, ArgMatches};
use kvs_cmdgen::{ConfigLayer, GenConfig, Generator, Op, Result};
use std::path::{Path, PathBuf};
use std::process::exit;

fn main() {
    env_logger::init();

    let matches = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("YAML or JSON file with generator settings")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("count")
                .short("n")
                .long("count")
                .value_name("N")
                .help("Number of commands to write [default: 1000]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("PATH")
                .help("File to write, truncated first [default: commands2.txt]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("host")
                .long("host")
                .value_name("HOST")
                .help("Host of the key-value service [default: localhost]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("port")
                .short("p")
                .long("port")
                .value_name("PORT")
                .help("Port of the key-value service [default: 8080]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("op")
                .long("op")
                .value_name("OP")
                .help("Request each line issues [default: set]")
                .possible_values(&Op::NAMES)
                .takes_value(true),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("{}", e);
        exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let mut config = GenConfig::default();
    if let Some(path) = matches.value_of("config") {
        config = config.merge(ConfigLayer::from_file(Path::new(path))?);
    }
    config = config.merge(flags(matches)?);

    let summary = Generator::new(config).run()?;
    log::debug!("{:?}", summary);
    Ok(())
}

fn flags(matches: &ArgMatches) -> Result<ConfigLayer> {
    let count = if matches.is_present("count") {
        Some(value_t!(matches, "count", u64).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };
    let port = if matches.is_present("port") {
        Some(value_t!(matches, "port", u16).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };
    let op = match matches.value_of("op") {
        Some(op) => Some(op.parse::<Op>()?),
        None => None,
    };

    Ok(ConfigLayer {
        count,
        output: matches.value_of("output").map(PathBuf::from),
        host: matches.value_of("host").map(String::from),
        port,
        op,
    })
}
