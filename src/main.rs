use std::{error::Error, fs, path::Path, process};

use clap::{value_parser, Arg, ArgMatches, Command};
use log::info;

use qrlabel::{generate, DEFAULT_MODULE_SIZE};

fn cli() -> Command {
    Command::new("qrlabel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates a QR code for a product label")
        .arg(Arg::new("text").help("Text to encode").required(true))
        .arg(
            Arg::new("module_size")
                .short('s')
                .long("module-size")
                .help("Edge length of a single module in pixels [default: 4]")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file, PNG when it ends in .png and SVG otherwise. Prints SVG to stdout if omitted"),
        )
}

fn parse_args() -> ArgMatches {
    cli().get_matches()
}

#[derive(Debug, PartialEq, Eq)]
enum Output<'a> {
    Stdout,
    Svg(&'a Path),
    Png(&'a Path),
}

impl<'a> Output<'a> {
    fn from_matches(matches: &'a ArgMatches) -> Self {
        match matches.get_one::<String>("output").map(Path::new) {
            Some(path) if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("png")) => {
                Output::Png(path)
            }
            Some(path) => Output::Svg(path),
            None => Output::Stdout,
        }
    }
}

fn module_size(matches: &ArgMatches) -> u32 {
    matches.get_one::<u32>("module_size").copied().unwrap_or(DEFAULT_MODULE_SIZE)
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let text = matches.get_one::<String>("text").ok_or("Missing text")?;
    let module_sz = module_size(matches);

    let qr = generate(text)?;
    let canvas_sz = qr.canvas_size(module_sz)?;
    info!(
        "Generated version {} symbol, {}x{} modules, {canvas_sz}px canvas",
        *qr.version(),
        qr.width(),
        qr.width()
    );

    match Output::from_matches(matches) {
        Output::Png(path) => {
            qr.to_image(module_sz).save(path)?;
            info!("Wrote {}", path.display());
        }
        Output::Svg(path) => {
            fs::write(path, qr.to_svg(module_sz))?;
            info!("Wrote {}", path.display());
        }
        Output::Stdout => println!("{}", qr.to_svg(module_sz)),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();
    if let Err(e) = run(&matches) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
