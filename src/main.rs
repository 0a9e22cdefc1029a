use clap::{Parser, Args, Subcommand};
use log::{info, LevelFilter};
use std::io::Write;
use std::path::PathBuf;

use unidump::inspector::{self, CodePointRange, Section};
use unidump::range_spec::{self, DumpPlan};
use unidump::report;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
    /// Log more details to stderr; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dump code points with their UTF-8 bytes, category and name to stdout.
    Dump(DumpOpts),
    /// Print the `echo -e` command that reproduces a text byte for byte.
    Echo(EchoOpts),
}

#[derive(Debug, Args)]
#[clap(group = clap::ArgGroup::new("dump-source").multiple(false).required(true))]
struct DumpOpts {
    /// Code point ranges, e.g. `U+2500..U+257F`, `0x41-0x5a`, `9472` or a literal character.
    #[clap(group="dump-source")]
    ranges: Vec<String>,
    /// Dump the Unicode block that contains a given character.
    #[clap(long, group="dump-source")]
    block_containing: Option<char>,
    /// Dump a single character.
    #[clap(long, group="dump-source")]
    single_character: Option<char>,
    /// A path to a dump plan: one range per line, optionally followed by a section title.
    #[clap(long, group="dump-source")]
    plan_file: Option<PathBuf>,
    /// Omit the header lines above each section.
    #[arg(long, action)]
    no_header: bool,
}

#[derive(Debug, Args)]
struct EchoOpts {
    /// The text to encode.
    text: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli_options = Cli::parse();
    init_logging(cli_options.verbose);
    return match cli_options.command {
        Command::Dump(options) => {
            dump(options)
        }
        Command::Echo(options) => {
            echo(options)
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = colog::default_builder();
    builder.filter_level(level);
    builder.init();
}

fn dump(dump_opts: DumpOpts) -> Result<(), Box<dyn std::error::Error>> {
    // every range is validated before anything is printed
    let sections: Vec<Section> = if let Some(plan_file) = &dump_opts.plan_file {
        DumpPlan::from_file(plan_file)?.sections
    } else if let Some(block_char) = dump_opts.block_containing {
        vec![inspector::block_containing(block_char)
            .ok_or("No Unicode block found matching character")?]
    } else if let Some(single_char) = dump_opts.single_character {
        vec![Section::new(None, CodePointRange::single(single_char))]
    } else {
        range_spec::parse_ranges(dump_opts.ranges.as_slice())?
    };

    let single = dump_opts.single_character.is_some();
    let show_header = !dump_opts.no_header && !single;
    let mut out = std::io::stdout().lock();
    let summary = report::write_sections(&mut out, &sections, show_header, !single)?;

    info!("Dumped {} code points in {} section(s), {} without a name.",
        summary.dumped, sections.len(), summary.unnamed);
    Ok(())
}

fn echo(echo_opts: EchoOpts) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "... > {}", report::echo_command(&echo_opts.text))?;
    writeln!(out, "{}", echo_opts.text)?;
    Ok(())
}
