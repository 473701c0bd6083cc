use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use log::info;

use bdd_puzzle::puzzle::Puzzle;
use bdd_puzzle::report::{verify, write_report};

#[derive(Debug, Parser)]
#[command(author, version, about = "Solve the lab assignment puzzle with BDDs")]
struct Cli {
    /// Output file for the solutions ("-" for stdout).
    #[arg(short, long, value_name = "FILE", default_value = "solutions.txt")]
    output: PathBuf,

    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,

    /// Verify every printed solution against the formula.
    #[arg(long)]
    check: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let puzzle = Puzzle::lab();
    let solver = puzzle.solver();

    let printed = if args.output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_report(&mut out, &solver)?
    } else {
        let file = File::create(&args.output)
            .wrap_err_with(|| format!("Could not create '{}'", args.output.display()))?;
        let mut out = BufWriter::new(file);
        let printed = write_report(&mut out, &solver)?;
        out.flush()?;
        info!("Solutions written to '{}'", args.output.display());
        printed
    };

    if args.check {
        verify(&solver, printed).wrap_err("Report does not match the formula")?;
    }

    let time_total = time_total.elapsed();
    info!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
