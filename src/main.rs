use std::io::{self, prelude::*};
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "postfix",
    about = "Evaluates integer arithmetic written in postfix notation.",
    setting = AppSettings::AllowNegativeNumbers
)]
struct Opt {
    /// Enables trace log level
    #[structopt(short, long)]
    trace: bool,

    /// Enables info log level
    #[structopt(short, long)]
    info: bool,

    /// The expression to evaluate, read line by line from stdin if omitted
    expression: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let log_level = if opt.trace {
        log::Level::Trace
    } else if opt.info {
        log::Level::Info
    } else {
        log::Level::Warn
    };

    simple_logger::init_with_level(log_level)?;

    if !opt.expression.is_empty() {
        let expr = opt.expression.join(" ");
        println!("{}", postfix::evaluate(&expr)?);

        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line?;

        // each line is its own expression
        match postfix::evaluate(&line) {
            Ok(v) => writeln!(handle, "{}", v)?,
            Err(e) => {
                debug!("line {}: {:?}", line_no + 1, e);

                eprintln!("error: {}", e);
            }
        }
    }

    handle.flush()?;

    Ok(())
}
