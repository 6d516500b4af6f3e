use std::fs;

use clap::Parser;
use mathparse::{Bindings, Context, UnboundPolicy};

/// mathparse evaluates arithmetic expressions over scalars and equal-length
/// vectors.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mathparse to read expressions, one per line, from a file.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable to a vector, e.g. `--var a=1,2,3`. Every vector must
    /// have the same length.
    #[arg(short, long = "var", value_parser = parse_binding)]
    vars: Vec<(String, Vec<f64>)>,

    /// Treats variables without a `--var` binding as zero instead of failing.
    #[arg(short, long)]
    unbound_as_zero: bool,

    contents: String,
}

/// Parses `name=v1,v2,...` into a name and its vector.
fn parse_binding(s: &str) -> Result<(String, Vec<f64>), String> {
    let (name, values) = s.split_once('=')
                          .ok_or_else(|| format!("expected NAME=v1,v2,... but found '{s}'"))?;

    let values = values.split(',')
                       .map(|v| v.trim().parse::<f64>().map_err(|e| format!("'{v}': {e}")))
                       .collect::<Result<Vec<_>, _>>()?;

    Ok((name.trim().to_string(), values))
}

fn main() {
    let args = Args::parse();

    let len = args.vars.first().map_or(0, |(_, values)| values.len());
    let bindings = args.vars
                       .into_iter()
                       .fold(Bindings::new(len), |b, (name, values)| b.with(name, values));

    let policy = if args.unbound_as_zero { UnboundPolicy::Zero } else { UnboundPolicy::Fail };
    let context = Context::new().with_unbound_policy(policy);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line == "quit" {
            break;
        }

        match context.try_evaluate(line, &bindings) {
            Ok(evaluation) => {
                for warning in &evaluation.warnings {
                    eprintln!("{warning}");
                }
                println!("{}", evaluation.value);
            },
            Err(e) => eprintln!("{e}"),
        }
    }
}
