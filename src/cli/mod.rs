mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::ChartError;

pub use handlers::demo;

pub fn run() -> Result<(), ChartError> {
    let cli = parse::Cli::parse();
    let out = match cli.cmd {
        parse::Command::Demo => handlers::demo(),
        parse::Command::Bar(a) => handlers::bar(a)?,
        parse::Command::Line(a) => handlers::line(a)?,
        parse::Command::Spark(a) => handlers::spark(a)?,
        parse::Command::Table(a) => handlers::table_cmd(&a),
        parse::Command::Progress(a) => handlers::progress(&a)?,
    };
    println!("{out}");
    Ok(())
}
