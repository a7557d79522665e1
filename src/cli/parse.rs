use clap::{Args, Parser, Subcommand};

use crate::core::constants::{
    DEFAULT_BAR_WIDTH, DEFAULT_LINE_HEIGHT, DEFAULT_LINE_WIDTH, DEFAULT_PROGRESS_LABEL,
    DEFAULT_PROGRESS_WIDTH,
};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "ascii-chart",
    about = "Bar charts, line charts, sparklines, tables and progress bars as plain text"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a sample of every chart type
    Demo,
    /// Horizontal bar chart
    Bar(BarArgs),
    /// Line chart with interpolated segments
    Line(LineArgs),
    /// One-line sparkline
    Spark(SparkArgs),
    /// Boxed table
    Table(TableArgs),
    /// Progress bar
    Progress(ProgressArgs),
}

/// Values plus optional labels, shared by the series charts.
#[derive(Args, Debug)]
pub struct SeriesArgs {
    /// Data values, in display order
    #[arg(value_name = "VALUE", required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Comma-separated labels, one per value (defaults to 0, 1, 2, …)
    #[arg(short, long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,

    /// Chart title
    #[arg(short, long)]
    pub title: Option<String>,
}

/// `ascii-chart bar …`
#[derive(Args, Debug)]
pub struct BarArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Length of the longest bar
    #[arg(short, long, default_value_t = DEFAULT_BAR_WIDTH)]
    pub width: usize,
}

/// `ascii-chart line …`
#[derive(Args, Debug)]
pub struct LineArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Canvas columns
    #[arg(short, long, default_value_t = DEFAULT_LINE_WIDTH)]
    pub width: usize,

    /// Canvas rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_LINE_HEIGHT)]
    pub height: usize,
}

/// `ascii-chart spark …`
#[derive(Args, Debug)]
pub struct SparkArgs {
    /// Data values, in display order
    #[arg(value_name = "VALUE", required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Prefix shown before the glyphs
    #[arg(short, long)]
    pub title: Option<String>,
}

/// `ascii-chart table …`
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Column headers, separated by `--delimiter`
    #[arg(long)]
    pub header: String,

    /// One table row, separated by `--delimiter` (repeatable)
    #[arg(short, long = "row", required = true)]
    pub rows: Vec<String>,

    /// Cell separator for `--header` and `--row`
    #[arg(short, long, default_value_t = ';')]
    pub delimiter: char,

    /// Table title
    #[arg(short, long)]
    pub title: Option<String>,
}

/// `ascii-chart progress …`
#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Amount done
    #[arg(allow_negative_numbers = true)]
    pub current: f64,

    /// Amount expected
    #[arg(allow_negative_numbers = true)]
    pub total: f64,

    /// Number of bar cells
    #[arg(short, long, default_value_t = DEFAULT_PROGRESS_WIDTH)]
    pub width: usize,

    /// Text before the bar
    #[arg(short, long, default_value = DEFAULT_PROGRESS_LABEL)]
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn bar_takes_labels_and_negatives() {
        let cli = Cli::try_parse_from(["ascii-chart", "bar", "1", "-2.5", "-l", "a,b", "-w", "20"])
            .unwrap();
        let Command::Bar(a) = cli.cmd else {
            panic!("expected bar");
        };
        assert_eq!(a.series.values, [1.0, -2.5]);
        assert_eq!(a.series.labels, Some(vec!["a".into(), "b".into()]));
        assert_eq!(a.width, 20);
    }

    #[test]
    fn line_defaults() {
        let cli = Cli::try_parse_from(["ascii-chart", "line", "3"]).unwrap();
        let Command::Line(a) = cli.cmd else {
            panic!("expected line");
        };
        assert_eq!((a.width, a.height), (DEFAULT_LINE_WIDTH, DEFAULT_LINE_HEIGHT));
    }

    #[test]
    fn table_rows_repeat() {
        let cli = Cli::try_parse_from([
            "ascii-chart", "table", "--header", "a;b", "-r", "1;2", "-r", "3;4",
        ])
        .unwrap();
        let Command::Table(a) = cli.cmd else {
            panic!("expected table");
        };
        assert_eq!(a.rows.len(), 2);
        assert_eq!(a.delimiter, ';');
    }

    #[test]
    fn series_needs_values() {
        assert!(Cli::try_parse_from(["ascii-chart", "spark"]).is_err());
    }
}
