use clap::{Args, Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "termchart",
    version,
    about = "Bar, line, pie and sparkline charts in the terminal",
    long_about = "Bar, line, pie and sparkline charts in the terminal.\n\n\
        Values come from positional numbers, a single file path, or stdin \
        (no values or `-`). Set RUST_LOG=debug to see layout decisions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// One-row sparkline per series
    Spark(SparkArgs),
    /// Horizontal or vertical bar chart, grouped or stacked
    Bar(BarArgs),
    /// Line chart in character cells or Braille dots
    Line(LineArgs),
    /// Pie chart with a percentage legend
    Pie(PieArgs),
    /// List the colour themes
    Themes,
    /// Render every chart kind from seeded random data
    Demo(DemoArgs),
    /// Print example invocations
    Examples,
}

/// Where the numbers come from.
#[derive(Args, Debug, Default)]
pub struct DataArgs {
    /// Numbers, a file path, or `-` for stdin
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Extra named series, e.g. `--series "cpu:1,4,2"` (repeatable)
    #[arg(long = "series", value_name = "NAME:1,2,3")]
    pub series: Vec<String>,

    /// Comma-separated labels for points, bars or slices
    #[arg(short, long)]
    pub labels: Option<String>,

    /// Comma-separated series colours, names or `#rrggbb` (bar and line)
    #[arg(long, value_name = "red,#00ff00")]
    pub colors: Option<String>,
}

/// Flags every chart shares.
#[derive(Args, Debug, Default)]
pub struct StyleArgs {
    /// Width in columns (terminal width if omitted)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Height in rows (terminal height if omitted)
    #[arg(long)]
    pub height: Option<usize>,

    /// Chart title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Use ASCII characters only
    #[arg(long, conflicts_with = "unicode")]
    pub ascii: bool,

    /// Force Unicode glyphs
    #[arg(long)]
    pub unicode: bool,

    /// Force coloured output
    #[arg(short, long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Colour theme (see `termchart themes`)
    #[arg(long, default_value = "default")]
    pub theme: String,

    /// Print numeric values next to bars or slices
    #[arg(long)]
    pub show_values: bool,

    /// Hide axes and labels
    #[arg(long)]
    pub no_axes: bool,

    /// Hide the multi-series legend
    #[arg(long)]
    pub no_legend: bool,
}

/// `termchart spark …`
#[derive(Args, Debug)]
pub struct SparkArgs {
    #[command(flatten)]
    pub data: DataArgs,
    #[command(flatten)]
    pub style: StyleArgs,
}

/// `termchart bar …`
#[derive(Args, Debug)]
pub struct BarArgs {
    #[command(flatten)]
    pub data: DataArgs,
    #[command(flatten)]
    pub style: StyleArgs,

    /// Columns instead of rows
    #[arg(short, long)]
    pub vertical: bool,

    /// Pile series on top of each other
    #[arg(long)]
    pub stacked: bool,
}

/// `termchart line …`
#[derive(Args, Debug)]
pub struct LineArgs {
    #[command(flatten)]
    pub data: DataArgs,
    #[command(flatten)]
    pub style: StyleArgs,

    /// Draw with 2×4 Braille dots per cell
    #[arg(short, long)]
    pub braille: bool,

    /// Index runs down the rows, values left to right
    #[arg(short, long)]
    pub vertical: bool,
}

/// `termchart pie …`
#[derive(Args, Debug)]
pub struct PieArgs {
    #[command(flatten)]
    pub data: DataArgs,
    #[command(flatten)]
    pub style: StyleArgs,
}

/// `termchart demo …`
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// RNG seed (clock-seeded if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Points per random walk
    #[arg(long, default_value_t = 40)]
    pub points: usize,

    #[command(flatten)]
    pub style: StyleArgs,
}
