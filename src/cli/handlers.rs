use std::{
    io::{self, Write},
    path::Path,
};

use crate::{
    chart::Chart,
    core::{
        color::{AnsiCode, ColorError, colorize},
        config::{BarMode, Options, OptionsBuilder, Orientation, Style},
        data::{self, Series},
        error::Error,
        rng::Lcg,
        terminal::Capabilities,
        theme::{THEMES, Theme},
    },
};

use super::parse::{BarArgs, DataArgs, DemoArgs, LineArgs, PieArgs, SparkArgs, StyleArgs};

/// Rows per demo chart unless `--height` says otherwise.
const DEMO_HEIGHT: usize = 14;

/// Series plus labels gathered from positional values, `--series` and
/// `--labels`.
#[derive(Debug, Default)]
pub struct Input {
    pub series: Vec<Series>,
    pub labels: Vec<String>,
}

/// Comma-separated labels, blanks dropped.
#[must_use]
pub fn parse_labels(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Comma-separated colour names or `#rrggbb`, blanks dropped.
///
/// # Errors
/// [`ColorError`] for the first entry that is not a colour.
pub fn parse_colors(text: &str) -> Result<Vec<AnsiCode>, ColorError> {
    text.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::parse)
        .collect()
}

/// Resolve positional values: nothing or `-` reads stdin, a single existing
/// path reads that file, anything else is parsed as numbers.
///
/// # Errors
/// I/O, number and colour parsing failures, or [`Error::NoData`] when every source
/// comes up empty.
pub fn load(a: &DataArgs) -> Result<Input, Error> {
    let mut input = Input::default();

    let from_reader = match a.values.as_slice() {
        [] if a.series.is_empty() => Some("-"),
        [one] if one == "-" || Path::new(one).is_file() => Some(one.as_str()),
        _ => None,
    };
    if let Some(path) = from_reader {
        log::debug!("reading values from {path}");
        let set = data::read_values_from_path(path)?;
        input.series.push(Series::new(set.values));
        input.labels = set.labels;
    } else if !a.values.is_empty() {
        input.series.push(Series::new(data::parse_args(&a.values)?));
    }

    for named in &a.series {
        input.series.push(data::parse_named_series(named)?);
    }
    if let Some(l) = &a.labels {
        input.labels = parse_labels(l);
    }
    if let Some(c) = &a.colors {
        let colors = parse_colors(c)?;
        if colors.len() > input.series.len() {
            log::warn!("{} colours for {} series", colors.len(), input.series.len());
        }
        for (s, color) in input.series.iter_mut().zip(colors) {
            s.color = Some(color);
        }
    }

    if input.series.iter().all(Series::is_empty) {
        return Err(Error::NoData);
    }
    Ok(input)
}

/// Options shared by every subcommand.
///
/// # Errors
/// [`Error::UnknownTheme`] for a theme name not in the registry.
pub fn options(s: &StyleArgs, caps: Capabilities) -> Result<OptionsBuilder, Error> {
    let theme: &'static Theme =
        Theme::by_name(&s.theme).ok_or_else(|| Error::UnknownTheme(s.theme.clone()))?;
    let style = if s.ascii {
        Style::Ascii
    } else if s.unicode {
        Style::Unicode
    } else {
        Style::Auto
    };
    let color = match (s.color, s.no_color) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    Ok(Options::builder()
        .capabilities(caps)
        .size(s.width.unwrap_or(0), s.height.unwrap_or(0))
        .title_opt(s.title.as_deref())
        .style(style)
        .color_opt(color)
        .theme(theme)
        .show_values(s.show_values)
        .show_axes(!s.no_axes)
        .show_legend(!s.no_legend))
}

fn emit(text: &str) -> Result<(), Error> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

fn draw(chart: Chart<'_>, opts: &Options) -> Result<(), Error> {
    let text = chart.try_render(opts)?;
    emit(&text)
}

pub fn spark(a: &SparkArgs) -> Result<(), Error> {
    let input = load(&a.data)?;
    let opts = options(&a.style, Capabilities::detect())?
        .labels(input.labels)
        .build();
    draw(Chart::Spark(&input.series), &opts)
}

pub fn bar(a: &BarArgs) -> Result<(), Error> {
    let input = load(&a.data)?;
    let mut b = options(&a.style, Capabilities::detect())?.labels(input.labels);
    if a.vertical {
        b = b.orientation(Orientation::Vertical);
    }
    if a.stacked {
        b = b.bar_mode(BarMode::Stacked);
    }
    draw(Chart::Bar(&input.series), &b.build())
}

pub fn line(a: &LineArgs) -> Result<(), Error> {
    let input = load(&a.data)?;
    let mut b = options(&a.style, Capabilities::detect())?.labels(input.labels);
    if a.braille {
        b = b.style(Style::Braille);
    }
    if a.vertical {
        b = b.orientation(Orientation::Vertical);
    }
    draw(Chart::Line(&input.series), &b.build())
}

/// Pie slices come from the first series only.
pub fn pie(a: &PieArgs) -> Result<(), Error> {
    let input = load(&a.data)?;
    let first = input.series.first().ok_or(Error::NoData)?;
    if input.series.len() > 1 {
        log::warn!("pie charts use only the first series; {} ignored", input.series.len() - 1);
    }
    let opts = options(&a.style, Capabilities::detect())?
        .labels(input.labels)
        .build();
    draw(Chart::Pie(first), &opts)
}

/// Every theme with a swatch of its series palette.
pub fn themes() {
    println!("\nAvailable themes:");
    for t in THEMES {
        let swatch: String = t.series.iter().map(|c| colorize(c, "██")).collect();
        println!("  {:<12} {swatch}", t.name);
    }
    println!();
}

/// Seeded random walks drawn as every chart kind.
pub fn demo(a: &DemoArgs) -> Result<(), Error> {
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let points = a.points.max(2);
    let cpu = Series::labeled("cpu", rng.walk(points, 50.0, 4.0));
    let mem = Series::labeled("mem", rng.walk(points, 30.0, 2.5));
    let quarters: Vec<f64> = (0..4).map(|_| 10.0 + 40.0 * rng.next_f64()).collect();
    let regions: Vec<f64> = (0..5).map(|_| 1.0 + 9.0 * rng.next_f64()).collect();
    log::debug!("demo: seed {:?}, {points} points", a.seed);

    let caps = Capabilities::detect();
    let height = a.style.height.unwrap_or(DEMO_HEIGHT);
    let base = || options(&a.style, caps).map(|b| b.height(height));

    let walks = [cpu, mem];
    let spark = base()?.title("Sparklines").build();
    emit(&Chart::Spark(&walks).try_render(&spark)?)?;
    emit("")?;

    let line = base()?.title("Random walks").build();
    emit(&Chart::Line(&walks).try_render(&line)?)?;

    let braille = base()?
        .title("Random walks (Braille)")
        .style(Style::Braille)
        .build();
    emit(&Chart::Line(&walks).try_render(&braille)?)?;

    let sales = [
        Series::labeled("north", quarters.clone()),
        Series::labeled("south", quarters.iter().map(|v| v * 0.6).collect::<Vec<_>>()),
    ];
    let labels = ["Q1", "Q2", "Q3", "Q4"];
    let grouped = base()?
        .title("Quarterly sales")
        .labels(labels)
        .show_values(true)
        .build();
    emit(&Chart::Bar(&sales).try_render(&grouped)?)?;

    let stacked = base()?
        .title("Quarterly sales (stacked)")
        .labels(labels)
        .bar_mode(BarMode::Stacked)
        .orientation(Orientation::Vertical)
        .build();
    emit(&Chart::Bar(&sales).try_render(&stacked)?)?;

    let share = Series::new(regions);
    let pie = base()?
        .title("Traffic by region")
        .labels(["eu", "us", "apac", "latam", "other"])
        .build();
    draw(Chart::Pie(&share), &pie)
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "termchart";
    println!(
        "
Example invocations
-------------------
• Sparkline        : {bin} spark 1 5 2 8 3 7 4 6
• From stdin       : seq 1 20 | {bin} spark --ascii
• Labeled bars     : {bin} bar 10 25 15 30 --labels \"Q1,Q2,Q3,Q4\" --show-values
• Stacked columns  : {bin} bar --series \"A:10,20\" --series \"B:5,10\" --stacked --vertical
• Line chart       : {bin} line 3 1 4 1 5 9 2 6 --title \"Digits\"
• Custom colours   : {bin} line --series \"a:1,3,2\" --series \"b:2,1,3\" --colors \"red,#00afff\"
• Braille lines    : {bin} line --series \"x:1,3,2,5\" --series \"y:2,2,4,1\" --braille
• Pie chart        : {bin} pie 50 30 20 --labels \"rent,food,fun\"
• Themes           : {bin} themes
• Everything       : {bin} demo --seed 7
"
    );
}
