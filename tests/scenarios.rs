use termchart::{
    BarMode, Options, OptionsBuilder, Orientation, Series, Style, bar, line, pie, render::braille,
    spark,
};

fn plain(style: Style) -> OptionsBuilder {
    Options::builder().style(style).color(false)
}

fn run_len(line: &str, glyph: char) -> usize {
    line.chars().filter(|&c| c == glyph).count()
}

#[test_log::test]
fn single_series_bars_scale_against_the_maximum() {
    let out = bar(&[Series::new(vec![10.0, 25.0, 15.0, 30.0])], &plain(Style::Ascii).build());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    for l in &lines {
        assert!(!l.is_empty());
        assert!(l.chars().all(|c| c == '#' || c == ' '));
    }
    let runs: Vec<usize> = lines.iter().map(|l| run_len(l, '#')).collect();
    // 80 columns minus the two separators
    assert_eq!(runs, vec![26, 65, 39, 78]);
    let longest = runs.iter().copied().max().unwrap();
    assert_eq!(runs[3], longest);
    assert!(runs[1] > runs[0] && runs[1] > runs[2]);
}

#[test_log::test]
fn sparkline_spans_the_whole_ramp() {
    let s = Series::new(vec![1.0, 5.0, 2.0, 8.0, 3.0, 7.0, 4.0, 6.0]);
    let out = spark(&[s], &plain(Style::Unicode).build());
    assert!(!out.contains('\n'));
    let runes: Vec<char> = out.chars().collect();
    assert_eq!(runes.len(), 8);
    assert_eq!(runes[0], '▁');
    assert_eq!(runes[3], '█');
    assert!(runes.iter().all(|c| ('▁'..='█').contains(c)));
}

#[test_log::test]
fn even_pie_splits_into_two_halves() {
    let o = plain(Style::Ascii).labels(["yes", "no"]).build();
    let out = pie(&Series::new(vec![50.0, 50.0]), &o);
    let legend: Vec<&str> = out.lines().filter(|l| l.contains("50.0%")).collect();
    assert_eq!(legend.len(), 2);
    assert!(legend[0].contains("yes") && legend[1].contains("no"));

    let block: String = out
        .lines()
        .map(|l| l.split("  # ").next().unwrap_or(""))
        .collect();
    assert!(block.contains('#'));
    assert!(block.contains('*'));
    assert_eq!(out.lines().count(), 17);
}

#[test_log::test]
fn flat_braille_line_is_one_mid_height_dot_row() {
    let o = plain(Style::Braille).size(20, 6).show_axes(false).build();
    let out = line(&[Series::new(vec![5.0, 5.0, 5.0, 5.0])], &o);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    // 24 dot rows: round(0.5 * 23) = 12 -> cell row 3, top dot pair
    let row = braille::braille_char(0x01 | 0x08);
    for (i, l) in lines.iter().enumerate() {
        let expect = if i == 3 { row } else { braille::BRAILLE_BLANK };
        assert!(l.chars().all(|c| c == expect), "row {i}: {l}");
        assert_eq!(l.chars().count(), 20);
    }
}

#[test_log::test]
fn stacked_bars_end_with_the_last_series() {
    let s = [
        Series::labeled("A", vec![10.0, 20.0]),
        Series::labeled("B", vec![5.0, 10.0]),
    ];

    let across = plain(Style::Ascii).bar_mode(BarMode::Stacked).build();
    let out = bar(&s, &across);
    let rows: Vec<&str> = out.lines().take(2).collect();
    let len = |l: &str| l.trim_end().chars().count();
    assert!(len(rows[1]) > len(rows[0]));
    for r in &rows {
        assert_eq!(r.trim_end().chars().last(), Some('='));
    }

    let up = plain(Style::Ascii)
        .bar_mode(BarMode::Stacked)
        .orientation(Orientation::Vertical)
        .size(20, 10)
        .build();
    let out = bar(&s, &up);
    // legend takes the last two rows
    let grid: Vec<Vec<char>> = out.lines().take(8).map(|l| l.chars().collect()).collect();
    let column_top = |x: usize| {
        grid.iter()
            .enumerate()
            .find_map(|(y, r)| r.get(x).filter(|c| **c != ' ').map(|c| (y, *c)))
    };
    // slots are 3 columns wide with a 1 column gap
    let (first_top, first_glyph) = column_top(0).unwrap();
    let (second_top, second_glyph) = column_top(4).unwrap();
    assert_eq!(first_glyph, '=');
    assert_eq!(second_glyph, '=');
    assert!(second_top < first_top);
}
