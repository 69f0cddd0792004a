use termchart::{
    BarMode, Capabilities, Chart, ChartError, Options, Orientation, Series, Style,
    core::scale::normalize, render::pie::percentages,
};

const STYLES: [Style; 4] = [Style::Auto, Style::Ascii, Style::Unicode, Style::Braille];

fn awkward_inputs() -> Vec<Vec<Series>> {
    vec![
        vec![Series::new(vec![3.0])],
        vec![Series::new(vec![0.0, 0.0, 0.0])],
        vec![Series::new(vec![7.0; 12])],
        vec![Series::new(vec![-4.0, -1.0, -9.0])],
        vec![Series::new(vec![-5.0, 0.0, 5.0, 1e6, -1e6])],
        vec![
            Series::labeled("a", vec![1.0, 2.0, 3.0, 4.0]),
            Series::labeled("b", vec![4.0]),
            Series::new(vec![0.5, 9.5, 2.0]),
        ],
        vec![Series::new((0..300).map(|i| f64::from(i).sin()).collect::<Vec<_>>())],
    ]
}

fn every_option_set() -> Vec<Options> {
    let mut out = Vec::new();
    for style in STYLES {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for mode in [BarMode::Grouped, BarMode::Stacked] {
                for (w, h) in [(80, 24), (1, 1), (5, 3), (0, 0)] {
                    out.push(
                        Options::builder()
                            .size(w, h)
                            .style(style)
                            .orientation(orientation)
                            .bar_mode(mode)
                            .title("t")
                            .labels(["x", "yy"])
                            .show_values(true)
                            .color(w % 2 == 0)
                            .build(),
                    );
                }
            }
        }
    }
    out
}

/// Printable text plus `\n` and well-formed SGR sequences.
fn is_clean(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => {}
            '\x1b' => {
                if chars.next() != Some('[') {
                    return false;
                }
                loop {
                    match chars.next() {
                        Some('m') => break,
                        Some(d) if d.is_ascii_digit() || d == ';' => {}
                        _ => return false,
                    }
                }
            }
            c if c.is_control() => return false,
            _ => {}
        }
    }
    true
}

#[test_log::test]
fn finite_input_always_renders_clean_text() {
    for series in awkward_inputs() {
        for opts in every_option_set() {
            for chart in [
                Chart::Bar(&series),
                Chart::Line(&series),
                Chart::Spark(&series),
                Chart::Pie(&series[0]),
            ] {
                let out = chart.render(&opts);
                assert!(is_clean(&out), "{} produced control codes", chart.kind());
            }
        }
    }
}

#[test_log::test]
fn ansi_spans_are_always_closed() {
    let s = [Series::new(vec![1.0, 3.0, 2.0]), Series::new(vec![2.0, 1.0, 3.0])];
    let o = Options::builder().color(true).build();
    for chart in [Chart::Bar(&s), Chart::Line(&s), Chart::Spark(&s), Chart::Pie(&s[0])] {
        let out = chart.render(&o);
        let opens = out.matches('\x1b').count();
        let resets = out.matches("\x1b[0m").count();
        assert!(resets > 0);
        assert_eq!(opens, resets * 2, "{}", chart.kind());
    }
}

#[test_log::test]
fn normalize_is_total() {
    assert_eq!(normalize(&[]), (vec![], 0.0, 0.0));
    assert_eq!(normalize(&[5.0]), (vec![0.5], 5.0, 5.0));
}

#[test_log::test]
fn identical_requests_render_identical_bytes() {
    let s = [Series::new(vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0])];
    for opts in every_option_set() {
        for chart in [Chart::Bar(&s), Chart::Line(&s), Chart::Spark(&s), Chart::Pie(&s[0])] {
            assert_eq!(chart.render(&opts), chart.render(&opts));
        }
    }
}

#[test_log::test]
fn bigger_bars_are_never_shorter() {
    let o = Options::builder().style(Style::Ascii).color(false).build();
    let out = termchart::bar(&[Series::new(vec![10.0, 20.0])], &o);
    let runs: Vec<usize> = out.lines().map(|l| l.matches('#').count()).collect();
    assert_eq!(runs.len(), 2);
    assert!(runs[0] > 0);
    assert!(runs[1] >= runs[0]);
}

#[test_log::test]
fn braille_output_fills_the_requested_grid() {
    for (w, h) in [(1, 1), (7, 3), (40, 12)] {
        for n in [1, 2, 5, 100] {
            let values: Vec<f64> = (0..n).map(|i| f64::from(i * 7 % 5)).collect();
            let o = Options::builder()
                .style(Style::Braille)
                .show_axes(false)
                .color(false)
                .size(w, h)
                .build();
            let out = termchart::line(&[Series::new(values)], &o);
            let lines: Vec<&str> = out.lines().collect();
            assert_eq!(lines.len(), h);
            for l in lines {
                assert_eq!(l.chars().count(), w);
                assert!(l.chars().all(|c| ('\u{2800}'..='\u{28FF}').contains(&c)));
            }
        }
    }
}

#[test_log::test]
fn pie_percentages_close() {
    let p = percentages(&[33.33, 33.33, 33.34]);
    assert!((p.iter().sum::<f64>() - 100.0).abs() <= 0.1);
}

#[test_log::test]
fn failures_are_typed_and_void_the_text() {
    let o = Options::default();
    let bad = [Series::new(vec![1.0, f64::NAN])];
    assert_eq!(
        Chart::Spark(&bad).try_render(&o),
        Err(ChartError::NonFinite { series: 0, index: 1 })
    );
    assert_eq!(Chart::Line(&bad).render(&o), "");
    assert_eq!(Chart::Bar(&[]).try_render(&o), Err(ChartError::EmptyData));
    assert_eq!(termchart::pie_values(&[0.0, 0.0], &[]), "");
}

#[test_log::test]
fn auto_style_follows_the_capabilities() {
    let caps = Capabilities {
        unicode: false,
        ..Capabilities::default()
    };
    let o = Options::builder().capabilities(caps).color(false).build();
    let out = termchart::spark(&[Series::new(vec![0.0, 10.0])], &o);
    assert_eq!(out, "_@");
}

#[test_log::test]
fn convenience_helpers_use_defaults() {
    assert_eq!(termchart::spark_values(&[0.0, 10.0]), "▁█");
    let bars = termchart::bar_values(&[1.0, 2.0], &["a", "b"]);
    assert!(bars.starts_with("a █"));
    assert_eq!(termchart::line_values(&[1.0, 2.0]).lines().count(), 24);
    assert!(termchart::pie_values(&[1.0, 1.0], &[]).contains("Item 2"));
}
