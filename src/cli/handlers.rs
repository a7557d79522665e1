use tracing::debug;

use crate::{
    core::{config::ChartConfig, error::ChartError, series::Series},
    render::{bar_chart, line_chart, progress_bar, sparkline, table},
};

use super::parse::{BarArgs, LineArgs, ProgressArgs, SeriesArgs, SparkArgs, TableArgs};

/// Rule printed around the demo.
const DEMO_RULE_WIDTH: usize = 70;

fn series(a: SeriesArgs) -> Result<(Series, Option<String>), ChartError> {
    let series = Series::try_zip(a.labels, a.values)?;
    series.validate()?;
    Ok((series, a.title))
}

pub fn bar(a: BarArgs) -> Result<String, ChartError> {
    let (data, title) = series(a.series)?;
    let cfg = ChartConfig::builder(a.width, 1)
        .title_opt(title.as_deref())
        .build()?;
    debug!(points = data.len(), width = cfg.width, "bar chart");
    Ok(bar_chart(&data, &cfg.title, cfg.width))
}

pub fn line(a: LineArgs) -> Result<String, ChartError> {
    let (data, title) = series(a.series)?;
    let cfg = ChartConfig::builder(a.width, a.height)
        .title_opt(title.as_deref())
        .build()?;
    debug!(points = data.len(), width = cfg.width, height = cfg.height, "line chart");
    Ok(line_chart(&data, &cfg.title, cfg.width, cfg.height))
}

pub fn spark(a: SparkArgs) -> Result<String, ChartError> {
    let data = Series::plain(a.values);
    data.validate()?;
    debug!(points = data.len(), "sparkline");
    Ok(sparkline(&data, a.title.as_deref().unwrap_or_default()))
}

pub fn table_cmd(a: &TableArgs) -> String {
    let headers: Vec<&str> = a.header.split(a.delimiter).map(str::trim).collect();
    let rows: Vec<Vec<&str>> = a
        .rows
        .iter()
        .map(|r| r.split(a.delimiter).map(str::trim).collect())
        .collect();
    debug!(columns = headers.len(), rows = rows.len(), "table");
    table(&headers, &rows, a.title.as_deref().unwrap_or_default())
}

pub fn progress(a: &ProgressArgs) -> Result<String, ChartError> {
    let cfg = ChartConfig::builder(a.width, 1).build()?;
    for (label, value) in [("current", a.current), ("total", a.total)] {
        if !value.is_finite() {
            return Err(ChartError::NonFinite {
                label: label.to_owned(),
                value,
            });
        }
    }
    Ok(progress_bar(a.current, a.total, cfg.width, &a.label))
}

/// Sample invocations of every renderer.
#[must_use]
pub fn demo() -> String {
    let rule = "=".repeat(DEMO_RULE_WIDTH);

    let sales = Series::from([
        ("Jan", 12_500.0),
        ("Feb", 18_200.0),
        ("Mar", 15_800.0),
        ("Apr", 22_100.0),
        ("May", 19_500.0),
        ("Jun", 25_300.0),
    ]);
    let stock = Series::from([
        ("Mon", 145.2),
        ("Tue", 148.5),
        ("Wed", 142.8),
        ("Thu", 151.3),
        ("Fri", 149.7),
        ("Sat", 155.2),
        ("Sun", 158.9),
    ]);
    let temps = Series::from([
        22.0, 24.0, 23.0, 26.0, 28.0, 27.0, 25.0, 24.0, 23.0, 22.0, 21.0, 23.0, 25.0, 27.0, 29.0,
        28.0,
    ]);
    let headers = ["Asset", "Price", "Change", "Volume"];
    let rows = [
        ["BTC", "42,150", "+2.3%", "12.5B"],
        ["ETH", "2,280", "-0.8%", "5.2B"],
        ["SOL", "98.50", "+5.1%", "1.8B"],
        ["XRP", "0.62", "+1.2%", "892M"],
    ];

    let blocks = [
        format!("\n{rule}"),
        "  ASCII CHART GENERATOR - DEMO".to_owned(),
        rule.clone(),
        bar_chart(&sales, "📊 Monthly Sales (2024)", 50),
        line_chart(&stock, "📈 Stock Price (Weekly)", 50, 10),
        format!("\n{}", sparkline(&temps, "🌡️  Temperature")),
        table(&headers, &rows, "💹 Crypto Market"),
        "\n".to_owned(),
        progress_bar(75.0, 100.0, 40, "Download"),
        progress_bar(42.0, 100.0, 40, "Upload  "),
        progress_bar(100.0, 100.0, 40, "Complete"),
        format!("\n{rule}\n"),
    ];
    blocks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ConfigError;

    fn series_args(values: Vec<f64>, labels: Option<Vec<&str>>) -> SeriesArgs {
        SeriesArgs {
            values,
            labels: labels.map(|l| l.into_iter().map(String::from).collect()),
            title: Some("T".into()),
        }
    }

    #[test]
    fn bar_rejects_zero_width() {
        let err = bar(BarArgs {
            series: series_args(vec![1.0], None),
            width: 0,
        })
        .unwrap_err();
        assert_eq!(err, ChartError::Config(ConfigError::ZeroDimension("width")));
    }

    #[test]
    fn line_rejects_nan() {
        let err = line(LineArgs {
            series: series_args(vec![1.0, f64::NAN], Some(vec!["a", "b"])),
            width: 10,
            height: 4,
        })
        .unwrap_err();
        assert!(matches!(err, ChartError::NonFinite { ref label, .. } if label == "b"));
    }

    #[test]
    fn label_count_must_match() {
        let err = bar(BarArgs {
            series: series_args(vec![1.0, 2.0], Some(vec!["a"])),
            width: 10,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ChartError::Config(ConfigError::LabelCountMismatch { .. })
        ));
    }

    #[test]
    fn table_splits_on_delimiter() {
        let out = table_cmd(&TableArgs {
            header: "a; b".into(),
            rows: vec!["42,150;x".into()],
            delimiter: ';',
            title: None,
        });
        assert!(out.contains("│ 42,150 │ x │"));
    }

    #[test]
    fn progress_rejects_infinite_total() {
        let err = progress(&ProgressArgs {
            current: 1.0,
            total: f64::INFINITY,
            width: 10,
            label: "p".into(),
        })
        .unwrap_err();
        assert!(matches!(err, ChartError::NonFinite { ref label, .. } if label == "total"));
    }

    #[test]
    fn demo_has_every_renderer() {
        let out = demo();
        assert!(out.contains("📊 Monthly Sales (2024)"));
        assert!(out.contains("25,300"));
        assert!(out.contains("158.9 ┤"));
        assert!(out.contains("(min: 21.0, max: 29.0)"));
        assert!(out.contains("│ Asset │"));
        assert!(out.contains(
            "  Complete: [████████████████████████████████████████] 100.0% (100/100)"
        ));
    }
}
