use std::io::Cursor;
use std::path::{Path, PathBuf};

use sales_trend::cli::{self, Prompter, Viewer};
use sales_trend::config::Config;
use sales_trend::ui::TrendSeries;

/// Records what the menu asked the graphical side to do.
#[derive(Default)]
struct RecordingViewer {
    shown: Vec<(String, TrendSeries)>,
    picks: Vec<PathBuf>,
    fail_plot: bool,
}

impl Viewer for RecordingViewer {
    fn show_trend(&mut self, dataset_name: &str, series: TrendSeries) -> anyhow::Result<()> {
        if self.fail_plot {
            anyhow::bail!("no display");
        }
        self.shown.push((dataset_name.to_string(), series));
        Ok(())
    }

    fn pick_dataset(&mut self) -> Option<PathBuf> {
        self.picks.pop()
    }
}

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn config() -> Config {
    Config {
        data_dir: data_dir(),
        dataset: None,
        currency: "PKR".to_string(),
    }
}

fn run_with(config: &Config, input: &str, viewer: &mut RecordingViewer) -> String {
    let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
    cli::run(config, &mut prompter, viewer).unwrap();
    String::from_utf8(prompter.into_output()).unwrap()
}

fn run_with_bytes(config: &Config, input: Vec<u8>, viewer: &mut RecordingViewer) -> String {
    let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
    cli::run(config, &mut prompter, viewer).unwrap();
    String::from_utf8(prompter.into_output()).unwrap()
}

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sales-trend-cli-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn full_menu_walkthrough() {
    let path = write_temp("linear.csv", "Time,Sales\n1,100\n2,200\n3,300\n");
    let config = Config {
        dataset: Some(path.clone()),
        ..config()
    };
    let mut viewer = RecordingViewer::default();

    let out = run_with(&config, "3\n4\n2\n5\n1\n5\n", &mut viewer);
    std::fs::remove_file(&path).ok();

    assert!(out.contains("Data loaded successfully!"));
    assert!(out.contains("Columns in the dataset: [\"Time\", \"Sales\"]"));
    assert!(out.contains("Equation of the regression line: y = 100.00x + 0.00"));
    assert!(out.contains("Integral of the regression line: y = (50.00)x^2 + (0.00)x + C"));
    assert!(out.contains("Predicted Sales for 5: PKR 500.00"));
    assert!(out.trim_end().ends_with("Goodbye!"));

    assert_eq!(viewer.shown.len(), 1);
    let (name, series) = &viewer.shown[0];
    assert!(name.ends_with("linear.csv"));
    assert_eq!(series.line, [[1.0, 100.0], [3.0, 300.0]]);
}

#[test]
fn bad_input_is_reported_and_asked_again() {
    let mut viewer = RecordingViewer::default();
    let out = run_with(&config(), "x\n9\n1\nseven\n9\n2\nsoon\n2030\n5\n", &mut viewer);

    assert!(out.contains("Invalid input! Please enter a number between 1 and 3."));
    assert!(out.contains("Invalid choice! Please select a valid option."));
    assert!(out.contains("Invalid input! Please enter a number between 1 and 6."));
    assert!(out.contains("Invalid year! Please enter a valid number."));
    assert!(out.contains("Predicted Sales for 2030: PKR "));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn schema_error_returns_to_dataset_selection() {
    let broken = write_temp("no-sales.csv", "Time,Revenue\n2019,1\n2020,2\n");
    let config = Config {
        dataset: Some(broken.clone()),
        ..config()
    };
    let mut viewer = RecordingViewer::default();

    let out = run_with(&config, "1\n3\n5\n", &mut viewer);
    std::fs::remove_file(&broken).ok();

    assert!(out.contains("Error: The dataset must contain 'Time' and 'Sales' columns (missing: Sales)"));
    assert!(out.contains("Please choose another dataset."));
    assert!(out.contains("Select the dataset to operate on:"));
    assert!(out.contains("Equation of the regression line: y = "));
}

#[test]
fn degenerate_dataset_is_reported() {
    let flat = write_temp("flat.csv", "Time,Sales\n2020,1\n2020,2\n");
    let config = Config {
        dataset: Some(flat.clone()),
        ..config()
    };
    let mut viewer = RecordingViewer::default();

    let out = run_with(&config, "q\n", &mut viewer);
    std::fs::remove_file(&flat).ok();

    assert!(out.contains("Error: All 'Time' values are identical"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn missing_catalog_file_is_reported() {
    let config = Config {
        data_dir: std::env::temp_dir().join("sales-trend-empty-catalog"),
        ..config()
    };
    let mut viewer = RecordingViewer::default();

    let out = run_with(&config, "2\nq\n", &mut viewer);

    assert!(out.contains("1. sales_data1.csv"));
    assert!(out.contains("File Not Found:"));
    assert!(out.contains("sales_data2.csv"));
    assert!(out.contains("Please choose another dataset."));
}

#[test]
fn browse_and_switch_datasets() {
    let picked = write_temp("picked.csv", "Time,Sales\n0,10\n10,30\n");
    let mut viewer = RecordingViewer {
        picks: vec![picked.clone()],
        ..Default::default()
    };

    // Only one pick is queued; the later browses come back empty.
    let out = run_with(&config(), "b\n3\n6\nb\nb\nq\n", &mut viewer);
    std::fs::remove_file(&picked).ok();

    assert!(out.contains("Equation of the regression line: y = 2.00x + 10.00"));
    assert!(out.contains("No file selected."));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn plot_failure_keeps_the_session_alive() {
    let mut viewer = RecordingViewer {
        fail_plot: true,
        ..Default::default()
    };
    let out = run_with(&config(), "1\n1\n3\n5\n", &mut viewer);

    assert!(out.contains("Could not show the plot: no display"));
    assert!(out.contains("Equation of the regression line:"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let mut viewer = RecordingViewer::default();
    let out = run_with(&config(), "1\n2\n", &mut viewer);

    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn currency_label_is_configurable() {
    let config = Config {
        currency: "USD".to_string(),
        ..config()
    };
    let mut viewer = RecordingViewer::default();
    let out = run_with(&config, "1\n2\n2024\n1\n5\n", &mut viewer);

    assert!(out.contains("Predicted Sales for 2024: USD "));
    assert_eq!(viewer.shown[0].1.sales_label, "Sales (USD)");
}

#[test]
fn non_utf8_menu_input_is_asked_again() {
    let mut input = b"1\n".to_vec();
    input.extend_from_slice(&[0xff, 0xfe, b'\n']);
    input.extend_from_slice(b"3\n5\n");
    let mut viewer = RecordingViewer::default();

    let out = run_with_bytes(&config(), input, &mut viewer);

    assert!(out.contains("Invalid input! Please enter a number between 1 and 6."));
    assert!(out.contains("Equation of the regression line: y = "));
    assert!(out.trim_end().ends_with("Goodbye!"));
}
