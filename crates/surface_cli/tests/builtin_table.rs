//! Commands run end to end against the built-in table.

use std::sync::OnceLock;
use surface_cli::commands::{check, query, sample, show, OutputFormat};
use surface_cli::config::CliConfig;
use surface_cli::table::{load_table, NamedTable};
use surface_core::surface::SurfaceEvaluator;

fn fixture() -> &'static (NamedTable, SurfaceEvaluator<f64>) {
    static FIXTURE: OnceLock<(NamedTable, SurfaceEvaluator<f64>)> = OnceLock::new();
    FIXTURE.get_or_init(|| {
        let table = load_table(None).unwrap();
        let surface = surface_cli::build_surface(&table, &CliConfig::default()).unwrap();
        (table, surface)
    })
}

#[test]
fn test_query_between_neighbours() {
    let (_, surface) = fixture();
    let mut out = Vec::new();
    query::run(surface, 1.0, 1.0, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("f(1, 1) = "));
    assert!(text.trim_end().ends_with("[nested]"));

    let value: f64 = text["f(1, 1) = ".len()..]
        .split_whitespace()
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert!(value > 0.0452 && value < 0.1062, "value = {}", value);
}

#[test]
fn test_sample_interior_grid() {
    let (_, surface) = fixture();
    let samples = sample::sample_grid(surface, 20).unwrap();
    assert_eq!(samples.len(), 400);
    assert!(samples.iter().all(|s| s.value.is_finite()));
    assert!(samples.iter().all(|s| s.m > 0.7 && s.m < 6.0));

    let mut out = Vec::new();
    sample::write_samples(&samples, OutputFormat::Csv, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 401);
}

#[test]
fn test_check_reports_every_sample() {
    let (_, surface) = fixture();
    let mut out = Vec::new();
    let report = check::run(surface, 10, 0, &mut out).unwrap();
    assert_eq!(report.samples.len(), 10);
    assert_eq!(report.passed() + report.failed(), 10);
    for s in &report.samples {
        assert!(s.lower <= s.upper);
    }
}

#[test]
fn test_show_builtin() {
    let (table, surface) = fixture();
    let mut out = Vec::new();
    show::run(table, surface, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("table:            cya"));
    assert!(text.contains("shape:            7 x 8"));
}
