use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::detector::analyze;
use crate::grouping;
use crate::highlighter;

/// Full analysis report as a JSON string.
#[pyfunction]
fn analyze_json(text: &str) -> PyResult<String> {
    serde_json::to_string(&analyze(text)).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Highlighted markup for the normalized text.
#[pyfunction]
fn highlight_html(text: &str) -> String {
    let analysis = analyze(text);
    highlighter::render_spans(&analysis.text, &analysis.spans)
}

/// Legend pills for the categories found.
#[pyfunction]
fn legend_html(text: &str) -> String {
    let analysis = analyze(text);
    let categories = highlighter::found_categories(&analysis.lexicon_hits, &analysis.rule_hits);
    highlighter::render_legend(&categories)
}

/// Grouped-hit bullet list for the explanation generator prompt.
#[pyfunction]
fn detection_summary(text: &str) -> String {
    grouping::detection_summary(&analyze(text).grouped)
}

#[pymodule]
fn bias_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze_json, m)?)?;
    m.add_function(wrap_pyfunction!(highlight_html, m)?)?;
    m.add_function(wrap_pyfunction!(legend_html, m)?)?;
    m.add_function(wrap_pyfunction!(detection_summary, m)?)?;
    Ok(())
}
