use crate::OutputFormat;
use anyhow::{Context, Result};
use harprobe_core::analysis::{
    AnalysisOptions, Analyzer, CaptureResults, CombinedResults, PrivacyAnalyzer, combine_results,
};
use harprobe_core::domain::DomainMap;
use harprobe_core::har::HarReader;
use harprobe_core::report::{ReportWriter, results_path_for};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Results of one capture and where they were written
#[derive(Debug, Clone, Serialize)]
pub struct CaptureReport {
    pub file: PathBuf,
    pub output: PathBuf,
    pub results: CaptureResults,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub captures: Vec<CaptureReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common: Option<CombinedResults>,
}

/// Analyze a HAR file and return its privacy metrics
pub fn analyze_har(
    file: &Path,
    domain_map: &DomainMap,
    options: AnalysisOptions,
) -> Result<CaptureResults> {
    tracing::debug!("Reading HAR file: {}", file.display());

    let har = HarReader::from_file(file)
        .with_context(|| format!("Failed to load HAR file {}", file.display()))?;
    HarReader::validate(&har).with_context(|| format!("Cannot analyze {}", file.display()))?;

    let results = PrivacyAnalyzer::new(domain_map)
        .with_options(options)
        .analyze(&har)
        .with_context(|| format!("Failed to analyze {}", file.display()))?;

    Ok(results)
}

/// Analyze every capture, then write per-capture and combined results.
///
/// Nothing is written unless all captures were analyzed successfully.
pub fn run(
    files: &[PathBuf],
    domain_map_path: &Path,
    common_output: &Path,
    options: AnalysisOptions,
) -> Result<RunReport> {
    let domain_map = DomainMap::from_file(domain_map_path)
        .with_context(|| format!("Failed to load domain map {}", domain_map_path.display()))?;

    let mut captures = Vec::with_capacity(files.len());
    for file in files {
        tracing::info!("Analyzing HAR file: {}", file.display());
        let results = analyze_har(file, &domain_map, options)?;
        captures.push(CaptureReport {
            file: file.clone(),
            output: results_path_for(file),
            results,
        });
    }

    for capture in &captures {
        ReportWriter::to_file(&capture.results, &capture.output)
            .with_context(|| format!("Failed to write {}", capture.output.display()))?;
    }

    let common = if captures.len() >= 2 {
        let all: Vec<CaptureResults> = captures.iter().map(|c| c.results.clone()).collect();
        let combined = combine_results(&all)?;
        ReportWriter::to_file(&combined, common_output)
            .with_context(|| format!("Failed to write {}", common_output.display()))?;
        Some(combined)
    } else {
        None
    };

    Ok(RunReport { captures, common })
}

pub fn execute(
    files: &[PathBuf],
    domain_map_path: &Path,
    common_output: &Path,
    options: AnalysisOptions,
    format: OutputFormat,
) -> Result<()> {
    let report = run(files, domain_map_path, common_output, options)?;

    match format {
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Pretty => output_pretty(&report, common_output),
    }

    Ok(())
}

fn output_pretty(report: &RunReport, common_output: &Path) {
    use console::style;

    for capture in &report.captures {
        let r = &capture.results;
        println!(
            "\n{}",
            style(format!("Privacy Report: {}", capture.file.display()))
                .bold()
                .cyan()
        );
        println!("  Requests:                    {}", r.num_reqs);
        println!("  Responses:                   {}", r.num_responses);
        println!("  Redirections:                {}", r.num_redirections);
        println!(
            "  Cross-origin Redirections:   {}",
            r.num_cross_origin_redirections
        );
        println!("  Requests with Cookies:       {}", r.num_requests_w_cookies);
        println!("  Responses setting Cookies:   {}", r.num_responses_w_cookies);
        println!("  Third-party Domains:         {}", r.third_party_domains.len());
        println!("  Third-party Entities:        {}", r.third_party_entities.len());
        println!(
            "  Potential Tracking Cookies:  {}",
            r.potential_tracking_cookies.len()
        );
        println!(
            "  Non-GET Request Origins:     {}",
            r.non_get_request_origins.len()
        );

        if !r.third_party_entities.is_empty() {
            println!("\n{}", style("Third-party Entities:").bold());
            for entity in &r.third_party_entities {
                println!("  {}", entity);
            }
        }

        println!("\n  {} {}", style("Written to").dim(), capture.output.display());
    }

    if let Some(common) = &report.common {
        println!("\n{}", style("Common to all captures").bold().cyan());
        println!(
            "  Third-party Domains:   {}",
            join_or_none(&common.common_third_party_domains)
        );
        println!(
            "  Third-party Entities:  {}",
            join_or_none(&common.common_third_party_entities)
        );
        println!("  Tracking Cookies:      {}", common.common_cookies.len());
        for cookie in &common.common_cookies {
            println!("    {}={} ({})", cookie.name, cookie.value, cookie.domain);
        }
        println!("\n  {} {}", style("Written to").dim(), common_output.display());
    }

    println!(); // trailing newline
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

fn output_json(report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}
