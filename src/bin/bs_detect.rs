use blurred_segments::config::detect::{self, DetectMode};
use blurred_segments::detector::{Detector, Step};
use blurred_segments::diagnostics::{
    DetectionReport, InputDescriptor, ProbeReport, SegmentDescriptor, TimingBreakdown,
};
use blurred_segments::edges::GradientField;
use blurred_segments::image::io::{load_grayscale_image, save_segment_overlay, write_json_file};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = detect::load_config(Path::new(&config_path))?;
    let with_points = config.output.with_points;

    let t0 = Instant::now();
    let gray = load_grayscale_image(&config.input)?;
    let mut timings = TimingBreakdown::default();
    let load_ms = t0.elapsed().as_secs_f64() * 1000.0;
    timings.push("load", load_ms);

    let field = GradientField::new(&gray.as_view(), config.gradient.clone());
    let field_ms = t0.elapsed().as_secs_f64() * 1000.0 - load_ms;
    timings.push("gradient", field_ms);

    let mut detector = Detector::new(field, config.detector.clone());
    let mut probes = Vec::new();
    let mut sweep = None;
    let mut segments = Vec::new();
    match config.mode {
        DetectMode::Sweep | DetectMode::BalancedSweep => {
            let report = if config.mode == DetectMode::Sweep {
                detector.detect_all()
            } else {
                detector.detect_all_balanced()
            };
            timings.push("sweep", report.timings.total_ms);
            sweep = Some(report);
            segments = detector.take_blurred_segments();
        }
        DetectMode::Probes => {
            let started = Instant::now();
            for probe in &config.probes {
                let result = match probe.center {
                    Some(center) => detector.detect_centered(probe.p1, probe.p2, center),
                    None => detector.detect(probe.p1, probe.p2),
                };
                let failure = detector.track_failure();
                let bs = if result.is_ok() {
                    detector.take_blurred_segment(Step::Final)
                } else {
                    None
                };
                probes.push(ProbeReport {
                    p1: probe.p1,
                    p2: probe.p2,
                    center: probe.center,
                    result,
                    code: result.code(),
                    failure,
                    segment: bs
                        .as_ref()
                        .map(|bs| SegmentDescriptor::from_segment(bs, with_points)),
                });
                segments.extend(bs);
            }
            timings.push("probes", started.elapsed().as_secs_f64() * 1000.0);
        }
    }
    timings.total_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let report = DetectionReport {
        version: Detector::version().to_string(),
        input: InputDescriptor {
            path: config.input.display().to_string(),
            width: gray.width(),
            height: gray.height(),
        },
        timings,
        probes,
        sweep,
        segments: segments
            .iter()
            .map(|bs| SegmentDescriptor::from_segment(bs, with_points))
            .collect(),
    };
    write_json_file(&config.output.segments_json, &report)?;
    println!(
        "Saved {} blurred segments to {}",
        report.segments.len(),
        config.output.segments_json.display()
    );

    if let Some(path) = &config.output.overlay_image {
        save_segment_overlay(&gray, &segments, path)?;
        println!("Saved overlay to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: bs_detect <config.json>".to_string()
}
