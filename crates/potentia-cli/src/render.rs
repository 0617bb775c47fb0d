use crate::error::{CliError, Result};
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use potentia::workflows::rational::RationalAnalysis;
use potentia::workflows::sphere::SphereProfile;
use std::fmt::Display;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, info};

const CANVAS_SIZE: (u32, u32) = (1200, 800);

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;
type DrawResult<DB> =
    std::result::Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

pub fn render_sphere(profile: &SphereProfile, path: &Path) -> Result<()> {
    info!("Rendering sphere profile to {:?}", path);
    if is_svg(path) {
        let root = SVGBackend::new(path, CANVAS_SIZE).into_drawing_area();
        draw_sphere(&root, profile).map_err(|e| plot_error(path, e))?;
        root.present().map_err(|e| plot_error(path, e))
    } else {
        let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
        draw_sphere(&root, profile).map_err(|e| plot_error(path, e))?;
        root.present().map_err(|e| plot_error(path, e))
    }
}

pub fn render_rational(analysis: &RationalAnalysis, annotated: &[f64], path: &Path) -> Result<()> {
    info!("Rendering rational potential to {:?}", path);
    if is_svg(path) {
        let root = SVGBackend::new(path, CANVAS_SIZE).into_drawing_area();
        draw_rational(&root, analysis, annotated).map_err(|e| plot_error(path, e))?;
        root.present().map_err(|e| plot_error(path, e))
    } else {
        let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
        draw_rational(&root, analysis, annotated).map_err(|e| plot_error(path, e))?;
        root.present().map_err(|e| plot_error(path, e))
    }
}

fn draw_sphere<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    profile: &SphereProfile,
) -> DrawResult<DB> {
    root.fill(&WHITE)?;

    let radius = profile.sphere.radius();
    let unit_energy = profile.surface.potential.abs();
    let x_range = 0.0..profile.outer_radius();
    let y_range = padded_range(profile.potentials.iter().copied().chain([0.0]));
    debug!(?x_range, ?y_range, "Sphere chart extents.");

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Gravitational Potential Energy of a Uniform Sphere",
            ("sans-serif", 30).into_font(),
        )
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc("Distance from centre, r/R")
        .y_desc("Potential energy, V(r)/(GMm/R)")
        .x_label_formatter(&|r| multiple_label(*r, radius, "R"))
        .y_label_formatter(&|v| multiple_label(*v, unit_energy, "GMm/R"))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            profile
                .samples
                .iter()
                .copied()
                .zip(profile.potentials.iter().copied()),
            BLUE.stroke_width(3),
        ))?
        .label("V(r)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    reference_line(&mut chart, (x_range.start, 0.0), (x_range.end, 0.0), BLACK.mix(0.3))?;
    chart
        .draw_series(LineSeries::new(
            vec![(radius, y_range.start), (radius, y_range.end)],
            GREEN.mix(0.5),
        ))?
        .label("r = R")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    let formula_font = ("sans-serif", 20).into_font();
    chart.draw_series([
        Text::new(
            "V(r) = -GMm/(2R^3) (3R^2 - r^2)",
            (0.3 * radius, 0.77 * profile.centre.potential),
            formula_font.clone(),
        ),
        Text::new(
            "V(r) = -GMm/r",
            (0.6 * x_range.end, 0.15 * profile.surface.potential),
            formula_font,
        ),
    ])?;

    labelled_point(
        &mut chart,
        (profile.centre.position, profile.centre.potential),
        format!("(0, {:.2})", profile.centre.potential),
        RED,
    )?;
    labelled_point(
        &mut chart,
        (profile.surface.position, profile.surface.potential),
        format!("(R, {:.2})", profile.surface.potential),
        RED,
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_rational<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    analysis: &RationalAnalysis,
    annotated: &[f64],
) -> DrawResult<DB> {
    root.fill(&WHITE)?;

    let x_range = sample_domain(&analysis.samples);
    let y_range = padded_range(analysis.potentials.iter().copied());
    debug!(?x_range, ?y_range, "Rational chart extents.");

    let a = analysis.potential.a();
    let b = analysis.potential.b();
    let point = &analysis.critical_point;

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("Potential Energy Curve V(x) = {}/x^3 - {}/x", a, b),
            ("sans-serif", 30).into_font(),
        )
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("V(x)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            analysis
                .samples
                .iter()
                .copied()
                .zip(analysis.potentials.iter().copied()),
            BLUE.stroke_width(2),
        ))?
        .label(format!("V(x) = {}/x^3 - {}/x", a, b))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    reference_line(&mut chart, (x_range.start, 0.0), (x_range.end, 0.0), BLACK.mix(0.3))?;

    chart.draw_series(analysis.markers.iter().map(|marker| {
        Circle::new(
            (marker.position, marker.potential),
            4,
            GREEN.mix(0.7).filled(),
        )
    }))?;

    for marker in analysis
        .markers
        .iter()
        .filter(|marker| annotated.contains(&marker.position))
    {
        labelled_point(
            &mut chart,
            (marker.position, marker.potential),
            format!("x={}, V={:.2}", marker.position, marker.potential),
            GREEN,
        )?;
    }

    if analysis.critical_point_in_range() {
        labelled_point(
            &mut chart,
            (point.position, point.value),
            format!(
                "{} ({:.2}, {:.2})",
                point.kind, point.position, point.value
            ),
            RED,
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn reference_line<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    from: (f64, f64),
    to: (f64, f64),
    style: RGBAColor,
) -> DrawResult<DB> {
    chart.draw_series(LineSeries::new(vec![from, to], style))?;
    Ok(())
}

fn labelled_point<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    at: (f64, f64),
    label: String,
    color: RGBColor,
) -> DrawResult<DB> {
    chart.draw_series(std::iter::once(
        EmptyElement::at(at)
            + Circle::new((0, 0), 6, color.filled())
            + Text::new(label, (10, -20), ("sans-serif", 16).into_font()),
    ))?;
    Ok(())
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn plot_error(path: &Path, error: impl Display) -> CliError {
    CliError::Plot {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// Value range of the finite entries, widened by 10% of the span on each side.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() || !max.is_finite() {
        return -1.0..1.0;
    }
    let span = max - min;
    let margin = if span > 0.0 { 0.1 * span } else { 1.0 };
    (min - margin)..(max + margin)
}

/// Tick label for `value` expressed as a multiple of `unit`, e.g. `2R`.
fn multiple_label(value: f64, unit: f64, symbol: &str) -> String {
    if unit == 0.0 || value == 0.0 {
        return "0".to_string();
    }
    let multiple = value / unit;
    if (multiple - multiple.round()).abs() < 1e-9 {
        format!("{}{}", multiple.round(), symbol)
    } else {
        format!("{:.2}{}", multiple, symbol)
    }
}

fn sample_domain(samples: &[f64]) -> Range<f64> {
    match (samples.first(), samples.last()) {
        (Some(&start), Some(&end)) if end > start => start..end,
        (Some(&start), _) => (start - 1.0)..(start + 1.0),
        _ => 0.0..1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn svg_extension_is_detected_case_insensitively() {
        assert!(is_svg(&PathBuf::from("plot.svg")));
        assert!(is_svg(&PathBuf::from("out/PLOT.SVG")));
        assert!(!is_svg(&PathBuf::from("plot.png")));
        assert!(!is_svg(&PathBuf::from("plot")));
    }

    #[test]
    fn padded_range_widens_by_a_tenth_of_the_span() {
        let range = padded_range([-1.5, -1.0, 0.0].into_iter());
        assert!((range.start - (-1.65)).abs() < 1e-12);
        assert!((range.end - 0.15).abs() < 1e-12);
    }

    #[test]
    fn padded_range_ignores_non_finite_values() {
        let range = padded_range([f64::INFINITY, 2.0, f64::NAN, 4.0].into_iter());
        assert!((range.start - 1.8).abs() < 1e-12);
        assert!((range.end - 4.2).abs() < 1e-12);
    }

    #[test]
    fn padded_range_of_flat_or_empty_series_is_non_degenerate() {
        assert_eq!(padded_range([3.0, 3.0].into_iter()), 2.0..4.0);
        assert_eq!(padded_range(std::iter::empty()), -1.0..1.0);
    }

    #[test]
    fn multiple_label_expresses_ticks_in_units() {
        assert_eq!(multiple_label(0.0, 2.0, "R"), "0");
        assert_eq!(multiple_label(4.0, 2.0, "R"), "2R");
        assert_eq!(multiple_label(-1.5, 1.0, "GMm/R"), "-1.50GMm/R");
        assert_eq!(multiple_label(-3.0, 1.5, "GMm/R"), "-2GMm/R");
        assert_eq!(multiple_label(1.0, 0.0, "R"), "0");
    }

    #[test]
    fn sample_domain_spans_first_to_last_sample() {
        assert_eq!(sample_domain(&[1.0, 2.0, 15.0]), 1.0..15.0);
        assert_eq!(sample_domain(&[2.0]), 1.0..3.0);
        assert_eq!(sample_domain(&[]), 0.0..1.0);
    }

    #[test]
    fn plot_error_names_the_target_file() {
        let error = plot_error(Path::new("chart.png"), "backend exploded");
        let message = error.to_string();
        assert!(message.contains("chart.png"));
        assert!(message.contains("backend exploded"));
    }
}
