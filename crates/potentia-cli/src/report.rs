use potentia::core::extremum::CriticalKind;
use potentia::workflows::rational::RationalAnalysis;
use potentia::workflows::sphere::SphereProfile;
use std::fmt;

/// Console summary of a uniform-sphere profile.
pub struct SphereReport<'a>(pub &'a SphereProfile);

impl fmt::Display for SphereReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.0;
        let sphere = &profile.sphere;

        writeln!(f, "Gravitational potential energy of a uniform sphere")?;
        writeln!(
            f,
            "Parameters: G = {}, M = {}, m = {}, R = {}",
            sphere.gravitational_constant(),
            sphere.source_mass(),
            sphere.test_mass(),
            sphere.radius()
        )?;
        writeln!(
            f,
            "Sampled {} points over [0, {}]",
            profile.samples.len(),
            profile.outer_radius()
        )?;
        writeln!(f)?;
        writeln!(f, "  Interior (r < R):  V(r) = -GMm/(2R^3) * (3R^2 - r^2)")?;
        writeln!(f, "  Exterior (r >= R): V(r) = -GMm/r")?;
        writeln!(f)?;
        writeln!(
            f,
            "  Centre  (r = 0): V = -3GMm/(2R) = {:.3}",
            profile.centre.potential
        )?;
        writeln!(
            f,
            "  Surface (r = R): V = -GMm/R     = {:.3}",
            profile.surface.potential
        )?;
        writeln!(
            f,
            "  Relative mismatch of the branches at r = R: {:.1e}",
            profile.continuity_gap
        )?;
        writeln!(f, "  As r -> infinity, V(r) -> 0 from below")
    }
}

/// Console summary of a rational potential analysis.
pub struct RationalReport<'a>(pub &'a RationalAnalysis);

impl fmt::Display for RationalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        let a = analysis.potential.a();
        let b = analysis.potential.b();
        let point = &analysis.critical_point;

        writeln!(f, "Potential energy analysis: V(x) = {}/x^3 - {}/x", a, b)?;
        writeln!(f, "Parameters: A = {}, B = {}", a, b)?;
        writeln!(f)?;
        writeln!(f, "As x approaches 0+:")?;
        writeln!(f, "  {}", near_origin_behaviour(a, b))?;
        writeln!(f, "As x approaches infinity:")?;
        writeln!(f, "  Both A/x^3 and B/x vanish, so V(x) -> 0")?;
        writeln!(f)?;
        writeln!(f, "Critical point:")?;
        writeln!(
            f,
            "  x_c = sqrt(3A/B) = sqrt({}/{}) = {:.3}",
            3.0 * a,
            b,
            point.position
        )?;
        writeln!(f, "  V(x_c) = {:.3}", point.value)?;
        writeln!(
            f,
            "  V''(x_c) = {:.3} {} 0: {}",
            point.curvature,
            curvature_relation(point.kind),
            point.kind.description()
        )?;
        if !analysis.critical_point_in_range() {
            writeln!(f, "  (outside the plotted interval)")?;
        }

        if !analysis.tabulated.is_empty() {
            writeln!(f)?;
            writeln!(f, "Values at tabulated points:")?;
            for entry in &analysis.tabulated {
                writeln!(
                    f,
                    "  x = {}: V({}) = {:.3}",
                    entry.position, entry.position, entry.potential
                )?;
            }
        }
        Ok(())
    }
}

fn curvature_relation(kind: CriticalKind) -> &'static str {
    match kind {
        CriticalKind::Minimum => ">",
        CriticalKind::Maximum => "<",
        CriticalKind::Indeterminate => "=",
    }
}

fn near_origin_behaviour(a: f64, b: f64) -> &'static str {
    if a > 0.0 {
        "A/x^3 grows faster than B/x, so V(x) -> +infinity"
    } else if a < 0.0 {
        "A/x^3 grows faster than B/x, so V(x) -> -infinity"
    } else if b > 0.0 {
        "Only -B/x remains, so V(x) -> -infinity"
    } else if b < 0.0 {
        "Only -B/x remains, so V(x) -> +infinity"
    } else {
        "V(x) is identically zero"
    }
}
