use std::f64::consts::{PI, TAU};

const MM_PER_INCH: f64 = 25.4;

#[inline]
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

#[inline]
pub fn to_radians(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

#[inline]
pub fn to_degrees(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Wrap an angle into [0, 2π).
#[inline]
pub fn normalize_angle(rad: f64) -> f64 {
    let a = rad.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}

// Screen size from the diagonal of a fixed-ratio rectangle:
// diagonal² = width² + height², width = aspect · height
pub fn screen_height(diagonal_in: f64, aspect_ratio: f64) -> f64 {
    ((diagonal_in * MM_PER_INCH).powi(2) / (1.0 + aspect_ratio.powi(2))).sqrt()
}

pub fn screen_width(diagonal_in: f64, aspect_ratio: f64) -> f64 {
    screen_height(diagonal_in, aspect_ratio) * aspect_ratio
}

/// Angle subtended at the center by an arc of `length` on a circle of `radius`.
#[inline]
pub fn arc_angle(length: f64, radius: f64) -> f64 {
    length / radius
}

pub fn chord_length(length: f64, radius: f64) -> f64 {
    2.0 * radius * (arc_angle(length, radius) / 2.0).sin()
}

pub fn sagitta(length: f64, radius: f64) -> f64 {
    radius * (1.0 - (arc_angle(length, radius) / 2.0).cos())
}

/// Footprint width of an arc. Once the arc wraps past a semicircle the
/// widest extent is the diameter.
pub fn arc_width(length: f64, radius: f64) -> f64 {
    if length < radius * PI {
        chord_length(length, radius).round()
    } else {
        radius * 2.0
    }
}

/// Footprint depth of an arc, measured from the chord through its ends to
/// the apex. Arcs longer than a semicircle are reflected onto the far side
/// and arcs longer than the full circumference saturate at the diameter.
pub fn arc_depth(length: f64, radius: f64) -> f64 {
    let half_turn = PI * radius;
    let full_turn = TAU * radius;

    let mut effective = length;
    if length > half_turn {
        effective = full_turn - length;
    }
    if length > full_turn {
        effective = full_turn;
    }

    let half_chord = chord_length(effective, radius) / 2.0;
    // Rounding can push the half chord a hair past the radius
    let radicand = clamp(radius.powi(2) - half_chord.powi(2), 0.0, radius.powi(2));
    let depth = (radius - radicand.sqrt()).round();

    if length > half_turn {
        2.0 * radius - depth
    } else {
        depth
    }
}

/// In-radius of a regular hexagon. Used as the reference "ideal" arc for
/// flat setups.
pub fn hexagon_inradius(side: f64) -> f64 {
    3.0_f64.sqrt() / 2.0 * side
}

/// Sideways extent of a wing panel rotated `wing_angle_deg` away from the
/// center panel plane (0° coplanar, 90° closed box).
pub fn angled_monitor_width(panel_width: f64, wing_angle_deg: f64) -> f64 {
    panel_width * to_radians(90.0 - wing_angle_deg).sin()
}

/// Forward (towards the viewer) extent of a rotated wing panel.
pub fn angled_monitor_height(panel_width: f64, wing_angle_deg: f64) -> f64 {
    panel_width * to_radians(90.0 - wing_angle_deg).cos()
}

pub fn curved_horizontal_fov(length: f64, distance: f64, radius: f64) -> f64 {
    (chord_length(length, radius) / 2.0).atan2(distance - sagitta(length, radius)) * 2.0
}

/// Vertical FOV of a panel of the given height. Independent of curvature.
pub fn curved_vertical_fov(panel_height: f64, distance: f64) -> f64 {
    2.0 * (panel_height / (2.0 * distance)).atan()
}

/// Horizontal FOV of a flat setup. When the wings reach past the viewer the
/// raw angle goes negative and is lifted into a reflex angle.
pub fn flat_horizontal_fov(setup_width: f64, setup_depth: f64, distance: f64) -> f64 {
    let offset_x = setup_width / 2.0;
    let offset_y = distance - setup_depth;
    let angle = (offset_x / offset_y).atan() * 2.0;
    if angle < 0.0 { angle + TAU } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    #[test]
    fn degrees_radians_round_trip() {
        for &x in &[0.0, 1.0, -45.0, 90.0, 180.0, 359.99, 1234.5, -1e6, 1e-9] {
            assert!(approx(to_degrees(to_radians(x)), x, 1e-9 * x.abs().max(1.0)));
        }
        assert!(approx(to_radians(180.0), PI, 1e-15));
    }

    #[test]
    fn normalize_angle_wraps_into_range() {
        assert!(approx(normalize_angle(-PI / 2.0), 1.5 * PI, 1e-12));
        assert!(approx(normalize_angle(TAU), 0.0, 1e-12));
        assert!(approx(normalize_angle(5.0 * PI), PI, 1e-12));
        let tiny = normalize_angle(-1e-18);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn clamp_bounds_values() {
        assert_eq!(clamp(1.5, -1.0, 1.0), 1.0);
        assert_eq!(clamp(-1.0000001, -1.0, 1.0), -1.0);
        assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
    }

    #[test]
    fn screen_size_32_inch_16_9() {
        let h = screen_height(32.0, 16.0 / 9.0);
        let w = screen_width(32.0, 16.0 / 9.0);
        assert!(approx(h, 398.4, 0.3), "h={h}");
        assert!(approx(w, 708.4, 0.5), "w={w}");
    }

    #[test]
    fn screen_size_satisfies_pythagoras() {
        for &(d, r) in &[(24.0, 1.25), (32.0, 16.0 / 9.0), (49.0, 32.0 / 9.0), (85.0, 0.5)] {
            let w = screen_width(d, r);
            let h = screen_height(d, r);
            let diag = d * 25.4;
            assert!(approx(w * w + h * h, diag * diag, 1e-6 * diag * diag));
            assert!(approx(w / h, r, 1e-12));
        }
    }

    #[test]
    fn single_curved_panel_angle_and_chord() {
        assert!(approx(arc_angle(718.0, 1500.0), 0.4787, 1e-4));
        assert!(approx(chord_length(718.0, 1500.0), 711.2, 0.1));
    }

    #[test]
    fn sagitta_matches_circle_geometry() {
        let r = 1500.0;
        let l = 2154.0;
        let half_chord = chord_length(l, r) / 2.0;
        let s = sagitta(l, r);
        // (r - s)² + (c/2)² = r²
        assert!(approx((r - s).powi(2) + half_chord.powi(2), r * r, 1e-6));
    }

    #[test]
    fn arc_width_saturates_at_diameter() {
        let r = 1000.0;
        assert_eq!(arc_width(r * PI, r), 2.0 * r);
        assert_eq!(arc_width(r * PI + 1.0, r), 2.0 * r);
        assert_eq!(arc_width(10.0 * r, r), 2.0 * r);
    }

    #[test]
    fn arc_width_increases_below_half_turn() {
        let r = 1500.0;
        let mut prev = arc_width(100.0, r);
        let mut l = 300.0;
        while l < 0.9 * PI * r {
            let w = arc_width(l, r);
            assert!(w > prev, "l={l} w={w} prev={prev}");
            prev = w;
            l += 200.0;
        }
    }

    #[test]
    fn arc_depth_is_continuous_at_half_and_full_turn() {
        let r = 1500.0;
        let half = PI * r;
        let full = TAU * r;
        assert!(approx(arc_depth(half - 1e-6, r), arc_depth(half + 1e-6, r), 1.0));
        assert!(approx(arc_depth(half, r), r, 1e-9));
        assert!(approx(arc_depth(full - 1e-6, r), arc_depth(full + 1e-6, r), 1.0));
        assert_eq!(arc_depth(full, r), 2.0 * r);
        assert_eq!(arc_depth(3.0 * full, r), 2.0 * r);
    }

    #[test]
    fn arc_depth_of_triple_curved_setup_is_inside_the_circle() {
        let d = arc_depth(2154.0, 1500.0);
        assert!(d > 0.0 && d < 3000.0, "d={d}");
        // Below a half turn the depth is the rounded sagitta
        assert_eq!(d, sagitta(2154.0, 1500.0).round());
    }

    #[test]
    fn arc_depth_past_half_turn_exceeds_radius() {
        let r = 800.0;
        let d = arc_depth(1.5 * PI * r, r);
        assert!(d > r && d < 2.0 * r);
    }

    #[test]
    fn hexagon_inradius_basic() {
        assert!(approx(hexagon_inradius(2.0), 3.0_f64.sqrt(), 1e-12));
        assert!(approx(hexagon_inradius(718.0), 621.8, 0.1));
    }

    #[test]
    fn angled_monitor_at_sixty_degrees() {
        assert!(approx(angled_monitor_width(718.0, 60.0), 359.0, 1e-9));
        assert!(approx(angled_monitor_height(718.0, 60.0), 621.8, 0.1));
    }

    #[test]
    fn angled_monitor_extremes() {
        assert!(approx(angled_monitor_width(700.0, 0.0), 700.0, 1e-9));
        assert!(approx(angled_monitor_height(700.0, 0.0), 0.0, 1e-9));
        assert!(approx(angled_monitor_width(700.0, 90.0), 0.0, 1e-9));
        assert!(approx(angled_monitor_height(700.0, 90.0), 700.0, 1e-9));
    }

    #[test]
    fn flat_fov_of_coplanar_panel() {
        // 1000 mm wide at 500 mm: half-angle 45°
        let fov = flat_horizontal_fov(1000.0, 0.0, 500.0);
        assert!(approx(fov, PI / 2.0, 1e-12));
    }

    #[test]
    fn flat_fov_becomes_reflex_when_wings_pass_the_viewer() {
        let fov = flat_horizontal_fov(1000.0, 800.0, 500.0);
        assert!(fov > PI && fov < TAU, "fov={fov}");
    }

    #[test]
    fn fov_decreases_with_distance() {
        let mut prev_h_flat = f64::INFINITY;
        let mut prev_h_curved = f64::INFINITY;
        let mut prev_v = f64::INFINITY;
        let mut d = 150.0;
        while d <= 1800.0 {
            let hf = flat_horizontal_fov(1436.0, 622.0, d);
            let hc = curved_horizontal_fov(2154.0, d, 1500.0);
            let v = curved_vertical_fov(408.0, d);
            assert!(hf < prev_h_flat, "flat d={d}");
            assert!(hc < prev_h_curved, "curved d={d}");
            assert!(v < prev_v, "vertical d={d}");
            prev_h_flat = hf;
            prev_h_curved = hc;
            prev_v = v;
            d += 50.0;
        }
    }

    #[test]
    fn curved_fov_from_arc_center_is_the_arc_angle() {
        // A viewer at the center of curvature sees exactly the subtended angle
        let fov = curved_horizontal_fov(2154.0, 1500.0, 1500.0);
        assert!(approx(fov, arc_angle(2154.0, 1500.0), 1e-12));
    }
}
