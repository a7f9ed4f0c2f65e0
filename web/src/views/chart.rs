//! Minimal inline SVG charts

use shared::ChartDomain;

use super::escape;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 200.0;
const PAD: f64 = 30.0;

/// Line chart of `points` (label, value) over a fixed y domain
pub fn line_chart(points: &[(String, f64)], domain: ChartDomain, stroke: &str) -> String {
    let plot_w = WIDTH - 2.0 * PAD;
    let plot_h = HEIGHT - 2.0 * PAD;
    let step = if points.len() > 1 {
        plot_w / (points.len() - 1) as f64
    } else {
        0.0
    };

    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, (_, value))| {
            let x = PAD + step * i as f64;
            let y = PAD + plot_h * (1.0 - domain.fraction(*value));
            (x, y)
        })
        .collect();

    let polyline: Vec<String> = coords
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect();

    let labels: String = points
        .iter()
        .zip(&coords)
        .map(|((label, value), (x, _))| {
            format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"9\" text-anchor=\"middle\">{}</text>\
                 <title>{}: {:.2}</title>",
                x,
                HEIGHT - 8.0,
                escape(label),
                escape(label),
                value
            )
        })
        .collect();

    format!(
        "<svg viewBox=\"0 0 {w} {h}\" width=\"100%\" role=\"img\">\
         <rect x=\"{pad}\" y=\"{pad}\" width=\"{pw}\" height=\"{ph}\" fill=\"none\" stroke=\"#e5e7eb\" stroke-dasharray=\"3 3\"/>\
         <text x=\"4\" y=\"{pad}\" font-size=\"10\">{max}</text>\
         <text x=\"4\" y=\"{bottom}\" font-size=\"10\">{min}</text>\
         <polyline fill=\"none\" stroke=\"{stroke}\" stroke-width=\"2\" points=\"{points}\"/>\
         {labels}</svg>",
        w = WIDTH,
        h = HEIGHT,
        pad = PAD,
        pw = plot_w,
        ph = plot_h,
        bottom = HEIGHT - PAD,
        max = domain.max,
        min = domain.min,
        stroke = stroke,
        points = polyline.join(" "),
        labels = labels,
    )
}

/// Horizontal bar for a value within a domain
pub fn bar(value: f64, domain: ChartDomain, color: &str) -> String {
    format!(
        "<div class=\"bar\" style=\"width:{:.1}%;background:{}\"></div>",
        domain.fraction(value) * 100.0,
        color
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_chart_points() {
        let points = vec![("a".to_string(), 20.0), ("b".to_string(), 40.0)];
        let svg = line_chart(&points, ChartDomain::new(20.0, 40.0), "#ef4444");
        // first point at the bottom-left, last at the top-right of the plot area
        assert!(svg.contains("points=\"30.0,170.0 450.0,30.0\""));
    }

    #[test]
    fn test_empty_chart() {
        let svg = line_chart(&[], ChartDomain::new(5.0, 8.0), "#a855f7");
        assert!(svg.contains("points=\"\""));
    }
}
