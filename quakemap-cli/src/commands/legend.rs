//! Legend command - print the magnitude band table.

use quakemap::classify::{radius_for_magnitude, BANDS};
use quakemap::layers::{LayerGroup, EARTHQUAKES};
use quakemap::legend::{build_legend, Legend};

use crate::error::CliError;

/// Run the legend command.
pub fn run() -> Result<(), CliError> {
    let legend = build_legend(&LayerGroup::new(EARTHQUAKES));
    print!("{}", format_legend(&legend));
    Ok(())
}

/// Formats the legend as a plain-text table.
fn format_legend(legend: &Legend) -> String {
    let mut out = format!("{}\n", legend.title);
    out.push_str(&"=".repeat(legend.title.len()));
    out.push('\n');
    out.push('\n');
    out.push_str(&format!("  {:<6} {:<8} {}\n", "Band", "Color", "Magnitude"));

    for (i, (entry, band)) in legend.entries.iter().zip(BANDS.iter()).enumerate() {
        let upper = BANDS.get(i + 1).and_then(|next| next.lower_exclusive);
        let range = match (band.lower_exclusive, upper) {
            (Some(lower), Some(upper)) => format!("> {} and <= {}", lower, upper),
            (Some(lower), None) => format!("> {}", lower),
            (None, Some(upper)) => format!("<= {}", upper),
            (None, None) => "any".to_string(),
        };
        out.push_str(&format!("  {:<6} {:<8} {}\n", entry.label, entry.color.as_str(), range));
    }

    out.push('\n');
    out.push_str(&format!(
        "Marker radius is {} px per magnitude unit.\n",
        radius_for_magnitude(1.0)
    ));
    out
}
