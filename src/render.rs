// src/render.rs

//! Text rendering of lanes according to a `DisplayConfig`.

use crate::config::{DisplayConfig, Radix};
use crate::lanes::{Lane, LaneSet};

fn render_elements(lane: &Lane, config: &DisplayConfig) -> Vec<String> {
    match config.radix {
        Radix::Decimal => lane.values.rendered(),
        Radix::Hex => {
            let digits = (lane.kind.bit_width() / 4) as usize;
            lane.values
                .patterns()
                .map(|bits| format!("0x{:0width$x}", bits, width = digits))
                .collect()
        }
    }
}

/// Renders one lane as `name = {e0<sep>e1<sep>...}`.
pub fn render_lane(lane: &Lane, config: &DisplayConfig) -> String {
    format!(
        "{} = {{{}}}",
        lane.name,
        render_elements(lane, config).join(&config.separator)
    )
}

/// Renders all eight lanes, one per line.
pub fn render_set(set: &LaneSet, config: &DisplayConfig) -> String {
    set.iter()
        .map(|lane| render_lane(lane, config))
        .collect::<Vec<_>>()
        .join("\n")
}
