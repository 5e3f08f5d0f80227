use chrono::{DateTime, Local, Timelike};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{
    point::PricePoint,
    tier::{Tier, TierLabel, Tiers},
    zone::Zone,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_zones_table(zones: &[Zone], selected: Option<&Zone>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Zone", ""]);
    for zone in zones {
        let is_selected = selected.is_some_and(|selected| selected.id == zone.id);
        table.add_row(vec![
            Cell::new(zone.id).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(&zone.name),
            Cell::new(if is_selected { "selected" } else { "" }).fg(Color::Green),
        ]);
    }
    table
}

pub fn build_tiers_table(tiers: &Tiers) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Tier", "Price", "When"]);
    for tier in tiers.display_order() {
        table.add_row(vec![
            Cell::new(tier.label.title()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2} €/MWh", tier.price))
                .set_alignment(CellAlignment::Right)
                .fg(tier_color(tier.label)),
            when_cell(tier),
        ]);
    }
    table
}

const fn tier_color(label: TierLabel) -> Color {
    match label {
        TierLabel::Maximum => Color::Red,
        TierLabel::Mean => Color::Green,
        TierLabel::Minimum => Color::Blue,
    }
}

fn when_cell(tier: &Tier) -> Cell {
    match tier.occurred_at {
        Some(time) => Cell::new(time.format("%H:%M")),
        None => Cell::new("daily average").add_attribute(Attribute::Dim),
    }
}

/// Hourly curve of the zone, against the mean and with the current hour marked.
pub fn build_hourly_table(points: &[PricePoint], mean: f64, now: DateTime<Local>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Hour", "Price", ""]);
    for point in points {
        let is_now = point.time.with_timezone(&Local).hour() == now.hour();
        table.add_row(vec![
            Cell::new(point.time.format("%-H")).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2} €/MWh", point.value))
                .set_alignment(CellAlignment::Right)
                .fg(if point.value >= mean { Color::Red } else { Color::Green }),
            if is_now {
                Cell::new(format!("◀ {}h", now.format("%H:%M"))).fg(Color::Red)
            } else {
                Cell::new("")
            },
        ]);
    }
    table
}
