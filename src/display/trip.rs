//! Trip display formatting
//!
//! Formats trips for terminal output in table and detail views.

use crate::config::settings::Settings;
use crate::models::{CostVariant, Trip};
use crate::storage::{KeyValueStore, TripStore};

/// Format a list of trips as a table
pub fn format_trip_list(trips: &[&Trip], settings: &Settings) -> String {
    if trips.is_empty() {
        return "No trips found.".to_string();
    }

    let name_width = trips
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<10}  {:<name_width$}  {:<9}  {:<9}  {:>12}  {:>12}\n",
        "ID",
        "Date",
        "Name",
        "Type",
        "Status",
        "Forecast",
        "Actual",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:-<8}  {:-<10}  {:-<name_width$}  {:-<9}  {:-<9}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for trip in trips {
        let actual = if trip.has_actual() {
            settings.format_currency(trip.total(CostVariant::Actual))
        } else {
            "-".to_string()
        };

        output.push_str(&format!(
            "{:<8}  {:<10}  {:<name_width$}  {:<9}  {:<9}  {:>12}  {:>12}\n",
            trip.id.short(),
            trip.date.to_string(),
            trip.name,
            trip.trip_type.as_str(),
            trip.status.as_str(),
            settings.format_currency(trip.total(CostVariant::Forecast)),
            actual,
            name_width = name_width,
        ));
    }

    output
}

/// Format a single trip's details
pub fn format_trip_details<S: KeyValueStore>(trip: &Trip, store: &TripStore<S>) -> String {
    let settings = store.settings();
    let mut output = String::new();

    output.push_str(&format!("Trip: {}\n", trip.name));
    output.push_str(&format!("  ID:       {}\n", trip.id));
    output.push_str(&format!(
        "  Type:     {} ({})\n",
        trip.trip_type,
        trip.trip_type.icon()
    ));
    output.push_str(&format!("  Date:     {}\n", trip.date));
    output.push_str(&format!("  Status:   {}\n", trip.status));

    if let Some(location) = &trip.location {
        output.push_str(&format!(
            "  Location: {} ({:.4}, {:.4})\n",
            location.name, location.lat, location.lng
        ));
        if let Some(address) = &location.address {
            output.push_str(&format!("            {}\n", address));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "  {:<15}  {:>12}  {:>12}\n",
        "Category", "Forecast", "Actual"
    ));
    for (category, forecast) in trip.costs.forecast.iter() {
        let actual = trip
            .costs
            .actual
            .map(|a| settings.format_currency(a.get(category)))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "  {:<15}  {:>12}  {:>12}\n",
            category.label(),
            settings.format_currency(forecast),
            actual
        ));
    }
    let actual_total = if trip.has_actual() {
        settings.format_currency(trip.total(CostVariant::Actual))
    } else {
        "-".to_string()
    };
    output.push_str(&format!(
        "  {:<15}  {:>12}  {:>12}\n",
        "Total",
        settings.format_currency(trip.total(CostVariant::Forecast)),
        actual_total
    ));

    if let Some(progress) = store.budget_progress(trip) {
        output.push_str(&format!("\n  Budget used: {:.0}%\n", progress));
    }

    if let Some(notes) = trip.notes.as_deref().filter(|n| !n.is_empty()) {
        output.push_str(&format!("\n  Notes: {}\n", notes));
    }

    output.push_str(&format!(
        "\n  Created: {}\n  Updated: {}\n",
        trip.created_at.format("%Y-%m-%d %H:%M"),
        trip.updated_at.format("%Y-%m-%d %H:%M")
    ));

    output
}

/// Format the headline totals and the upcoming/recent trip lists
pub fn format_summary<S: KeyValueStore>(store: &TripStore<S>) -> String {
    let settings = store.settings();
    let forecast = store.calculate_grand_total(CostVariant::Forecast);
    let actual = store.calculate_grand_total(CostVariant::Actual);

    let mut output = String::new();
    output.push_str(&format!(
        "Grand Total: {}\n",
        settings.format_currency(store.headline_total())
    ));
    output.push_str(&format!("  Forecast:  {}\n", settings.format_currency(forecast)));
    if actual > 0.0 {
        output.push_str(&format!("  Actual:    {}\n", settings.format_currency(actual)));
    }
    output.push_str(&format!("  Trips:     {}\n", store.trips().len()));

    output.push_str("\nUpcoming\n");
    output.push_str(&format_trip_list(&store.upcoming_trips(5), settings));

    output.push_str("\nRecently completed\n");
    output.push_str(&format_trip_list(&store.recent_completed(3), settings));

    output
}

/// Format the settings record
pub fn format_settings(settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Settings\n");
    match settings.known_currency() {
        Some(known) => output.push_str(&format!(
            "  Currency:          {} ({})\n",
            settings.currency, known.name
        )),
        None => output.push_str(&format!("  Currency:          {}\n", settings.currency)),
    }
    output.push_str(&format!("  Symbol:            {}\n", settings.currency_symbol));
    output.push_str(&format!("  Decimal places:    {}\n", settings.decimal_places));
    output.push_str(&format!(
        "  Default trip type: {}\n",
        settings.default_trip_type
    ));
    output.push_str(&format!(
        "  Example:           {}\n",
        settings.format_currency(1234.5)
    ));
    output
}
