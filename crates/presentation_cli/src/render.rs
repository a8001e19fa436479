//! Plain-text rendering of Transiter entities

use chrono::{DateTime, Local, Utc};
use domain::{ActivePeriod, Agency, GeoLocation, Route, Stop, StopTime, System};

/// One line per system: id, status and name
pub fn system_line(system: &System) -> String {
    let mut line = format!("{:<24} {:<14} {}", system.id, system.status, system.name);
    if let Some(count) = system.stop_count() {
        line.push_str(&format!(" ({count} stops)"));
    }
    if !system.status.is_serving() {
        line.push_str(" [no data]");
    }
    line
}

pub fn agency_block(agency: &Agency) -> String {
    let mut out = format!("{} [{}]\n  url:      {}\n  timezone: {}\n", agency.name, agency.id, agency.url, agency.timezone);
    let optional = [
        ("phone", &agency.phone),
        ("email", &agency.email),
        ("fares", &agency.fare_url),
        ("language", &agency.language),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            out.push_str(&format!("  {label:<9} {value}\n"));
        }
    }
    out
}

/// One line per route: short name, type and long name
pub fn route_line(route: &Route) -> String {
    let kind = route.route_type.map_or("?", |t| t.label());
    let mut line = format!("{:<6} {:<10} {}", route.display_name(), kind, route.long_name.as_deref().unwrap_or(""));
    if let Some(headway) = route.estimated_headway {
        line.push_str(&format!(" (every ~{} min)", headway / 60));
    }
    line.trim_end().to_string()
}

/// One line per stop; with an origin, the distance to it is appended
pub fn stop_line(stop: &Stop, origin: Option<&GeoLocation>) -> String {
    let kind = stop.stop_type.map_or_else(String::new, |t| t.to_string());
    let mut line = format!("{:<10} {:<16} {}", stop.id, kind, stop.display_name())
        .trim_end()
        .to_string();
    if let (Some(origin), Some(location)) = (origin, stop.location()) {
        line.push_str(&format!(" ({:.0} m)", origin.distance_m(&location)));
    }
    line
}

/// Full stop view: header, served routes, upcoming arrivals and alerts
pub fn stop_detail(stop: &Stop) -> String {
    let mut out = format!("{} [{}]\n", stop.display_name(), stop.id);
    if let Some(location) = stop.location() {
        out.push_str(&format!("  location: {location}\n"));
    }
    if let Some(parent) = &stop.parent_stop {
        out.push_str(&format!("  parent:   {}\n", parent.id));
    }

    let routes = stop.route_ids();
    if !routes.is_empty() {
        out.push_str(&format!("  routes:   {}\n", routes.join(" ")));
    }

    let upcoming: Vec<&StopTime> = stop.stop_times.iter().filter(|st| st.future).collect();
    if !upcoming.is_empty() {
        out.push_str("  arrivals:\n");
        for stop_time in upcoming {
            out.push_str(&format!("    {}\n", arrival_line(stop_time)));
        }
    }

    for alert in &stop.alerts {
        let header = alert.header_in("en").unwrap_or("(no text)");
        out.push_str(&format!("  alert [{}]: {header}", alert.effect));
        if let Some(window) = alert.current_active_period.as_ref().and_then(active_window) {
            out.push_str(&format!(" ({window})"));
        }
        out.push('\n');
    }
    out
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

fn active_window(period: &ActivePeriod) -> Option<String> {
    match (period.starts_at_utc(), period.ends_at_utc()) {
        (Some(start), Some(end)) => Some(format!("{} to {}", local_time(start), local_time(end))),
        (Some(start), None) => Some(format!("from {}", local_time(start))),
        (None, Some(end)) => Some(format!("until {}", local_time(end))),
        (None, None) => None,
    }
}

fn arrival_line(stop_time: &StopTime) -> String {
    let when = stop_time
        .time()
        .map_or_else(|| "--:--".to_string(), |t| t.with_timezone(&Local).format("%H:%M").to_string());
    let route = stop_time
        .trip
        .as_ref()
        .and_then(|trip| trip.route.as_ref())
        .map_or("?", |route| route.id.as_str());
    let mut line = format!("{when} {route:<4}");
    if let Some(headsign) = &stop_time.headsign {
        line.push_str(&format!(" to {headsign}"));
    }
    if let Some(track) = &stop_time.track {
        line.push_str(&format!(" (track {track})"));
    }
    line
}
