use chrono::NaiveDate;

use crate::core::model::{non_blank, Language, PhotoRef, TripContext};

/// Photos beyond this prefix never reach the prompt.
pub const MAX_CONTEXT_PHOTOS: usize = 10;

/// Renders trip facts and the leading photos into the context block fed to the prompt.
pub fn build_context(trip: Option<&TripContext>, photos: &[PhotoRef], language: Language) -> String {
    let mut lines = Vec::new();

    if let Some(trip) = trip {
        if let Some(title) = non_blank(Some(trip.title.as_str())) {
            lines.push(format!("Voyage : {}", title));
        }
        if let Some(description) = non_blank(trip.description.as_deref()) {
            lines.push(format!("Description : {}", description));
        }
        if let Some(location) = non_blank(trip.location.as_deref()) {
            lines.push(format!("Destination : {}", location));
        }
        if let Some(start) = trip.start_date {
            lines.push(format!("Date de début : {}", format_date(start, language)));
        }
        if let Some(end) = trip.end_date {
            lines.push(format!("Date de fin : {}", format_date(end, language)));
        }
    }

    if !photos.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("Photos ({}) :", photos.len().min(MAX_CONTEXT_PHOTOS)));
        for (idx, photo) in photos.iter().take(MAX_CONTEXT_PHOTOS).enumerate() {
            lines.push(describe_photo(idx + 1, photo));
        }
    }

    lines.join("\n")
}

fn describe_photo(index: usize, photo: &PhotoRef) -> String {
    let mut parts = Vec::new();
    if let Some(caption) = non_blank(photo.caption.as_deref()) {
        parts.push(caption.to_string());
    }
    if let Some(location) = non_blank(photo.location.as_deref()) {
        parts.push(format!("({})", location));
    }
    if let Some(name) = non_blank(photo.original_name.as_deref()) {
        parts.push(format!("[{}]", name));
    }
    if parts.is_empty() {
        parts.push("Photo".to_string());
    }
    format!("{}. {}", index, parts.join(" "))
}

fn format_date(date: NaiveDate, language: Language) -> String {
    match language {
        Language::French => date.format("%d/%m/%Y").to_string(),
        Language::English => date.format("%-m/%-d/%Y").to_string(),
    }
}
