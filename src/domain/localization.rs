//! Brazilian-Portuguese copy rendered into notification and mail content.

use chrono::{DateTime, Datelike, Timelike, Utc};

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Render a booking date as `dia DD de <mês>, às H:MMh`.
pub fn format_booking_date(date: DateTime<Utc>) -> String {
    let month = MONTHS_PT
        .get(date.month0() as usize)
        .copied()
        .unwrap_or("mês");
    format!(
        "dia {:02} de {month}, às {}:{:02}h",
        date.day(),
        date.hour(),
        date.minute()
    )
}

/// Compose the provider-facing notification content for a new booking.
pub fn booking_notification(client_name: &str, date: DateTime<Utc>) -> String {
    format!(
        "Novo agendamento de {client_name} para {}",
        format_booking_date(date)
    )
}
