use nanakshahi::{current_gregorian_date, current_nanakshahi_date, Language, MonthSpan};

fn main() -> Result<(), nanakshahi::CalendarError> {
    let civil = current_gregorian_date();
    let today = current_nanakshahi_date()?;
    let span = MonthSpan::new(today.year, today.month)?;

    println!("Gregorian:  {} ({}, {})", civil, civil.day_name(), civil.month_name());
    println!("Nanakshahi: {today} ({})", today.month_name_in(Language::Punjabi));
    println!("Month:      {span}, {} days, starts on {}", span.len(), span.first_weekday());
    Ok(())
}
