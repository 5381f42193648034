use crate::commands::{CommandResult, Context};
use crate::error::CommandError;
use addrbook_core::BIRTHDAY_FORMAT;
use chrono::NaiveDate;

pub fn add_birthday(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    let [name, birthday, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    let record = ctx
        .book
        .find_mut(name)
        .ok_or_else(CommandError::contact_not_found)?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

pub fn show_birthday(ctx: &Context<'_>, args: &[&str]) -> CommandResult {
    let [name, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    let record = ctx
        .book
        .find(name)
        .ok_or_else(CommandError::contact_not_found)?;
    let birthday = record
        .birthday()
        .map(ToString::to_string)
        .unwrap_or_else(|| "not specified".to_string());
    Ok(format!("Name: {}, birthday: {}", record.name(), birthday))
}

pub fn upcoming(ctx: &Context<'_>, today: NaiveDate) -> CommandResult {
    let upcoming = ctx.book.get_upcoming_birthdays(today, ctx.window_days);
    if upcoming.is_empty() {
        return Ok(format!(
            "No birthdays in the next {} days.",
            ctx.window_days
        ));
    }
    let lines: Vec<String> = upcoming
        .iter()
        .map(|entry| {
            format!(
                "Name: {}, birthday: {}, congratulation date: {}",
                entry.name,
                entry.birthday,
                entry.congratulation_date.format(BIRTHDAY_FORMAT)
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
