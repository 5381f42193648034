use crate::commands::{CommandResult, Context};
use crate::error::CommandError;
use addrbook_core::{Name, Phone, Record};

pub fn add_contact(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    let [name, phone, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    match ctx.book.find_mut(name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            let mut record = Record::new(Name::new(name)?);
            record.add_phone(phone)?;
            ctx.book.add_record(record);
        }
    }
    Ok("Contact added.".to_string())
}

pub fn change_contact(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    let [name, old_phone, new_phone, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    let record = ctx
        .book
        .find_mut(name)
        .ok_or_else(CommandError::contact_not_found)?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

pub fn show_phone(ctx: &Context<'_>, args: &[&str]) -> CommandResult {
    let [name, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };
    let record = ctx
        .book
        .find(name)
        .ok_or_else(CommandError::contact_not_found)?;
    Ok(record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", "))
}

pub fn show_all(ctx: &Context<'_>) -> CommandResult {
    if ctx.book.is_empty() {
        return Ok("No contacts available.".to_string());
    }
    Ok(ctx.book.to_string())
}
