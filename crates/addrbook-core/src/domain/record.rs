use crate::domain::{Birthday, Name, Phone};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<Phone, CoreError> {
        let phone = Phone::new(raw)?;
        let idx = self
            .position(&phone)
            .ok_or_else(|| CoreError::PhoneNotFound(raw.to_string()))?;
        Ok(self.phones.remove(idx))
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let old_phone = Phone::new(old)?;
        let new_phone = Phone::new(new)?;
        let idx = self
            .position(&old_phone)
            .ok_or_else(|| CoreError::PhoneNotFound(old.to_string()))?;
        self.phones[idx] = new_phone;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Result<Option<&Phone>, CoreError> {
        let phone = Phone::new(raw)?;
        Ok(self.phones.iter().find(|candidate| **candidate == phone))
    }

    pub fn add_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    fn position(&self, phone: &Phone) -> Option<usize> {
        self.phones.iter().position(|candidate| candidate == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{birthday}"),
            None => f.write_str("not specified"),
        }
    }
}
