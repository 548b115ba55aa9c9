//! Short-lived state of the add-book form.
//!
//! A [`FormSession`] is created when the add-book page opens and dropped when
//! it closes, so half-typed values never leak into a later visit.

/// Fields collected by the add-book form, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Year,
}

impl FormField {
    pub const ORDER: [Self; 3] = [Self::Title, Self::Author, Self::Year];

    /// Field name as understood by [`crate::domain::validate`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
        }
    }

    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Title => "Enter the title:",
            Self::Author => "Enter the author:",
            Self::Year => "Enter the publication year:",
        }
    }
}

/// Accepted values typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    title: Option<String>,
    author: Option<String>,
    year: Option<String>,
}

impl FormSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        *self.slot_mut(field) = (!value.is_empty()).then_some(value);
    }

    /// First field still waiting for a value.
    #[must_use]
    pub fn next_missing(&self) -> Option<FormField> {
        FormField::ORDER
            .into_iter()
            .find(|&field| self.get(field).is_none())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.next_missing().is_none()
    }

    /// The three values as `(title, author, year)` once all are set.
    #[must_use]
    pub fn values(&self) -> Option<(&str, &str, &str)> {
        Some((
            self.get(FormField::Title)?,
            self.get(FormField::Author)?,
            self.get(FormField::Year)?,
        ))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot(&self, field: FormField) -> &Option<String> {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Year => &self.year,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Year => &mut self.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_asked_in_order() {
        let mut form = FormSession::new();
        assert_eq!(form.next_missing(), Some(FormField::Title));

        form.set(FormField::Year, "2023");
        assert_eq!(form.next_missing(), Some(FormField::Title));

        form.set(FormField::Title, "Valid Title");
        assert_eq!(form.next_missing(), Some(FormField::Author));

        form.set(FormField::Author, "Valid Author");
        assert!(form.is_complete());
        assert_eq!(form.values(), Some(("Valid Title", "Valid Author", "2023")));
    }

    #[test]
    fn empty_value_leaves_field_missing() {
        let mut form = FormSession::new();
        form.set(FormField::Title, "");
        assert_eq!(form.get(FormField::Title), None);
        assert!(form.values().is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = FormSession::new();
        for field in FormField::ORDER {
            form.set(field, "value");
        }
        form.clear();
        assert_eq!(form, FormSession::new());
    }
}
