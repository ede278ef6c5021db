use bookmail::FormFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Email,
    Number,
    TextArea,
}

impl FieldType {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldType::Text | FieldType::TextArea => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
        }
    }
}

/// The inputs of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    BookName,
    BookQuantity,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Phone,
        ContactField::Email,
        ContactField::BookName,
        ContactField::BookQuantity,
        ContactField::Message,
    ];

    /// Input name, also the template parameter it is delivered as.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "user_name",
            ContactField::Phone => "user_phone",
            ContactField::Email => "user_email",
            ContactField::BookName => "book_name",
            ContactField::BookQuantity => "book_quantity",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Phone => "Phone",
            ContactField::Email => "Email",
            ContactField::BookName => "Book Name",
            ContactField::BookQuantity => "Book Quantity",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Enter your name",
            ContactField::Phone => "Enter your phone number",
            ContactField::Email => "Enter your email",
            ContactField::BookName => "Enter the book name",
            ContactField::BookQuantity => "Enter book quantity",
            ContactField::Message => "Write your message",
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            ContactField::Email => FieldType::Email,
            ContactField::BookQuantity => FieldType::Number,
            ContactField::Message => FieldType::TextArea,
            _ => FieldType::Text,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ContactField::BookName)
    }

    pub fn value<'a>(&self, fields: &'a FormFields) -> &'a str {
        match self {
            ContactField::Name => &fields.user_name,
            ContactField::Phone => &fields.user_phone,
            ContactField::Email => &fields.user_email,
            ContactField::BookName => &fields.book_name,
            ContactField::BookQuantity => &fields.book_quantity,
            ContactField::Message => &fields.message,
        }
    }

    pub fn assign(&self, fields: &mut FormFields, value: String) {
        let slot = match self {
            ContactField::Name => &mut fields.user_name,
            ContactField::Phone => &mut fields.user_phone,
            ContactField::Email => &mut fields.user_email,
            ContactField::BookName => &mut fields.book_name,
            ContactField::BookQuantity => &mut fields.book_quantity,
            ContactField::Message => &mut fields.message,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_and_read_back() {
        let mut fields = FormFields::default();
        for (index, field) in ContactField::ALL.iter().enumerate() {
            field.assign(&mut fields, format!("value-{}", index));
        }
        assert_eq!(fields.user_name, "value-0");
        assert_eq!(fields.book_quantity, "value-4");
        for (index, field) in ContactField::ALL.iter().enumerate() {
            assert_eq!(field.value(&fields), format!("value-{}", index));
        }
    }

    #[test]
    fn test_only_book_name_is_required() {
        let required: Vec<_> = ContactField::ALL
            .iter()
            .filter(|field| field.is_required())
            .collect();
        assert_eq!(required, vec![&ContactField::BookName]);
    }

    #[test]
    fn test_input_types() {
        assert_eq!(ContactField::Email.field_type().input_type(), "email");
        assert_eq!(ContactField::BookQuantity.field_type().input_type(), "number");
        assert_eq!(ContactField::Message.field_type(), FieldType::TextArea);
        assert_eq!(ContactField::Phone.field_type().input_type(), "text");
    }
}
