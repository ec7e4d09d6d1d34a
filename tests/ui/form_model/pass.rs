use inputbind::SharedString;
use inputbind::form::{FieldKey, FormModel, FormRecord};

#[derive(Clone, Debug, PartialEq, inputbind::form::FormModel)]
struct ContactForm {
    email: String,
    note: SharedString,
}

fn main() {
    let fields = ContactForm::fields();
    assert_eq!(fields.email().as_str(), "email");
    assert_eq!(ContactForm::FIELD_KEYS, &[FieldKey::new("email"), FieldKey::new("note")]);

    let model = ContactForm {
        email: "a@b.com".to_string(),
        note: "hi".into(),
    };
    let record: FormRecord = model.values().into_iter().collect();
    assert_eq!(ContactForm::from_record(&record), Ok(model));
}
