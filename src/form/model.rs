use gpui::SharedString;

use super::controller::{FieldKey, FormResult};
use super::record::FormRecord;

/// A typed view of a form's fields, usually produced by `#[derive(FormModel)]`.
///
/// `FIELD_KEYS` and `values` list fields in struct declaration order.
pub trait FormModel: Clone + Sized + 'static {
    type Fields;

    const FIELD_KEYS: &'static [FieldKey];

    fn fields() -> Self::Fields;
    fn values(&self) -> Vec<(FieldKey, SharedString)>;
    fn from_record(record: &FormRecord) -> FormResult<Self>;
}
