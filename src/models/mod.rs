pub mod form_document;
pub mod shared_fields;
