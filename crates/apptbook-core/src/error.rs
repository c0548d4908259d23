use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Tags names should be alphanumeric")]
    InvalidTagName,
    #[error("person name is required")]
    EmptyPersonName,
    #[error("appointment name is required")]
    EmptyAppointmentName,
}
