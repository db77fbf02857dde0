mod trait_display;
mod trait_error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub error: String,
}
