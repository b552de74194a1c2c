use thiserror::Error;

#[derive(Error, Debug)]
pub enum MortgageError {
    #[error("Calculation overflow in '{0}': the inputs are too large to represent")]
    Overflow(String),
}
