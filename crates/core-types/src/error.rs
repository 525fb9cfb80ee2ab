use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown field name: '{0}'")]
    UnknownField(String),

    #[error("Malformed field update '{0}', expected <field>=<value>")]
    MalformedUpdate(String),
}
