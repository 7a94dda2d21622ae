#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    SerializeQuery(#[from] serde_html_form::ser::Error),
}
