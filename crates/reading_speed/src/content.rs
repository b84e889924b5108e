pub type ItemId = i64;

/// Article as handed over by the host. Only read, never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentItem {
    pub id: ItemId,
    pub body: String,
}

impl ContentItem {
    pub fn new(id: ItemId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}
